use glam::{Mat4, Vec3};

/// Pitch is clamped short of ±90° so the look-at up vector never flips.
pub const PITCH_LIMIT_DEG: f32 = 89.0;

/// Perspective free-look camera defined by eye position, yaw/pitch look
/// angles, and projection parameters.
///
/// Yaw and pitch are in degrees; the forward vector is derived from them and
/// kept unit length. Yaw −90° looks toward −Z.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub position: Vec3,
    /// Horizontal look angle in degrees.
    yaw: f32,
    /// Vertical look angle in degrees, clamped to [`PITCH_LIMIT_DEG`].
    pitch: f32,
    /// Derived unit forward direction.
    forward: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

/// View and projection matrices for one frame.
///
/// Always freshly computed from the camera's current state; there is no
/// caching to go stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewProjection {
    /// World-to-camera transform.
    pub view: Mat4,
    /// Camera-to-clip transform.
    pub proj: Mat4,
}

impl ViewProjection {
    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_proj(&self) -> Mat4 {
        self.proj * self.view
    }
}

impl Camera {
    /// Create a camera at `position` looking along the given yaw/pitch.
    #[must_use]
    pub fn new(
        position: Vec3,
        yaw: f32,
        pitch: f32,
        fovy: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        let mut camera = Self {
            position,
            yaw,
            pitch,
            forward: Vec3::NEG_Z,
            up: Vec3::Y,
            fovy,
            znear,
            zfar,
        };
        camera.set_angles(yaw, pitch);
        camera
    }

    /// Current horizontal look angle in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current vertical look angle in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Derived unit forward direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Set yaw/pitch, clamp pitch, and recompute the forward vector.
    ///
    /// forward = (cos(pitch)·cos(yaw), sin(pitch), cos(pitch)·sin(yaw)),
    /// normalized.
    pub fn set_angles(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT_DEG, PITCH_LIMIT_DEG);

        let yr = self.yaw.to_radians();
        let pr = self.pitch.to_radians();
        let forward =
            Vec3::new(pr.cos() * yr.cos(), pr.sin(), pr.cos() * yr.sin());
        // The formula already yields a unit vector; normalize anyway to keep
        // the invariant under floating-point drift.
        self.forward = forward.normalize_or(Vec3::NEG_Z);
    }

    /// Unit strafe direction: normalize(forward × up).
    ///
    /// Falls back to +X when the cross product degenerates (forward parallel
    /// to up, only reachable if the pitch clamp is bypassed).
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.forward.cross(self.up).normalize_or(Vec3::X)
    }

    /// Build the view and projection matrices for the given aspect ratio.
    ///
    /// view = look_at(position, position + forward, up);
    /// projection = perspective(fovy, aspect, znear, zfar).
    #[must_use]
    pub fn compute_matrices(&self, aspect: f32) -> ViewProjection {
        ViewProjection {
            view: Mat4::look_at_rh(
                self.position,
                self.position + self.forward,
                self.up,
            ),
            proj: Mat4::perspective_rh(
                self.fovy.to_radians(),
                aspect,
                self.znear,
                self.zfar,
            ),
        }
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// Packed camera data for handoff to a rendering backend.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: 45.0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera, aspect: f32) {
        let matrices = camera.compute_matrices(aspect);
        self.view_proj = matrices.view_proj().to_cols_array_2d();
        self.position = camera.position.to_array();
        self.aspect = aspect;
        self.forward = camera.forward().to_array();
        self.fovy = camera.fovy;
    }
}
