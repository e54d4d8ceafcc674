use glam::{Vec2, Vec3};

use crate::camera::core::Camera;
use crate::options::CameraOptions;

/// Initial eye position: standing height, a few units back from the origin.
const HOME_POSITION: Vec3 = Vec3::new(0.0, 1.6, 3.0);
/// Initial yaw in degrees, looking toward −Z.
const HOME_YAW: f32 = -90.0;
/// Initial pitch in degrees.
const HOME_PITCH: f32 = 0.0;

/// How pointer input steers the camera.
///
/// The camera math is identical in both modes; the difference is purely how
/// pointer events are gated before they reach
/// [`apply_look_delta`](CameraController::apply_look_delta): first-person
/// applies every delta (pointer-locked style), third-person only applies
/// deltas while a drag is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Pointer deltas always steer the look direction.
    FirstPerson,
    /// Pointer deltas steer the look direction only while dragging.
    #[default]
    ThirdPerson,
}

impl ViewMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::FirstPerson => Self::ThirdPerson,
            Self::ThirdPerson => Self::FirstPerson,
        }
    }
}

/// Applies look deltas and keyboard movement to a [`Camera`].
///
/// Owns the camera plus the control parameters (sensitivity, move speed,
/// vertical-look sign). The vertical sign is configurable because the
/// original control scheme had two entry points that disagreed on it; both
/// conventions are selectable via
/// [`CameraOptions::invert_look_y`](crate::options::CameraOptions).
#[derive(Debug, Clone)]
pub struct CameraController {
    /// The controlled camera.
    pub camera: Camera,
    sensitivity: f32,
    move_speed: f32,
    invert_look_y: bool,
}

impl CameraController {
    /// Create a controller at the home pose with the given options.
    #[must_use]
    pub fn new(opts: &CameraOptions) -> Self {
        Self {
            camera: Camera::new(
                HOME_POSITION,
                HOME_YAW,
                HOME_PITCH,
                opts.fovy,
                opts.znear,
                opts.zfar,
            ),
            sensitivity: opts.sensitivity,
            move_speed: opts.move_speed,
            invert_look_y: opts.invert_look_y,
        }
    }

    /// Apply a pointer delta to the look angles.
    ///
    /// yaw += dx·sensitivity. With `invert_look_y` unset, a downward pointer
    /// motion (positive dy) pitches the view down; with it set, the vertical
    /// term is flipped. Pitch is clamped and the forward vector recomputed by
    /// the camera.
    pub fn apply_look_delta(&mut self, delta: Vec2) {
        let vertical = if self.invert_look_y {
            delta.y
        } else {
            -delta.y
        };
        self.camera.set_angles(
            self.camera.yaw() + delta.x * self.sensitivity,
            self.camera.pitch() + vertical * self.sensitivity,
        );
    }

    /// Move the eye along the forward and strafe directions.
    ///
    /// `forward_axis` and `strafe_axis` are signed inputs in [-1, 1]
    /// (typically derived from held keys). Strafe uses
    /// right = normalize(forward × up), falling back to +X when degenerate.
    pub fn apply_movement(
        &mut self,
        dt: f32,
        forward_axis: f32,
        strafe_axis: f32,
    ) {
        let step = self.move_speed * dt;
        let forward = self.camera.forward();
        let right = self.camera.right();
        self.camera.position += forward * (step * forward_axis);
        self.camera.position += right * (step * strafe_axis);
    }

    /// Return the camera to the home pose, keeping projection parameters.
    pub fn reset(&mut self) {
        self.camera.position = HOME_POSITION;
        self.camera.set_angles(HOME_YAW, HOME_PITCH);
    }
}
