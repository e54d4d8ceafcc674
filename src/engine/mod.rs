//! The scene engine: owns all dynamic state and advances it once per frame.

/// Command vocabulary for interactive operations.
pub mod command;
/// Per-object uniform packing for the rendering backend.
pub mod uniforms;

use glam::{Mat4, Vec3};

pub use command::{GimbalCommand, JointStep};
pub use uniforms::{Material, ObjectUniform, ShadeMode};

use crate::animation::OrbitAnimator;
use crate::arm::{Arm, GrabOutcome};
use crate::camera::{CameraController, CameraUniform};
use crate::input::MovementInput;
use crate::options::Options;

/// Arm link color for the uniform handoff.
const ARM_COLOR: Vec3 = Vec3::new(0.9, 0.35, 0.15);
/// Target object color for the uniform handoff.
const TARGET_COLOR: Vec3 = Vec3::new(0.0, 0.6, 1.0);

/// Everything the rendering backend needs for one frame.
///
/// Matrices and material terms only; the backend decides what geometry to
/// draw with them.
#[derive(Debug, Clone)]
pub struct FrameUniforms {
    /// Camera view-projection and metadata.
    pub camera: CameraUniform,
    /// One lit uniform per orbiting body.
    pub bodies: Vec<ObjectUniform>,
    /// One unlit uniform per arm link, base first.
    pub arm_links: Vec<ObjectUniform>,
    /// Unlit uniform for the grabbable target.
    pub target: ObjectUniform,
}

/// Owns the camera, orbit animator, and arm, and advances them once per
/// frame.
///
/// Single logical thread of execution: the driving loop calls
/// [`advance`](Self::advance) with the elapsed seconds, feeds interactive
/// operations through [`execute`](Self::execute), then reads
/// [`frame_uniforms`](Self::frame_uniforms). Nothing here blocks or spawns;
/// stopping the loop is the only cancellation needed.
#[derive(Debug)]
pub struct SceneEngine {
    options: Options,
    camera: CameraController,
    orbit: OrbitAnimator,
    arm: Arm,
    material: Material,
    selected_joint: usize,
}

impl SceneEngine {
    /// Build the scene from options. Orbit bodies are randomized here and
    /// live until the engine is dropped.
    #[must_use]
    pub fn new(options: Options) -> Self {
        let camera = CameraController::new(&options.camera);
        let orbit = OrbitAnimator::new(&options.orbit);
        let arm = Arm::new(&options.arm);
        Self {
            options,
            camera,
            orbit,
            arm,
            material: Material::default(),
            selected_joint: 0,
        }
    }

    /// Advance all animated state by `dt` seconds.
    ///
    /// `movement` carries the frame's held-key axes; pointer look input
    /// arrives separately as [`GimbalCommand::LookDelta`] commands.
    pub fn advance(&mut self, dt: f32, movement: MovementInput) {
        self.camera.apply_movement(
            dt,
            movement.forward_axis(),
            movement.strafe_axis(),
        );
        self.orbit.advance(dt);
    }

    /// Perform one interactive operation.
    pub fn execute(&mut self, command: GimbalCommand) {
        match command {
            GimbalCommand::LookDelta { delta } => {
                self.camera.apply_look_delta(delta);
            }
            GimbalCommand::ResetCamera => self.camera.reset(),
            GimbalCommand::CycleJoint => {
                if !self.arm.chain.is_empty() {
                    self.selected_joint =
                        (self.selected_joint + 1) % self.arm.chain.len();
                }
            }
            GimbalCommand::StepJoint { direction } => {
                let step = match direction {
                    JointStep::Ccw => self.options.arm.joint_step,
                    JointStep::Cw => -self.options.arm.joint_step,
                };
                self.arm.chain.step_angle(self.selected_joint, step);
            }
            GimbalCommand::SetJointAngle { joint, degrees } => {
                self.arm.chain.set_angle(joint, degrees);
            }
            GimbalCommand::ToggleGrab => match self.arm.toggle_grab() {
                GrabOutcome::Grabbed => log::debug!("target grabbed"),
                GrabOutcome::Released => log::debug!("target released"),
                GrabOutcome::TooFar { distance } => log::warn!(
                    "grab failed: effector is {distance:.3} from the grab \
                     point (threshold {})",
                    self.arm.threshold()
                ),
            },
        }
    }

    /// Pack the current state into uniforms for the given aspect ratio.
    ///
    /// Matrices always reflect the state at call time; nothing is cached
    /// between frames.
    #[must_use]
    pub fn frame_uniforms(&self, aspect: f32) -> FrameUniforms {
        let matrices = self.camera.camera.compute_matrices(aspect);
        let view_proj = matrices.view_proj();

        let mut camera = CameraUniform::new();
        camera.update_view_proj(&self.camera.camera, aspect);

        let lit = ShadeMode::Lit(self.material);
        let bias = self.orbit.vertical_bias();
        let bodies = self
            .orbit
            .bodies()
            .iter()
            .map(|body| {
                lit.pack(
                    body.model_matrix(bias),
                    view_proj,
                    Vec3::from(body.color),
                )
            })
            .collect();

        let arm_links = self
            .arm
            .chain
            .link_transforms()
            .into_iter()
            .map(|link| {
                let model = Mat4::from_translation(Vec3::new(
                    link.origin.x,
                    link.origin.y,
                    0.0,
                )) * Mat4::from_rotation_z(link.angle.to_radians());
                ShadeMode::Unlit.pack(model, view_proj, ARM_COLOR)
            })
            .collect();

        let pose = self.arm.target_pose();
        let target_model = Mat4::from_translation(Vec3::new(
            pose.position.x,
            pose.position.y,
            0.0,
        )) * Mat4::from_rotation_z(pose.orientation.to_radians());
        let target = ShadeMode::Unlit.pack(target_model, view_proj, TARGET_COLOR);

        FrameUniforms {
            camera,
            bodies,
            arm_links,
            target,
        }
    }

    /// The camera controller.
    #[must_use]
    pub fn camera(&self) -> &CameraController {
        &self.camera
    }

    /// The orbit animator.
    #[must_use]
    pub fn orbit(&self) -> &OrbitAnimator {
        &self.orbit
    }

    /// The arm rig.
    #[must_use]
    pub fn arm(&self) -> &Arm {
        &self.arm
    }

    /// Index of the joint stepped by [`GimbalCommand::StepJoint`].
    #[must_use]
    pub fn selected_joint(&self) -> usize {
        self.selected_joint
    }

    /// The options the scene was built from.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }
}
