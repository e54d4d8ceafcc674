//! Planar robot arm: joint chain, grab state machine, and target object.
//!
//! The arm is a two-link (by default) planar chain driven by explicit joint
//! commands. A nearby target object can be grabbed when the end effector is
//! within a distance threshold of its grab point; while grabbed, the
//! target's pose is recomputed every frame as a rigid attachment to the
//! effector.

pub mod chain;
pub mod grab;

use glam::Vec2;

pub use chain::{JointChain, Link, LinkTransform};
pub use grab::{is_grabbable, GrabOutcome, GrabState, TargetObject};

use crate::options::ArmOptions;

/// Pose of the target object for one frame: world position plus orientation
/// in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetPose {
    /// Object root position.
    pub position: Vec2,
    /// Object orientation in degrees.
    pub orientation: f32,
}

/// The arm rig: chain, target object, and grab state.
#[derive(Debug, Clone)]
pub struct Arm {
    /// The kinematic chain.
    pub chain: JointChain,
    target: TargetObject,
    state: GrabState,
    threshold: f32,
}

impl Arm {
    /// Build the rig from options.
    #[must_use]
    pub fn new(opts: &ArmOptions) -> Self {
        let links = opts
            .segment_lengths
            .iter()
            .zip(
                opts.initial_angles
                    .iter()
                    .copied()
                    .chain(std::iter::repeat(0.0)),
            )
            .map(|(&length, angle)| Link { angle, length })
            .collect();
        Self {
            chain: JointChain::new(Vec2::from(opts.root), links),
            target: TargetObject {
                position: Vec2::from(opts.target_position),
                grab_offset: Vec2::from(opts.grab_offset),
                attach_offset: Vec2::from(opts.attach_offset),
            },
            state: GrabState::Released,
            threshold: opts.grab_threshold,
        }
    }

    /// Current grab state.
    #[must_use]
    pub fn state(&self) -> GrabState {
        self.state
    }

    /// Whether the target is currently attached to the effector.
    #[must_use]
    pub fn is_grabbed(&self) -> bool {
        self.state == GrabState::Grabbed
    }

    /// The grab distance threshold.
    #[must_use]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Current distance from the end effector to the target's grab point.
    #[must_use]
    pub fn grab_distance(&self) -> f32 {
        self.chain
            .end_effector_position()
            .distance(self.target.free_grab_point())
    }

    /// Whether a grab action would currently succeed.
    #[must_use]
    pub fn can_grab(&self) -> bool {
        is_grabbable(
            self.chain.end_effector_position(),
            self.target.free_grab_point(),
            self.threshold,
        )
    }

    /// Explicit grab action: attach the target if it is within the
    /// threshold; otherwise report the measured distance and stay released.
    /// A no-op returning [`GrabOutcome::Grabbed`] if already grabbed.
    pub fn grab(&mut self) -> GrabOutcome {
        if self.state == GrabState::Grabbed {
            return GrabOutcome::Grabbed;
        }
        if self.can_grab() {
            self.state = GrabState::Grabbed;
            GrabOutcome::Grabbed
        } else {
            GrabOutcome::TooFar {
                distance: self.grab_distance(),
            }
        }
    }

    /// Explicit release action. The target reverts to its independently
    /// stored position, as the original scene does.
    pub fn release(&mut self) -> GrabOutcome {
        self.state = GrabState::Released;
        GrabOutcome::Released
    }

    /// Toggle: grab when released, release when grabbed.
    pub fn toggle_grab(&mut self) -> GrabOutcome {
        match self.state {
            GrabState::Released => self.grab(),
            GrabState::Grabbed => self.release(),
        }
    }

    /// The target's pose for this frame.
    ///
    /// While grabbed this is derived from the current effector position and
    /// chain orientation (rigid attachment) and changes as the chain moves;
    /// the stored position is not consulted. While released it is the stored
    /// position with zero orientation.
    #[must_use]
    pub fn target_pose(&self) -> TargetPose {
        match self.state {
            GrabState::Grabbed => {
                let orientation = self.chain.total_angle();
                let rotated = Vec2::from_angle(orientation.to_radians())
                    .rotate(self.target.attach_offset);
                TargetPose {
                    position: self.chain.end_effector_position() + rotated,
                    orientation,
                }
            }
            GrabState::Released => TargetPose {
                position: self.target.position,
                orientation: 0.0,
            },
        }
    }

    /// Read-only access to the target object.
    #[must_use]
    pub fn target(&self) -> &TargetObject {
        &self.target
    }

    /// Move the free-standing target's root position. Ignored while the
    /// target is grabbed.
    pub fn set_target_position(&mut self, position: Vec2) {
        if self.state == GrabState::Released {
            self.target.position = position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Rig whose effector starts exactly on the grab point.
    fn reachable_arm() -> Arm {
        let opts = ArmOptions {
            root: [0.0, 0.0],
            segment_lengths: vec![1.0, 1.0],
            initial_angles: vec![0.0, 0.0],
            // Effector lands at (2, 0); grab point = position + grab_offset.
            target_position: [2.0, 0.05],
            grab_offset: [0.0, -0.05],
            grab_threshold: 0.2,
            ..ArmOptions::default()
        };
        Arm::new(&opts)
    }

    #[test]
    fn grab_succeeds_within_threshold() {
        let mut arm = reachable_arm();
        assert!(arm.can_grab());
        assert_eq!(arm.grab(), GrabOutcome::Grabbed);
        assert!(arm.is_grabbed());
    }

    #[test]
    fn grab_fails_when_out_of_reach() {
        let mut arm = reachable_arm();
        arm.set_target_position(Vec2::new(5.0, 0.0));
        let outcome = arm.grab();
        match outcome {
            GrabOutcome::TooFar { distance } => {
                assert!((distance - 3.0004165).abs() < 1e-3);
            }
            other => panic!("expected TooFar, got {other:?}"),
        }
        assert!(!arm.is_grabbed());
    }

    #[test]
    fn toggle_walks_the_state_machine() {
        let mut arm = reachable_arm();
        assert_eq!(arm.state(), GrabState::Released);
        assert_eq!(arm.toggle_grab(), GrabOutcome::Grabbed);
        assert_eq!(arm.state(), GrabState::Grabbed);
        assert_eq!(arm.toggle_grab(), GrabOutcome::Released);
        assert_eq!(arm.state(), GrabState::Released);
    }

    #[test]
    fn grabbed_target_follows_the_effector() {
        let mut arm = reachable_arm();
        assert_eq!(arm.grab(), GrabOutcome::Grabbed);

        let before = arm.target_pose();
        arm.chain.set_angle(0, 90.0);
        let after = arm.target_pose();

        assert_ne!(before.position, after.position);
        // Effector swung to (0, 2); attachment offset (0, 0.15) rotated 90°
        // points along −X.
        let effector = arm.chain.end_effector_position();
        assert!((effector - Vec2::new(0.0, 2.0)).length() < 1e-5);
        assert!(
            (after.position - Vec2::new(-0.15, 2.0)).length() < 1e-4,
            "got {:?}",
            after.position
        );
        assert!((after.orientation - 90.0).abs() < 1e-6);
    }

    #[test]
    fn released_target_reverts_to_stored_position() {
        let mut arm = reachable_arm();
        let stored = arm.target_pose().position;
        assert_eq!(arm.grab(), GrabOutcome::Grabbed);
        arm.chain.set_angle(0, 45.0);
        assert_ne!(arm.target_pose().position, stored);
        assert_eq!(arm.release(), GrabOutcome::Released);
        assert_eq!(arm.target_pose().position, stored);
        assert_eq!(arm.target_pose().orientation, 0.0);
    }

    #[test]
    fn target_position_frozen_while_grabbed() {
        let mut arm = reachable_arm();
        assert_eq!(arm.grab(), GrabOutcome::Grabbed);
        let stored = arm.target().position;
        arm.set_target_position(Vec2::new(9.0, 9.0));
        assert_eq!(arm.target().position, stored);
    }

    #[test]
    fn default_rig_matches_scene_layout() {
        let arm = Arm::new(&ArmOptions::default());
        assert_eq!(arm.chain.len(), 2);
        assert_eq!(arm.chain.root(), Vec2::new(0.0, -0.4));
        assert_eq!(arm.threshold(), 0.2);
        assert_eq!(arm.chain.angle(1), Some(30.0));
    }
}
