//! Grab test, grab state machine types, and the grabbable target object.

use glam::Vec2;

/// Whether the effector is close enough to grab the target.
///
/// Strictly exclusive at the boundary: a distance exactly equal to
/// `threshold` is not grabbable.
#[inline]
#[must_use]
pub fn is_grabbable(effector: Vec2, target: Vec2, threshold: f32) -> bool {
    effector.distance(target) < threshold
}

/// Whether the arm currently holds the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrabState {
    /// The target moves independently.
    #[default]
    Released,
    /// The target is rigidly attached to the end effector.
    Grabbed,
}

/// Result of an explicit grab or release action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GrabOutcome {
    /// The target is now attached to the effector.
    Grabbed,
    /// The target was let go and reverted to its stored position.
    Released,
    /// The effector was too far from the grab point; state unchanged.
    TooFar {
        /// Measured effector-to-grab-point distance.
        distance: f32,
    },
}

/// The object the arm can pick up.
///
/// While released it has an independently stored root position; while
/// grabbed its pose is *derived* from the effector every frame and the
/// stored position is not consulted.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetObject {
    /// Independent root position (used only while released).
    pub position: Vec2,
    /// Grab point in object-local coordinates.
    pub grab_offset: Vec2,
    /// Object root offset from the effector while attached, in
    /// effector-local coordinates.
    pub attach_offset: Vec2,
}

impl TargetObject {
    /// World-space grab point for the free-standing object.
    #[must_use]
    pub fn free_grab_point(&self) -> Vec2 {
        self.position + self.grab_offset
    }
}
