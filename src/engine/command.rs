//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a key press, pointer
//! gesture, GUI control, or programmatic call — is represented as a
//! [`GimbalCommand`]. Consumers construct commands and pass them to
//! [`SceneEngine::execute`](super::SceneEngine::execute).

use glam::Vec2;

/// Direction of a stepped joint rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointStep {
    /// Counterclockwise (increasing angle).
    Ccw,
    /// Clockwise (decreasing angle).
    Cw,
}

/// A discrete or parameterized operation the engine can perform.
///
/// This is the single, centralized description of what the engine can do
/// interactively. The engine never cares *how* a command was triggered —
/// keyboard, pointer, or script all look identical:
///
/// ```ignore
/// engine.execute(GimbalCommand::ToggleGrab);
/// engine.execute(GimbalCommand::LookDelta { delta });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GimbalCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Steer the look direction by `delta` pixels of pointer movement.
    LookDelta {
        /// Horizontal and vertical pointer delta.
        delta: Vec2,
    },

    /// Return the camera to its home pose.
    ResetCamera,

    // ── Arm ─────────────────────────────────────────────────────────
    /// Select the next arm joint, wrapping at the end of the chain.
    CycleJoint,

    /// Step the selected joint by the configured increment.
    StepJoint {
        /// Rotation direction.
        direction: JointStep,
    },

    /// Set a joint angle directly (slider semantics).
    SetJointAngle {
        /// Joint index, base first.
        joint: usize,
        /// New angle in degrees.
        degrees: f32,
    },

    /// Grab the target if in range, release it if held.
    ToggleGrab,
}
