use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Discrete engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings]
/// Space = "toggle_grab"
/// KeyV = "toggle_view_mode"
/// ```
///
/// Only discrete actions are bindable; continuous movement comes from the
/// held-key state, and look deltas from the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Grab the target if in range, release it if held.
    ToggleGrab,
    /// Switch between first- and third-person pointer gating.
    ToggleViewMode,
    /// Return the camera to its home pose.
    ResetCamera,
    /// Select the next arm joint (wrapping).
    CycleJoint,
    /// Step the selected joint counterclockwise.
    StepJointCcw,
    /// Step the selected joint clockwise.
    StepJointCw,
}

/// Signed movement request for one frame, derived from held keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementInput {
    /// Move along the camera forward vector.
    pub forward: bool,
    /// Move against the camera forward vector.
    pub backward: bool,
    /// Strafe against the camera right vector.
    pub left: bool,
    /// Strafe along the camera right vector.
    pub right: bool,
}

impl MovementInput {
    /// Forward axis in [-1, 1]: forward minus backward.
    #[must_use]
    pub fn forward_axis(self) -> f32 {
        let mut axis = 0.0;
        if self.forward {
            axis += 1.0;
        }
        if self.backward {
            axis -= 1.0;
        }
        axis
    }

    /// Strafe axis in [-1, 1]: right minus left.
    #[must_use]
    pub fn strafe_axis(self) -> f32 {
        let mut axis = 0.0;
        if self.right {
            axis += 1.0;
        }
        if self.left {
            axis -= 1.0;
        }
        axis
    }

    /// Whether no movement is requested.
    #[must_use]
    pub fn is_idle(self) -> bool {
        !(self.forward || self.backward || self.left || self.right)
    }
}

/// Tracks which physical keys are currently held.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format: `"KeyW"`,
/// `"Space"`, `"ArrowLeft"`, etc. Movement keys are fixed WASD; everything
/// else is interesting only to the binding map.
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    held: HashSet<String>,
}

impl KeyState {
    /// Create an empty key state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press.
    pub fn press(&mut self, key: &str) {
        let _ = self.held.insert(key.to_owned());
    }

    /// Record a key release.
    pub fn release(&mut self, key: &str) {
        let _ = self.held.remove(key);
    }

    /// Whether a key is currently held.
    #[must_use]
    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    /// Movement axes derived from the held WASD keys.
    #[must_use]
    pub fn movement(&self) -> MovementInput {
        MovementInput {
            forward: self.is_held("KeyW"),
            backward: self.is_held("KeyS"),
            left: self.is_held("KeyA"),
            right: self.is_held("KeyD"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_cancel_when_opposing_keys_held() {
        let mut keys = KeyState::new();
        keys.press("KeyW");
        keys.press("KeyS");
        let movement = keys.movement();
        assert_eq!(movement.forward_axis(), 0.0);
        assert!(!movement.is_idle());
    }

    #[test]
    fn release_clears_held_keys() {
        let mut keys = KeyState::new();
        keys.press("KeyD");
        assert_eq!(keys.movement().strafe_axis(), 1.0);
        keys.release("KeyD");
        assert!(keys.movement().is_idle());
        assert_eq!(keys.movement().strafe_axis(), 0.0);
    }

    #[test]
    fn idle_by_default() {
        let keys = KeyState::new();
        assert!(keys.movement().is_idle());
        assert_eq!(keys.movement().forward_axis(), 0.0);
    }

    #[test]
    fn non_movement_keys_do_not_affect_axes() {
        let mut keys = KeyState::new();
        keys.press("Space");
        keys.press("Tab");
        assert!(keys.movement().is_idle());
        assert!(keys.is_held("Space"));
    }
}
