//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (pointer tracking,
//! drag detection, held keys, the key-binding map, and the first/third-person
//! gating mode). It is the only thing that sits between raw events and the
//! engine's [`execute`](crate::SceneEngine::execute) method.

use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::event::{InputEvent, MouseButton};
use super::keyboard::{KeyAction, KeyState, MovementInput};
use super::mouse::PointerTracker;
use crate::camera::ViewMode;
use crate::engine::command::{GimbalCommand, JointStep};

/// Maps physical key strings to [`KeyAction`] variants.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format:
/// `"Space"`, `"Tab"`, `"ArrowLeft"`, etc. Serializes as a plain table so
/// TOML presets read naturally:
///
/// ```toml
/// [keybindings]
/// Space = "toggle_grab"
/// Tab = "cycle_joint"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct KeyBindings {
    /// Forward map: key string → action.
    bindings: HashMap<String, KeyAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("Space".into(), KeyAction::ToggleGrab),
            ("KeyV".into(), KeyAction::ToggleViewMode),
            ("KeyQ".into(), KeyAction::ResetCamera),
            ("Tab".into(), KeyAction::CycleJoint),
            ("ArrowLeft".into(), KeyAction::StepJointCcw),
            ("ArrowRight".into(), KeyAction::StepJointCw),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the action for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.bindings.get(key).copied()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// InputProcessor
// ─────────────────────────────────────────────────────────────────────────────

/// Converts raw pointer/key input into [`GimbalCommand`]s.
///
/// Pointer gating depends on the current [`ViewMode`]: first-person applies
/// every pointer delta to the look direction; third-person only applies
/// deltas while the primary button is dragging. Switching modes re-arms the
/// pointer tracker's first-sample latch so the view never jumps.
///
/// # Usage
///
/// ```ignore
/// // In the frame loop:
/// if let Some(cmd) = input.handle_event(event) {
///     engine.execute(cmd);
/// }
/// engine.advance(dt, input.movement());
/// ```
#[derive(Debug, Clone)]
pub struct InputProcessor {
    /// Pointer tracking and drag state.
    pointer: PointerTracker,
    /// Held-key state for continuous movement.
    keys: KeyState,
    /// Key string → action mapping.
    key_bindings: KeyBindings,
    /// Current pointer gating mode.
    view_mode: ViewMode,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pointer: PointerTracker::new(),
            keys: KeyState::new(),
            key_bindings: KeyBindings::default(),
            view_mode: ViewMode::default(),
            mouse_pressed: false,
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeyBindings) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Current pointer gating mode.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Set the pointer gating mode, re-arming the first-sample latch.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
        self.pointer.reset();
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeyBindings {
        &self.key_bindings
    }

    /// Mutable access to the key bindings for reconfiguration.
    pub fn key_bindings_mut(&mut self) -> &mut KeyBindings {
        &mut self.key_bindings
    }

    /// Movement axes for this frame, derived from held keys.
    #[must_use]
    pub fn movement(&self) -> MovementInput {
        self.keys.movement()
    }

    /// Process a raw pointer event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<GimbalCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::PointerDelta { dx, dy } => {
                self.look_command(Vec2::new(dx, dy))
            }
            InputEvent::MouseButton { button, pressed } => {
                self.handle_mouse_button(button, pressed);
                None
            }
        }
    }

    /// Record a key press; returns a command for bound discrete actions.
    ///
    /// [`KeyAction::ToggleViewMode`] is handled internally (it only changes
    /// pointer gating) and produces no command.
    pub fn handle_key_press(&mut self, key: &str) -> Option<GimbalCommand> {
        self.keys.press(key);
        match self.key_bindings.lookup(key)? {
            KeyAction::ToggleViewMode => {
                self.set_view_mode(self.view_mode.toggled());
                None
            }
            KeyAction::ToggleGrab => Some(GimbalCommand::ToggleGrab),
            KeyAction::ResetCamera => Some(GimbalCommand::ResetCamera),
            KeyAction::CycleJoint => Some(GimbalCommand::CycleJoint),
            KeyAction::StepJointCcw => Some(GimbalCommand::StepJoint {
                direction: JointStep::Ccw,
            }),
            KeyAction::StepJointCw => Some(GimbalCommand::StepJoint {
                direction: JointStep::Cw,
            }),
        }
    }

    /// Record a key release.
    pub fn handle_key_release(&mut self, key: &str) {
        self.keys.release(key);
    }

    /// Absolute cursor motion: convert to a delta, then gate like any other
    /// pointer motion.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<GimbalCommand> {
        let delta = self.pointer.track(x, y)?;
        self.look_command(delta)
    }

    /// Gate a pointer delta by the current view mode.
    fn look_command(&self, delta: Vec2) -> Option<GimbalCommand> {
        let steering = match self.view_mode {
            ViewMode::FirstPerson => true,
            ViewMode::ThirdPerson => self.pointer.is_dragging(),
        };
        steering.then_some(GimbalCommand::LookDelta { delta })
    }

    /// Primary-button press starts a third-person drag; release ends it.
    fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button != MouseButton::Left {
            return;
        }
        self.mouse_pressed = pressed;
        if pressed {
            if self.view_mode == ViewMode::ThirdPerson {
                self.pointer.begin_drag();
            }
        } else {
            self.pointer.end_drag();
        }
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_person() -> InputProcessor {
        let mut input = InputProcessor::new();
        input.set_view_mode(ViewMode::FirstPerson);
        input
    }

    #[test]
    fn first_person_steers_on_raw_deltas() {
        let mut input = first_person();
        let cmd =
            input.handle_event(InputEvent::PointerDelta { dx: 4.0, dy: -2.0 });
        assert_eq!(
            cmd,
            Some(GimbalCommand::LookDelta {
                delta: Vec2::new(4.0, -2.0)
            })
        );
    }

    #[test]
    fn third_person_ignores_motion_without_drag() {
        let mut input = InputProcessor::new();
        assert_eq!(input.view_mode(), ViewMode::ThirdPerson);
        assert!(input
            .handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 })
            .is_none());
        assert!(input
            .handle_event(InputEvent::CursorMoved { x: 20.0, y: 10.0 })
            .is_none());
    }

    #[test]
    fn third_person_drag_steers_without_a_jump() {
        let mut input = InputProcessor::new();
        // Cursor wanders before the drag starts.
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ =
            input.handle_event(InputEvent::CursorMoved { x: 300.0, y: 9.0 });

        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        });
        // First sample after the drag start is latched, not a jump.
        assert!(input
            .handle_event(InputEvent::CursorMoved { x: 500.0, y: 500.0 })
            .is_none());
        let cmd = input
            .handle_event(InputEvent::CursorMoved { x: 503.0, y: 501.0 });
        assert_eq!(
            cmd,
            Some(GimbalCommand::LookDelta {
                delta: Vec2::new(3.0, 1.0)
            })
        );

        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        });
        let _ =
            input.handle_event(InputEvent::CursorMoved { x: 600.0, y: 600.0 });
        assert!(input
            .handle_event(InputEvent::CursorMoved { x: 610.0, y: 600.0 })
            .is_none());
    }

    #[test]
    fn non_primary_buttons_do_not_start_drags() {
        let mut input = InputProcessor::new();
        let _ = input.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert!(!input.mouse_pressed());
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        assert!(input
            .handle_event(InputEvent::CursorMoved { x: 5.0, y: 0.0 })
            .is_none());
    }

    #[test]
    fn bound_keys_produce_commands() {
        let mut input = InputProcessor::new();
        assert_eq!(
            input.handle_key_press("Space"),
            Some(GimbalCommand::ToggleGrab)
        );
        assert_eq!(
            input.handle_key_press("ArrowLeft"),
            Some(GimbalCommand::StepJoint {
                direction: JointStep::Ccw
            })
        );
        assert_eq!(input.handle_key_press("KeyZ"), None);
    }

    #[test]
    fn view_mode_toggle_is_internal() {
        let mut input = InputProcessor::new();
        assert_eq!(input.view_mode(), ViewMode::ThirdPerson);
        assert_eq!(input.handle_key_press("KeyV"), None);
        assert_eq!(input.view_mode(), ViewMode::FirstPerson);
        assert_eq!(input.handle_key_press("KeyV"), None);
        assert_eq!(input.view_mode(), ViewMode::ThirdPerson);
    }

    #[test]
    fn movement_reflects_held_keys() {
        let mut input = InputProcessor::new();
        assert!(input.handle_key_press("KeyW").is_none());
        assert!(input.handle_key_press("KeyD").is_none());
        let movement = input.movement();
        assert_eq!(movement.forward_axis(), 1.0);
        assert_eq!(movement.strafe_axis(), 1.0);
        input.handle_key_release("KeyW");
        assert_eq!(input.movement().forward_axis(), 0.0);
    }

    #[test]
    fn mode_switch_rearms_the_latch() {
        let mut input = first_person();
        let _ = input.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ =
            input.handle_event(InputEvent::CursorMoved { x: 10.0, y: 0.0 });
        input.set_view_mode(ViewMode::ThirdPerson);
        input.set_view_mode(ViewMode::FirstPerson);
        // First motion after the switches carries no jump.
        assert!(input
            .handle_event(InputEvent::CursorMoved { x: 400.0, y: 400.0 })
            .is_none());
    }
}
