/// Platform-agnostic pointer events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// converts them into [`GimbalCommand`](crate::GimbalCommand) values.
/// Keyboard input goes through the processor's
/// [`handle_key_press`](super::InputProcessor::handle_key_press) /
/// [`handle_key_release`](super::InputProcessor::handle_key_release)
/// methods instead, keyed by physical key strings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Cursor moved to an absolute screen position (unlocked pointer).
    CursorMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// Relative pointer motion (locked/captured pointer).
    PointerDelta {
        /// Horizontal motion in pixels.
        dx: f32,
        /// Vertical motion in pixels (positive = downward).
        dy: f32,
    },
    /// Mouse button pressed or released.
    MouseButton {
        /// Which button changed.
        button: MouseButton,
        /// `true` for press, `false` for release.
        pressed: bool,
    },
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}
