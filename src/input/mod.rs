//! Platform-agnostic input handling.
//!
//! Raw pointer and key events are plain values; the
//! [`InputProcessor`] converts them into engine commands, owning all
//! transient input state (pointer tracking, drag detection, held keys, the
//! key-binding map, and the first/third-person gating mode).

/// Platform-agnostic input events.
pub mod event;
/// Held-key state, movement axes, and bindable key actions.
pub mod keyboard;
/// Pointer tracking with a first-sample latch and drag state.
pub mod mouse;
/// Converts raw events into engine commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use keyboard::{KeyAction, KeyState, MovementInput};
pub use mouse::PointerTracker;
pub use processor::{InputProcessor, KeyBindings};
