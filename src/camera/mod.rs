//! Camera system for 3D scene viewing.
//!
//! Provides a yaw/pitch free-look camera with keyboard movement, a
//! first/third-person control mode, and view/projection matrix production
//! for an external rendering backend.

/// Free-look camera controller applying look deltas and movement.
pub mod controller;
/// Core camera struct and the packed uniform type.
pub mod core;

pub use controller::{CameraController, ViewMode};
pub use core::{Camera, CameraUniform, ViewProjection};
