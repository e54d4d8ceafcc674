//! Per-frame animation of the scene's orbiting bodies.
//!
//! Bodies follow independent spherical trajectories around a fixed center,
//! self-rotating as they go. All state is advanced in place by elapsed time;
//! positions are pure functions of the current angles.

pub mod orbit;

pub use orbit::{OrbitAnimator, OrbitBody};
