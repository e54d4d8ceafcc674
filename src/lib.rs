// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::excessive_nesting)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Frame-loop simulation core for an interactive 3D teaching scene.
//!
//! Gimbal maintains the dynamic state of a small scene (a first/third-person
//! camera, a set of bodies orbiting a center point on spherical trajectories,
//! and a planar robot arm that can grab a nearby object) and advances it
//! once per frame. It produces view/projection matrices and packed uniform
//! values; it never issues draw calls, touches a window system, or owns an
//! event loop. An external frame loop (or the bundled headless demo binary)
//! feeds it elapsed time, pointer deltas, and action signals.
//!
//! # Key entry points
//!
//! - [`engine::SceneEngine`] - owns all scene state, advanced once per frame
//! - [`engine::GimbalCommand`] - the closed vocabulary of interactive
//!   operations
//! - [`input::InputProcessor`] - converts platform events into commands
//! - [`options::Options`] - runtime configuration (camera, orbit, arm,
//!   keybindings)
//!
//! # Frame model
//!
//! Single-threaded and cooperative: the driving loop calls
//! [`SceneEngine::advance`](engine::SceneEngine::advance) with the elapsed
//! seconds, executes any commands produced by input, then reads
//! [`frame_uniforms`](engine::SceneEngine::frame_uniforms) to hand matrices
//! to whatever backend does the drawing. Nothing blocks, nothing spawns;
//! cancellation is simply not calling `advance` again.

pub mod animation;
pub mod arm;
pub mod camera;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod util;

pub use engine::{GimbalCommand, SceneEngine};
pub use error::GimbalError;
