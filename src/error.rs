//! Crate-level error types.

use std::fmt;

/// Errors produced by the gimbal crate.
///
/// The simulation core itself has no recoverable error states: all frame
/// inputs are plain numeric values, and the two numeric boundary conditions
/// (pitch clamp, degenerate strafe direction) resolve to fallbacks. Errors
/// only arise at the configuration boundary.
#[derive(Debug)]
pub enum GimbalError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for GimbalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for GimbalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for GimbalError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
