//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera, orbit spawn, arm layout, keybindings)
//! are consolidated here. Options serialize to/from TOML for presets; a
//! JSON schema of the UI-exposed sections is available via [`schemars`].

mod arm;
mod camera;
mod orbit;

use std::path::Path;

pub use arm::ArmOptions;
pub use camera::CameraOptions;
pub use orbit::OrbitOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GimbalError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Orbiting-body spawn and animation parameters.
    pub orbit: OrbitOptions,
    /// Arm chain layout and grab parameters.
    pub arm: ArmOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeyBindings,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, GimbalError> {
        let content = std::fs::read_to_string(path).map_err(GimbalError::Io)?;
        toml::from_str(&content)
            .map_err(|e| GimbalError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), GimbalError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GimbalError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(GimbalError::Io)?;
        }
        std::fs::write(path, content).map_err(GimbalError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
