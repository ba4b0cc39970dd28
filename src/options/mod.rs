//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (orbit control, display resolution, key
//! bindings) are consolidated here and serialize to/from TOML.

mod camera;
mod display;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
use serde::{Deserialize, Serialize};

use crate::error::TurntableError;
use crate::input::KeyBindings;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[camera]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Orbit control parameters.
    pub camera: CameraOptions,
    /// Display resolution parameters.
    pub display: DisplayOptions,
    /// Keyboard binding options for the viewer shell.
    pub keybindings: KeyBindings,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`TurntableError::Io`] when the file cannot be read,
    /// [`TurntableError::OptionsParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, TurntableError> {
        let content =
            std::fs::read_to_string(path).map_err(TurntableError::Io)?;
        toml::from_str(&content)
            .map_err(|e| TurntableError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`TurntableError::OptionsParse`] when serialization fails,
    /// [`TurntableError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), TurntableError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TurntableError::OptionsParse(e.to_string()))?;
        std::fs::write(path, content).map_err(TurntableError::Io)
    }
}
