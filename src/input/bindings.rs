//! Keyboard bindings for the discrete orbit commands.
//!
//! UI surfaces trigger rotate-left/rotate-right/reset as discrete
//! commands; the viewer shell routes them through key bindings. Key
//! strings use the `winit::keyboard::KeyCode` debug format:
//! `"ArrowLeft"`, `"KeyR"`, etc.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Discrete commands external triggers may issue between ticks.
///
/// Each is an ordinary synchronous call on the controller, additive in
/// effect and fully independent of any in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitCommand {
    /// Step the orbit angle one increment to the left.
    RotateLeft,
    /// Step the orbit angle one increment to the right.
    RotateRight,
    /// Restore the rig and pivot to their attach-time baseline.
    Reset,
}

/// Maps physical key strings to [`OrbitCommand`] variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct KeyBindings {
    /// Forward map: key string → command.
    bindings: HashMap<String, OrbitCommand>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        let bindings = HashMap::from([
            ("ArrowLeft".into(), OrbitCommand::RotateLeft),
            ("ArrowRight".into(), OrbitCommand::RotateRight),
            ("KeyR".into(), OrbitCommand::Reset),
        ]);
        Self { bindings }
    }
}

impl KeyBindings {
    /// Look up the command for a physical key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<OrbitCommand> {
        self.bindings.get(key).copied()
    }
}
