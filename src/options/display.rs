use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Display resolution parameters.
pub struct DisplayOptions {
    /// Well-known name of the display to resolve each tick.
    pub name: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            name: "DefaultDisplay".into(),
        }
    }
}
