use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Orbit control parameters.
pub struct CameraOptions {
    /// Orbit sensitivity in radians per pixel of drag.
    pub orbit_sensitivity: f32,
    /// Angle of one discrete rotate-left/right step, in radians.
    pub step_angle: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            orbit_sensitivity: 0.005,
            step_angle: 0.1,
        }
    }
}
