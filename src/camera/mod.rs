//! Camera control for turntable-style model viewing.
//!
//! Provides the per-frame orbit controller and the small state machines
//! behind it (orbit accumulator, drag session).

/// The per-frame orbit-camera controller.
pub mod controller;
/// Orbit accumulator and drag-session state.
pub(crate) mod state;

pub use controller::OrbitCameraController;
