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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Per-frame orbit-camera controller for pointer-driven model viewers.
//!
//! Turntable converts raw pointer input (mouse drag on desktop,
//! single-touch drag on touch devices) into an accumulated horizontal
//! orbit angle, and commits that angle to a host-owned transform once per
//! update tick, gated behind a dirty flag.
//!
//! # Key entry points
//!
//! - [`OrbitCameraController`] - the controller itself (attach → activate →
//!   tick)
//! - [`DisplayHost`] - the collaborator trait the host implements to supply
//!   display identity and pointer state
//! - [`Transform`] - the host-owned transform value the controller writes
//! - [`Options`] - runtime configuration (sensitivity, step angle, display
//!   name), TOML-backed
//!
//! # Architecture
//!
//! Each tick runs four stages in order: display/device binding refresh →
//! pointer sampling → drag tracking into the orbit angle → transform
//! commit (skipped when nothing changed). Discrete step commands
//! ([`OrbitCameraController::rotate_left`] /
//! [`OrbitCameraController::rotate_right`]) and
//! [`OrbitCameraController::reset`] are plain synchronous calls the host
//! may make between ticks.
//!
//! The optional `viewer` feature provides a winit-backed demo shell that
//! implements [`DisplayHost`] from accumulated window events.

pub mod camera;
pub mod display;
pub mod error;
pub mod input;
pub mod options;
pub mod transform;
pub mod util;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use camera::OrbitCameraController;
pub use display::{DeviceBinding, DisplayHost, DisplayId, PointerSource};
pub use error::TurntableError;
pub use input::{
    KeyBindings, MouseState, OrbitCommand, Platform, TouchPhase, TouchPoint,
    TouchState,
};
pub use options::Options;
pub use transform::Transform;
