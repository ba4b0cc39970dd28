//! Input handling: pointer-state snapshots, the platform classifier, and
//! keyboard bindings for the discrete orbit commands.

/// Keyboard bindings for discrete orbit commands.
pub mod bindings;
/// Pointer snapshots and platform classification.
pub mod pointer;

pub use bindings::{KeyBindings, OrbitCommand};
pub use pointer::{
    MouseState, Platform, TouchPhase, TouchPoint, TouchState,
};
