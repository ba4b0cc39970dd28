//! Shared utilities.
//!
//! Currently just tick timing for the viewer loop.

pub mod tick;
