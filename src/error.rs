//! Crate-level error types.

use std::fmt;

/// Errors produced by the turntable crate.
///
/// Absent input dispatchers and empty touch sets are deliberately *not*
/// errors; the controller degrades to a no-op tick instead. The only
/// structural failure is a missing pivot at attach time.
#[derive(Debug)]
pub enum TurntableError {
    /// Pivot transform not found at attach time. The controller cannot
    /// establish its reset baseline, so this is fatal at attach.
    MissingPivot,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for TurntableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingPivot => {
                write!(f, "pivot transform not found at attach time")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for TurntableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TurntableError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
