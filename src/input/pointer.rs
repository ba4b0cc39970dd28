//! Pointer-state snapshots and the platform classifier.
//!
//! The controller never talks to a windowing API directly. Once per tick
//! it reads one of these snapshot types from the host's
//! [`DisplayHost`](crate::DisplayHost) implementation; a `None` snapshot
//! means the dispatcher does not exist on the bound display.

use glam::Vec2;

/// Snapshot of a mouse dispatcher's state, read once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseState {
    /// Whether the primary (left) button is currently held.
    pub primary_down: bool,
    /// Cursor position in physical pixels.
    pub position: Vec2,
}

/// Snapshot of a touch dispatcher's reported points, read once per tick.
///
/// An empty point list is a normal no-op tick, not a release.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TouchState {
    /// Reported touch points, in platform order.
    pub points: Vec<TouchPoint>,
}

impl TouchState {
    /// The first reported point — the only one that drives the orbit.
    #[must_use]
    pub fn primary(&self) -> Option<&TouchPoint> {
        self.points.first()
    }
}

/// A single reported touch point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Contact position in physical pixels.
    pub position: Vec2,
    /// Whether the contact is held down or lifting.
    pub phase: TouchPhase,
}

/// Contact phase of a touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// The contact is held down (includes movement while held).
    Pressed,
    /// The contact is lifting or was cancelled.
    Released,
}

#[cfg(feature = "viewer")]
impl From<winit::event::TouchPhase> for TouchPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started
            | winit::event::TouchPhase::Moved => Self::Pressed,
            winit::event::TouchPhase::Ended
            | winit::event::TouchPhase::Cancelled => Self::Released,
        }
    }
}

/// Host platform classification.
///
/// Used for exactly one decision: whether the mouse or the touch channel
/// drives the orbit. Never both in the same tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Desktop environment with a pointing device.
    Desktop,
    /// Phone/tablet environment.
    Mobile,
    /// Browser canvas.
    Web,
}

impl Platform {
    /// Whether the touch channel drives the orbit on this platform.
    #[must_use]
    pub const fn touch_first(self) -> bool {
        !matches!(self, Self::Desktop)
    }

    /// Classify the platform the crate was compiled for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(any(target_os = "android", target_os = "ios")) {
            Self::Mobile
        } else if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }
}
