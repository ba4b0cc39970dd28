//! Display resolution and pointer-device binding.
//!
//! The host presentation layer owns displays and their input dispatchers;
//! the controller only caches *which* display is active and *which*
//! pointer dispatcher it is bound to. The binding is re-derived whenever
//! the host's reported active display changes, and downstream rendering is
//! notified through [`DisplayHost::mark_display_stale`].

use std::hash::{Hash, Hasher};

use crate::input::{MouseState, Platform, TouchState};

/// Identity of a physical display, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayId(
    /// Opaque identity value; equality is all that matters.
    pub u64,
);

impl DisplayId {
    /// Derive a display identity from a platform display/monitor name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        name.hash(&mut hasher);
        Self(hasher.finish())
    }
}

/// Which pointer dispatcher the controller is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerSource {
    /// Mouse position/button dispatcher.
    Mouse,
    /// Touch point dispatcher.
    Touch,
    /// No dispatcher available — input processing is a no-op.
    #[default]
    None,
}

/// Collaborator trait the host implements to supply display identity and
/// per-tick pointer state.
///
/// All queries are snapshots: a `None` dispatcher snapshot means the
/// device does not exist on that display, which is not an error. The
/// controller degrades to doing nothing until one appears.
pub trait DisplayHost {
    /// Resolve the currently active display by its well-known name.
    fn active_display(&self, name: &str) -> Option<DisplayId>;

    /// Platform classification used to choose the input channel.
    fn platform(&self) -> Platform;

    /// Mouse dispatcher snapshot for `display`, if one exists.
    fn mouse_state(&self, display: DisplayId) -> Option<MouseState>;

    /// Touch dispatcher snapshot for `display`, if one exists.
    fn touch_state(&self, display: DisplayId) -> Option<TouchState>;

    /// Signal downstream rendering that the active display changed and
    /// display-derived state must be re-evaluated.
    fn mark_display_stale(&mut self);
}

/// Cached active display and bound pointer source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceBinding {
    display: Option<DisplayId>,
    source: PointerSource,
}

impl DeviceBinding {
    /// An unbound binding (no display, no pointer source).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached display, if one was resolved.
    #[must_use]
    pub const fn display(&self) -> Option<DisplayId> {
        self.display
    }

    /// The bound pointer source.
    #[must_use]
    pub const fn source(&self) -> PointerSource {
        self.source
    }

    /// Resolve the display and pointer source without signaling
    /// downstream. Used on activation, before the first tick.
    ///
    /// The mouse dispatcher wins when both are present; touch is the
    /// fallback.
    pub fn resolve<H: DisplayHost>(&mut self, host: &H, name: &str) {
        self.display = host.active_display(name);
        self.source = match self.display {
            Some(d) if host.mouse_state(d).is_some() => PointerSource::Mouse,
            Some(d) if host.touch_state(d).is_some() => PointerSource::Touch,
            _ => PointerSource::None,
        };
    }

    /// Per-tick refresh: when the host reports a different active display
    /// than the cached one, mark the display stale and re-resolve.
    pub fn refresh<H: DisplayHost>(&mut self, host: &mut H, name: &str) {
        if host.active_display(name) == self.display {
            return;
        }
        host.mark_display_stale();
        self.resolve(host, name);
        log::debug!(
            "active display changed; rebound pointer source to {:?}",
            self.source
        );
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    struct FakeHost {
        display: Option<DisplayId>,
        mouse: Option<MouseState>,
        touch: Option<TouchState>,
        stale_marks: u32,
    }

    impl FakeHost {
        fn new(display: Option<DisplayId>) -> Self {
            Self {
                display,
                mouse: None,
                touch: None,
                stale_marks: 0,
            }
        }
    }

    impl DisplayHost for FakeHost {
        fn active_display(&self, _name: &str) -> Option<DisplayId> {
            self.display
        }

        fn platform(&self) -> Platform {
            Platform::Desktop
        }

        fn mouse_state(&self, _display: DisplayId) -> Option<MouseState> {
            self.mouse
        }

        fn touch_state(&self, _display: DisplayId) -> Option<TouchState> {
            self.touch.clone()
        }

        fn mark_display_stale(&mut self) {
            self.stale_marks += 1;
        }
    }

    #[test]
    fn mouse_wins_over_touch_when_both_present() {
        let mut host = FakeHost::new(Some(DisplayId(1)));
        host.mouse = Some(MouseState {
            primary_down: false,
            position: Vec2::ZERO,
        });
        host.touch = Some(TouchState::default());

        let mut binding = DeviceBinding::new();
        binding.resolve(&host, "DefaultDisplay");
        assert_eq!(binding.source(), PointerSource::Mouse);
    }

    #[test]
    fn touch_is_the_fallback_and_none_the_floor() {
        let mut host = FakeHost::new(Some(DisplayId(1)));
        host.touch = Some(TouchState::default());

        let mut binding = DeviceBinding::new();
        binding.resolve(&host, "DefaultDisplay");
        assert_eq!(binding.source(), PointerSource::Touch);

        host.touch = None;
        binding.resolve(&host, "DefaultDisplay");
        assert_eq!(binding.source(), PointerSource::None);
    }

    #[test]
    fn refresh_marks_stale_only_on_display_change() {
        let mut host = FakeHost::new(Some(DisplayId(1)));
        let mut binding = DeviceBinding::new();

        // First refresh sees None → Some(1): one mark.
        binding.refresh(&mut host, "DefaultDisplay");
        assert_eq!(host.stale_marks, 1);
        assert_eq!(binding.display(), Some(DisplayId(1)));

        // Same display: no further marks.
        binding.refresh(&mut host, "DefaultDisplay");
        assert_eq!(host.stale_marks, 1);

        // Display swap: mark and rebind.
        host.display = Some(DisplayId(2));
        binding.refresh(&mut host, "DefaultDisplay");
        assert_eq!(host.stale_marks, 2);
        assert_eq!(binding.display(), Some(DisplayId(2)));
    }

    #[test]
    fn resolve_never_signals_downstream() {
        let mut host = FakeHost::new(Some(DisplayId(7)));
        let mut binding = DeviceBinding::new();
        binding.resolve(&host, "DefaultDisplay");
        assert_eq!(host.stale_marks, 0);
    }

    #[test]
    fn display_id_from_name_is_stable() {
        assert_eq!(
            DisplayId::from_name("DefaultDisplay"),
            DisplayId::from_name("DefaultDisplay")
        );
        assert_ne!(
            DisplayId::from_name("DefaultDisplay"),
            DisplayId::from_name("Secondary")
        );
    }
}
