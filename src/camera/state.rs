//! Orbit accumulator and drag-session state.
//!
//! Two tiny state machines back the controller: [`OrbitState`] holds the
//! accumulated angle behind the commit dirty flag, and [`DragSession`]
//! tracks whether a drag is in progress and the last sampled pointer
//! position.

use glam::Vec2;

/// Accumulated horizontal orbit angle, in radians, plus the dirty flag
/// that gates transform commits.
///
/// The angle is unbounded; it wraps implicitly through the sine/cosine
/// use downstream. `dirty` is true whenever the angle has changed since
/// the last commit, and is cleared by the committer alone.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OrbitState {
    angle: f32,
    dirty: bool,
}

impl OrbitState {
    /// Fresh state: zero angle, dirty so the first tick commits.
    pub(crate) const fn new() -> Self {
        Self {
            angle: 0.0,
            dirty: true,
        }
    }

    pub(crate) const fn angle(&self) -> f32 {
        self.angle
    }

    pub(crate) const fn dirty(&self) -> bool {
        self.dirty
    }

    /// Accumulate a scaled drag delta.
    ///
    /// Only the horizontal component affects the orbit. The vertical
    /// component arrives here and is discarded — reserved for vertical
    /// orbit, deliberately not wired into rotation.
    pub(crate) fn accumulate(&mut self, delta: Vec2) {
        self.angle += delta.x;
        self.dirty = true;
    }

    /// Adjust the angle by a discrete step.
    pub(crate) fn step(&mut self, angle: f32) {
        self.angle += angle;
        self.dirty = true;
    }

    /// Clear the dirty flag after a successful commit.
    pub(crate) fn mark_committed(&mut self) {
        self.dirty = false;
    }

    /// Zero the angle without touching the dirty flag.
    ///
    /// Reset writes the transform directly, so no commit needs forcing.
    pub(crate) fn reset_angle(&mut self) {
        self.angle = 0.0;
    }
}

/// Drag-in-progress flag plus the last sampled pointer position.
///
/// `last_position` is meaningful only while `active`; it is re-seeded on
/// the tick a drag starts, never consumed stale across drags.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DragSession {
    active: bool,
    last_position: Vec2,
}

impl DragSession {
    pub(crate) const fn new() -> Self {
        Self {
            active: false,
            last_position: Vec2::ZERO,
        }
    }

    pub(crate) const fn is_active(&self) -> bool {
        self.active
    }

    /// Advance the session with one held pointer sample.
    ///
    /// The sample that starts a drag only seeds the baseline and returns
    /// `None`; every later held sample returns the position delta with the
    /// horizontal axis inverted (drag left orbits right) and the vertical
    /// axis not inverted.
    pub(crate) fn track(&mut self, position: Vec2) -> Option<Vec2> {
        let delta = if self.active {
            Some(Vec2::new(
                self.last_position.x - position.x,
                position.y - self.last_position.y,
            ))
        } else {
            self.active = true;
            None
        };
        self.last_position = position;
        delta
    }

    /// End the drag. The release tick produces no delta.
    pub(crate) fn release(&mut self) {
        self.active = false;
    }
}
