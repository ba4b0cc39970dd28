//! Tick timing for the viewer loop.

use web_time::Instant;

/// Measures elapsed time between update ticks.
///
/// Also keeps a smoothed ticks-per-second estimate (exponential moving
/// average) for diagnostics logging.
#[derive(Debug)]
pub struct TickClock {
    last_tick: Instant,
    /// Smoothed tick rate in Hz.
    smoothed_rate: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl TickClock {
    /// Start the clock at the current instant.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
            smoothed_rate: 60.0,
            smoothing: 0.05,
        }
    }

    /// Advance the clock. Returns seconds since the previous tick.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        if dt > 0.0 {
            let instant_rate = 1.0 / dt;
            self.smoothed_rate = self.smoothed_rate
                * (1.0 - self.smoothing)
                + instant_rate * self.smoothing;
        }
        dt
    }

    /// Smoothed tick rate in ticks per second.
    #[must_use]
    pub const fn rate(&self) -> f32 {
        self.smoothed_rate
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_are_non_negative_and_rate_stays_positive() {
        let mut clock = TickClock::new();
        for _ in 0..3 {
            assert!(clock.tick() >= 0.0);
        }
        assert!(clock.rate() > 0.0);
    }
}
