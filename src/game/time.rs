//! Level timing
//!
//! Clocks used to stamp level start and measure time spent on a level.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of elapsed time for the game
pub trait Clock {
    /// Time elapsed since the clock was created
    fn now(&self) -> Duration;
}

/// Wall clock backed by `Instant`
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Hand-advanced clock
///
/// Clones share the same time, so a test can keep one handle and give
/// the other to the game.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    elapsed: Rc<Cell<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward
    pub fn advance(&self, delta: Duration) {
        self.elapsed.set(self.elapsed.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.elapsed.get()
    }
}

/// Whole seconds between two clock readings, rounded down
pub fn whole_seconds_between(start: Duration, end: Duration) -> u64 {
    end.saturating_sub(start).as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(Duration::from_millis(1500));
        assert_eq!(clock.now(), Duration::from_millis(1500));
    }

    #[test]
    fn test_whole_seconds_rounds_down() {
        let start = Duration::from_millis(200);
        assert_eq!(whole_seconds_between(start, Duration::from_millis(1199)), 0);
        assert_eq!(whole_seconds_between(start, Duration::from_millis(1200)), 1);
        assert_eq!(whole_seconds_between(start, Duration::from_millis(9999)), 9);
        // Clock going backwards never underflows
        assert_eq!(whole_seconds_between(start, Duration::ZERO), 0);
    }
}
