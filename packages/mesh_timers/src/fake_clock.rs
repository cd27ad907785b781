//! Fake clock implementation for testing.

use std::cell::Cell;
use std::time::{Duration, Instant};

use crate::Clock;

/// Fake clock whose readings only move when the test says so.
///
/// Readings are real [`Instant`] values offset from a fixed base, so intervals are converted to
/// seconds by exactly the same logic as [`MonotonicClock`][crate::MonotonicClock] uses.
/// Optionally, every reading advances the clock by a fixed step, which lets a test give each
/// span a known duration without touching the clock in between.
#[derive(Debug)]
pub(crate) struct FakeClock {
    base: Instant,
    offset: Cell<Duration>,
    step: Duration,
    readings: Cell<usize>,
}

impl FakeClock {
    /// Creates a fake clock that stands still until advanced.
    pub(crate) fn new() -> Self {
        Self::with_step(Duration::ZERO)
    }

    /// Creates a fake clock that advances by `step` after every reading.
    pub(crate) fn with_step(step: Duration) -> Self {
        Self {
            base: Instant::now(),
            offset: Cell::new(Duration::ZERO),
            step,
            readings: Cell::new(0),
        }
    }

    /// Moves the clock forward.
    pub(crate) fn advance(&self, duration: Duration) {
        self.offset.set(
            self.offset
                .get()
                .checked_add(duration)
                .expect("fake clock offset overflows Duration - this indicates a broken test"),
        );
    }

    /// How many readings have been taken from this clock.
    pub(crate) fn readings(&self) -> usize {
        self.readings.get()
    }
}

impl Clock for FakeClock {
    type Reading = Instant;

    const ENABLED: bool = true;

    fn now(&self) -> Instant {
        let reading = self
            .base
            .checked_add(self.offset.get())
            .expect("fake clock reading overflows Instant - this indicates a broken test");

        self.readings.set(
            self.readings
                .get()
                .checked_add(1)
                .expect("reading count overflows usize - this indicates a broken test"),
        );
        self.advance(self.step);

        reading
    }

    fn elapsed_seconds(&self, start: Instant, end: Instant) -> f64 {
        crate::elapsed_seconds(start, end)
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn stands_still_until_advanced() {
        let clock = FakeClock::new();

        let first = clock.now();
        let second = clock.now();
        assert_eq!(first, second);

        clock.advance(Duration::from_millis(7));
        let third = clock.now();
        assert_eq!(third.duration_since(first), Duration::from_millis(7));
    }

    #[test]
    fn steps_after_every_reading() {
        let clock = FakeClock::with_step(Duration::from_micros(25));

        let first = clock.now();
        let second = clock.now();

        assert_eq!(second.duration_since(first), Duration::from_micros(25));
    }

    #[test]
    fn counts_readings() {
        let clock = FakeClock::new();
        assert_eq!(clock.readings(), 0);

        _ = clock.now();
        _ = clock.now();

        assert_eq!(clock.readings(), 2);
    }
}
