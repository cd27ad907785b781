//! Guards that measure a single construction phase.

use std::marker::PhantomData;

use crate::{Clock, Phase, PhaseTimers};

/// Measures one construction phase between creation and drop.
///
/// When dropped, the span takes an end reading from its clock and adds the elapsed time to the
/// accumulator of its phase. If the clock is disabled, the span takes no readings and leaves the
/// accumulator untouched.
///
/// The span holds the [`PhaseTimers`] mutably borrowed, so two phases can never be measured into
/// the same record at the same time.
///
/// # Examples
///
/// ```
/// use mesh_timers::{Phase, PhaseTimers};
///
/// let mut timers = PhaseTimers::new();
///
/// {
///     let _span = timers.measure(Phase::NodeInit);
///     // Initialize node structures here.
/// }
///
/// assert!(timers.node_init_time() >= 0.0);
/// ```
#[derive(Debug)]
#[must_use = "the phase is measured between creation and drop"]
pub struct PhaseSpan<'a, C: Clock> {
    timers: &'a mut PhaseTimers,
    clock: &'a C,
    phase: Phase,
    start: C::Reading,

    _single_threaded: PhantomData<*const ()>,
}

impl<'a, C: Clock> PhaseSpan<'a, C> {
    #[inline]
    pub(crate) fn new(timers: &'a mut PhaseTimers, clock: &'a C, phase: Phase) -> Self {
        let start = clock.now();

        Self {
            timers,
            clock,
            phase,
            start,
            _single_threaded: PhantomData,
        }
    }

    /// The phase this span measures.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }
}

impl<C: Clock> Drop for PhaseSpan<'_, C> {
    #[inline]
    fn drop(&mut self) {
        if !C::ENABLED {
            return;
        }

        let end = self.clock.now();

        self.timers.record_with(self.clock, self.phase, self.start, end);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
#[allow(clippy::float_cmp, reason = "exact values are part of the contract under test")]
mod tests {
    use std::time::Duration;

    use static_assertions::assert_not_impl_any;

    use super::*;
    use crate::DisabledClock;
    use crate::fake_clock::FakeClock;

    assert_not_impl_any!(PhaseSpan<'static, DisabledClock>: Send, Sync);

    #[test]
    fn records_interval_on_drop() {
        let clock = FakeClock::new();
        let mut timers = PhaseTimers::new();

        {
            let span = PhaseSpan::new(&mut timers, &clock, Phase::EdgeInit);
            clock.advance(Duration::from_micros(3_500_000));
            drop(span);
        }

        assert_eq!(timers.edge_init_time(), 3.5);
    }

    #[test]
    fn reads_clock_at_start_and_end() {
        let clock = FakeClock::new();
        let mut timers = PhaseTimers::new();

        let span = PhaseSpan::new(&mut timers, &clock, Phase::Seed);
        assert_eq!(clock.readings(), 1);

        drop(span);
        assert_eq!(clock.readings(), 2);
    }

    #[test]
    fn accumulates_across_spans() {
        let clock = FakeClock::with_step(Duration::from_micros(250_000));
        let mut timers = PhaseTimers::new();

        for _ in 0..4 {
            let _span = PhaseSpan::new(&mut timers, &clock, Phase::FaceRule);
        }

        assert_eq!(timers.face_rule_time(), 1.0);
    }

    #[test]
    fn touches_only_its_own_phase() {
        let clock = FakeClock::with_step(Duration::from_millis(10));
        let mut timers = PhaseTimers::new();

        drop(PhaseSpan::new(&mut timers, &clock, Phase::TriaInit));

        for (phase, seconds) in timers.durations() {
            if phase == Phase::TriaInit {
                assert_eq!(seconds, 0.01);
            } else {
                assert_eq!(seconds, 0.0);
            }
        }
    }

    #[test]
    fn sub_microsecond_span_records_zero() {
        let clock = FakeClock::with_step(Duration::from_nanos(999));
        let mut timers = PhaseTimers::new();

        drop(PhaseSpan::new(&mut timers, &clock, Phase::NodeRule));

        assert_eq!(timers.node_rule_time(), 0.0);
    }

    #[test]
    fn exposes_phase() {
        let clock = FakeClock::new();
        let mut timers = PhaseTimers::new();

        let span = PhaseSpan::new(&mut timers, &clock, Phase::EdgeRule);
        assert_eq!(span.phase(), Phase::EdgeRule);
    }

    #[test]
    fn disabled_clock_leaves_timers_untouched() {
        let clock = DisabledClock::new();
        let mut timers = PhaseTimers::new();

        for phase in Phase::ALL {
            drop(PhaseSpan::new(&mut timers, &clock, phase));
        }

        assert!(timers.is_empty());
        assert_eq!(timers, PhaseTimers::new());
    }
}
