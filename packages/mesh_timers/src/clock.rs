//! Time sources used to measure construction phases.

use std::fmt::Debug;
use std::time::{Duration, Instant};

const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// A source of time readings that phase spans measure intervals with.
///
/// The clock is the seam that makes instrumentation free when disabled: a clock whose
/// [`ENABLED`][Self::ENABLED] is `false` is never read by [`PhaseSpan`][crate::PhaseSpan] and
/// never causes the accumulator to be touched. Because the choice is made through the type, the
/// decision is taken at compile time and no branch remains in the hot path.
///
/// Most code should not name a clock at all and instead use [`ActiveClock`] implicitly via
/// [`PhaseTimers::measure()`][crate::PhaseTimers::measure].
pub trait Clock: Debug {
    /// A single reading of the clock.
    type Reading: Copy + Debug;

    /// Whether spans measured with this clock record anything.
    const ENABLED: bool;

    /// Takes a reading of the current time.
    fn now(&self) -> Self::Reading;

    /// Calculates the time between two readings of this clock, in seconds.
    fn elapsed_seconds(&self, start: Self::Reading, end: Self::Reading) -> f64;
}

/// A clock backed by the monotonic high-resolution clock of the operating system.
///
/// Readings are [`std::time::Instant`] values, which never run backward and are not affected
/// by calendar time adjustments.
#[derive(Clone, Copy, Debug, Default)]
#[non_exhaustive]
pub struct MonotonicClock;

impl MonotonicClock {
    /// Creates a new monotonic clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for MonotonicClock {
    type Reading = Instant;

    const ENABLED: bool = true;

    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }

    #[inline]
    fn elapsed_seconds(&self, start: Instant, end: Instant) -> f64 {
        elapsed_seconds(start, end)
    }
}

/// A clock that never reads the time.
///
/// Spans measured with this clock compile down to nothing and leave the accumulator untouched.
#[derive(Clone, Copy, Debug, Default)]
#[non_exhaustive]
pub struct DisabledClock;

impl DisabledClock {
    /// Creates a new disabled clock.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Clock for DisabledClock {
    type Reading = ();

    const ENABLED: bool = false;

    #[inline]
    fn now(&self) {}

    #[inline]
    fn elapsed_seconds(&self, _start: (), _end: ()) -> f64 {
        0.0
    }
}

/// The clock used by call sites that do not name one explicitly.
///
/// This is [`MonotonicClock`] when the `timers` package feature is enabled and
/// [`DisabledClock`] otherwise.
#[cfg(feature = "timers")]
pub type ActiveClock = MonotonicClock;

/// The clock used by call sites that do not name one explicitly.
///
/// This is [`MonotonicClock`] when the `timers` package feature is enabled and
/// [`DisabledClock`] otherwise.
#[cfg(not(feature = "timers"))]
pub type ActiveClock = DisabledClock;

pub(crate) static ACTIVE_CLOCK: ActiveClock = ActiveClock::new();

/// Whether phase timing is compiled into call sites that use [`ActiveClock`].
pub const ENABLED: bool = <ActiveClock as Clock>::ENABLED;

/// Takes a reading of the [`ActiveClock`], for use with
/// [`PhaseTimers::record()`][crate::PhaseTimers::record].
///
/// Without the `timers` package feature this reads no clock and returns `()`.
#[must_use]
#[inline]
pub fn now() -> <ActiveClock as Clock>::Reading {
    ACTIVE_CLOCK.now()
}

/// Calculates the time between two monotonic clock readings, in seconds.
///
/// The interval is first truncated to whole microseconds and only then converted to fractional
/// seconds, so readings less than one microsecond apart yield exactly `0.0`.
///
/// `end` is expected to be a reading taken no earlier than `start`. If the readings are
/// misordered, the result is the negated interval. It is not clamped to zero.
///
/// This function is always available and reads no clock itself. Instrumented call sites should
/// prefer [`now()`] with [`PhaseTimers::record()`][crate::PhaseTimers::record], which are
/// compiled out together with the rest of the facility.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
///
/// use mesh_timers::elapsed_seconds;
///
/// let start = Instant::now();
/// let end = start + Duration::from_micros(3_500_000);
///
/// assert!((elapsed_seconds(start, end) - 3.5).abs() < f64::EPSILON);
/// ```
#[must_use]
#[inline]
pub fn elapsed_seconds(start: Instant, end: Instant) -> f64 {
    match end.checked_duration_since(start) {
        Some(interval) => whole_micros_as_seconds(interval),
        None => -whole_micros_as_seconds(start.duration_since(end)),
    }
}

#[inline]
fn whole_micros_as_seconds(interval: Duration) -> f64 {
    #[expect(
        clippy::cast_precision_loss,
        reason = "intervals beyond 2^53 microseconds (285 years) are not realistic"
    )]
    let micros = interval.as_micros() as f64;

    micros / MICROS_PER_SECOND
}
