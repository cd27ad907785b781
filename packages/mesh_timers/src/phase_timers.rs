//! The per-run accumulator of phase durations.

use std::ops::AddAssign;

use crate::clock::ACTIVE_CLOCK;
use crate::{ActiveClock, Clock, Phase, PhaseSpan};

/// Accumulates the time spent in each construction phase of a mesh generation run.
///
/// The record holds one duration in seconds per [`Phase`], all zero at construction. Time is
/// added with [`add_to()`](Self::add_to), [`record()`](Self::record) or by dropping a
/// [`PhaseSpan`] obtained from [`measure()`](Self::measure). No operation subtracts from a
/// duration, so as long as callers only add non-negative durations, each one only ever grows.
/// Debug builds assert that contract in `add_to()`. To start over, replace the record with a
/// new one.
///
/// The record performs no synchronization. A pipeline that measures phases on several threads
/// keeps one record per thread and combines them with [`merge()`](Self::merge) or `+=` when
/// the threads join.
///
/// # Examples
///
/// ```
/// use mesh_timers::{Phase, PhaseTimers};
///
/// let mut timers = PhaseTimers::new();
///
/// let node_count = timers.time(Phase::NodeInit, || {
///     // Initialize node structures here.
///     42
/// });
/// assert_eq!(node_count, 42);
///
/// timers.add_to(Phase::EdgeInit, 3.5);
/// assert!((timers.edge_init_time() - 3.5).abs() < f64::EPSILON);
///
/// timers.print_to_stdout();
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[allow(
    clippy::struct_field_names,
    reason = "the _time suffix keeps field names identical to the accessor names"
)]
pub struct PhaseTimers {
    seed_time: f64,
    node_init_time: f64,
    node_rule_time: f64,
    edge_init_time: f64,
    edge_rule_time: f64,
    face_init_time: f64,
    face_rule_time: f64,
    tria_init_time: f64,
    tria_rule_time: f64,
}

impl PhaseTimers {
    /// Creates a record with every phase duration set to zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seed_time: 0.0,
            node_init_time: 0.0,
            node_rule_time: 0.0,
            edge_init_time: 0.0,
            edge_rule_time: 0.0,
            face_init_time: 0.0,
            face_rule_time: 0.0,
            tria_init_time: 0.0,
            tria_rule_time: 0.0,
        }
    }

    /// Adds `seconds` to the accumulated duration of `phase`.
    ///
    /// The caller must pass a non-negative duration, typically the output of
    /// [`elapsed_seconds()`](crate::elapsed_seconds) for correctly ordered readings.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `seconds` is negative or NaN.
    #[inline]
    pub fn add_to(&mut self, phase: Phase, seconds: f64) {
        debug_assert!(
            seconds >= 0.0,
            "phase durations must be non-negative but {seconds} was added to {phase}"
        );

        *self.field_mut(phase) += seconds;
    }

    /// Adds the time between two readings of the [`ActiveClock`] to `phase`.
    ///
    /// This is the manual counterpart of [`measure()`](Self::measure) for call sites that
    /// cannot hold a span across the phase. Take the readings with [`now()`](crate::now).
    /// Without the `timers` package feature the readings are empty and nothing is recorded.
    ///
    /// # Examples
    ///
    /// ```
    /// use mesh_timers::{Phase, PhaseTimers};
    ///
    /// let mut timers = PhaseTimers::new();
    ///
    /// let start = mesh_timers::now();
    /// // Initialize face structures here.
    /// let end = mesh_timers::now();
    ///
    /// timers.record(Phase::FaceInit, start, end);
    ///
    /// if !mesh_timers::ENABLED {
    ///     assert_eq!(timers, PhaseTimers::new());
    /// }
    /// ```
    #[inline]
    pub fn record(
        &mut self,
        phase: Phase,
        start: <ActiveClock as Clock>::Reading,
        end: <ActiveClock as Clock>::Reading,
    ) {
        self.record_with(&ACTIVE_CLOCK, phase, start, end);
    }

    /// Adds the time between two readings of the given clock to `phase`.
    ///
    /// Does nothing if the clock is disabled.
    #[inline]
    pub fn record_with<C: Clock>(
        &mut self,
        clock: &C,
        phase: Phase,
        start: C::Reading,
        end: C::Reading,
    ) {
        if !C::ENABLED {
            return;
        }

        self.add_to(phase, clock.elapsed_seconds(start, end));
    }

    /// The accumulated duration of `phase`, in seconds.
    #[must_use]
    pub fn get(&self, phase: Phase) -> f64 {
        match phase {
            Phase::Seed => self.seed_time,
            Phase::NodeInit => self.node_init_time,
            Phase::NodeRule => self.node_rule_time,
            Phase::EdgeInit => self.edge_init_time,
            Phase::EdgeRule => self.edge_rule_time,
            Phase::FaceInit => self.face_init_time,
            Phase::FaceRule => self.face_rule_time,
            Phase::TriaInit => self.tria_init_time,
            Phase::TriaRule => self.tria_rule_time,
        }
    }

    #[inline]
    fn field_mut(&mut self, phase: Phase) -> &mut f64 {
        match phase {
            Phase::Seed => &mut self.seed_time,
            Phase::NodeInit => &mut self.node_init_time,
            Phase::NodeRule => &mut self.node_rule_time,
            Phase::EdgeInit => &mut self.edge_init_time,
            Phase::EdgeRule => &mut self.edge_rule_time,
            Phase::FaceInit => &mut self.face_init_time,
            Phase::FaceRule => &mut self.face_rule_time,
            Phase::TriaInit => &mut self.tria_init_time,
            Phase::TriaRule => &mut self.tria_rule_time,
        }
    }

    /// Time spent generating the initial point/seed set, in seconds.
    #[must_use]
    pub fn seed_time(&self) -> f64 {
        self.seed_time
    }

    /// Time spent initializing node (vertex) structures, in seconds.
    #[must_use]
    pub fn node_init_time(&self) -> f64 {
        self.node_init_time
    }

    /// Time spent applying node refinement rules, in seconds.
    #[must_use]
    pub fn node_rule_time(&self) -> f64 {
        self.node_rule_time
    }

    /// Time spent initializing edge structures, in seconds.
    #[must_use]
    pub fn edge_init_time(&self) -> f64 {
        self.edge_init_time
    }

    /// Time spent applying edge refinement rules, in seconds.
    #[must_use]
    pub fn edge_rule_time(&self) -> f64 {
        self.edge_rule_time
    }

    /// Time spent initializing face structures, in seconds.
    #[must_use]
    pub fn face_init_time(&self) -> f64 {
        self.face_init_time
    }

    /// Time spent applying face refinement rules, in seconds.
    #[must_use]
    pub fn face_rule_time(&self) -> f64 {
        self.face_rule_time
    }

    /// Time spent initializing triangle/cell structures, in seconds.
    #[must_use]
    pub fn tria_init_time(&self) -> f64 {
        self.tria_init_time
    }

    /// Time spent applying triangle refinement rules, in seconds.
    #[must_use]
    pub fn tria_rule_time(&self) -> f64 {
        self.tria_rule_time
    }

    /// Returns an iterator over every phase and its accumulated duration, in pipeline order.
    pub fn durations(&self) -> impl Iterator<Item = (Phase, f64)> {
        Phase::ALL.into_iter().map(|phase| (phase, self.get(phase)))
    }

    /// The sum of all phase durations, in seconds.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.durations().map(|(_, seconds)| seconds).sum()
    }

    /// Whether no time has been recorded for any phase.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.durations().all(|(_, seconds)| seconds == 0.0)
    }

    /// Merges two records into a new one holding the per-phase sums.
    ///
    /// Use this to combine the records of threads that measured phases independently.
    ///
    /// # Examples
    ///
    /// ```
    /// use mesh_timers::{Phase, PhaseTimers};
    ///
    /// let mut a = PhaseTimers::new();
    /// a.add_to(Phase::FaceRule, 1.25);
    ///
    /// let mut b = PhaseTimers::new();
    /// b.add_to(Phase::FaceRule, 0.75);
    /// b.add_to(Phase::Seed, 0.5);
    ///
    /// let merged = PhaseTimers::merge(&a, &b);
    /// assert!((merged.face_rule_time() - 2.0).abs() < f64::EPSILON);
    /// assert!((merged.seed_time() - 0.5).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    pub fn merge(a: &Self, b: &Self) -> Self {
        let mut merged = a.clone();
        merged += b;
        merged
    }

    /// Starts measuring `phase` with the [`ActiveClock`].
    ///
    /// The elapsed time is added to the phase when the returned span is dropped. Without the
    /// `timers` package feature this reads no clock and records nothing.
    #[inline]
    pub fn measure(&mut self, phase: Phase) -> PhaseSpan<'_, ActiveClock> {
        self.measure_with(&ACTIVE_CLOCK, phase)
    }

    /// Starts measuring `phase` with the given clock.
    ///
    /// The elapsed time is added to the phase when the returned span is dropped.
    #[inline]
    pub fn measure_with<'a, C: Clock>(&'a mut self, clock: &'a C, phase: Phase) -> PhaseSpan<'a, C> {
        PhaseSpan::new(self, clock, phase)
    }

    /// Runs `f` as `phase`, measured with the [`ActiveClock`], and returns its result.
    #[inline]
    pub fn time<R>(&mut self, phase: Phase, f: impl FnOnce() -> R) -> R {
        self.time_with(&ACTIVE_CLOCK, phase, f)
    }

    /// Runs `f` as `phase`, measured with the given clock, and returns its result.
    #[inline]
    pub fn time_with<C: Clock, R>(&mut self, clock: &C, phase: Phase, f: impl FnOnce() -> R) -> R {
        let _span = self.measure_with(clock, phase);
        f()
    }
}

impl AddAssign<&PhaseTimers> for PhaseTimers {
    fn add_assign(&mut self, rhs: &Self) {
        for (phase, seconds) in rhs.durations() {
            self.add_to(phase, seconds);
        }
    }
}
