#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Accumulates the time a mesh generation pipeline spends in each of its construction phases.
//!
//! The pipeline owns one [`PhaseTimers`] per run. It holds a cumulative duration in seconds for
//! each [`Phase`]: seeding, followed by the initialization and refinement of nodes, edges, faces
//! and triangles. Call sites wrap each phase in a [`PhaseSpan`] and read out the totals at the
//! end of the run.
//!
//! Instrumentation is opt-in. Unless the `timers` package feature is enabled, spans created with
//! [`PhaseTimers::measure()`] and [`PhaseTimers::time()`] read no clock and never touch the
//! record, so they compile to nothing. The choice is made at compile time through the
//! [`ActiveClock`] type; there is no runtime flag in the hot path.
//!
//! # Measuring phases
//!
//! ```
//! use mesh_timers::{Phase, PhaseTimers};
//!
//! # fn seed_points() -> Vec<[f64; 2]> { vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]] }
//! # fn refine_edges(_points: &[[f64; 2]]) {}
//! let mut timers = PhaseTimers::new();
//!
//! // Wrap a phase in a closure...
//! let points = timers.time(Phase::Seed, seed_points);
//!
//! // ...or keep a span alive for the duration of the phase.
//! {
//!     let _span = timers.measure(Phase::EdgeRule);
//!     refine_edges(&points);
//! }
//!
//! // Prints nothing unless the `timers` feature is enabled.
//! timers.print_to_stdout();
//! ```
//!
//! # Manual measurement
//!
//! Call sites that cannot use a span can take the readings themselves with [`now()`] and add
//! the interval with [`PhaseTimers::record()`]. Both follow the `timers` package feature, so
//! this path is compiled out just like spans are. The interval is truncated to whole
//! microseconds before being converted to seconds, see [`elapsed_seconds()`].
//!
//! ```
//! use mesh_timers::{Phase, PhaseTimers};
//!
//! let mut timers = PhaseTimers::new();
//!
//! let start = mesh_timers::now();
//! // Initialize face structures here.
//! let end = mesh_timers::now();
//!
//! timers.record(Phase::FaceInit, start, end);
//! ```
//!
//! # Threading
//!
//! The record is intended for a single-threaded pipeline and performs no synchronization.
//! Pipelines that measure phases on several threads keep one record per thread and combine
//! them with [`PhaseTimers::merge()`] when the threads join.

mod clock;
mod error;
#[cfg(test)]
mod fake_clock;
mod phase;
mod phase_span;
mod phase_timers;
mod report;

pub use clock::{ActiveClock, Clock, DisabledClock, ENABLED, MonotonicClock, elapsed_seconds, now};
pub use error::ParsePhaseError;
pub use phase::Phase;
pub use phase_span::PhaseSpan;
pub use phase_timers::PhaseTimers;
