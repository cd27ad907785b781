//! Basic usage of `mesh_timers` in a toy mesh generation pipeline.
//!
//! Run with `--features timers` to see the phase timings; without the feature the program
//! produces the same mesh and prints no statistics.

use std::hint::black_box;

use mesh_timers::{Phase, PhaseTimers};

fn main() {
    let mut timers = PhaseTimers::new();

    let points = timers.time(Phase::Seed, || {
        (0..100_u32)
            .flat_map(|x| (0..100_u32).map(move |y| (f64::from(x), f64::from(y))))
            .collect::<Vec<_>>()
    });

    for phase in Phase::ALL.into_iter().skip(1) {
        let _span = timers.measure(phase);

        // Pretend to do some geometric work for this phase.
        let checksum: f64 = points.iter().map(|(x, y)| x.mul_add(*y, 1.0)).sum();
        black_box(checksum);
    }

    println!(
        "Generated a mesh from {} seed points (timers enabled: {}).",
        points.len(),
        mesh_timers::ENABLED
    );

    timers.print_to_stdout();
}
