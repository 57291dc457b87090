use std::time::Instant;

use crate::simulation::engine::Simulation;
use crate::simulation::forces::{Force, SpringDamper};
use crate::simulation::params::SimulationConstants;
use crate::simulation::states::NVec2;

/// Rope long enough to sag in place, with a segment short enough that it
/// stays on screen and a step small enough to remain stable
fn bench_constants(n: usize) -> SimulationConstants {
    SimulationConstants {
        n_particles: n,
        rest_length: 1.0 / n as f64,
        ..Default::default()
    }
}

/// Time whole frames (force pass + integration, `substeps_per_frame` times)
pub fn bench_substeps() {
    // Different rope lengths to test
    let ns = [15, 50, 100, 200, 400, 800, 1600];
    let frames = 1_000;

    for n in ns {
        let constants = bench_constants(n);
        let substeps_per_frame = constants.substeps_per_frame;
        let Ok(mut sim) = Simulation::new(constants) else {
            continue;
        };

        // Warm up
        sim.frame(false);

        let t0 = Instant::now();
        for _ in 0..frames {
            sim.frame(false);
        }
        let elapsed = t0.elapsed().as_secs_f64();

        let substeps = (frames * substeps_per_frame) as f64;
        println!(
            "N = {n:5}, {frames} frames = {:8.6} s, {:12.0} substeps/s",
            elapsed,
            substeps / elapsed
        );
    }
}

/// Time the spring-damper term alone against a stretched rope
pub fn bench_spring_forces() {
    let ns = [100, 1_000, 10_000, 100_000];
    let repeats = 100;

    for n in ns {
        let constants = bench_constants(n);
        let Ok(mut sim) = Simulation::new(constants.clone()) else {
            continue;
        };
        // stretch every segment by 10% so no branch is skipped
        for i in 0..n {
            let x = constants.start_position + NVec2::new(1.1 * i as f64 * constants.rest_length, 0.0);
            let _ = sim.state_mut().set_position(i, x);
        }

        let term = SpringDamper {
            stiffness: constants.stiffness,
            damping: constants.damping,
            rest_length: constants.rest_length,
        };
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        term.force(sim.state(), &mut out);

        let t0 = Instant::now();
        for _ in 0..repeats {
            term.force(sim.state(), &mut out);
        }
        let elapsed = t0.elapsed().as_secs_f64() / repeats as f64;

        println!("N = {n:6}, spring pass = {:10.8} s", elapsed);
    }
}
