use std::time::Instant;

use crate::simulation::integrator::{gravity_set, step};
use crate::simulation::params::PhysicsConfig;
use crate::simulation::states::{BodyId, CelestialBody, NVec2};

/// Deterministic ring-ish cloud of `n` bodies, no rand needed
pub fn bench_bodies(n: usize) -> Vec<CelestialBody> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            let position = NVec2::new((i_f * 0.37).sin() * 400.0, (i_f * 0.13).cos() * 400.0);
            let velocity = NVec2::new((i_f * 0.07).cos(), (i_f * 0.11).sin());
            CelestialBody::new(BodyId::new(format!("bench-{i}")), 50.0, 3.5, position, velocity, "#ffffff")
        })
        .collect()
}

/// Time the force pass alone against a full step for growing N
pub fn bench_step() {
    // Different system sizes to test
    let ns = [50, 100, 200, 400, 800];
    let config = PhysicsConfig::default();
    let forces = gravity_set(&config);

    for n in ns {
        let bodies = bench_bodies(n);
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        forces.accumulate_forces(&bodies, &mut out);
        let _ = step(&bodies, config);

        let t0 = Instant::now();
        forces.accumulate_forces(&bodies, &mut out);
        let dt_forces = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        let _ = step(&bodies, config);
        let dt_step = t1.elapsed().as_secs_f64();

        println!("N = {n:5}, forces = {:8.6} s, step = {:8.6} s", dt_forces, dt_step);
    }
}

/// Average wall time per step over `steps` consecutive steps
pub fn bench_run(n: usize, steps: usize) -> f64 {
    let config = PhysicsConfig::default();
    let mut bodies = bench_bodies(n);

    let t0 = Instant::now();
    for _ in 0..steps {
        bodies = step(&bodies, config);
    }
    let elapsed = t0.elapsed().as_secs_f64();

    let per_step = elapsed / steps.max(1) as f64;
    println!("N = {n:5}, steps = {steps}, {:10.8} s/step", per_step);
    per_step
}

