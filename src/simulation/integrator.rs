//! Fixed-step time integration for the N-body system
//!
//! Semi-implicit Euler driven by a [`ForceSet`] and [`PhysicsConfig`].
//! The step never touches its input: it returns a fresh, index-aligned body
//! collection so the previous snapshot stays valid.

use super::forces::{ForceSet, NewtonianGravity};
use super::params::PhysicsConfig;
use super::states::{CelestialBody, NVec2, System};

/// Gravity-only force set for `config`
pub fn gravity_set(config: &PhysicsConfig) -> ForceSet {
    ForceSet::new().with(NewtonianGravity {
        g: config.gravitational_constant,
    })
}

/// Advance `bodies` by one step of `config.time_step`.
///
/// Output index `i` is input body `i` advanced. Locked bodies are returned
/// unchanged. Mass must be positive; zero or non-finite values propagate as
/// NaN/inf rather than being rejected.
pub fn step(bodies: &[CelestialBody], config: PhysicsConfig) -> Vec<CelestialBody> {
    step_with(bodies, &gravity_set(&config), config)
}

/// [`step`] with an explicit force set
pub fn step_with(
    bodies: &[CelestialBody],
    forces: &ForceSet,
    config: PhysicsConfig,
) -> Vec<CelestialBody> {
    let dt = config.time_step;

    // One force accumulator per body, all reads happen before any write
    let mut net = vec![NVec2::zeros(); bodies.len()];
    forces.accumulate_forces(bodies, &mut net);

    bodies
        .iter()
        .zip(net.iter())
        .map(|(body, force)| {
            if body.is_locked {
                return body.clone();
            }

            let acceleration = force / body.mass;

            // v_n+1 = v_n + dt * a_n, then x_n+1 = x_n + dt * v_n+1
            let velocity = body.velocity + acceleration * dt;
            let position = body.position + velocity * dt;

            let mut next = body.clone();
            next.velocity = velocity;
            next.position = position;
            next.trail.record(position, config.trail_length);
            next
        })
        .collect()
}

/// Advance a whole system in place and bump its time by `dt`
pub fn step_system(sys: &mut System, config: PhysicsConfig) {
    sys.bodies = step(&sys.bodies, config);
    sys.t += config.time_step;
}
