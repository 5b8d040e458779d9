//! Build fully-initialized simulation scenarios
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime
//! [`Scenario`] containing the validated physics parameters and bodies with
//! empty trails, ready to hand to a [`Simulation`].
//!
//! Also provides the built-in three-body system and the construction of
//! user-launched bodies.

use log::{info, warn};
use rand::Rng;

use crate::configuration::config::{random_color, ScenarioConfig};
use crate::configuration::error::Result;
use crate::simulation::engine::Simulation;
use crate::simulation::params::PhysicsConfig;
use crate::simulation::states::{BodyId, CelestialBody, NVec2};

/// Validated runtime bundle built from a [`ScenarioConfig`]
#[derive(Debug, Clone)]
pub struct Scenario {
    pub parameters: PhysicsConfig,
    pub bodies: Vec<CelestialBody>,
}

impl Scenario {
    /// Fails closed: any malformed body or parameter rejects the whole config
    pub fn build_scenario<R: Rng + ?Sized>(cfg: &ScenarioConfig, rng: &mut R) -> Result<Self> {
        let parameters = cfg.physics.to_physics().inspect_err(|e| {
            warn!("rejecting scenario parameters: {e}");
        })?;
        let bodies = cfg.build_bodies(rng).inspect_err(|e| {
            warn!("rejecting scenario bodies: {e}");
        })?;

        info!(
            "built scenario with {} bodies (G = {}, dt = {}, trail = {})",
            bodies.len(),
            parameters.gravitational_constant,
            parameters.time_step,
            parameters.trail_length
        );

        Ok(Self { parameters, bodies })
    }

    /// The built-in Sun/Earth/Mars system with default physics
    pub fn default_scenario() -> Self {
        Self {
            parameters: PhysicsConfig::default(),
            bodies: default_system(),
        }
    }

    pub fn into_simulation(self) -> Simulation {
        Simulation::new(self.bodies, self.parameters)
    }
}

/// Sun with two planets on roughly circular orbits for G = 0.5.
/// Earth's speed is close to sqrt(G * M / r) = sqrt(0.5 * 2000 / 300).
pub fn default_system() -> Vec<CelestialBody> {
    vec![
        CelestialBody::new(
            BodyId::new("sun"),
            2000.0,
            25.0,
            NVec2::zeros(),
            NVec2::zeros(),
            "#fbbf24",
        )
        .named("Sun"),
        CelestialBody::new(
            BodyId::new("earth"),
            100.0,
            8.0,
            NVec2::new(300.0, 0.0),
            NVec2::new(0.0, 1.8),
            "#3b82f6",
        )
        .named("Earth"),
        CelestialBody::new(
            BodyId::new("mars"),
            50.0,
            6.0,
            NVec2::new(0.0, -450.0),
            NVec2::new(-1.5, 0.0),
            "#ef4444",
        )
        .named("Mars"),
    ]
}

/// Mass range of user-launched bodies
pub const LAUNCH_MASS_MIN: f64 = 20.0;
pub const LAUNCH_MASS_MAX: f64 = 100.0;

/// Body released at `position` with `velocity`, random mass and color
pub fn launch_body<R: Rng + ?Sized>(position: NVec2, velocity: NVec2, rng: &mut R) -> CelestialBody {
    let mass = rng.random_range(LAUNCH_MASS_MIN..LAUNCH_MASS_MAX);
    CelestialBody::new(
        BodyId::random(rng),
        mass,
        mass.sqrt() * 0.8,
        position,
        velocity,
        random_color(rng),
    )
}
