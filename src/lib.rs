pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{BodyId, CelestialBody, System, NVec2};
pub use simulation::trail::Trail;
pub use simulation::params::{PhysicsConfig, SOFTENING, TRAIL_MIN_SPACING};
pub use simulation::forces::{Force, ForceSet, NewtonianGravity};
pub use simulation::integrator::{step, step_with, step_system, gravity_set};
pub use simulation::engine::{Simulation, SimulationState};
pub use simulation::scenario::{Scenario, default_system, launch_body};
pub use simulation::diagnostics::{total_momentum, kinetic_energy, barycenter, analysis_snapshot, BodyReport};

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig, COLORS};
pub use configuration::error::ConfigError;

pub use benchmark::benchmark::{bench_step, bench_run};
