//! Numerical and physical parameters for the simulation
//!
//! `PhysicsConfig` holds the live-adjustable settings:
//! - gravitational constant and step size (`gravitational_constant`, `time_step`),
//! - maximum retained trail points per body,
//! - elasticity, reserved for collision response and not read by the stepper
//!
//! Softening and trail spacing are fixed constants.

/// Softening length added (squared) to every pair's squared separation
pub const SOFTENING: f64 = 5.0;

/// A new trail point is recorded only once a body has moved farther than this
pub const TRAIL_MIN_SPACING: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsConfig {
    pub gravitational_constant: f64, // G
    pub time_step: f64, // dt
    pub trail_length: usize, // max trail points per body
    pub elasticity: f64, // 0..1, inert
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 0.5,
            time_step: 0.5,
            trail_length: 200,
            elasticity: 0.8,
        }
    }
}
