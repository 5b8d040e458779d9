//! Read-only observables over a body collection
//!
//! Conservation checks (momentum, kinetic energy, barycenter) and the
//! reduced per-body report consumed by scenario analysis, which only looks
//! at name, mass, position and velocity.

use std::fmt;

use crate::simulation::states::{CelestialBody, NVec2};

/// Σ m·v
pub fn total_momentum(bodies: &[CelestialBody]) -> NVec2 {
    bodies.iter().map(CelestialBody::momentum).sum()
}

/// Σ ½·m·|v|²
pub fn kinetic_energy(bodies: &[CelestialBody]) -> f64 {
    bodies
        .iter()
        .map(|b| 0.5 * b.mass * b.velocity.norm_squared())
        .sum()
}

/// Mass-weighted mean position, `None` when there is no mass
pub fn barycenter(bodies: &[CelestialBody]) -> Option<NVec2> {
    let total: f64 = bodies.iter().map(|b| b.mass).sum();
    if total <= 0.0 {
        return None;
    }
    let weighted: NVec2 = bodies.iter().map(|b| b.position * b.mass).sum();
    Some(weighted / total)
}

#[derive(Debug, Clone, PartialEq)]
pub struct BodyReport {
    pub name: String,
    pub mass: f64,
    pub position: NVec2,
    pub velocity: NVec2,
}

impl fmt::Display for BodyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: mass {:.1}, pos ({:.0}, {:.0}), vel ({:.2}, {:.2})",
            self.name,
            self.mass,
            self.position.x,
            self.position.y,
            self.velocity.x,
            self.velocity.y
        )
    }
}

pub fn analysis_snapshot(bodies: &[CelestialBody]) -> Vec<BodyReport> {
    bodies
        .iter()
        .map(|b| BodyReport {
            name: b.name.clone().unwrap_or_else(|| "Unknown".to_string()),
            mass: b.mass,
            position: b.position,
            velocity: b.velocity,
        })
        .collect()
}
