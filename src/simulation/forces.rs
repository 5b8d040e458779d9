//! Force contributors for the n-body engine
//!
//! Defines the force trait, the set that sums registered terms, and
//! direct softened Newtonian gravity

use crate::simulation::params::SOFTENING;
use crate::simulation::states::{normalize_or_zero, CelestialBody, NVec2};

/// Collection of force terms
/// Each term implements [`Force`] and their contributions are summed
/// into a single force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total forces for all `bodies`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_forces(&self, bodies: &[CelestialBody], out: &mut [NVec2]) {
        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        // Iterate over all force contributors
        for term in &self.terms {
            term.force(bodies, out);
        }
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for force sources operating on a body slice
/// Implementations add their contribution into `out[i]` for each body
pub trait Force {
    fn force(&self, bodies: &[CelestialBody], out: &mut [NVec2]);
}

/// Newtonian gravity with a fixed softening length
/// `F = G * m_a * m_b / (|r|^2 + SOFTENING^2)` along the unit separation
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Force exerted on `a` by `b`; the force on `b` is its negation.
    pub fn pair_force(&self, a: &CelestialBody, b: &CelestialBody) -> NVec2 {
        // displacement from a to b, a is pulled along +diff
        let diff = b.position - a.position;
        let dist = diff.norm();

        let dist2_soft = dist * dist + SOFTENING * SOFTENING;
        let magnitude = self.g * a.mass * b.mass / dist2_soft;

        // coincident bodies have no direction, so no force this step
        normalize_or_zero(diff) * magnitude
    }
}

impl Force for NewtonianGravity {
    fn force(&self, bodies: &[CelestialBody], out: &mut [NVec2]) {
        let n = bodies.len();

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            for j in (i + 1)..n {
                let f = self.pair_force(&bodies[i], &bodies[j]);

                // Newton's third law: equal and opposite
                out[i] += f;
                out[j] -= f;
            }
        }
    }
}
