//! Core state types for the N-body simulation.
//!
//! Defines the 2D vector alias and its helpers, the [`CelestialBody`] record
//! and the [`System`] snapshot held by the run loop.
//!
//! A system holds the list of bodies and the current simulation time `t`.

use std::fmt;

use nalgebra::Vector2;
use rand::Rng;

use crate::simulation::trail::Trail;

pub type NVec2 = Vector2<f64>;

/// Unit vector along `v`, or the zero vector when `v` has zero length.
pub fn normalize_or_zero(v: NVec2) -> NVec2 {
    let m = v.norm();
    if m == 0.0 {
        NVec2::zeros()
    } else {
        v / m
    }
}

/// Euclidean distance between two points.
pub fn distance(a: &NVec2, b: &NVec2) -> f64 {
    (a - b).norm()
}

/// Opaque body identifier, stable for the body's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BodyId(String);

impl BodyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Random 128-bit hex id
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let hi: u64 = rng.random();
        let lo: u64 = rng.random();
        Self(format!("{hi:016x}{lo:016x}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub id: BodyId,
    pub mass: f64, // must stay > 0, divides the net force
    pub radius: f64, // presentational only
    pub position: NVec2,
    pub velocity: NVec2,
    pub color: String, // opaque color token, e.g. "#3b82f6"
    pub trail: Trail,
    pub is_locked: bool, // fixed gravity source when true
    pub name: Option<String>,
}

impl CelestialBody {
    /// Unlocked, unnamed body with an empty trail
    pub fn new(
        id: BodyId,
        mass: f64,
        radius: f64,
        position: NVec2,
        velocity: NVec2,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id,
            mass,
            radius,
            position,
            velocity,
            color: color.into(),
            trail: Trail::new(),
            is_locked: false,
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn locked(mut self, is_locked: bool) -> Self {
        self.is_locked = is_locked;
        self
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec2 {
        self.velocity * self.mass
    }
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<CelestialBody>, // collection of bodies
    pub t: f64, // time
}
