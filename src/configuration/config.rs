//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants and trail settings, all optional
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! physics:
//!   gravitational_constant: 0.5
//!   time_step: 0.5
//!   trail_length: 200
//!   elasticity: 0.8        # reserved, no collision response yet
//!
//! bodies:
//!   - name: Sun
//!     mass: 2000.0
//!     position: [0.0, 0.0]
//!     velocity: [0.0, 0.0]
//!     radius: 25.0          # default sqrt(mass) * 0.5
//!     color: "#fbbf24"      # default random pick from COLORS
//!     locked: true          # default false
//!   - name: Earth
//!     mass: 100.0
//!     position: [300.0, 0.0]
//!     velocity: [0.0, 1.8]
//! ```
//!
//! YAML is a superset of JSON, so generated JSON payloads using the camelCase
//! names (`gravitationalConstant`, `isLocked`, ...) load the same way. Vectors
//! may be written either as `[x, y]` or as `{x: .., y: ..}`.
//!
//! Every body is validated before any of them is built: one malformed body
//! rejects the whole payload.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::configuration::error::{ConfigError, Result};
use crate::simulation::params::PhysicsConfig;
use crate::simulation::states::{BodyId, CelestialBody, NVec2};

/// Palette used when a body arrives without a color
pub const COLORS: [&str; 8] = [
    "#3b82f6", // blue
    "#ef4444", // red
    "#10b981", // green
    "#f59e0b", // amber
    "#8b5cf6", // violet
    "#ec4899", // pink
    "#06b6d4", // cyan
    "#ffffff", // white
];

/// Uniform pick from [`COLORS`]
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    COLORS[rng.random_range(0..COLORS.len())].to_string()
}

/// Global physical parameters for a scenario
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    #[serde(alias = "gravitationalConstant")]
    pub gravitational_constant: f64,
    #[serde(alias = "timeStep")]
    pub time_step: f64,
    #[serde(alias = "trailLength")]
    pub trail_length: usize,
    pub elasticity: f64,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        PhysicsConfig::default().into()
    }
}

impl From<PhysicsConfig> for ParametersConfig {
    fn from(p: PhysicsConfig) -> Self {
        Self {
            gravitational_constant: p.gravitational_constant,
            time_step: p.time_step,
            trail_length: p.trail_length,
            elasticity: p.elasticity,
        }
    }
}

impl ParametersConfig {
    /// Runtime config; only rejects non-finite values and negative time steps
    pub fn to_physics(&self) -> Result<PhysicsConfig> {
        let checks = [
            ("gravitational_constant", self.gravitational_constant),
            ("time_step", self.time_step),
            ("elasticity", self.elasticity),
        ];
        for (name, value) in checks {
            if !value.is_finite() {
                return Err(ConfigError::InvalidParameter { name, value });
            }
        }
        if self.time_step < 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "time_step",
                value: self.time_step,
            });
        }

        Ok(PhysicsConfig {
            gravitational_constant: self.gravitational_constant,
            time_step: self.time_step,
            trail_length: self.trail_length,
            elasticity: self.elasticity,
        })
    }
}

/// 2D vector as it appears in a payload: `[x, y]` or `{x, y}`
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum Vec2Config {
    Pair([f64; 2]),
    Point { x: f64, y: f64 },
}

impl Vec2Config {
    pub fn to_nvec2(self) -> NVec2 {
        match self {
            Vec2Config::Pair([x, y]) | Vec2Config::Point { x, y } => NVec2::new(x, y),
        }
    }

    pub fn is_finite(&self) -> bool {
        let v = self.to_nvec2();
        v.x.is_finite() && v.y.is_finite()
    }
}

impl From<NVec2> for Vec2Config {
    fn from(v: NVec2) -> Self {
        Vec2Config::Pair([v.x, v.y])
    }
}

/// Configuration for a single body's initial state
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct BodyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub mass: f64,
    pub position: Vec2Config,
    pub velocity: Vec2Config,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, alias = "isLocked")]
    pub locked: bool,
}

impl BodyConfig {
    /// Check the numeric fields without building anything
    pub fn validate(&self, index: usize) -> Result<()> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ConfigError::InvalidMass {
                index,
                mass: self.mass,
            });
        }
        if !self.position.is_finite() {
            return Err(ConfigError::InvalidVector {
                index,
                field: "position",
            });
        }
        if !self.velocity.is_finite() {
            return Err(ConfigError::InvalidVector {
                index,
                field: "velocity",
            });
        }
        if let Some(radius) = self.radius {
            if !(radius.is_finite() && radius >= 0.0) {
                return Err(ConfigError::InvalidRadius { index, radius });
            }
        }
        Ok(())
    }

    /// Build a runtime body, filling in id, radius and color when absent
    pub fn into_body<R: Rng + ?Sized>(self, index: usize, rng: &mut R) -> Result<CelestialBody> {
        self.validate(index)?;

        let id = match self.id {
            Some(id) => BodyId::new(id),
            None => BodyId::random(rng),
        };
        let radius = self.radius.unwrap_or_else(|| default_radius(self.mass));
        let color = match self.color {
            Some(color) => color,
            None => random_color(rng),
        };

        let mut body = CelestialBody::new(
            id,
            self.mass,
            radius,
            self.position.to_nvec2(),
            self.velocity.to_nvec2(),
            color,
        )
        .locked(self.locked);
        body.name = self.name;
        Ok(body)
    }
}

/// Radius used for bodies that arrive without one
pub fn default_radius(mass: f64) -> f64 {
    mass.sqrt() * 0.5
}

impl From<&CelestialBody> for BodyConfig {
    fn from(b: &CelestialBody) -> Self {
        Self {
            id: Some(b.id.to_string()),
            name: b.name.clone(),
            mass: b.mass,
            position: b.position.into(),
            velocity: b.velocity.into(),
            radius: Some(b.radius),
            color: Some(b.color.clone()),
            locked: b.is_locked,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub physics: ParametersConfig, // Global physical parameters
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // Bodies that define the initial state of the system
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        Ok(serde_yaml::from_reader(reader)?)
    }

    /// Snapshot of a running system in the same shape it is loaded from
    pub fn from_state(bodies: &[CelestialBody], physics: PhysicsConfig) -> Self {
        Self {
            physics: physics.into(),
            bodies: bodies.iter().map(BodyConfig::from).collect(),
        }
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate every body first, then build them all. Nothing is returned
    /// unless the whole payload is well formed.
    pub fn build_bodies<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<CelestialBody>> {
        for (index, body) in self.bodies.iter().enumerate() {
            body.validate(index)?;
        }
        self.bodies
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, body)| body.into_body(index, rng))
            .collect()
    }
}
