//! Errors raised while ingesting scenario payloads.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("body {index}: mass must be positive and finite, got {mass}")]
    InvalidMass { index: usize, mass: f64 },

    #[error("body {index}: {field} must be a finite 2D vector")]
    InvalidVector { index: usize, field: &'static str },

    #[error("body {index}: radius must be non-negative and finite, got {radius}")]
    InvalidRadius { index: usize, radius: f64 },

    #[error("invalid physics parameter `{name}`: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
