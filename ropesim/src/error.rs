//! Error types for the rope engine
//!
//! The physics core itself never fails once built; errors only come from
//! out-of-range particle indices and from loading or validating a scenario

use thiserror::Error;

/// Errors raised by [`ParticleState`](crate::simulation::states::ParticleState) accessors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StateError {
    #[error("particle index {index} out of bounds for rope of {len} particles")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Invalid values in a scenario configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("a rope needs at least one particle")]
    NoParticles,

    #[error("particle mass must be positive and finite, got {0}")]
    InvalidMass(f64),

    #[error("time step dt must be positive and finite, got {0}")]
    InvalidTimeStep(f64),

    #[error("substeps per frame must be at least 1")]
    NoSubsteps,

    #[error("`{name}` must be non-negative and finite, got {value}")]
    Negative { name: &'static str, value: f64 },

    #[error("layout axis must have non-zero length")]
    ZeroAxis,
}

/// Top-level error for building and loading simulations
#[derive(Debug, Error)]
pub enum RopeError {
    #[error(transparent)]
    State(#[from] StateError),

    #[error("invalid scenario: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to parse scenario YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
}
