//! Configuration types for loading rope scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! rope scenario. A scenario consists of:
//!
//! - [`RopeConfig`]       – layout and material of the rope
//! - [`ParametersConfig`] – gravity and time stepping
//! - [`WindowConfig`]     – viewer window and drawing sizes (optional)
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! Every field has a default, so an empty document is the stock rope.
//!
//! # YAML format
//!
//! ```yaml
//! rope:
//!   n_particles: 15
//!   particle_mass: 1.0
//!   stiffness: 10000.0
//!   damping: 0.5
//!   rest_length: 0.1
//!   start_position: [0.1, 0.8]   # pinned end, in unit-square coordinates
//!   axis: [1.0, 0.0]             # direction the rope is laid out along
//!
//! parameters:
//!   gravity: [0.0, -9.81]
//!   dt: 0.0005                   # substep length
//!   substeps_per_frame: 10
//!
//! window:
//!   title: "Rope Simulator"
//!   size: 800.0
//!   line_width: 3.0
//!   point_radius: 5.0
//! ```

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{ConfigError, RopeError};
use crate::simulation::params::SimulationConstants;
use crate::simulation::states::NVec2;

/// Rope layout and material
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RopeConfig {
    pub n_particles: usize,     // particles in the chain, at least 1
    pub particle_mass: f64,     // mass of each free particle
    pub stiffness: f64,         // spring constant per segment
    pub damping: f64,           // axial damping coefficient per segment
    pub rest_length: f64,       // unstretched segment length
    pub start_position: [f64; 2], // position of the pinned first particle
    pub axis: [f64; 2],         // layout direction, need not be normalized
}

impl Default for RopeConfig {
    fn default() -> Self {
        Self {
            n_particles: 15,
            particle_mass: 1.0,
            stiffness: 10_000.0,
            damping: 0.5,
            rest_length: 0.1,
            start_position: [0.1, 0.8],
            axis: [1.0, 0.0],
        }
    }
}

/// Environment and time stepping
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub gravity: [f64; 2],         // gravitational acceleration
    pub dt: f64,                   // substep length
    pub substeps_per_frame: usize, // substeps run per rendered frame
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            gravity: [0.0, -9.81],
            dt: 0.0005,
            substeps_per_frame: 10,
        }
    }
}

/// Viewer window; ignored in headless runs
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub size: f32,         // square window edge in logical pixels
    pub line_width: f32,   // segment width in pixels
    pub point_radius: f32, // particle radius in pixels
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Rope Simulator".to_string(),
            size: 800.0,
            line_width: 3.0,
            point_radius: 5.0,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScenarioConfig {
    pub rope: RopeConfig,             // rope layout and material
    pub parameters: ParametersConfig, // gravity and time stepping
    pub window: WindowConfig,         // viewer settings
}

impl ScenarioConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RopeError> {
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self, RopeError> {
        let reader = BufReader::new(File::open(path)?);
        let cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;
        cfg.validate()?;
        info!(path = %path.display(), particles = cfg.rope.n_particles, "scenario loaded");
        Ok(cfg)
    }

    /// Map onto the runtime constants
    pub fn constants(&self) -> SimulationConstants {
        let r = &self.rope;
        let p = &self.parameters;
        SimulationConstants {
            n_particles: r.n_particles,
            particle_mass: r.particle_mass,
            stiffness: r.stiffness,
            damping: r.damping,
            rest_length: r.rest_length,
            gravity: NVec2::from(p.gravity),
            dt: p.dt,
            substeps_per_frame: p.substeps_per_frame,
            start_position: NVec2::from(r.start_position),
            axis: NVec2::from(r.axis),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.constants().validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_stock_rope() {
        let cfg = ScenarioConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg, ScenarioConfig::default());
        assert_eq!(cfg.constants(), SimulationConstants::default());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let yaml = "
rope:
  n_particles: 3
  stiffness: 500.0
parameters:
  gravity: [0.0, -1.0]
";
        let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
        let c = cfg.constants();
        assert_eq!(c.n_particles, 3);
        assert_eq!(c.stiffness, 500.0);
        assert_eq!(c.damping, 0.5);
        assert_eq!(c.gravity, NVec2::new(0.0, -1.0));
        assert_eq!(c.substeps_per_frame, 10);
        assert_eq!(cfg.window.title, "Rope Simulator");
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ScenarioConfig::from_yaml_str("rope:\n  n_particles: 0\n").unwrap_err();
        assert!(matches!(err, RopeError::Config(ConfigError::NoParticles)));

        let err = ScenarioConfig::from_yaml_str("parameters:\n  dt: -0.1\n").unwrap_err();
        assert!(matches!(err, RopeError::Config(ConfigError::InvalidTimeStep(_))));

        let err = ScenarioConfig::from_yaml_str("rope: not-a-table").unwrap_err();
        assert!(matches!(err, RopeError::Yaml(_)));
    }
}
