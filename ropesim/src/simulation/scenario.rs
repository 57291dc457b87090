//! Build a fully-initialized rope scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario`, containing:
//! - the `Simulation` (constants, particle state, force set)
//! - viewer settings (`WindowConfig`)
//! - the paused/running flag toggled by the input layer
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! input, physics and drawing systems, or driven directly by the headless runner

use bevy::prelude::Resource;
use tracing::info;

use crate::configuration::config::{ScenarioConfig, WindowConfig};
use crate::error::ConfigError;
use crate::simulation::engine::Simulation;

/// Bevy resource representing a fully-initialized rope scenario
#[derive(Resource)]
pub struct Scenario {
    pub simulation: Simulation,
    pub window: WindowConfig,
    pub paused: bool,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, ConfigError> {
        let constants = cfg.constants();
        info!(
            particles = constants.n_particles,
            stiffness = constants.stiffness,
            damping = constants.damping,
            dt = constants.dt,
            substeps = constants.substeps_per_frame,
            "building rope scenario"
        );

        Ok(Self {
            simulation: Simulation::new(constants)?,
            window: cfg.window,
            paused: false,
        })
    }
}
