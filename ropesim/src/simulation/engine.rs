//! Frame-level driver for the rope
//!
//! `Simulation` owns the particle state, the constants, the force set and
//! the force buffer, and runs a fixed number of substeps per frame.
//! Each substep is a full force pass followed by a full integration pass.

use tracing::debug;

use crate::error::ConfigError;
use crate::simulation::forces::ForceSet;
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::params::SimulationConstants;
use crate::simulation::states::{NVec2, ParticleState};

pub struct Simulation {
    constants: SimulationConstants,
    state: ParticleState,
    forces: ForceSet,
    force_buffer: Vec<NVec2>, // one slot per particle, rewritten every substep
    t: f64, // simulated time
    substeps_taken: u64, // substeps since the last reset
}

impl Simulation {
    /// Validate `constants` and build a rope at its initial layout
    pub fn new(constants: SimulationConstants) -> Result<Self, ConfigError> {
        constants.validate()?;
        let forces = ForceSet::rope(&constants);
        Ok(Self::with_forces(constants, forces))
    }

    /// Build with a custom force set; `constants` are assumed valid
    pub fn with_forces(constants: SimulationConstants, forces: ForceSet) -> Self {
        let state = ParticleState::new(&constants);
        let force_buffer = vec![NVec2::zeros(); state.len()];
        Self {
            constants,
            state,
            forces,
            force_buffer,
            t: 0.0,
            substeps_taken: 0,
        }
    }

    /// Put every particle back at its initial layout and clear the clock
    pub fn reset(&mut self) {
        self.state.reset(&self.constants);
        self.force_buffer = vec![NVec2::zeros(); self.state.len()];
        self.t = 0.0;
        self.substeps_taken = 0;
    }

    /// One force pass, then one integration pass, of length `dt`
    pub fn substep(&mut self) {
        self.forces.accumulate_forces(&self.state, &mut self.force_buffer);
        symplectic_euler(&mut self.state, &self.force_buffer, self.constants.dt);
        self.t += self.constants.dt;
        self.substeps_taken += 1;
    }

    /// Run `substeps` substeps unless `paused`; returns how many were run
    pub fn step(&mut self, paused: bool, substeps: usize) -> usize {
        if paused {
            return 0;
        }
        for _ in 0..substeps {
            self.substep();
        }
        debug!(t = self.t, substeps, "frame advanced");
        substeps
    }

    /// [`Simulation::step`] with the configured substeps per frame
    pub fn frame(&mut self, paused: bool) -> usize {
        self.step(paused, self.constants.substeps_per_frame)
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = NVec2> + '_ {
        self.state.positions()
    }

    pub fn state(&self) -> &ParticleState {
        &self.state
    }

    /// Mutable state for hand-placed setups; particle count stays fixed
    pub fn state_mut(&mut self) -> &mut ParticleState {
        &mut self.state
    }

    pub fn constants(&self) -> &SimulationConstants {
        &self.constants
    }

    /// Forces computed by the most recent substep
    pub fn last_forces(&self) -> &[NVec2] {
        &self.force_buffer
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    pub fn substeps_taken(&self) -> u64 {
        self.substeps_taken
    }
}
