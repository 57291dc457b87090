//! Physical and numerical constants for one rope run
//!
//! `SimulationConstants` is set once before the first frame and never
//! changes while the run is active:
//! - rope layout (particle count, rest length, start position, axis),
//! - material (mass, stiffness, damping),
//! - environment (gravity),
//! - time stepping (`dt`, substeps per frame)

use crate::error::ConfigError;
use crate::simulation::states::NVec2;

/// Below this length a segment has no usable direction and contributes no force
pub const MIN_SEGMENT_LENGTH: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConstants {
    pub n_particles: usize, // fixed for the run
    pub particle_mass: f64, // mass of every free particle
    pub stiffness: f64, // spring constant k
    pub damping: f64, // damping along the segment direction
    pub rest_length: f64, // segment length with zero spring force
    pub gravity: NVec2, // gravitational acceleration
    pub dt: f64, // substep duration
    pub substeps_per_frame: usize, // substeps run per rendered frame
    pub start_position: NVec2, // position of the pinned particle
    pub axis: NVec2, // layout direction, normalized on reset
}

impl Default for SimulationConstants {
    fn default() -> Self {
        Self {
            n_particles: 15,
            particle_mass: 1.0,
            stiffness: 10_000.0,
            damping: 0.5,
            rest_length: 0.1,
            gravity: NVec2::new(0.0, -9.81),
            dt: 0.0005,
            substeps_per_frame: 10,
            start_position: NVec2::new(0.1, 0.8),
            axis: NVec2::new(1.0, 0.0),
        }
    }
}

impl SimulationConstants {
    /// Number of implicit segments, `n_particles - 1` (zero for a single particle)
    pub fn n_segments(&self) -> usize {
        self.n_particles.saturating_sub(1)
    }

    /// Inverse mass handed to every free particle
    pub fn free_inverse_mass(&self) -> f64 {
        self.particle_mass.recip()
    }

    /// Reject values the engine cannot be built from.
    /// No stability bound is checked; stiff springs with a large `dt` are allowed to diverge
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_particles == 0 {
            return Err(ConfigError::NoParticles);
        }
        if !(self.particle_mass.is_finite() && self.particle_mass > 0.0) {
            return Err(ConfigError::InvalidMass(self.particle_mass));
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidTimeStep(self.dt));
        }
        if self.substeps_per_frame == 0 {
            return Err(ConfigError::NoSubsteps);
        }
        for (name, value) in [
            ("stiffness", self.stiffness),
            ("damping", self.damping),
            ("rest_length", self.rest_length),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::Negative { name, value });
            }
        }
        if self.axis.norm() <= MIN_SEGMENT_LENGTH {
            return Err(ConfigError::ZeroAxis);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let c = SimulationConstants::default();
        assert_eq!(c.validate(), Ok(()));
        assert_eq!(c.n_segments(), 14);
    }

    #[test]
    fn single_particle_has_no_segments() {
        let c = SimulationConstants { n_particles: 1, ..Default::default() };
        assert_eq!(c.n_segments(), 0);
        assert_eq!(c.validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_values() {
        let zero = SimulationConstants { n_particles: 0, ..Default::default() };
        assert_eq!(zero.validate(), Err(ConfigError::NoParticles));

        let massless = SimulationConstants { particle_mass: 0.0, ..Default::default() };
        assert_eq!(massless.validate(), Err(ConfigError::InvalidMass(0.0)));

        let frozen = SimulationConstants { dt: 0.0, ..Default::default() };
        assert_eq!(frozen.validate(), Err(ConfigError::InvalidTimeStep(0.0)));

        let no_steps = SimulationConstants { substeps_per_frame: 0, ..Default::default() };
        assert_eq!(no_steps.validate(), Err(ConfigError::NoSubsteps));

        let soft = SimulationConstants { stiffness: -1.0, ..Default::default() };
        assert_eq!(
            soft.validate(),
            Err(ConfigError::Negative { name: "stiffness", value: -1.0 })
        );

        let flat = SimulationConstants { axis: NVec2::zeros(), ..Default::default() };
        assert_eq!(flat.validate(), Err(ConfigError::ZeroAxis));
    }
}
