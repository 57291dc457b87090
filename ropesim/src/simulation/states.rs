//! Core state types for the rope simulation.
//!
//! A rope is an ordered chain of `Particle`s held in a `ParticleState`.
//! Segments are not stored: segment `i` always joins particles `i` and `i + 1`.
//! A particle with inverse mass zero is pinned and never integrated.

use nalgebra::Vector2;
use tracing::info;

use crate::error::StateError;
use crate::simulation::params::SimulationConstants;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub inv_m: f64, // inverse mass, 0 = pinned
}

impl Particle {
    pub fn is_pinned(&self) -> bool {
        self.inv_m == 0.0
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParticleState {
    particles: Vec<Particle>,
}

impl ParticleState {
    /// Build a state laid out from `constants` (see [`ParticleState::reset`])
    pub fn new(constants: &SimulationConstants) -> Self {
        let mut state = Self::default();
        state.reset(constants);
        state
    }

    /// Build a state from explicit particles, e.g. for hand-made test setups
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Lay particle `i` at `start + i * rest_length` along the unit axis,
    /// at rest, with particle 0 pinned and all others at `1 / particle_mass`
    pub fn reset(&mut self, constants: &SimulationConstants) {
        let axis = constants.axis.normalize();
        let inv_m = constants.free_inverse_mass();

        self.particles = (0..constants.n_particles)
            .map(|i| Particle {
                x: constants.start_position + axis * (i as f64 * constants.rest_length),
                v: NVec2::zeros(),
                inv_m: if i == 0 { 0.0 } else { inv_m },
            })
            .collect();

        info!(
            particles = self.particles.len(),
            rest_length = constants.rest_length,
            "rope reset"
        );
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable view for the integrator; the particle count cannot change through it
    pub(crate) fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    fn get(&self, index: usize) -> Result<&Particle, StateError> {
        self.particles.get(index).ok_or(StateError::IndexOutOfBounds {
            index,
            len: self.particles.len(),
        })
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut Particle, StateError> {
        let len = self.particles.len();
        self.particles
            .get_mut(index)
            .ok_or(StateError::IndexOutOfBounds { index, len })
    }

    pub fn position(&self, index: usize) -> Result<NVec2, StateError> {
        self.get(index).map(|p| p.x)
    }

    pub fn velocity(&self, index: usize) -> Result<NVec2, StateError> {
        self.get(index).map(|p| p.v)
    }

    pub fn inverse_mass(&self, index: usize) -> Result<f64, StateError> {
        self.get(index).map(|p| p.inv_m)
    }

    pub fn is_pinned(&self, index: usize) -> Result<bool, StateError> {
        self.get(index).map(Particle::is_pinned)
    }

    pub fn set_position(&mut self, index: usize, x: NVec2) -> Result<(), StateError> {
        self.get_mut(index)?.x = x;
        Ok(())
    }

    pub fn set_velocity(&mut self, index: usize, v: NVec2) -> Result<(), StateError> {
        self.get_mut(index)?.v = v;
        Ok(())
    }

    /// Ordered positions, one per particle
    pub fn positions(&self) -> impl ExactSizeIterator<Item = NVec2> + '_ {
        self.particles.iter().map(|p| p.x)
    }

    /// Segment endpoint pairs `(i, i + 1)`, derived on demand
    pub fn segments(&self) -> impl Iterator<Item = (usize, usize)> {
        (1..self.particles.len()).map(|j| (j - 1, j))
    }
}
