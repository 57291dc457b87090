//! Force contributors for the rope engine
//!
//! Defines the [`Force`] trait, the [`ForceSet`] that sums its terms into a
//! per-particle force buffer, and the two terms a rope is built from:
//! uniform gravity and the spring-damper acting along every segment

use tracing::trace;

use crate::simulation::params::{SimulationConstants, MIN_SEGMENT_LENGTH};
use crate::simulation::states::{NVec2, ParticleState};

/// Collection of force terms (gravity, springs, etc.)
/// Each term implements [`Force`] and their contributions are summed
/// into a single force vector per particle
pub struct ForceSet {
    terms: Vec<Box<dyn Force + Send + Sync>>,
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// The standard rope: gravity on free particles, then springs with damping
    pub fn rope(constants: &SimulationConstants) -> Self {
        Self::new()
            .with(UniformGravity {
                gravity: constants.gravity,
                mass: constants.particle_mass,
            })
            .with(SpringDamper {
                stiffness: constants.stiffness,
                damping: constants.damping,
                rest_length: constants.rest_length,
            })
    }

    /// Add a force term; terms are applied in the order they were added
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Force + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute net forces for all particles in `state`
    /// - `out[i]` is reset to zero, then receives every term's contribution
    /// - `state` is only read, so all forces come from the same snapshot
    pub fn accumulate_forces(&self, state: &ParticleState, out: &mut [NVec2]) {
        debug_assert_eq!(state.len(), out.len());

        // Zero buffer
        for f in out.iter_mut() {
            *f = NVec2::zeros();
        }
        for term in &self.terms {
            term.force(state, out);
        }
    }
}

/// Force source operating on a [`ParticleState`]
/// Implementations add their contribution into `out[i]` for each particle
pub trait Force {
    fn force(&self, state: &ParticleState, out: &mut [NVec2]);
}

/// Constant gravitational pull `gravity * mass` on every free particle
pub struct UniformGravity {
    pub gravity: NVec2,
    pub mass: f64,
}

impl Force for UniformGravity {
    fn force(&self, state: &ParticleState, out: &mut [NVec2]) {
        let weight = self.gravity * self.mass;
        for (p, f) in state.particles().iter().zip(out.iter_mut()) {
            if !p.is_pinned() {
                *f += weight;
            }
        }
    }
}

/// Hookean spring plus axial damping along each segment `(i, i + 1)`
pub struct SpringDamper {
    pub stiffness: f64,
    pub damping: f64,
    pub rest_length: f64,
}

impl SpringDamper {
    /// Spring and damping forces on the lower endpoint `i` of segment `i`.
    /// The upper endpoint receives the negation of each.
    /// Returns `None` when the segment is shorter than [`MIN_SEGMENT_LENGTH`]
    pub fn segment_terms(&self, state: &ParticleState, i: usize) -> Option<(NVec2, NVec2)> {
        let particles = state.particles();
        let (a, b) = (particles.get(i)?, particles.get(i + 1)?);

        // d points from particle i to particle i + 1
        let d = b.x - a.x;
        let length = d.norm();
        if length <= MIN_SEGMENT_LENGTH {
            trace!(segment = i, length, "degenerate segment skipped");
            return None;
        }
        let u = d / length;

        // Stretched (positive) pulls i toward i + 1, compressed pushes it away
        let spring = u * (self.stiffness * (length - self.rest_length));

        // Separating endpoints (positive closing speed) are slowed down
        let v_rel = b.v - a.v;
        let damping = u * (self.damping * v_rel.dot(&u));

        Some((spring, damping))
    }

    /// Combined internal force on particle `i` from segment `i`
    pub fn segment_force(&self, state: &ParticleState, i: usize) -> Option<NVec2> {
        self.segment_terms(state, i).map(|(spring, damping)| spring + damping)
    }
}

impl Force for SpringDamper {
    fn force(&self, state: &ParticleState, out: &mut [NVec2]) {
        for (i, j) in state.segments() {
            let Some((spring, damping)) = self.segment_terms(state, i) else {
                continue;
            };

            out[i] += spring;
            out[j] -= spring;

            out[i] += damping;
            out[j] -= damping;
        }
    }
}
