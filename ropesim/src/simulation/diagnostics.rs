//! Energy and momentum measurements of a rope state
//!
//! Pinned particles have no finite mass and are left out of every sum.

use crate::simulation::params::SimulationConstants;
use crate::simulation::states::{NVec2, ParticleState};

/// Sum of `0.5 * m * |v|^2` over free particles
pub fn kinetic_energy(state: &ParticleState) -> f64 {
    state
        .particles()
        .iter()
        .filter(|p| !p.is_pinned())
        .map(|p| 0.5 * p.v.norm_squared() / p.inv_m)
        .sum()
}

/// Potential `-m * g . x` of free particles, relative to the origin
pub fn gravitational_potential_energy(state: &ParticleState, constants: &SimulationConstants) -> f64 {
    state
        .particles()
        .iter()
        .filter(|p| !p.is_pinned())
        .map(|p| -(p.x.dot(&constants.gravity)) / p.inv_m)
        .sum()
}

/// Sum of `0.5 * k * (L - rest)^2` over all segments
pub fn spring_potential_energy(state: &ParticleState, constants: &SimulationConstants) -> f64 {
    let particles = state.particles();
    particles
        .windows(2)
        .map(|pair| {
            let stretch = (pair[1].x - pair[0].x).norm() - constants.rest_length;
            0.5 * constants.stiffness * stretch * stretch
        })
        .sum()
}

pub fn total_energy(state: &ParticleState, constants: &SimulationConstants) -> f64 {
    kinetic_energy(state)
        + gravitational_potential_energy(state, constants)
        + spring_potential_energy(state, constants)
}

/// Total `m * v` of free particles
pub fn linear_momentum(state: &ParticleState) -> NVec2 {
    state
        .particles()
        .iter()
        .filter(|p| !p.is_pinned())
        .fold(NVec2::zeros(), |acc, p| acc + p.v / p.inv_m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::Particle;

    #[test]
    fn pinned_particle_does_not_count() {
        let c = SimulationConstants { stiffness: 2.0, rest_length: 1.0, ..Default::default() };
        let state = ParticleState::from_particles(vec![
            Particle { x: NVec2::new(0.0, 0.0), v: NVec2::new(9.0, 9.0), inv_m: 0.0 },
            Particle { x: NVec2::new(0.0, -3.0), v: NVec2::new(2.0, 0.0), inv_m: 0.5 },
        ]);

        // m = 2: 0.5 * 2 * 4
        assert!((kinetic_energy(&state) - 4.0).abs() < 1e-12);
        // -(2 * (0 * 0 + -3 * -9.81))
        assert!((gravitational_potential_energy(&state, &c) + 58.86).abs() < 1e-9);
        // 0.5 * 2 * (3 - 1)^2
        assert!((spring_potential_energy(&state, &c) - 4.0).abs() < 1e-12);
        assert_eq!(linear_momentum(&state), NVec2::new(4.0, 0.0));
    }
}
