//! Fixed-step time integration for the rope
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked by the force
//! first, then the position drifts with the already-updated velocity.
//! Pinned particles (inverse mass zero) are never touched.

use super::states::{NVec2, ParticleState};

/// Advance every free particle by one step of length `dt`
/// using the forces accumulated in `forces` (one entry per particle)
pub fn symplectic_euler(state: &mut ParticleState, forces: &[NVec2], dt: f64) {
    debug_assert_eq!(state.len(), forces.len());

    for (p, f) in state.particles_mut().iter_mut().zip(forces.iter()) {
        if p.is_pinned() {
            continue;
        }
        // Kick: v_n+1 = v_n + dt * f * inv_m
        p.v += (*f * p.inv_m) * dt;

        // Drift: x_n+1 = x_n + dt * v_n+1
        p.x += p.v * dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::states::Particle;

    #[test]
    fn pinned_particle_ignores_force() {
        let mut state = ParticleState::from_particles(vec![
            Particle { x: NVec2::new(0.0, 1.0), v: NVec2::zeros(), inv_m: 0.0 },
            Particle { x: NVec2::new(0.0, 0.0), v: NVec2::zeros(), inv_m: 0.5 },
        ]);
        let forces = [NVec2::new(100.0, 0.0), NVec2::new(2.0, 0.0)];

        symplectic_euler(&mut state, &forces, 0.1);

        assert_eq!(state.position(0).unwrap(), NVec2::new(0.0, 1.0));
        assert_eq!(state.velocity(0).unwrap(), NVec2::zeros());
        // v = 2 * 0.5 * 0.1, x = v * 0.1
        assert!((state.velocity(1).unwrap().x - 0.1).abs() < 1e-15);
        assert!((state.position(1).unwrap().x - 0.01).abs() < 1e-15);
    }

    #[test]
    fn zero_force_drifts_by_stored_velocity() {
        let mut state = ParticleState::from_particles(vec![Particle {
            x: NVec2::zeros(),
            v: NVec2::new(1.0, -2.0),
            inv_m: 1.0,
        }]);

        symplectic_euler(&mut state, &[NVec2::zeros()], 0.5);
        symplectic_euler(&mut state, &[NVec2::zeros()], 0.5);

        assert_eq!(state.position(0).unwrap(), NVec2::new(1.0, -2.0));
    }
}
