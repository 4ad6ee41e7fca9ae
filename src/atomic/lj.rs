use super::AtomicPotential;
use crate::{
    neighbor::closest_mirror,
    utils::{norm, scale},
    Container,
};

/// Lennard-Jones 12-6 potential in reduced units (sigma = epsilon = 1).
///
/// U(r) = 4 (r^-12 - r^-6)
pub fn potential(r: f64) -> f64 {
    let r6 = r.powi(6);
    4.0 * (1.0 / (r6 * r6) - 1.0 / r6)
}

/// dU/dr = -48 r^-13 + 24 r^-7
pub fn potential_derivative(r: f64) -> f64 {
    -48.0 / r.powi(13) + 24.0 / r.powi(7)
}

/// Force on a particle displaced by `separation` from its partner.
///
/// The force is -dU/dr along the unit separation vector, so positive
/// (repulsive) components point along `separation` for r < 2^(1/6).
/// A zero separation gives non-finite components.
pub fn force(separation: &[f64; 3]) -> [f64; 3] {
    let r = norm(separation);
    scale(separation, -potential_derivative(r) / r)
}

/// Lennard-Jones pair interaction between every pair of particles,
/// using minimum-image separations and no cutoff
#[derive(Clone, Copy, Debug, Default)]
pub struct LennardJones {}
impl LennardJones {
    pub fn new() -> Self {
        Self {}
    }
}

impl AtomicPotential for LennardJones {
    fn compute_forces(&self, positions: &[[f64; 3]], container: &Container) -> Vec<[f64; 3]> {
        let n = positions.len();
        let mut forces = vec![[0.0; 3]; n];
        for i in 0..n {
            for j in (i + 1)..n {
                // f_i = f(r_ij) and f_j = -f(r_ij) with r_ij = r_i - r_j
                let r = closest_mirror(&positions[i], &positions[j], container.length());
                let f = force(&r);
                for d in 0..3 {
                    forces[i][d] += f[d];
                    forces[j][d] -= f[d];
                }
            }
        }
        forces
    }
    fn compute_potential_energy(&self, positions: &[[f64; 3]], container: &Container) -> f64 {
        let n = positions.len();
        let mut energy = 0.0;
        for i in 0..n {
            for j in (i + 1)..n {
                let r = closest_mirror(&positions[i], &positions[j], container.length());
                energy += potential(norm(&r));
            }
        }
        energy
    }
}
