pub mod lj;

pub use lj::{force, potential, potential_derivative, LennardJones};

use crate::Container;

/// Trait for pairwise atomic potentials
pub trait AtomicPotential {
    /// Compute the total force on each particle given their positions
    fn compute_forces(&self, positions: &[[f64; 3]], container: &Container) -> Vec<[f64; 3]>;

    /// Compute the total potential energy of a configuration
    fn compute_potential_energy(&self, positions: &[[f64; 3]], container: &Container) -> f64;
}
