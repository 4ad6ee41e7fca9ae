pub use super::atomic::{force, potential, potential_derivative, AtomicPotential, LennardJones};
pub use super::compute::{kinetic_energy, pair_correlation};
pub use super::config::SimulationConfig;
pub use super::container::{apply_boundary, Container, Wrap};
pub use super::integrators::{current_velocity, next_position, next_velocity, Verlet};
pub use super::lattice::Cubic;
pub use super::neighbor::{closest_separation, separations};
pub use super::simulation::{Simulation, Thermo};
pub use super::state::State;
pub use super::utils::norm;
pub use super::Error;
