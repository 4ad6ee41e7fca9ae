//! Thermodynamic observables computed from the state
use crate::{
    atomic::AtomicPotential,
    error::{Error, Result},
    neighbor,
    utils::norm,
    Container, State,
};

mod kinetic_energy;
mod pair_correlation;
mod potential_energy;
mod temperature;
mod total_energy;

pub use kinetic_energy::{kinetic_energy, total_kinetic_energy};
pub use pair_correlation::{pair_correlation, pair_distance_histogram, Histogram};
pub use potential_energy::potential_energy;
pub use temperature::temperature;
pub use total_energy::total_energy;
