//! Lennard-Jones molecular dynamics in a cubic periodic box, in reduced units.
pub mod atomic;
pub mod compute;
pub mod config;
pub mod container;
pub mod error;
pub mod integrators;
pub mod lattice;
pub mod neighbor;
pub mod prelude;
pub mod simulation;
pub mod state;
pub mod thermostat;
pub mod utils;

pub use atomic::{AtomicPotential, LennardJones};
pub use config::SimulationConfig;
pub use container::{Container, Wrap};
pub use error::{Error, Result};
pub use integrators::*;
pub use simulation::{Simulation, Thermo};
pub use state::State;
