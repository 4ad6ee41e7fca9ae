mod verlet;
pub use verlet::{current_velocity, next_position, next_velocity, Verlet};

use crate::{
    error::{Error, Result},
    utils::{scale, sub},
    AtomicPotential, Container, State,
};
