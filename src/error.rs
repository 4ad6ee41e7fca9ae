use thiserror::Error;

/// Error types
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum Error {
    #[error("Box length should be positive and finite, found {0}")]
    InvalidBoxLength(f64),

    #[error("Timestep should be positive and finite, found {0}")]
    InvalidTimestep(f64),

    #[error("At least two particles are needed, found {0}")]
    TooFewParticles(usize),

    #[error("At least one time slot is needed")]
    NoTimeSteps,

    #[error("Temperature should be non-negative, found {0}")]
    NegativeTemperature(f64),

    #[error("Histogram bin width should be positive and finite, found {0}")]
    InvalidBinWidth(f64),

    #[error("Particle index {index} out of range (total particles: {num_particles})")]
    ParticleOutOfRange { index: usize, num_particles: usize },

    #[error("Time index {index} out of range (total time slots: {num_steps})")]
    TimeOutOfRange { index: usize, num_steps: usize },

    #[error("Shape mismatch: expected {expected} values, found {found}")]
    ShapeMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
