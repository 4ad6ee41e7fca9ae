use crate::{
    container::{Container, Wrap},
    error::{Error, Result},
    integrators::Verlet,
};

/// Simulation-wide constants, passed explicitly to everything that needs them
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationConfig {
    pub num_particles: usize,
    /// Number of time slots stored, including the initial one
    pub num_steps: usize,
    pub timestep: f64,
    pub box_length: f64,
    pub temperature: f64,
    pub wrap: Wrap,
    /// Seed for the initial velocities, drawn from the thread rng when unset
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_particles: 108,
            num_steps: 1000,
            timestep: 0.004,
            box_length: 10.229,
            temperature: 1.0,
            wrap: Wrap::SingleStep,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn with_num_particles(mut self, num_particles: usize) -> Self {
        self.num_particles = num_particles;
        self
    }
    pub fn with_num_steps(mut self, num_steps: usize) -> Self {
        self.num_steps = num_steps;
        self
    }
    pub fn with_timestep(mut self, timestep: f64) -> Self {
        self.timestep = timestep;
        self
    }
    pub fn with_box_length(mut self, box_length: f64) -> Self {
        self.box_length = box_length;
        self
    }
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
    pub fn with_wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = wrap;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_particles < 2 {
            return Err(Error::TooFewParticles(self.num_particles));
        }
        if self.num_steps == 0 {
            return Err(Error::NoTimeSteps);
        }
        if !(self.temperature >= 0.0) {
            return Err(Error::NegativeTemperature(self.temperature));
        }
        self.container()?;
        self.integrator()?;
        Ok(())
    }

    pub fn container(&self) -> Result<Container> {
        Container::with_wrap(self.box_length, self.wrap)
    }
    pub fn integrator(&self) -> Result<Verlet> {
        Verlet::new(self.timestep)
    }

    /// Number density N / L^3
    pub fn density(&self) -> f64 {
        self.num_particles as f64 / self.box_length.powi(3)
    }
}
