use rand::{rngs::StdRng, SeedableRng};

use crate::{
    atomic::{AtomicPotential, LennardJones},
    compute,
    config::SimulationConfig,
    error::{Error, Result},
    lattice::Cubic,
    thermostat, Container, State, Verlet,
};

/// Thermodynamic output for one time slot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Thermo {
    pub step: usize,
    pub kinetic_energy: f64,
    pub potential_energy: f64,
    pub total_energy: f64,
    pub temperature: f64,
}

/// Time-stepping driver: owns the state array and steps it with velocity-Verlet
pub struct Simulation<A: AtomicPotential = LennardJones> {
    config: SimulationConfig,
    container: Container,
    integrator: Verlet,
    potential: A,
    state: State,
    // Latest computed time slot; `forces` belong to it
    current: usize,
    forces: Vec<[f64; 3]>,
}

impl Simulation<LennardJones> {
    /// Create a Lennard-Jones simulation with particles on a cubic lattice
    /// and velocities drawn at the configured temperature
    pub fn new(config: SimulationConfig) -> Result<Self> {
        Self::with_potential(config, LennardJones::new())
    }
}

impl<A: AtomicPotential> Simulation<A> {
    pub fn with_potential(config: SimulationConfig, potential: A) -> Result<Self> {
        config.validate()?;
        let container = config.container()?;
        let mut state = State::new(config.num_particles, config.num_steps)?;

        let coords = Cubic::fitting(&container, config.num_particles)
            .coords_within(&container, config.num_particles);
        state.set_positions(0, &coords)?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        thermostat::maxwell_boltzmann(&mut state, 0, config.temperature, &mut rng)?;
        if config.temperature > 0.0 {
            thermostat::scale_to_temperature(&mut state, 0, config.temperature)?;
        }

        Self::from_state(config, state, potential)
    }

    /// Create a simulation from a caller-prepared state; only time slot 0 is read
    pub fn from_state(config: SimulationConfig, state: State, potential: A) -> Result<Self> {
        config.validate()?;
        if state.shape() != [config.num_particles, config.num_steps, 6] {
            return Err(Error::ShapeMismatch {
                expected: config.num_particles * config.num_steps,
                found: state.num_particles() * state.num_steps(),
            });
        }
        let container = config.container()?;
        let integrator = config.integrator()?;
        let forces = potential.compute_forces(&state.positions(0), &container);
        Ok(Self {
            config,
            container,
            integrator,
            potential,
            state,
            current: 0,
            forces,
        })
    }

    // Getters
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
    pub fn container(&self) -> &Container {
        &self.container
    }
    pub fn potential(&self) -> &A {
        &self.potential
    }
    pub fn state(&self) -> &State {
        &self.state
    }
    pub fn into_state(self) -> State {
        self.state
    }
    /// The most recently computed time slot
    pub fn current(&self) -> usize {
        self.current
    }
    /// Forces at the most recently computed time slot
    pub fn forces(&self) -> &[[f64; 3]] {
        &self.forces
    }

    /// Advance the latest computed slot by one time step and return the new slot
    pub fn step(&mut self) -> Result<usize> {
        self.forces = self.integrator.step(
            &mut self.state,
            self.current,
            &self.forces,
            &self.potential,
            &self.container,
        )?;
        self.current += 1;
        Ok(self.current)
    }

    /// Go back to time slot 0 and recompute its forces; later slots are
    /// overwritten by the next steps
    pub fn rewind(&mut self) {
        self.current = 0;
        self.forces = self
            .potential
            .compute_forces(&self.state.positions(0), &self.container);
    }

    pub fn thermo(&self, time: usize) -> Result<Thermo> {
        let kinetic_energy = compute::total_kinetic_energy(&self.state, time)?;
        let potential_energy =
            compute::potential_energy(&self.state, time, &self.potential, &self.container)?;
        Ok(Thermo {
            step: time,
            kinetic_energy,
            potential_energy,
            total_energy: kinetic_energy + potential_energy,
            temperature: compute::temperature(&self.state, time)?,
        })
    }

    /// Fill every time slot from slot 0 and return the thermodynamic output of each
    pub fn run(&mut self) -> Result<Vec<Thermo>> {
        let num_steps = self.config.num_steps;
        log::info!(
            "Running {} particles for {} steps (h = {}, L = {}, rho = {:.4}, T = {})",
            self.config.num_particles,
            num_steps - 1,
            self.integrator.timestep(),
            self.container.length(),
            self.config.density(),
            self.config.temperature,
        );

        self.rewind();
        let mut output = Vec::with_capacity(num_steps);
        output.push(self.thermo(0)?);
        while self.current + 1 < num_steps {
            let time = self.step()?;
            let thermo = self.thermo(time)?;
            log::debug!(
                "step {}: KE = {:.6}, PE = {:.6}, E = {:.6}",
                thermo.step,
                thermo.kinetic_energy,
                thermo.potential_energy,
                thermo.total_energy
            );
            if !thermo.total_energy.is_finite() {
                log::warn!("Total energy is not finite at step {}", thermo.step);
            }
            output.push(thermo);
        }

        if let (Some(first), Some(last)) = (output.first(), output.last()) {
            log::info!(
                "Run complete: E = {:.6} -> {:.6}",
                first.total_energy,
                last.total_energy
            );
        }
        Ok(output)
    }
}
