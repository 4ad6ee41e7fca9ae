use crate::error::{Error, Result};

/// Phase-space state of every particle over the whole run.
///
/// Each slot holds `[x, y, z, vx, vy, vz]` and is indexed by
/// `[particle, time]`, giving the `[particle, time, component]` layout
/// with `component` in `0..6`.
#[derive(Clone, Debug, PartialEq)]
pub struct State {
    num_particles: usize,
    num_steps: usize,
    data: Vec<[f64; 6]>,
}
impl State {
    /// A zeroed state of shape `[num_particles, num_steps, 6]`
    pub fn new(num_particles: usize, num_steps: usize) -> Result<Self> {
        if num_particles < 2 {
            return Err(Error::TooFewParticles(num_particles));
        }
        if num_steps == 0 {
            return Err(Error::NoTimeSteps);
        }
        Ok(Self {
            num_particles,
            num_steps,
            data: vec![[0.0; 6]; num_particles * num_steps],
        })
    }

    pub fn num_particles(&self) -> usize {
        self.num_particles
    }
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }
    pub fn shape(&self) -> [usize; 3] {
        [self.num_particles, self.num_steps, 6]
    }

    pub fn check_particle(&self, particle: usize) -> Result<()> {
        if particle >= self.num_particles {
            return Err(Error::ParticleOutOfRange {
                index: particle,
                num_particles: self.num_particles,
            });
        }
        Ok(())
    }
    pub fn check_time(&self, time: usize) -> Result<()> {
        if time >= self.num_steps {
            return Err(Error::TimeOutOfRange {
                index: time,
                num_steps: self.num_steps,
            });
        }
        Ok(())
    }

    fn idx(&self, particle: usize, time: usize) -> usize {
        particle * self.num_steps + time
    }

    // Indexed access panics on out-of-range indices, like slice indexing.
    pub fn get(&self, particle: usize, time: usize) -> &[f64; 6] {
        assert!(particle < self.num_particles && time < self.num_steps);
        &self.data[self.idx(particle, time)]
    }
    pub fn get_mut(&mut self, particle: usize, time: usize) -> &mut [f64; 6] {
        assert!(particle < self.num_particles && time < self.num_steps);
        let idx = self.idx(particle, time);
        &mut self.data[idx]
    }

    pub fn position(&self, particle: usize, time: usize) -> [f64; 3] {
        let s = self.get(particle, time);
        [s[0], s[1], s[2]]
    }
    pub fn velocity(&self, particle: usize, time: usize) -> [f64; 3] {
        let s = self.get(particle, time);
        [s[3], s[4], s[5]]
    }
    pub fn set_position(&mut self, particle: usize, time: usize, position: [f64; 3]) {
        self.get_mut(particle, time)[..3].copy_from_slice(&position);
    }
    pub fn set_velocity(&mut self, particle: usize, time: usize, velocity: [f64; 3]) {
        self.get_mut(particle, time)[3..].copy_from_slice(&velocity);
    }

    /// Positions of every particle at a given time
    pub fn positions(&self, time: usize) -> Vec<[f64; 3]> {
        (0..self.num_particles)
            .map(|p| self.position(p, time))
            .collect()
    }
    /// Velocities of every particle at a given time
    pub fn velocities(&self, time: usize) -> Vec<[f64; 3]> {
        (0..self.num_particles)
            .map(|p| self.velocity(p, time))
            .collect()
    }

    /// Positions of every particle except `particle` at a given time
    pub fn neighbor_positions(&self, time: usize, particle: usize) -> Vec<[f64; 3]> {
        (0..self.num_particles)
            .filter(|&p| p != particle)
            .map(|p| self.position(p, time))
            .collect()
    }

    /// Overwrite the positions at `time`, one per particle
    pub fn set_positions(&mut self, time: usize, positions: &[[f64; 3]]) -> Result<()> {
        self.check_time(time)?;
        if positions.len() != self.num_particles {
            return Err(Error::ShapeMismatch {
                expected: self.num_particles,
                found: positions.len(),
            });
        }
        for (p, &position) in positions.iter().enumerate() {
            self.set_position(p, time, position);
        }
        Ok(())
    }
    /// Overwrite the velocities at `time`, one per particle
    pub fn set_velocities(&mut self, time: usize, velocities: &[[f64; 3]]) -> Result<()> {
        self.check_time(time)?;
        if velocities.len() != self.num_particles {
            return Err(Error::ShapeMismatch {
                expected: self.num_particles,
                found: velocities.len(),
            });
        }
        for (p, &velocity) in velocities.iter().enumerate() {
            self.set_velocity(p, time, velocity);
        }
        Ok(())
    }
}
