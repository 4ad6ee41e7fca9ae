use super::*;

/// Position at t+h from position, velocity and force at t, wrapped back into the box.
///
/// x(t+h) = x + h v + h^2/2 f
pub fn next_position(
    x: &[f64; 3],
    v: &[f64; 3],
    force: &[f64; 3],
    h: f64,
    container: &Container,
) -> [f64; 3] {
    let half_h2 = 0.5 * h * h;
    container.apply_boundary([
        x[0] + h * v[0] + half_h2 * force[0],
        x[1] + h * v[1] + half_h2 * force[1],
        x[2] + h * v[2] + half_h2 * force[2],
    ])
}

/// Velocity at t+h from the forces at t and t+h.
///
/// v(t+h) = v + h/2 (f(t) + f(t+h))
pub fn next_velocity(v: &[f64; 3], force: &[f64; 3], force_next: &[f64; 3], h: f64) -> [f64; 3] {
    let half_h = 0.5 * h;
    [
        v[0] + half_h * (force[0] + force_next[0]),
        v[1] + half_h * (force[1] + force_next[1]),
        v[2] + half_h * (force[2] + force_next[2]),
    ]
}

/// Central-difference velocity at t from the positions at t+h and t-h
pub fn current_velocity(x_next: &[f64; 3], x_prev: &[f64; 3], h: f64) -> [f64; 3] {
    scale(&sub(x_next, x_prev), 1.0 / (2.0 * h))
}

/// Velocity-verlet integrator
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Verlet {
    timestep: f64,
}

impl Verlet {
    pub fn new(timestep: f64) -> Result<Self> {
        if !(timestep.is_finite() && timestep > 0.0) {
            return Err(Error::InvalidTimestep(timestep));
        }
        Ok(Self { timestep })
    }
    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Advance every particle from `time` to `time + 1`.
    ///
    /// `forces` must hold the forces at `time`. All positions are advanced
    /// first, then the forces are recomputed at the new positions and the
    /// velocities are advanced with both. Returns the forces at `time + 1`.
    pub fn step<A: AtomicPotential>(
        &self,
        state: &mut State,
        time: usize,
        forces: &[[f64; 3]],
        potential: &A,
        container: &Container,
    ) -> Result<Vec<[f64; 3]>> {
        state.check_time(time + 1)?;
        if forces.len() != state.num_particles() {
            return Err(Error::ShapeMismatch {
                expected: state.num_particles(),
                found: forces.len(),
            });
        }
        let h = self.timestep;

        for (p, force) in forces.iter().enumerate() {
            let x = state.position(p, time);
            let v = state.velocity(p, time);
            state.set_position(p, time + 1, next_position(&x, &v, force, h, container));
        }

        let forces_next = potential.compute_forces(&state.positions(time + 1), container);

        for (p, (force, force_next)) in forces.iter().zip(forces_next.iter()).enumerate() {
            let v = state.velocity(p, time);
            state.set_velocity(p, time + 1, next_velocity(&v, force, force_next, h));
        }

        Ok(forces_next)
    }
}
