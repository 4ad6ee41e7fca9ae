use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::{
    compute,
    error::{Error, Result},
    utils::{norm, scale},
    State,
};

/// Unit vector built from three uniform [0, 1) components.
///
/// Every component is non-negative, so the direction lies in the first octant.
pub fn random_unit_vector<R: Rng>(rng: &mut R) -> [f64; 3] {
    let vec: [f64; 3] = [rng.gen(), rng.gen(), rng.gen()];
    scale(&vec, 1.0 / norm(&vec))
}

/// Draw Gaussian velocities with variance `temperature` for every particle at `time`
pub fn maxwell_boltzmann<R: Rng>(
    state: &mut State,
    time: usize,
    temperature: f64,
    rng: &mut R,
) -> Result<()> {
    state.check_time(time)?;
    if temperature < 0.0 {
        return Err(Error::NegativeTemperature(temperature));
    }
    let dist =
        Normal::new(0.0, temperature.sqrt()).map_err(|_| Error::NegativeTemperature(temperature))?;
    for p in 0..state.num_particles() {
        let v = [dist.sample(rng), dist.sample(rng), dist.sample(rng)];
        state.set_velocity(p, time, v);
    }
    Ok(())
}

/// Rescale the velocities at `time` so each axis carries the kinetic energy
/// of `temperature`.
///
/// Per axis d, every v_d is multiplied by
/// lambda_d = sqrt((N - 1) * 3 * T / sum_p v_{p,d}^2).
pub fn rescale_velocities(
    state: &mut State,
    time: usize,
    num_particles: usize,
    temperature: f64,
) -> Result<()> {
    state.check_time(time)?;
    if temperature < 0.0 {
        return Err(Error::NegativeTemperature(temperature));
    }
    let mut sum_vsq = [0.0; 3];
    for v in state.velocities(time) {
        for d in 0..3 {
            sum_vsq[d] += v[d] * v[d];
        }
    }
    let target = (num_particles as f64 - 1.0) * 3.0 * temperature;
    let lambda = sum_vsq.map(|s| (target / s).sqrt());
    if lambda.iter().any(|l| !l.is_finite()) {
        log::warn!("Velocity rescaling factor is not finite: {:?}", lambda);
    }
    for p in 0..state.num_particles() {
        let v = state.velocity(p, time);
        state.set_velocity(
            p,
            time,
            [v[0] * lambda[0], v[1] * lambda[1], v[2] * lambda[2]],
        );
    }
    Ok(())
}

/// Scale every velocity at `time` by one common factor so the equipartition
/// temperature `2 KE / (3 (N - 1))` equals `temperature`
pub fn scale_to_temperature(state: &mut State, time: usize, temperature: f64) -> Result<()> {
    if temperature < 0.0 {
        return Err(Error::NegativeTemperature(temperature));
    }
    let current = compute::temperature(state, time)?;
    let factor = (temperature / current).sqrt();
    if !factor.is_finite() {
        log::warn!("Cannot scale velocities from T = {} to T = {}", current, temperature);
    }
    for p in 0..state.num_particles() {
        let v = state.velocity(p, time);
        state.set_velocity(p, time, scale(&v, factor));
    }
    Ok(())
}
