use super::*;

/// Per-component kinetic energy `0.5 v_i^2` of a unit-mass particle.
///
/// The components are not summed; the caller adds them up as needed.
pub fn kinetic_energy(velocity: &[f64; 3]) -> [f64; 3] {
    [
        0.5 * velocity[0] * velocity[0],
        0.5 * velocity[1] * velocity[1],
        0.5 * velocity[2] * velocity[2],
    ]
}

/// Total kinetic energy of every particle at `time`
pub fn total_kinetic_energy(state: &State, time: usize) -> Result<f64> {
    state.check_time(time)?;
    Ok(state
        .velocities(time)
        .iter()
        .map(|v| kinetic_energy(v).iter().sum::<f64>())
        .sum())
}
