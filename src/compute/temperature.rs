use super::*;

/// Instantaneous temperature from equipartition, T = 2 KE / (3 (N - 1))
pub fn temperature(state: &State, time: usize) -> Result<f64> {
    let dof = 3.0 * (state.num_particles() - 1) as f64;
    Ok(2.0 * total_kinetic_energy(state, time)? / dof)
}
