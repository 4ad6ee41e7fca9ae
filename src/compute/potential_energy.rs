use super::*;

/// Total potential energy of the configuration at `time`
pub fn potential_energy<A: AtomicPotential>(
    state: &State,
    time: usize,
    potential: &A,
    container: &Container,
) -> Result<f64> {
    state.check_time(time)?;
    Ok(potential.compute_potential_energy(&state.positions(time), container))
}
