use super::*;

pub fn total_energy<A: AtomicPotential>(
    state: &State,
    time: usize,
    potential: &A,
    container: &Container,
) -> Result<f64> {
    Ok(potential_energy(state, time, potential, container)? + total_kinetic_energy(state, time)?)
}
