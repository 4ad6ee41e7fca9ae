use ljmd::compute;
use ljmd::prelude::*;

fn main() -> Result<(), Error> {
    let config = SimulationConfig::default()
        .with_num_particles(108)
        .with_num_steps(500)
        .with_timestep(0.004)
        .with_box_length(5.0)
        .with_temperature(1.0)
        .with_seed(42);

    let mut simulation = Simulation::new(config)?;
    println!("Start");

    let thermo = simulation.run()?;
    for t in thermo.iter().step_by(50) {
        println!(
            "{:>5} {:>12.6} {:>12.6} {:>12.6} {:>10.4}",
            t.step, t.kinetic_energy, t.potential_energy, t.total_energy, t.temperature
        );
    }

    let last = config.num_steps - 1;
    let hist =
        compute::pair_distance_histogram(simulation.state(), last, simulation.container(), 0.05, 50)?;
    for (r, g) in hist
        .radii
        .iter()
        .zip(hist.pair_correlation(simulation.container(), config.num_particles))
    {
        println!("{:.3} {:.4}", r, g);
    }
    Ok(())
}
