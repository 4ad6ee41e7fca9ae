use approx::{assert_abs_diff_eq, assert_relative_eq};
use ljmd::prelude::*;
use ljmd::{compute, neighbor, thermostat};

fn r_min() -> f64 {
    2f64.powf(1.0 / 6.0)
}

#[test]
fn norm_of_three_four_zero() {
    assert_eq!(norm(&[3.0, 4.0, 0.0]), 5.0);
}

#[test]
fn minimum_image_goes_through_the_boundary() {
    let offset = neighbor::minimum_image_offset(1.0, 9.0, 10.0);
    assert_relative_eq!(offset, 2.0);
    assert!(offset.abs() < 8.0);
}

#[test]
fn lennard_jones_at_unit_distance() {
    assert_abs_diff_eq!(potential(1.0), 0.0);
    assert_relative_eq!(potential_derivative(1.0), -24.0);
}

#[test]
fn zero_force_integrator_round_trip() {
    let container = Container::new(10.0).unwrap();
    let x = [2.0, 3.0, 4.0];
    let v = [0.5, -0.5, 1.0];
    let h = 0.01;
    let next = next_position(&x, &v, &[0.0; 3], h, &container);
    for d in 0..3 {
        assert_relative_eq!(next[d], x[d] + h * v[d], epsilon = 1e-12);
    }
    assert_eq!(next_velocity(&v, &[0.0; 3], &[0.0; 3], h), v);
}

#[test]
fn central_difference_recovers_constant_velocity() {
    let container = Container::new(10.0).unwrap();
    let v = [0.3, 0.2, -0.1];
    let h = 0.05;
    let x_prev = [5.0, 5.0, 5.0];
    let x = next_position(&x_prev, &v, &[0.0; 3], h, &container);
    let x_next = next_position(&x, &v, &[0.0; 3], h, &container);
    let estimate = current_velocity(&x_next, &x_prev, h);
    for d in 0..3 {
        assert_relative_eq!(estimate[d], v[d], epsilon = 1e-9);
    }
}

#[test]
fn boundary_wrap_is_identity_inside_the_box() {
    let l = 3.0;
    for i in 0..=6 {
        let x = i as f64 * 0.5;
        let p = [x, l - x, 0.5 * x];
        assert_eq!(apply_boundary(p, l), p);
    }
}

#[test]
fn pair_correlation_follows_inverse_square() {
    let counts = [3.0, 3.0, 3.0];
    let radii = [1.0, 2.0, 4.0];
    let g = pair_correlation(&counts, &radii, 0.1, 5.0, 20);
    assert_relative_eq!(g[0] / g[1], 4.0, max_relative = 1e-12);
    assert_relative_eq!(g[0] / g[2], 16.0, max_relative = 1e-12);
}

#[test]
fn dimer_at_the_potential_minimum_feels_no_force() {
    let container = Container::new(10.0).unwrap();
    let positions = [[5.0, 5.0, 5.0], [5.0 + r_min(), 5.0, 5.0]];
    let forces = LennardJones::new().compute_forces(&positions, &container);
    assert_abs_diff_eq!(norm(&forces[0]), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(norm(&forces[1]), 0.0, epsilon = 1e-12);

    let direct = force(&[r_min(), 0.0, 0.0]);
    assert_abs_diff_eq!(norm(&direct), 0.0, epsilon = 1e-12);
}

#[test]
fn aggregate_and_per_pair_separations_agree_for_one_neighbor() {
    let reference = [1.0, 2.0, 9.5];
    let neighbor = [8.0, 2.5, 0.5];
    let per_pair = separations(&reference, &[neighbor], 10.0);
    let aggregate = closest_separation(&reference, &[neighbor], 10.0);
    for d in 0..3 {
        assert_relative_eq!(aggregate[d], reference[d] - per_pair[0][d], epsilon = 1e-12);
    }
}

#[test]
fn two_phase_step_by_hand_matches_verlet() {
    let container = Container::new(6.0).unwrap();
    let lj = LennardJones::new();
    let h = 0.005;
    let mut state = State::new(2, 2).unwrap();
    state
        .set_positions(0, &[[2.0, 3.0, 3.0], [3.05, 3.0, 3.0]])
        .unwrap();
    state
        .set_velocities(0, &[[0.1, 0.0, 0.0], [-0.1, 0.0, 0.0]])
        .unwrap();

    // (a) forces at t, advance positions
    let positions = state.positions(0);
    let velocities = state.velocities(0);
    let f = lj.compute_forces(&positions, &container);
    let x_next: Vec<[f64; 3]> = (0..2)
        .map(|p| next_position(&positions[p], &velocities[p], &f[p], h, &container))
        .collect();
    // (b) forces at t+h, (c) advance velocities
    let f_next = lj.compute_forces(&x_next, &container);
    let v_next: Vec<[f64; 3]> = (0..2)
        .map(|p| next_velocity(&velocities[p], &f[p], &f_next[p], h))
        .collect();

    let verlet = Verlet::new(h).unwrap();
    let returned = verlet.step(&mut state, 0, &f, &lj, &container).unwrap();
    assert_eq!(state.positions(1), x_next);
    assert_eq!(state.velocities(1), v_next);
    assert_eq!(returned, f_next);
}

#[test]
fn simulation_conserves_energy() {
    let config = SimulationConfig::default()
        .with_num_particles(27)
        .with_num_steps(200)
        .with_box_length(4.5)
        .with_timestep(0.001)
        .with_temperature(0.8)
        .with_wrap(Wrap::Modulo)
        .with_seed(2024);
    let mut sim = Simulation::new(config).unwrap();
    let thermo = sim.run().unwrap();
    assert_eq!(thermo.len(), 200);

    let e0 = thermo[0].total_energy;
    let drift = thermo
        .iter()
        .map(|t| (t.total_energy - e0).abs())
        .fold(0.0, f64::max);
    assert!(drift < 1e-2 * e0.abs().max(1.0), "energy drift {}", drift);

    let state = sim.into_state();
    assert!(state.positions(199).iter().all(|p| p.iter().all(|&x| (0.0..4.5).contains(&x))));
}

#[test]
fn histogram_feeds_pair_correlation() {
    let config = SimulationConfig::default()
        .with_num_particles(64)
        .with_num_steps(1)
        .with_box_length(8.0)
        .with_seed(9);
    let sim = Simulation::new(config).unwrap();
    let hist =
        compute::pair_distance_histogram(sim.state(), 0, sim.container(), 0.25, 16).unwrap();
    // Nearest lattice neighbors are 2.0 apart: nothing closer
    assert!(hist.counts[..8].iter().all(|&c| c == 0.0));
    assert!(hist.counts[8] > 0.0);
    let g = hist.pair_correlation(sim.container(), 64);
    assert_eq!(g.len(), 16);
    assert!(g.iter().all(|x| x.is_finite() && *x > 0.0));
}

#[test]
fn thermostat_then_temperature() {
    let mut state = State::new(10, 1).unwrap();
    let mut rng = <rand::rngs::StdRng as rand::SeedableRng>::seed_from_u64(17);
    thermostat::maxwell_boltzmann(&mut state, 0, 1.0, &mut rng).unwrap();
    thermostat::scale_to_temperature(&mut state, 0, 1.2).unwrap();
    assert_relative_eq!(compute::temperature(&state, 0).unwrap(), 1.2, max_relative = 1e-12);

    let ke: f64 = state
        .velocities(0)
        .iter()
        .map(|v| kinetic_energy(v).iter().sum::<f64>())
        .sum();
    assert_relative_eq!(ke, compute::total_kinetic_energy(&state, 0).unwrap());
}
