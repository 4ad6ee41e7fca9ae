use std::f64::consts::PI;

use super::*;

/// Pair correlation estimate g(r) for each radius in `radii`.
///
/// g = 2V / (N (N - 1)) * mean(n) / (4 pi r^2 dr) with V = L^3, where `counts`
/// is the histogram of pair counts per radial bin of width `bin_width`.
pub fn pair_correlation(
    counts: &[f64],
    radii: &[f64],
    bin_width: f64,
    box_length: f64,
    num_particles: usize,
) -> Vec<f64> {
    let volume = box_length * box_length * box_length;
    let n = num_particles as f64;
    let mean_n = counts.iter().sum::<f64>() / counts.len() as f64;
    let prefactor = 2.0 * volume / (n * (n - 1.0)) * mean_n;
    radii
        .iter()
        .map(|r| prefactor / (4.0 * PI * r * r * bin_width))
        .collect()
}

/// Radial histogram of minimum-image pair distances
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    pub counts: Vec<f64>,
    /// Bin centres
    pub radii: Vec<f64>,
    pub bin_width: f64,
}

/// Count every unique pair at `time` into `num_bins` bins of width `bin_width`.
/// Pairs beyond the last bin are dropped.
pub fn pair_distance_histogram(
    state: &State,
    time: usize,
    container: &Container,
    bin_width: f64,
    num_bins: usize,
) -> Result<Histogram> {
    state.check_time(time)?;
    if !(bin_width.is_finite() && bin_width > 0.0) {
        return Err(Error::InvalidBinWidth(bin_width));
    }
    let positions = state.positions(time);
    let mut counts = vec![0.0; num_bins];
    for (i, posi) in positions.iter().enumerate() {
        let others = &positions[i + 1..];
        neighbor::for_each_separation(posi, others, container.length(), |_, r| {
            let bin = (norm(&r) / bin_width) as usize;
            if bin < num_bins {
                counts[bin] += 1.0;
            }
        });
    }
    let radii = (0..num_bins)
        .map(|k| (k as f64 + 0.5) * bin_width)
        .collect();
    Ok(Histogram {
        counts,
        radii,
        bin_width,
    })
}

impl Histogram {
    /// g(r) for this histogram
    pub fn pair_correlation(&self, container: &Container, num_particles: usize) -> Vec<f64> {
        pair_correlation(
            &self.counts,
            &self.radii,
            self.bin_width,
            container.length(),
            num_particles,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn matches_normalization_formula() {
        let g = pair_correlation(&[2.0, 4.0], &[1.0, 2.0], 0.1, 10.0, 5);
        let expected = 2.0 * 1000.0 / 20.0 * 3.0 / (4.0 * PI * 0.1);
        assert_relative_eq!(g[0], expected, max_relative = 1e-12);
        assert_relative_eq!(g[1], expected / 4.0, max_relative = 1e-12);
    }

    #[test]
    fn uniform_histogram_scales_with_inverse_square_radius() {
        let counts = vec![7.0; 5];
        let radii = [0.5, 1.0, 1.5, 2.0, 2.5];
        let g = pair_correlation(&counts, &radii, 0.5, 6.0, 10);
        for (gk, r) in g.iter().zip(radii.iter()) {
            assert_relative_eq!(gk * r * r, g[0] * 0.25, max_relative = 1e-12);
        }
        let doubled = pair_correlation(&vec![14.0; 5], &radii, 0.5, 6.0, 10);
        assert_relative_eq!(doubled[2], 2.0 * g[2], max_relative = 1e-12);
    }

    #[test]
    fn histogram_counts_unique_pairs() {
        let container = Container::new(10.0).unwrap();
        let mut state = State::new(3, 1).unwrap();
        // 0-1 at 1.0 through the boundary, 0-2 at 2.2, 1-2 at 3.2 (past the last bin)
        state
            .set_positions(0, &[[0.5, 5.0, 5.0], [9.5, 5.0, 5.0], [2.7, 5.0, 5.0]])
            .unwrap();
        let hist = pair_distance_histogram(&state, 0, &container, 0.5, 6).unwrap();
        assert_eq!(hist.counts, vec![0.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
        assert_eq!(hist.counts.iter().sum::<f64>(), 2.0);
        assert_relative_eq!(hist.radii[0], 0.25);
        assert_relative_eq!(hist.radii[5], 2.75);
        assert_eq!(hist.pair_correlation(&container, 3).len(), 6);
    }

    #[test]
    fn histogram_rejects_bad_bin_width() {
        let container = Container::new(10.0).unwrap();
        let state = State::new(2, 1).unwrap();
        assert_eq!(
            pair_distance_histogram(&state, 0, &container, 0.0, 4),
            Err(Error::InvalidBinWidth(0.0))
        );
    }
}
