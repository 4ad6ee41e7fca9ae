use crate::{
    container::Container,
    error::Result,
    state::State,
    utils::{add, sub},
};

/// Minimum-image offset `xi - xj` along one axis of a periodic box.
///
/// The three periodic images `xj - L`, `xj` and `xj + L` are each wrapped
/// with `((xi - image + L/2) mod L) - L/2` (modulo into [0, L)) and the
/// smallest result is returned, so the offset lies in [-L/2, L/2]. A
/// non-finite coordinate gives NaN.
///
/// ```rust
/// use ljmd::neighbor::minimum_image_offset;
///
/// // Nearest image of 9.0 seen from 1.0 in a box of 10 is -1.0
/// assert_eq!(minimum_image_offset(1.0, 9.0, 10.0), 2.0);
/// ```
pub fn minimum_image_offset(xi: f64, xj: f64, length: f64) -> f64 {
    let half = 0.5 * length;
    [xj - length, xj, xj + length]
        .iter()
        .map(|image| (xi - image + half).rem_euclid(length) - half)
        .fold(f64::INFINITY, |min, offset| {
            if offset.is_nan() || offset < min {
                offset
            } else {
                min
            }
        })
}

/// Per-axis minimum-image offsets from `neighbor` to `reference`
pub fn closest_mirror(reference: &[f64; 3], neighbor: &[f64; 3], length: f64) -> [f64; 3] {
    [
        minimum_image_offset(reference[0], neighbor[0], length),
        minimum_image_offset(reference[1], neighbor[1], length),
        minimum_image_offset(reference[2], neighbor[2], length),
    ]
}

/// Sum of `reference - closest_mirror` over all neighbors.
///
/// Directions from different neighbors are merged into one vector, so the
/// result is a diagnostic signal and not suitable for force summation; use
/// [`separations`] for per-pair vectors. `neighbors` must not contain the
/// reference particle itself.
pub fn closest_separation(reference: &[f64; 3], neighbors: &[[f64; 3]], length: f64) -> [f64; 3] {
    neighbors.iter().fold([0.0; 3], |r, n| {
        add(&r, &sub(reference, &closest_mirror(reference, n, length)))
    })
}

/// Minimum-image displacement to `reference` from the nearest image of each neighbor
pub fn separations(reference: &[f64; 3], neighbors: &[[f64; 3]], length: f64) -> Vec<[f64; 3]> {
    neighbors
        .iter()
        .map(|n| closest_mirror(reference, n, length))
        .collect()
}

/// Call `f` with the index and minimum-image displacement of every neighbor
pub fn for_each_separation<F>(reference: &[f64; 3], neighbors: &[[f64; 3]], length: f64, mut f: F)
where
    F: FnMut(usize, [f64; 3]),
{
    for (j, n) in neighbors.iter().enumerate() {
        f(j, closest_mirror(reference, n, length));
    }
}

/// Aggregate minimum-image separation of one particle from all others at `time`
pub fn aggregate_separation(
    state: &State,
    time: usize,
    particle: usize,
    container: &Container,
) -> Result<[f64; 3]> {
    state.check_time(time)?;
    state.check_particle(particle)?;
    let reference = state.position(particle, time);
    let neighbors = state.neighbor_positions(time, particle);
    Ok(closest_separation(&reference, &neighbors, container.length()))
}
