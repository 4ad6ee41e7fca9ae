use num_traits::Float;

/// Euclidean magnitude of a vector.
///
/// ```rust
/// use ljmd::utils::norm;
///
/// assert_eq!(norm(&[3.0, 4.0, 0.0]), 5.0);
/// assert_eq!(norm(&[0.0f32; 3]), 0.0);
/// ```
pub fn norm<T: Float>(vector: &[T]) -> T {
    vector
        .iter()
        .fold(T::zero(), |acc, &x| acc + x * x)
        .sqrt()
}

/// Distance (magnitude) between two coordinates
pub fn distance(coord1: &[f64; 3], coord2: &[f64; 3]) -> f64 {
    norm(&sub(coord1, coord2))
}

pub fn add(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

pub fn sub(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub fn scale(a: &[f64; 3], factor: f64) -> [f64; 3] {
    [a[0] * factor, a[1] * factor, a[2] * factor]
}
