use crate::Container;

/// Simple cubic lattice with lattice constant `a`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cubic {
    a: f64,
}
impl Cubic {
    pub fn new(a: f64) -> Self {
        let s = Self { a };
        s.assert_positive();
        s
    }
    /// The coarsest lattice that tiles the container evenly with at least
    /// `num_particles` sites
    pub fn fitting(container: &Container, num_particles: usize) -> Self {
        let per_side = Self::sites_per_side(num_particles);
        Self::new(container.length() / per_side as f64)
    }
    fn sites_per_side(num_particles: usize) -> usize {
        let mut n = (num_particles as f64).cbrt().round() as usize;
        while n * n * n < num_particles {
            n += 1;
        }
        n.max(1)
    }
    fn assert_positive(&self) {
        assert!(
            self.a > 0.0,
            "Lattice constant should be positive, found {}",
            self.a
        );
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    /// The first `num_particles` sites inside the container, offset by half a
    /// cell from the origin and ordered x-major
    pub fn coords_within(&self, container: &Container, num_particles: usize) -> Vec<[f64; 3]> {
        // Tolerate round-off when `a` divides the box length exactly
        let n = (container.length() / self.a + 1e-9).floor() as usize;
        let mut coords: Vec<[f64; 3]> = Vec::with_capacity(num_particles.min(n * n * n));

        'fill: for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    if coords.len() == num_particles {
                        break 'fill;
                    }
                    coords.push([
                        self.a * (i as f64 + 0.5),
                        self.a * (j as f64 + 0.5),
                        self.a * (k as f64 + 0.5),
                    ]);
                }
            }
        }
        coords
    }
}
