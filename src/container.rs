use crate::error::{Error, Result};

/// Boundary wrap policy for positions leaving the box.
///
/// SingleStep: shift (or reflect below zero) by one box length, once
/// Modulo: full periodic wrap into [0, L)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Wrap {
    #[default]
    SingleStep,
    Modulo,
}

/// Single-step boundary correction for a cubic box of side `length`.
///
/// Per axis, a coordinate below zero becomes `length - x` and one above
/// `length` becomes `x - length`. Only one correction is applied, so a
/// coordinate displaced by more than one box length stays out of range.
///
/// ```rust
/// use ljmd::container::apply_boundary;
///
/// assert_eq!(apply_boundary([11.0, 5.0, -1.0], 10.0), [1.0, 5.0, 11.0]);
/// ```
pub fn apply_boundary(mut position: [f64; 3], length: f64) -> [f64; 3] {
    for x in position.iter_mut() {
        if *x < 0.0 {
            *x = length - *x;
        } else if *x > length {
            *x -= length;
        }
    }
    position
}

/// Full periodic wrap of every coordinate into [0, length)
pub fn wrap_modulo(mut position: [f64; 3], length: f64) -> [f64; 3] {
    for x in position.iter_mut() {
        let wrapped = x.rem_euclid(length);
        // rem_euclid rounds tiny negative values up to exactly `length`
        *x = if wrapped == length { 0.0 } else { wrapped };
    }
    position
}

/// Simulation box: a periodic cube and the wrap policy used on its boundaries
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
    length: f64,
    wrap: Wrap,
}
impl Container {
    // Creation

    /// Create a cubic container with the single-step wrap policy
    pub fn new(length: f64) -> Result<Self> {
        Self::with_wrap(length, Wrap::default())
    }
    pub fn with_wrap(length: f64, wrap: Wrap) -> Result<Self> {
        if !(length.is_finite() && length > 0.0) {
            return Err(Error::InvalidBoxLength(length));
        }
        Ok(Self { length, wrap })
    }

    // Getters
    pub fn length(&self) -> f64 {
        self.length
    }
    pub fn wrap(&self) -> Wrap {
        self.wrap
    }

    /// Check whether a coordinate lies inside [0, L) on every axis
    pub fn contains(&self, coord: &[f64; 3]) -> bool {
        coord.iter().all(|&x| (0.0..self.length).contains(&x))
    }

    /// Bring a position back into the box using the configured policy
    pub fn apply_boundary(&self, position: [f64; 3]) -> [f64; 3] {
        let wrapped = match self.wrap {
            Wrap::SingleStep => apply_boundary(position, self.length),
            Wrap::Modulo => wrap_modulo(position, self.length),
        };
        if !self.contains(&wrapped) {
            log::warn!(
                "Position {:?} is still outside the box of length {} after wrapping",
                wrapped,
                self.length
            );
        }
        wrapped
    }
}
