use crate::Scalar;
use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// Point coordinate.
///
/// # Examples
/// ```
/// use disk_mesh_core::prelude::*;
///
/// let a = Coord::new(0.0, 0.0);
/// let b = Coord::new(3.0, 4.0);
/// assert_eq!((b - a).magnitude(), 5.0);
/// assert_eq!((b - a).sqr_magnitude(), 25.0);
/// assert_eq!(a.distance(b), 5.0);
/// assert_eq!(Coord::from([1.0, 2.0]), Coord::new(1.0, 2.0));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    /// X value.
    pub x: Scalar,
    /// Y value.
    pub y: Scalar,
}

impl Coord {
    /// Create new point coordinate.
    ///
    /// # Arguments
    /// * `x` - X value.
    /// * `y` - Y value.
    #[inline]
    pub fn new(x: Scalar, y: Scalar) -> Self {
        Self { x, y }
    }

    /// Return squared length of the vector.
    #[inline]
    pub fn sqr_magnitude(self) -> Scalar {
        self.x * self.x + self.y * self.y
    }

    /// Return length of the vector.
    #[inline]
    pub fn magnitude(self) -> Scalar {
        self.sqr_magnitude().sqrt()
    }

    /// Return distance to other point.
    #[inline]
    pub fn distance(self, other: Self) -> Scalar {
        (other - self).magnitude()
    }

    /// Return point with X shifted by `y * factor`.
    ///
    /// ```plain
    ///   *        *
    ///   |   ->    \
    ///   *          *
    /// ```
    /// # Arguments
    /// * `factor` - Shear factor, negated factor reverts the shift.
    #[inline]
    pub fn sheared(self, factor: Scalar) -> Self {
        Self {
            x: self.x + self.y * factor,
            y: self.y,
        }
    }
}

impl From<[Scalar; 2]> for Coord {
    fn from([x, y]: [Scalar; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(Scalar, Scalar)> for Coord {
    fn from((x, y): (Scalar, Scalar)) -> Self {
        Self { x, y }
    }
}

impl From<Coord> for [Scalar; 2] {
    fn from(coord: Coord) -> Self {
        [coord.x, coord.y]
    }
}

impl Sub for Coord {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}
