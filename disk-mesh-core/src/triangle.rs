use crate::{coord::Coord, Scalar};
use serde::{Deserialize, Serialize};

/// Triangle made of three point coordinates in emission order.
///
/// # Examples
/// ```
/// use disk_mesh_core::prelude::*;
///
/// let t = Triangle::new(
///     Coord::new(0.0, 0.0),
///     Coord::new(4.0, 0.0),
///     Coord::new(0.0, 3.0),
/// );
/// assert_eq!(t.area(), 6.0);
/// assert_eq!(t.coords(), [0.0, 0.0, 4.0, 0.0, 0.0, 3.0]);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// First point.
    pub a: Coord,
    /// Second point.
    pub b: Coord,
    /// Third point.
    pub c: Coord,
}

impl Triangle {
    /// Create new triangle.
    #[inline]
    pub fn new(a: Coord, b: Coord, c: Coord) -> Self {
        Self { a, b, c }
    }

    /// Returns vertices in order.
    #[inline]
    pub fn vertices(&self) -> [Coord; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns flattened vertices: `[x1, y1, x2, y2, x3, y3]`.
    pub fn coords(&self) -> [Scalar; 6] {
        [self.a.x, self.a.y, self.b.x, self.b.y, self.c.x, self.c.y]
    }

    /// Returns edges of the closed loop `a -> b -> c -> a`.
    pub fn edges(&self) -> [(Coord, Coord); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Returns doubled signed area, positive when `a -> b -> c` turns counter-clockwise
    /// in Y-up space.
    pub fn doubled_signed_area(&self) -> Scalar {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.x * ac.y - ac.x * ab.y
    }

    /// Returns unsigned area.
    pub fn area(&self) -> Scalar {
        self.doubled_signed_area().abs() * 0.5
    }

    /// Tells if given point is one of the vertices.
    pub fn has_vertex(&self, point: Coord) -> bool {
        self.a == point || self.b == point || self.c == point
    }
}

impl From<[Coord; 3]> for Triangle {
    fn from([a, b, c]: [Coord; 3]) -> Self {
        Self { a, b, c }
    }
}
