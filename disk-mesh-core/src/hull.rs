use crate::{coord::Coord, triangle::Triangle};

/// Tells if `point` lies on the positive side of directed line `from -> to`.
///
/// With Y pointing down (screen space) positive side means visually below the line when
/// `from.x < to.x`.
///
/// # Examples
/// ```
/// use disk_mesh_core::prelude::*;
///
/// let a = Coord::new(0.0, 0.0);
/// let b = Coord::new(2.0, 0.0);
/// assert!(is_above(Coord::new(1.0, 1.0), a, b));
/// assert!(!is_above(Coord::new(1.0, -1.0), a, b));
/// assert!(!is_above(Coord::new(5.0, 0.0), a, b));
/// ```
#[inline]
pub fn is_above(point: Coord, from: Coord, to: Coord) -> bool {
    (point.y - from.y) * (to.x - from.x) - (point.x - from.x) * (to.y - from.y) > 0.0
}

/// Side of the hull chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HullSide {
    /// Chain pops its last point when new point is above the last edge.
    Upper,
    /// Chain pops its last point when new point is not above the last edge (collinear included).
    Lower,
}

impl HullSide {
    /// Tells if chain of this side drops its last point for given `is_above` test result.
    #[inline]
    pub fn pops(self, above: bool) -> bool {
        match self {
            Self::Upper => above,
            Self::Lower => !above,
        }
    }
}

/// One side of the convex chain built from points swept in X order.
#[derive(Debug, Clone, PartialEq)]
pub struct Hull {
    side: HullSide,
    chain: Vec<Coord>,
}

impl Hull {
    /// Create new empty hull chain.
    pub fn new(side: HullSide) -> Self {
        Self {
            side,
            chain: vec![],
        }
    }

    /// Create new empty hull chain with preallocated space for `capacity` points.
    pub fn with_capacity(side: HullSide, capacity: usize) -> Self {
        Self {
            side,
            chain: Vec::with_capacity(capacity),
        }
    }

    pub fn side(&self) -> HullSide {
        self.side
    }

    /// Returns chain points, the newest one last.
    pub fn chain(&self) -> &[Coord] {
        &self.chain
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Append point without resolving concavities.
    pub fn push(&mut self, point: Coord) {
        self.chain.push(point);
    }

    /// Insert point into the chain.
    ///
    /// While the chain has at least two points and the side polarity holds for its last edge,
    /// triangle `(last-but-one, last, point)` is emitted and last point is popped.
    /// Then point is appended.
    ///
    /// # Arguments
    /// * `point` - New frontier point, must not precede chain points in X order.
    /// * `triangles` - Output list that receives emitted triangles.
    ///
    /// # Returns
    /// Number of emitted triangles.
    ///
    /// # Examples
    /// ```
    /// use disk_mesh_core::prelude::*;
    ///
    /// let mut hull = Hull::new(HullSide::Lower);
    /// hull.push(Coord::new(0.0, 0.0));
    /// hull.push(Coord::new(1.0, 1.0));
    /// let mut triangles = vec![];
    /// assert_eq!(hull.insert(Coord::new(2.0, 0.0), &mut triangles), 1);
    /// assert_eq!(hull.chain(), &[Coord::new(0.0, 0.0), Coord::new(2.0, 0.0)]);
    /// assert_eq!(
    ///     triangles,
    ///     vec![Triangle::new(
    ///         Coord::new(0.0, 0.0),
    ///         Coord::new(1.0, 1.0),
    ///         Coord::new(2.0, 0.0),
    ///     )],
    /// );
    /// ```
    pub fn insert(&mut self, point: Coord, triangles: &mut Vec<Triangle>) -> usize {
        let mut emitted = 0;
        while self.chain.len() >= 2 {
            let last = self.chain[self.chain.len() - 1];
            let before = self.chain[self.chain.len() - 2];
            if !self.side.pops(is_above(point, before, last)) {
                break;
            }
            triangles.push(Triangle::new(before, last, point));
            self.chain.pop();
            emitted += 1;
        }
        self.chain.push(point);
        emitted
    }
}
