use crate::{
    coord::Coord,
    hull::{Hull, HullSide},
    triangle::Triangle,
};
use std::{error::Error, fmt};

/// Error thrown during triangulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangulationError {
    /// Triangulation needs at least 3 points.
    /// (provided)
    InsufficientPoints(usize),
}

impl fmt::Display for TriangulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientPoints(count) => {
                write!(f, "triangulation needs at least 3 points, got {}", count)
            }
        }
    }
}

impl Error for TriangulationError {}

/// Incremental triangulation of points sorted by X.
///
/// Keeps upper and lower hull chains of points swept so far and emits one triangle per point
/// popped from either chain. It is a deterministic sweep heuristic: produced triangles are
/// neither Delaunay nor checked against overlapping, and collinear points may give triangles
/// with zero area.
///
/// # Examples
/// ```
/// use disk_mesh_core::prelude::*;
///
/// let points = sort_by_x(&[
///     Coord::new(0.0, 5.0),
///     Coord::new(6.0, 4.0),
///     Coord::new(2.0, 0.0),
///     Coord::new(9.0, 6.0),
///     Coord::new(3.0, 9.0),
/// ])
/// .unwrap();
/// let mut triangulator = HullTriangulator::new(points[0], points[1], points[2]);
/// for point in &points[3..] {
///     triangulator.insert(*point);
/// }
/// assert_eq!(triangulator.triangles().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HullTriangulator {
    upper: Hull,
    lower: Hull,
    triangles: Vec<Triangle>,
}

impl HullTriangulator {
    /// Create triangulator from seed triangle made of the three lowest X points.
    ///
    /// Seed triangle is emitted first. Upper chain starts with the first point and lower chain
    /// with the second one, third point closes both chains.
    pub fn new(first: Coord, second: Coord, third: Coord) -> Self {
        Self::with_capacity(first, second, third, 3)
    }

    /// Same as `new` but preallocates space for `points` points.
    pub fn with_capacity(first: Coord, second: Coord, third: Coord, points: usize) -> Self {
        let mut upper = Hull::with_capacity(HullSide::Upper, points);
        let mut lower = Hull::with_capacity(HullSide::Lower, points);
        let mut triangles = Vec::with_capacity(points.saturating_sub(2).max(1));
        triangles.push(Triangle::new(first, second, third));
        upper.push(first);
        lower.push(second);
        upper.push(third);
        lower.push(third);
        tracing::trace!(?first, ?second, ?third, "seed triangle");
        Self {
            upper,
            lower,
            triangles,
        }
    }

    /// Insert next point in X order into upper then lower chain.
    ///
    /// # Returns
    /// Number of emitted triangles.
    pub fn insert(&mut self, point: Coord) -> usize {
        self.upper.insert(point, &mut self.triangles) + self.lower.insert(point, &mut self.triangles)
    }

    pub fn upper(&self) -> &Hull {
        &self.upper
    }

    pub fn lower(&self) -> &Hull {
        &self.lower
    }

    /// Triangles emitted so far in emission order.
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Discard hull chains and return emitted triangles.
    pub fn into_triangles(self) -> Vec<Triangle> {
        self.triangles
    }
}

/// Triangulate points sorted by X.
///
/// # Arguments
/// * `sorted` - Points in non-decreasing X order.
///
/// # Returns
/// Triangles in emission order or error when there are less than 3 points.
///
/// # Examples
/// ```
/// use disk_mesh_core::prelude::*;
///
/// let points = [
///     Coord::new(0.0, 0.0),
///     Coord::new(2.0, 3.0),
///     Coord::new(4.0, 0.0),
/// ];
/// assert_eq!(triangulate(&points).unwrap(), vec![Triangle::from(points)]);
/// assert_eq!(
///     triangulate(&points[..2]),
///     Err(TriangulationError::InsufficientPoints(2)),
/// );
/// ```
pub fn triangulate(sorted: &[Coord]) -> Result<Vec<Triangle>, TriangulationError> {
    if sorted.len() < 3 {
        return Err(TriangulationError::InsufficientPoints(sorted.len()));
    }
    let mut triangulator =
        HullTriangulator::with_capacity(sorted[0], sorted[1], sorted[2], sorted.len());
    for point in &sorted[3..] {
        triangulator.insert(*point);
    }
    let triangles = triangulator.into_triangles();
    tracing::debug!(
        points = sorted.len(),
        triangles = triangles.len(),
        "triangulated points"
    );
    Ok(triangles)
}
