use crate::{
    coord::Coord,
    sort::{coords_to_points, points_to_coords, sort_by_x, SortError},
    triangle::Triangle,
    triangulation::{triangulate, TriangulationError},
    Scalar,
};
use serde::{Deserialize, Serialize};
use std::{collections::HashMap, error::Error, fmt};

/// Error thrown during disk mesh generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateDiskMeshError {
    /// Points could not be sorted.
    Sort(SortError),
    /// Sorted points could not be triangulated.
    Triangulation(TriangulationError),
}

impl fmt::Display for GenerateDiskMeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sort(error) => write!(f, "cannot sort points: {}", error),
            Self::Triangulation(error) => write!(f, "cannot triangulate points: {}", error),
        }
    }
}

impl Error for GenerateDiskMeshError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sort(error) => Some(error),
            Self::Triangulation(error) => Some(error),
        }
    }
}

impl From<SortError> for GenerateDiskMeshError {
    fn from(error: SortError) -> Self {
        Self::Sort(error)
    }
}

impl From<TriangulationError> for GenerateDiskMeshError {
    fn from(error: TriangulationError) -> Self {
        Self::Triangulation(error)
    }
}

/// Disk mesh: points sorted by X and triangles built over them.
///
/// # Examples
/// ```
/// use disk_mesh_core::prelude::*;
///
/// let mesh = DiskMesh::from_flat(&[0.0, 0.0, 4.0, 0.0, 2.0, 3.0]).unwrap();
/// assert_eq!(mesh.point_coords(), vec![0.0, 0.0, 2.0, 3.0, 4.0, 0.0]);
/// assert_eq!(mesh.triangle_coords(), vec![0.0, 0.0, 2.0, 3.0, 4.0, 0.0]);
/// assert_eq!(mesh.edges().count(), 3);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiskMesh {
    /// List of points in non-decreasing X order.
    pub points: Vec<Coord>,
    /// List of triangles in emission order.
    pub triangles: Vec<Triangle>,
}

impl DiskMesh {
    /// Sort points by X and triangulate them.
    ///
    /// # Arguments
    /// * `points` - Points in any order, at least 3.
    ///
    /// # Returns
    /// Disk mesh or generation error.
    pub fn generate(points: &[Coord]) -> Result<Self, GenerateDiskMeshError> {
        if points.len() < 3 {
            return Err(TriangulationError::InsufficientPoints(points.len()).into());
        }
        let points = sort_by_x(points)?;
        let triangles = triangulate(&points)?;
        Ok(Self { points, triangles })
    }

    /// Same as `generate` for flat `[x0, y0, x1, y1, ...]` coordinates buffer.
    pub fn from_flat(coords: &[Scalar]) -> Result<Self, GenerateDiskMeshError> {
        Self::generate(&coords_to_points(coords)?)
    }

    /// Returns flat buffer of sorted points, two values per point.
    pub fn point_coords(&self) -> Vec<Scalar> {
        points_to_coords(&self.points)
    }

    /// Returns flat buffer of triangles, six values per triangle.
    pub fn triangle_coords(&self) -> Vec<Scalar> {
        self.triangles
            .iter()
            .flat_map(|t| t.coords())
            .collect::<Vec<_>>()
    }

    /// Returns triangles as indices into `points`.
    ///
    /// # Returns
    /// `[a, b, c]` indices per triangle or `None` if any vertex is not one of the points.
    ///
    /// # Examples
    /// ```
    /// use disk_mesh_core::prelude::*;
    ///
    /// let mesh = DiskMesh::from_flat(&[0.0, 0.0, 4.0, 0.0, 2.0, 3.0, 6.0, 5.0]).unwrap();
    /// assert_eq!(mesh.indexed_triangles(), Some(vec![[0, 1, 2], [0, 2, 3]]));
    /// ```
    pub fn indexed_triangles(&self) -> Option<Vec<[usize; 3]>> {
        let mut mapping = HashMap::with_capacity(self.points.len());
        for (i, p) in self.points.iter().enumerate() {
            mapping.entry(Self::point_key(*p)).or_insert(i);
        }
        self.triangles
            .iter()
            .map(|t| {
                Some([
                    *mapping.get(&Self::point_key(t.a))?,
                    *mapping.get(&Self::point_key(t.b))?,
                    *mapping.get(&Self::point_key(t.c))?,
                ])
            })
            .collect()
    }

    /// Returns iterator over closed loop edges of every triangle.
    pub fn edges(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.triangles.iter().flat_map(|t| t.edges())
    }

    fn point_key(point: Coord) -> (u32, u32) {
        (point.x.to_bits(), point.y.to_bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_errors() {
        assert_eq!(
            DiskMesh::from_flat(&[]),
            Err(GenerateDiskMeshError::Sort(SortError::InvalidInput(0)))
        );
        assert_eq!(
            DiskMesh::from_flat(&[1.0, 2.0, 3.0]),
            Err(GenerateDiskMeshError::Sort(SortError::InvalidInput(3)))
        );
        assert_eq!(
            DiskMesh::from_flat(&[1.0, 2.0, 3.0, 4.0]),
            Err(GenerateDiskMeshError::Triangulation(
                TriangulationError::InsufficientPoints(2)
            ))
        );
        assert_eq!(
            DiskMesh::generate(&[]),
            Err(GenerateDiskMeshError::Triangulation(
                TriangulationError::InsufficientPoints(0)
            ))
        );
    }

    #[test]
    fn test_generate_sorts_before_triangulation() {
        let mesh = DiskMesh::generate(&[
            Coord::new(11.0, 11.0),
            Coord::new(1.0, 10.0),
            Coord::new(10.0, 1.0),
            Coord::new(0.0, 0.0),
        ])
        .unwrap();
        assert!(mesh.points.windows(2).all(|w| w[0].x <= w[1].x));
        assert_eq!(mesh.triangles.len(), 2);
        assert_eq!(mesh.triangle_coords().len(), 12);
        assert_eq!(mesh.point_coords().len(), 8);
        let edges = mesh.edges().collect::<Vec<_>>();
        assert_eq!(edges.len(), 6);
        assert_eq!(edges[0], (Coord::new(0.0, 0.0), Coord::new(1.0, 10.0)));
        assert_eq!(edges[2], (Coord::new(10.0, 1.0), Coord::new(0.0, 0.0)));
    }

    #[test]
    fn test_error_messages() {
        let error = GenerateDiskMeshError::from(TriangulationError::InsufficientPoints(1));
        assert_eq!(
            error.to_string(),
            "cannot triangulate points: triangulation needs at least 3 points, got 1"
        );
        assert!(error.source().is_some());
    }
}
