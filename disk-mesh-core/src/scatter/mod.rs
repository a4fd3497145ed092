pub mod settings;

use crate::{coord::Coord, scatter::settings::ScatterSettings, Scalar};
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::{error::Error, fmt};

#[cfg(feature = "parallel")]
macro_rules! iter {
    ($v:expr) => {
        $v.par_iter()
    };
}

#[cfg(not(feature = "parallel"))]
macro_rules! iter {
    ($v:expr) => {
        $v.iter()
    };
}

/// Error thrown during points placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterError {
    /// Requested more points than available.
    /// (requested, available)
    SetSizeExceeded(usize, usize),
    /// Could not find free place for next point in given iterations limit.
    /// (placed points)
    PlacementExhausted(usize),
    /// Bounding rectangle has no area.
    InvalidBounds,
}

impl fmt::Display for ScatterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetSizeExceeded(requested, available) => write!(
                f,
                "requested {} points but only {} are available",
                requested, available
            ),
            Self::PlacementExhausted(placed) => write!(
                f,
                "could not place point after {} points were placed",
                placed
            ),
            Self::InvalidBounds => write!(f, "bounding rectangle must have positive size"),
        }
    }
}

impl Error for ScatterError {}

/// Place `max_set_size` random points inside bounding rectangle, keeping minimal separation.
///
/// Candidate coordinate closer to a border than half of the separation is moved inward by
/// half of the separation. Candidate closer than the separation to any placed point is
/// rejected. First point is always accepted.
///
/// # Arguments
/// * `settings` - Placement settings.
/// * `rng` - Random numbers source.
///
/// # Returns
/// Points in creation order or error.
///
/// # Examples
/// ```
/// use disk_mesh_core::prelude::*;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let settings = ScatterSettings {
///     max_set_size: 20,
///     ..Default::default()
/// };
/// let points = scatter_points(&settings, &mut StdRng::seed_from_u64(7)).unwrap();
/// assert_eq!(points.len(), 20);
/// ```
pub fn scatter_points<R>(settings: &ScatterSettings, rng: &mut R) -> Result<Vec<Coord>, ScatterError>
where
    R: Rng + ?Sized,
{
    if !(settings.width > 0.0 && settings.height > 0.0) {
        return Err(ScatterError::InvalidBounds);
    }
    let separation = settings.points_separation.max(0.0);
    let sqr_separation = separation * separation;
    let mut points = Vec::<Coord>::with_capacity(settings.max_set_size);
    while points.len() < settings.max_set_size {
        let mut tries = 0;
        let point = loop {
            let candidate = clamp_to_border(
                Coord::new(
                    rng.gen::<Scalar>() * settings.width,
                    rng.gen::<Scalar>() * settings.height,
                ),
                settings.width,
                settings.height,
                separation * 0.5,
            );
            if !iter!(points).any(|p| (*p - candidate).sqr_magnitude() < sqr_separation) {
                break candidate;
            }
            tries += 1;
            if tries >= settings.max_iterations {
                tracing::warn!(placed = points.len(), tries, "points placement exhausted");
                return Err(ScatterError::PlacementExhausted(points.len()));
            }
        };
        if tries > 0 {
            tracing::trace!(index = points.len(), tries, "rejected candidates");
        }
        points.push(point);
    }
    tracing::debug!(points = points.len(), "scattered points");
    Ok(points)
}

/// Move coordinates closer to the border than `margin` inward by `margin`.
///
/// # Examples
/// ```
/// use disk_mesh_core::prelude::*;
///
/// assert_eq!(
///     clamp_to_border(Coord::new(2.0, 98.0), 100.0, 100.0, 5.0),
///     Coord::new(7.0, 93.0),
/// );
/// assert_eq!(
///     clamp_to_border(Coord::new(50.0, 5.0), 100.0, 100.0, 5.0),
///     Coord::new(50.0, 5.0),
/// );
/// ```
pub fn clamp_to_border(mut point: Coord, width: Scalar, height: Scalar, margin: Scalar) -> Coord {
    if point.x < margin {
        point.x += margin;
    }
    if point.x > width - margin {
        point.x -= margin;
    }
    if point.y < margin {
        point.y += margin;
    }
    if point.y > height - margin {
        point.y -= margin;
    }
    point
}

/// Returns first `set_size` points.
///
/// # Arguments
/// * `points` - All placed points.
/// * `set_size` - Active set size.
pub fn active_points(points: &[Coord], set_size: usize) -> Result<&[Coord], ScatterError> {
    points
        .get(..set_size)
        .ok_or(ScatterError::SetSizeExceeded(set_size, points.len()))
}

/// Shift every point X by its `y * factor`, useful to break ties of equal X before sorting.
pub fn shear_x(points: &mut [Coord], factor: Scalar) {
    for point in points {
        *point = point.sheared(factor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        mesh::{DiskMesh, GenerateDiskMeshError},
        triangulation::TriangulationError,
    };
    use rand::{rngs::StdRng, SeedableRng};

    fn has_separation(points: &[Coord], separation: Scalar) -> bool {
        points.iter().enumerate().all(|(i, a)| {
            points
                .iter()
                .skip(i + 1)
                .all(|b| a.distance(*b) >= separation)
        })
    }

    #[test]
    fn test_default_scatter() {
        let settings = ScatterSettings::default();
        let points = scatter_points(&settings, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(points.len(), settings.max_set_size);
        assert!(has_separation(&points, settings.points_separation));
        assert!(points.iter().all(|p| p.x >= 0.0
            && p.x <= settings.width
            && p.y >= 0.0
            && p.y <= settings.height));
    }

    #[test]
    fn test_seed_is_reproducible() {
        let settings = ScatterSettings::default();
        let a = scatter_points(&settings, &mut StdRng::seed_from_u64(1)).unwrap();
        let b = scatter_points(&settings, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_max_set_size_triangulates() {
        let settings = ScatterSettings::default();
        let points = scatter_points(&settings, &mut StdRng::seed_from_u64(3)).unwrap();
        let points = active_points(&points, settings.max_set_size).unwrap();
        let mesh = DiskMesh::generate(points).unwrap();
        assert_eq!(mesh.points.len(), 100);
        assert!(!mesh.triangles.is_empty());
        assert!(mesh.triangles.iter().all(|t| t
            .vertices()
            .iter()
            .all(|v| mesh.points.contains(v))));
    }

    #[test]
    fn test_placement_exhausted() {
        let settings = ScatterSettings {
            max_set_size: 10,
            points_separation: 100.0,
            width: 10.0,
            height: 10.0,
            max_iterations: 16,
            ..Default::default()
        };
        assert_eq!(
            scatter_points(&settings, &mut StdRng::seed_from_u64(0)),
            Err(ScatterError::PlacementExhausted(1))
        );
    }

    #[test]
    fn test_invalid_bounds() {
        let settings = ScatterSettings {
            width: 0.0,
            ..Default::default()
        };
        assert_eq!(
            scatter_points(&settings, &mut StdRng::seed_from_u64(0)),
            Err(ScatterError::InvalidBounds)
        );
    }

    #[test]
    fn test_active_points() {
        let points = [Coord::new(0.0, 0.0), Coord::new(1.0, 1.0), Coord::new(2.0, 0.0)];
        assert_eq!(active_points(&points, 2).unwrap().len(), 2);
        assert_eq!(active_points(&points, 3).unwrap(), &points);
        assert_eq!(
            active_points(&points, 4),
            Err(ScatterError::SetSizeExceeded(4, 3))
        );
        assert_eq!(
            DiskMesh::generate(active_points(&points, 2).unwrap()),
            Err(GenerateDiskMeshError::Triangulation(
                TriangulationError::InsufficientPoints(2)
            ))
        );
    }

    #[test]
    fn test_shear_breaks_ties() {
        let mut points = vec![Coord::new(4.0, 10.0), Coord::new(4.0, 20.0)];
        shear_x(&mut points, 0.01);
        assert!(points[0].x < points[1].x);
        shear_x(&mut points, -0.01);
        assert!((points[0].x - 4.0).abs() < 1e-5);
        assert!((points[1].x - 4.0).abs() < 1e-5);
    }
}
