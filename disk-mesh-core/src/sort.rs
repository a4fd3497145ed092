use crate::{coord::Coord, Scalar};
use std::{error::Error, fmt};

/// Error thrown when sorting points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortError {
    /// Coordinates buffer is empty or does not hold whole `(x, y)` pairs.
    /// (provided length)
    InvalidInput(usize),
}

impl fmt::Display for SortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(len) => write!(
                f,
                "invalid coordinates buffer of length {}: expected non-empty even length",
                len
            ),
        }
    }
}

impl Error for SortError {}

/// Merge sort with left-biased split and right-biased ties.
///
/// When number of items is odd, the extra item goes to the left half. While merging, an item
/// from the left half is taken only if it is strictly less than the current item from the right
/// half, so equal items coming from the right half are placed first. That makes this sort
/// unstable: ties are resolved by merge order, not by input order.
///
/// # Arguments
/// * `items` - Items to sort.
/// * `less` - Strict "less than" predicate.
///
/// # Returns
/// New sorted list.
///
/// # Examples
/// ```
/// use disk_mesh_core::prelude::*;
///
/// let sorted = merge_sort_by(&[(3, 'a'), (1, 'b'), (3, 'c'), (2, 'd')], |a, b| a.0 < b.0);
/// assert_eq!(sorted, vec![(1, 'b'), (2, 'd'), (3, 'c'), (3, 'a')]);
/// ```
pub fn merge_sort_by<T, F>(items: &[T], mut less: F) -> Vec<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    sort_range(items, &mut less)
}

fn sort_range<T, F>(items: &[T], less: &mut F) -> Vec<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    if items.len() <= 1 {
        return items.to_vec();
    }
    let middle = (items.len() + 1) / 2;
    let left = sort_range(&items[..middle], less);
    let right = sort_range(&items[middle..], less);
    merge(&left, &right, less)
}

fn merge<T, F>(left: &[T], right: &[T], less: &mut F) -> Vec<T>
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let mut result = Vec::with_capacity(left.len() + right.len());
    let mut l = 0;
    let mut r = 0;
    while l < left.len() && r < right.len() {
        if less(&left[l], &right[r]) {
            result.push(left[l]);
            l += 1;
        } else {
            result.push(right[r]);
            r += 1;
        }
    }
    result.extend_from_slice(&left[l..]);
    result.extend_from_slice(&right[r..]);
    result
}

/// Sort points by X coordinate, Y is carried along.
///
/// # Arguments
/// * `points` - Points in creation order.
///
/// # Returns
/// New list of points in non-decreasing X order or error when there are no points.
///
/// # Examples
/// ```
/// use disk_mesh_core::prelude::*;
///
/// let points = vec![
///     Coord::new(0.0, 0.0),
///     Coord::new(4.0, 0.0),
///     Coord::new(2.0, 3.0),
/// ];
/// assert_eq!(
///     sort_by_x(&points).unwrap(),
///     vec![
///         Coord::new(0.0, 0.0),
///         Coord::new(2.0, 3.0),
///         Coord::new(4.0, 0.0),
///     ],
/// );
/// assert_eq!(sort_by_x(&[]), Err(SortError::InvalidInput(0)));
/// ```
pub fn sort_by_x(points: &[Coord]) -> Result<Vec<Coord>, SortError> {
    if points.is_empty() {
        return Err(SortError::InvalidInput(0));
    }
    let sorted = merge_sort_by(points, |a, b| a.x < b.x);
    tracing::debug!(points = sorted.len(), "sorted points by x");
    Ok(sorted)
}

/// Sort flat `[x0, y0, x1, y1, ...]` coordinates buffer by X coordinate of each pair.
///
/// # Examples
/// ```
/// use disk_mesh_core::prelude::*;
///
/// assert_eq!(
///     sort_coords_by_x(&[5.0, 1.0, 2.0, 7.0]).unwrap(),
///     vec![2.0, 7.0, 5.0, 1.0],
/// );
/// assert_eq!(sort_coords_by_x(&[1.0, 2.0, 3.0]), Err(SortError::InvalidInput(3)));
/// ```
pub fn sort_coords_by_x(coords: &[Scalar]) -> Result<Vec<Scalar>, SortError> {
    let points = coords_to_points(coords)?;
    Ok(points_to_coords(&sort_by_x(&points)?))
}

/// Split flat coordinates buffer into points.
pub fn coords_to_points(coords: &[Scalar]) -> Result<Vec<Coord>, SortError> {
    if coords.is_empty() || coords.len() % 2 != 0 {
        return Err(SortError::InvalidInput(coords.len()));
    }
    Ok(coords
        .chunks_exact(2)
        .map(|c| Coord::new(c[0], c[1]))
        .collect::<Vec<_>>())
}

/// Flatten points into `[x0, y0, x1, y1, ...]` buffer.
pub fn points_to_coords(points: &[Coord]) -> Vec<Scalar> {
    points.iter().flat_map(|p| [p.x, p.y]).collect::<Vec<_>>()
}
