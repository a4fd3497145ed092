pub mod settings;

use crate::settings::{DiskColor, GenerateDiskImageSettings};
use disk_mesh_core::{coord::Coord, mesh::DiskMesh, Scalar};
use image::{Rgba, RgbaImage};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Generate image of disk mesh: triangle edges first, then disks on top of them.
///
/// # Arguments
/// * `mesh` - Mesh to draw.
/// * `settings` - Image generation settings.
///
/// # Returns
/// RGBA image of given size.
///
/// # Examples
/// ```
/// use disk_mesh_core::mesh::DiskMesh;
/// use disk_mesh_image::{generate_disk_mesh_image, settings::GenerateDiskImageSettings};
///
/// let mesh = DiskMesh::from_flat(&[10.0, 10.0, 50.0, 10.0, 30.0, 40.0]).unwrap();
/// let settings = GenerateDiskImageSettings {
///     width: 64,
///     height: 64,
///     ..Default::default()
/// };
/// let image = generate_disk_mesh_image(&mesh, &settings);
/// assert_eq!(image.dimensions(), (64, 64));
/// ```
pub fn generate_disk_mesh_image(mesh: &DiskMesh, settings: &GenerateDiskImageSettings) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(settings.width, settings.height, Rgba(settings.background));
    apply_mesh_on_image(&mut image, mesh, settings.edge_color);
    let radius = settings.point_size * 0.5;
    for (point, color) in mesh
        .points
        .iter()
        .zip(disk_colors(mesh.points.len(), settings.disk_color))
    {
        apply_disk_on_image(&mut image, *point, radius, color);
    }
    image
}

/// Returns color of each disk.
///
/// # Arguments
/// * `count` - Number of disks.
/// * `source` - Colors source.
pub fn disk_colors(count: usize, source: DiskColor) -> Vec<[u8; 4]> {
    match source {
        DiskColor::Solid(color) => vec![color; count],
        DiskColor::Random(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            (0..count)
                .map(|_| {
                    let [r, g, b] = rng.gen::<[u8; 3]>();
                    [r, g, b, 255]
                })
                .collect::<Vec<_>>()
        }
    }
}

/// Draw every triangle of the mesh as closed line loop.
pub fn apply_mesh_on_image(image: &mut RgbaImage, mesh: &DiskMesh, color: [u8; 4]) {
    for (from, to) in mesh.edges() {
        apply_line_on_image(image, from, to, color);
    }
}

/// Fill pixels which centers are closer than `radius` to `center`.
pub fn apply_disk_on_image(image: &mut RgbaImage, center: Coord, radius: Scalar, color: [u8; 4]) {
    let fx = (center.x - radius).floor() as isize;
    let fy = (center.y - radius).floor() as isize;
    let tx = (center.x + radius).ceil() as isize;
    let ty = (center.y + radius).ceil() as isize;
    for y in fy..=ty {
        for x in fx..=tx {
            let pixel = Coord::new(x as Scalar + 0.5, y as Scalar + 0.5);
            if (pixel - center).magnitude() < radius {
                put_pixel_checked(image, x, y, color);
            }
        }
    }
}

/// Draw segment by stepping along its longer axis, one pixel per step, both ends included.
pub fn apply_line_on_image(image: &mut RgbaImage, from: Coord, to: Coord, color: [u8; 4]) {
    let delta = to - from;
    let steps = delta.x.abs().max(delta.y.abs()).ceil() as usize;
    if steps == 0 {
        put_pixel_checked(image, from.x.round() as isize, from.y.round() as isize, color);
        return;
    }
    for i in 0..=steps {
        let factor = i as Scalar / steps as Scalar;
        let x = (from.x + delta.x * factor).round() as isize;
        let y = (from.y + delta.y * factor).round() as isize;
        put_pixel_checked(image, x, y, color);
    }
}

fn put_pixel_checked(image: &mut RgbaImage, x: isize, y: isize, color: [u8; 4]) {
    if x >= 0 && x < image.width() as _ && y >= 0 && y < image.height() as _ {
        image.put_pixel(x as _, y as _, Rgba(color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [u8; 4] = [255, 0, 0, 255];
    const GREEN: [u8; 4] = [0, 255, 0, 255];
    const GRAY: [u8; 4] = [127, 127, 127, 255];

    fn mesh() -> DiskMesh {
        DiskMesh::from_flat(&[10.0, 10.0, 50.0, 10.0, 30.0, 40.0]).unwrap()
    }

    fn settings() -> GenerateDiskImageSettings {
        GenerateDiskImageSettings {
            width: 64,
            height: 64,
            point_size: 6.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_mesh_image() {
        let image = generate_disk_mesh_image(&mesh(), &settings());
        assert_eq!(image.get_pixel(0, 0).0, GRAY);
        assert_eq!(image.get_pixel(63, 63).0, GRAY);
        // Disks are drawn over edges.
        assert_eq!(image.get_pixel(10, 10).0, RED);
        assert_eq!(image.get_pixel(30, 40).0, RED);
        assert_eq!(image.get_pixel(50, 10).0, RED);
        // Middle of the horizontal edge.
        assert_eq!(image.get_pixel(30, 10).0, GREEN);
        // Inside of the triangle stays empty.
        assert_eq!(image.get_pixel(30, 20).0, GRAY);
    }

    #[test]
    fn test_disk_radius() {
        let mut image = RgbaImage::from_pixel(16, 16, Rgba(GRAY));
        apply_disk_on_image(&mut image, Coord::new(8.0, 8.0), 3.0, RED);
        assert_eq!(image.get_pixel(8, 8).0, RED);
        assert_eq!(image.get_pixel(7, 7).0, RED);
        assert_eq!(image.get_pixel(10, 8).0, RED);
        assert_eq!(image.get_pixel(11, 8).0, GRAY);
        assert_eq!(image.get_pixel(5, 5).0, GRAY);
    }

    #[test]
    fn test_out_of_bounds_drawing_is_clipped() {
        let mut image = RgbaImage::from_pixel(8, 8, Rgba(GRAY));
        apply_disk_on_image(&mut image, Coord::new(-2.0, 4.0), 3.0, RED);
        apply_line_on_image(&mut image, Coord::new(-10.0, 2.0), Coord::new(20.0, 2.0), GREEN);
        assert_eq!(image.get_pixel(0, 4).0, RED);
        assert_eq!(image.get_pixel(7, 2).0, GREEN);
    }

    #[test]
    fn test_steep_line_is_continuous() {
        let mut image = RgbaImage::from_pixel(8, 8, Rgba(GRAY));
        apply_line_on_image(&mut image, Coord::new(3.0, 7.0), Coord::new(0.0, 0.0), GREEN);
        assert_eq!(image.get_pixel(0, 0).0, GREEN);
        assert_eq!(image.get_pixel(3, 7).0, GREEN);
        for y in 0..8 {
            assert!((0..8).any(|x| image.get_pixel(x, y).0 == GREEN), "gap at row {}", y);
        }
        assert_eq!(image.get_pixel(7, 0).0, GRAY);
    }

    #[test]
    fn test_zero_length_line_puts_pixel() {
        let mut image = RgbaImage::from_pixel(4, 4, Rgba(GRAY));
        apply_line_on_image(&mut image, Coord::new(2.2, 0.8), Coord::new(2.2, 0.8), GREEN);
        assert_eq!(image.get_pixel(2, 1).0, GREEN);
    }

    #[test]
    fn test_disk_colors() {
        assert_eq!(disk_colors(2, DiskColor::Solid(RED)), vec![RED, RED]);
        let colors = disk_colors(5, DiskColor::Random(9));
        assert_eq!(colors.len(), 5);
        assert!(colors.iter().all(|c| c[3] == 255));
        assert_eq!(colors, disk_colors(5, DiskColor::Random(9)));

        let settings = GenerateDiskImageSettings {
            disk_color: DiskColor::Random(9),
            ..settings()
        };
        let image = generate_disk_mesh_image(&mesh(), &settings);
        assert_eq!(image.get_pixel(10, 10).0, colors[0]);
    }
}
