use disk_mesh_core::prelude::*;
use disk_mesh_image::{
    generate_disk_mesh_image,
    settings::{DiskColor, GenerateDiskImageSettings},
};
use minifb::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::time::Duration;

const MIN_SET_SIZE: usize = 3;
const SAVE_PATH: &str = "./resources/save.json";

fn main() {
    tracing_subscriber::fmt().with_target(false).init();

    let mut playground = Playground::new(ScatterSettings::default(), StdRng::from_entropy());
    let width = playground.settings.width as usize;
    let height = playground.settings.height as usize;
    let mut window = Window::new(
        "Disk Mesh Playground",
        width,
        height,
        WindowOptions::default(),
    )
    .expect("Could not create window");

    window.limit_update_rate(Some(Duration::from_micros(16600)));

    let mut dirty = true;
    while window.is_open() && !window.is_key_down(Key::Escape) {
        if window.is_key_pressed(Key::Up, KeyRepeat::Yes) {
            dirty |= playground.change_set_size(1);
        }
        if window.is_key_pressed(Key::Down, KeyRepeat::Yes) {
            dirty |= playground.change_set_size(-1);
        }
        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            dirty |= playground.rescatter();
        }
        if window.is_key_pressed(Key::C, KeyRepeat::No) {
            playground.random_colors = !playground.random_colors;
            dirty = true;
        }
        if window.is_key_pressed(Key::S, KeyRepeat::No) {
            if let Some(mesh) = &playground.mesh {
                save(mesh);
            }
        }
        if dirty {
            dirty = false;
            let image = generate_disk_mesh_image(
                playground.mesh.as_ref().unwrap_or(&DiskMesh::default()),
                &playground.image_settings(),
            );
            let buffer = image
                .pixels()
                .map(|pixel| {
                    let [r, g, b, _] = pixel.0;
                    (b as u32) | ((g as u32) << 8) | ((r as u32) << 16)
                })
                .collect::<Vec<_>>();
            window
                .update_with_buffer(&buffer, width, height)
                .expect("Could not update window buffer");
        } else {
            window.update();
        }
    }
}

struct Playground {
    settings: ScatterSettings,
    rng: StdRng,
    points: Vec<Coord>,
    set_size: usize,
    color_seed: u64,
    random_colors: bool,
    mesh: Option<DiskMesh>,
}

impl Playground {
    fn new(settings: ScatterSettings, rng: StdRng) -> Self {
        let set_size = settings.max_set_size;
        let mut result = Self {
            settings,
            rng,
            points: vec![],
            set_size,
            color_seed: 0,
            random_colors: false,
            mesh: None,
        };
        result.rescatter();
        result
    }

    /// Changing set size scatters whole new point set.
    fn change_set_size(&mut self, delta: isize) -> bool {
        let set_size = (self.set_size as isize + delta)
            .max(MIN_SET_SIZE as isize)
            .min(self.settings.max_set_size as isize) as usize;
        if set_size == self.set_size {
            return false;
        }
        self.set_size = set_size;
        self.rescatter()
    }

    fn rescatter(&mut self) -> bool {
        match scatter_points(&self.settings, &mut self.rng) {
            Ok(points) => {
                self.points = points;
                self.color_seed = self.rng.gen();
                self.rebuild();
                true
            }
            Err(error) => {
                tracing::warn!(%error, "cannot scatter points");
                false
            }
        }
    }

    fn rebuild(&mut self) {
        let result = match active_points(&self.points, self.set_size) {
            Ok(points) => DiskMesh::generate(points),
            Err(error) => {
                tracing::warn!(%error, "cannot select active points");
                self.mesh = None;
                return;
            }
        };
        self.mesh = match result {
            Ok(mesh) => {
                tracing::info!(
                    set_size = self.set_size,
                    triangles = mesh.triangles.len(),
                    "mesh recomputed"
                );
                Some(mesh)
            }
            Err(error) => {
                tracing::warn!(%error, "cannot generate mesh");
                None
            }
        };
    }

    fn image_settings(&self) -> GenerateDiskImageSettings {
        GenerateDiskImageSettings {
            width: self.settings.width as _,
            height: self.settings.height as _,
            point_size: self.settings.point_size,
            disk_color: if self.random_colors {
                DiskColor::Random(self.color_seed)
            } else {
                DiskColor::default()
            },
            ..Default::default()
        }
    }
}

fn save(mesh: &DiskMesh) {
    let content = match serde_json::to_string(mesh) {
        Ok(content) => content,
        Err(error) => {
            tracing::error!(%error, "cannot serialize mesh");
            return;
        }
    };
    if let Err(error) = std::fs::create_dir_all("./resources") {
        tracing::error!(%error, "cannot create resources directory");
        return;
    }
    match std::fs::write(SAVE_PATH, content) {
        Ok(_) => tracing::info!(path = SAVE_PATH, "mesh saved"),
        Err(error) => tracing::error!(%error, "cannot save mesh"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playground() -> Playground {
        let settings = ScatterSettings {
            max_set_size: 8,
            width: 200.0,
            height: 200.0,
            ..Default::default()
        };
        Playground::new(settings, StdRng::seed_from_u64(4))
    }

    #[test]
    fn test_starts_with_full_set() {
        let playground = playground();
        assert_eq!(playground.set_size, 8);
        assert_eq!(playground.points.len(), 8);
        assert_eq!(playground.mesh.as_ref().unwrap().points.len(), 8);
    }

    #[test]
    fn test_set_size_change_rescatters() {
        let mut playground = playground();
        let before = playground.points.clone();
        assert!(playground.change_set_size(-1));
        assert_eq!(playground.set_size, 7);
        assert_ne!(playground.points, before);
        let mesh = playground.mesh.as_ref().unwrap();
        assert_eq!(mesh.points.len(), 7);
        assert!(mesh
            .points
            .iter()
            .all(|p| playground.points[..7].contains(p)));
    }

    #[test]
    fn test_set_size_is_clamped() {
        let mut playground = playground();
        assert!(!playground.change_set_size(1));
        assert_eq!(playground.set_size, 8);
        for _ in 0..10 {
            playground.change_set_size(-1);
        }
        assert_eq!(playground.set_size, MIN_SET_SIZE);
        assert_eq!(playground.mesh.as_ref().unwrap().triangles.len(), 1);
    }

    #[test]
    fn test_image_settings_follow_color_choice() {
        let mut playground = playground();
        assert_eq!(playground.image_settings().disk_color, DiskColor::default());
        playground.random_colors = true;
        assert_eq!(
            playground.image_settings().disk_color,
            DiskColor::Random(playground.color_seed)
        );
        assert_eq!(playground.image_settings().width, 200);
    }
}
