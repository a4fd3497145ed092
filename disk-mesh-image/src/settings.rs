use disk_mesh_core::Scalar;
use serde::{Deserialize, Serialize};

/// Source of disk colors. Purely cosmetic, geometry does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiskColor {
    /// Every disk has the same RGBA color.
    Solid([u8; 4]),
    /// Every disk gets random opaque color generated from given seed.
    Random(u64),
}

impl Default for DiskColor {
    fn default() -> Self {
        Self::Solid([255, 0, 0, 255])
    }
}

/// Settings of disk mesh image generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateDiskImageSettings {
    /// Image width in pixels.
    #[serde(default = "GenerateDiskImageSettings::default_width")]
    pub width: u32,
    /// Image height in pixels.
    #[serde(default = "GenerateDiskImageSettings::default_height")]
    pub height: u32,
    /// Disk diameter in pixels.
    #[serde(default = "GenerateDiskImageSettings::default_point_size")]
    pub point_size: Scalar,
    /// Background RGBA color.
    #[serde(default = "GenerateDiskImageSettings::default_background")]
    pub background: [u8; 4],
    /// Triangle edges RGBA color.
    #[serde(default = "GenerateDiskImageSettings::default_edge_color")]
    pub edge_color: [u8; 4],
    /// Disks color source.
    #[serde(default)]
    pub disk_color: DiskColor,
}

impl Default for GenerateDiskImageSettings {
    fn default() -> Self {
        Self {
            width: Self::default_width(),
            height: Self::default_height(),
            point_size: Self::default_point_size(),
            background: Self::default_background(),
            edge_color: Self::default_edge_color(),
            disk_color: DiskColor::default(),
        }
    }
}

impl GenerateDiskImageSettings {
    fn default_width() -> u32 {
        500
    }

    fn default_height() -> u32 {
        500
    }

    fn default_point_size() -> Scalar {
        10.0
    }

    fn default_background() -> [u8; 4] {
        [127, 127, 127, 255]
    }

    fn default_edge_color() -> [u8; 4] {
        [0, 255, 0, 255]
    }
}
