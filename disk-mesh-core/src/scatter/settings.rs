use crate::Scalar;
use serde::{Deserialize, Serialize};

/// Settings of random points placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSettings {
    /// Number of placed points, also the upper bound of active set size.
    #[serde(default = "ScatterSettings::default_max_set_size")]
    pub max_set_size: usize,
    /// Diameter of rendered disk.
    #[serde(default = "ScatterSettings::default_point_size")]
    pub point_size: Scalar,
    /// Minimal distance between point centers.
    #[serde(default = "ScatterSettings::default_points_separation")]
    pub points_separation: Scalar,
    /// Width of the bounding rectangle.
    #[serde(default = "ScatterSettings::default_width")]
    pub width: Scalar,
    /// Height of the bounding rectangle.
    #[serde(default = "ScatterSettings::default_height")]
    pub height: Scalar,
    /// Limit of rejected candidates for a single point.
    #[serde(default = "ScatterSettings::default_max_iterations")]
    pub max_iterations: usize,
}

impl Default for ScatterSettings {
    fn default() -> Self {
        Self {
            max_set_size: Self::default_max_set_size(),
            point_size: Self::default_point_size(),
            points_separation: Self::default_points_separation(),
            width: Self::default_width(),
            height: Self::default_height(),
            max_iterations: Self::default_max_iterations(),
        }
    }
}

impl ScatterSettings {
    fn default_max_set_size() -> usize {
        100
    }

    fn default_point_size() -> Scalar {
        10.0
    }

    fn default_points_separation() -> Scalar {
        Self::default_point_size()
    }

    fn default_width() -> Scalar {
        500.0
    }

    fn default_height() -> Scalar {
        500.0
    }

    fn default_max_iterations() -> usize {
        1000
    }
}
