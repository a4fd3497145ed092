pub mod coord;
pub mod hull;
pub mod mesh;
pub mod scatter;
pub mod sort;
pub mod triangle;
pub mod triangulation;

/// Scalar type.
pub type Scalar = f32;

pub mod prelude {
    pub use crate::{
        coord::*, hull::*, mesh::*, scatter::settings::*, scatter::*, sort::*, triangle::*,
        triangulation::*, Scalar,
    };
}
