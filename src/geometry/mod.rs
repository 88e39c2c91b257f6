pub mod angle;
pub mod circle;
pub mod cuboid;
pub mod fractal;
pub mod polygon;
pub mod stretch;

pub use angle::{AngleFigure, AngleKind};
pub use circle::{Annulus, Circle};
pub use cuboid::{CuboidModel, CuboidSpec, RotationSpec};
pub use fractal::{FractalKind, FractalResult, FractalSpec, Triangle2};
pub use polygon::{PolygonMode, PolygonResult, PolygonSpec};
pub use stretch::{Rectangle, StretchDirection, StretchResult, StretchShape, StretchSpec};

/// Parameters controlling how curved outlines are sampled into points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArcSampling {
    /// Number of points along an arc, endpoints included.
    pub segments: usize,
}

impl Default for ArcSampling {
    fn default() -> Self {
        Self { segments: 100 }
    }
}
