use crate::error::{ensure_positive, Result};
use crate::geometry::stretch::{STRETCH_BASE_ORIGIN, STRETCH_BASE_SIZE};
use crate::geometry::{
    Circle, Rectangle, StretchDirection, StretchResult, StretchShape, StretchSpec,
};
use crate::math::Point2;

/// Stretches the base square by `k` along one axis.
///
/// The base square has side [`STRETCH_BASE_SIZE`] and its lower-left corner at
/// [`STRETCH_BASE_ORIGIN`]. A rectangle keeps that corner fixed and scales
/// its height (vertical) or width (horizontal) by `k`. A circle stays on the
/// base square's center with radius `STRETCH_BASE_SIZE·k/2`, whichever the
/// direction.
#[derive(Debug)]
pub struct MakeStretch {
    spec: StretchSpec,
}

impl MakeStretch {
    /// Creates a new `MakeStretch` operation.
    #[must_use]
    pub fn new(spec: StretchSpec) -> Self {
        Self { spec }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if the scale factor is not
    /// positive.
    pub fn execute(&self) -> Result<StretchResult> {
        let k = ensure_positive("scale_factor", self.spec.scale_factor)?;
        let stretched = STRETCH_BASE_SIZE * k;

        let result = match self.spec.shape {
            StretchShape::Rectangle => {
                let (width, height) = match self.spec.direction {
                    StretchDirection::Vertical => (STRETCH_BASE_SIZE, stretched),
                    StretchDirection::Horizontal => (stretched, STRETCH_BASE_SIZE),
                };
                StretchResult::Rectangle(Rectangle {
                    origin: STRETCH_BASE_ORIGIN,
                    width,
                    height,
                })
            }
            StretchShape::Circle => {
                let half = STRETCH_BASE_SIZE / 2.0;
                let center = Point2::new(
                    STRETCH_BASE_ORIGIN.x + half,
                    STRETCH_BASE_ORIGIN.y + half,
                );
                StretchResult::Circle(Circle::new(center, stretched / 2.0)?)
            }
        };
        tracing::debug!(k, direction = ?self.spec.direction, shape = ?self.spec.shape, "stretched base square");
        Ok(result)
    }
}
