use crate::error::{ensure_positive, GeometryError, Result};
use crate::geometry::Triangle2;
use crate::math::{Point2, TOLERANCE};

/// Creates an isosceles triangle from its apex angle and height.
///
/// The base lies on the x-axis, centered on the origin, with the apex at
/// `(0, height)`. Vertices are returned as `[base_left, base_right, apex]`.
#[derive(Debug)]
pub struct MakeIsoscelesTriangle {
    apex_deg: f64,
    height: f64,
}

impl MakeIsoscelesTriangle {
    /// Creates a new `MakeIsoscelesTriangle` operation.
    #[must_use]
    pub fn new(apex_deg: f64, height: f64) -> Self {
        Self { apex_deg, height }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if the apex angle is not in
    /// the open interval `(0, 180)` or the height is not positive.
    pub fn execute(&self) -> Result<Triangle2> {
        let apex = ensure_positive("apex_deg", self.apex_deg)?;
        if apex >= 180.0 {
            return Err(GeometryError::InvalidParameter {
                parameter: "apex_deg",
                value: apex,
                constraint: "less than 180",
            }
            .into());
        }
        let height = ensure_positive("height", self.height)?;

        let half_base = height * (apex.to_radians() / 2.0).tan();
        Ok([
            Point2::new(-half_base, 0.0),
            Point2::new(half_base, 0.0),
            Point2::new(0.0, height),
        ])
    }
}

/// Interior angles in degrees of a triangle, at each vertex in order.
///
/// Returns `None` if any two vertices coincide.
#[must_use]
pub fn triangle_angles_deg(tri: &Triangle2) -> Option<[f64; 3]> {
    let angle_at = |i: usize| {
        let p = tri[i];
        let u = tri[(i + 1) % 3] - p;
        let v = tri[(i + 2) % 3] - p;
        let denom = u.norm() * v.norm();
        (denom > TOLERANCE)
            .then(|| (u.dot(&v) / denom).clamp(-1.0, 1.0).acos().to_degrees())
    };
    Some([angle_at(0)?, angle_at(1)?, angle_at(2)?])
}
