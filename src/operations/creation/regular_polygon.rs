use std::f64::consts::PI;

use crate::error::{ensure_positive, GeometryError, Result};
use crate::geometry::{PolygonMode, PolygonResult, PolygonSpec};
use crate::math::points_on_circle;

/// Smallest side count of a polygon.
pub const MIN_SIDES: usize = 3;

/// Builds a regular polygon and its derived measurements.
///
/// In [`PolygonMode::Inscribed`] the radius is the circumradius. In
/// [`PolygonMode::Circumscribed`] it is the apothem, and the circumradius
/// becomes `radius / cos(π/n)`. Every length is then computed from the
/// circumradius, so both modes share one set of formulas.
#[derive(Debug)]
pub struct RegularPolygon {
    spec: PolygonSpec,
}

impl RegularPolygon {
    /// Creates a new `RegularPolygon` operation.
    #[must_use]
    pub fn new(spec: PolygonSpec) -> Self {
        Self { spec }
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if `sides < 3` or the radius
    /// is not positive, and `GeometryError::NotFinite` for a non-finite
    /// radius or center.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<PolygonResult> {
        let n = validate_sides(self.spec.sides)?;
        let radius = ensure_positive("radius", self.spec.radius)?;
        let center = self.spec.center;
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(GeometryError::NotFinite { parameter: "center" }.into());
        }

        let half_angle = PI / n as f64;
        let circumradius = match self.spec.mode {
            PolygonMode::Inscribed => radius,
            PolygonMode::Circumscribed => radius / half_angle.cos(),
        };

        let side_length = 2.0 * circumradius * half_angle.sin();
        let apothem = apothem_from_side(side_length, n);

        Ok(PolygonResult {
            vertices: points_on_circle(n, circumradius, &center),
            side_length,
            perimeter: n as f64 * side_length,
            diagonal: 2.0 * circumradius,
            circumradius,
            apothem,
            interior_angle_deg: interior_angle_deg(n),
            exterior_angle_deg: exterior_angle_deg(n),
            area: n as f64 * side_length * apothem / 2.0,
            diagonal_count: n * (n - 3) / 2,
        })
    }
}

/// Interior angle of a regular `n`-gon, `(n-2)·180/n` degrees.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn interior_angle_deg(n: usize) -> f64 {
    (n as f64 - 2.0) * 180.0 / n as f64
}

/// Exterior angle of a regular `n`-gon, `360/n` degrees.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn exterior_angle_deg(n: usize) -> f64 {
    360.0 / n as f64
}

/// Apothem of a regular `n`-gon with side `side`: `s / (2·tan(π/n))`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn apothem_from_side(side: f64, n: usize) -> f64 {
    side / (2.0 * (PI / n as f64).tan())
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn validate_sides(sides: usize) -> Result<usize> {
    if sides < MIN_SIDES {
        tracing::debug!(sides, "rejected polygon side count");
        return Err(GeometryError::InvalidParameter {
            parameter: "sides",
            value: sides as f64,
            constraint: "at least 3",
        }
        .into());
    }
    Ok(sides)
}
