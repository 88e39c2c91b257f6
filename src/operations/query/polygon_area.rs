use crate::error::{ensure_positive, Result};
use crate::operations::creation::{apothem_from_side, validate_sides};

/// Computes the area of a regular polygon from its side count and side length.
///
/// Uses the apothem `a = s / (2·tan(π/n))` and returns `n·s·a/2`, the same
/// formula [`RegularPolygon`](crate::operations::creation::RegularPolygon)
/// reports.
#[derive(Debug)]
pub struct PolygonArea {
    sides: usize,
    side_length: f64,
}

impl PolygonArea {
    /// Creates a new `PolygonArea` query.
    #[must_use]
    pub fn new(sides: usize, side_length: f64) -> Self {
        Self { sides, side_length }
    }

    /// Executes the query, returning the area.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if `sides < 3` or the side
    /// length is not positive.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<f64> {
        let n = validate_sides(self.sides)?;
        let s = ensure_positive("side_length", self.side_length)?;
        Ok(n as f64 * s * apothem_from_side(s, n) / 2.0)
    }
}
