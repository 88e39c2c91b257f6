use nalgebra::center;

use crate::error::Result;
use crate::geometry::fractal::seed_triangle;
use crate::geometry::Triangle2;

use super::{leaf_count, validate, INTERACTIVE_MAX_ORDER, PREALLOC_LIMIT};

/// Generates the Sierpinski triangle as a set of filled triangles.
///
/// Each step splits a triangle at its edge midpoints and keeps the three
/// corner triangles, dropping the inverted central one. The result holds
/// exactly `3^order` triangles; their order carries no meaning.
#[derive(Debug)]
pub struct SierpinskiTriangle {
    order: i32,
    size: f64,
}

impl SierpinskiTriangle {
    /// Creates a new `SierpinskiTriangle` generator.
    #[must_use]
    pub fn new(order: i32, size: f64) -> Self {
        Self { order, size }
    }

    /// Executes the generator.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if `order` is negative or
    /// `size` is not positive.
    pub fn execute(&self) -> Result<Vec<Triangle2>> {
        let (order, size) = validate(self.order, self.size)?;
        if order > INTERACTIVE_MAX_ORDER {
            tracing::warn!(order, "sierpinski order exceeds interactive limit");
        }

        let mut out = Vec::with_capacity(leaf_count(3, order).min(PREALLOC_LIMIT));
        subdivide(seed_triangle(size), order, &mut out);
        tracing::debug!(order, size, triangles = out.len(), "generated sierpinski triangle");
        Ok(out)
    }
}

fn subdivide(tri: Triangle2, order: u32, out: &mut Vec<Triangle2>) {
    if order == 0 {
        out.push(tri);
        return;
    }

    let [v0, v1, v2] = tri;
    let m01 = center(&v0, &v1);
    let m12 = center(&v1, &v2);
    let m20 = center(&v2, &v0);

    subdivide([v0, m01, m20], order - 1, out);
    subdivide([m01, v1, m12], order - 1, out);
    subdivide([m20, m12, v2], order - 1, out);
}
