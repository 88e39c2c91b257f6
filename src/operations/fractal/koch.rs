use std::f64::consts::FRAC_PI_3;

use crate::error::Result;
use crate::geometry::fractal::seed_triangle;
use crate::math::{Point2, Vector2};

use super::{leaf_count, validate, INTERACTIVE_MAX_ORDER, PREALLOC_LIMIT};

/// A leaf segment of the Koch curve.
pub type Segment2 = [Point2; 2];

/// Generates the Koch snowflake boundary.
///
/// Starts from the equilateral seed triangle (side `size`, centroid at the
/// origin, apex up) and replaces the middle third of every edge with two
/// sides of an outward equilateral bump, `order` times.
///
/// The seed runs counter-clockwise, so each bump is the middle third turned
/// clockwise by 60°, which points it away from the interior. Turning it
/// counter-clockwise by +60° instead would fold every bump inward.
///
/// [`execute`](Self::execute) returns the boundary as an **open** path of
/// `3·4^order` points: the start point of every leaf segment, in order. The
/// closing segment from the last point back to the first is implied.
/// [`segments`](Self::segments) returns the leaf segments themselves.
///
/// Point count grows as `4^order`; orders above
/// [`INTERACTIVE_MAX_ORDER`] are accepted but logged.
#[derive(Debug)]
pub struct KochSnowflake {
    order: i32,
    size: f64,
}

impl KochSnowflake {
    /// Creates a new `KochSnowflake` generator.
    #[must_use]
    pub fn new(order: i32, size: f64) -> Self {
        Self { order, size }
    }

    /// Executes the generator, returning the open boundary path.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if `order` is negative or
    /// `size` is not positive.
    pub fn execute(&self) -> Result<Vec<Point2>> {
        let segments = self.segments()?;
        Ok(segments.iter().map(|[start, _]| *start).collect())
    }

    /// Executes the generator, returning every leaf segment in path order.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if `order` is negative or
    /// `size` is not positive.
    pub fn segments(&self) -> Result<Vec<Segment2>> {
        let (order, size) = validate(self.order, self.size)?;
        if order > INTERACTIVE_MAX_ORDER {
            tracing::warn!(order, "koch order exceeds interactive limit");
        }

        let seed = seed_triangle(size);
        let mut out = Vec::with_capacity(leaf_count(4, order).saturating_mul(3).min(PREALLOC_LIMIT));
        for i in 0..3 {
            koch_edge(seed[i], seed[(i + 1) % 3], order, &mut out);
        }
        tracing::debug!(order, size, segments = out.len(), "generated koch snowflake");
        Ok(out)
    }
}

/// Expands one edge, pushing its leaf segments onto `out`.
fn koch_edge(start: Point2, end: Point2, order: u32, out: &mut Vec<Segment2>) {
    if order == 0 {
        out.push([start, end]);
        return;
    }

    let third = (end - start) / 3.0;
    let p1 = start + third;
    let p2 = start + third * 2.0;
    let peak = p1 + outward(&third);

    koch_edge(start, p1, order - 1, out);
    koch_edge(p1, peak, order - 1, out);
    koch_edge(peak, p2, order - 1, out);
    koch_edge(p2, end, order - 1, out);
}

/// Rotates `v` clockwise by 60°.
///
/// The seed runs counter-clockwise, so clockwise is away from the interior.
fn outward(v: &Vector2) -> Vector2 {
    let (sin, cos) = FRAC_PI_3.sin_cos();
    Vector2::new(v.x * cos + v.y * sin, -v.x * sin + v.y * cos)
}
