use crate::geometry::Circle;
use crate::math::{try_normalize, Point2, Vector2};

/// Computes the intersection points of two circles.
///
/// Returns `None` when the circles are disjoint, when one lies strictly
/// inside the other, and when they are concentric (including identical
/// circles, whose infinite intersection is not representable).
/// Tangent circles yield two coincident points.
#[derive(Debug)]
pub struct CircleIntersect<'a> {
    first: &'a Circle,
    second: &'a Circle,
}

impl<'a> CircleIntersect<'a> {
    /// Creates a new `CircleIntersect` query.
    #[must_use]
    pub fn new(first: &'a Circle, second: &'a Circle) -> Self {
        Self { first, second }
    }

    /// Executes the query.
    ///
    /// The first point lies to the right of the direction from the first
    /// center to the second, the second point to the left.
    #[must_use]
    pub fn execute(&self) -> Option<[Point2; 2]> {
        let c1 = *self.first.center();
        let c2 = *self.second.center();
        let r1 = self.first.radius();
        let r2 = self.second.radius();

        let delta = c2 - c1;
        let Some(dir) = try_normalize(&delta) else {
            // Concentric: either no points or (identical circles) infinitely many.
            tracing::debug!(r1, r2, "concentric circles have no discrete intersection");
            return None;
        };
        let d = delta.norm();
        if d > r1 + r2 || d < (r1 - r2).abs() {
            return None;
        }

        // Distance from c1 along the center line to the radical line.
        let a = (r1 * r1 - r2 * r2 + d * d) / (2.0 * d);
        // Roundoff at tangency can push the radicand slightly negative.
        let h = (r1 * r1 - a * a).max(0.0).sqrt();

        let foot = c1 + dir * a;
        let offset = Vector2::new(dir.y, -dir.x) * h;

        Some([foot + offset, foot - offset])
    }
}
