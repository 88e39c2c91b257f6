use super::{Point2, Point3, Vector2, Vector3, TOLERANCE};

/// Computes the centroid (arithmetic mean) of a set of 2D points.
///
/// Returns `None` for an empty set.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid_2d(points: &[Point2]) -> Option<Point2> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vector2::zeros(), |acc, p| acc + p.coords);
    Some(Point2::from(sum / points.len() as f64))
}

/// Computes the centroid (arithmetic mean) of a set of 3D points.
///
/// Returns `None` for an empty set.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid_3d(points: &[Point3]) -> Option<Point3> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Some(Point3::from(sum / points.len() as f64))
}

/// Normalizes a 2D vector, or returns `None` if it has (near) zero length.
#[must_use]
pub fn try_normalize(v: &Vector2) -> Option<Vector2> {
    let len = v.norm();
    if len < TOLERANCE {
        return None;
    }
    Some(v / len)
}

/// Returns the largest absolute coordinate over all points, or `0.0` for an
/// empty set. Renderers use it to pick symmetric axis limits.
#[must_use]
pub fn max_abs_coordinate(points: &[Point2]) -> f64 {
    points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0, f64::max)
}

/// Margin factor used by renderers when none is chosen.
pub const DEFAULT_AXIS_MARGIN: f64 = 1.5;

/// Symmetric axis range `(-l, l)` that fits `points` and a circle of
/// `radius` about the origin, widened by `margin`.
///
/// The same range applies to both axes so figures keep their aspect ratio.
#[must_use]
pub fn axis_limits(points: &[Point2], radius: f64, margin: f64) -> (f64, f64) {
    let limit = max_abs_coordinate(points).max(radius) * margin;
    (-limit, limit)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn centroid_of_square() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ];
        let c = centroid_2d(&pts).unwrap();
        assert_abs_diff_eq!(c, Point2::new(1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn centroid_of_box_corners() {
        let pts = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 2.0, 6.0),
        ];
        let c = centroid_3d(&pts).unwrap();
        assert_abs_diff_eq!(c, Point3::new(2.0, 1.0, 3.0), epsilon = 1e-12);
    }

    #[test]
    fn centroid_of_nothing() {
        assert!(centroid_2d(&[]).is_none());
        assert!(centroid_3d(&[]).is_none());
    }

    #[test]
    fn normalize_unit_length() {
        let n = try_normalize(&Vector2::new(3.0, 4.0)).unwrap();
        assert_abs_diff_eq!(n.norm(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(n.x, 0.6, epsilon = 1e-12);
    }

    #[test]
    fn normalize_zero_vector_is_none() {
        assert!(try_normalize(&Vector2::zeros()).is_none());
    }

    #[test]
    fn max_abs_picks_largest_component() {
        let pts = [Point2::new(1.0, -3.5), Point2::new(-2.0, 0.5)];
        assert_abs_diff_eq!(max_abs_coordinate(&pts), 3.5);
        assert_abs_diff_eq!(max_abs_coordinate(&[]), 0.0);
    }

    #[test]
    fn axis_limits_widen_by_margin() {
        let pts = [Point2::new(2.0, -1.0), Point2::new(-0.5, 1.5)];
        let (lo, hi) = axis_limits(&pts, 1.0, DEFAULT_AXIS_MARGIN);
        assert_abs_diff_eq!(lo, -3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(hi, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn axis_limits_never_smaller_than_radius() {
        let pts = [Point2::new(0.5, 0.5)];
        let (lo, hi) = axis_limits(&pts, 4.0, 1.2);
        assert_abs_diff_eq!(lo, -4.8, epsilon = 1e-12);
        assert_abs_diff_eq!(hi, 4.8, epsilon = 1e-12);

        let (lo, hi) = axis_limits(&[], 2.0, 1.0);
        assert_abs_diff_eq!(lo, -2.0);
        assert_abs_diff_eq!(hi, 2.0);
    }
}
