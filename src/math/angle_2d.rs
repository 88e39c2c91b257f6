use std::f64::consts::TAU;

use super::{Point2, Vector2};

/// Returns the point at `angle` radians on a circle of `radius` around `center`.
///
/// The angle origin is the positive x-axis and angles grow counter-clockwise.
#[must_use]
pub fn point_at_angle(angle: f64, radius: f64, center: &Point2) -> Point2 {
    *center + Vector2::new(radius * angle.cos(), radius * angle.sin())
}

/// Places `n` points evenly on a circle, starting on the positive x-axis and
/// proceeding counter-clockwise.
///
/// Point `k` sits at angle `2πk/n`. The caller guarantees `n >= 1`; for
/// `n == 0` the result is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn points_on_circle(n: usize, radius: f64, center: &Point2) -> Vec<Point2> {
    (0..n)
        .map(|k| point_at_angle(TAU * k as f64 / n as f64, radius, center))
        .collect()
}

/// Samples `segments` points along an arc from `start` to `end` radians,
/// both endpoints included.
///
/// Returns just the start point when `segments < 2`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn arc_points(start: f64, end: f64, radius: f64, center: &Point2, segments: usize) -> Vec<Point2> {
    if segments < 2 {
        return vec![point_at_angle(start, radius, center)];
    }
    let step = (end - start) / (segments - 1) as f64;
    (0..segments)
        .map(|i| point_at_angle(start + step * i as f64, radius, center))
        .collect()
}
