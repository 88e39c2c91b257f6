use std::f64::consts::{PI, TAU};

use crate::error::{ensure_positive, GeometryError, Result};
use crate::math::{arc_points, Point2};

use super::ArcSampling;

/// A circle in the plane.
///
/// Constructed through [`Circle::new`], which guarantees a finite center
/// and a positive radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if the radius is not positive
    /// and `GeometryError::NotFinite` if any coordinate is NaN or infinite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !center.x.is_finite() || !center.y.is_finite() {
            return Err(GeometryError::NotFinite { parameter: "center" }.into());
        }
        let radius = ensure_positive("radius", radius)?;
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the diameter `2r`.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    /// Returns the circumference `2πr`.
    #[must_use]
    pub fn circumference(&self) -> f64 {
        TAU * self.radius
    }

    /// Returns the enclosed area `πr²`.
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    /// Samples the outline as a closed polyline.
    ///
    /// The first and last points coincide so the result can be drawn
    /// directly.
    #[must_use]
    pub fn sample(&self, sampling: ArcSampling) -> Vec<Point2> {
        arc_points(0.0, TAU, self.radius, &self.center, sampling.segments)
    }
}

/// The ring between two concentric circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annulus {
    outer: Circle,
    inner: Circle,
}

impl Annulus {
    /// Creates a ring around `center`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if either radius is not
    /// positive or `inner_radius >= outer_radius`.
    pub fn new(center: Point2, outer_radius: f64, inner_radius: f64) -> Result<Self> {
        let outer = Circle::new(center, outer_radius)?;
        let inner = Circle::new(center, inner_radius)?;
        if inner_radius >= outer_radius {
            return Err(GeometryError::InvalidParameter {
                parameter: "inner_radius",
                value: inner_radius,
                constraint: "smaller than the outer radius",
            }
            .into());
        }
        Ok(Self { outer, inner })
    }

    /// Returns the outer boundary circle.
    #[must_use]
    pub fn outer(&self) -> &Circle {
        &self.outer
    }

    /// Returns the inner boundary circle.
    #[must_use]
    pub fn inner(&self) -> &Circle {
        &self.inner
    }

    /// Returns the ring area `π(R² − r²)`.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.outer.area() - self.inner.area()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn metrics_of_radius_two() {
        let c = Circle::new(Point2::origin(), 2.0).unwrap();
        assert_relative_eq!(c.diameter(), 4.0);
        assert_relative_eq!(c.circumference(), 4.0 * PI);
        assert_relative_eq!(c.area(), 4.0 * PI);
    }

    #[test]
    fn invalid_radius() {
        assert!(Circle::new(Point2::origin(), 0.0).is_err());
        assert!(Circle::new(Point2::origin(), -1.0).is_err());
    }

    #[test]
    fn non_finite_center() {
        let err = Circle::new(Point2::new(f64::NAN, 0.0), 1.0).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn sample_is_closed() {
        let c = Circle::new(Point2::new(1.0, -1.0), 3.0).unwrap();
        let pts = c.sample(ArcSampling::default());
        assert_eq!(pts.len(), ArcSampling::default().segments);
        let first = pts.first().unwrap();
        let last = pts.last().unwrap();
        assert!((first - last).norm() < 1e-9);
        for p in &pts {
            assert_relative_eq!((p - c.center()).norm(), 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn ring_area() {
        let ring = Annulus::new(Point2::origin(), 3.0, 1.5).unwrap();
        assert_relative_eq!(ring.area(), PI * (9.0 - 2.25));
        assert_relative_eq!(ring.outer().radius(), 3.0);
        assert_relative_eq!(ring.inner().radius(), 1.5);
    }

    #[test]
    fn ring_inner_must_be_smaller() {
        assert!(Annulus::new(Point2::origin(), 2.0, 2.0).is_err());
        assert!(Annulus::new(Point2::origin(), 1.0, 2.0).is_err());
    }
}
