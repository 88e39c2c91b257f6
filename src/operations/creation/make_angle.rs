use crate::error::{ensure_in_range, ensure_positive, GeometryError, Result};
use crate::geometry::{AngleFigure, ArcSampling};
use crate::math::{arc_points, point_at_angle, Point2};

/// Marker arc radius as a fraction of the ray length.
const ARC_RADIUS_RATIO: f64 = 0.3;

/// Builds the drawable pieces of an angle with its vertex at the origin.
///
/// The start ray runs along the positive x-axis; the end ray is turned by
/// `degrees` (counter-clockwise when positive). A marker arc of radius
/// `0.3 · radius` joins the two rays.
#[derive(Debug)]
pub struct MakeAngle {
    degrees: f64,
    radius: f64,
    sampling: ArcSampling,
}

impl MakeAngle {
    /// Creates a new `MakeAngle` operation with default arc sampling.
    #[must_use]
    pub fn new(degrees: f64, radius: f64) -> Self {
        Self {
            degrees,
            radius,
            sampling: ArcSampling::default(),
        }
    }

    /// Sets custom arc sampling.
    #[must_use]
    pub fn with_sampling(mut self, sampling: ArcSampling) -> Self {
        self.sampling = sampling;
        self
    }

    /// Executes the operation.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if the angle lies outside
    /// `[-360, 360]`, the radius is not positive, or fewer than two arc
    /// points are requested.
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<AngleFigure> {
        let degrees = ensure_in_range("degrees", self.degrees, -360.0, 360.0, "in [-360, 360]")?;
        let radius = ensure_positive("radius", self.radius)?;
        if self.sampling.segments < 2 {
            return Err(GeometryError::InvalidParameter {
                parameter: "segments",
                value: self.sampling.segments as f64,
                constraint: "at least 2",
            }
            .into());
        }

        let origin = Point2::origin();
        let theta = degrees.to_radians();
        let arc_radius = radius * ARC_RADIUS_RATIO;
        // Sweep from the smaller to the larger angle so the arc always runs counter-clockwise.
        let (from, to) = if theta >= 0.0 { (0.0, theta) } else { (theta, 0.0) };

        Ok(AngleFigure {
            degrees,
            start_ray: [origin, Point2::new(radius, 0.0)],
            end_ray: [origin, point_at_angle(theta, radius, &origin)],
            arc: arc_points(from, to, arc_radius, &origin, self.sampling.segments),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn right_angle() {
        let fig = MakeAngle::new(90.0, 5.0).execute().unwrap();
        assert_abs_diff_eq!(fig.start_ray[1], Point2::new(5.0, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(fig.end_ray[1], Point2::new(0.0, 5.0), epsilon = 1e-12);
        assert_eq!(fig.arc.len(), 100);
        assert_abs_diff_eq!(fig.arc[0], Point2::new(1.5, 0.0), epsilon = 1e-12);
        assert_abs_diff_eq!(fig.arc[99], Point2::new(0.0, 1.5), epsilon = 1e-12);
    }

    #[test]
    fn negative_angle_arc_runs_from_end_ray() {
        let fig = MakeAngle::new(-90.0, 2.0)
            .with_sampling(ArcSampling { segments: 5 })
            .execute()
            .unwrap();
        assert_eq!(fig.arc.len(), 5);
        assert_abs_diff_eq!(fig.arc[0], Point2::new(0.0, -0.6), epsilon = 1e-12);
        assert_abs_diff_eq!(fig.arc[4], Point2::new(0.6, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn arc_points_keep_marker_radius() {
        let fig = MakeAngle::new(135.0, 4.0).execute().unwrap();
        for p in &fig.arc {
            assert_abs_diff_eq!(p.coords.norm(), 1.2, epsilon = 1e-12);
        }
    }

    #[test]
    fn rejects_bad_input() {
        assert!(MakeAngle::new(400.0, 1.0).execute().is_err());
        assert!(MakeAngle::new(45.0, 0.0).execute().is_err());
        assert!(MakeAngle::new(45.0, 1.0)
            .with_sampling(ArcSampling { segments: 1 })
            .execute()
            .is_err());
    }
}
