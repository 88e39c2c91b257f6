use crate::math::Point2;

/// Classification of an angle measured in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleKind {
    Zero,
    Acute,
    Right,
    Obtuse,
    Straight,
    Reflex,
    Full,
}

impl AngleKind {
    /// Classifies an angle in degrees.
    ///
    /// Returns `None` outside `[0, 360]` or for NaN. Boundary values (90, 180,
    /// 360) are matched within `tolerance` degrees.
    #[must_use]
    pub fn classify(degrees: f64, tolerance: f64) -> Option<Self> {
        let near = |target: f64| (degrees - target).abs() <= tolerance;
        if !(0.0..=360.0).contains(&degrees) {
            return None;
        }
        let kind = if near(0.0) {
            Self::Zero
        } else if near(90.0) {
            Self::Right
        } else if near(180.0) {
            Self::Straight
        } else if near(360.0) {
            Self::Full
        } else if degrees < 90.0 {
            Self::Acute
        } else if degrees < 180.0 {
            Self::Obtuse
        } else {
            Self::Reflex
        };
        Some(kind)
    }
}

/// Complement `90 − θ`, or `None` when θ is outside `[0, 90]`.
#[must_use]
pub fn complement_deg(degrees: f64) -> Option<f64> {
    (0.0..=90.0).contains(&degrees).then_some(90.0 - degrees)
}

/// Supplement `180 − θ`, or `None` when θ is outside `[0, 180]`.
#[must_use]
pub fn supplement_deg(degrees: f64) -> Option<f64> {
    (0.0..=180.0).contains(&degrees).then_some(180.0 - degrees)
}

/// Drawable pieces of an angle at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct AngleFigure {
    /// The angle in degrees, signed.
    pub degrees: f64,
    /// Ray along the positive x-axis.
    pub start_ray: [Point2; 2],
    /// Ray at the measured angle.
    pub end_ray: [Point2; 2],
    /// Marker arc between the two rays.
    pub arc: Vec<Point2>,
}
