use crate::math::Point2;

/// How the given radius relates to a regular polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PolygonMode {
    /// Vertices lie on the circle; the radius is the circumradius.
    #[default]
    Inscribed,
    /// Sides are tangent to the circle; the radius is the apothem.
    Circumscribed,
}

/// Input parameters for a regular polygon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolygonSpec {
    /// Number of sides, at least 3.
    pub sides: usize,
    /// Circumradius or apothem depending on [`PolygonMode`].
    pub radius: f64,
    /// Center of the polygon.
    pub center: Point2,
    /// Interpretation of `radius`.
    pub mode: PolygonMode,
}

impl PolygonSpec {
    /// Creates an inscribed polygon spec centered at the origin.
    #[must_use]
    pub fn new(sides: usize, radius: f64) -> Self {
        Self {
            sides,
            radius,
            center: Point2::origin(),
            mode: PolygonMode::Inscribed,
        }
    }

    /// Sets the polygon center.
    #[must_use]
    pub fn with_center(mut self, center: Point2) -> Self {
        self.center = center;
        self
    }

    /// Sets the radius interpretation.
    #[must_use]
    pub fn with_mode(mut self, mode: PolygonMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Vertices and derived measurements of a regular polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonResult {
    /// Vertices, counter-clockwise, the first at angle 0.
    pub vertices: Vec<Point2>,
    /// Length of one side.
    pub side_length: f64,
    /// Sum of all side lengths.
    pub perimeter: f64,
    /// Diameter of the circumscribing circle.
    pub diagonal: f64,
    /// Radius of the circumscribing circle.
    pub circumradius: f64,
    /// Distance from the center to the midpoint of a side.
    pub apothem: f64,
    /// Interior angle in degrees.
    pub interior_angle_deg: f64,
    /// Exterior angle in degrees.
    pub exterior_angle_deg: f64,
    /// Enclosed area.
    pub area: f64,
    /// Number of diagonals, `n(n-3)/2`.
    pub diagonal_count: usize,
}
