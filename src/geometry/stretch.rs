use crate::math::Point2;

use super::Circle;

/// Lower-left corner of the unstretched base square.
pub const STRETCH_BASE_ORIGIN: Point2 = Point2::new(2.0, 2.0);

/// Side length of the unstretched base square.
pub const STRETCH_BASE_SIZE: f64 = 2.0;

/// Axis along which a stretch scales the base figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StretchDirection {
    /// Scales the height.
    #[default]
    Vertical,
    /// Scales the width.
    Horizontal,
}

/// Figure drawn from the stretched base square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StretchShape {
    #[default]
    Rectangle,
    Circle,
}

/// Input parameters for a one-axis stretch of the base square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StretchSpec {
    /// Scale factor `k`; must be positive.
    pub scale_factor: f64,
    pub direction: StretchDirection,
    pub shape: StretchShape,
}

impl StretchSpec {
    /// Creates a new stretch spec.
    #[must_use]
    pub fn new(scale_factor: f64, direction: StretchDirection, shape: StretchShape) -> Self {
        Self {
            scale_factor,
            direction,
            shape,
        }
    }
}

/// Axis-aligned rectangle anchored at its lower-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// Lower-left corner.
    pub origin: Point2,
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub height: f64,
}

impl Rectangle {
    /// Corners counter-clockwise from the origin.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        let (x, y) = (self.origin.x, self.origin.y);
        [
            Point2::new(x, y),
            Point2::new(x + self.width, y),
            Point2::new(x + self.width, y + self.height),
            Point2::new(x, y + self.height),
        ]
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point2 {
        Point2::new(
            self.origin.x + self.width / 2.0,
            self.origin.y + self.height / 2.0,
        )
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

/// Output of a stretch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StretchResult {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl StretchResult {
    /// Returns the shape this result holds.
    #[must_use]
    pub fn shape(&self) -> StretchShape {
        match self {
            Self::Rectangle(_) => StretchShape::Rectangle,
            Self::Circle(_) => StretchShape::Circle,
        }
    }

    #[must_use]
    pub fn area(&self) -> f64 {
        match self {
            Self::Rectangle(rect) => rect.area(),
            Self::Circle(circle) => circle.area(),
        }
    }
}
