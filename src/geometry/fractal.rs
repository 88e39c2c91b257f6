use crate::math::Point2;

/// A triangle given by its three corners.
pub type Triangle2 = [Point2; 3];

/// Which fractal to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractalKind {
    Koch,
    Sierpinski,
}

/// Input parameters for a fractal generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalSpec {
    /// Fractal to generate.
    pub kind: FractalKind,
    /// Recursion depth; negative values are rejected.
    pub order: i32,
    /// Side length of the seed triangle.
    pub size: f64,
}

impl FractalSpec {
    /// Creates a new fractal spec.
    #[must_use]
    pub fn new(kind: FractalKind, order: i32, size: f64) -> Self {
        Self { kind, order, size }
    }
}

/// Output of a fractal generator.
#[derive(Debug, Clone, PartialEq)]
pub enum FractalResult {
    /// Open boundary path; draw it closed by joining the last point to the first.
    Koch(Vec<Point2>),
    /// Independent filled triangles.
    Sierpinski(Vec<Triangle2>),
}

impl FractalResult {
    /// Returns the kind of fractal this result holds.
    #[must_use]
    pub fn kind(&self) -> FractalKind {
        match self {
            Self::Koch(_) => FractalKind::Koch,
            Self::Sierpinski(_) => FractalKind::Sierpinski,
        }
    }

    /// Returns the number of primitives: points for Koch, triangles for Sierpinski.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Koch(points) => points.len(),
            Self::Sierpinski(triangles) => triangles.len(),
        }
    }

    /// Returns `true` if the result holds no primitives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Vertices of the equilateral seed triangle with side `size`.
///
/// The triangle is centered on its centroid at the origin with one vertex
/// pointing up, listed counter-clockwise: bottom-left, bottom-right, apex.
#[must_use]
pub fn seed_triangle(size: f64) -> Triangle2 {
    let height = size * 3f64.sqrt() / 2.0;
    [
        Point2::new(-size / 2.0, -height / 3.0),
        Point2::new(size / 2.0, -height / 3.0),
        Point2::new(0.0, height * 2.0 / 3.0),
    ]
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::math::centroid_2d;

    #[test]
    fn seed_is_equilateral() {
        let [a, b, c] = seed_triangle(2.0);
        assert_relative_eq!((b - a).norm(), 2.0, epsilon = 1e-12);
        assert_relative_eq!((c - b).norm(), 2.0, epsilon = 1e-12);
        assert_relative_eq!((a - c).norm(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn seed_centroid_at_origin() {
        let tri = seed_triangle(1.5);
        let c = centroid_2d(&tri).unwrap_or_else(Point2::origin);
        assert!(c.coords.norm() < 1e-12);
    }

    #[test]
    fn result_len() {
        let r = FractalResult::Sierpinski(vec![seed_triangle(1.0)]);
        assert_eq!(r.kind(), FractalKind::Sierpinski);
        assert_eq!(r.len(), 1);
        assert!(FractalResult::Koch(Vec::new()).is_empty());
    }
}
