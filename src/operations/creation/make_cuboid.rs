use crate::error::{ensure_positive, Result};
use crate::geometry::cuboid::CUBOID_FACES;
use crate::geometry::{CuboidModel, CuboidSpec};
use crate::math::Point3;

/// Creates an axis-aligned box with one corner at the origin and the
/// opposite corner at `(length, width, height)`.
///
/// Vertices 0-3 form the bottom (`z = 0`) and 4-7 the top, each ring
/// running `(0,0) → (l,0) → (l,w) → (0,w)`.
#[derive(Debug)]
pub struct MakeCuboid {
    spec: CuboidSpec,
}

impl MakeCuboid {
    /// Creates a new `MakeCuboid` operation.
    #[must_use]
    pub fn new(spec: CuboidSpec) -> Self {
        Self { spec }
    }

    /// Executes the operation, returning the box model.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if any dimension is not positive.
    pub fn execute(&self) -> Result<CuboidModel> {
        let l = ensure_positive("length", self.spec.length)?;
        let w = ensure_positive("width", self.spec.width)?;
        let h = ensure_positive("height", self.spec.height)?;

        Ok(CuboidModel {
            vertices: [
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(l, 0.0, 0.0),
                Point3::new(l, w, 0.0),
                Point3::new(0.0, w, 0.0),
                Point3::new(0.0, 0.0, h),
                Point3::new(l, 0.0, h),
                Point3::new(l, w, h),
                Point3::new(0.0, w, h),
            ],
            faces: CUBOID_FACES,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geometry::cuboid::CUBOID_EDGES;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn corners() {
        let model = MakeCuboid::new(CuboidSpec::new(2.0, 3.0, 4.0)).execute().unwrap();
        assert_eq!(model.vertices[0], p(0.0, 0.0, 0.0));
        assert_eq!(model.vertices[6], p(2.0, 3.0, 4.0));
        assert_eq!(model.faces, CUBOID_FACES);
    }

    #[test]
    fn faces_are_planar() {
        let model = MakeCuboid::new(CuboidSpec::new(1.0, 2.0, 3.0)).execute().unwrap();
        for i in 0..6 {
            let [a, b, c, d] = model.face_points(i).unwrap();
            let normal = (b - a).cross(&(d - a));
            assert!(normal.norm() > 0.0);
            assert!(normal.dot(&(c - a)).abs() < 1e-12);
        }
        assert!(model.face_points(6).is_none());
    }

    #[test]
    fn edge_lengths_match_dimensions() {
        let model = MakeCuboid::new(CuboidSpec::new(1.0, 2.0, 3.0)).execute().unwrap();
        let mut lengths: Vec<f64> = model
            .edge_segments()
            .iter()
            .map(|[a, b]| (b - a).norm())
            .collect();
        lengths.sort_by(f64::total_cmp);
        assert_eq!(lengths.len(), CUBOID_EDGES.len());
        for (i, expected) in [1.0, 2.0, 3.0].into_iter().enumerate() {
            for len in &lengths[i * 4..i * 4 + 4] {
                assert_relative_eq!(*len, expected);
            }
        }
    }

    #[test]
    fn rejects_non_positive_dimension() {
        assert!(MakeCuboid::new(CuboidSpec::new(0.0, 1.0, 1.0)).execute().is_err());
        assert!(MakeCuboid::new(CuboidSpec::new(1.0, -1.0, 1.0)).execute().is_err());
        assert!(MakeCuboid::new(CuboidSpec::new(1.0, 1.0, f64::NAN)).execute().is_err());
    }
}
