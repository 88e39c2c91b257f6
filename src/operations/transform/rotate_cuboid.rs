use crate::error::{ensure_in_range, Result};
use crate::geometry::{CuboidModel, RotationSpec};
use crate::math::{centroid_3d, rotation_matrix_3d, Point3};

/// Rotates a cuboid about its own centroid by Euler angles.
///
/// Vertices are translated so the centroid sits at the origin, rotated by
/// `Rx · Ry · Rz`, then translated back. Face topology is unchanged.
#[derive(Debug)]
pub struct RotateCuboid<'a> {
    model: &'a CuboidModel,
    rotation: RotationSpec,
}

impl<'a> RotateCuboid<'a> {
    /// Creates a new `RotateCuboid` operation.
    #[must_use]
    pub fn new(model: &'a CuboidModel, rotation: RotationSpec) -> Self {
        Self { model, rotation }
    }

    /// Executes the rotation, returning a new model.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if an angle lies outside
    /// `[-180, 180]` degrees.
    pub fn execute(&self) -> Result<CuboidModel> {
        let x = ensure_in_range("x_deg", self.rotation.x_deg, -180.0, 180.0, "in [-180, 180]")?;
        let y = ensure_in_range("y_deg", self.rotation.y_deg, -180.0, 180.0, "in [-180, 180]")?;
        let z = ensure_in_range("z_deg", self.rotation.z_deg, -180.0, 180.0, "in [-180, 180]")?;

        let rot = rotation_matrix_3d(x, y, z);
        let center = centroid_3d(&self.model.vertices).unwrap_or_else(Point3::origin);

        Ok(CuboidModel {
            vertices: self
                .model
                .vertices
                .map(|v| center + rot * (v - center)),
            faces: self.model.faces,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::geometry::CuboidSpec;
    use crate::operations::creation::MakeCuboid;

    fn model() -> CuboidModel {
        MakeCuboid::new(CuboidSpec::new(2.0, 1.0, 0.5)).execute().unwrap()
    }

    fn rotations() -> Vec<RotationSpec> {
        vec![
            RotationSpec::new(0.0, 0.0, 0.0),
            RotationSpec::new(90.0, 0.0, 0.0),
            RotationSpec::new(0.0, -45.0, 0.0),
            RotationSpec::new(30.0, 60.0, -120.0),
            RotationSpec::new(-180.0, 180.0, 17.5),
        ]
    }

    #[test]
    fn rotation_is_an_isometry() {
        let original = model();
        for rotation in rotations() {
            let rotated = RotateCuboid::new(&original, rotation).execute().unwrap();
            for i in 0..8 {
                for j in 0..8 {
                    let before = (original.vertices[i] - original.vertices[j]).norm();
                    let after = (rotated.vertices[i] - rotated.vertices[j]).norm();
                    assert_abs_diff_eq!(before, after, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn centroid_is_fixed() {
        let original = model();
        let before = centroid_3d(&original.vertices).unwrap();
        for rotation in rotations() {
            let rotated = RotateCuboid::new(&original, rotation).execute().unwrap();
            let after = centroid_3d(&rotated.vertices).unwrap();
            assert_abs_diff_eq!(before, after, epsilon = 1e-12);
        }
    }

    #[test]
    fn topology_unchanged() {
        let original = model();
        let rotated = RotateCuboid::new(&original, RotationSpec::new(10.0, 20.0, 30.0))
            .execute()
            .unwrap();
        assert_eq!(rotated.faces, original.faces);
    }

    #[test]
    fn half_turn_about_z_swaps_opposite_corners() {
        let original = model();
        let rotated = RotateCuboid::new(&original, RotationSpec::new(0.0, 0.0, 180.0))
            .execute()
            .unwrap();
        // Bottom ring maps 0 <-> 2 and 1 <-> 3 about the vertical center line.
        assert_abs_diff_eq!(rotated.vertices[0], original.vertices[2], epsilon = 1e-12);
        assert_abs_diff_eq!(rotated.vertices[1], original.vertices[3], epsilon = 1e-12);
    }

    #[test]
    fn zero_rotation_is_identity() {
        let original = model();
        let rotated = RotateCuboid::new(&original, RotationSpec::default())
            .execute()
            .unwrap();
        for (a, b) in original.vertices.iter().zip(&rotated.vertices) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-15);
        }
    }

    #[test]
    fn rejects_out_of_range_angle() {
        let original = model();
        let err = RotateCuboid::new(&original, RotationSpec::new(0.0, 181.0, 0.0))
            .execute()
            .unwrap_err();
        assert!(err.is_invalid_parameter());
        assert!(RotateCuboid::new(&original, RotationSpec::new(f64::NAN, 0.0, 0.0))
            .execute()
            .is_err());
    }
}
