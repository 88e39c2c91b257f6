use super::Matrix3;

/// Elementary rotation about the X axis by `angle` radians.
#[must_use]
pub fn rotation_x(angle: f64) -> Matrix3 {
    let (s, c) = angle.sin_cos();
    #[rustfmt::skip]
    let m = Matrix3::new(
        1.0, 0.0, 0.0,
        0.0, c,   -s,
        0.0, s,   c,
    );
    m
}

/// Elementary rotation about the Y axis by `angle` radians.
#[must_use]
pub fn rotation_y(angle: f64) -> Matrix3 {
    let (s, c) = angle.sin_cos();
    #[rustfmt::skip]
    let m = Matrix3::new(
        c,   0.0, s,
        0.0, 1.0, 0.0,
        -s,  0.0, c,
    );
    m
}

/// Elementary rotation about the Z axis by `angle` radians.
#[must_use]
pub fn rotation_z(angle: f64) -> Matrix3 {
    let (s, c) = angle.sin_cos();
    #[rustfmt::skip]
    let m = Matrix3::new(
        c,   -s,  0.0,
        s,   c,   0.0,
        0.0, 0.0, 1.0,
    );
    m
}

/// Builds the Euler rotation `Rx · Ry · Rz` from angles in degrees.
///
/// Applied to a column vector, the Z rotation acts first, then Y, then X.
/// The composition order is fixed: compound rotations depend on it.
#[must_use]
pub fn rotation_matrix_3d(x_deg: f64, y_deg: f64, z_deg: f64) -> Matrix3 {
    rotation_x(x_deg.to_radians()) * rotation_y(y_deg.to_radians()) * rotation_z(z_deg.to_radians())
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::math::Vector3;

    #[test]
    fn zero_angles_is_identity() {
        let m = rotation_matrix_3d(0.0, 0.0, 0.0);
        assert_abs_diff_eq!(m, Matrix3::identity(), epsilon = 1e-15);
    }

    #[test]
    fn quarter_turn_about_z() {
        let v = rotation_matrix_3d(0.0, 0.0, 90.0) * Vector3::x();
        assert_abs_diff_eq!(v, Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn quarter_turn_about_x() {
        let v = rotation_matrix_3d(90.0, 0.0, 0.0) * Vector3::y();
        assert_abs_diff_eq!(v, Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn quarter_turn_about_y() {
        let v = rotation_matrix_3d(0.0, 90.0, 0.0) * Vector3::z();
        assert_abs_diff_eq!(v, Vector3::x(), epsilon = 1e-12);
    }

    #[test]
    fn z_is_applied_before_x() {
        // Z first: x -> y, then X: y -> z.
        let v = rotation_matrix_3d(90.0, 0.0, 90.0) * Vector3::x();
        assert_abs_diff_eq!(v, Vector3::z(), epsilon = 1e-12);

        // The opposite order would leave x on the y axis.
        let reversed = rotation_z(90f64.to_radians()) * rotation_x(90f64.to_radians()) * Vector3::x();
        assert_abs_diff_eq!(reversed, Vector3::y(), epsilon = 1e-12);
    }

    #[test]
    fn result_is_orthonormal() {
        let m = rotation_matrix_3d(33.0, -71.0, 128.0);
        assert_abs_diff_eq!(m * m.transpose(), Matrix3::identity(), epsilon = 1e-12);
        assert_abs_diff_eq!(m.determinant(), 1.0, epsilon = 1e-12);
    }
}
