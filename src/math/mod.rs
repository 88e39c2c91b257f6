pub mod angle_2d;
pub mod point_set;
pub mod rotation_3d;

pub use angle_2d::{arc_points, point_at_angle, points_on_circle};
pub use point_set::{
    axis_limits, centroid_2d, centroid_3d, max_abs_coordinate, try_normalize, DEFAULT_AXIS_MARGIN,
};
pub use rotation_3d::rotation_matrix_3d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 3x3 rotation matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
