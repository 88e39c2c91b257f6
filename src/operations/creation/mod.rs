mod make_angle;
mod make_cuboid;
mod make_isosceles_triangle;
mod make_stretch;
mod regular_polygon;

pub use make_angle::MakeAngle;
pub use make_cuboid::MakeCuboid;
pub use make_isosceles_triangle::{triangle_angles_deg, MakeIsoscelesTriangle};
pub use make_stretch::MakeStretch;
pub use regular_polygon::{exterior_angle_deg, interior_angle_deg, RegularPolygon, MIN_SIDES};

pub(crate) use regular_polygon::{apothem_from_side, validate_sides};
