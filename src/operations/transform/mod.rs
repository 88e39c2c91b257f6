mod rotate_cuboid;

pub use rotate_cuboid::RotateCuboid;
