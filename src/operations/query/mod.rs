mod circle_intersect;
mod polygon_area;

pub use circle_intersect::CircleIntersect;
pub use polygon_area::PolygonArea;
