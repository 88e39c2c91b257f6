pub mod creation;
pub mod fractal;
pub mod query;
pub mod transform;
