mod koch;
mod make_fractal;
mod sierpinski;

pub use koch::{KochSnowflake, Segment2};
pub use make_fractal::MakeFractal;
pub use sierpinski::SierpinskiTriangle;

use crate::error::{ensure_positive, GeometryError, Result};

/// Largest recursion order that stays responsive for interactive use.
///
/// Generators accept higher orders but log a warning.
pub const INTERACTIVE_MAX_ORDER: u32 = 8;

/// Upper bound on up-front allocation, in primitives.
const PREALLOC_LIMIT: usize = 1 << 20;

/// Validates a recursion order and seed size.
fn validate(order: i32, size: f64) -> Result<(u32, f64)> {
    let Ok(order) = u32::try_from(order) else {
        tracing::debug!(order, "rejected negative fractal order");
        return Err(GeometryError::InvalidParameter {
            parameter: "order",
            value: f64::from(order),
            constraint: "non-negative",
        }
        .into());
    };
    let size = ensure_positive("size", size)?;
    Ok((order, size))
}

/// Number of leaves of a tree with branching factor `base` at depth `order`.
fn leaf_count(base: usize, order: u32) -> usize {
    base.saturating_pow(order)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_accepts_zero_order() {
        assert!(matches!(validate(0, 1.0), Ok((0, _))));
    }

    #[test]
    fn validate_rejects_negative_order() {
        assert!(validate(-3, 1.0).is_err());
    }

    #[test]
    fn leaf_count_saturates() {
        assert_eq!(leaf_count(3, 4), 81);
        assert_eq!(leaf_count(4, 64), usize::MAX);
    }
}
