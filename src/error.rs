use thiserror::Error;

/// Top-level error type for geokit.
#[derive(Debug, Error)]
pub enum GeokitError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised when caller-supplied parameters fall outside their domain.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("invalid parameter {parameter} = {value}: must be {constraint}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        constraint: &'static str,
    },

    #[error("parameter {parameter} must be finite")]
    NotFinite { parameter: &'static str },
}

impl GeokitError {
    /// Returns `true` if the error reports out-of-domain input.
    #[must_use]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            Self::Geometry(
                GeometryError::InvalidParameter { .. } | GeometryError::NotFinite { .. }
            )
        )
    }
}

/// Convenience type alias for results using [`GeokitError`].
pub type Result<T> = std::result::Result<T, GeokitError>;

/// Checks that `value` is finite and strictly positive.
///
/// # Errors
///
/// Returns `GeometryError::NotFinite` for NaN or infinite input and
/// `GeometryError::InvalidParameter` for zero or negative input.
pub(crate) fn ensure_positive(parameter: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        tracing::debug!(parameter, "rejected non-finite parameter");
        return Err(GeometryError::NotFinite { parameter }.into());
    }
    if value <= 0.0 {
        tracing::debug!(parameter, value, "rejected non-positive parameter");
        return Err(GeometryError::InvalidParameter {
            parameter,
            value,
            constraint: "positive",
        }
        .into());
    }
    Ok(value)
}

/// Checks that `value` is finite and lies within `[min, max]`.
///
/// # Errors
///
/// Returns `GeometryError::NotFinite` for NaN or infinite input and
/// `GeometryError::InvalidParameter` when out of range.
pub(crate) fn ensure_in_range(
    parameter: &'static str,
    value: f64,
    min: f64,
    max: f64,
    constraint: &'static str,
) -> Result<f64> {
    if !value.is_finite() {
        tracing::debug!(parameter, "rejected non-finite parameter");
        return Err(GeometryError::NotFinite { parameter }.into());
    }
    if value < min || value > max {
        tracing::debug!(parameter, value, min, max, "rejected out-of-range parameter");
        return Err(GeometryError::InvalidParameter {
            parameter,
            value,
            constraint,
        }
        .into());
    }
    Ok(value)
}
