use crate::error::Result;
use crate::geometry::{FractalKind, FractalResult, FractalSpec};

use super::{KochSnowflake, SierpinskiTriangle};

/// Generates the fractal selected by a [`FractalSpec`].
#[derive(Debug)]
pub struct MakeFractal {
    spec: FractalSpec,
}

impl MakeFractal {
    /// Creates a new `MakeFractal` operation.
    #[must_use]
    pub fn new(spec: FractalSpec) -> Self {
        Self { spec }
    }

    /// Executes the generator for the requested kind.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::InvalidParameter` if the order is negative or
    /// the size is not positive.
    pub fn execute(&self) -> Result<FractalResult> {
        let FractalSpec { kind, order, size } = self.spec;
        Ok(match kind {
            FractalKind::Koch => FractalResult::Koch(KochSnowflake::new(order, size).execute()?),
            FractalKind::Sierpinski => {
                FractalResult::Sierpinski(SierpinskiTriangle::new(order, size).execute()?)
            }
        })
    }
}
