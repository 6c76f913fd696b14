use crate::error::{OperationError, Result};
use crate::geometry::Container;
use crate::math::TOLERANCE;

use super::{Evaluate, Volume};

/// The interval and best-estimate angle after one bisection step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionResult {
    /// Updated lower bound, in degrees.
    pub low: f64,
    /// Updated upper bound, in degrees.
    pub high: f64,
    /// The midpoint that was evaluated: the current best-estimate angle.
    pub midpoint: f64,
}

/// One step of the equal-volume angle search.
///
/// Evaluates the volume model at the interval midpoint and keeps the half
/// where the open and sealed volumes still straddle each other: if the open
/// volume is smaller, the crossing lies below the midpoint, so the upper
/// bound moves down; otherwise the lower bound moves up. The unbounded
/// sentinel counts as larger than any finite volume.
///
/// Each invocation performs exactly one step; the interval lives with the
/// caller between invocations. Monotonicity of the volume difference over
/// the supplied interval is a precondition, not something the step verifies.
pub struct BisectionStep<'a> {
    container: &'a Container,
    low: f64,
    high: f64,
}

impl<'a> BisectionStep<'a> {
    /// Creates a step over the interval `[low, high]`, in degrees.
    #[must_use]
    pub fn new(container: &'a Container, low: f64, high: f64) -> Self {
        Self {
            container,
            low,
            high,
        }
    }

    /// Executes the step, returning the narrowed interval and its midpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the bounds are not ordered `low <= high` or fall
    /// outside `[0, 90]` degrees.
    pub fn execute(&self) -> Result<BisectionResult> {
        if !(0.0..=90.0).contains(&self.low)
            || !(0.0..=90.0).contains(&self.high)
            || self.low > self.high + TOLERANCE
        {
            return Err(OperationError::InvalidInput(format!(
                "search interval [{}, {}] is not an ordered subrange of [0, 90]",
                self.low, self.high
            ))
            .into());
        }

        let midpoint = (self.low + self.high) / 2.0;
        let eval = Evaluate::new(self.container, midpoint).execute()?;

        let (low, high) = if Volume::Finite(eval.open_volume) < eval.sealed_volume {
            (self.low, midpoint)
        } else {
            (midpoint, self.high)
        };

        Ok(BisectionResult {
            low,
            high,
            midpoint,
        })
    }
}
