use golden_core::Objective;

use super::Error;

/// A point with its evaluated objective value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// The x value.
    pub x: f64,

    /// The objective value at x.
    pub objective: f64,
}

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, objective: f64) -> Self {
        Self { x, objective }
    }

    /// Evaluates the objective at `x`.
    ///
    /// Objective errors are boxed and tagged with the failing `x`.
    pub(super) fn evaluate<O: Objective>(objective: &O, x: f64) -> Result<Self, Error> {
        let value = objective.call(x).map_err(|source| Error::Objective {
            x,
            source: Box::new(source),
        })?;
        Ok(Self::new(x, value))
    }
}
