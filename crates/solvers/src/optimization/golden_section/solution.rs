use super::{History, Interval};

/// Indicates whether the solver converged or stopped for another reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket width dropped to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a golden section search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the optimum: the midpoint of the final interval.
    pub estimate: f64,

    /// Number of contractions performed.
    pub iters: usize,

    /// Every interval visited, starting with the initial one.
    pub history: History,
}

impl Solution {
    pub(super) fn new(status: Status, iters: usize, history: History) -> Self {
        Self {
            status,
            estimate: history.last().midpoint(),
            iters,
            history,
        }
    }

    /// Returns the final interval.
    #[must_use]
    pub fn interval(&self) -> Interval {
        self.history.last()
    }

    /// Splits the solution into `(estimate, iters, history)`.
    #[must_use]
    pub fn into_parts(self) -> (f64, usize, History) {
        (self.estimate, self.iters, self.history)
    }
}
