use golden_core::Objective;

use super::{Config, Error, Interval, Point, bracket::GoldenBracket};

/// The bracket together with the evaluated interior points.
///
/// `left` is always evaluated at `bracket.inner_left` and `right` at
/// `bracket.inner_right`.
pub(super) struct State {
    bracket: GoldenBracket,
    left: Point,
    right: Point,
}

impl State {
    /// Evaluates both interior points of a fresh bracket.
    pub(super) fn init<O: Objective>(objective: &O, bracket: GoldenBracket) -> Result<Self, Error> {
        let left = Point::evaluate(objective, bracket.inner_left)?;
        let right = Point::evaluate(objective, bracket.inner_right)?;
        Ok(Self {
            bracket,
            left,
            right,
        })
    }

    pub(super) fn left(&self) -> Point {
        self.left
    }

    pub(super) fn right(&self) -> Point {
        self.right
    }

    pub(super) fn interval(&self) -> Interval {
        self.bracket.interval()
    }

    pub(super) fn is_converged(&self, config: &Config) -> bool {
        self.bracket.width() <= config.tolerance()
    }

    /// Contracts the bracket toward the better interior point.
    ///
    /// The retained interior point is reused, so the objective is called
    /// exactly once. Returns the new point and the retained one.
    pub(super) fn contract<O, F>(
        &mut self,
        objective: &O,
        transform: &F,
    ) -> Result<(Point, Point), Error>
    where
        O: Objective,
        F: Fn(f64) -> f64,
    {
        if transform(self.left.objective) > transform(self.right.objective) {
            // Right is better → optimum lies in [inner_left, right]
            self.bracket.shrink_left();
            let probe = Point::evaluate(objective, self.bracket.inner_right)?;
            self.left = self.right;
            self.right = probe;
            Ok((probe, self.left))
        } else {
            // Left is better or tied → optimum lies in [left, inner_right]
            self.bracket.shrink_right();
            let probe = Point::evaluate(objective, self.bracket.inner_left)?;
            self.right = self.left;
            self.left = probe;
            Ok((probe, self.right))
        }
    }
}
