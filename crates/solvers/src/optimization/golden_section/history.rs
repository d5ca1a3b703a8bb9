use std::ops::Index;

/// A closed interval `[low, high]` known to contain the optimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound.
    pub low: f64,

    /// Upper bound.
    pub high: f64,
}

impl Interval {
    /// Creates a new interval.
    ///
    /// Callers are responsible for `low <= high`; the solver only ever
    /// produces intervals that satisfy it.
    #[must_use]
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Returns `high - low`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    /// Returns the midpoint `(low + high) / 2`.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.low + self.high) / 2.0
    }

    /// Returns `true` if `x` lies within the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }
}

impl From<Interval> for (f64, f64) {
    fn from(interval: Interval) -> Self {
        (interval.low, interval.high)
    }
}

/// The sequence of intervals visited by a golden section search.
///
/// Entry 0 is the initial interval. Each contraction appends one entry, so a
/// search that performed `n` contractions has `n + 1` entries. The history is
/// append-only while the solver runs and read-only once returned.
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    intervals: Vec<Interval>,
}

impl History {
    pub(super) fn new(initial: Interval) -> Self {
        Self {
            intervals: vec![initial],
        }
    }

    pub(super) fn push(&mut self, interval: Interval) {
        self.intervals.push(interval);
    }

    /// Returns the number of recorded intervals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Always returns `false`; a history holds at least the initial interval.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns the initial interval.
    #[must_use]
    pub fn initial(&self) -> Interval {
        self.intervals[0]
    }

    /// Returns the most recently recorded interval.
    #[must_use]
    pub fn last(&self) -> Interval {
        self.intervals[self.intervals.len() - 1]
    }

    /// Returns the interval at `index`, if recorded.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Interval> {
        self.intervals.get(index).copied()
    }

    /// Returns the recorded intervals in iteration order.
    #[must_use]
    pub fn as_slice(&self) -> &[Interval] {
        &self.intervals
    }

    /// Iterates over the recorded intervals in iteration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    /// Iterates over the interval widths in iteration order.
    pub fn widths(&self) -> impl Iterator<Item = f64> + '_ {
        self.intervals.iter().map(Interval::width)
    }
}

impl Index<usize> for History {
    type Output = Interval;

    fn index(&self, index: usize) -> &Self::Output {
        &self.intervals[index]
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for History {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl From<History> for Vec<Interval> {
    fn from(history: History) -> Self {
        history.intervals
    }
}
