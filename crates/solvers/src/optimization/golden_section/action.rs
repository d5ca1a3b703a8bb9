/// Actions an observer can take during golden section search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early.
    ///
    /// The returned solution keeps every interval recorded so far, and its
    /// estimate is the midpoint of the most recent one.
    StopEarly,
}
