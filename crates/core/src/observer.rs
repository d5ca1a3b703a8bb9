/// Watches a solver's events and may steer the iteration.
///
/// The golden-section solver calls `observe` once after the initial pair of
/// probes and once after every bracket contraction. Returning `Some(action)`
/// asks the solver to act on it (the golden-section solver understands
/// `StopEarly`); returning `None` lets the search continue.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer, and `()` is the
/// observer that never acts.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// Never acts.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
