//! Capability traits for generic observers.
//!
//! These traits abstract over solver event and action types, so an observer
//! can be written once against the capabilities it needs.
//!
//! # Event traits
//!
//! - [`HasObjective`] — events that carry an objective value
//! - [`HasInterval`] — events that carry the current search interval
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use golden_core::Observer;
//! use golden_observers::traits::{CanStopEarly, HasInterval};
//!
//! /// Stops once the interval is narrower than `width`.
//! struct NarrowEnough {
//!     width: f64,
//! }
//!
//! impl<E: HasInterval, A: CanStopEarly> Observer<E, A> for NarrowEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let (low, high) = event.interval();
//!         (high - low < self.width).then(A::stop_early)
//!     }
//! }
//! ```

use golden_solvers::optimization::golden_section;

/// An event that carries an objective value.
pub trait HasObjective {
    /// Returns the objective for this event.
    fn objective(&self) -> f64;
}

/// An event that carries the current search interval.
pub trait HasInterval {
    /// Returns the interval as `(low, high)`.
    fn interval(&self) -> (f64, f64);
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- golden_section::Event ---

impl HasObjective for golden_section::Event {
    /// The objective at the most recently evaluated point.
    fn objective(&self) -> f64 {
        self.probe().objective
    }
}

impl HasInterval for golden_section::Event {
    fn interval(&self) -> (f64, f64) {
        golden_section::Event::interval(self).into()
    }
}

// --- golden_section::Action ---

impl CanStopEarly for golden_section::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
