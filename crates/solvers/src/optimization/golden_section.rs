//! Golden section search for single-variable optimization.
//!
//! # Algorithm
//!
//! Golden section search finds the minimum (or maximum) of a unimodal function
//! on a bounded interval. It maintains two interior points positioned by the
//! inverse golden ratio φ⁻¹ = (√5 − 1) / 2, compares their objectives, and
//! shrinks the bracket toward the better point. One interior point always
//! survives the contraction, so every iteration costs exactly one new
//! objective evaluation and shrinks the bracket by a factor of φ⁻¹.
//!
//! The search stops once the bracket width is at most the configured
//! tolerance. The estimate is the midpoint of the final bracket, and every
//! bracket visited is recorded in the solution's [`History`].
//!
//! # Brackets
//!
//! Reversed bounds are swapped, so `[5.0, 0.0]` searches the same interval as
//! `[0.0, 5.0]`. A bracket that is already narrower than the tolerance returns
//! after zero contractions (the two interior points are still evaluated).
//!
//! # Limitations
//!
//! - **Single variable only**
//! - **Derivative-free**: Slower convergence than gradient-based methods
//! - **Unimodal assumption**: May find a local optimum if multiple extrema
//!   exist. This is not checked.
//!
//! # Observer Events
//!
//! The solver emits [`Event::Initialized`] after evaluating both interior
//! points, then one [`Event::Contracted`] per contraction. Observers can
//! return [`Action::StopEarly`] to halt immediately.
//!
//! # Example
//!
//! ```
//! use golden_solvers::optimization::golden_section;
//!
//! let solution = golden_section::search(|x| x * x - 4.0 * x + 3.0, 0.0, 5.0, 1e-6)?;
//!
//! assert!((solution.estimate - 2.0).abs() < 1e-6);
//! assert_eq!(solution.history.len(), solution.iters + 1);
//! # Ok::<(), golden_section::Error>(())
//! ```

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod history;
mod point;
mod search;
mod solution;
mod state;


pub use action::Action;
pub use bracket::BracketError;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use history::{History, Interval};
pub use point::Point;
pub use solution::{Solution, Status};

use golden_core::{Function, Objective, Observer};

/// Minimizes `f` on `[a, b]` until the bracket width is at most `tolerance`.
///
/// This is a convenience wrapper around [`minimize_unobserved`] for plain
/// closures, using [`Config::DEFAULT_MAX_ITERS`] as the iteration limit.
///
/// # Errors
///
/// Returns an error if `tolerance` is not finite and positive, if either
/// bound is not finite, or if `b - a` overflows (for example
/// `[-f64::MAX, f64::MAX]`). Objective values are never checked.
pub fn search<F>(f: F, a: f64, b: f64, tolerance: f64) -> Result<Solution, Error>
where
    F: Fn(f64) -> f64,
{
    let config = Config::with_tolerance(tolerance)?;
    minimize_unobserved(&Function(f), [a, b], &config)
}

/// Finds the minimum of the objective using golden section search.
///
/// The observer receives an [`Event`] after initialization and after each
/// contraction. See the [module docs](self) for details.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the objective fails.
pub fn minimize<O, Obs>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: Observer<Event, Action>,
{
    search::search(objective, bracket, config, observer, |v| v)
}

/// Finds the minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the objective fails.
pub fn minimize_unobserved<O>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    O: Objective,
{
    minimize(objective, bracket, config, ())
}

/// Finds the maximum of the objective using golden section search.
///
/// The observer receives an [`Event`] after initialization and after each
/// contraction. Event points carry the objective values as evaluated, not
/// negated.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the objective fails.
pub fn maximize<O, Obs>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    observer: Obs,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: Observer<Event, Action>,
{
    search::search(objective, bracket, config, observer, |v| -v)
}

/// Finds the maximum of the objective without observer support.
///
/// This is a convenience wrapper around [`maximize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or the objective fails.
pub fn maximize_unobserved<O>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    O: Objective,
{
    maximize(objective, bracket, config, ())
}
