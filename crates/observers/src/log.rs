//! Logging observer built on `tracing`.

use golden_core::Observer;
use golden_solvers::optimization::golden_section::Event;
use tracing::debug;

/// An observer that emits a `tracing` event for solver events.
///
/// Events are emitted at `DEBUG` level under this module's target with
/// structured fields (`iter`, `low`, `high`, `width`, `x`, `objective`), so
/// output is controlled entirely by the caller's subscriber.
///
/// The observer never returns an action.
///
/// # Example
///
/// ```
/// use golden_core::Function;
/// use golden_observers::LogObserver;
/// use golden_solvers::optimization::golden_section;
///
/// let mut log = LogObserver::new().every(5);
/// golden_section::minimize(
///     &Function(|x: f64| (x - 1.0).powi(2)),
///     [0.0, 3.0],
///     &golden_section::Config::default(),
///     &mut log,
/// )?;
/// assert!(log.logged() > 0);
/// # Ok::<(), golden_section::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct LogObserver {
    every: usize,
    logged: usize,
}

impl LogObserver {
    /// Creates an observer that logs every event.
    #[must_use]
    pub fn new() -> Self {
        Self {
            every: 1,
            logged: 0,
        }
    }

    /// Logs only every `n`th contraction; initialization is always logged.
    ///
    /// `n = 0` is treated as `1`.
    #[must_use]
    pub fn every(mut self, n: usize) -> Self {
        self.every = n.max(1);
        self
    }

    /// Returns how many events have been logged.
    #[must_use]
    pub fn logged(&self) -> usize {
        self.logged
    }

    fn log(&mut self, event: &Event) {
        match *event {
            Event::Initialized {
                interval,
                left,
                right,
            } => {
                debug!(
                    iter = 0,
                    low = interval.low,
                    high = interval.high,
                    width = interval.width(),
                    x1 = left.x,
                    f1 = left.objective,
                    x2 = right.x,
                    f2 = right.objective,
                    "initialized bracket"
                );
            }
            Event::Contracted {
                iter,
                interval,
                probe,
                ..
            } => {
                if iter % self.every != 0 {
                    return;
                }
                debug!(
                    iter,
                    low = interval.low,
                    high = interval.high,
                    width = interval.width(),
                    x = probe.x,
                    objective = probe.objective,
                    "contracted bracket"
                );
            }
        }
        self.logged += 1;
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Observer<Event, A> for LogObserver {
    fn observe(&mut self, event: &Event) -> Option<A> {
        self.log(event);
        None
    }
}

/// Allows `&mut LogObserver` to be passed to solvers that take an observer
/// by value, so [`LogObserver::logged`] can be read after the solve completes.
impl<A> Observer<Event, A> for &mut LogObserver {
    fn observe(&mut self, event: &Event) -> Option<A> {
        (**self).log(event);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use golden_core::Function;
    use golden_solvers::optimization::golden_section::{Config, Interval, Point, minimize};

    fn contracted(iter: usize) -> Event {
        Event::Contracted {
            iter,
            interval: Interval::new(0.0, 1.0),
            probe: Point::new(0.4, 0.1),
            other: Point::new(0.6, 0.2),
        }
    }

    // Helper to call observe without needing to specify the action type at each call site.
    fn feed(obs: &mut LogObserver, event: &Event) -> Option<()> {
        obs.observe(event)
    }

    #[test]
    fn logs_every_event_by_default() {
        let mut obs = LogObserver::new();
        for iter in 1..=4 {
            feed(&mut obs, &contracted(iter));
        }
        assert_eq!(obs.logged(), 4);
    }

    #[test]
    fn every_skips_intermediate_contractions() {
        let mut obs = LogObserver::new().every(3);
        for iter in 1..=7 {
            feed(&mut obs, &contracted(iter));
        }
        // Iterations 3 and 6.
        assert_eq!(obs.logged(), 2);
    }

    #[test]
    fn every_zero_logs_everything() {
        let mut obs = LogObserver::new().every(0);
        feed(&mut obs, &contracted(1));
        feed(&mut obs, &contracted(2));
        assert_eq!(obs.logged(), 2);
    }

    #[test]
    fn never_returns_an_action() {
        let mut obs = LogObserver::default();
        assert!(feed(&mut obs, &contracted(1)).is_none());
    }

    #[test]
    fn counts_init_and_contractions_during_solve() {
        let mut obs = LogObserver::new();

        let solution = minimize(
            &Function(|x: f64| x * x - 4.0 * x + 3.0),
            [0.0, 5.0],
            &Config::default(),
            &mut obs,
        )
        .unwrap();

        assert_eq!(obs.logged(), solution.iters + 1);
    }
}
