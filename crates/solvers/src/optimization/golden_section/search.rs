use golden_core::{Objective, Observer};
use tracing::{debug, trace};

use super::{
    Action, Config, Error, Event, History, Solution, Status, bracket::GoldenBracket, state::State,
};

/// Core golden section search implementation.
///
/// The `transform` function is applied to objective values before comparison,
/// allowing the same algorithm to handle both minimization
/// (transform = identity) and maximization (transform = negation).
pub(super) fn search<O, Obs, F>(
    objective: &O,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
    transform: F,
) -> Result<Solution, Error>
where
    O: Objective,
    Obs: Observer<Event, Action>,
    F: Fn(f64) -> f64,
{
    let bracket = GoldenBracket::new(bracket)?;
    debug!(
        low = bracket.left,
        high = bracket.right,
        tolerance = config.tolerance(),
        max_iters = config.max_iters(),
        "starting golden section search"
    );

    let mut state = State::init(objective, bracket)?;
    let mut history = History::new(state.interval());

    let event = Event::Initialized {
        interval: state.interval(),
        left: state.left(),
        right: state.right(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(finish(Status::StoppedByObserver, 0, history));
    }

    for iter in 1..=config.max_iters() {
        if state.is_converged(config) {
            return Ok(finish(Status::Converged, iter - 1, history));
        }

        let (probe, other) = state.contract(objective, &transform)?;
        let interval = state.interval();
        history.push(interval);
        trace!(
            iter,
            low = interval.low,
            high = interval.high,
            width = interval.width(),
            x = probe.x,
            objective = probe.objective,
            "contracted bracket"
        );

        let event = Event::Contracted {
            iter,
            interval,
            probe,
            other,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(finish(Status::StoppedByObserver, iter, history));
        }
    }

    let status = if state.is_converged(config) {
        Status::Converged
    } else {
        Status::MaxIters
    };
    Ok(finish(status, config.max_iters(), history))
}

fn finish(status: Status, iters: usize, history: History) -> Solution {
    let solution = Solution::new(status, iters, history);
    debug!(
        ?status,
        iters,
        estimate = solution.estimate,
        width = solution.interval().width(),
        "golden section search finished"
    );
    solution
}
