use log::{debug, info, warn};

use crate::data::dataset::Dataset;
use crate::error::{ConfigError, Result};
use crate::loss::mse::MseLoss;
use crate::network::model::{Model, RandomInit};
use crate::optim::random_search::{RandomSearch, SearchState};
use crate::train::config::RandomSearchConfig;
use crate::train::events::{Outcome, TrainEvent};
use crate::train::reporter::Reporter;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Runs a random search over the parameters of `M` on `dataset`.
///
/// Builds a [`RandomSearch`] from `config` (seeded when `config.seed` is set)
/// and hands it to [`run_random_search`].
pub fn random_search<M, R>(
    dataset: &Dataset,
    config: &RandomSearchConfig,
    reporter: &mut R,
) -> Result<Outcome<M>>
where
    M: Model + RandomInit + Clone,
    R: Reporter<M> + ?Sized,
{
    config.validate()?;
    let mut searcher = RandomSearch::new(config.weight_range, config.seed)?;
    run_random_search(&mut searcher, dataset, config.max_iterations, reporter)
}

/// Pure i.i.d. global search.
///
/// Each iteration draws a brand-new candidate from `searcher`, scores it by
/// MSE over `dataset` and keeps it only if it strictly beats the best so far.
/// Every improvement is reported as a `Progress` event carrying the 1-based
/// iteration and the new best error.
///
/// # Termination
/// - `best_error == 0.0` (exact comparison): the run has converged and stops
///   at once.
/// - `max_iterations` candidates tried: the best seen is returned with
///   `converged: false`. No convergence is guaranteed.
///
/// A final `Result` event is emitted in both cases.
pub fn run_random_search<M, R>(
    searcher: &mut RandomSearch,
    dataset: &Dataset,
    max_iterations: usize,
    reporter: &mut R,
) -> Result<Outcome<M>>
where
    M: Model + RandomInit + Clone,
    R: Reporter<M> + ?Sized,
{
    if max_iterations == 0 {
        return Err(ConfigError::ZeroBudget { what: "max_iterations" });
    }

    let expected = dataset.expected_outputs();
    let mut predicted = Vec::with_capacity(dataset.len());
    let mut state = SearchState::new();
    let mut converged = false;
    let mut steps = 0;

    for iteration in 1..=max_iterations {
        steps = iteration;

        let candidate: M = searcher.propose();
        predicted.clear();
        predicted.extend(dataset.iter().map(|ex| candidate.predict(&ex.input)));
        let error = MseLoss::loss(&predicted, &expected);

        if state.offer(candidate, error) {
            debug!("iteration {iteration}: new best mse {error}");
            reporter.report(TrainEvent::Progress { step: iteration, metric: error, params: None });

            if state.best_error() == 0.0 {
                converged = true;
                break;
            }
        }
    }

    // The first candidate always beats +inf, so a non-zero budget always
    // leaves a best candidate behind.
    let (params, metric) = state
        .into_best()
        .ok_or(ConfigError::ZeroBudget { what: "max_iterations" })?;

    if converged {
        info!("random search converged after {steps} iterations");
    } else {
        warn!("random search exhausted {steps} iterations, best mse {metric}");
    }

    let outcome = Outcome { params, metric, converged, steps };
    reporter.report(outcome.to_event());
    Ok(outcome)
}
