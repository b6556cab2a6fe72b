use log::{debug, info, warn};

use crate::data::dataset::Dataset;
use crate::error::{ConfigError, Result};
use crate::network::perceptron::Perceptron;
use crate::optim::delta_rule::DeltaRule;
use crate::train::config::DeltaRuleConfig;
use crate::train::events::{Outcome, TrainEvent};
use crate::train::reporter::Reporter;

/// Trains a perceptron with the delta rule, starting from the initial
/// weights in `config`.
pub fn train_perceptron<R>(
    dataset: &Dataset,
    config: &DeltaRuleConfig,
    reporter: &mut R,
) -> Result<Outcome<Perceptron>>
where
    R: Reporter<Perceptron> + ?Sized,
{
    config.validate()?;
    let mut perceptron = config.initial_perceptron();
    let rule = DeltaRule::new(config.learning_rate);
    train_delta_rule(&mut perceptron, dataset, &rule, config.max_epochs, reporter)
}

/// Online perceptron training, modifying `perceptron` in place.
///
/// Every epoch visits the examples in dataset order and applies
/// [`DeltaRule::step`] to each. After the epoch a `Progress` event reports
/// the epoch index (0-based), the number of misclassified examples and a
/// snapshot of the weights.
///
/// # Termination
/// - An epoch with no misclassification: converged, stop immediately.
/// - `max_epochs` epochs without one: exhausted; the weights are left as
///   they are. This is the expected outcome for data that is not linearly
///   separable, such as XOR.
///
/// The returned outcome's `metric` is the last epoch's error count.
pub fn train_delta_rule<R>(
    perceptron: &mut Perceptron,
    dataset: &Dataset,
    rule: &DeltaRule,
    max_epochs: usize,
    reporter: &mut R,
) -> Result<Outcome<Perceptron>>
where
    R: Reporter<Perceptron> + ?Sized,
{
    if max_epochs == 0 {
        return Err(ConfigError::ZeroBudget { what: "max_epochs" });
    }
    if !(rule.learning_rate.is_finite() && rule.learning_rate > 0.0) {
        return Err(ConfigError::InvalidLearningRate { value: rule.learning_rate });
    }

    let mut converged = false;
    let mut epochs_run = 0;
    let mut error_count = 0usize;

    for epoch in 0..max_epochs {
        epochs_run = epoch + 1;
        error_count = run_one_epoch(perceptron, dataset, rule);

        debug!(
            "epoch {epoch}: {error_count} errors, weights {:?}, bias {}",
            perceptron.weights, perceptron.bias
        );
        reporter.report(TrainEvent::Progress {
            step: epoch,
            metric: error_count as f64,
            params: Some(*perceptron),
        });

        if error_count == 0 {
            converged = true;
            break;
        }
    }

    if converged {
        info!("delta rule converged in epoch {}", epochs_run - 1);
    } else {
        warn!("delta rule did not converge within {max_epochs} epochs");
    }

    let outcome = Outcome {
        params: *perceptron,
        metric: error_count as f64,
        converged,
        steps: epochs_run,
    };
    reporter.report(outcome.to_event());
    Ok(outcome)
}

/// One pass over the dataset. Returns the number of examples that were
/// misclassified (and therefore triggered an update).
fn run_one_epoch(perceptron: &mut Perceptron, dataset: &Dataset, rule: &DeltaRule) -> usize {
    dataset
        .iter()
        .map(|example| rule.step(perceptron, example))
        .filter(|&error| error != 0.0)
        .count()
}
