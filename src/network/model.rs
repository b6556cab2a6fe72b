use rand::distributions::Distribution;
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::data::dataset::{Dataset, INPUTS};
use crate::loss::mse::MseLoss;

/// A forward evaluator with a single boolean output.
///
/// Implementations are pure functions of their parameters and the input:
/// evaluating the same model on the same input twice gives the same output.
pub trait Model {
    /// Output for one input vector, always `0.0` or `1.0`.
    fn predict(&self, input: &[f64; INPUTS]) -> f64;

    /// Outputs for every example of `dataset`, in dataset order.
    fn predict_all(&self, dataset: &Dataset) -> Vec<f64> {
        dataset.iter().map(|ex| self.predict(&ex.input)).collect()
    }

    /// Mean squared error of this model over `dataset`.
    fn mse(&self, dataset: &Dataset) -> f64 {
        MseLoss::loss(&self.predict_all(dataset), &dataset.expected_outputs())
    }

    /// Per-example comparison of prediction and target.
    fn verify(&self, dataset: &Dataset) -> Vec<Verification> {
        dataset
            .iter()
            .map(|ex| {
                let predicted = self.predict(&ex.input);
                Verification {
                    input: ex.input,
                    predicted,
                    expected: ex.expected,
                    correct: predicted == ex.expected,
                }
            })
            .collect()
    }
}

/// Parameter sets that can be drawn from scratch, one independent sample per
/// scalar parameter.
pub trait RandomInit: Sized {
    fn sample_from<R, D>(rng: &mut R, dist: &D) -> Self
    where
        R: Rng + ?Sized,
        D: Distribution<f64>;
}

/// One row of a verification table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub input: [f64; INPUTS],
    pub predicted: f64,
    pub expected: f64,
    pub correct: bool,
}
