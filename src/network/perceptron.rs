use rand::distributions::Distribution;
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::step::step;
use crate::data::dataset::INPUTS;
use crate::network::model::{Model, RandomInit};

/// Single threshold unit: `step(w1·x1 + w2·x2 + b)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Perceptron {
    pub weights: [f64; INPUTS],
    pub bias: f64,
}

impl Perceptron {
    pub fn new(weights: [f64; INPUTS], bias: f64) -> Perceptron {
        Perceptron { weights, bias }
    }

    pub fn zeros() -> Perceptron {
        Perceptron::new([0.0; INPUTS], 0.0)
    }

    /// Pre-activation value `w·x + b`.
    pub fn weighted_sum(&self, input: &[f64; INPUTS]) -> f64 {
        self.weights.iter().zip(input.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>() + self.bias
    }
}

impl Default for Perceptron {
    fn default() -> Self {
        Perceptron::zeros()
    }
}

impl Model for Perceptron {
    fn predict(&self, input: &[f64; INPUTS]) -> f64 {
        step(self.weighted_sum(input))
    }
}

impl RandomInit for Perceptron {
    fn sample_from<R, D>(rng: &mut R, dist: &D) -> Self
    where
        R: Rng + ?Sized,
        D: Distribution<f64>,
    {
        let weights = std::array::from_fn(|_| dist.sample(rng));
        let bias = dist.sample(rng);
        Perceptron { weights, bias }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::boolean::BooleanTask;

    #[test]
    fn hand_set_weights_compute_and() {
        let p = Perceptron::new([1.0, 1.0], -1.5);
        assert_eq!(p.predict_all(&BooleanTask::And.dataset()), vec![0.0, 0.0, 0.0, 1.0]);
        assert_eq!(p.mse(&BooleanTask::And.dataset()), 0.0);
    }

    #[test]
    fn zero_weights_fire_on_every_input() {
        // step(0) == 1, so the untrained unit says "true" everywhere.
        let p = Perceptron::zeros();
        assert_eq!(p.predict_all(&BooleanTask::And.dataset()), vec![1.0; 4]);
        assert_eq!(p.mse(&BooleanTask::And.dataset()), 0.75);
    }

    #[test]
    fn prediction_is_repeatable() {
        let p = Perceptron::new([0.3, -0.7], 0.1);
        for ex in &BooleanTask::Xor.dataset() {
            assert_eq!(p.predict(&ex.input), p.predict(&ex.input));
        }
    }

    #[test]
    fn verify_flags_mistakes() {
        let p = Perceptron::zeros();
        let rows = p.verify(&BooleanTask::And.dataset());
        let correct: Vec<bool> = rows.iter().map(|r| r.correct).collect();
        assert_eq!(correct, vec![false, false, false, true]);
    }
}
