use crate::data::dataset::Example;
use crate::network::model::Model;
use crate::network::perceptron::Perceptron;

/// Classic online perceptron learning rule.
pub struct DeltaRule {
    pub learning_rate: f64,
}

impl DeltaRule {
    pub fn new(learning_rate: f64) -> DeltaRule {
        DeltaRule { learning_rate }
    }

    /// Presents one example to `perceptron` and corrects it in place.
    ///
    /// Returns the signed error `expected - predicted` (one of -1, 0, 1).
    /// When the error is non-zero every weight moves by `α·error·x_k` and
    /// the bias by `α·error`; a correct prediction leaves the unit untouched.
    pub fn step(&self, perceptron: &mut Perceptron, example: &Example) -> f64 {
        let predicted = perceptron.predict(&example.input);
        let error = example.expected - predicted;
        if error != 0.0 {
            let scale = self.learning_rate * error;
            for (w, x) in perceptron.weights.iter_mut().zip(example.input.iter()) {
                *w += scale * x;
            }
            perceptron.bias += scale;
        }
        error
    }
}
