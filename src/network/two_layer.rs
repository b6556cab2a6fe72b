use rand::distributions::Distribution;
use rand::Rng;
use serde::{Serialize, Deserialize};

use crate::activation::step::step;
use crate::data::dataset::INPUTS;
use crate::network::model::{Model, RandomInit};

/// Number of hidden units in the fixed 2-2-1 topology.
pub const HIDDEN: usize = 2;

/// Fixed 2-2-1 network with step activations in both layers.
///
/// `w_ih[i][h]` is the weight from input `i` to hidden unit `h`, so column
/// `h` of `w_ih` holds everything hidden unit `h` sees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwoLayerNetwork {
    pub w_ih: [[f64; HIDDEN]; INPUTS],
    pub b_h: [f64; HIDDEN],
    pub w_ho: [f64; HIDDEN],
    pub b_o: f64,
}

impl TwoLayerNetwork {
    pub fn new(
        w_ih: [[f64; HIDDEN]; INPUTS],
        b_h: [f64; HIDDEN],
        w_ho: [f64; HIDDEN],
        b_o: f64,
    ) -> TwoLayerNetwork {
        TwoLayerNetwork { w_ih, b_h, w_ho, b_o }
    }

    pub fn zeros() -> TwoLayerNetwork {
        TwoLayerNetwork::new([[0.0; HIDDEN]; INPUTS], [0.0; HIDDEN], [0.0; HIDDEN], 0.0)
    }

    /// Hidden layer activations for one input.
    pub fn hidden_outputs(&self, input: &[f64; INPUTS]) -> [f64; HIDDEN] {
        std::array::from_fn(|h| {
            let sum: f64 = input.iter().zip(self.w_ih.iter())
                .map(|(x, row)| x * row[h])
                .sum();
            step(sum + self.b_h[h])
        })
    }
}

impl Default for TwoLayerNetwork {
    fn default() -> Self {
        TwoLayerNetwork::zeros()
    }
}

impl Model for TwoLayerNetwork {
    fn predict(&self, input: &[f64; INPUTS]) -> f64 {
        let hidden = self.hidden_outputs(input);
        let sum: f64 = hidden.iter().zip(self.w_ho.iter())
            .map(|(a, w)| a * w)
            .sum();
        step(sum + self.b_o)
    }
}

impl RandomInit for TwoLayerNetwork {
    fn sample_from<R, D>(rng: &mut R, dist: &D) -> Self
    where
        R: Rng + ?Sized,
        D: Distribution<f64>,
    {
        // Same draw order as the layout: w_ih row by row, then b_h and w_ho
        // interleaved per hidden unit, then b_o.
        let mut w_ih = [[0.0; HIDDEN]; INPUTS];
        for row in w_ih.iter_mut() {
            for w in row.iter_mut() {
                *w = dist.sample(rng);
            }
        }
        let mut b_h = [0.0; HIDDEN];
        let mut w_ho = [0.0; HIDDEN];
        for h in 0..HIDDEN {
            b_h[h] = dist.sample(rng);
            w_ho[h] = dist.sample(rng);
        }
        let b_o = dist.sample(rng);
        TwoLayerNetwork { w_ih, b_h, w_ho, b_o }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::boolean::BooleanTask;
    use rand::distributions::Uniform;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Hidden unit 0 computes OR, hidden unit 1 computes NAND, output ANDs them.
    fn xor_network() -> TwoLayerNetwork {
        TwoLayerNetwork::new(
            [[1.0, -1.0], [1.0, -1.0]],
            [-0.5, 1.5],
            [1.0, 1.0],
            -1.5,
        )
    }

    #[test]
    fn hand_built_network_solves_xor() {
        let net = xor_network();
        let xor = BooleanTask::Xor.dataset();
        assert_eq!(net.predict_all(&xor), xor.expected_outputs());
        assert_eq!(net.mse(&xor), 0.0);
    }

    #[test]
    fn hidden_units_read_their_own_column() {
        let net = xor_network();
        assert_eq!(net.hidden_outputs(&[0.0, 0.0]), [0.0, 1.0]);
        assert_eq!(net.hidden_outputs(&[1.0, 0.0]), [1.0, 1.0]);
        assert_eq!(net.hidden_outputs(&[1.0, 1.0]), [1.0, 0.0]);
    }

    #[test]
    fn sampled_parameters_stay_inside_the_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let dist = Uniform::new_inclusive(-5.0, 5.0);
        for _ in 0..100 {
            let net = TwoLayerNetwork::sample_from(&mut rng, &dist);
            let all = net.w_ih.iter().flatten()
                .chain(net.b_h.iter())
                .chain(net.w_ho.iter())
                .chain(std::iter::once(&net.b_o));
            let mut count = 0;
            for &v in all {
                assert!((-5.0..=5.0).contains(&v));
                count += 1;
            }
            // w_ih (2x2), b_h, w_ho, b_o
            assert_eq!(count, INPUTS * HIDDEN + HIDDEN + HIDDEN + 1);
        }
    }

    #[test]
    fn prediction_is_repeatable() {
        let mut rng = StdRng::seed_from_u64(11);
        let dist = Uniform::new_inclusive(-5.0, 5.0);
        let net = TwoLayerNetwork::sample_from(&mut rng, &dist);
        let xor = BooleanTask::Xor.dataset();
        assert_eq!(net.predict_all(&xor), net.predict_all(&xor));
    }
}
