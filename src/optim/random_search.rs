use rand::distributions::Uniform;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::Result;
use crate::network::model::RandomInit;
use crate::train::config::WeightRange;

/// Source of independent candidate parameter sets.
///
/// Every call to [`RandomSearch::propose`] draws a complete parameter set
/// from scratch, each scalar uniform on the inclusive weight range. Nothing
/// is carried over from previous candidates.
pub struct RandomSearch {
    rng: StdRng,
    dist: Uniform<f64>,
}

impl RandomSearch {
    /// Seeded from `seed` when given, from OS entropy otherwise.
    pub fn new(range: WeightRange, seed: Option<u64>) -> Result<RandomSearch> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        RandomSearch::with_rng(range, rng)
    }

    pub fn with_rng(range: WeightRange, rng: StdRng) -> Result<RandomSearch> {
        range.validate()?;
        Ok(RandomSearch {
            rng,
            dist: Uniform::new_inclusive(range.min, range.max),
        })
    }

    pub fn propose<M: RandomInit>(&mut self) -> M {
        M::sample_from(&mut self.rng, &self.dist)
    }
}

/// Best candidate seen so far.
///
/// The stored error never increases: a candidate replaces the incumbent only
/// when its error is strictly lower.
#[derive(Debug, Clone)]
pub struct SearchState<M> {
    best: Option<M>,
    best_error: f64,
}

impl<M> SearchState<M> {
    pub fn new() -> SearchState<M> {
        SearchState { best: None, best_error: f64::INFINITY }
    }

    /// Keeps `candidate` if it beats the incumbent. Returns whether it did.
    pub fn offer(&mut self, candidate: M, error: f64) -> bool {
        if error < self.best_error {
            self.best = Some(candidate);
            self.best_error = error;
            true
        } else {
            false
        }
    }

    pub fn best(&self) -> Option<&M> {
        self.best.as_ref()
    }

    pub fn best_error(&self) -> f64 {
        self.best_error
    }

    pub fn into_best(self) -> Option<(M, f64)> {
        let error = self.best_error;
        self.best.map(|m| (m, error))
    }
}

impl<M> Default for SearchState<M> {
    fn default() -> Self {
        SearchState::new()
    }
}
