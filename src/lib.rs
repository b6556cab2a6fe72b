pub mod activation;
pub mod data;
pub mod error;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;

// Convenience re-exports
pub use activation::step::step;
pub use data::{BooleanTask, Dataset, Example, INPUTS};
pub use error::{ConfigError, Result};
pub use network::{Model, Perceptron, RandomInit, TwoLayerNetwork, Verification, HIDDEN};
pub use loss::mse::MseLoss;
pub use optim::{DeltaRule, RandomSearch, SearchState};
pub use train::{
    random_search, run_random_search, train_delta_rule, train_perceptron,
    DeltaRuleConfig, FnReporter, NullReporter, Outcome, RandomSearchConfig, Reporter,
    RunConfig, TrainEvent, WeightRange,
};
