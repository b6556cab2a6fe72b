pub mod config;
pub mod events;
pub mod reporter;
pub mod search_loop;
pub mod delta_loop;

pub use config::{DeltaRuleConfig, RandomSearchConfig, RunConfig, WeightRange};
pub use events::{Outcome, TrainEvent};
pub use reporter::{FnReporter, NullReporter, Reporter};
pub use search_loop::{random_search, run_random_search};
pub use delta_loop::{train_delta_rule, train_perceptron};
