pub mod delta_rule;
pub mod random_search;

pub use delta_rule::DeltaRule;
pub use random_search::{RandomSearch, SearchState};
