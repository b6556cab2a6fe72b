pub mod dataset;
pub mod boolean;

pub use dataset::{Dataset, Example, INPUTS};
pub use boolean::BooleanTask;
