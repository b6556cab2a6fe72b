pub mod model;
pub mod perceptron;
pub mod two_layer;

pub use model::{Model, RandomInit, Verification};
pub use perceptron::Perceptron;
pub use two_layer::{TwoLayerNetwork, HIDDEN};
