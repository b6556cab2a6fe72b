/// Unit step (Heaviside) activation.
///
/// Returns exactly `1.0` for `x >= 0.0` and `0.0` otherwise, so every
/// neuron output is a clean boolean and MSE over a dataset only ever takes
/// a handful of exact values.
pub fn step(x: f64) -> f64 {
    if x >= 0.0 { 1.0 } else { 0.0 }
}
