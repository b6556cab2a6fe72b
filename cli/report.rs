use std::io::Write;

use serde::Serialize;

use stepnet::{Perceptron, Reporter, TrainEvent, TwoLayerNetwork, Verification};

/// Text dump of a parameter set for the console.
pub trait Describe {
    fn describe(&self) -> String;
}

impl Describe for Perceptron {
    fn describe(&self) -> String {
        format!("w1 = {}, w2 = {}, b = {}", self.weights[0], self.weights[1], self.bias)
    }
}

impl Describe for TwoLayerNetwork {
    fn describe(&self) -> String {
        let mut out = String::from("- Input -> hidden weights (W_IH):\n");
        for row in &self.w_ih {
            out.push_str(&format!("\t{}\n", bracketed(row)));
        }
        out.push_str(&format!("- Hidden biases (B_H):\n\t{}\n", bracketed(&self.b_h)));
        out.push_str(&format!("- Hidden -> output weights (W_HO):\n\t{}\n", bracketed(&self.w_ho)));
        out.push_str(&format!("- Output bias (B_O):\n\t{}", self.b_o));
        out
    }
}

fn bracketed(values: &[f64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

// ---------------------------------------------------------------------------
// Console reporters
// ---------------------------------------------------------------------------

/// Human-readable progress for random search runs.
pub struct SearchConsole {
    pub task: String,
}

impl SearchConsole {
    pub fn begin(&self) {
        println!("\nStarting random search for {}", self.task);
        println!("------------------------------------");
    }
}

impl<P: Describe> Reporter<P> for SearchConsole {
    fn report(&mut self, event: TrainEvent<P>) {
        match event {
            TrainEvent::Progress { step, metric, .. } => {
                println!("Iteration: {step} - new best MSE: {metric}");
            }
            TrainEvent::Result { params, metric, converged, steps } => {
                if converged {
                    println!("{} solved! Found a perfect network.", self.task);
                }
                println!("\nRandom search finished after {steps} iterations.");
                println!("------------------------------------");
                println!("Best mean squared error: {metric}");
                println!("\nBest network found (for {}):", self.task);
                println!("{}", params.describe());
            }
        }
    }
}

/// Human-readable progress for delta rule runs.
pub struct DeltaConsole;

impl DeltaConsole {
    pub fn begin(&self, initial: &Perceptron, learning_rate: f64) {
        println!("\n=== Training started ===");
        println!("- Initial weights: {}", initial.describe());
        println!("- Learning rate: {learning_rate}");
    }
}

impl Reporter<Perceptron> for DeltaConsole {
    fn report(&mut self, event: TrainEvent<Perceptron>) {
        match event {
            TrainEvent::Progress { step, metric, params } => {
                println!("\nEpoch: {step} - Total errors: {metric}");
                if let Some(p) = params {
                    println!("- Weights: {}", p.describe());
                }
            }
            TrainEvent::Result { converged: true, steps, .. } => {
                println!("\n* Converged in epoch: {}", steps - 1);
            }
            TrainEvent::Result { converged: false, steps, .. } => {
                println!("\n* Training finished without converging after {steps} epochs");
            }
        }
    }
}

/// Prints the final per-example check.
pub fn print_verification(rows: &[Verification]) {
    println!("\nVerification:");
    for row in rows {
        println!(
            "  Input: ({}, {}) -> predicted: {}, expected: {} -> {}",
            row.input[0],
            row.input[1],
            row.predicted,
            row.expected,
            if row.correct { "correct" } else { "incorrect" }
        );
    }
}

// ---------------------------------------------------------------------------
// JSON lines
// ---------------------------------------------------------------------------

/// Writes one serialized event per line.
pub struct JsonLines<W: Write> {
    writer: W,
}

impl<W: Write> JsonLines<W> {
    pub fn new(writer: W) -> Self {
        JsonLines { writer }
    }
}

impl<P: Serialize, W: Write> Reporter<P> for JsonLines<W> {
    fn report(&mut self, event: TrainEvent<P>) {
        match serde_json::to_string(&event) {
            Ok(json) => {
                if writeln!(self.writer, "{json}").and_then(|_| self.writer.flush()).is_err() {
                    log::warn!("failed to write event to output");
                }
            }
            Err(e) => log::warn!("failed to serialize event: {e}"),
        }
    }
}
