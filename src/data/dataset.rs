use serde::{Serialize, Deserialize};

use crate::error::{ConfigError, Result};

/// Number of inputs every example (and every model) in this crate takes.
pub const INPUTS: usize = 2;

/// One labelled boolean example.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub input: [f64; INPUTS],
    /// Target output, always `0.0` or `1.0`.
    pub expected: f64,
}

impl Example {
    pub fn new(input: [f64; INPUTS], expected: f64) -> Example {
        Example { input, expected }
    }
}

/// An ordered, non-empty set of examples with boolean labels.
///
/// Order matters only for reporting and for the sequence in which the delta
/// rule visits examples; the error metrics are order independent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dataset {
    examples: Vec<Example>,
}

impl Dataset {
    /// Builds a dataset, rejecting an empty example list and any label that
    /// is not exactly `0.0` or `1.0`.
    pub fn new(examples: Vec<Example>) -> Result<Dataset> {
        if examples.is_empty() {
            return Err(ConfigError::EmptyDataset);
        }
        if let Some((index, ex)) = examples
            .iter()
            .enumerate()
            .find(|(_, ex)| ex.expected != 0.0 && ex.expected != 1.0)
        {
            return Err(ConfigError::NonBinaryLabel { index, value: ex.expected });
        }
        Ok(Dataset { examples })
    }

    pub fn len(&self) -> usize {
        self.examples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Example> {
        self.examples.iter()
    }

    /// Expected outputs in dataset order.
    pub fn expected_outputs(&self) -> Vec<f64> {
        self.examples.iter().map(|ex| ex.expected).collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Example;
    type IntoIter = std::slice::Iter<'a, Example>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}
