use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::data::dataset::{Dataset, Example};
use crate::error::ConfigError;

/// The four input pairs shared by every two-input boolean task, in the
/// order the truth tables below are written.
const TRUTH_TABLE_INPUTS: [[f64; 2]; 4] = [
    [0.0, 0.0],
    [0.0, 1.0],
    [1.0, 0.0],
    [1.0, 1.0],
];

/// Built-in two-input boolean functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BooleanTask {
    And,
    Or,
    Nand,
    Xor,
}

impl BooleanTask {
    /// Truth-table outputs for (0,0), (0,1), (1,0), (1,1).
    pub fn expected_outputs(self) -> [f64; 4] {
        match self {
            BooleanTask::And => [0.0, 0.0, 0.0, 1.0],
            BooleanTask::Or => [0.0, 1.0, 1.0, 1.0],
            BooleanTask::Nand => [1.0, 1.0, 1.0, 0.0],
            BooleanTask::Xor => [0.0, 1.0, 1.0, 0.0],
        }
    }

    /// Whether one line can separate the two classes, i.e. whether a single
    /// perceptron is able to represent the task.
    pub fn is_linearly_separable(self) -> bool {
        !matches!(self, BooleanTask::Xor)
    }

    pub fn dataset(self) -> Dataset {
        let examples = TRUTH_TABLE_INPUTS
            .iter()
            .zip(self.expected_outputs())
            .map(|(&input, expected)| Example::new(input, expected))
            .collect();
        // Truth tables are non-empty and boolean by construction.
        Dataset::new(examples).unwrap_or_else(|e| unreachable!("built-in dataset rejected: {e}"))
    }

    pub fn name(self) -> &'static str {
        match self {
            BooleanTask::And => "and",
            BooleanTask::Or => "or",
            BooleanTask::Nand => "nand",
            BooleanTask::Xor => "xor",
        }
    }
}

impl fmt::Display for BooleanTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name().to_uppercase())
    }
}

impl FromStr for BooleanTask {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "and" => Ok(BooleanTask::And),
            "or" => Ok(BooleanTask::Or),
            "nand" => Ok(BooleanTask::Nand),
            "xor" => Ok(BooleanTask::Xor),
            _ => Err(ConfigError::UnknownTask { name: s.to_owned() }),
        }
    }
}
