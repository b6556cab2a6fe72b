use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Everything that can be rejected before an optimizer starts running.
///
/// Once a run has been validated nothing inside the training loops can fail;
/// a run that exhausts its budget is reported through `Outcome::converged`.
#[derive(Debug)]
pub enum ConfigError {
    EmptyDataset,
    NonBinaryLabel {
        index: usize,
        value: f64,
    },
    InvalidRange {
        min: f64,
        max: f64,
    },
    ZeroBudget {
        what: &'static str,
    },
    InvalidLearningRate {
        value: f64,
    },
    UnknownTask {
        name: String,
    },
    Io(io::Error),
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyDataset => write!(f, "the dataset has no examples"),
            ConfigError::NonBinaryLabel { index, value } => write!(
                f,
                "example {index} has expected output {value}, only 0 and 1 are allowed"
            ),
            ConfigError::InvalidRange { min, max } => write!(
                f,
                "invalid weight range [{min}, {max}], min must be finite and below max"
            ),
            ConfigError::ZeroBudget { what } => write!(f, "{what} must be at least 1"),
            ConfigError::InvalidLearningRate { value } => write!(
                f,
                "learning rate must be a positive finite number, got {value}"
            ),
            ConfigError::UnknownTask { name } => write!(
                f,
                "unknown task '{name}', expected one of: and, or, nand, xor"
            ),
            ConfigError::Io(e) => write!(f, "failed to read configuration: {e}"),
            ConfigError::Parse(e) => write!(f, "failed to parse configuration: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}
