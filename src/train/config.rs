use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::data::boolean::BooleanTask;
use crate::data::dataset::INPUTS;
use crate::error::{ConfigError, Result};
use crate::network::perceptron::Perceptron;

/// Inclusive interval random search draws every parameter from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

impl WeightRange {
    pub fn new(min: f64, max: f64) -> WeightRange {
        WeightRange { min, max }
    }

    /// Both bounds must be finite, `min < max`, and the sampling scale
    /// `(max - min) / (1 - ε)` must not overflow.
    pub fn validate(&self) -> Result<()> {
        let scale = (self.max - self.min) / (1.0 - f64::EPSILON);
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max && scale.is_finite() {
            Ok(())
        } else {
            Err(ConfigError::InvalidRange { min: self.min, max: self.max })
        }
    }
}

impl Default for WeightRange {
    fn default() -> Self {
        WeightRange { min: -5.0, max: 5.0 }
    }
}

/// Settings for a random search run.
///
/// # Fields
/// - `weight_range`:   interval each parameter is drawn from
/// - `max_iterations`: number of candidates to try before giving up
/// - `seed`:           fixes the candidate sequence; `None` seeds from OS entropy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomSearchConfig {
    pub weight_range: WeightRange,
    pub max_iterations: usize,
    pub seed: Option<u64>,
}

impl RandomSearchConfig {
    pub const DEFAULT_MAX_ITERATIONS: usize = 5_000_000;

    pub fn validate(&self) -> Result<()> {
        self.weight_range.validate()?;
        if self.max_iterations == 0 {
            return Err(ConfigError::ZeroBudget { what: "max_iterations" });
        }
        Ok(())
    }
}

impl Default for RandomSearchConfig {
    fn default() -> Self {
        RandomSearchConfig {
            weight_range: WeightRange::default(),
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

/// Settings for a delta rule run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeltaRuleConfig {
    pub learning_rate: f64,
    pub max_epochs: usize,
    pub initial_weights: [f64; INPUTS],
    pub initial_bias: f64,
}

impl DeltaRuleConfig {
    pub const DEFAULT_MAX_EPOCHS: usize = 100;
    pub const DEFAULT_LEARNING_RATE: f64 = 0.1;

    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(ConfigError::InvalidLearningRate { value: self.learning_rate });
        }
        if self.max_epochs == 0 {
            return Err(ConfigError::ZeroBudget { what: "max_epochs" });
        }
        Ok(())
    }

    /// The perceptron a run starts from.
    pub fn initial_perceptron(&self) -> Perceptron {
        Perceptron::new(self.initial_weights, self.initial_bias)
    }
}

impl Default for DeltaRuleConfig {
    fn default() -> Self {
        DeltaRuleConfig {
            learning_rate: Self::DEFAULT_LEARNING_RATE,
            max_epochs: Self::DEFAULT_MAX_EPOCHS,
            initial_weights: [0.0; INPUTS],
            initial_bias: 0.0,
        }
    }
}

/// Everything a harness run can be configured with, as read from a JSON
/// file. Missing sections and fields fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Task to train on; each optimizer has its own default when unset.
    pub task: Option<BooleanTask>,
    pub random_search: RandomSearchConfig,
    pub delta_rule: DeltaRuleConfig,
}

impl RunConfig {
    pub fn from_json_str(json: &str) -> Result<RunConfig> {
        Ok(serde_json::from_str(json)?)
    }

    /// Deserializes a `RunConfig` from a JSON file.
    pub fn load_json<P: AsRef<Path>>(path: P) -> Result<RunConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let rs = RandomSearchConfig::default();
        assert_eq!(rs.weight_range, WeightRange::new(-5.0, 5.0));
        assert_eq!(rs.max_iterations, 5_000_000);
        assert_eq!(rs.seed, None);

        let dr = DeltaRuleConfig::default();
        assert_eq!(dr.learning_rate, 0.1);
        assert_eq!(dr.max_epochs, 100);
        assert_eq!(dr.initial_perceptron(), Perceptron::zeros());
    }

    #[test]
    fn validation_rejects_bad_values() {
        let mut rs = RandomSearchConfig::default();
        rs.max_iterations = 0;
        assert!(matches!(rs.validate(), Err(ConfigError::ZeroBudget { what: "max_iterations" })));

        let rs = RandomSearchConfig { weight_range: WeightRange::new(2.0, 2.0), ..Default::default() };
        assert!(matches!(rs.validate(), Err(ConfigError::InvalidRange { .. })));

        let rs = RandomSearchConfig { weight_range: WeightRange::new(f64::NAN, 1.0), ..Default::default() };
        assert!(rs.validate().is_err());

        let dr = DeltaRuleConfig { max_epochs: 0, ..Default::default() };
        assert!(matches!(dr.validate(), Err(ConfigError::ZeroBudget { what: "max_epochs" })));

        for lr in [0.0, -0.1, f64::INFINITY] {
            let dr = DeltaRuleConfig { learning_rate: lr, ..Default::default() };
            assert!(matches!(dr.validate(), Err(ConfigError::InvalidLearningRate { .. })));
        }
    }

    #[test]
    fn range_wider_than_f64_is_rejected() {
        let range = WeightRange::new(-1e308, 1e308);
        assert!(matches!(range.validate(), Err(ConfigError::InvalidRange { .. })));

        let rs = RandomSearchConfig { weight_range: range, ..Default::default() };
        assert!(matches!(rs.validate(), Err(ConfigError::InvalidRange { .. })));

        let edge = WeightRange::new(-f64::MAX / 2.0, f64::MAX / 2.0);
        assert!(matches!(edge.validate(), Err(ConfigError::InvalidRange { .. })));

        assert!(WeightRange::new(-1e307, 1e307).validate().is_ok());
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = RunConfig::from_json_str(
            r#"{ "task": "xor", "random_search": { "seed": 9, "max_iterations": 1000 } }"#,
        )
        .unwrap();
        assert_eq!(cfg.task, Some(BooleanTask::Xor));
        assert_eq!(cfg.random_search.seed, Some(9));
        assert_eq!(cfg.random_search.max_iterations, 1000);
        assert_eq!(cfg.random_search.weight_range, WeightRange::default());
        assert_eq!(cfg.delta_rule, DeltaRuleConfig::default());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(RunConfig::from_json_str("{ task: "), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            RunConfig::load_json("/definitely/not/here/stepnet.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
