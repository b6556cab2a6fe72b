use serde::{Serialize, Deserialize};

/// Events an optimizer emits while it runs.
///
/// A run produces zero or more `Progress` events followed by exactly one
/// `Result`. Serialized with a `kind` tag (`"progress"` / `"result"`) so a
/// JSON-lines consumer can dispatch on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TrainEvent<P> {
    Progress {
        /// 1-based iteration for random search, 0-based epoch for the delta rule.
        step: usize,
        /// Best MSE so far (random search) or misclassified examples in the
        /// epoch (delta rule).
        metric: f64,
        /// Parameter snapshot, when the optimizer attaches one.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        params: Option<P>,
    },
    Result {
        params: P,
        metric: f64,
        converged: bool,
        /// Iterations or epochs actually run.
        steps: usize,
    },
}

impl<P> TrainEvent<P> {
    pub fn is_result(&self) -> bool {
        matches!(self, TrainEvent::Result { .. })
    }

    pub fn metric(&self) -> f64 {
        match self {
            TrainEvent::Progress { metric, .. } | TrainEvent::Result { metric, .. } => *metric,
        }
    }
}

/// Final state of an optimizer run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outcome<P> {
    /// Best (random search) or final (delta rule) parameters.
    pub params: P,
    /// Best MSE (random search) or last epoch's error count (delta rule).
    pub metric: f64,
    /// Whether the zero-error condition was reached within the budget.
    pub converged: bool,
    pub steps: usize,
}

impl<P: Clone> Outcome<P> {
    pub fn to_event(&self) -> TrainEvent<P> {
        TrainEvent::Result {
            params: self.params.clone(),
            metric: self.metric,
            converged: self.converged,
            steps: self.steps,
        }
    }
}
