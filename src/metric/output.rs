use std::collections::BTreeMap;

use serde::{Serialize, Deserialize};

/// A metric value: one number, or one number per output dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
    Scalar(f64),
    PerOutput(Vec<f64>),
}

impl Score {
    /// Applies `f` to the scalar, or to every per-output value.
    pub fn map<F>(self, f: F) -> Score
    where
        F: Fn(f64) -> f64,
    {
        match self {
            Score::Scalar(x) => Score::Scalar(f(x)),
            Score::PerOutput(v) => Score::PerOutput(v.into_iter().map(f).collect()),
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Score::Scalar(x) => Some(*x),
            Score::PerOutput(_) => None,
        }
    }

    pub fn as_per_output(&self) -> Option<&[f64]> {
        match self {
            Score::Scalar(_) => None,
            Score::PerOutput(v) => Some(v),
        }
    }
}

/// Result mapping returned by `Metric::compute`, keyed by metric name.
pub type MetricOutput = BTreeMap<String, Score>;
