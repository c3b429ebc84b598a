use crate::metric::multioutput::Multioutput;

/// Optional arguments of a compute call.
///
/// # Fields
/// - `sample_weight` — one non-negative weight per sample; `None` weights
///                     every sample equally
/// - `multioutput`   — how per-output errors are combined
/// - `squared`       — `true` reports MSE, `false` reports RMSE
#[derive(Debug, Clone, PartialEq)]
pub struct ComputeOptions {
    pub sample_weight: Option<Vec<f64>>,
    pub multioutput: Multioutput,
    pub squared: bool,
}

impl ComputeOptions {
    /// Uniform sample weights, `uniform_average`, squared.
    pub fn new() -> Self {
        ComputeOptions {
            sample_weight: None,
            multioutput: Multioutput::UniformAverage,
            squared: true,
        }
    }

    pub fn with_sample_weight(mut self, weights: Vec<f64>) -> Self {
        self.sample_weight = Some(weights);
        self
    }

    pub fn with_multioutput(mut self, multioutput: Multioutput) -> Self {
        self.multioutput = multioutput;
        self
    }

    pub fn with_squared(mut self, squared: bool) -> Self {
        self.squared = squared;
        self
    }
}

impl Default for ComputeOptions {
    fn default() -> Self {
        Self::new()
    }
}
