pub mod info;
pub mod mse;
pub mod multioutput;
pub mod options;
pub mod output;
pub mod request;
pub mod targets;

pub use info::{Feature, MetricInfo};
pub use mse::{mean_squared_error, MeanSquaredError};
pub use multioutput::{Multioutput, MultioutputArg};
pub use options::ComputeOptions;
pub use output::{MetricOutput, Score};
pub use request::EvaluationRequest;
pub use targets::Targets;

use crate::error::Result;

/// The interface an evaluation harness drives: static metadata plus a pure
/// compute call.
pub trait Metric: Send + Sync {
    /// Name the metric is registered under.
    fn name(&self) -> &'static str;

    fn info(&self) -> MetricInfo;

    /// Scores `predictions` against `references`. The returned mapping is
    /// keyed by result name.
    fn compute(
        &self,
        predictions: &Targets,
        references: &Targets,
        options: &ComputeOptions,
    ) -> Result<MetricOutput>;

    /// Runs a request document through `compute`.
    fn evaluate(&self, request: EvaluationRequest) -> Result<MetricOutput> {
        let (predictions, references, options) = request.into_parts()?;
        self.compute(&predictions, &references, &options)
    }
}
