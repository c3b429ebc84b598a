pub mod error;
pub mod math;
pub mod metric;

// Convenience re-exports
pub use error::{Error, Result};
pub use math::matrix::Matrix;
pub use metric::{Metric, MetricInfo, MetricOutput, Score};
pub use metric::{ComputeOptions, EvaluationRequest, Multioutput, Targets};
pub use metric::mse::{mean_squared_error, MeanSquaredError, OUTPUT_KEY};
