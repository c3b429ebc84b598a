use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::math::average::{column_averages, validate_weights};
use crate::metric::info::{Feature, MetricInfo};
use crate::metric::options::ComputeOptions;
use crate::metric::output::{MetricOutput, Score};
use crate::metric::targets::Targets;
use crate::metric::Metric;

/// Key under which the result is reported.
pub const OUTPUT_KEY: &str = "mean_squared_error";

const DESCRIPTION: &str = "\
Mean Squared Error (MSE) is the average of the squared differences between \
the predicted and the actual values. Root Mean Squared Error (RMSE) is its \
square root and is expressed in the same unit as the targets.";

const INPUTS_DESCRIPTION: &str = "\
Args:
    predictions: Estimated target values.
    references: Ground truth (correct) target values.
    sample_weight: Sample weights.
    multioutput: Defines aggregating of multiple output values. Array-like value defines weights used to average errors.
        'raw_values': Returns a full set of errors in case of multioutput input.
        'uniform_average': Errors of all outputs are averaged with uniform weight.
    squared: If true returns MSE value, if false returns RMSE value.
Returns:
    mean_squared_error: A non-negative floating point value (the best value is 0.0), or an array of floating point
                        values, one for each individual target.
";

const CITATION: &str = "\
@article{scikit-learn,
  title={Scikit-learn: Machine Learning in {P}ython},
  author={Pedregosa, F. and Varoquaux, G. and Gramfort, A. and Michel, V.
         and Thirion, B. and Grisel, O. and Blondel, M. and Prettenhofer, P.
         and Weiss, R. and Dubourg, V. and Vanderplas, J. and Passos, A. and
         Cournapeau, D. and Brucher, M. and Perrot, M. and Duchesnay, E.},
  journal={Journal of Machine Learning Research},
  volume={12},
  pages={2825--2830},
  year={2011}
}
";

const REFERENCE_URL: &str =
    "https://scikit-learn.org/stable/modules/generated/sklearn.metrics.mean_squared_error.html";

/// Mean squared error metric. Stateless; one value serves any number of calls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeanSquaredError;

impl MeanSquaredError {
    pub fn new() -> Self {
        MeanSquaredError
    }
}

impl Metric for MeanSquaredError {
    fn name(&self) -> &'static str {
        OUTPUT_KEY
    }

    fn info(&self) -> MetricInfo {
        MetricInfo {
            name: OUTPUT_KEY,
            description: DESCRIPTION,
            citation: CITATION,
            inputs_description: INPUTS_DESCRIPTION,
            features: vec![
                Feature { name: "predictions", dtype: "float32" },
                Feature { name: "references", dtype: "float32" },
            ],
            reference_urls: vec![REFERENCE_URL],
        }
    }

    fn compute(
        &self,
        predictions: &Targets,
        references: &Targets,
        options: &ComputeOptions,
    ) -> Result<MetricOutput> {
        let score = mean_squared_error(predictions, references, options)?;
        Ok(MetricOutput::from([(OUTPUT_KEY.to_string(), score)]))
    }
}

/// MSE (or RMSE when `options.squared` is false):
///   per output j: sum_i w_i·(p_ij − r_ij)² / sum_i w_i
/// then reduced across outputs by `options.multioutput`.
///
/// Fails with `ShapeMismatch` when sample counts, output widths or weight
/// lengths disagree, and with `InvalidArgument` for non-finite values,
/// negative weights or weights summing to zero.
pub fn mean_squared_error(
    predictions: &Targets,
    references: &Targets,
    options: &ComputeOptions,
) -> Result<Score> {
    let predicted = predictions.to_matrix("predictions")?;
    let expected = references.to_matrix("references")?;

    if predicted.rows != expected.rows {
        return Err(Error::shape(format!(
            "predictions has {} samples but references has {}",
            predicted.rows, expected.rows
        )));
    }
    if predicted.cols != expected.cols {
        return Err(Error::shape(format!(
            "predictions has {} outputs but references has {}",
            predicted.cols, expected.cols
        )));
    }

    let sample_weight = options.sample_weight.as_deref();
    if let Some(w) = sample_weight {
        if w.len() != predicted.rows {
            return Err(Error::shape(format!(
                "sample_weight has {} entries but there are {} samples",
                w.len(), predicted.rows
            )));
        }
        validate_weights("sample_weight", w)?;
    }
    options.multioutput.check_outputs(predicted.cols)?;

    debug!(
        samples = predicted.rows,
        outputs = predicted.cols,
        weighted = sample_weight.is_some(),
        multioutput = %options.multioutput,
        squared = options.squared,
        "computing mean squared error"
    );

    let squared_errors = predicted.zip_map(&expected, |p, r| (p - r).powi(2))?;
    let per_output = column_averages(&squared_errors, sample_weight)?;
    trace!(?per_output, "per-output mean squared error");

    let score = options.multioutput.reduce(per_output)?;
    Ok(if options.squared { score } else { score.map(f64::sqrt) })
}
