use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::metric::multioutput::{Multioutput, MultioutputArg};
use crate::metric::options::ComputeOptions;
use crate::metric::targets::Targets;

/// A complete compute call as a JSON document.
///
/// Only `predictions` and `references` are required; omitted options take
/// their defaults (uniform sample weights, `uniform_average`, squared).
/// `multioutput` may be a policy name or an array of per-output weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub predictions: Targets,
    pub references: Targets,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_weight: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multioutput: Option<MultioutputArg>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub squared: Option<bool>,
}

impl EvaluationRequest {
    pub fn new(predictions: impl Into<Targets>, references: impl Into<Targets>) -> Self {
        EvaluationRequest {
            predictions: predictions.into(),
            references: references.into(),
            sample_weight: None,
            multioutput: None,
            squared: None,
        }
    }

    /// Copies every field of `options` into the request.
    pub fn with_options(mut self, options: ComputeOptions) -> Self {
        self.sample_weight = options.sample_weight;
        self.multioutput = Some(options.multioutput.into());
        self.squared = Some(options.squared);
        self
    }

    /// Typed options, with defaults filled in. An unrecognised multioutput
    /// name is an `InvalidArgument` error.
    pub fn options(&self) -> Result<ComputeOptions> {
        let multioutput = match &self.multioutput {
            Some(arg) => Multioutput::try_from(arg.clone())?,
            None => Multioutput::default(),
        };
        Ok(ComputeOptions {
            sample_weight: self.sample_weight.clone(),
            multioutput,
            squared: self.squared.unwrap_or(true),
        })
    }

    /// Splits into the arguments of `Metric::compute`.
    pub fn into_parts(self) -> Result<(Targets, Targets, ComputeOptions)> {
        let options = self.options()?;
        Ok((self.predictions, self.references, options))
    }

    /// Parses a request; values that are not numbers give a `Type` error.
    pub fn from_json_str(json: &str) -> Result<EvaluationRequest> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the request to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes a request from a JSON file.
    pub fn load_json(path: &str) -> Result<EvaluationRequest> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        Ok(serde_json::from_reader(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn minimal_document_uses_defaults() {
        let req = EvaluationRequest::from_json_str(
            r#"{"predictions": [3, -0.5, 2, 7], "references": [2.5, 0.0, 2, 8]}"#,
        )
        .unwrap();
        assert_eq!(req.options().unwrap(), ComputeOptions::new());
    }

    #[test]
    fn full_document_is_typed() {
        let req = EvaluationRequest::from_json_str(
            r#"{
                "predictions": [[0, 2], [-1, 2]],
                "references": [[0.5, 1], [-1, 1]],
                "sample_weight": [1, 2],
                "multioutput": [0.3, 0.7],
                "squared": false
            }"#,
        )
        .unwrap();
        let opts = req.options().unwrap();
        assert_eq!(opts.sample_weight, Some(vec![1.0, 2.0]));
        assert_eq!(opts.multioutput, Multioutput::Weights(vec![0.3, 0.7]));
        assert!(!opts.squared);
    }

    #[test]
    fn null_sample_weight_is_absent() {
        let req = EvaluationRequest::from_json_str(
            r#"{"predictions": [1], "references": [1], "sample_weight": null}"#,
        )
        .unwrap();
        assert_eq!(req.sample_weight, None);
    }

    #[test]
    fn unknown_multioutput_is_invalid_argument() {
        let req = EvaluationRequest::from_json_str(
            r#"{"predictions": [1, 2], "references": [1, 2], "multioutput": "median"}"#,
        )
        .unwrap();
        assert!(matches!(req.options(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn non_numeric_values_are_type_errors() {
        let err = EvaluationRequest::from_json_str(
            r#"{"predictions": ["a", "b"], "references": [1, 2]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Type(_)));

        let err = EvaluationRequest::from_json_str(
            r#"{"predictions": [1, 2], "references": [1, 2], "sample_weight": ["x", 1]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Type(_)));
    }

    #[test]
    fn with_options_round_trips() {
        let opts = ComputeOptions::new()
            .with_sample_weight(vec![1.0, 0.5])
            .with_multioutput(Multioutput::RawValues)
            .with_squared(false);
        let req = EvaluationRequest::new(vec![1.0, 2.0], vec![1.5, 2.5]).with_options(opts.clone());
        assert_eq!(req.options().unwrap(), opts);
    }
}
