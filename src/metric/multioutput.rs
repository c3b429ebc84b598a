use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::math::average::{validate_weights, weighted_average};
use crate::metric::output::Score;

/// How per-output errors are combined into the reported value.
///
/// - `UniformAverage` — unweighted mean over output dimensions (default).
/// - `RawValues`      — no reduction; one value per output dimension.
/// - `Weights`        — weighted mean using one weight per output dimension.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Multioutput {
    RawValues,
    #[default]
    UniformAverage,
    Weights(Vec<f64>),
}

impl Multioutput {
    /// Rejects explicit weights that cannot be applied to `n_outputs` columns.
    pub fn check_outputs(&self, n_outputs: usize) -> Result<()> {
        let Multioutput::Weights(w) = self else {
            return Ok(());
        };
        if n_outputs == 1 {
            return Err(Error::invalid("custom multioutput weights are useful only in multi-output cases"));
        }
        if w.len() != n_outputs {
            return Err(Error::shape(format!(
                "there must be equally many custom weights ({}) as outputs ({n_outputs})", w.len()
            )));
        }
        validate_weights("multioutput", w)
    }

    /// Reduces one error value per output according to the policy.
    pub fn reduce(&self, per_output: Vec<f64>) -> Result<Score> {
        self.check_outputs(per_output.len())?;
        match self {
            Multioutput::RawValues => Ok(Score::PerOutput(per_output)),
            Multioutput::UniformAverage => weighted_average(&per_output, None).map(Score::Scalar),
            Multioutput::Weights(w) => weighted_average(&per_output, Some(w)).map(Score::Scalar),
        }
    }
}

impl fmt::Display for Multioutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Multioutput::RawValues => write!(f, "raw_values"),
            Multioutput::UniformAverage => write!(f, "uniform_average"),
            Multioutput::Weights(w) => write!(f, "weights{w:?}"),
        }
    }
}

impl FromStr for Multioutput {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "raw_values" => Ok(Multioutput::RawValues),
            "uniform_average" => Ok(Multioutput::UniformAverage),
            other => Err(Error::invalid(format!(
                "multioutput must be 'raw_values', 'uniform_average' or an array of weights, got '{other}'"
            ))),
        }
    }
}

/// JSON form of the multioutput argument: a policy name or a weight array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MultioutputArg {
    Name(String),
    Weights(Vec<f64>),
}

impl TryFrom<MultioutputArg> for Multioutput {
    type Error = Error;

    fn try_from(arg: MultioutputArg) -> Result<Self> {
        match arg {
            MultioutputArg::Name(name) => name.parse(),
            MultioutputArg::Weights(w) => Ok(Multioutput::Weights(w)),
        }
    }
}

impl From<Multioutput> for MultioutputArg {
    fn from(m: Multioutput) -> Self {
        match m {
            Multioutput::Weights(w) => MultioutputArg::Weights(w),
            named => MultioutputArg::Name(named.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names() {
        assert_eq!("raw_values".parse::<Multioutput>().unwrap(), Multioutput::RawValues);
        assert_eq!("uniform_average".parse::<Multioutput>().unwrap(), Multioutput::UniformAverage);
    }

    #[test]
    fn unknown_name_is_invalid_argument() {
        let err = "variance_weighted".parse::<Multioutput>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn reduce_applies_policy() {
        let raw = Multioutput::RawValues.reduce(vec![1.0, 3.0]).unwrap();
        assert_eq!(raw, Score::PerOutput(vec![1.0, 3.0]));

        let uniform = Multioutput::UniformAverage.reduce(vec![1.0, 3.0]).unwrap();
        assert_eq!(uniform, Score::Scalar(2.0));

        let weighted = Multioutput::Weights(vec![3.0, 1.0]).reduce(vec![1.0, 3.0]).unwrap();
        assert_eq!(weighted, Score::Scalar(1.5));
    }

    #[test]
    fn custom_weights_need_matching_outputs() {
        let w = Multioutput::Weights(vec![0.5, 0.5]);
        assert!(matches!(w.check_outputs(3), Err(Error::ShapeMismatch(_))));
        assert!(matches!(w.check_outputs(1), Err(Error::InvalidArgument(_))));
        assert!(w.check_outputs(2).is_ok());

        let negative = Multioutput::Weights(vec![1.0, -1.0]);
        assert!(matches!(negative.check_outputs(2), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn wire_form_round_trips_names() {
        let arg: MultioutputArg = serde_json::from_str(r#""raw_values""#).unwrap();
        assert_eq!(Multioutput::try_from(arg).unwrap(), Multioutput::RawValues);

        let arg: MultioutputArg = serde_json::from_str("[0.3, 0.7]").unwrap();
        assert_eq!(Multioutput::try_from(arg).unwrap(), Multioutput::Weights(vec![0.3, 0.7]));

        assert_eq!(
            MultioutputArg::from(Multioutput::UniformAverage),
            MultioutputArg::Name("uniform_average".into())
        );
    }
}
