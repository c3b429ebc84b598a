use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Predictions or references as handed over by a caller.
///
/// - `Scalars` — one value per sample (single output).
/// - `Vectors` — one fixed-width vector per sample (multi-output).
///
/// In JSON a flat number array is `Scalars` and an array of number arrays is
/// `Vectors`. A `Scalars` sequence behaves exactly like `Vectors` of width 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Targets {
    Scalars(Vec<f64>),
    Vectors(Vec<Vec<f64>>),
}

impl Targets {
    /// Number of samples (outer length).
    pub fn len(&self) -> usize {
        match self {
            Targets::Scalars(v) => v.len(),
            Targets::Vectors(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Converts to a samples × outputs matrix, checking shape and that every
    /// value is finite. `name` prefixes error messages.
    pub fn to_matrix(&self, name: &str) -> Result<Matrix> {
        let matrix = match self {
            Targets::Scalars(v) => Matrix::from_column(v),
            Targets::Vectors(v) => Matrix::from_data(v.clone()),
        }
        .map_err(|e| match e {
            Error::ShapeMismatch(msg) => Error::shape(format!("{name}: {msg}")),
            other => other,
        })?;

        for (i, row) in matrix.data.iter().enumerate() {
            if let Some(x) = row.iter().find(|x| !x.is_finite()) {
                return Err(Error::invalid(format!(
                    "{name}: sample {i} contains non-finite value {x}"
                )));
            }
        }

        Ok(matrix)
    }
}

impl From<Vec<f64>> for Targets {
    fn from(values: Vec<f64>) -> Self {
        Targets::Scalars(values)
    }
}

impl From<&[f64]> for Targets {
    fn from(values: &[f64]) -> Self {
        Targets::Scalars(values.to_vec())
    }
}

impl From<Vec<Vec<f64>>> for Targets {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        Targets::Vectors(rows)
    }
}
