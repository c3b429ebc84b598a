use crate::error::{Error, Result};
use crate::math::matrix::Matrix;

/// Weighted mean of `values`; weights are normalised to sum to 1.
/// `None` means uniform weights.
pub fn weighted_average(values: &[f64], weights: Option<&[f64]>) -> Result<f64> {
    if values.is_empty() {
        return Err(Error::shape("cannot average zero values"));
    }

    match weights {
        None => Ok(values.iter().sum::<f64>() / values.len() as f64),
        Some(w) => {
            if w.len() != values.len() {
                return Err(Error::shape(format!(
                    "{} weights for {} values", w.len(), values.len()
                )));
            }
            let total: f64 = w.iter().sum();
            if total == 0.0 {
                return Err(Error::invalid("weights sum to zero, can't be normalized"));
            }
            let dot: f64 = values.iter().zip(w.iter()).map(|(v, w)| v * w).sum();
            Ok(dot / total)
        }
    }
}

/// Weighted mean down each column of `m`, giving one value per output.
pub fn column_averages(m: &Matrix, weights: Option<&[f64]>) -> Result<Vec<f64>> {
    (0..m.cols)
        .map(|j| {
            let column: Vec<f64> = m.column(j).collect();
            weighted_average(&column, weights)
        })
        .collect()
}

/// Checks that every weight is finite and non-negative.
/// `what` names the argument in the error message.
pub fn validate_weights(what: &str, weights: &[f64]) -> Result<()> {
    match weights.iter().position(|w| !w.is_finite() || *w < 0.0) {
        Some(i) => Err(Error::invalid(format!(
            "{what}[{i}] = {} must be finite and non-negative", weights[i]
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_average_is_plain_mean() {
        let avg = weighted_average(&[1.0, 2.0, 6.0], None).unwrap();
        assert!((avg - 3.0).abs() < 1e-12);
    }

    #[test]
    fn weights_are_normalised() {
        // Scaling every weight by the same factor changes nothing.
        let a = weighted_average(&[1.0, 3.0], Some(&[1.0, 3.0])).unwrap();
        let b = weighted_average(&[1.0, 3.0], Some(&[10.0, 30.0])).unwrap();
        assert!((a - 2.5).abs() < 1e-12);
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn zero_weight_sum_is_rejected() {
        let err = weighted_average(&[1.0, 3.0], Some(&[0.0, 0.0])).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn weight_length_must_match() {
        let err = weighted_average(&[1.0, 3.0], Some(&[1.0])).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(_)));
    }

    #[test]
    fn column_averages_per_output() {
        let m = Matrix::from_data(vec![vec![1.0, 10.0], vec![3.0, 30.0]]).unwrap();
        assert_eq!(column_averages(&m, None).unwrap(), vec![2.0, 20.0]);
        assert_eq!(column_averages(&m, Some(&[1.0, 0.0])).unwrap(), vec![1.0, 10.0]);
    }

    #[test]
    fn validate_weights_flags_negative_and_nan() {
        assert!(validate_weights("w", &[0.0, 1.5]).is_ok());
        let err = validate_weights("sample_weight", &[1.0, -0.5]).unwrap_err();
        assert!(err.to_string().contains("sample_weight[1]"));
        assert!(validate_weights("w", &[f64::NAN]).is_err());
        assert!(validate_weights("w", &[f64::INFINITY]).is_err());
    }
}
