use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

/// Row-major `rows × cols` matrix. In this crate a row is one sample and a
/// column is one output dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix{
    pub rows: usize,
    pub cols: usize,
    pub data: Vec<Vec<f64>>
}

impl Matrix{
    pub fn zeros(rows: usize, cols: usize) -> Matrix {
        Matrix{
            rows,
            cols,
            data: vec![vec![0.0; cols]; rows]
        }
    }

    /// Builds a matrix from rows, rejecting empty input and ragged rows.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Matrix> {
        let cols = match data.first() {
            Some(row) => row.len(),
            None => return Err(Error::shape("no samples")),
        };
        if cols == 0 {
            return Err(Error::shape("samples have zero outputs"));
        }
        if let Some((i, row)) = data.iter().enumerate().find(|(_, r)| r.len() != cols) {
            return Err(Error::shape(format!(
                "sample {i} has {} outputs, expected {cols}", row.len()
            )));
        }

        Ok(Matrix {
            rows: data.len(),
            cols,
            data
        })
    }

    /// A single-output matrix: one row per value.
    pub fn from_column(values: &[f64]) -> Result<Matrix> {
        Matrix::from_data(values.iter().map(|&v| vec![v]).collect())
    }

    pub fn map<F>(&self, functor: F) -> Matrix
    where
        F: Fn(f64) -> f64,
    {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter()
                .map(|row| row.iter().map(|&x| functor(x)).collect())
                .collect()
        }
    }

    /// Element-wise combination of two equally shaped matrices.
    pub fn zip_map<F>(&self, rhs: &Matrix, functor: F) -> Result<Matrix>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.rows != rhs.rows || self.cols != rhs.cols {
            return Err(Error::shape(format!(
                "{}x{} does not match {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }

        let mut res = Matrix::zeros(self.rows, self.cols);
        for i in 0..self.rows {
            for j in 0..self.cols {
                res.data[i][j] = functor(self.data[i][j], rhs.data[i][j]);
            }
        }

        Ok(res)
    }

    /// Values of output column `j`, top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().map(move |row| row[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_data_rejects_ragged_rows() {
        let err = Matrix::from_data(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch(_)));
        assert!(err.to_string().contains("sample 1 has 1 outputs"));
    }

    #[test]
    fn from_data_rejects_empty() {
        assert!(matches!(Matrix::from_data(vec![]), Err(Error::ShapeMismatch(_))));
        assert!(matches!(Matrix::from_data(vec![vec![], vec![]]), Err(Error::ShapeMismatch(_))));
    }

    #[test]
    fn zip_map_checks_shape() {
        let a = Matrix::from_column(&[1.0, 2.0]).unwrap();
        let b = Matrix::from_column(&[1.0, 2.0, 3.0]).unwrap();
        assert!(a.zip_map(&b, |x, y| x - y).is_err());

        let c = Matrix::from_column(&[0.5, 4.0]).unwrap();
        let diff = a.zip_map(&c, |x, y| x - y).unwrap();
        assert_eq!(diff.column(0).collect::<Vec<_>>(), vec![0.5, -2.0]);
    }

    #[test]
    fn map_keeps_shape() {
        let m = Matrix::from_data(vec![vec![1.0, -2.0], vec![3.0, 4.0]]).unwrap();
        let sq = m.map(|x| x * x);
        assert_eq!((sq.rows, sq.cols), (2, 2));
        assert_eq!(sq.data[0], vec![1.0, 4.0]);
        assert_eq!(sq.column(1).collect::<Vec<_>>(), vec![4.0, 16.0]);
    }
}
