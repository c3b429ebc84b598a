pub mod matrix;
pub mod average;

pub use matrix::Matrix;
pub use average::{weighted_average, column_averages};
