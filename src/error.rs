use thiserror::Error;

/// Every way a metric computation can fail.
///
/// Errors are raised straight to the caller; a computation either produces a
/// complete result or nothing.
#[derive(Error, Debug)]
pub enum Error {
    /// Lengths or widths disagree between predictions, references and weights,
    /// or the input has nothing to average over.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A value is numeric but not acceptable (negative weight, NaN, unknown
    /// multioutput policy, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request document holds something other than the expected numbers.
    #[error("type error: {0}")]
    Type(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn shape(msg: impl Into<String>) -> Self {
        Error::ShapeMismatch(msg.into())
    }

    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
