//! Error types shared by every stage of the crate.
//!
//! All precondition violations surface synchronously as [`LinRegError`]. Nothing is
//! retried and nothing is replaced by a default. Numerical divergence during
//! training is an observable result, not an error, and is never reported here.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LinRegError>;

/// Error type for normalization, training, prediction and data loading.
#[derive(Debug, Error)]
pub enum LinRegError {
    /// A dataset or batch with zero rows was supplied where rows are required.
    #[error("empty dataset: {0}")]
    EmptyDataset(String),

    /// A vector or row length disagrees with the expected feature count, or the
    /// number of feature rows disagrees with the number of targets.
    #[error("dimension mismatch in {context}: expected {expected}, got {got}")]
    DimensionMismatch {
        context: &'static str,
        expected: usize,
        got: usize,
    },

    /// A feature column is constant, so z-score normalization is undefined.
    #[error("zero variance in feature column {column}")]
    ZeroVariance { column: usize },

    /// A feature column's standard deviation is NaN or infinite.
    #[error("non-finite standard deviation in feature column {column}")]
    NonFiniteStatistic { column: usize },

    /// Learning rate not strictly positive and finite, or zero iterations.
    #[error("invalid hyperparameter: {0}")]
    InvalidHyperparameter(String),

    /// A CSV cell could not be parsed as a real number.
    #[error("cannot parse {value:?} at row {row}, column {column}")]
    Parse {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("configuration error: {0}")]
    Config(#[from] serde_json::Error),
}

impl LinRegError {
    /// Shorthand for [`LinRegError::DimensionMismatch`].
    pub(crate) fn mismatch(context: &'static str, expected: usize, got: usize) -> Self {
        LinRegError::DimensionMismatch {
            context,
            expected,
            got,
        }
    }
}
