//! Feature preprocessing, following the same type-state pattern as models.
//!
//! - [`Transformer`]: unfitted transformer that learns statistics from data
//! - [`FittedTransformer`]: holds the learned statistics, ready for inference
//!
//! The free functions [`fit_transform`] and [`transform`] are the slice-level
//! entry points: they normalize a dataset and a single new vector respectively.
//! A vector seen at prediction time must be normalized with the statistics of
//! the *training* data, never with statistics recomputed elsewhere; see
//! [`crate::pipeline::RegressionPipeline`] for a type that enforces this.

pub mod scaling;
pub mod traits;

pub use scaling::{FittedStandardScaler, NormalizationStats, StandardScaler};
pub use traits::{FittedTransformer, Transformer};

#[cfg(feature = "cpu")]
use crate::backend::{CpuBackend, Tensor2D};
use crate::error::Result;

/// Z-scores every column of `dataset`.
///
/// Returns `(normalized, means, sigmas)` with population standard deviations.
///
/// ```
/// let (z, means, sigmas) = linreg_rs::preprocessing::fit_transform(&[
///     vec![1.0, 100.0],
///     vec![3.0, 300.0],
/// ])
/// .unwrap();
/// assert_eq!(means, vec![2.0, 200.0]);
/// assert_eq!(sigmas, vec![1.0, 100.0]);
/// assert_eq!(z, vec![vec![-1.0, -1.0], vec![1.0, 1.0]]);
/// ```
///
/// # Errors
/// - `EmptyDataset` if there are no rows or no columns
/// - `DimensionMismatch` if rows differ in width
/// - `ZeroVariance` if a column is constant
/// - `NonFiniteStatistic` if a column's std is NaN or overflows to infinity
#[cfg(feature = "cpu")]
pub fn fit_transform(dataset: &[Vec<f64>]) -> Result<(Vec<Vec<f64>>, Vec<f64>, Vec<f64>)> {
    let data = Tensor2D::<CpuBackend>::from_rows(dataset)?;
    let (fitted, normalized) = StandardScaler::<CpuBackend>::new().fit_transform(&data)?;
    let NormalizationStats { means, sigmas } = fitted.stats();
    Ok((normalized.to_rows(), means, sigmas))
}

/// Normalizes one vector with previously computed statistics.
///
/// # Errors
/// `DimensionMismatch` unless `vector`, `means` and `sigmas` have equal length.
pub fn transform(vector: &[f64], means: &[f64], sigmas: &[f64]) -> Result<Vec<f64>> {
    NormalizationStats {
        means: means.to_vec(),
        sigmas: sigmas.to_vec(),
    }
    .transform_row(vector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LinRegError;

    #[test]
    fn test_fit_transform_empty() {
        assert!(matches!(
            fit_transform(&[]),
            Err(LinRegError::EmptyDataset(_))
        ));
    }

    #[test]
    fn test_fit_transform_ragged() {
        assert!(matches!(
            fit_transform(&[vec![1.0, 2.0], vec![3.0]]),
            Err(LinRegError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_fit_transform_zero_variance() {
        assert!(matches!(
            fit_transform(&[vec![1.0, 2.0], vec![1.0, 3.0]]),
            Err(LinRegError::ZeroVariance { column: 0 })
        ));
    }

    #[test]
    fn test_fit_transform_overflowing_sigma() {
        assert!(matches!(
            fit_transform(&[vec![1e308], vec![-1e308]]),
            Err(LinRegError::NonFiniteStatistic { column: 0 })
        ));
    }

    #[test]
    fn test_transform_reproduces_fit_transform_rows() {
        let data = vec![vec![2104.0, 5.0], vec![1416.0, 3.0], vec![852.0, 2.0]];
        let (z, means, sigmas) = fit_transform(&data).unwrap();
        for (row, expected) in data.iter().zip(&z) {
            assert_eq!(&transform(row, &means, &sigmas).unwrap(), expected);
        }
    }

    #[test]
    fn test_transform_dimension_mismatch() {
        assert!(matches!(
            transform(&[1.0, 2.0], &[0.0], &[1.0]),
            Err(LinRegError::DimensionMismatch { .. })
        ));
        assert!(transform(&[1.0], &[0.0], &[1.0, 1.0]).is_err());
    }
}
