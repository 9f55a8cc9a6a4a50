//! Standard Scaler (Z-score normalization).
//!
//! Transforms features by removing the mean and scaling to unit variance.
//!
//! The standard score of a sample `x` is calculated as:
//! ```text
//! z = (x - u) / s
//! ```
//! where `u` is the mean of the training samples, and `s` is their population
//! standard deviation (`ddof = 0`).
//!
//! A constant column has `s = 0` and makes the score undefined. Fitting on such
//! data fails with [`LinRegError::ZeroVariance`]; no substitute divisor is used.
//! A column whose std is NaN or infinite (NaN cells, or values so large the
//! variance overflows) fails with [`LinRegError::NonFiniteStatistic`].

use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::error::{LinRegError, Result};
use crate::preprocessing::traits::{FittedTransformer, Transformer};
use std::marker::PhantomData;

/// Per-feature statistics captured from a training set.
///
/// Invariant when produced by a scaler: `means.len() == sigmas.len()` and every
/// `sigmas[j] > 0`.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizationStats {
    pub means: Vec<f64>,
    pub sigmas: Vec<f64>,
}

impl NormalizationStats {
    pub fn n_features(&self) -> usize {
        self.means.len()
    }

    /// Normalizes a single feature vector: `(x_j - means[j]) / sigmas[j]`.
    ///
    /// # Errors
    /// `DimensionMismatch` if `row.len() != means.len()` or the two statistics
    /// vectors differ in length.
    pub fn transform_row(&self, row: &[f64]) -> Result<Vec<f64>> {
        if self.sigmas.len() != self.means.len() {
            return Err(LinRegError::mismatch(
                "normalization sigmas",
                self.means.len(),
                self.sigmas.len(),
            ));
        }
        if row.len() != self.means.len() {
            return Err(LinRegError::mismatch(
                "normalized vector",
                self.means.len(),
                row.len(),
            ));
        }
        Ok(row
            .iter()
            .zip(&self.means)
            .zip(&self.sigmas)
            .map(|((x, m), s)| (x - m) / s)
            .collect())
    }

    /// Maps a normalized vector back to raw feature space.
    pub fn inverse_transform_row(&self, z: &[f64]) -> Result<Vec<f64>> {
        if z.len() != self.means.len() || self.sigmas.len() != self.means.len() {
            return Err(LinRegError::mismatch("normalized vector", self.means.len(), z.len()));
        }
        Ok(z.iter()
            .zip(&self.means)
            .zip(&self.sigmas)
            .map(|((z, m), s)| z * s + m)
            .collect())
    }
}

/// StandardScaler transformer (unfitted).
///
/// Transforms features by removing the mean and scaling to unit variance.
#[derive(Clone, Debug)]
pub struct StandardScaler<B: Backend> {
    _backend: PhantomData<B>,
}

impl<B: Backend> Default for StandardScaler<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> StandardScaler<B> {
    pub fn new() -> Self {
        Self {
            _backend: PhantomData,
        }
    }
}

impl<B: Backend> Transformer<B> for StandardScaler<B> {
    type Input = Tensor2D<B>;
    type Output = Tensor2D<B>;
    type Fitted = FittedStandardScaler<B>;

    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted> {
        let (rows, cols) = data.shape();

        if rows == 0 {
            return Err(LinRegError::EmptyDataset(
                "cannot fit StandardScaler on zero rows".to_string(),
            ));
        }
        if cols == 0 {
            return Err(LinRegError::EmptyDataset(
                "cannot fit StandardScaler on zero feature columns".to_string(),
            ));
        }

        // Rounding in the mean can leave a tiny non-zero std on a constant
        // column, so constancy is checked on the raw values.
        let first = data.row(0);
        let mut varying = vec![false; cols];
        for i in 1..rows {
            for ((flag, v), f) in varying.iter_mut().zip(data.row(i)).zip(&first) {
                *flag |= v != *f;
            }
        }

        let mean = data.col_mean();
        let std = data.col_std(0);

        for (column, (&varies, s)) in varying.iter().zip(std.to_vec()).enumerate() {
            if !varies || s == 0.0 {
                return Err(LinRegError::ZeroVariance { column });
            }
            if !(s > 0.0 && s.is_finite()) {
                return Err(LinRegError::NonFiniteStatistic { column });
            }
        }

        log::debug!("fitted StandardScaler on {rows} rows x {cols} features");
        Ok(FittedStandardScaler {
            mean,
            std,
            n_features: cols,
        })
    }
}

/// Fitted StandardScaler ready for inference.
#[derive(Clone, Debug)]
pub struct FittedStandardScaler<B: Backend> {
    mean: Tensor1D<B>,
    std: Tensor1D<B>,
    n_features: usize,
}

impl<B: Backend> FittedStandardScaler<B> {
    /// Get the mean values for each feature.
    pub fn mean(&self) -> &Tensor1D<B> {
        &self.mean
    }

    /// Get the standard deviation values for each feature.
    pub fn std(&self) -> &Tensor1D<B> {
        &self.std
    }

    /// Host copy of the learned statistics.
    pub fn stats(&self) -> NormalizationStats {
        NormalizationStats {
            means: self.mean.to_vec(),
            sigmas: self.std.to_vec(),
        }
    }

    /// Normalizes one new sample with the stored statistics.
    ///
    /// Bit-identical to the corresponding row of [`FittedTransformer::transform`].
    pub fn transform_row(&self, row: &[f64]) -> Result<Vec<f64>> {
        self.stats().transform_row(row)
    }

    fn check_width(&self, data: &Tensor2D<B>) -> Result<()> {
        let cols = data.cols();
        if cols != self.n_features {
            return Err(LinRegError::mismatch("scaler input", self.n_features, cols));
        }
        Ok(())
    }
}

impl<B: Backend> FittedTransformer<B> for FittedStandardScaler<B> {
    type Input = Tensor2D<B>;
    type Output = Tensor2D<B>;

    fn transform(&self, data: &Self::Input) -> Result<Self::Output> {
        self.check_width(data)?;
        Ok(data.sub_row(&self.mean).div_row(&self.std))
    }

    fn inverse_transform(&self, data: &Self::Output) -> Result<Self::Input> {
        self.check_width(data)?;
        Ok(data.mul_row(&self.std).add_row(&self.mean))
    }

    fn n_features_in(&self) -> usize {
        self.n_features
    }
}
