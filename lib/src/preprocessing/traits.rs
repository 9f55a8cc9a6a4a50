//! Core traits for preprocessing transformers.
//!
//! This module defines the two central traits:
//! - [`Transformer`]: Used during fitting; has hyperparameters and can learn from data.
//! - [`FittedTransformer`]: After fitting; holds the learned statistics and is ready for inference.

use crate::backend::Backend;
use crate::error::Result;

/// Trait for unfitted transformers.
///
/// A transformer learns parameters from training data and can then transform
/// new data using those learned parameters. This trait represents the
/// unfitted state.
///
/// # Type Parameters
/// - `B`: The backend (e.g., `CpuBackend`) used for computation.
///
/// # Example
/// ```
/// use linreg_rs::backend::{CpuBackend, Tensor2D};
/// use linreg_rs::preprocessing::{FittedTransformer, StandardScaler, Transformer};
///
/// let data = Tensor2D::<CpuBackend>::new(vec![1.0, 10.0, 3.0, 30.0], 2, 2);
/// let fitted = StandardScaler::<CpuBackend>::new().fit(&data).unwrap();
/// let scaled = fitted.transform(&data).unwrap();
/// assert_eq!(scaled.to_rows(), vec![vec![-1.0, -1.0], vec![1.0, 1.0]]);
/// ```
pub trait Transformer<B: Backend>: Clone {
    /// Input data type for transformation.
    type Input;
    /// Output data type after transformation.
    type Output;
    /// The fitted transformer type ready for inference.
    type Fitted: FittedTransformer<B, Input = Self::Input, Output = Self::Output>;

    /// Fit the transformer to the training data.
    ///
    /// Learns parameters (e.g., mean and std for StandardScaler) from the data.
    fn fit(&self, data: &Self::Input) -> Result<Self::Fitted>;

    /// Fit the transformer and transform the same data in one step.
    fn fit_transform(&self, data: &Self::Input) -> Result<(Self::Fitted, Self::Output)> {
        let fitted = self.fit(data)?;
        let output = fitted.transform(data)?;
        Ok((fitted, output))
    }
}

/// Trait for fitted transformers ready for inference.
///
/// After fitting, a transformer contains learned parameters (e.g., means and
/// standard deviations for StandardScaler) and can transform new data with them.
pub trait FittedTransformer<B: Backend>: Clone {
    /// Input data type for transformation.
    type Input;
    /// Output data type after transformation.
    type Output;

    /// Transform data using learned parameters.
    ///
    /// # Errors
    /// `DimensionMismatch` if the input width differs from the fitted feature count.
    fn transform(&self, data: &Self::Input) -> Result<Self::Output>;

    /// Reverse the transformation.
    fn inverse_transform(&self, data: &Self::Output) -> Result<Self::Input>;

    /// Returns the number of features seen during fit.
    fn n_features_in(&self) -> usize;
}
