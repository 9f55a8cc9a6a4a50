//! Models with compile-time training state.
//!
//! A model is either [`Unfitted`] (owned by a trainer, parameters mutable through
//! [`TrainableModel::update_params`]) or [`Fitted`] (immutable, prediction only).
//! Training never mutates a fitted model: retraining produces a new one.

pub mod linear;
pub mod state;
pub mod univariate;

pub use linear::{LinearModel, LinearParams, LinearRegression, LinearRegressor};
pub use state::{Fitted, Unfitted};
pub use univariate::UnivariateModel;

use crate::backend::Backend;
use crate::error::Result;

/// Training-side interface: forward pass, backward pass and parameter access.
///
/// The trainer owns the model exclusively while it runs, so parameters can be
/// swapped in place between iterations without aliasing.
pub trait TrainableModel<B: Backend> {
    type Input;
    type Prediction;
    type Params;
    type Gradients;
    type Output;

    /// Batch prediction with the current parameters.
    fn forward(&self, input: &Self::Input) -> Self::Prediction;

    /// Gradients of the loss w.r.t. the parameters, given `∂L/∂prediction`.
    fn backward(&self, input: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients;

    fn params(&self) -> &Self::Params;

    /// Number of input features the model expects.
    fn n_features(&self) -> usize;

    /// Replaces all parameters at once.
    fn update_params(&mut self, new_params: &Self::Params);

    /// Freezes the model into its inference form.
    fn into_fitted(self) -> Self::Output;
}

/// Arithmetic on parameter sets, used by optimizers.
pub trait ParamOps<B: Backend>: Clone {
    fn add(&self, other: &Self) -> Self;
    fn scale(&self, scalar: f64) -> Self;

    /// Host copy as `(weights, bias)`, used for training history.
    fn snapshot(&self) -> (Vec<f64>, f64);
}

/// Inference-side interface of a fitted model.
pub trait InferenceModel<B: Backend> {
    type InputSingle: ?Sized;
    type OutputSingle;
    type InputBatch;
    type OutputBatch;

    /// Predicts a single sample. Fails on a feature-count mismatch.
    fn predict(&self, input: &Self::InputSingle) -> Result<Self::OutputSingle>;

    /// Predicts every row of a batch. Fails on a feature-count mismatch.
    fn predict_batch(&self, input: &Self::InputBatch) -> Result<Self::OutputBatch>;
}
