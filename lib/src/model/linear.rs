//! Linear regression model: `y = w · x + b`.
//!
//! This module implements a type-safe linear model with compile-time state tracking:
//! - [`LinearRegression`] = `LinearModel<Unfitted>`: zero-initialised, used during training.
//! - `LinearModel<Fitted>`: immutable, inference-only.
//!
//! A fitted model is free from training hyperparameters. Retraining never mutates
//! it; the trainer hands back a new fitted model instead.
pub use crate::backend::tensor1d::Tensor1D;
pub use crate::backend::tensor2d::Tensor2D;
pub use crate::backend::Backend;
use crate::error::{LinRegError, Result};
pub use crate::model::{Fitted, InferenceModel, ParamOps, TrainableModel, Unfitted};
use crate::preprocessing::NormalizationStats;
use std::marker::PhantomData;

/// Trainable parameters of a linear model: weights and bias.
///
/// Doubles as the gradient type, since `∂J/∂w` and `∂J/∂b` have the same shape.
#[derive(Clone, Debug)]
pub struct LinearParams<B: Backend> {
    pub weights: Tensor1D<B>,
    pub bias: f64,
}

impl<B: Backend> LinearParams<B> {
    /// All-zero parameters for `n_features` inputs.
    pub fn zeros(n_features: usize) -> Self {
        Self {
            weights: Tensor1D::zeros(n_features),
            bias: 0.0,
        }
    }

    pub fn n_features(&self) -> usize {
        self.weights.len()
    }

    /// Host copy as `(weights, bias)`.
    pub fn to_parts(&self) -> (Vec<f64>, f64) {
        (self.weights.to_vec(), self.bias)
    }
}

impl<B: Backend> ParamOps<B> for LinearParams<B> {
    fn add(&self, other: &Self) -> Self {
        Self {
            weights: self.weights.add(&other.weights),
            bias: self.bias + other.bias,
        }
    }

    fn scale(&self, scalar: f64) -> Self {
        Self {
            weights: self.weights.scale(scalar),
            bias: self.bias * scalar,
        }
    }

    fn snapshot(&self) -> (Vec<f64>, f64) {
        self.to_parts()
    }
}

/// A linear model with state encoded at the type level.
///
/// - When `S = Unfitted`: implements [`TrainableModel`].
/// - When `S = Fitted`: implements [`InferenceModel`].
///
/// This enforces, at compile time, that you cannot call `predict()` on an untrained model.
#[derive(Clone, Debug)]
pub struct LinearModel<B: Backend, S> {
    params: LinearParams<B>,
    _state: PhantomData<S>,
}

impl<B: Backend, S> LinearModel<B, S> {
    /// Number of input features the model expects.
    pub fn n_features(&self) -> usize {
        self.params.n_features()
    }

    /// Read-only snapshot `(w, b)`.
    ///
    /// On an unfitted model this is the zero initialisation `(0^F, 0.0)`, not an error.
    pub fn parameters(&self) -> (Vec<f64>, f64) {
        self.params.to_parts()
    }
}

impl<B: Backend> LinearModel<B, Fitted> {
    /// Creates a fitted model from trained parameters.
    ///
    /// Typically called by [`TrainableModel::into_fitted`].
    pub fn from_params(params: LinearParams<B>) -> Self {
        Self {
            params,
            _state: PhantomData,
        }
    }

    /// Expresses the model in raw (un-normalized) feature space.
    ///
    /// For a model trained on z-scored features with statistics `stats`, returns
    /// `(w', b')` such that `w' · x + b' == w · z(x) + b`:
    /// `w'_j = w_j / σ_j`, `b' = b - Σ_j w_j μ_j / σ_j`.
    pub fn denormalize(&self, stats: &NormalizationStats) -> Result<(Vec<f64>, f64)> {
        let n = self.n_features();
        if stats.n_features() != n {
            return Err(LinRegError::mismatch(
                "denormalize",
                n,
                stats.n_features(),
            ));
        }
        let (w, b) = self.parameters();
        let weights: Vec<f64> = w
            .iter()
            .zip(&stats.sigmas)
            .map(|(wj, sj)| wj / sj)
            .collect();
        let shift = weights
            .iter()
            .zip(&stats.means)
            .fold(0.0, |acc, (wj, mj)| acc + wj * mj);
        Ok((weights, b - shift))
    }
}

/// Inference for a trained linear model: `y = w · x + b`.
///
/// - Single-sample input: `[f64]` → `f64`
/// - Batch input: [`Tensor2D<B>`] → [`Tensor1D<B>`]
impl<B: Backend> InferenceModel<B> for LinearModel<B, Fitted> {
    type InputSingle = [f64];
    type OutputSingle = f64;
    type InputBatch = Tensor2D<B>;
    type OutputBatch = Tensor1D<B>;

    fn predict(&self, input: &[f64]) -> Result<f64> {
        if input.len() != self.n_features() {
            return Err(LinRegError::mismatch(
                "predict",
                self.n_features(),
                input.len(),
            ));
        }
        let x = Tensor1D::<B>::from(input);
        Ok(x.dot(&self.params.weights) + self.params.bias)
    }

    fn predict_batch(&self, input: &Tensor2D<B>) -> Result<Tensor1D<B>> {
        if input.cols() != self.n_features() {
            return Err(LinRegError::mismatch(
                "predict_batch",
                self.n_features(),
                input.cols(),
            ));
        }
        Ok(input.dot(&self.params.weights).add_scalar(self.params.bias))
    }
}

/// Training interface for linear regression.
///
/// Forward pass: `X · w + b`
/// Backward pass: `∇w = Xᵀ · g`, `∇b = Σ g`, where `g = ∂J/∂prediction`.
impl<B: Backend> TrainableModel<B> for LinearModel<B, Unfitted> {
    type Params = LinearParams<B>;
    type Gradients = LinearParams<B>;
    type Prediction = Tensor1D<B>;
    type Input = Tensor2D<B>;
    type Output = LinearModel<B, Fitted>;

    fn forward(&self, x: &Self::Input) -> Self::Prediction {
        x.dot(&self.params.weights).add_scalar(self.params.bias)
    }

    fn backward(&self, x: &Self::Input, grad_output: &Self::Prediction) -> Self::Gradients {
        LinearParams {
            weights: x.tdot(grad_output),
            bias: grad_output.sum(),
        }
    }

    fn params(&self) -> &Self::Params {
        &self.params
    }

    fn n_features(&self) -> usize {
        self.params.n_features()
    }

    fn update_params(&mut self, params: &Self::Params) {
        self.params = params.clone();
    }

    fn into_fitted(self) -> LinearModel<B, Fitted> {
        LinearModel::<B, Fitted>::from_params(self.params)
    }
}

/// Alias for an **unfitted** linear regression model.
pub type LinearRegression<B> = LinearModel<B, Unfitted>;

impl<B: Backend> LinearRegression<B> {
    /// Creates a model with `w = 0^F` and `b = 0`.
    pub fn new(n_features: usize) -> Self {
        Self {
            params: LinearParams::zeros(n_features),
            _state: PhantomData,
        }
    }
}

/// Convenient alias for CPU-based linear regression.
///
/// ```rust
/// use linreg_rs::model::LinearRegressor;
/// let model = LinearRegressor::new(4);
/// assert_eq!(model.parameters(), (vec![0.0; 4], 0.0));
/// ```
#[cfg(feature = "cpu")]
pub type LinearRegressor = LinearRegression<crate::backend::CpuBackend>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::CpuBackend;

    fn fitted(weights: Vec<f64>, bias: f64) -> LinearModel<CpuBackend, Fitted> {
        LinearModel::from_params(LinearParams {
            weights: Tensor1D::new(weights),
            bias,
        })
    }

    // === ParamOps ===

    #[test]
    fn test_param_ops_add() {
        let p1 = LinearParams::<CpuBackend> {
            weights: Tensor1D::new(vec![1.0, 2.0]),
            bias: 0.5,
        };
        let p2 = LinearParams::<CpuBackend> {
            weights: Tensor1D::new(vec![0.5, 1.0]),
            bias: 0.5,
        };
        let result = p1.add(&p2);
        assert_eq!(result.weights.to_vec(), vec![1.5, 3.0]);
        assert_eq!(result.bias, 1.0);
    }

    #[test]
    fn test_param_ops_scale_negative() {
        let p = LinearParams::<CpuBackend> {
            weights: Tensor1D::new(vec![2.0, 4.0]),
            bias: 1.0,
        };
        let result = p.scale(-0.5);
        assert_eq!(result.weights.to_vec(), vec![-1.0, -2.0]);
        assert_eq!(result.bias, -0.5);
    }

    // === Unfitted ===

    #[test]
    fn test_new_is_zero_initialized() {
        let model = LinearRegression::<CpuBackend>::new(3);
        assert_eq!(model.parameters(), (vec![0.0, 0.0, 0.0], 0.0));
        assert_eq!(model.n_features(), 3);
    }

    #[test]
    fn test_forward_with_zero_params() {
        let model = LinearRegression::<CpuBackend>::new(2);
        let x = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        assert_eq!(model.forward(&x).to_vec(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_forward_correctness() {
        let mut model = LinearRegression::<CpuBackend>::new(2);
        model.update_params(&LinearParams {
            weights: Tensor1D::new(vec![2.0, 3.0]),
            bias: 1.0,
        });
        // [[1, 0], [0, 1]] -> [3, 4]
        let x = Tensor2D::<CpuBackend>::new(vec![1.0, 0.0, 0.0, 1.0], 2, 2);
        assert_eq!(model.forward(&x).to_vec(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_backward_batch() {
        let model = LinearRegression::<CpuBackend>::new(2);
        let x = Tensor2D::<CpuBackend>::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let grad_output = Tensor1D::<CpuBackend>::new(vec![0.5, 0.25]);

        let grads = model.backward(&x, &grad_output);

        // Xᵀ g = [1*0.5 + 3*0.25, 2*0.5 + 4*0.25] = [1.25, 2.0]
        assert!((grads.weights.to_vec()[0] - 1.25).abs() < 1e-12);
        assert!((grads.weights.to_vec()[1] - 2.0).abs() < 1e-12);
        assert!((grads.bias - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_into_fitted_keeps_params() {
        let mut model = LinearRegression::<CpuBackend>::new(1);
        model.update_params(&LinearParams {
            weights: Tensor1D::new(vec![1.0]),
            bias: 0.5,
        });
        let fitted = model.into_fitted();
        assert_eq!(fitted.parameters(), (vec![1.0], 0.5));
    }

    // === Fitted ===

    #[test]
    fn test_from_params_keeps_params() {
        let model = fitted(vec![0.5, -1.5], 2.0);
        assert_eq!(model.n_features(), 2);
        assert_eq!(model.parameters(), (vec![0.5, -1.5], 2.0));
    }

    #[test]
    fn test_predict_single_sample() {
        let model = fitted(vec![2.0, 3.0], 1.0);
        // 2*1 + 3*2 + 1 = 9
        assert_eq!(model.predict(&[1.0, 2.0]).unwrap(), 9.0);
    }

    #[test]
    fn test_predict_negative_weights() {
        let model = fitted(vec![-1.0, -2.0], 5.0);
        assert_eq!(model.predict(&[1.0, 1.0]).unwrap(), 2.0);
    }

    #[test]
    fn test_predict_dimension_mismatch() {
        let model = fitted(vec![1.0, 1.0], 0.0);
        let err = model.predict(&[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(
            err,
            LinRegError::DimensionMismatch {
                expected: 2,
                got: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_predict_batch() {
        let model = fitted(vec![1.0, 2.0], 3.0);
        let batch = Tensor2D::<CpuBackend>::new(vec![1.0, 1.0, 2.0, 2.0], 2, 2);
        assert_eq!(model.predict_batch(&batch).unwrap().to_vec(), vec![6.0, 9.0]);
    }

    #[test]
    fn test_predict_batch_dimension_mismatch() {
        let model = fitted(vec![1.0, 2.0], 3.0);
        let batch = Tensor2D::<CpuBackend>::new(vec![1.0, 1.0, 2.0], 1, 3);
        assert!(model.predict_batch(&batch).is_err());
    }

    #[test]
    fn test_predict_matches_batch_row() {
        let model = fitted(vec![0.3, -1.7, 2.2], 0.9);
        let rows = vec![vec![1.1, 2.2, 3.3], vec![-4.0, 0.5, 6.25]];
        let batch = Tensor2D::<CpuBackend>::from_rows(&rows).unwrap();
        let batch_preds = model.predict_batch(&batch).unwrap().to_vec();
        for (row, expected) in rows.iter().zip(batch_preds) {
            assert_eq!(model.predict(row).unwrap(), expected);
        }
    }

    #[test]
    fn test_denormalize() {
        let model = fitted(vec![4.0, -2.0], 10.0);
        let stats = NormalizationStats {
            means: vec![1.0, 3.0],
            sigmas: vec![2.0, 0.5],
        };
        let (w, b) = model.denormalize(&stats).unwrap();
        assert_eq!(w, vec![2.0, -4.0]);
        // 10 - (2*1 + -4*3) = 20
        assert_eq!(b, 20.0);

        // Raw-space relation agrees with normalized prediction.
        let raw = [5.0, 2.0];
        let z = [(5.0 - 1.0) / 2.0, (2.0 - 3.0) / 0.5];
        let direct = w[0] * raw[0] + w[1] * raw[1] + b;
        assert!((direct - model.predict(&z).unwrap()).abs() < 1e-12);
    }

    #[test]
    fn test_denormalize_dimension_mismatch() {
        let model = fitted(vec![1.0], 0.0);
        let stats = NormalizationStats {
            means: vec![0.0, 0.0],
            sigmas: vec![1.0, 1.0],
        };
        assert!(model.denormalize(&stats).is_err());
    }
}
