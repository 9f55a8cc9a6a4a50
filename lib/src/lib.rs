//! # linreg-rs
//!
//! Linear regression by batch gradient descent, with z-score feature
//! normalization and a type-safe split between training and inference.
//!
//! ## Core Design Principles
//!
//! - **Stateful Type Safety**: Models carry their training state in the type system
//!   (`Unfitted` vs `Fitted`), so `predict` on an untrained model does not compile.
//! - **Training/Inference Separation**: Fitted models contain only `w` and `b`;
//!   training logic lives in separate components (loss, optimizer, trainer).
//! - **Backend Agnosticism**: The `Backend` trait lets the same code run on plain
//!   vectors or on `ndarray`.
//! - **Deterministic**: Zero initialisation, full-batch updates and a fixed
//!   reduction order. Identical inputs give identical parameters.
//!
//! ## Quick Start
//!
//! ```rust
//! use linreg_rs::model::InferenceModel;
//!
//! // y = 2*x1 + 3*x2 + 1
//! let x = vec![vec![1.0, 2.0], vec![2.0, 1.0], vec![3.0, 5.0], vec![4.0, 3.0]];
//! let y: Vec<f64> = x.iter().map(|r| 2.0 * r[0] + 3.0 * r[1] + 1.0).collect();
//!
//! let (x_norm, means, sigmas) = linreg_rs::fit_transform(&x).unwrap();
//! let model = linreg_rs::train(&x_norm, &y, 0.1, 1000).unwrap();
//!
//! let query = linreg_rs::transform(&[2.5, 2.5], &means, &sigmas).unwrap();
//! let pred = model.predict(&query).unwrap();
//! assert!((pred - 13.5).abs() < 1e-6);
//! ```
//!
//! ## Module Structure
//!
//! - `backend`: Tensor abstractions and computation primitives (`Tensor1D`, `Tensor2D`)
//! - `dataset`: In-memory datasets, CSV loading, synthetic data
//! - `preprocessing`: Z-score normalization (`StandardScaler`)
//! - `loss`: Halved mean squared error
//! - `gradient`: Cost and gradient evaluation
//! - `model`: Linear models with stateful type parameters
//! - `optimizer`: Gradient-descent parameter updates
//! - `trainer`: Training loop, history, single-feature trainer
//! - `pipeline`: Scaler and model bound together
//! - `config`: Serializable hyperparameters

pub mod backend;

/// Serializable training hyperparameters.
pub mod config;

/// Data loading utilities and dataset abstractions.
pub mod dataset;

/// Crate error type.
pub mod error;

/// Cost and gradient evaluation.
pub mod gradient;

/// Differentiable loss functions for model training.
pub mod loss;

/// Machine learning models with compile-time state safety.
pub mod model;

/// Optimization algorithms for parameter updates.
pub mod optimizer;

/// Normalization statistics bound to a fitted model.
pub mod pipeline;

/// Data preprocessing transformers.
pub mod preprocessing;

/// High-level training loop orchestration.
pub mod trainer;

/// Re-export of core types for convenient usage.
pub use backend::{Backend, Tensor1D, Tensor2D};
#[cfg(feature = "cpu")]
pub use backend::CpuBackend;
pub use config::TrainingConfig;
pub use error::{LinRegError, Result};
pub use model::{Fitted, InferenceModel, LinearModel, UnivariateModel, Unfitted};
pub use pipeline::RegressionPipeline;
#[cfg(feature = "cpu")]
pub use preprocessing::fit_transform;
pub use preprocessing::{transform, NormalizationStats};
pub use trainer::{Trainer, TrainingHistory, UnivariateTrainer};

/// Trains a linear model on already-normalized rows `x` and targets `y`.
///
/// Starts from `w = 0`, `b = 0` and applies exactly `iterations` full-batch
/// gradient-descent updates with step `learning_rate`.
///
/// # Errors
/// - `InvalidHyperparameter` for a non-positive or non-finite `learning_rate`,
///   or `iterations == 0`
/// - `EmptyDataset` if `x` is empty
/// - `DimensionMismatch` if `x` and `y` differ in length or rows differ in width
#[cfg(feature = "cpu")]
pub fn train(
    x: &[Vec<f64>],
    y: &[f64],
    learning_rate: f64,
    iterations: usize,
) -> Result<LinearModel<CpuBackend, Fitted>> {
    let trainer = trainer::LinearTrainer::<CpuBackend>::from_config(&TrainingConfig::new(
        learning_rate,
        iterations,
    ))?;
    let dataset = dataset::InMemoryDataset::new(x.to_vec(), y.to_vec())?;
    let n_features = x[0].len();
    trainer.fit(model::LinearRegression::new(n_features), &dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_identity() {
        // y = x
        let x = vec![vec![-1.0], vec![0.0], vec![1.0]];
        let y = vec![-1.0, 0.0, 1.0];
        let model = train(&x, &y, 0.5, 500).unwrap();
        let (w, b) = model.parameters();
        assert!((w[0] - 1.0).abs() < 1e-9);
        assert!(b.abs() < 1e-9);
        assert!((model.predict(&[0.25]).unwrap() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_train_validates_inputs() {
        assert!(matches!(
            train(&[], &[], 0.1, 10),
            Err(LinRegError::EmptyDataset(_))
        ));
        assert!(matches!(
            train(&[vec![1.0]], &[1.0, 2.0], 0.1, 10),
            Err(LinRegError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            train(&[vec![1.0]], &[1.0], 0.0, 10),
            Err(LinRegError::InvalidHyperparameter(_))
        ));
        assert!(matches!(
            train(&[vec![1.0]], &[1.0], 0.1, 0),
            Err(LinRegError::InvalidHyperparameter(_))
        ));
    }
}
