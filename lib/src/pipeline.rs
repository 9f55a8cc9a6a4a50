//! Normalization statistics bound to the model trained on them.
//!
//! Predicting on raw inputs requires re-applying the exact statistics of the
//! training set. [`RegressionPipeline`] keeps the fitted scaler and the fitted
//! model together so there is no way to normalize with statistics from some
//! other dataset.

use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::config::TrainingConfig;
use crate::dataset::InMemoryDataset;
use crate::error::Result;
use crate::model::{Fitted, InferenceModel, LinearModel, LinearRegression};
use crate::preprocessing::{FittedStandardScaler, FittedTransformer, StandardScaler, Transformer};
use crate::trainer::{LinearTrainer, TrainingHistory};

/// A fitted standard scaler plus the linear model trained on its output.
#[derive(Clone, Debug)]
pub struct RegressionPipeline<B: Backend> {
    scaler: FittedStandardScaler<B>,
    model: LinearModel<B, Fitted>,
}

impl<B: Backend> RegressionPipeline<B> {
    /// Normalizes the dataset features, then trains a zero-initialised model on
    /// them against the raw targets.
    ///
    /// # Errors
    /// Everything [`StandardScaler`] and [`crate::trainer::Trainer::fit`] can
    /// return, plus `InvalidHyperparameter` for an invalid `config`.
    pub fn fit(dataset: &InMemoryDataset, config: &TrainingConfig) -> Result<Self> {
        Self::fit_with_history(dataset, config).map(|(pipeline, _)| pipeline)
    }

    /// Same as [`RegressionPipeline::fit`], also returning the training trace.
    pub fn fit_with_history(
        dataset: &InMemoryDataset,
        config: &TrainingConfig,
    ) -> Result<(Self, TrainingHistory)> {
        let trainer = LinearTrainer::<B>::from_config(config)?;

        let raw = Tensor2D::<B>::from_rows(dataset.features())?;
        let (scaler, normalized) = StandardScaler::<B>::new().fit_transform(&raw)?;
        let normalized = dataset.with_features(normalized.to_rows())?;

        let (model, history) =
            trainer.fit_with_history(LinearRegression::<B>::new(raw.cols()), &normalized)?;
        Ok((Self { scaler, model }, history))
    }

    /// Predicts one raw (un-normalized) sample.
    pub fn predict_raw(&self, row: &[f64]) -> Result<f64> {
        self.model.predict(&self.scaler.transform_row(row)?)
    }

    /// Predicts every row of a raw feature matrix.
    pub fn predict_raw_batch(&self, x: &Tensor2D<B>) -> Result<Tensor1D<B>> {
        self.model.predict_batch(&self.scaler.transform(x)?)
    }

    /// The model expressed over raw features; see [`LinearModel::denormalize`].
    pub fn raw_parameters(&self) -> Result<(Vec<f64>, f64)> {
        self.model.denormalize(&self.scaler.stats())
    }

    pub fn scaler(&self) -> &FittedStandardScaler<B> {
        &self.scaler
    }

    /// The model, which expects normalized inputs.
    pub fn model(&self) -> &LinearModel<B, Fitted> {
        &self.model
    }

    pub fn n_features_in(&self) -> usize {
        self.scaler.n_features_in()
    }
}
