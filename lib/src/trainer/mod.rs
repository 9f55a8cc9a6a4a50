// trainer/mod.rs
use crate::{
    backend::{Backend, Tensor1D, Tensor2D},
    config::TrainingConfig,
    dataset::Dataset,
    error::{LinRegError, Result},
    gradient::{self, Evaluation},
    loss::{Loss, MSELoss},
    model::{LinearParams, LinearRegression, ParamOps, TrainableModel},
    optimizer::{GradientDescent, Optimizer},
};
use std::marker::PhantomData;

pub mod history;
pub mod univariate;

pub use history::{HistoryEntry, TrainingHistory};
pub use univariate::UnivariateTrainer;

/// Orchestrates full-batch gradient descent for a `TrainableModel`.
///
/// Combines a loss function and an optimizer to fit a model on a dataset.
/// Once built via `TrainerBuilder`, it is immutable and can be reused across multiple models
/// (as long as types match).
///
/// Every iteration evaluates the gradient over the whole dataset at the current
/// parameters and applies one simultaneous update. There is no early stopping and
/// no divergence detection: exactly `iterations` updates are applied.
pub struct Trainer<B, L, O, M, P>
where
    B: Backend,
    L: Loss<B>,
    M: TrainableModel<B, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
{
    pub(crate) iterations: usize,
    pub(crate) verbose: bool,
    pub(crate) loss_fn: L,
    pub(crate) optimizer: O,
    _phantom_backend: PhantomData<B>,
    _phantom_model: PhantomData<M>,
}

/// Fluent builder for constructing a `Trainer` with custom hyperparameters.
///
/// Defaults:
/// - `iterations`: 1000
/// - `verbose`: false
pub struct TrainerBuilder<B, L, O, M, P>
where
    B: Backend,
    L: Loss<B>,
    M: TrainableModel<B, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
{
    iterations: usize,
    verbose: bool,
    loss_fn: L,
    optimizer: O,
    _phantom_backend: PhantomData<B>,
    _phantom_model: PhantomData<M>,
}

impl<B, L, O, M, P> TrainerBuilder<B, L, O, M, P>
where
    B: Backend,
    L: Loss<B>,
    M: TrainableModel<B, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
{
    /// Creates a new `TrainerBuilder` with the given components.
    ///
    /// # Arguments
    /// * `loss_fn`: differentiable loss (e.g., `MSELoss`)
    /// * `optimizer`: parameter updater (e.g., `GradientDescent`)
    pub fn new(loss_fn: L, optimizer: O) -> Self {
        Self {
            iterations: 1000,
            verbose: false,
            loss_fn,
            optimizer,
            _phantom_backend: PhantomData,
            _phantom_model: PhantomData,
        }
    }

    /// Number of gradient-descent updates. Zero is rejected by `fit`.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets verbosity for training output.
    ///
    /// When `true`, the cost of every iteration is logged at `info` level instead
    /// of `trace`.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn build(self) -> Trainer<B, L, O, M, P> {
        Trainer {
            iterations: self.iterations,
            verbose: self.verbose,
            loss_fn: self.loss_fn,
            optimizer: self.optimizer,
            _phantom_backend: PhantomData,
            _phantom_model: PhantomData,
        }
    }
}

impl<B, L, O, M, P> Trainer<B, L, O, M, P>
where
    B: Backend,
    L: Loss<B, Target = Tensor1D<B>, Prediction = Tensor1D<B>>,
    M: TrainableModel<
        B,
        Input = Tensor2D<B>,
        Prediction = Tensor1D<B>,
        Params = P,
        Gradients = P,
    >,
    O: Optimizer<B, P>,
    P: ParamOps<B>,
{
    /// Trains the model on the provided dataset.
    ///
    /// Training is atomic: on error nothing is returned and the model passed in is
    /// dropped, so no partially trained state is ever observable.
    ///
    /// # Errors
    /// - `InvalidHyperparameter` if `iterations == 0`
    /// - `EmptyDataset` if the dataset has no rows
    /// - `DimensionMismatch` if the dataset width differs from the model's
    pub fn fit<D>(&self, model: M, dataset: &D) -> Result<M::Output>
    where
        D: Dataset,
    {
        self.run(model, dataset, None)
    }

    /// Same as [`Trainer::fit`], also returning the per-iteration trace.
    pub fn fit_with_history<D>(&self, model: M, dataset: &D) -> Result<(M::Output, TrainingHistory)>
    where
        D: Dataset,
    {
        let mut history = TrainingHistory::with_capacity(self.iterations);
        let fitted = self.run(model, dataset, Some(&mut history))?;
        Ok((fitted, history))
    }

    fn run<D>(&self, mut model: M, dataset: &D, mut history: Option<&mut TrainingHistory>) -> Result<M::Output>
    where
        D: Dataset,
    {
        if self.iterations == 0 {
            return Err(LinRegError::InvalidHyperparameter(
                "iterations must be >= 1".to_string(),
            ));
        }
        if dataset.is_empty() {
            return Err(LinRegError::EmptyDataset("cannot train on zero rows".into()));
        }
        if dataset.n_features() != model.n_features() {
            return Err(LinRegError::mismatch(
                "training features",
                model.n_features(),
                dataset.n_features(),
            ));
        }

        let (x, y) = dataset.full_batch::<B>()?;
        log::debug!(
            "training on {} samples x {} features: learning_rate={}, iterations={}",
            x.rows(),
            x.cols(),
            self.optimizer.learning_rate(),
            self.iterations
        );

        let Evaluation {
            cost: initial_cost,
            mut gradients,
        } = gradient::evaluate(&self.loss_fn, &model, &x, &y);
        let mut cost = initial_cost;

        for iteration in 1..=self.iterations {
            let new_params = self.optimizer.step(model.params(), &gradients);
            model.update_params(&new_params);

            // Cost at the post-update parameters; its gradient drives the next step.
            let eval = gradient::evaluate(&self.loss_fn, &model, &x, &y);
            cost = eval.cost;
            gradients = eval.gradients;

            if self.verbose {
                log::info!("iteration {iteration}: cost = {cost}");
            } else {
                log::trace!("iteration {iteration}: cost = {cost}");
            }
            if let Some(history) = history.as_deref_mut() {
                let (weights, bias) = new_params.snapshot();
                history.push(HistoryEntry {
                    iteration,
                    cost,
                    weights,
                    bias,
                });
            }
        }

        log::debug!("training finished: cost {initial_cost} -> {cost}");
        Ok(model.into_fitted())
    }
}

impl<B, L, O, M, P> Trainer<B, L, O, M, P>
where
    B: Backend,
    L: Loss<B>,
    M: TrainableModel<B, Params = P, Gradients = P>,
    O: Optimizer<B, P>,
{
    /// Convenience constructor that starts the builder pattern.
    ///
    /// Equivalent to `TrainerBuilder::new(...)`.
    pub fn builder(loss_fn: L, optimizer: O) -> TrainerBuilder<B, L, O, M, P> {
        TrainerBuilder::new(loss_fn, optimizer)
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }
}

/// The standard linear-regression trainer: halved MSE with plain gradient descent.
pub type LinearTrainer<B> = Trainer<B, MSELoss, GradientDescent, LinearRegression<B>, LinearParams<B>>;

impl<B: Backend> LinearTrainer<B> {
    /// Builds a validated MSE + gradient-descent trainer from `config`.
    pub fn from_config(config: &TrainingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Trainer::builder(MSELoss, GradientDescent::new(config.learning_rate)?)
            .iterations(config.iterations)
            .verbose(config.verbose)
            .build())
    }
}
