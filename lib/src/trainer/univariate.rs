//! Gradient descent for a single feature, on plain `f64` slices.
//!
//! The arithmetic follows the same operation order as [`CpuBackend`] in the
//! tensor path (`0.0 + x * w + b` per prediction, ascending-row accumulation of
//! cost and gradients), so training here and training a one-feature
//! `LinearRegression` on `CpuBackend` give the same parameters.
//!
//! [`CpuBackend`]: crate::backend::CpuBackend

use crate::config::TrainingConfig;
use crate::error::{LinRegError, Result};
use crate::model::UnivariateModel;
use crate::trainer::{HistoryEntry, TrainingHistory};

/// Trains `y = w * x + b` by full-batch gradient descent from `w = b = 0`.
///
/// ```
/// use linreg_rs::trainer::UnivariateTrainer;
///
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [3.0, 5.0, 7.0, 9.0];
/// let (model, history) = UnivariateTrainer::new(0.05, 5000).fit(&x, &y).unwrap();
/// assert!((model.weight - 2.0).abs() < 1e-6);
/// assert!((model.bias - 1.0).abs() < 1e-6);
/// assert_eq!(history.len(), 5000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnivariateTrainer {
    pub learning_rate: f64,
    pub iterations: usize,
    /// Log the per-iteration cost at `info` instead of `trace`.
    pub verbose: bool,
}

impl UnivariateTrainer {
    pub fn new(learning_rate: f64, iterations: usize) -> Self {
        Self {
            learning_rate,
            iterations,
            verbose: false,
        }
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn from_config(config: &TrainingConfig) -> Self {
        Self::new(config.learning_rate, config.iterations).verbose(config.verbose)
    }

    /// Runs exactly `iterations` updates and returns the model plus the trace.
    ///
    /// # Errors
    /// `InvalidHyperparameter`, `EmptyDataset` for empty `x`, `DimensionMismatch`
    /// if `x` and `y` differ in length.
    pub fn fit(&self, x: &[f64], y: &[f64]) -> Result<(UnivariateModel, TrainingHistory)> {
        TrainingConfig::new(self.learning_rate, self.iterations).validate()?;
        if x.is_empty() {
            return Err(LinRegError::EmptyDataset("cannot train on zero samples".into()));
        }
        if x.len() != y.len() {
            return Err(LinRegError::mismatch("targets", x.len(), y.len()));
        }
        log::debug!(
            "univariate training on {} samples: learning_rate={}, iterations={}",
            x.len(),
            self.learning_rate,
            self.iterations
        );

        let (mut w, mut b) = (0.0, 0.0);
        let mut history = TrainingHistory::with_capacity(self.iterations);
        let (initial_cost, mut dw, mut db) = cost_and_gradient(x, y, w, b);

        for iteration in 1..=self.iterations {
            w += dw * -self.learning_rate;
            b -= db * self.learning_rate;

            let (cost, next_dw, next_db) = cost_and_gradient(x, y, w, b);
            dw = next_dw;
            db = next_db;

            if self.verbose {
                log::info!("iteration {iteration}: cost = {cost}");
            } else {
                log::trace!("iteration {iteration}: cost = {cost}");
            }
            history.push(HistoryEntry {
                iteration,
                cost,
                weights: vec![w],
                bias: b,
            });
        }

        log::debug!(
            "univariate training finished: cost {initial_cost} -> {:?}",
            history.final_cost()
        );
        Ok((UnivariateModel::new(w, b), history))
    }
}

/// `(J, ∂J/∂w, ∂J/∂b)` at `(w, b)`.
fn cost_and_gradient(x: &[f64], y: &[f64], w: f64, b: f64) -> (f64, f64, f64) {
    let m = x.len() as f64;
    let inv_m = 1.0 / m;
    let (mut sq, mut dw, mut db) = (0.0, 0.0, 0.0);
    for (&xi, &yi) in x.iter().zip(y) {
        let residual = (0.0 + xi * w) + b - yi;
        sq += residual * residual;
        let g = residual * inv_m;
        dw += xi * g;
        db += g;
    }
    (sq / (2.0 * m), dw, db)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_and_gradient_at_zero() {
        // residuals [-2, -4], m = 2
        let (cost, dw, db) = cost_and_gradient(&[1.0, 2.0], &[2.0, 4.0], 0.0, 0.0);
        assert_eq!(cost, 20.0 / 4.0);
        assert_eq!(dw, -5.0);
        assert_eq!(db, -3.0);
    }

    #[test]
    fn test_fit_recovers_line() {
        let x: Vec<f64> = (0..20).map(|i| i as f64 / 10.0 - 1.0).collect();
        let y: Vec<f64> = x.iter().map(|v| -3.0 * v + 0.5).collect();
        let (model, history) = UnivariateTrainer::new(0.5, 2000).fit(&x, &y).unwrap();
        assert!((model.weight + 3.0).abs() < 1e-6);
        assert!((model.bias - 0.5).abs() < 1e-6);
        assert!(history.costs()[0] > history.final_cost().unwrap());
    }

    #[test]
    fn test_history_matches_returned_model() {
        let (model, history) = UnivariateTrainer::new(0.1, 3)
            .fit(&[1.0, 2.0], &[1.0, 2.0])
            .unwrap();
        let last = history.entries().last().unwrap();
        assert_eq!(last.iteration, 3);
        assert_eq!(last.weights, vec![model.weight]);
        assert_eq!(last.bias, model.bias);
    }

    #[test]
    fn test_from_config_carries_verbose() {
        let config = TrainingConfig {
            verbose: true,
            ..TrainingConfig::new(0.1, 50)
        };
        let trainer = UnivariateTrainer::from_config(&config);
        assert!(trainer.verbose);
        assert_eq!(trainer, UnivariateTrainer::new(0.1, 50).verbose(true));

        let (x, y) = ([1.0, 2.0, 3.0], [2.0, 4.1, 5.9]);
        let quiet = UnivariateTrainer::new(0.1, 50).fit(&x, &y).unwrap();
        assert_eq!(trainer.fit(&x, &y).unwrap(), quiet);
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        let t = UnivariateTrainer::new(0.1, 10);
        assert!(matches!(
            t.fit(&[], &[]),
            Err(LinRegError::EmptyDataset(_))
        ));
        assert!(matches!(
            t.fit(&[1.0, 2.0], &[1.0]),
            Err(LinRegError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            UnivariateTrainer::new(-0.1, 10).fit(&[1.0], &[1.0]),
            Err(LinRegError::InvalidHyperparameter(_))
        ));
        assert!(matches!(
            UnivariateTrainer::new(0.1, 0).fit(&[1.0], &[1.0]),
            Err(LinRegError::InvalidHyperparameter(_))
        ));
    }
}
