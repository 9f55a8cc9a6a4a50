use crate::backend::Backend;
use crate::error::{LinRegError, Result};
use crate::model::linear::LinearParams;

/// Trait for gradient-based optimizers.
///
/// Optimizers are responsible for updating model parameters based on computed gradients.
/// Training logic (`Trainer`) is decoupled from parameter update logic, so any model can
/// be paired with any optimizer without dynamic dispatch.
///
/// # Type Parameters
/// * `B`: computation backend implementing [`Backend`]
/// * `P`: model parameters type (e.g., [`LinearParams`])
///
/// # Example
/// ```rust
/// use linreg_rs::backend::{CpuBackend, Tensor1D};
/// use linreg_rs::model::LinearParams;
/// use linreg_rs::optimizer::{GradientDescent, Optimizer};
///
/// let params = LinearParams {
///     weights: Tensor1D::<CpuBackend>::new(vec![1.0, 2.0, 3.0]),
///     bias: 0.5,
/// };
/// let gradients = LinearParams {
///     weights: Tensor1D::<CpuBackend>::new(vec![10.0, -20.0, 0.0]),
///     bias: -1.0,
/// };
/// let gd = GradientDescent::new(0.1).unwrap();
/// let updated = gd.step(&params, &gradients);
/// assert_eq!(updated.weights.to_vec(), vec![0.0, 4.0, 3.0]);
/// assert_eq!(updated.bias, 0.6);
/// ```
pub trait Optimizer<B: Backend, P> {
    /// Performs an optimization step:
    /// ```text
    /// params_new = params - learning_rate * gradients
    /// ```
    ///
    /// Every component of `params_new` is computed from the same pre-update
    /// `params` and `gradients`, so the update is simultaneous.
    ///
    /// Does not mutate its inputs; returns a new owned parameter set.
    fn step(&self, params: &P, gradients: &P) -> P;

    /// Step size used by [`Optimizer::step`].
    fn learning_rate(&self) -> f64;
}

/// Full-batch gradient descent with a fixed learning rate.
///
/// ```text
/// θ ← θ - η · ∇J(θ)
/// ```
///
/// Stateless: no momentum, no schedule, no clamping. A learning rate that is too
/// large makes training diverge; that is reported through the cost, not caught here.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    lr: f64,
}

impl GradientDescent {
    /// Creates an optimizer with learning rate `lr`.
    ///
    /// # Errors
    /// [`LinRegError::InvalidHyperparameter`] unless `lr` is finite and `> 0`.
    pub fn new(lr: f64) -> Result<Self> {
        if !lr.is_finite() || lr <= 0.0 {
            return Err(LinRegError::InvalidHyperparameter(format!(
                "learning_rate must be finite and > 0, got {lr}"
            )));
        }
        Ok(Self { lr })
    }
}

impl<B: Backend> Optimizer<B, LinearParams<B>> for GradientDescent {
    fn step(&self, params: &LinearParams<B>, grads: &LinearParams<B>) -> LinearParams<B> {
        // weights_new = weights + (-lr) * grad_weights
        let weights = params.weights.add(&grads.weights.scale(-self.lr));
        let bias = params.bias - grads.bias * self.lr;
        LinearParams { weights, bias }
    }

    fn learning_rate(&self) -> f64 {
        self.lr
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{CpuBackend, Tensor1D};

    fn params(weights: Vec<f64>, bias: f64) -> LinearParams<CpuBackend> {
        LinearParams {
            weights: Tensor1D::new(weights),
            bias,
        }
    }

    fn step(gd: &GradientDescent, p: &LinearParams<CpuBackend>, g: &LinearParams<CpuBackend>) -> LinearParams<CpuBackend> {
        Optimizer::<CpuBackend, _>::step(gd, p, g)
    }

    #[test]
    fn test_new_rejects_invalid_learning_rates() {
        for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(
                matches!(
                    GradientDescent::new(lr),
                    Err(LinRegError::InvalidHyperparameter(_))
                ),
                "lr = {lr} should be rejected"
            );
        }
    }

    #[test]
    fn test_learning_rate_accessor() {
        let gd = GradientDescent::new(0.001).unwrap();
        assert_eq!(Optimizer::<CpuBackend, LinearParams<CpuBackend>>::learning_rate(&gd), 0.001);
    }

    #[test]
    fn test_step_correctness() {
        let gd = GradientDescent::new(0.1).unwrap();
        let updated = step(&gd, &params(vec![2.0, 3.0], 1.0), &params(vec![1.0, -1.0], 0.5));

        // weights: [2.0 - 0.1*1.0, 3.0 - 0.1*(-1.0)] = [1.9, 3.1]
        assert_eq!(updated.weights.to_vec(), vec![1.9, 3.1]);
        // bias: 1.0 - 0.1*0.5
        assert!((updated.bias - 0.95).abs() < 1e-12);
    }

    #[test]
    fn test_step_zero_gradients() {
        let gd = GradientDescent::new(0.1).unwrap();
        let p = params(vec![1.0, 2.0], 0.5);
        let updated = step(&gd, &p, &params(vec![0.0, 0.0], 0.0));
        assert_eq!(updated.weights.to_vec(), vec![1.0, 2.0]);
        assert_eq!(updated.bias, 0.5);
    }

    #[test]
    fn test_step_very_large_gradients() {
        let gd = GradientDescent::new(0.01).unwrap();
        let updated = step(&gd, &params(vec![0.0], 0.0), &params(vec![1000.0], 1000.0));
        assert_eq!(updated.weights.to_vec(), vec![-10.0]);
        assert_eq!(updated.bias, -10.0);
    }

    #[test]
    fn test_step_does_not_mutate_inputs() {
        let gd = GradientDescent::new(0.1).unwrap();
        let p = params(vec![1.0, 2.0], 0.5);
        let g = params(vec![0.5, 0.3], 0.1);
        let _ = step(&gd, &p, &g);
        assert_eq!(p.to_parts(), (vec![1.0, 2.0], 0.5));
        assert_eq!(g.to_parts(), (vec![0.5, 0.3], 0.1));
    }
}
