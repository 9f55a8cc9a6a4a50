use crate::backend::{Backend, Tensor1D};

/// A trait for differentiable loss functions used during model training.
///
/// Implementors must define:
/// - How to compute the scalar loss value (the cost `J`).
/// - How to compute the gradient of the loss w.r.t. the model's predictions.
///
/// This gradient is passed to the model's `backward()` method to obtain parameter gradients.
pub trait Loss<B: Backend> {
    type Prediction;
    type Target;

    /// Computes the scalar loss value.
    fn loss(&self, prediction: &Self::Prediction, target: &Self::Target) -> f64;

    /// Computes the gradient of the loss w.r.t. the prediction: ∂L/∂pred.
    /// This is what gets passed to `model.backward()`.
    fn grad_wrt_prediction(
        &self,
        prediction: &Self::Prediction,
        target: &Self::Target,
    ) -> Self::Prediction;
}

/// Halved mean squared error: `J = (1/(2m)) * Σ(pred_i - target_i)^2`
///
/// Gradient w.r.t. prediction: `∂J/∂pred_i = (pred_i - target_i) / m`
///
/// The `1/2` cancels the factor of 2 from differentiating the square.
#[derive(Debug, Clone, Copy, Default)]
pub struct MSELoss;

impl<B: Backend> Loss<B> for MSELoss {
    type Prediction = Tensor1D<B>;
    type Target = Tensor1D<B>;

    fn loss(&self, pred: &Tensor1D<B>, target: &Tensor1D<B>) -> f64 {
        let residual = pred.sub(target);
        residual.dot(&residual) / (2.0 * pred.len() as f64)
    }

    fn grad_wrt_prediction(&self, pred: &Tensor1D<B>, target: &Tensor1D<B>) -> Tensor1D<B> {
        let inv_m = 1.0 / pred.len() as f64;
        pred.sub(target).scale(inv_m)
    }
}
