//! Cost and gradient evaluation for linear models.
//!
//! For a feature matrix `X` (m × F), targets `y`, weights `w` and bias `b`:
//!
//! ```text
//! pred_i  = w · X[i] + b
//! J       = (1/(2m)) Σ (pred_i - y_i)^2
//! ∂J/∂w_j = (1/m) Σ (pred_i - y_i) X[i][j]
//! ∂J/∂b   = (1/m) Σ (pred_i - y_i)
//! ```
//!
//! Everything here is a pure function of its inputs and always covers the
//! whole batch.

use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::error::{LinRegError, Result};
use crate::loss::{Loss, MSELoss};
use crate::model::{LinearParams, LinearRegression, TrainableModel};

/// Cost and parameter gradients at one point.
#[derive(Debug, Clone)]
pub struct Evaluation<G> {
    pub cost: f64,
    pub gradients: G,
}

/// Evaluates `loss` and its parameter gradients for `model` over the full batch.
pub fn evaluate<B, L, M>(loss: &L, model: &M, x: &Tensor2D<B>, y: &Tensor1D<B>) -> Evaluation<M::Gradients>
where
    B: Backend,
    L: Loss<B, Prediction = Tensor1D<B>, Target = Tensor1D<B>>,
    M: TrainableModel<B, Input = Tensor2D<B>, Prediction = Tensor1D<B>>,
{
    let preds = model.forward(x);
    let cost = loss.loss(&preds, y);
    let grad_preds = loss.grad_wrt_prediction(&preds, y);
    let gradients = model.backward(x, &grad_preds);
    Evaluation { cost, gradients }
}

/// Checks that `x`, `y` and `w` describe one non-empty batch.
pub(crate) fn check_batch(x: &[Vec<f64>], y: &[f64], n_weights: usize) -> Result<()> {
    if x.is_empty() {
        return Err(LinRegError::EmptyDataset(
            "cost evaluation needs at least one row".to_string(),
        ));
    }
    if x.len() != y.len() {
        return Err(LinRegError::mismatch("targets", x.len(), y.len()));
    }
    if let Some(row) = x.iter().find(|row| row.len() != n_weights) {
        return Err(LinRegError::mismatch("feature row", n_weights, row.len()));
    }
    Ok(())
}

fn model_at<B: Backend>(w: &[f64], b: f64) -> LinearRegression<B> {
    let mut model = LinearRegression::<B>::new(w.len());
    model.update_params(&LinearParams {
        weights: Tensor1D::from(w),
        bias: b,
    });
    model
}

fn evaluate_slices<B: Backend>(
    x: &[Vec<f64>],
    y: &[f64],
    w: &[f64],
    b: f64,
) -> Result<Evaluation<LinearParams<B>>> {
    check_batch(x, y, w.len())?;
    let x = Tensor2D::<B>::from_rows(x)?;
    let y = Tensor1D::<B>::from(y);
    Ok(evaluate(&MSELoss, &model_at::<B>(w, b), &x, &y))
}

/// Halved mean squared error `J(w, b)` over rows `x` and targets `y`.
///
/// # Errors
/// `EmptyDataset` if `x` has no rows, `DimensionMismatch` if `x` and `y`
/// disagree in length or a row's width differs from `w.len()`.
#[cfg(feature = "cpu")]
pub fn compute_cost(x: &[Vec<f64>], y: &[f64], w: &[f64], b: f64) -> Result<f64> {
    Ok(evaluate_slices::<crate::backend::CpuBackend>(x, y, w, b)?.cost)
}

/// Analytic gradient `(∂J/∂w, ∂J/∂b)` at `(w, b)`.
///
/// Fails under the same conditions as [`compute_cost`].
#[cfg(feature = "cpu")]
pub fn compute_gradient(x: &[Vec<f64>], y: &[f64], w: &[f64], b: f64) -> Result<(Vec<f64>, f64)> {
    let eval = evaluate_slices::<crate::backend::CpuBackend>(x, y, w, b)?;
    Ok(eval.gradients.to_parts())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data() -> (Vec<Vec<f64>>, Vec<f64>) {
        (
            vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 6.0]],
            vec![1.0, 2.0, 3.0],
        )
    }

    #[test]
    fn test_cost_at_zero_params() {
        let (x, y) = data();
        // (1 + 4 + 9) / (2 * 3)
        let cost = compute_cost(&x, &y, &[0.0, 0.0], 0.0).unwrap();
        assert!((cost - 14.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_cost_perfect_fit() {
        // y = 1*x0 + 0*x1 + 0
        let x = vec![vec![1.0, 9.0], vec![2.0, -3.0]];
        let y = vec![1.0, 2.0];
        assert_eq!(compute_cost(&x, &y, &[1.0, 0.0], 0.0).unwrap(), 0.0);
    }

    #[test]
    fn test_gradient_by_hand() {
        let (x, y) = data();
        // residuals at w = 0, b = 0: [-1, -2, -3]
        // dw0 = (-1*1 + -2*3 + -3*5) / 3 = -22/3
        // dw1 = (-1*2 + -2*4 + -3*6) / 3 = -28/3
        // db  = -6/3
        let (dw, db) = compute_gradient(&x, &y, &[0.0, 0.0], 0.0).unwrap();
        assert!((dw[0] + 22.0 / 3.0).abs() < 1e-12);
        assert!((dw[1] + 28.0 / 3.0).abs() < 1e-12);
        assert!((db + 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        let err = compute_cost(&[], &[], &[1.0], 0.0).unwrap_err();
        assert!(matches!(err, LinRegError::EmptyDataset(_)));
    }

    #[test]
    fn test_target_length_mismatch() {
        let (x, _) = data();
        let err = compute_gradient(&x, &[1.0], &[0.0, 0.0], 0.0).unwrap_err();
        assert!(matches!(
            err,
            LinRegError::DimensionMismatch {
                expected: 3,
                got: 1,
                ..
            }
        ));
    }

    #[test]
    fn test_weight_length_mismatch() {
        let (x, y) = data();
        assert!(compute_cost(&x, &y, &[0.0], 0.0).is_err());
    }

    #[test]
    fn test_evaluate_matches_slice_api() {
        use crate::backend::CpuBackend;
        let (x, y) = data();
        let model = model_at::<CpuBackend>(&[0.5, -0.25], 0.1);
        let eval = evaluate(
            &MSELoss,
            &model,
            &Tensor2D::from_rows(&x).unwrap(),
            &Tensor1D::from(y.as_slice()),
        );
        let cost = compute_cost(&x, &y, &[0.5, -0.25], 0.1).unwrap();
        assert_eq!(eval.cost, cost);
    }
}
