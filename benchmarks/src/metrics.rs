/// Metrics for evaluating regression models.
pub struct Metrics;

impl Metrics {
    /// Mean Squared Error: `mean((y_true - y_pred)^2)`.
    ///
    /// Not halved, unlike the training cost.
    pub fn mse(y_true: &[f64], y_pred: &[f64]) -> f64 {
        assert_eq!(
            y_true.len(),
            y_pred.len(),
            "Arrays must have the same length"
        );

        if y_true.is_empty() {
            return 0.0;
        }

        let sum_sq: f64 = y_true
            .iter()
            .zip(y_pred)
            .map(|(&t, &p)| (t - p).powi(2))
            .sum();

        sum_sq / y_true.len() as f64
    }

    /// Root Mean Squared Error, in the units of the target.
    pub fn rmse(y_true: &[f64], y_pred: &[f64]) -> f64 {
        Self::mse(y_true, y_pred).sqrt()
    }

    /// Mean Absolute Error: `mean(|y_true - y_pred|)`.
    pub fn mae(y_true: &[f64], y_pred: &[f64]) -> f64 {
        assert_eq!(
            y_true.len(),
            y_pred.len(),
            "Arrays must have the same length"
        );

        if y_true.is_empty() {
            return 0.0;
        }

        let sum_abs: f64 = y_true.iter().zip(y_pred).map(|(&t, &p)| (t - p).abs()).sum();
        sum_abs / y_true.len() as f64
    }

    /// Coefficient of determination.
    ///
    /// R² = 1 - SS_res / SS_tot. Negative when the model is worse than
    /// predicting the mean.
    pub fn r_squared(y_true: &[f64], y_pred: &[f64]) -> f64 {
        assert_eq!(
            y_true.len(),
            y_pred.len(),
            "Arrays must have the same length"
        );

        if y_true.is_empty() {
            return 0.0;
        }

        let mean_true = y_true.iter().sum::<f64>() / y_true.len() as f64;
        let ss_res: f64 = y_true
            .iter()
            .zip(y_pred)
            .map(|(&t, &p)| (t - p).powi(2))
            .sum();
        let ss_tot: f64 = y_true.iter().map(|&t| (t - mean_true).powi(2)).sum();

        if ss_tot == 0.0 {
            return if ss_res == 0.0 { 1.0 } else { 0.0 };
        }

        1.0 - ss_res / ss_tot
    }

    pub fn calculate_all(y_true: &[f64], y_pred: &[f64]) -> RegressionMetrics {
        RegressionMetrics {
            mse: Self::mse(y_true, y_pred),
            rmse: Self::rmse(y_true, y_pred),
            mae: Self::mae(y_true, y_pred),
            r_squared: Self::r_squared(y_true, y_pred),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct RegressionMetrics {
    pub mse: f64,
    pub rmse: f64,
    pub mae: f64,
    pub r_squared: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mse_perfect() {
        let y = vec![1.0, 2.0, 3.0, 4.0];
        assert_eq!(Metrics::mse(&y, &y), 0.0);
    }

    #[test]
    fn test_mse_and_mae_unit_offset() {
        let y_true = vec![1.0, 2.0, 3.0, 4.0];
        let y_pred = vec![2.0, 3.0, 4.0, 5.0];
        assert!((Metrics::mse(&y_true, &y_pred) - 1.0).abs() < 1e-12);
        assert!((Metrics::mae(&y_true, &y_pred) - 1.0).abs() < 1e-12);
        assert!((Metrics::rmse(&y_true, &y_pred) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_r_squared() {
        let y_true = vec![1.0, 2.0, 3.0, 4.0];
        assert!((Metrics::r_squared(&y_true, &y_true) - 1.0).abs() < 1e-12);
        // Predicting the mean scores zero
        let mean = vec![2.5; 4];
        assert!(Metrics::r_squared(&y_true, &mean).abs() < 1e-12);
    }

    #[test]
    fn test_r_squared_constant_target() {
        let y = vec![2.0, 2.0, 2.0];
        assert_eq!(Metrics::r_squared(&y, &y), 1.0);
        assert_eq!(Metrics::r_squared(&y, &[2.0, 2.0, 3.0]), 0.0);
    }

    #[test]
    fn test_calculate_all() {
        let metrics = Metrics::calculate_all(&[0.0, 2.0], &[1.0, 1.0]);
        assert_eq!(metrics.mse, 1.0);
        assert_eq!(metrics.mae, 1.0);
        assert_eq!(metrics.r_squared, 0.0);
    }
}
