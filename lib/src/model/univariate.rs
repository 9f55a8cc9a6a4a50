/// Fitted single-feature model `y = w * x + b`.
///
/// Produced by [`crate::trainer::UnivariateTrainer`]. Equivalent to a
/// `LinearModel<_, Fitted>` with one feature, without the tensor machinery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnivariateModel {
    pub weight: f64,
    pub bias: f64,
}

impl UnivariateModel {
    pub fn new(weight: f64, bias: f64) -> Self {
        Self { weight, bias }
    }

    pub fn predict(&self, x: f64) -> f64 {
        self.weight * x + self.bias
    }

    /// `(w, b)` snapshot.
    pub fn parameters(&self) -> (f64, f64) {
        (self.weight, self.bias)
    }
}

impl Default for UnivariateModel {
    /// The untrained state: `w = 0`, `b = 0`.
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
