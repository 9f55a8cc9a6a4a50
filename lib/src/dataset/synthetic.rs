//! Synthetic linear data for demos, tests and benchmarks.
//!
//! The random source is always passed in by the caller; nothing here touches a
//! global seed.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::dataset::InMemoryDataset;
use crate::error::{LinRegError, Result};

/// Draws `n` samples of `y = coefficients · x + intercept + ε`.
///
/// Every feature is uniform on `range`; `ε` is uniform on `[-noise, noise]`.
///
/// ```
/// use linreg_rs::dataset::{synthetic::linear_samples, Dataset};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let ds = linear_samples(&mut rng, 50, &[2.0, 3.0], 1.0, 0.0..=100.0, 0.0).unwrap();
/// assert_eq!(ds.len(), 50);
/// let (x, y) = (&ds.features()[0], ds.targets()[0]);
/// assert!((2.0 * x[0] + 3.0 * x[1] + 1.0 - y).abs() < 1e-9);
/// ```
///
/// # Errors
/// `EmptyDataset` if `n == 0` or `coefficients` is empty,
/// `InvalidHyperparameter` if `noise` is negative or not finite.
pub fn linear_samples<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    coefficients: &[f64],
    intercept: f64,
    range: RangeInclusive<f64>,
    noise: f64,
) -> Result<InMemoryDataset> {
    if coefficients.is_empty() {
        return Err(LinRegError::EmptyDataset("no coefficients".into()));
    }
    if !noise.is_finite() || noise < 0.0 {
        return Err(LinRegError::InvalidHyperparameter(format!(
            "noise must be finite and >= 0, got {noise}"
        )));
    }

    let mut x = Vec::with_capacity(n);
    let mut y = Vec::with_capacity(n);
    for _ in 0..n {
        let row: Vec<f64> = coefficients
            .iter()
            .map(|_| rng.random_range(range.clone()))
            .collect();
        let clean = row
            .iter()
            .zip(coefficients)
            .fold(intercept, |acc, (xi, ci)| acc + xi * ci);
        let eps = if noise > 0.0 {
            rng.random_range(-noise..=noise)
        } else {
            0.0
        };
        x.push(row);
        y.push(clean + eps);
    }
    InMemoryDataset::new(x, y)
}
