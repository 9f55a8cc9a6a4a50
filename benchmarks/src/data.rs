use linreg_rs::dataset::synthetic::linear_samples;
use linreg_rs::dataset::InMemoryDataset;
use linreg_rs::{LinRegError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Coefficients of the synthetic housing model used by the benchmarks.
pub const COEFFICIENTS: [f64; 4] = [0.15, 12.0, 6.0, -0.8];
pub const INTERCEPT: f64 = 40.0;

/// `n` seeded samples with four features on `[0, 100]` and uniform noise of 2.
pub fn housing(n: usize, seed: u64) -> Result<InMemoryDataset> {
    let mut rng = StdRng::seed_from_u64(seed);
    linear_samples(&mut rng, n, &COEFFICIENTS, INTERCEPT, 0.0..=100.0, 2.0)
}

/// Splits off the first `ratio` of rows for training, the rest for testing.
pub fn split(dataset: &InMemoryDataset, ratio: f64) -> Result<(InMemoryDataset, InMemoryDataset)> {
    let n = dataset.features().len();
    if n < 2 {
        return Err(LinRegError::EmptyDataset("need at least two rows to split".into()));
    }
    let cut = ((n as f64 * ratio) as usize).clamp(1, n - 1);
    let (x, y) = (dataset.features(), dataset.targets());
    Ok((
        InMemoryDataset::new(x[..cut].to_vec(), y[..cut].to_vec())?,
        InMemoryDataset::new(x[cut..].to_vec(), y[cut..].to_vec())?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use linreg_rs::dataset::Dataset;

    #[test]
    fn test_split_sizes() {
        let ds = housing(10, 1).unwrap();
        let (train, test) = split(&ds, 0.8).unwrap();
        assert_eq!(train.len(), 8);
        assert_eq!(test.len(), 2);
        assert_eq!(train.n_features(), COEFFICIENTS.len());
    }

    #[test]
    fn test_housing_is_seeded() {
        assert_eq!(housing(5, 3).unwrap(), housing(5, 3).unwrap());
    }
}
