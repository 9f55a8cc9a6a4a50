use std::ops::Range;

use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::dataset::Dataset;
use crate::error::{LinRegError, Result};

/// Owned, validated `(X, y)` pairs held in host memory.
///
/// Construction guarantees at least one row, a fixed row width and one target
/// per row.
#[derive(Debug, Clone, PartialEq)]
pub struct InMemoryDataset {
    x: Vec<Vec<f64>>,
    y: Vec<f64>,
}

impl InMemoryDataset {
    pub fn new(x: Vec<Vec<f64>>, y: Vec<f64>) -> Result<Self> {
        if x.is_empty() {
            return Err(LinRegError::EmptyDataset("dataset has no rows".into()));
        }
        if x.len() != y.len() {
            return Err(LinRegError::mismatch("targets", x.len(), y.len()));
        }
        let n_features = x[0].len();
        if let Some(row) = x.iter().find(|row| row.len() != n_features) {
            return Err(LinRegError::mismatch("feature row", n_features, row.len()));
        }
        Ok(Self { x, y })
    }

    /// Splits each row into features and a target, taking the last column as target.
    ///
    /// ```
    /// use linreg_rs::dataset::{Dataset, InMemoryDataset};
    ///
    /// let ds = InMemoryDataset::from_rows(vec![vec![1.0, 2.0, 10.0], vec![3.0, 4.0, 20.0]]).unwrap();
    /// assert_eq!(ds.n_features(), 2);
    /// assert_eq!(ds.targets(), &[10.0, 20.0]);
    /// ```
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let mut x = Vec::with_capacity(rows.len());
        let mut y = Vec::with_capacity(rows.len());
        for mut row in rows {
            match row.pop() {
                Some(target) => {
                    x.push(row);
                    y.push(target);
                }
                None => {
                    return Err(LinRegError::EmptyDataset(
                        "row has no target column".into(),
                    ))
                }
            }
        }
        Self::new(x, y)
    }

    pub fn features(&self) -> &[Vec<f64>] {
        &self.x
    }

    pub fn targets(&self) -> &[f64] {
        &self.y
    }

    /// Same targets, features replaced (e.g. by their normalized form).
    pub fn with_features(&self, x: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(x, self.y.clone())
    }
}

impl Dataset for InMemoryDataset {
    fn len(&self) -> usize {
        self.x.len()
    }

    fn n_features(&self) -> usize {
        self.x[0].len()
    }

    fn get_batch<B: Backend>(&self, range: Range<usize>) -> Result<(Tensor2D<B>, Tensor1D<B>)> {
        if range.end > self.len() || range.start > range.end {
            return Err(LinRegError::mismatch("batch range", self.len(), range.end));
        }
        let batch_x = &self.x[range.clone()];
        let batch_y = &self.y[range];

        let data = batch_x.iter().flat_map(|row| row.iter()).copied().collect();
        let x_tensor = Tensor2D::<B>::new(data, batch_x.len(), self.n_features());
        let y_tensor = Tensor1D::<B>::new(batch_y.to_vec());

        Ok((x_tensor, y_tensor))
    }
}
