//! Dataset abstractions for linear regression.
//!
//! This module provides a [`Dataset`] trait for uniform access to training data,
//! an in-memory implementation, a CSV reader and a synthetic data generator.
//!
//! # Core Concepts
//!
//! - **Dataset**: A source of `(X, y)` pairs where `X` is a feature matrix of shape
//!   `(n_samples, n_features)` and `y` is a target vector of shape `(n_samples,)`.
//! - **Backend**: Tensor implementation defined by the [`Backend`] trait.
//!
//! # Example
//!
//! ```rust
//! use linreg_rs::dataset::{Dataset, InMemoryDataset};
//! use linreg_rs::backend::CpuBackend;
//!
//! let x = vec![vec![1.0], vec![2.0]];
//! let y = vec![0.0, 1.0];
//! let dataset = InMemoryDataset::new(x, y).unwrap();
//!
//! let (x, y) = dataset.full_batch::<CpuBackend>().unwrap();
//! assert_eq!(x.shape(), (2, 1));
//! assert_eq!(y.to_vec(), vec![0.0, 1.0]);
//! ```

use crate::backend::{Backend, Tensor1D, Tensor2D};
use crate::error::Result;
use std::ops::Range;

pub mod csv;
pub mod memory;
pub mod synthetic;

pub use self::csv::{read_csv, CsvOptions};
pub use self::memory::InMemoryDataset;

/// Abstract interface for a regression dataset.
///
/// Defines a contract for loading data in `(X, y)` format where:
/// - `X`: Feature matrix with shape `(n_samples, n_features)`
/// - `y`: Target vector with shape `(n_samples,)`
///
/// Row `i` of `X` always pairs with element `i` of `y`.
pub trait Dataset {
    /// Number of samples.
    fn len(&self) -> usize;

    /// Width of every feature row.
    fn n_features(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Loads samples `[range.start, range.end)` as tensors.
    ///
    /// # Errors
    /// `DimensionMismatch` if the range runs past the end of the dataset.
    fn get_batch<B: Backend>(&self, range: Range<usize>) -> Result<(Tensor2D<B>, Tensor1D<B>)>;

    /// Loads every sample, in row order.
    fn full_batch<B: Backend>(&self) -> Result<(Tensor2D<B>, Tensor1D<B>)> {
        self.get_batch(0..self.len())
    }
}
