//! # Backend Abstraction
//!
//! This module provides a trait-based abstraction over the numeric storage used by
//! the normalizer, the cost/gradient evaluator and the models, so the same training
//! code runs on a plain-`Vec` implementation or on the `ndarray` crate.
//!
//! ## Design Philosophy
//!
//! - **Minimal trait surface**: only the operations linear regression needs
//!   (constructors, element-wise 1D arithmetic, reductions, matrix-vector products,
//!   column statistics, row broadcasting).
//! - **Zero-cost generics**: backend selection happens at compile time via type
//!   parameters.
//! - **`f64` everywhere**: all scalars are double precision.
//! - **Feature-gated implementations**: `cpu` (default) and `ndarray`.
//!
//! ## Available Backends
//!
//! | Backend          | Feature   | Use Case                                |
//! |------------------|-----------|-----------------------------------------|
//! | `CpuBackend`     | `cpu`     | Default, deterministic reduction order  |
//! | `NdarrayBackend` | `ndarray` | Interop with the `ndarray` ecosystem    |
//!
//! ## Reduction order
//!
//! `CpuBackend` is the reference implementation. `matvec` sums each row left to
//! right over columns starting from `0.0`; `matvec_transposed`, `col_mean_2d` and
//! `col_std_2d` accumulate each column over rows in ascending row index. Other
//! backends must agree with it within floating-point tolerance.
//!
//! ## Example
//!
//! ```rust
//! use linreg_rs::backend::{CpuBackend, Tensor1D, Tensor2D};
//!
//! let x: Tensor2D<CpuBackend> = Tensor2D::new(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
//! let w: Tensor1D<CpuBackend> = Tensor1D::new(vec![0.5, 0.5]);
//!
//! let y = x.dot(&w);
//! assert_eq!(y.to_vec(), vec![1.5, 3.5]);
//! ```

use std::fmt::Debug;

#[cfg(feature = "cpu")]
pub mod cpu;
#[cfg(feature = "cpu")]
/// Pure-Rust CPU backend implementation with zero external dependencies.
pub use cpu::{CpuBackend, CpuTensor2D};

#[cfg(feature = "ndarray")]
mod ndarray_backend;
#[cfg(feature = "ndarray")]
/// Backend backed by the `ndarray` crate for ecosystem interoperability.
pub use ndarray_backend::{NdarrayBackend, NdarrayTensor2D};

/// One-dimensional tensor abstraction.
pub mod tensor1d;
/// Two-dimensional tensor abstraction.
pub mod tensor2d;

pub use tensor1d::Tensor1D;
pub use tensor2d::Tensor2D;

/// Abstraction over tensor storage and the operations linear regression needs.
///
/// Shape misuse at this level is a programmer error: checked operations panic via
/// `assert!`. Public APIs higher up validate shapes first and return
/// [`crate::LinRegError::DimensionMismatch`] instead.
pub trait Backend: Clone + Copy + Debug + Send + Sync + 'static {
    /// One-dimensional tensor type.
    type Tensor1D: Clone + Debug + Send + Sync;

    /// Two-dimensional tensor type (row-major semantics).
    type Tensor2D: Clone + Debug + Send + Sync;

    // --- Constructors ---

    /// Creates a 1D tensor filled with zeros of given length.
    fn zeros_1d(len: usize) -> Self::Tensor1D;

    /// Creates a 2D tensor filled with zeros of given dimensions.
    fn zeros_2d(rows: usize, cols: usize) -> Self::Tensor2D;

    /// Constructs a 1D tensor from owned data.
    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D;

    /// Constructs a 2D tensor from row-major ordered data.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D;

    // --- Element-wise operations (1D) ---

    /// Element-wise addition of two 1D tensors.
    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise subtraction of two 1D tensors.
    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Element-wise multiplication of two 1D tensors.
    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D;

    /// Multiplies each element of tensor by a scalar.
    fn mul_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D;

    /// Adds a scalar to each element of tensor.
    fn add_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D;

    // --- Reductions ---

    /// Sum of all elements, accumulated in index order from `0.0`.
    fn sum_all_1d(t: &Self::Tensor1D) -> f64;

    // --- Data access ---

    /// Converts a 1D tensor to a host `Vec<f64>`.
    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64>;

    /// Returns the number of elements in a 1D tensor.
    fn len_1d(t: &Self::Tensor1D) -> usize;

    /// Returns the shape of a 2D tensor as (rows, cols).
    fn shape(t: &Self::Tensor2D) -> (usize, usize);

    /// Copies row `idx` of a 2D tensor out to the host.
    ///
    /// # Panics
    /// If `idx >= rows`.
    fn row_2d(t: &Self::Tensor2D, idx: usize) -> Vec<f64>;

    // --- Linear algebra ---

    /// Matrix-vector multiplication `y = A * x`, `A` is (m × n), `x` is (n,).
    ///
    /// # Panics
    /// If `A.cols() != x.len()`.
    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D;

    /// Transposed matrix-vector multiplication `y = Aᵀ * x`, `x` is (m,).
    ///
    /// # Panics
    /// If `A.rows() != x.len()`.
    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D;

    // --- Column-wise operations (for preprocessing) ---

    /// Mean of each column. Returns a tensor of length `cols`.
    fn col_mean_2d(t: &Self::Tensor2D) -> Self::Tensor1D;

    /// Standard deviation of each column.
    ///
    /// `ddof` is the delta degrees of freedom: 0 for population std, 1 for sample std.
    fn col_std_2d(t: &Self::Tensor2D, ddof: usize) -> Self::Tensor1D;

    // --- Broadcasting operations ---

    /// `result[i, j] = t[i, j] - v[j]`
    fn broadcast_sub_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D;

    /// `result[i, j] = t[i, j] / v[j]`
    fn broadcast_div_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D;

    /// `result[i, j] = t[i, j] * v[j]`
    fn broadcast_mul_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D;

    /// `result[i, j] = t[i, j] + v[j]`
    fn broadcast_add_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D;
}
