use super::tensor1d::Tensor1D;
use crate::backend::Backend;
use crate::error::{LinRegError, Result};
use std::marker::PhantomData;

/// Backend-typed 2D tensor with row-major semantics: one row per sample, one
/// column per feature.
#[derive(Clone, Debug)]
pub struct Tensor2D<B: Backend> {
    pub(crate) data: B::Tensor2D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor2D<B> {
    /// Creates a tensor from row-major data.
    ///
    /// # Panics
    /// If `data.len() != rows * cols`.
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        Self {
            data: B::from_vec_2d(data, rows, cols),
            backend: PhantomData,
        }
    }

    /// Builds a tensor from per-sample rows, checking that every row has the
    /// width of the first one.
    ///
    /// An empty slice yields a `(0, 0)` tensor.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let n_cols = rows.first().map(Vec::len).unwrap_or(0);
        for row in rows {
            if row.len() != n_cols {
                return Err(LinRegError::mismatch("row width", n_cols, row.len()));
            }
        }
        let flat = rows.iter().flat_map(|r| r.iter()).copied().collect();
        Ok(Self::new(flat, rows.len(), n_cols))
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: B::zeros_2d(rows, cols),
            backend: PhantomData,
        }
    }

    /// Returns `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        B::shape(&self.data)
    }

    pub fn rows(&self) -> usize {
        self.shape().0
    }

    pub fn cols(&self) -> usize {
        self.shape().1
    }

    /// Copies row `idx` to the host.
    ///
    /// # Panics
    /// If `idx >= rows`.
    pub fn row(&self, idx: usize) -> Vec<f64> {
        B::row_2d(&self.data, idx)
    }

    /// Copies every row to the host, preserving row order.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.rows()).map(|i| self.row(i)).collect()
    }

    /// `X · w`
    pub fn dot(&self, other: &Tensor1D<B>) -> Tensor1D<B> {
        Tensor1D {
            data: B::matvec(&self.data, &other.data),
            backend: PhantomData,
        }
    }

    /// `Xᵀ · v`
    pub fn tdot(&self, other: &Tensor1D<B>) -> Tensor1D<B> {
        Tensor1D {
            data: B::matvec_transposed(&self.data, &other.data),
            backend: PhantomData,
        }
    }

    /// Per-column mean.
    pub fn col_mean(&self) -> Tensor1D<B> {
        Tensor1D {
            data: B::col_mean_2d(&self.data),
            backend: PhantomData,
        }
    }

    /// Per-column standard deviation with `ddof` delta degrees of freedom.
    pub fn col_std(&self, ddof: usize) -> Tensor1D<B> {
        Tensor1D {
            data: B::col_std_2d(&self.data, ddof),
            backend: PhantomData,
        }
    }

    /// Subtracts `v` from every row.
    pub fn sub_row(&self, v: &Tensor1D<B>) -> Self {
        Self {
            data: B::broadcast_sub_1d_to_2d_rows(&self.data, &v.data),
            backend: PhantomData,
        }
    }

    /// Divides every row element-wise by `v`.
    pub fn div_row(&self, v: &Tensor1D<B>) -> Self {
        Self {
            data: B::broadcast_div_1d_to_2d_rows(&self.data, &v.data),
            backend: PhantomData,
        }
    }

    /// Multiplies every row element-wise by `v`.
    pub fn mul_row(&self, v: &Tensor1D<B>) -> Self {
        Self {
            data: B::broadcast_mul_1d_to_2d_rows(&self.data, &v.data),
            backend: PhantomData,
        }
    }

    /// Adds `v` to every row.
    pub fn add_row(&self, v: &Tensor1D<B>) -> Self {
        Self {
            data: B::broadcast_add_1d_to_2d_rows(&self.data, &v.data),
            backend: PhantomData,
        }
    }
}
