use super::Backend;
use ndarray::{Array1, Array2, Axis};

/// Tensor backend implementation using the `ndarray` crate.
///
/// # Type mappings
/// - `Tensor1D`: `ndarray::Array1<f64>`
/// - `Tensor2D`: [`NdarrayTensor2D`] wrapper around `ndarray::Array2<f64>`
///
/// Matrix-vector products delegate to `ndarray`'s `dot`, whose summation order is
/// not guaranteed to match [`super::CpuBackend`]; results agree within
/// floating-point tolerance.
#[derive(Clone, Debug, Copy)]
pub struct NdarrayBackend;

/// Wrapper type for 2D tensors using ndarray's `Array2<f64>`.
///
/// # Example
/// ```
/// use linreg_rs::backend::NdarrayTensor2D;
/// let tensor = NdarrayTensor2D::from(&[
///     vec![1.0f64, 2.0f64, 3.0f64],
///     vec![4.0f64, 5.0f64, 6.0f64],
/// ][..]);
/// assert_eq!(tensor.0.shape(), &[2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct NdarrayTensor2D(pub Array2<f64>);

impl From<&[Vec<f64>]> for NdarrayTensor2D {
    /// Converts a slice of row vectors into a 2D tensor.
    ///
    /// # Panics
    /// Panics if rows have inconsistent lengths.
    fn from(x: &[Vec<f64>]) -> Self {
        let rows = x.len();
        if rows == 0 {
            return NdarrayTensor2D(Array2::zeros((0, 0)));
        }
        let cols = x[0].len();
        assert!(
            x.iter().all(|r| r.len() == cols),
            "All rows must have same length"
        );
        NdarrayTensor2D(Array2::from_shape_fn((rows, cols), |(i, j)| x[i][j]))
    }
}

impl From<Array2<f64>> for NdarrayTensor2D {
    fn from(a: Array2<f64>) -> Self {
        NdarrayTensor2D(a)
    }
}

impl Backend for NdarrayBackend {
    type Tensor1D = Array1<f64>;
    type Tensor2D = NdarrayTensor2D;

    fn zeros_1d(len: usize) -> Self::Tensor1D {
        Array1::zeros(len)
    }

    fn zeros_2d(rows: usize, cols: usize) -> Self::Tensor2D {
        NdarrayTensor2D(Array2::zeros((rows, cols)))
    }

    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        Array1::from_vec(data)
    }

    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D {
        assert_eq!(data.len(), rows * cols, "Inconsistent shape");
        NdarrayTensor2D(Array2::from_shape_fn((rows, cols), |(i, j)| {
            data[i * cols + j]
        }))
    }

    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a + b
    }

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a - b
    }

    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        a * b
    }

    fn mul_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D {
        t * s
    }

    fn add_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D {
        t + s
    }

    fn sum_all_1d(t: &Self::Tensor1D) -> f64 {
        t.iter().fold(0.0, |acc, x| acc + x)
    }

    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.to_vec()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }

    fn shape(t: &Self::Tensor2D) -> (usize, usize) {
        t.0.dim()
    }

    fn row_2d(t: &Self::Tensor2D, idx: usize) -> Vec<f64> {
        t.0.row(idx).to_vec()
    }

    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.0.ncols(), x.len(), "Matrix cols must equal vector length");
        a.0.dot(x)
    }

    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.0.nrows(), x.len(), "Matrix rows must equal vector length");
        a.0.t().dot(x)
    }

    fn col_mean_2d(t: &Self::Tensor2D) -> Self::Tensor1D {
        t.0.mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(t.0.ncols()))
    }

    fn col_std_2d(t: &Self::Tensor2D, ddof: usize) -> Self::Tensor1D {
        if t.0.nrows() <= ddof {
            return Array1::zeros(t.0.ncols());
        }
        t.0.std_axis(Axis(0), ddof as f64)
    }

    fn broadcast_sub_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        NdarrayTensor2D(&t.0 - &v.view().insert_axis(Axis(0)))
    }

    fn broadcast_div_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        NdarrayTensor2D(&t.0 / &v.view().insert_axis(Axis(0)))
    }

    fn broadcast_mul_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        NdarrayTensor2D(&t.0 * &v.view().insert_axis(Axis(0)))
    }

    fn broadcast_add_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        NdarrayTensor2D(&t.0 + &v.view().insert_axis(Axis(0)))
    }
}
