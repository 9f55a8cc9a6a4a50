use super::Backend;

/// Reference backend over plain `Vec<f64>` storage.
///
/// Every reduction runs sequentially in a fixed order (see the module docs), so
/// two runs over the same inputs produce bit-identical results.
#[derive(Clone, Debug, Copy)]
pub struct CpuBackend;

/// Row-major 2D tensor: `(data, rows, cols)`.
#[derive(Debug, Clone, PartialEq)]
pub struct CpuTensor2D(pub Vec<f64>, pub usize, pub usize);

impl CpuTensor2D {
    pub fn new(data: Vec<f64>, rows: usize, cols: usize) -> Self {
        assert_eq!(data.len(), rows * cols, "Inconsistent shape");
        Self(data, rows, cols)
    }

    #[inline]
    fn row(&self, idx: usize) -> &[f64] {
        let start = idx * self.2;
        &self.0[start..start + self.2]
    }

    fn map_rows<F>(&self, v: &[f64], op: F) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        assert_eq!(self.2, v.len(), "Broadcast vector length must equal cols");
        let data = self
            .0
            .chunks(self.2.max(1))
            .flat_map(|row| row.iter().zip(v.iter()).map(|(&a, &b)| op(a, b)))
            .collect();
        CpuTensor2D::new(data, self.1, self.2)
    }
}

impl From<&[Vec<f64>]> for CpuTensor2D {
    fn from(x: &[Vec<f64>]) -> Self {
        if x.is_empty() {
            return CpuTensor2D::new(Vec::new(), 0, 0);
        }
        let rows = x.len();
        let cols = x[0].len();
        assert!(
            x.iter().all(|row| row.len() == cols),
            "All rows must have same length"
        );
        let data: Vec<f64> = x.iter().flat_map(|row| row.iter()).copied().collect();
        CpuTensor2D::new(data, rows, cols)
    }
}

impl Backend for CpuBackend {
    type Tensor1D = Vec<f64>;
    type Tensor2D = CpuTensor2D;

    fn zeros_1d(len: usize) -> Self::Tensor1D {
        vec![0.; len]
    }

    fn zeros_2d(rows: usize, cols: usize) -> Self::Tensor2D {
        CpuTensor2D::new(vec![0.; rows * cols], rows, cols)
    }

    fn from_vec_1d(data: Vec<f64>) -> Self::Tensor1D {
        data
    }

    fn from_vec_2d(data: Vec<f64>, rows: usize, cols: usize) -> Self::Tensor2D {
        CpuTensor2D::new(data, rows, cols)
    }

    fn add_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.len(), b.len(), "Length mismatch");
        a.iter().zip(b.iter()).map(|(a, b)| a + b).collect()
    }

    fn sub_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.len(), b.len(), "Length mismatch");
        a.iter().zip(b.iter()).map(|(a, b)| a - b).collect()
    }

    fn mul_1d(a: &Self::Tensor1D, b: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.len(), b.len(), "Length mismatch");
        a.iter().zip(b.iter()).map(|(a, b)| a * b).collect()
    }

    fn mul_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D {
        t.iter().map(|x| x * s).collect()
    }

    fn add_scalar_1d(t: &Self::Tensor1D, s: f64) -> Self::Tensor1D {
        t.iter().map(|x| x + s).collect()
    }

    fn sum_all_1d(t: &Self::Tensor1D) -> f64 {
        t.iter().fold(0.0, |acc, x| acc + x)
    }

    fn to_vec_1d(t: &Self::Tensor1D) -> Vec<f64> {
        t.clone()
    }

    fn len_1d(t: &Self::Tensor1D) -> usize {
        t.len()
    }

    fn shape(t: &Self::Tensor2D) -> (usize, usize) {
        (t.1, t.2)
    }

    fn row_2d(t: &Self::Tensor2D, idx: usize) -> Vec<f64> {
        assert!(idx < t.1, "Row index out of bounds");
        t.row(idx).to_vec()
    }

    fn matvec(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.2, x.len(), "Matrix cols must equal vector length");
        (0..a.1)
            .map(|i| {
                a.row(i)
                    .iter()
                    .zip(x.iter())
                    .fold(0.0, |acc, (aij, xj)| acc + aij * xj)
            })
            .collect()
    }

    fn matvec_transposed(a: &Self::Tensor2D, x: &Self::Tensor1D) -> Self::Tensor1D {
        assert_eq!(a.1, x.len(), "Matrix rows must equal vector length");
        let mut out = vec![0.0; a.2];
        for (i, xi) in x.iter().enumerate() {
            for (acc, aij) in out.iter_mut().zip(a.row(i)) {
                *acc += aij * xi;
            }
        }
        out
    }

    fn col_mean_2d(t: &Self::Tensor2D) -> Self::Tensor1D {
        let (rows, cols) = (t.1, t.2);
        if rows == 0 {
            return vec![0.0; cols];
        }
        let mut sums = vec![0.0; cols];
        for i in 0..rows {
            for (acc, v) in sums.iter_mut().zip(t.row(i)) {
                *acc += v;
            }
        }
        sums.into_iter().map(|s| s / rows as f64).collect()
    }

    fn col_std_2d(t: &Self::Tensor2D, ddof: usize) -> Self::Tensor1D {
        let (rows, cols) = (t.1, t.2);
        if rows <= ddof {
            return vec![0.0; cols];
        }
        let means = Self::col_mean_2d(t);
        let mut var_sums = vec![0.0; cols];
        for i in 0..rows {
            for ((acc, v), m) in var_sums.iter_mut().zip(t.row(i)).zip(means.iter()) {
                let diff = v - m;
                *acc += diff * diff;
            }
        }
        let divisor = (rows - ddof) as f64;
        var_sums
            .into_iter()
            .map(|s| (s / divisor).sqrt())
            .collect()
    }

    fn broadcast_sub_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        t.map_rows(v, |a, b| a - b)
    }

    fn broadcast_div_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        t.map_rows(v, |a, b| a / b)
    }

    fn broadcast_mul_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        t.map_rows(v, |a, b| a * b)
    }

    fn broadcast_add_1d_to_2d_rows(t: &Self::Tensor2D, v: &Self::Tensor1D) -> Self::Tensor2D {
        t.map_rows(v, |a, b| a + b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> CpuTensor2D {
        // [[1, 2], [3, 4], [5, 6]]
        CpuTensor2D::new(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3, 2)
    }

    #[test]
    #[should_panic(expected = "Inconsistent shape")]
    fn test_new_rejects_inconsistent_shape() {
        CpuTensor2D::new(vec![1.0, 2.0, 3.0], 2, 2);
    }

    #[test]
    fn test_from_nested_vec() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
        let t = CpuTensor2D::from(&rows[..]);
        assert_eq!(CpuBackend::shape(&t), (2, 2));
        assert_eq!(CpuBackend::row_2d(&t, 1), vec![3.0, 4.0]);
    }

    #[test]
    fn test_matvec() {
        let y = CpuBackend::matvec(&matrix(), &vec![1.0, -1.0]);
        assert_eq!(y, vec![-1.0, -1.0, -1.0]);
    }

    #[test]
    fn test_matvec_transposed() {
        // [[1, 3, 5], [2, 4, 6]] @ [1, 0, 2] = [11, 14]
        let y = CpuBackend::matvec_transposed(&matrix(), &vec![1.0, 0.0, 2.0]);
        assert_eq!(y, vec![11.0, 14.0]);
    }

    #[test]
    fn test_col_mean_and_population_std() {
        let m = CpuBackend::col_mean_2d(&matrix());
        assert_eq!(m, vec![3.0, 4.0]);

        let s = CpuBackend::col_std_2d(&matrix(), 0);
        let expected = (8.0f64 / 3.0).sqrt();
        assert!((s[0] - expected).abs() < 1e-12);
        assert!((s[1] - expected).abs() < 1e-12);
    }

    #[test]
    fn test_col_std_sample() {
        let s = CpuBackend::col_std_2d(&matrix(), 1);
        assert!((s[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_broadcast_ops() {
        let t = matrix();
        let v = vec![1.0, 2.0];
        assert_eq!(
            CpuBackend::broadcast_sub_1d_to_2d_rows(&t, &v).0,
            vec![0.0, 0.0, 2.0, 2.0, 4.0, 4.0]
        );
        assert_eq!(
            CpuBackend::broadcast_div_1d_to_2d_rows(&t, &v).0,
            vec![1.0, 1.0, 3.0, 2.0, 5.0, 3.0]
        );
        assert_eq!(
            CpuBackend::broadcast_mul_1d_to_2d_rows(&t, &v).0,
            vec![1.0, 4.0, 3.0, 8.0, 5.0, 12.0]
        );
        assert_eq!(
            CpuBackend::broadcast_add_1d_to_2d_rows(&t, &v).0,
            vec![2.0, 4.0, 4.0, 6.0, 6.0, 8.0]
        );
    }

    #[test]
    fn test_sum_all_1d_empty_is_zero() {
        assert_eq!(CpuBackend::sum_all_1d(&vec![]), 0.0);
    }
}
