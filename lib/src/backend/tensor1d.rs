use crate::backend::Backend;
use std::marker::PhantomData;

/// Backend-typed 1D tensor.
///
/// Wraps a backend's native 1D representation (`B::Tensor1D`) and carries the
/// backend as a phantom type, so tensors from different backends cannot be mixed.
///
/// # Example
/// ```
/// use linreg_rs::backend::{CpuBackend, Tensor1D};
///
/// let x: Tensor1D<CpuBackend> = Tensor1D::new(vec![1.0, 2.0, 3.0]);
/// assert_eq!(x.len(), 3);
///
/// let y = x.scale(2.0);
/// assert_eq!(y.to_vec(), vec![2.0, 4.0, 6.0]);
/// ```
#[derive(Clone, Debug)]
pub struct Tensor1D<B: Backend> {
    pub(crate) data: B::Tensor1D,
    pub(crate) backend: PhantomData<B>,
}

impl<B: Backend> Tensor1D<B> {
    /// Creates a new 1D tensor from owned values.
    pub fn new(data: Vec<f64>) -> Self {
        Self {
            data: B::from_vec_1d(data),
            backend: PhantomData,
        }
    }

    /// Creates a 1D tensor filled with zeros of specified length.
    pub fn zeros(len: usize) -> Self {
        Self {
            data: B::zeros_1d(len),
            backend: PhantomData,
        }
    }

    /// Element-wise `self + other`.
    ///
    /// # Panics
    /// Panics if tensors have different lengths.
    pub fn add(&self, other: &Self) -> Self {
        Self {
            data: B::add_1d(&self.data, &other.data),
            backend: PhantomData,
        }
    }

    /// Element-wise `self - other`.
    ///
    /// # Panics
    /// Panics if tensors have different lengths.
    pub fn sub(&self, other: &Self) -> Self {
        Self {
            data: B::sub_1d(&self.data, &other.data),
            backend: PhantomData,
        }
    }

    /// Element-wise `self * other`.
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            data: B::mul_1d(&self.data, &other.data),
            backend: PhantomData,
        }
    }

    /// Multiplies every element by `s`.
    pub fn scale(&self, s: f64) -> Self {
        Self {
            data: B::mul_scalar_1d(&self.data, s),
            backend: PhantomData,
        }
    }

    /// Adds `s` to every element.
    pub fn add_scalar(&self, s: f64) -> Self {
        Self {
            data: B::add_scalar_1d(&self.data, s),
            backend: PhantomData,
        }
    }

    /// Sum of all elements.
    pub fn sum(&self) -> f64 {
        B::sum_all_1d(&self.data)
    }

    /// Dot product `Σᵢ selfᵢ * otherᵢ`.
    ///
    /// # Example
    /// ```
    /// use linreg_rs::backend::{CpuBackend, Tensor1D};
    ///
    /// let a = Tensor1D::<CpuBackend>::new(vec![1.0, 2.0, 3.0]);
    /// let b = Tensor1D::<CpuBackend>::new(vec![4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0);
    /// ```
    pub fn dot(&self, other: &Self) -> f64 {
        B::sum_all_1d(&B::mul_1d(&self.data, &other.data))
    }

    /// Converts the tensor to a host `Vec<f64>`.
    pub fn to_vec(&self) -> Vec<f64> {
        B::to_vec_1d(&self.data)
    }

    pub fn len(&self) -> usize {
        B::len_1d(&self.data)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<B: Backend> From<Vec<f64>> for Tensor1D<B> {
    fn from(data: Vec<f64>) -> Self {
        Tensor1D::new(data)
    }
}

impl<B: Backend> From<&[f64]> for Tensor1D<B> {
    fn from(data: &[f64]) -> Self {
        Tensor1D::new(data.to_vec())
    }
}
