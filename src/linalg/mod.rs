//! Square-matrix algebra: transpose, trace, determinant, adjugate, inverse.
//!
//! Everything here is a free function over [`Matrix`]; the same operations
//! are also available as methods.

mod determinant;
mod inverse;

pub use determinant::{cofactor_determinant, determinant};
pub use inverse::{adjugate, inverse, is_invertible_size, MAX_INVERSE_DIM};

use crate::error::MathError;
use crate::traits::{FloatScalar, Scalar, SignedScalar};
use crate::Matrix;

/// Transpose of an R×C matrix.
///
/// ```
/// use qmath::{transpose, Matrix};
/// let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
/// assert_eq!(transpose(&m), Matrix::new([[1, 4], [2, 5], [3, 6]]));
/// ```
pub fn transpose<T: Copy, const R: usize, const C: usize>(m: &Matrix<T, R, C>) -> Matrix<T, C, R> {
    Matrix {
        data: core::array::from_fn(|j| core::array::from_fn(|i| m.data[i][j])),
    }
}

/// Sum of the diagonal elements.
pub fn trace<T: Scalar, const N: usize>(m: &Matrix<T, N, N>) -> T {
    (0..N).fold(T::zero(), |sum, i| sum + m.data[i][i])
}

/// The N×N identity matrix.
pub fn identity<T: Scalar, const N: usize>() -> Matrix<T, N, N> {
    Matrix::identity()
}

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Transpose: `(R×C) → (C×R)`.
    ///
    /// ```
    /// use qmath::Matrix;
    /// let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    /// let t = m.transpose();
    /// assert_eq!(t[(3, 2)], 6.0);
    /// ```
    #[inline]
    pub fn transpose(&self) -> Matrix<T, C, R> {
        transpose(self)
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of diagonal elements.
    #[inline]
    pub fn trace(&self) -> T {
        trace(self)
    }

    /// Check if the matrix is symmetric (A == A^T).
    pub fn is_symmetric(&self) -> bool {
        *self == self.transpose()
    }
}

impl<T: SignedScalar, const N: usize> Matrix<T, N, N> {
    /// See [`determinant`].
    #[inline]
    pub fn determinant(&self) -> T {
        determinant(self)
    }

    /// See [`cofactor_determinant`].
    #[inline]
    pub fn cofactor_determinant(&self) -> T {
        cofactor_determinant(self)
    }

    /// See [`adjugate`].
    #[inline]
    pub fn adjugate(&self) -> Self {
        adjugate(self)
    }
}

impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// See [`inverse`].
    #[inline]
    pub fn inverse(&self) -> Result<Self, MathError> {
        inverse(self)
    }
}
