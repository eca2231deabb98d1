use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Squared Frobenius norm (sum of all elements squared). No sqrt, works
    /// with integers.
    pub fn frobenius_norm_squared(&self) -> T {
        self.iter().fold(T::zero(), |sum, &x| sum + x * x)
    }
}

impl<T: FloatScalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Frobenius norm (square root of sum of squared elements).
    ///
    /// For a column or row vector this is the Euclidean length.
    pub fn frobenius_norm(&self) -> T {
        self.frobenius_norm_squared().sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frobenius_norm() {
        let m = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        // sqrt(1 + 4 + 9 + 16) = sqrt(30)
        assert!((m.frobenius_norm() - 30.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn frobenius_norm_squared_integer() {
        let m = Matrix::new([[1, 2], [3, 4]]);
        assert_eq!(m.frobenius_norm_squared(), 30);
    }

    #[test]
    fn frobenius_of_column() {
        let m = Matrix::new([[3.0_f32], [4.0]]);
        assert!((m.frobenius_norm() - 5.0).abs() < 1e-6);
    }
}
