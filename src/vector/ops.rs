use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{ColumnVector, RowVector};
use crate::error::MathError;
use crate::traits::Scalar;
use crate::Matrix;

// Vectors are Copy, so &V ops just deref and delegate.
macro_rules! forward_ref_binop {
    ($V:ident, $Op:ident, $method:ident) => {
        impl<T: Scalar, const N: usize> $Op<$V<T, N>> for &$V<T, N> {
            type Output = $V<T, N>;
            fn $method(self, rhs: $V<T, N>) -> $V<T, N> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<&$V<T, N>> for $V<T, N> {
            type Output = $V<T, N>;
            fn $method(self, rhs: &$V<T, N>) -> $V<T, N> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const N: usize> $Op<&$V<T, N>> for &$V<T, N> {
            type Output = $V<T, N>;
            fn $method(self, rhs: &$V<T, N>) -> $V<T, N> {
                (*self).$method(*rhs)
            }
        }
    };
}

// ── Element-wise arithmetic ─────────────────────────────────────────
// Every operator delegates to the wrapped matrix.

macro_rules! impl_vector_arith {
    ($V:ident) => {
        impl<T: Scalar, const N: usize> AddAssign for $V<T, N> {
            fn add_assign(&mut self, rhs: Self) {
                self.0 += rhs.0;
            }
        }

        impl<T: Scalar, const N: usize> AddAssign<&$V<T, N>> for $V<T, N> {
            fn add_assign(&mut self, rhs: &Self) {
                self.0 += rhs.0;
            }
        }

        impl<T: Scalar, const N: usize> SubAssign for $V<T, N> {
            fn sub_assign(&mut self, rhs: Self) {
                self.0 -= rhs.0;
            }
        }

        impl<T: Scalar, const N: usize> SubAssign<&$V<T, N>> for $V<T, N> {
            fn sub_assign(&mut self, rhs: &Self) {
                self.0 -= rhs.0;
            }
        }

        impl<T: Scalar, const N: usize> Add for $V<T, N> {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl<T: Scalar, const N: usize> Sub for $V<T, N> {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl<T: Scalar, const N: usize> Neg for $V<T, N> {
            type Output = Self;

            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl<T: Scalar, const N: usize> Neg for &$V<T, N> {
            type Output = $V<T, N>;

            fn neg(self) -> $V<T, N> {
                -*self
            }
        }

        impl<T: Scalar, const N: usize> MulAssign<T> for $V<T, N> {
            fn mul_assign(&mut self, rhs: T) {
                self.0 *= rhs;
            }
        }

        impl<T: Scalar, const N: usize> Mul<T> for $V<T, N> {
            type Output = Self;

            fn mul(self, rhs: T) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl<T: Scalar, const N: usize> Mul<T> for &$V<T, N> {
            type Output = $V<T, N>;

            fn mul(self, rhs: T) -> $V<T, N> {
                *self * rhs
            }
        }

        /// Fails with [`MathError::DivideByZero`] like matrix division.
        impl<T: Scalar, const N: usize> Div<T> for $V<T, N> {
            type Output = Result<Self, MathError>;

            fn div(self, rhs: T) -> Result<Self, MathError> {
                (self.0 / rhs).map(Self)
            }
        }

        impl<T: Scalar, const N: usize> Div<T> for &$V<T, N> {
            type Output = Result<$V<T, N>, MathError>;

            fn div(self, rhs: T) -> Result<$V<T, N>, MathError> {
                *self / rhs
            }
        }

        forward_ref_binop!($V, Add, add);
        forward_ref_binop!($V, Sub, sub);
    };
}

impl_vector_arith!(ColumnVector);
impl_vector_arith!(RowVector);

// ── scalar * vector (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const N: usize> Mul<ColumnVector<$t, N>> for $t {
                type Output = ColumnVector<$t, N>;

                fn mul(self, rhs: ColumnVector<$t, N>) -> ColumnVector<$t, N> {
                    rhs * self
                }
            }

            impl<const N: usize> Mul<RowVector<$t, N>> for $t {
                type Output = RowVector<$t, N>;

                fn mul(self, rhs: RowVector<$t, N>) -> RowVector<$t, N> {
                    rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── Products with matrices ──────────────────────────────────────────

/// `(M×N) * (N×1) → (M×1)`.
impl<T: Scalar, const M: usize, const N: usize> Mul<ColumnVector<T, N>> for Matrix<T, M, N> {
    type Output = ColumnVector<T, M>;

    fn mul(self, rhs: ColumnVector<T, N>) -> ColumnVector<T, M> {
        ColumnVector(self * rhs.0)
    }
}

impl<T: Scalar, const M: usize, const N: usize> Mul<&ColumnVector<T, N>> for &Matrix<T, M, N> {
    type Output = ColumnVector<T, M>;

    fn mul(self, rhs: &ColumnVector<T, N>) -> ColumnVector<T, M> {
        *self * *rhs
    }
}

/// `(1×M) * (M×N) → (1×N)`.
impl<T: Scalar, const M: usize, const N: usize> Mul<Matrix<T, M, N>> for RowVector<T, M> {
    type Output = RowVector<T, N>;

    fn mul(self, rhs: Matrix<T, M, N>) -> RowVector<T, N> {
        RowVector(self.0 * rhs)
    }
}

impl<T: Scalar, const M: usize, const N: usize> Mul<&Matrix<T, M, N>> for &RowVector<T, M> {
    type Output = RowVector<T, N>;

    fn mul(self, rhs: &Matrix<T, M, N>) -> RowVector<T, N> {
        *self * *rhs
    }
}

/// `(1×N) * (N×1)` collapses to the bare scalar inner product.
impl<T: Scalar, const N: usize> Mul<ColumnVector<T, N>> for RowVector<T, N> {
    type Output = T;

    fn mul(self, rhs: ColumnVector<T, N>) -> T {
        (self.0 * rhs.0).into_scalar()
    }
}

/// `(M×1) * (1×N) → (M×N)`, the outer product.
impl<T: Scalar, const M: usize, const N: usize> Mul<RowVector<T, N>> for ColumnVector<T, M> {
    type Output = Matrix<T, M, N>;

    fn mul(self, rhs: RowVector<T, N>) -> Matrix<T, M, N> {
        self.0 * rhs.0
    }
}
