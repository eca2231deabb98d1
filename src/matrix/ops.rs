use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::MathError;
use crate::traits::Scalar;
use crate::Matrix;

// ── Element-wise addition ───────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> AddAssign for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: Self) {
        for i in 0..R {
            for j in 0..C {
                self.data[i][j] = self.data[i][j] + rhs.data[i][j];
            }
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Add for Matrix<T, R, C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = self;
        out += rhs;
        out
    }
}

// ── Element-wise subtraction ────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> SubAssign for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: Self) {
        for i in 0..R {
            for j in 0..C {
                self.data[i][j] = self.data[i][j] - rhs.data[i][j];
            }
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Sub for Matrix<T, R, C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = self;
        out -= rhs;
        out
    }
}

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Neg for Matrix<T, R, C> {
    type Output = Self;

    fn neg(self) -> Self {
        let mut out = self;
        for row in out.data.iter_mut() {
            for x in row.iter_mut() {
                *x = T::zero() - *x;
            }
        }
        out
    }
}

impl<T: Scalar, const R: usize, const C: usize> Neg for &Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;

    fn neg(self) -> Matrix<T, R, C> {
        (*self).neg()
    }
}

impl<T: Scalar, const R: usize, const C: usize> AddAssign<&Matrix<T, R, C>> for Matrix<T, R, C> {
    fn add_assign(&mut self, rhs: &Matrix<T, R, C>) {
        self.add_assign(*rhs);
    }
}

impl<T: Scalar, const R: usize, const C: usize> SubAssign<&Matrix<T, R, C>> for Matrix<T, R, C> {
    fn sub_assign(&mut self, rhs: &Matrix<T, R, C>) {
        self.sub_assign(*rhs);
    }
}

// ── Matrix multiplication: (R×K) * (K×P) → (R×P) ──────────────────
// The inner dimensions must agree at compile time.

impl<T: Scalar, const R: usize, const K: usize, const P: usize> Mul<Matrix<T, K, P>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, P>;

    fn mul(self, rhs: Matrix<T, K, P>) -> Matrix<T, R, P> {
        let mut out = Matrix::<T, R, P>::zeros();
        for i in 0..R {
            for j in 0..P {
                let mut sum = T::zero();
                for k in 0..K {
                    sum = sum + self.data[i][k] * rhs.data[k][j];
                }
                out.data[i][j] = sum;
            }
        }
        out
    }
}

// ── Scalar multiplication: matrix * scalar ──────────────────────────

impl<T: Scalar, const R: usize, const C: usize> MulAssign<T> for Matrix<T, R, C> {
    fn mul_assign(&mut self, rhs: T) {
        for row in self.data.iter_mut() {
            for x in row.iter_mut() {
                *x = *x * rhs;
            }
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for Matrix<T, R, C> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let mut out = self;
        out *= rhs;
        out
    }
}

// ── Scalar division ─────────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Divide every element by `rhs` in place.
    ///
    /// Fails with [`MathError::DivideByZero`] when `|rhs| < 1e-10`, leaving
    /// `self` unchanged.
    pub fn try_div_assign(&mut self, rhs: T) -> Result<(), MathError> {
        if rhs.is_negligible() {
            log::debug!("refusing to divide {R}×{C} matrix by {rhs:?}");
            return Err(MathError::DivideByZero);
        }
        for row in self.data.iter_mut() {
            for x in row.iter_mut() {
                *x = *x / rhs;
            }
        }
        Ok(())
    }
}

/// Scalar division is fallible, so the output is a `Result`.
///
/// ```
/// use qmath::{Matrix, MathError};
/// let m = Matrix::new([[2.0, 4.0], [6.0, 8.0]]);
/// assert_eq!((m / 2.0).unwrap(), Matrix::new([[1.0, 2.0], [3.0, 4.0]]));
/// assert_eq!(m / 1e-12, Err(MathError::DivideByZero));
/// ```
impl<T: Scalar, const R: usize, const C: usize> Div<T> for Matrix<T, R, C> {
    type Output = Result<Self, MathError>;

    fn div(self, rhs: T) -> Result<Self, MathError> {
        let mut out = self;
        out.try_div_assign(rhs)?;
        Ok(out)
    }
}

impl<T: Scalar, const R: usize, const C: usize> Div<T> for &Matrix<T, R, C> {
    type Output = Result<Matrix<T, R, C>, MathError>;

    fn div(self, rhs: T) -> Result<Matrix<T, R, C>, MathError> {
        (*self).div(rhs)
    }
}

// ── Reference variants for same-shape binary ops ────────────────────
// Matrix is Copy, so &Matrix ops just deref and delegate.

macro_rules! forward_ref_binop {
    ($Op:ident, $method:ident) => {
        impl<T: Scalar, const R: usize, const C: usize> $Op<Matrix<T, R, C>>
            for &Matrix<T, R, C>
        {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: Matrix<T, R, C>) -> Matrix<T, R, C> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<&Matrix<T, R, C>>
            for Matrix<T, R, C>
        {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: &Matrix<T, R, C>) -> Matrix<T, R, C> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const R: usize, const C: usize> $Op<&Matrix<T, R, C>>
            for &Matrix<T, R, C>
        {
            type Output = Matrix<T, R, C>;
            fn $method(self, rhs: &Matrix<T, R, C>) -> Matrix<T, R, C> {
                (*self).$method(*rhs)
            }
        }
    };
}

forward_ref_binop!(Add, add);
forward_ref_binop!(Sub, sub);

// ── Reference variants for matrix multiplication ────────────────────

impl<T: Scalar, const R: usize, const K: usize, const P: usize> Mul<Matrix<T, K, P>>
    for &Matrix<T, R, K>
{
    type Output = Matrix<T, R, P>;
    fn mul(self, rhs: Matrix<T, K, P>) -> Matrix<T, R, P> {
        (*self).mul(rhs)
    }
}

impl<T: Scalar, const R: usize, const K: usize, const P: usize> Mul<&Matrix<T, K, P>>
    for Matrix<T, R, K>
{
    type Output = Matrix<T, R, P>;
    fn mul(self, rhs: &Matrix<T, K, P>) -> Matrix<T, R, P> {
        self.mul(*rhs)
    }
}

impl<T: Scalar, const R: usize, const K: usize, const P: usize> Mul<&Matrix<T, K, P>>
    for &Matrix<T, R, K>
{
    type Output = Matrix<T, R, P>;
    fn mul(self, rhs: &Matrix<T, K, P>) -> Matrix<T, R, P> {
        (*self).mul(*rhs)
    }
}

// ── Reference variant for scalar multiplication ─────────────────────

impl<T: Scalar, const R: usize, const C: usize> Mul<T> for &Matrix<T, R, C> {
    type Output = Matrix<T, R, C>;
    fn mul(self, rhs: T) -> Matrix<T, R, C> {
        (*self).mul(rhs)
    }
}

// ── scalar * matrix (concrete impls to avoid orphan rules) ──────────

macro_rules! impl_scalar_mul {
    ($($t:ty),*) => {
        $(
            impl<const R: usize, const C: usize> Mul<Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    rhs * self
                }
            }

            impl<const R: usize, const C: usize> Mul<&Matrix<$t, R, C>> for $t {
                type Output = Matrix<$t, R, C>;

                fn mul(self, rhs: &Matrix<$t, R, C>) -> Matrix<$t, R, C> {
                    *rhs * self
                }
            }
        )*
    };
}

impl_scalar_mul!(f32, f64, i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

// ── 1×1 results ─────────────────────────────────────────────────────

impl<T: Copy> Matrix<T, 1, 1> {
    /// The single element of a 1×1 matrix, e.g. the result of a
    /// `(1×K) * (K×1)` product.
    #[inline]
    pub fn into_scalar(self) -> T {
        self.data[0][0]
    }
}

// ── Element-wise multiplication (Hadamard product) ──────────────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Element-wise (Hadamard) product: `c(i, j) = a(i, j) * b(i, j)`.
    pub fn element_product(&self, rhs: &Self) -> Self {
        let mut out = *self;
        for i in 0..R {
            for j in 0..C {
                out.data[i][j] = self.data[i][j] * rhs.data[i][j];
            }
        }
        out
    }
}
