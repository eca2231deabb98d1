use core::fmt::Debug;
use num_traits::{Float, Num, One, Signed, ToPrimitive, Zero};

use crate::error::MathError;

/// Magnitude below which a divisor or determinant is treated as zero.
///
/// Applied uniformly to every element type (the value is converted to `f64`
/// first), so single-precision matrices get the same threshold as `f64`.
pub const ZERO_THRESHOLD: f64 = 1e-10;

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num + ToPrimitive {
    /// `true` if `|self| < ZERO_THRESHOLD`.
    ///
    /// Values that cannot be represented as `f64` (or are NaN) are never
    /// negligible.
    #[inline]
    fn is_negligible(self) -> bool {
        self.to_f64().is_some_and(|v| v.abs() < ZERO_THRESHOLD)
    }
}

impl<T: Copy + PartialEq + Debug + Zero + One + Num + ToPrimitive> Scalar for T {}

/// Trait for signed matrix elements.
///
/// Required by the determinant and adjugate, whose cofactor signs subtract
/// terms that an unsigned type cannot represent.
pub trait SignedScalar: Scalar + Signed {}

impl<T: Scalar + Signed> SignedScalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by operations that need `sqrt` or a true reciprocal
/// (norms, inversion).
pub trait FloatScalar: SignedScalar + Float {}

impl<T: SignedScalar + Float> FloatScalar for T {}

/// Read-only view of row-major element storage.
///
/// Every matrix and vector type stores its elements as one contiguous,
/// row-major array with no padding. Element `(row, col)` (1-based) lives at
/// offset `(row - 1) * ncols + (col - 1)`.
pub trait MatrixRef<T: Copy> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;

    /// Flat row-major view of all elements.
    fn as_slice(&self) -> &[T];

    /// Total element count (`nrows * ncols`).
    #[inline]
    fn len(&self) -> usize {
        self.nrows() * self.ncols()
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Physical offset of the 1-based `(row, col)` position.
    #[inline]
    fn offset(&self, row: usize, col: usize) -> Result<usize, MathError> {
        if row < 1 || row > self.nrows() || col < 1 || col > self.ncols() {
            return Err(MathError::IllegalIndex);
        }
        Ok((row - 1) * self.ncols() + (col - 1))
    }

    /// Element at the 1-based `(row, col)` position.
    #[inline]
    fn get(&self, row: usize, col: usize) -> Result<T, MathError> {
        let i = self.offset(row, col)?;
        Ok(self.as_slice()[i])
    }

    /// Pointer to the first element, for handing the buffer to foreign code.
    ///
    /// The buffer is borrowed, not transferred.
    #[inline]
    fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }
}

/// Mutable access to row-major element storage.
pub trait MatrixMut<T: Copy>: MatrixRef<T> {
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Overwrite the element at the 1-based `(row, col)` position.
    #[inline]
    fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MathError> {
        let i = self.offset(row, col)?;
        self.as_mut_slice()[i] = value;
        Ok(())
    }

    /// Mutable pointer to the first element. Writes through it mutate `self`.
    #[inline]
    fn as_mut_ptr(&mut self) -> *mut T {
        self.as_mut_slice().as_mut_ptr()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negligible_threshold() {
        assert!(0.0_f64.is_negligible());
        assert!(5e-11_f64.is_negligible());
        assert!((-5e-11_f64).is_negligible());
        assert!(!1e-10_f64.is_negligible());
        assert!(!f64::NAN.is_negligible());
    }

    #[test]
    fn negligible_integer_and_f32() {
        assert!(0_i32.is_negligible());
        assert!(!1_i32.is_negligible());
        assert!(0_u8.is_negligible());
        // f32 uses the same absolute threshold
        assert!(1e-11_f32.is_negligible());
        assert!(!1e-6_f32.is_negligible());
    }
}
