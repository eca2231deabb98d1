use crate::error::MathError;
use crate::traits::Scalar;
use crate::Matrix;

// ── Raw storage access ──────────────────────────────────────────────
// The flat layout is the interop format: row-major, no header, no padding.
// Element (row, col) is at offset (row - 1) * C + (col - 1).

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// View the entire matrix as a flat slice in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }

    /// View the entire matrix as a mutable flat slice in row-major order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }

    /// Pointer to the first element, for aliasing by foreign numeric code.
    ///
    /// The pointer borrows `self`'s storage; ownership stays with the matrix.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    /// Mutable pointer to the first element. Writes through it mutate `self`.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.as_mut_slice().as_mut_ptr()
    }

    /// View 1-based row `row` as a slice.
    #[inline]
    pub fn row_slice(&self, row: usize) -> Result<&[T], MathError> {
        match row.checked_sub(1).and_then(|r| self.data.get(r)) {
            Some(r) => Ok(r),
            None => Err(MathError::IllegalIndex),
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix from a flat slice in row-major order.
    ///
    /// Fails with [`MathError::IllegalIndex`] if `slice.len() != R * C`.
    ///
    /// ```
    /// use qmath::Matrix;
    /// let m: Matrix<f64, 2, 3> = Matrix::from_row_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(m[(1, 1)], 1.0);
    /// assert_eq!(m[(1, 3)], 3.0);
    /// assert_eq!(m[(2, 1)], 4.0);
    /// ```
    pub fn from_row_slice(slice: &[T]) -> Result<Self, MathError> {
        Self::try_from_iter(slice.iter().copied())
    }
}

// ── Iterators ───────────────────────────────────────────────────────

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Iterate over all elements in row-major order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over all elements in row-major order.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Iterate over rows, each as an array `&[T; C]`.
    #[inline]
    pub fn rows(&self) -> core::slice::Iter<'_, [T; C]> {
        self.data.iter()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a Matrix<T, R, C> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const R: usize, const C: usize> IntoIterator for &'a mut Matrix<T, R, C> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
