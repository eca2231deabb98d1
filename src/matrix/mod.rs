//! Fixed-size matrices.

pub mod aliases;
mod block;
pub mod init;
mod norm;
mod ops;
mod slice;
mod util;

use core::ops::{Index, IndexMut};

use crate::error::MathError;
use crate::traits::{MatrixMut, MatrixRef, Scalar};

/// Fixed-size matrix with `R` rows and `C` columns.
///
/// Storage is row-major: `data[row][col]`, contiguous with no padding.
/// Stack-allocated, no-std compatible. Element positions are **1-based**:
/// `(1, 1)` is the top-left element and `(R, C)` the bottom-right.
///
/// # Examples
///
/// ```
/// use qmath::Matrix;
///
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(1, 2)], 2.0);
/// assert_eq!(a.get(2, 1), Ok(3.0));
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b: Matrix<f64, 3, 3> = Matrix::identity();
/// assert_eq!(b[(1, 1)], 1.0);
/// assert_eq!(b[(1, 2)], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const R: usize, const C: usize> {
    pub(crate) data: [[T; C]; R],
}

/// Translate a 1-based position into 0-based `(row, col)` for an `R×C` shape.
#[inline]
pub(crate) const fn locate<const R: usize, const C: usize>(
    row: usize,
    col: usize,
) -> Result<(usize, usize), MathError> {
    if row < 1 || row > R || col < 1 || col > C {
        return Err(MathError::IllegalIndex);
    }
    Ok((row - 1, col - 1))
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix from a row-major 2D array.
    ///
    /// The input is `[[row1], [row2], ...]` (R arrays of C elements each).
    #[inline]
    pub const fn new(rows: [[T; C]; R]) -> Self {
        Self { data: rows }
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        R
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        C
    }

    /// Total number of elements (`R * C`).
    #[inline]
    pub const fn len(&self) -> usize {
        R * C
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        R * C == 0
    }

    /// Consume the matrix, returning its row-major 2D array.
    #[inline]
    pub fn into_rows(self) -> [[T; C]; R] {
        self.data
    }

    /// Mutable reference to the element at the 1-based `(row, col)`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MathError> {
        let (r, c) = locate::<R, C>(row, col)?;
        Ok(&mut self.data[r][c])
    }
}

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Element at the 1-based `(row, col)`.
    ///
    /// ```
    /// use qmath::{Matrix, MathError};
    /// let m = Matrix::new([[1, 2], [3, 4]]);
    /// assert_eq!(m.get(2, 2), Ok(4));
    /// assert_eq!(m.get(0, 1), Err(MathError::IllegalIndex));
    /// ```
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Result<T, MathError> {
        let (r, c) = locate::<R, C>(row, col)?;
        Ok(self.data[r][c])
    }

    /// Overwrite the element at the 1-based `(row, col)`.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MathError> {
        let (r, c) = locate::<R, C>(row, col)?;
        self.data[r][c] = value;
        Ok(())
    }

    /// Matrix with every element equal to `value`.
    pub fn filled(value: T) -> Self {
        Self {
            data: [[value; C]; R],
        }
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix filled with zeros.
    pub fn zeros() -> Self {
        Self::filled(T::zero())
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Create an identity matrix (square matrices only).
    pub fn identity() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Copy, const R: usize, const C: usize> MatrixRef<T> for Matrix<T, R, C> {
    #[inline]
    fn nrows(&self) -> usize {
        R
    }

    #[inline]
    fn ncols(&self) -> usize {
        C
    }

    #[inline]
    fn as_slice(&self) -> &[T] {
        self.data.as_flattened()
    }
}

impl<T: Copy, const R: usize, const C: usize> MatrixMut<T> for Matrix<T, R, C> {
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_flattened_mut()
    }
}

// Index by 1-based (row, col) tuple. Panics on an illegal index; use
// `get`/`set` for the fallible form.
impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        match locate::<R, C>(row, col) {
            Ok((r, c)) => &self.data[r][c],
            Err(e) => panic!("{e}: ({row}, {col}) in {R}×{C} matrix"),
        }
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match locate::<R, C>(row, col) {
            Ok((r, c)) => &mut self.data[r][c],
            Err(e) => panic!("{e}: ({row}, {col}) in {R}×{C} matrix"),
        }
    }
}

pub use aliases::*;
pub use init::Initializer;
pub use util::tokenize;
