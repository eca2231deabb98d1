//! Sequential, length-checked population of a matrix or vector.
//!
//! An [`Initializer`] borrows the target's storage and writes one element at
//! a time in row-major order. Supplying more values than there are elements
//! fails immediately; [`Initializer::finish`] fails if fewer were supplied, so
//! a completed initialization never leaves stale elements behind.
//!
//! ```
//! use qmath::{Matrix, MathError};
//!
//! let mut m: Matrix<f64, 2, 2> = Matrix::zeros();
//! m.init(2.0).then(5.0)?.then(78.9)?.then(20.0)?.finish()?;
//! assert_eq!(m, Matrix::new([[2.0, 5.0], [78.9, 20.0]]));
//!
//! // one value too many
//! let over = m.init(1.0).then(2.0)?.then(3.0)?.then(4.0)?.then(5.0);
//! assert_eq!(over.err(), Some(MathError::IllegalIndex));
//!
//! // one value too few
//! assert_eq!(m.init(1.0).then(2.0)?.then(3.0)?.finish(), Err(MathError::IllegalIndex));
//! # Ok::<(), MathError>(())
//! ```

use crate::error::MathError;
use crate::traits::Scalar;
use crate::Matrix;

/// Row-major element accumulator over borrowed storage.
///
/// The borrow ties the builder to one initialization of one target; it cannot
/// outlive the matrix it writes into.
#[must_use = "an initializer must be completed with `finish()`"]
#[derive(Debug)]
pub struct Initializer<'a, T> {
    target: &'a mut [T],
    position: usize,
}

impl<'a, T: Copy> Initializer<'a, T> {
    /// Start an empty initialization of `target`.
    pub fn new(target: &'a mut [T]) -> Self {
        Self {
            target,
            position: 0,
        }
    }

    /// Write the next element.
    ///
    /// Fails with [`MathError::IllegalIndex`] once every element has been
    /// written; the target is not modified in that case.
    pub fn push(&mut self, value: T) -> Result<(), MathError> {
        let slot = self
            .target
            .get_mut(self.position)
            .ok_or(MathError::IllegalIndex)?;
        *slot = value;
        self.position += 1;
        Ok(())
    }

    /// Chained form of [`push`](Self::push).
    pub fn then(mut self, value: T) -> Result<Self, MathError> {
        self.push(value)?;
        Ok(self)
    }

    /// Write every value from `values`, stopping at the first failure.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) -> Result<(), MathError> {
        for v in values {
            self.push(v)?;
        }
        Ok(())
    }

    /// Number of elements written so far.
    pub fn filled(&self) -> usize {
        self.position
    }

    /// Number of elements still expected.
    pub fn remaining(&self) -> usize {
        self.target.len().saturating_sub(self.position)
    }

    pub fn is_complete(&self) -> bool {
        self.position == self.target.len()
    }

    /// End the initialization.
    ///
    /// Fails with [`MathError::IllegalIndex`] unless exactly every element
    /// was supplied.
    pub fn finish(self) -> Result<(), MathError> {
        if !self.is_complete() {
            log::debug!(
                "initializer finished after {} of {} elements",
                self.position,
                self.target.len()
            );
            return Err(MathError::IllegalIndex);
        }
        Ok(())
    }
}

impl<T: Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Begin a row-major initialization whose first element is `first`.
    ///
    /// The remaining `R * C - 1` values are supplied through the returned
    /// [`Initializer`].
    pub fn init(&mut self, first: T) -> Initializer<'_, T> {
        let mut init = Initializer::new(self.as_mut_slice());
        if init.push(first).is_err() {
            // no slot for `first`: count it so `finish` reports the overflow
            init.position += 1;
        }
        init
    }
}

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Build a matrix from exactly `R * C` values in row-major order.
    ///
    /// Too many or too few values fail with [`MathError::IllegalIndex`].
    ///
    /// ```
    /// use qmath::{Matrix, MathError};
    /// let m: Matrix<i32, 2, 3> = Matrix::try_from_iter(1..=6).unwrap();
    /// assert_eq!(m, Matrix::new([[1, 2, 3], [4, 5, 6]]));
    /// assert_eq!(Matrix::<i32, 2, 3>::try_from_iter(1..=5), Err(MathError::IllegalIndex));
    /// ```
    pub fn try_from_iter<I: IntoIterator<Item = T>>(values: I) -> Result<Self, MathError> {
        let mut m = Self::zeros();
        let mut init = Initializer::new(m.as_mut_slice());
        init.extend(values)?;
        init.finish()?;
        Ok(m)
    }
}
