use crate::error::MathError;
use crate::matrix::locate;
use crate::traits::Scalar;
use crate::vector::{ColumnVector, RowVector};
use crate::Matrix;

/// Validate that a P×Q block pivoted at 1-based `(pivot_row, pivot_col)`
/// lies inside an R×C matrix. Returns the 0-based pivot.
fn check_block<const R: usize, const C: usize, const P: usize, const Q: usize>(
    pivot_row: usize,
    pivot_col: usize,
) -> Result<(usize, usize), MathError> {
    let (r0, c0) = locate::<R, C>(pivot_row, pivot_col)?;
    if P > R - r0 || Q > C - c0 {
        return Err(MathError::IncompatibleSize);
    }
    Ok((r0, c0))
}

// ── Sub-matrix extraction & insertion ───────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Extract a P×Q sub-matrix whose top-left corner is the 1-based
    /// `(pivot_row, pivot_col)`.
    ///
    /// Fails with [`MathError::IllegalIndex`] if the pivot is outside the
    /// matrix, and [`MathError::IncompatibleSize`] if the block does not fit in
    /// the rows/columns remaining from the pivot.
    ///
    /// ```
    /// use qmath::Matrix;
    /// let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    /// let b: Matrix<f64, 2, 2> = m.get_sub_matrix(2, 2).unwrap();
    /// assert_eq!(b[(1, 1)], 5.0);
    /// assert_eq!(b[(2, 2)], 9.0);
    /// ```
    pub fn get_sub_matrix<const P: usize, const Q: usize>(
        &self,
        pivot_row: usize,
        pivot_col: usize,
    ) -> Result<Matrix<T, P, Q>, MathError> {
        let mut out = Matrix::<T, P, Q>::zeros();
        self.get_sub_matrix_into(pivot_row, pivot_col, &mut out)?;
        Ok(out)
    }

    /// Out-parameter form of [`get_sub_matrix`](Self::get_sub_matrix): the
    /// block size is taken from `dst`. `dst` is untouched on error.
    pub fn get_sub_matrix_into<const P: usize, const Q: usize>(
        &self,
        pivot_row: usize,
        pivot_col: usize,
        dst: &mut Matrix<T, P, Q>,
    ) -> Result<(), MathError> {
        let (r0, c0) = check_block::<R, C, P, Q>(pivot_row, pivot_col)?;
        for r in 0..P {
            dst.data[r].copy_from_slice(&self.data[r0 + r][c0..c0 + Q]);
        }
        Ok(())
    }

    /// Write a P×Q sub-matrix into self with its top-left corner at the
    /// 1-based `(pivot_row, pivot_col)`.
    ///
    /// Same failure modes as [`get_sub_matrix`](Self::get_sub_matrix); `self`
    /// is untouched on error.
    ///
    /// ```
    /// use qmath::Matrix;
    /// let mut m: Matrix<f64, 3, 3> = Matrix::zeros();
    /// let patch = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// m.set_sub_matrix(2, 2, &patch).unwrap();
    /// assert_eq!(m[(2, 2)], 1.0);
    /// assert_eq!(m[(3, 3)], 4.0);
    /// ```
    pub fn set_sub_matrix<const P: usize, const Q: usize>(
        &mut self,
        pivot_row: usize,
        pivot_col: usize,
        src: &Matrix<T, P, Q>,
    ) -> Result<(), MathError> {
        let (r0, c0) = check_block::<R, C, P, Q>(pivot_row, pivot_col)?;
        for r in 0..P {
            self.data[r0 + r][c0..c0 + Q].copy_from_slice(&src.data[r]);
        }
        Ok(())
    }
}

// ── Row / Column access ─────────────────────────────────────────────

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Copy the 1-based row `row` into a row vector.
    ///
    /// ```
    /// use qmath::Matrix;
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let r = m.get_row(1).unwrap();
    /// assert_eq!(r[1], 1.0);
    /// assert_eq!(r[2], 2.0);
    /// ```
    pub fn get_row(&self, row: usize) -> Result<RowVector<T, C>, MathError> {
        let (r, _) = locate::<R, 1>(row, 1)?;
        Ok(RowVector::from_array(self.data[r]))
    }

    /// Overwrite the 1-based row `row` from a row vector.
    pub fn set_row(&mut self, row: usize, v: &RowVector<T, C>) -> Result<(), MathError> {
        let (r, _) = locate::<R, 1>(row, 1)?;
        self.data[r] = v.into_array();
        Ok(())
    }

    /// Copy the 1-based column `col` into a column vector.
    ///
    /// ```
    /// use qmath::Matrix;
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let c = m.get_column(2).unwrap();
    /// assert_eq!(c[1], 2.0);
    /// assert_eq!(c[2], 4.0);
    /// ```
    pub fn get_column(&self, col: usize) -> Result<ColumnVector<T, R>, MathError> {
        let (_, c) = locate::<1, C>(1, col)?;
        let mut v = ColumnVector::zeros();
        for i in 0..R {
            v.0.data[i][0] = self.data[i][c];
        }
        Ok(v)
    }

    /// Overwrite the 1-based column `col` from a column vector.
    pub fn set_column(&mut self, col: usize, v: &ColumnVector<T, R>) -> Result<(), MathError> {
        let (_, c) = locate::<1, C>(1, col)?;
        for i in 0..R {
            self.data[i][c] = v.0.data[i][0];
        }
        Ok(())
    }

    /// Swap two 1-based rows in place.
    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<(), MathError> {
        let (ra, _) = locate::<R, 1>(a, 1)?;
        let (rb, _) = locate::<R, 1>(b, 1)?;
        self.data.swap(ra, rb);
        Ok(())
    }

    /// Swap two 1-based columns in place.
    pub fn swap_cols(&mut self, a: usize, b: usize) -> Result<(), MathError> {
        let (_, ca) = locate::<1, C>(1, a)?;
        let (_, cb) = locate::<1, C>(1, b)?;
        for row in self.data.iter_mut() {
            row.swap(ca, cb);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mat4x5() -> Matrix<i32, 4, 5> {
        Matrix::from_fn(|i, j| (i * 5 + j) as i32)
    }

    // ── get_sub_matrix / set_sub_matrix ─────────────────────────

    #[test]
    fn sub_matrix_extract() {
        let m = mat4x5();
        let b: Matrix<i32, 2, 3> = m.get_sub_matrix(2, 2).unwrap();
        // Row 2 cols 2..=4: [6, 7, 8]
        // Row 3 cols 2..=4: [11, 12, 13]
        assert_eq!(b, Matrix::new([[6, 7, 8], [11, 12, 13]]));
    }

    #[test]
    fn sub_matrix_full_matrix() {
        let m = mat4x5();
        let full: Matrix<i32, 4, 5> = m.get_sub_matrix(1, 1).unwrap();
        assert_eq!(full, m);
    }

    #[test]
    fn sub_matrix_single_element() {
        let m = mat4x5();
        let s: Matrix<i32, 1, 1> = m.get_sub_matrix(3, 4).unwrap();
        assert_eq!(s[(1, 1)], 13);
    }

    #[test]
    fn sub_matrix_bottom_right_corner() {
        let m = mat4x5();
        let s: Matrix<i32, 2, 2> = m.get_sub_matrix(3, 4).unwrap();
        assert_eq!(s, Matrix::new([[13, 14], [18, 19]]));
    }

    #[test]
    fn sub_matrix_illegal_pivot() {
        let m = mat4x5();
        let r: Result<Matrix<i32, 1, 1>, _> = m.get_sub_matrix(0, 1);
        assert_eq!(r, Err(MathError::IllegalIndex));
        let r: Result<Matrix<i32, 1, 1>, _> = m.get_sub_matrix(5, 1);
        assert_eq!(r, Err(MathError::IllegalIndex));
        let r: Result<Matrix<i32, 1, 1>, _> = m.get_sub_matrix(1, 6);
        assert_eq!(r, Err(MathError::IllegalIndex));
    }

    #[test]
    fn sub_matrix_does_not_fit() {
        let m = mat4x5();
        let r: Result<Matrix<i32, 2, 3>, _> = m.get_sub_matrix(4, 3);
        assert_eq!(r, Err(MathError::IncompatibleSize));
        let r: Result<Matrix<i32, 2, 3>, _> = m.get_sub_matrix(3, 4);
        assert_eq!(r, Err(MathError::IncompatibleSize));
        // larger than the whole matrix
        let r: Result<Matrix<i32, 5, 1>, _> = m.get_sub_matrix(1, 1);
        assert_eq!(r, Err(MathError::IncompatibleSize));
    }

    #[test]
    fn sub_matrix_into_out_param() {
        let m = mat4x5();
        let mut dst = Matrix::<i32, 2, 2>::filled(-1);
        m.get_sub_matrix_into(1, 4, &mut dst).unwrap();
        assert_eq!(dst, Matrix::new([[3, 4], [8, 9]]));

        let before = dst;
        assert_eq!(
            m.get_sub_matrix_into(4, 4, &mut dst),
            Err(MathError::IncompatibleSize)
        );
        assert_eq!(dst, before);
    }

    #[test]
    fn set_sub_matrix_basic() {
        let mut m: Matrix<i32, 3, 4> = Matrix::zeros();
        let patch = Matrix::new([[1, 2], [3, 4]]);
        m.set_sub_matrix(2, 3, &patch).unwrap();
        assert_eq!(
            m,
            Matrix::new([[0, 0, 0, 0], [0, 0, 1, 2], [0, 0, 3, 4]])
        );
    }

    #[test]
    fn set_sub_matrix_errors_leave_target() {
        let mut m: Matrix<i32, 3, 3> = Matrix::zeros();
        let patch = Matrix::new([[1, 2], [3, 4]]);
        assert_eq!(m.set_sub_matrix(0, 1, &patch), Err(MathError::IllegalIndex));
        assert_eq!(m.set_sub_matrix(3, 3, &patch), Err(MathError::IncompatibleSize));
        assert_eq!(m, Matrix::zeros());
    }

    #[test]
    fn set_then_get_sub_matrix() {
        let mut m: Matrix<f64, 4, 4> = Matrix::identity();
        let patch = Matrix::new([[9.0, 8.0], [7.0, 6.0]]);
        m.set_sub_matrix(3, 1, &patch).unwrap();
        let back: Matrix<f64, 2, 2> = m.get_sub_matrix(3, 1).unwrap();
        assert_eq!(back, patch);
    }

    // ── rows / columns ──────────────────────────────────────────

    #[test]
    fn row_column_access() {
        let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);

        let r2 = m.get_row(2).unwrap();
        assert_eq!(r2.into_array(), [4.0, 5.0, 6.0]);

        let c3 = m.get_column(3).unwrap();
        assert_eq!(c3.into_array(), [3.0, 6.0]);
    }

    #[test]
    fn row_column_illegal_index() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.get_row(0).err(), Some(MathError::IllegalIndex));
        assert_eq!(m.get_row(3).err(), Some(MathError::IllegalIndex));
        assert_eq!(m.get_column(0).err(), Some(MathError::IllegalIndex));
        assert_eq!(m.get_column(4).err(), Some(MathError::IllegalIndex));
    }

    #[test]
    fn set_row_column() {
        let mut m: Matrix<f64, 2, 2> = Matrix::zeros();

        m.set_row(1, &RowVector::from_array([1.0, 2.0])).unwrap();
        assert_eq!(m[(1, 1)], 1.0);
        assert_eq!(m[(1, 2)], 2.0);

        m.set_column(2, &ColumnVector::from_array([7.0, 8.0])).unwrap();
        assert_eq!(m[(1, 2)], 7.0);
        assert_eq!(m[(2, 2)], 8.0);

        assert_eq!(
            m.set_row(3, &RowVector::from_array([0.0, 0.0])),
            Err(MathError::IllegalIndex)
        );
    }

    #[test]
    fn swap_rows_cols() {
        let mut m = Matrix::new([[1, 2], [3, 4]]);
        m.swap_rows(1, 2).unwrap();
        assert_eq!(m, Matrix::new([[3, 4], [1, 2]]));
        m.swap_cols(1, 2).unwrap();
        assert_eq!(m, Matrix::new([[4, 3], [2, 1]]));
        m.swap_rows(2, 2).unwrap();
        assert_eq!(m, Matrix::new([[4, 3], [2, 1]]));
        assert_eq!(m.swap_rows(1, 3), Err(MathError::IllegalIndex));
        assert_eq!(m.swap_cols(0, 1), Err(MathError::IllegalIndex));
    }
}
