use crate::error::MathError;
use crate::linalg::determinant::{determinant, laplace};
use crate::traits::{FloatScalar, SignedScalar};
use crate::Matrix;

/// Largest size [`inverse`] accepts.
pub const MAX_INVERSE_DIM: usize = 8;

/// Whether [`inverse`] has an algorithm for `n`×`n` matrices.
#[inline]
pub const fn is_invertible_size(n: usize) -> bool {
    matches!(n, 1..=4 | 6 | 8)
}

/// `0..n` with `skip` left out, written into the front of `buf`.
#[inline]
fn indices_without<const N: usize>(skip: usize, buf: &mut [usize; N]) -> &[usize] {
    let mut len = 0;
    for i in (0..N).filter(|&i| i != skip) {
        buf[len] = i;
        len += 1;
    }
    &buf[..len]
}

/// Adjugate (transposed cofactor matrix) of a square matrix.
///
/// `m * adjugate(m) == det(m) * I`.
///
/// ```
/// use qmath::{adjugate, Matrix};
/// let m = Matrix::new([[1, 2], [3, 4]]);
/// assert_eq!(adjugate(&m), Matrix::new([[4, -2], [-3, 1]]));
/// ```
pub fn adjugate<T: SignedScalar, const N: usize>(m: &Matrix<T, N, N>) -> Matrix<T, N, N> {
    let mut adj = Matrix::zeros();
    let mut row_buf = [0usize; N];
    let mut col_buf = [0usize; N];
    for i in 0..N {
        let rows = indices_without(i, &mut row_buf);
        for j in 0..N {
            let cols = indices_without(j, &mut col_buf);
            let minor = laplace(m, rows, cols, true);
            // cofactor (i, j) lands at (j, i)
            adj.data[j][i] = if (i + j) % 2 == 0 {
                minor
            } else {
                T::zero() - minor
            };
        }
    }
    adj
}

/// Inverse of a square matrix.
///
/// Supported sizes are 1 (reciprocal), 2 through 4 (adjugate over
/// determinant), and 6 and 8 (block inversion on halves of size 3 and 4).
///
/// # Errors
///
/// - [`MathError::IncompatibleSize`] for a 0×0 matrix.
/// - [`MathError::DimensionTooLarge`] for sizes 5, 7, and anything above
///   [`MAX_INVERSE_DIM`]. The size is checked before any arithmetic.
/// - [`MathError::Singular`] when `|det| < 1e-10`. For sizes 6 and 8 the
///   same check also applies to every block the partition inverts.
///
/// ```
/// use qmath::{inverse, MathError, Matrix};
/// let m = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
/// let inv = inverse(&m).unwrap();
/// assert!((inv[(1, 1)] - 0.6).abs() < 1e-12);
/// assert!((inv[(1, 2)] + 0.7).abs() < 1e-12);
///
/// let singular = Matrix::new([[1.0, 2.0], [2.0, 4.0]]);
/// assert_eq!(inverse(&singular), Err(MathError::Singular));
/// ```
pub fn inverse<T: FloatScalar, const N: usize>(
    m: &Matrix<T, N, N>,
) -> Result<Matrix<T, N, N>, MathError> {
    if N == 0 {
        log::debug!("cannot invert an empty matrix");
        return Err(MathError::IncompatibleSize);
    }
    if !is_invertible_size(N) {
        log::debug!("no inversion algorithm for {N}×{N} matrices");
        return Err(MathError::DimensionTooLarge);
    }

    let det = determinant(m);
    if det.is_negligible() {
        log::debug!("{N}×{N} matrix is singular (det = {det:?})");
        return Err(MathError::Singular);
    }

    match N {
        1 => Ok(Matrix::filled(T::one() / det)),
        2..=4 => {
            log::trace!("inverting {N}×{N} matrix by adjugate");
            adjugate(m) / det
        }
        6 => block_inverse::<T, N, 3>(m),
        8 => block_inverse::<T, N, 4>(m),
        _ => Err(MathError::DimensionTooLarge),
    }
}

/// Schur-complement inversion of an `N`×`N` matrix split into four `H`×`H`
/// blocks:
///
/// ```text
///     | A1  A2 |          | B1  B2 |
/// M = |        |   M⁻¹ =  |        |
///     | A3  A4 |          | B3  B4 |
///
/// B1 = (A1 - A2·A4⁻¹·A3)⁻¹        B2 = -(A1⁻¹·A2)·B4
/// B4 = (A4 - A3·A1⁻¹·A2)⁻¹        B3 = -(A4⁻¹·A3)·B1
/// ```
///
/// Both diagonal blocks and both complements go through [`inverse`], so a
/// singular block fails the whole inversion.
fn block_inverse<T: FloatScalar, const N: usize, const H: usize>(
    m: &Matrix<T, N, N>,
) -> Result<Matrix<T, N, N>, MathError> {
    if 2 * H != N {
        return Err(MathError::IncompatibleSize);
    }
    log::trace!("inverting {N}×{N} matrix by {H}×{H} block partition");

    let a1: Matrix<T, H, H> = m.get_sub_matrix(1, 1)?;
    let a2: Matrix<T, H, H> = m.get_sub_matrix(1, H + 1)?;
    let a3: Matrix<T, H, H> = m.get_sub_matrix(H + 1, 1)?;
    let a4: Matrix<T, H, H> = m.get_sub_matrix(H + 1, H + 1)?;

    let inv_a1 = inverse(&a1)?;
    let inv_a4 = inverse(&a4)?;

    let b1 = inverse(&(a1 - a2 * inv_a4 * a3))?;
    let b4 = inverse(&(a4 - a3 * inv_a1 * a2))?;
    let b2 = -(inv_a1 * a2) * b4;
    let b3 = -(inv_a4 * a3) * b1;

    let mut out = Matrix::zeros();
    out.set_sub_matrix(1, 1, &b1)?;
    out.set_sub_matrix(1, H + 1, &b2)?;
    out.set_sub_matrix(H + 1, 1, &b3)?;
    out.set_sub_matrix(H + 1, H + 1, &b4)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn supported_sizes() {
        let supported: Vec<usize> = (0..=10).filter(|&n| is_invertible_size(n)).collect();
        assert_eq!(supported, vec![1, 2, 3, 4, 6, 8]);
        assert!(!is_invertible_size(MAX_INVERSE_DIM + 1));
    }

    #[test]
    fn indices_skip_one() {
        let mut buf = [0usize; 4];
        assert_eq!(indices_without(0, &mut buf), &[1, 2, 3]);
        assert_eq!(indices_without(2, &mut buf), &[0, 1, 3]);
    }

    #[test]
    fn adjugate_times_matrix_is_det_identity() {
        let m = Matrix::new([[2, 0, 1], [1, 3, 2], [1, 1, 1]]);
        let det = determinant(&m);
        let id: Matrix<i32, 3, 3> = Matrix::identity();
        assert_eq!(m * adjugate(&m), id * det);
        assert_eq!(adjugate(&m) * m, id * det);
    }

    #[test]
    fn adjugate_of_1x1() {
        assert_eq!(adjugate(&Matrix::new([[5]])), Matrix::new([[1]]));
    }

    #[test]
    fn block_inverse_rejects_uneven_split() {
        let m: Matrix<f64, 6, 6> = Matrix::identity();
        assert_eq!(
            block_inverse::<f64, 6, 4>(&m),
            Err(MathError::IncompatibleSize)
        );
    }
}
