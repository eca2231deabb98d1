use crate::traits::SignedScalar;
use crate::Matrix;

// ── Closed forms ────────────────────────────────────────────────────
// Each takes an accessor `a(i, j)` with 0-based indices, so the same
// formula serves a whole matrix or a minor picked out by row/column lists.
// None of them pivot.

#[inline]
pub(crate) fn det2<T: SignedScalar>(a: impl Fn(usize, usize) -> T) -> T {
    a(0, 0) * a(1, 1) - a(0, 1) * a(1, 0)
}

#[inline]
pub(crate) fn det3<T: SignedScalar>(a: impl Fn(usize, usize) -> T) -> T {
    a(0, 0) * (a(1, 1) * a(2, 2) - a(1, 2) * a(2, 1))
        - a(0, 1) * (a(1, 0) * a(2, 2) - a(1, 2) * a(2, 0))
        + a(0, 2) * (a(1, 0) * a(2, 1) - a(1, 1) * a(2, 0))
}

/// The rows of `0..n` other than `i` and `j`, in order.
#[inline]
fn complement<const K: usize>(n: usize, i: usize, j: usize) -> [usize; K] {
    let mut rest = [0; K];
    let mut k = 0;
    for r in (0..n).filter(|&r| r != i && r != j) {
        rest[k] = r;
        k += 1;
    }
    rest
}

/// Expansion by the 2×2 minors of the first two columns: every pair of rows
/// `i < j` contributes `(-1)^(i + j + 1) * minor(i, j) * complement`, where
/// the complement is the determinant of the remaining rows and columns.
#[inline]
fn two_column_expansion<T: SignedScalar>(n: usize, mut term: impl FnMut(usize, usize) -> T) -> T {
    let mut det = T::zero();
    for i in 0..n {
        for j in (i + 1)..n {
            let t = term(i, j);
            det = if (i + j) % 2 == 1 { det + t } else { det - t };
        }
    }
    det
}

pub(crate) fn det4<T: SignedScalar>(a: impl Fn(usize, usize) -> T) -> T {
    two_column_expansion(4, |i, j| {
        let rest: [usize; 2] = complement(4, i, j);
        let lead = a(i, 0) * a(j, 1) - a(i, 1) * a(j, 0);
        lead * det2(|p, q| a(rest[p], 2 + q))
    })
}

pub(crate) fn det5<T: SignedScalar>(a: impl Fn(usize, usize) -> T) -> T {
    two_column_expansion(5, |i, j| {
        let rest: [usize; 3] = complement(5, i, j);
        let lead = a(i, 0) * a(j, 1) - a(i, 1) * a(j, 0);
        lead * det3(|p, q| a(rest[p], 2 + q))
    })
}

/// Closed-form determinant of an `n`×`n` block, if `n` has one.
#[inline]
fn closed_form<T: SignedScalar>(n: usize, a: impl Fn(usize, usize) -> T) -> Option<T> {
    match n {
        0 => Some(T::one()),
        1 => Some(a(0, 0)),
        2 => Some(det2(a)),
        3 => Some(det3(a)),
        4 => Some(det4(a)),
        5 => Some(det5(a)),
        _ => None,
    }
}

// ── Cofactor expansion ──────────────────────────────────────────────

/// Determinant of the minor of `m` made of `rows` and `cols` (0-based,
/// equal length), by Laplace expansion along its first column.
///
/// With `use_closed_form`, recursion stops once the minor is small enough
/// for a closed form; otherwise it runs down to single elements.
pub(crate) fn laplace<T: SignedScalar, const N: usize>(
    m: &Matrix<T, N, N>,
    rows: &[usize],
    cols: &[usize],
    use_closed_form: bool,
) -> T {
    let n = rows.len();
    debug_assert_eq!(n, cols.len());
    let at = |p: usize, q: usize| m.data[rows[p]][cols[q]];

    if n <= 1 || use_closed_form {
        if let Some(det) = closed_form(n, at) {
            return det;
        }
    }

    let mut det = T::zero();
    let mut minor_rows = [0usize; N];
    for k in 0..n {
        let lead = at(k, 0);
        if lead == T::zero() {
            continue;
        }
        // every row but k
        let mut len = 0;
        for (p, &r) in rows.iter().enumerate() {
            if p != k {
                minor_rows[len] = r;
                len += 1;
            }
        }
        let sub = laplace(m, &minor_rows[..len], &cols[1..], use_closed_form);
        // (+1 if the 1-based row is odd, else -1)
        det = if k % 2 == 0 {
            det + lead * sub
        } else {
            det - lead * sub
        };
    }
    det
}

/// `[0, 1, ..., N - 1]`.
#[inline]
pub(crate) fn all_indices<const N: usize>() -> [usize; N] {
    core::array::from_fn(|i| i)
}

/// Determinant of a square matrix.
///
/// Sizes 2 through 5 use closed-form expansions; larger sizes use cofactor
/// (Laplace) expansion along the first column, whose minors switch to the
/// closed forms at size 5. A 0×0 matrix has determinant one (the empty
/// product). There is no pivoting, so ill-conditioned inputs are evaluated
/// exactly as written.
///
/// ```
/// use qmath::{determinant, Matrix};
/// let m = Matrix::new([[2.0, 8.0, 5.0], [1.0, 1.0, 1.0], [1.0, 2.0, -1.0]]);
/// assert_eq!(determinant(&m), 15.0);
/// ```
///
/// Elements must be signed. An unsigned matrix is rejected at compile time:
///
/// ```compile_fail
/// use qmath::{determinant, Matrix};
/// let m = Matrix::new([[0u32, 1], [1, 0]]);
/// let _ = determinant(&m);
/// ```
pub fn determinant<T: SignedScalar, const N: usize>(m: &Matrix<T, N, N>) -> T {
    let at = |i: usize, j: usize| m.data[i][j];
    match closed_form(N, at) {
        Some(det) => det,
        None => {
            log::trace!("determinant of {N}×{N} matrix by cofactor expansion");
            let idx = all_indices::<N>();
            laplace(m, &idx, &idx, true)
        }
    }
}

/// Determinant by pure cofactor expansion down to single elements, for
/// every size.
///
/// Slower than [`determinant`] but shares none of its closed forms, which
/// makes it an independent check of them.
pub fn cofactor_determinant<T: SignedScalar, const N: usize>(m: &Matrix<T, N, N>) -> T {
    let idx = all_indices::<N>();
    laplace(m, &idx, &idx, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn det2_basic() {
        let m = Matrix::new([[3, 8], [4, 6]]);
        assert_eq!(determinant(&m), -14);
        assert_eq!(cofactor_determinant(&m), -14);
    }

    #[test]
    fn swap_permutation_is_negative() {
        let m = Matrix::new([[0_i8, 1], [1, 0]]);
        assert_eq!(determinant(&m), -1);
        assert_eq!(cofactor_determinant(&m), -1);
        assert_eq!(m.adjugate(), Matrix::new([[0, -1], [-1, 0]]));
    }

    #[test]
    fn det3_basic() {
        let m = Matrix::new([[6, 1, 1], [4, -2, 5], [2, 8, 7]]);
        assert_eq!(determinant(&m), -306);
        assert_eq!(cofactor_determinant(&m), -306);
    }

    #[test]
    fn det4_identity_and_swap() {
        let id: Matrix<i64, 4, 4> = Matrix::identity();
        assert_eq!(determinant(&id), 1);

        let mut p = id;
        p.swap_rows(1, 3).unwrap();
        assert_eq!(determinant(&p), -1);
    }

    #[test]
    fn det5_triangular() {
        // upper triangular: product of the diagonal
        let m = Matrix::new([
            [2, 1, 3, 4, 5],
            [0, 3, 1, 2, 7],
            [0, 0, -1, 6, 1],
            [0, 0, 0, 4, 2],
            [0, 0, 0, 0, 5],
        ]);
        assert_eq!(determinant(&m), 2 * 3 * -1 * 4 * 5);
        assert_eq!(determinant(&m), cofactor_determinant(&m));
    }

    #[test]
    fn size_zero_and_one() {
        let e: Matrix<f64, 0, 0> = Matrix::zeros();
        assert_eq!(determinant(&e), 1.0);
        assert_eq!(cofactor_determinant(&e), 1.0);
        let s = Matrix::new([[-7]]);
        assert_eq!(determinant(&s), -7);
        assert_eq!(cofactor_determinant(&s), -7);
    }

    #[test]
    fn zero_leading_column_entries() {
        // the skipped zero terms must not change the sign of later ones
        let m = Matrix::new([[0, 1, 2], [0, 3, 4], [5, 6, 7]]);
        assert_eq!(determinant(&m), 5 * (1 * 4 - 2 * 3));
        assert_eq!(cofactor_determinant(&m), determinant(&m));
    }

    #[test]
    fn complement_rows() {
        assert_eq!(complement::<2>(4, 0, 2), [1, 3]);
        assert_eq!(complement::<3>(5, 1, 4), [0, 2, 3]);
    }
}
