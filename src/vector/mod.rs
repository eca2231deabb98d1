//! Column and row vectors.
//!
//! Both are thin wrappers over a single-column or single-row [`Matrix`] and
//! dereference to it, so every matrix method is available. They add
//! single-index 1-based access, dot/cross/element products, the Euclidean
//! norm, and orientation-changing transposes. A column and a row of the same
//! length are distinct types: mixing them needs an explicit
//! [`transpose`](ColumnVector::transpose).
//!
//! ```
//! use qmath::{ColumnVector, VectorRef};
//!
//! let v = ColumnVector::from_array([3.0_f64, 4.0]);
//! assert_eq!(v[1], 3.0);
//! assert_eq!(v.dot(&v), 25.0);
//! assert_eq!(v.norm(), 5.0);
//! assert!(v.is_column_vector());
//! assert!(v.transpose().is_row_vector());
//! ```

mod ops;

use core::fmt;
use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::str::FromStr;

use crate::error::{MathError, ParseMatrixError};
use crate::traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
use crate::Matrix;

/// An N-element column vector (N×1 matrix).
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct ColumnVector<T, const N: usize>(pub(crate) Matrix<T, N, 1>);

/// An N-element row vector (1×N matrix).
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct RowVector<T, const N: usize>(pub(crate) Matrix<T, 1, N>);

/// The default vector orientation is a column.
pub type Vector<T, const N: usize> = ColumnVector<T, N>;

/// Orientation-aware read access shared by both vector types.
///
/// Generic code can branch on [`IS_ROW`](Self::IS_ROW) without knowing the
/// concrete type.
pub trait VectorRef<T: Copy>: MatrixRef<T> {
    /// `true` for [`RowVector`], `false` for [`ColumnVector`].
    const IS_ROW: bool;

    #[inline]
    fn is_row_vector(&self) -> bool {
        Self::IS_ROW
    }

    #[inline]
    fn is_column_vector(&self) -> bool {
        !Self::IS_ROW
    }

    /// Element at the 1-based index `i`.
    #[inline]
    fn element(&self, i: usize) -> Result<T, MathError> {
        i.checked_sub(1)
            .and_then(|k| self.as_slice().get(k))
            .copied()
            .ok_or(MathError::IllegalIndex)
    }
}

/// Orientation-aware write access shared by both vector types.
pub trait VectorMut<T: Copy>: VectorRef<T> + MatrixMut<T> {
    /// Overwrite the element at the 1-based index `i`.
    #[inline]
    fn set_element(&mut self, i: usize, value: T) -> Result<(), MathError> {
        let slot = i
            .checked_sub(1)
            .and_then(|k| self.as_mut_slice().get_mut(k))
            .ok_or(MathError::IllegalIndex)?;
        *slot = value;
        Ok(())
    }
}

/// Cross product of three-element vectors.
pub trait Cross {
    fn cross(&self, rhs: &Self) -> Self;
}

#[inline]
fn cross3<T: Scalar>(a: [T; 3], b: [T; 3]) -> [T; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

// Everything the two orientations share. `$Inner` is the wrapped matrix
// shape, `$is_row` the orientation flag.
macro_rules! impl_vector_common {
    ($V:ident, $Inner:ty, $is_row:expr) => {
        impl<T, const N: usize> $V<T, N> {
            /// Number of elements.
            #[inline]
            pub const fn len(&self) -> usize {
                N
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                N == 0
            }

            /// Borrow the underlying matrix.
            #[inline]
            pub const fn as_matrix(&self) -> &$Inner {
                &self.0
            }

            /// Unwrap into the underlying matrix.
            #[inline]
            pub fn into_matrix(self) -> $Inner {
                self.0
            }
        }

        impl<T: Copy, const N: usize> $V<T, N> {
            /// Vector with every element equal to `value`.
            #[inline]
            pub fn fill(value: T) -> Self {
                Self(Matrix::filled(value))
            }
        }

        impl<T: Scalar, const N: usize> $V<T, N> {
            /// The zero vector.
            #[inline]
            pub fn zeros() -> Self {
                Self(Matrix::zeros())
            }

            /// Dot (inner) product.
            pub fn dot(&self, rhs: &Self) -> T {
                self.0
                    .iter()
                    .zip(rhs.0.iter())
                    .fold(T::zero(), |sum, (&a, &b)| sum + a * b)
            }

            /// Element-wise (Hadamard) product.
            pub fn element_product(&self, rhs: &Self) -> Self {
                Self(self.0.element_product(&rhs.0))
            }

            /// Squared Euclidean norm (dot product with self). No sqrt, works
            /// with integers.
            #[inline]
            pub fn norm_squared(&self) -> T {
                self.dot(self)
            }
        }

        impl<T: FloatScalar, const N: usize> $V<T, N> {
            /// Euclidean (L2) norm.
            #[inline]
            pub fn norm(&self) -> T {
                self.norm_squared().sqrt()
            }
        }

        impl<T: Scalar> $V<T, 3> {
            /// Cross product of two 3-vectors.
            #[inline]
            pub fn cross(&self, rhs: &Self) -> Self {
                Self::from_array(cross3(self.into_array(), rhs.into_array()))
            }
        }

        impl<T: Scalar> Cross for $V<T, 3> {
            #[inline]
            fn cross(&self, rhs: &Self) -> Self {
                $V::cross(self, rhs)
            }
        }

        impl<T: Scalar, const N: usize> Default for $V<T, N> {
            fn default() -> Self {
                Self::zeros()
            }
        }

        impl<T, const N: usize> Deref for $V<T, N> {
            type Target = $Inner;

            #[inline]
            fn deref(&self) -> &$Inner {
                &self.0
            }
        }

        impl<T, const N: usize> DerefMut for $V<T, N> {
            #[inline]
            fn deref_mut(&mut self) -> &mut $Inner {
                &mut self.0
            }
        }

        impl<T, const N: usize> From<$Inner> for $V<T, N> {
            #[inline]
            fn from(m: $Inner) -> Self {
                Self(m)
            }
        }

        impl<T, const N: usize> From<$V<T, N>> for $Inner {
            #[inline]
            fn from(v: $V<T, N>) -> Self {
                v.0
            }
        }

        impl<T: Copy, const N: usize> MatrixRef<T> for $V<T, N> {
            #[inline]
            fn nrows(&self) -> usize {
                MatrixRef::nrows(&self.0)
            }

            #[inline]
            fn ncols(&self) -> usize {
                MatrixRef::ncols(&self.0)
            }

            #[inline]
            fn as_slice(&self) -> &[T] {
                self.0.as_slice()
            }
        }

        impl<T: Copy, const N: usize> MatrixMut<T> for $V<T, N> {
            #[inline]
            fn as_mut_slice(&mut self) -> &mut [T] {
                self.0.as_mut_slice()
            }
        }

        impl<T: Copy, const N: usize> VectorRef<T> for $V<T, N> {
            const IS_ROW: bool = $is_row;
        }

        impl<T: Copy, const N: usize> VectorMut<T> for $V<T, N> {}

        // Single 1-based index. Panics on an illegal index; use
        // `element`/`set_element` for the fallible form.
        impl<T, const N: usize> Index<usize> for $V<T, N> {
            type Output = T;

            #[inline]
            fn index(&self, i: usize) -> &T {
                match i.checked_sub(1).and_then(|k| self.0.as_slice().get(k)) {
                    Some(x) => x,
                    None => panic!("{}: {i} in {N}-element vector", MathError::IllegalIndex),
                }
            }
        }

        impl<T, const N: usize> IndexMut<usize> for $V<T, N> {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut T {
                match i.checked_sub(1).and_then(|k| self.0.as_mut_slice().get_mut(k)) {
                    Some(x) => x,
                    None => panic!("{}: {i} in {N}-element vector", MathError::IllegalIndex),
                }
            }
        }

        impl<T: fmt::Display, const N: usize> fmt::Display for $V<T, N> {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl<T: Scalar + FromStr, const N: usize> $V<T, N> {
            /// Read exactly `N` tokens; see [`Matrix::read_elements`].
            pub fn read_elements<'a, I>(tokens: &mut I) -> Result<Self, ParseMatrixError>
            where
                I: Iterator<Item = &'a str>,
            {
                Matrix::read_elements(tokens).map(Self)
            }
        }

        impl<T: Scalar + FromStr, const N: usize> FromStr for $V<T, N> {
            type Err = ParseMatrixError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse().map(Self)
            }
        }
    };
}

impl_vector_common!(ColumnVector, Matrix<T, N, 1>, false);
impl_vector_common!(RowVector, Matrix<T, 1, N>, true);

impl<T, const N: usize> ColumnVector<T, N> {
    /// Create a column vector from a 1D array.
    ///
    /// ```
    /// use qmath::ColumnVector;
    /// let v = ColumnVector::from_array([1.0, 2.0, 3.0]);
    /// assert_eq!(v[1], 1.0);
    /// assert_eq!(v[3], 3.0);
    /// ```
    #[inline]
    pub fn from_array(data: [T; N]) -> Self {
        Self(Matrix::new(data.map(|x| [x])))
    }

    /// Consume the vector, returning its elements.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0.data.map(|[x]| x)
    }

    /// The row vector with the same elements.
    #[inline]
    pub fn transpose(self) -> RowVector<T, N> {
        RowVector::from_array(self.into_array())
    }
}

impl<T, const N: usize> RowVector<T, N> {
    /// Create a row vector from a 1D array.
    #[inline]
    pub fn from_array(data: [T; N]) -> Self {
        Self(Matrix::new([data]))
    }

    /// Consume the vector, returning its elements.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        let [row] = self.0.data;
        row
    }

    /// The column vector with the same elements.
    #[inline]
    pub fn transpose(self) -> ColumnVector<T, N> {
        ColumnVector::from_array(self.into_array())
    }
}

// ── Free functions ──────────────────────────────────────────────────
// Both operands share one type, so length and orientation always match.

/// Dot (inner) product of two vectors of the same orientation.
pub fn dot_product<T: Scalar, V: VectorRef<T>>(a: &V, b: &V) -> T {
    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .fold(T::zero(), |sum, (&x, &y)| sum + x * y)
}

/// Element-wise product of two vectors of the same orientation.
pub fn element_product<T: Scalar, V: VectorMut<T> + Copy>(a: &V, b: &V) -> V {
    let mut out = *a;
    for (x, &y) in out.as_mut_slice().iter_mut().zip(b.as_slice()) {
        *x = *x * y;
    }
    out
}

/// Cross product of two 3-vectors of the same orientation.
///
/// ```
/// use qmath::{cross_product, ColumnVector};
/// let x = ColumnVector::from_array([1.0, 0.0, 0.0]);
/// let y = ColumnVector::from_array([0.0, 1.0, 0.0]);
/// assert_eq!(cross_product(&x, &y), ColumnVector::from_array([0.0, 0.0, 1.0]));
/// ```
pub fn cross_product<V: Cross>(a: &V, b: &V) -> V {
    a.cross(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_array_and_index() {
        let v = ColumnVector::from_array([1.0, 2.0, 3.0]);
        assert_eq!(v[1], 1.0);
        assert_eq!(v[2], 2.0);
        assert_eq!(v[3], 3.0);
        assert_eq!(v.nrows(), 3);
        assert_eq!(v.ncols(), 1);

        let r = RowVector::from_array([1.0, 2.0, 3.0]);
        assert_eq!(r[3], 3.0);
        assert_eq!(r.nrows(), 1);
        assert_eq!(r.ncols(), 3);
    }

    #[test]
    fn index_mut() {
        let mut v = ColumnVector::<f64, 3>::zeros();
        v[2] = 5.0;
        assert_eq!(v[2], 5.0);
        assert_eq!(v.into_array(), [0.0, 5.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "Index out of range")]
    fn index_zero_panics() {
        let v = RowVector::from_array([1, 2]);
        let _ = v[0];
    }

    #[test]
    #[should_panic(expected = "Index out of range")]
    fn index_past_end_panics() {
        let mut v = ColumnVector::from_array([1, 2]);
        v[3] = 0;
    }

    #[test]
    fn checked_element_access() {
        let mut v = ColumnVector::from_array([1, 2, 3]);
        assert_eq!(v.element(3), Ok(3));
        assert_eq!(v.element(0), Err(MathError::IllegalIndex));
        assert_eq!(v.element(4), Err(MathError::IllegalIndex));
        assert_eq!(v.set_element(1, 10), Ok(()));
        assert_eq!(v.set_element(4, 10), Err(MathError::IllegalIndex));
        assert_eq!(v.into_array(), [10, 2, 3]);
    }

    #[test]
    fn orientation_query() {
        let c = ColumnVector::from_array([1.0, 2.0]);
        let r = RowVector::from_array([1.0, 2.0]);
        assert!(c.is_column_vector());
        assert!(!c.is_row_vector());
        assert!(r.is_row_vector());
        assert!(!r.is_column_vector());

        fn orientation<T: Copy, V: VectorRef<T>>(_: &V) -> &'static str {
            if V::IS_ROW {
                "row"
            } else {
                "column"
            }
        }
        assert_eq!(orientation(&c), "column");
        assert_eq!(orientation(&r), "row");
    }

    #[test]
    fn fill_and_len() {
        let v = RowVector::<f64, 4>::fill(7.0);
        assert_eq!(v.len(), 4);
        assert!((1..=4).all(|i| v[i] == 7.0));
    }

    #[test]
    fn dot() {
        let a = ColumnVector::from_array([1.0, 2.0, 3.0]);
        let b = ColumnVector::from_array([4.0, 5.0, 6.0]);
        assert_eq!(a.dot(&b), 32.0); // 1*4 + 2*5 + 3*6
        assert_eq!(dot_product(&a, &b), 32.0);

        let ra = RowVector::from_array([1, 2, 3]);
        let rb = RowVector::from_array([4, 5, 6]);
        assert_eq!(dot_product(&ra, &rb), 32);
    }

    #[test]
    fn element_products() {
        let a = RowVector::from_array([1, 2, 3]);
        let b = RowVector::from_array([4, 5, 6]);
        assert_eq!(a.element_product(&b).into_array(), [4, 10, 18]);
        assert_eq!(element_product(&a, &b), a.element_product(&b));
    }

    #[test]
    fn cross_unit_axes() {
        let x = ColumnVector::from_array([1.0, 0.0, 0.0]);
        let y = ColumnVector::from_array([0.0, 1.0, 0.0]);
        assert_eq!(x.cross(&y).into_array(), [0.0, 0.0, 1.0]);
        assert_eq!(cross_product(&x, &y).into_array(), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn cross_anticommutative_and_self() {
        let a = RowVector::from_array([1, 2, 3]);
        let b = RowVector::from_array([4, 5, 6]);
        assert_eq!(a.cross(&b), -b.cross(&a));
        assert_eq!(a.cross(&a), RowVector::zeros());
        assert_eq!(a.cross(&b).into_array(), [-3, 6, -3]);
    }

    #[test]
    fn norms() {
        let v = ColumnVector::from_array([3.0_f64, 4.0]);
        assert_eq!(v.norm_squared(), 25.0);
        assert!((v.norm() - 5.0).abs() < 1e-12);
        assert_eq!(RowVector::from_array([3, 4]).norm_squared(), 25);
    }

    #[test]
    fn transpose_roundtrip() {
        let c = ColumnVector::from_array([1, 2, 3]);
        let r: RowVector<i32, 3> = c.transpose();
        assert_eq!(r.into_array(), [1, 2, 3]);
        assert_eq!(r.transpose(), c);
    }

    #[test]
    fn deref_to_matrix() {
        let mut v = ColumnVector::from_array([1.0, 2.0]);
        assert_eq!(v.get(2, 1), Ok(2.0));
        v.set(1, 1, 9.0).unwrap();
        assert_eq!(v[1], 9.0);
        let m: Matrix<f64, 2, 1> = v.into();
        assert_eq!(m, Matrix::new([[9.0], [2.0]]));
    }

    #[test]
    fn display() {
        assert_eq!(ColumnVector::from_array([1, 2, 3]).to_string(), "1\n2\n3");
        assert_eq!(RowVector::from_array([1, 2, 3]).to_string(), "1 2 3");
    }

    #[test]
    fn parse() {
        let v: RowVector<f64, 3> = "1, 2, 3".parse().unwrap();
        assert_eq!(v.into_array(), [1.0, 2.0, 3.0]);
        assert_eq!(
            "1 2".parse::<ColumnVector<f64, 3>>(),
            Err(ParseMatrixError::Truncated {
                expected: 3,
                found: 2
            })
        );
    }
}
