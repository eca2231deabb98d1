//! Pre-defined type aliases for common matrix and vector sizes.
//!
//! Square aliases cover every size [`inverse`](crate::inverse) supports.

use crate::vector::{ColumnVector, RowVector};
use crate::Matrix;

// ── Square matrix aliases ──────────────────────────────────────────

/// 1×1 matrix.
pub type Matrix1<T> = Matrix<T, 1, 1>;
/// 2×2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 3×3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// 4×4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;
/// 5×5 matrix.
pub type Matrix5<T> = Matrix<T, 5, 5>;
/// 6×6 matrix.
pub type Matrix6<T> = Matrix<T, 6, 6>;
/// 7×7 matrix.
pub type Matrix7<T> = Matrix<T, 7, 7>;
/// 8×8 matrix.
pub type Matrix8<T> = Matrix<T, 8, 8>;

// ── Rectangular matrix aliases ─────────────────────────────────────

/// 2×3 matrix.
pub type Matrix2x3<T> = Matrix<T, 2, 3>;
/// 2×4 matrix.
pub type Matrix2x4<T> = Matrix<T, 2, 4>;
/// 3×2 matrix.
pub type Matrix3x2<T> = Matrix<T, 3, 2>;
/// 3×4 matrix.
pub type Matrix3x4<T> = Matrix<T, 3, 4>;
/// 4×2 matrix.
pub type Matrix4x2<T> = Matrix<T, 4, 2>;
/// 4×3 matrix.
pub type Matrix4x3<T> = Matrix<T, 4, 3>;
/// 6×3 matrix.
pub type Matrix6x3<T> = Matrix<T, 6, 3>;
/// 3×6 matrix.
pub type Matrix3x6<T> = Matrix<T, 3, 6>;

// ── Column vector aliases ──────────────────────────────────────────

/// 2-element column vector.
pub type ColumnVector2<T> = ColumnVector<T, 2>;
/// 3-element column vector.
pub type ColumnVector3<T> = ColumnVector<T, 3>;
/// 4-element column vector.
pub type ColumnVector4<T> = ColumnVector<T, 4>;
/// 5-element column vector.
pub type ColumnVector5<T> = ColumnVector<T, 5>;
/// 6-element column vector.
pub type ColumnVector6<T> = ColumnVector<T, 6>;

/// 3-element column vector.
pub type Vector3<T> = ColumnVector<T, 3>;

// ── Row vector aliases ─────────────────────────────────────────────

/// 2-element row vector.
pub type RowVector2<T> = RowVector<T, 2>;
/// 3-element row vector.
pub type RowVector3<T> = RowVector<T, 3>;
/// 4-element row vector.
pub type RowVector4<T> = RowVector<T, 4>;
/// 5-element row vector.
pub type RowVector5<T> = RowVector<T, 5>;
/// 6-element row vector.
pub type RowVector6<T> = RowVector<T, 6>;
