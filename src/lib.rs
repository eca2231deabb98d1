//! # qmath
//!
//! Fixed-size linear algebra for small matrices, no-std compatible. Built for
//! robotics-scale work (kinematics, control-loop state) where every shape is
//! known at compile time and nothing is heap-allocated.
//!
//! Element positions are **1-based** throughout: `m[(1, 1)]` is the top-left
//! element and `v[1]` the first vector element. Every access is bounds-checked.
//!
//! ## Quick start
//!
//! ```
//! use qmath::{ColumnVector, Matrix};
//!
//! // Solve a linear system Ax = b
//! let a = Matrix::new([
//!     [2.0_f64, 8.0, 5.0],
//!     [1.0, 1.0, 1.0],
//!     [1.0, 2.0, -1.0],
//! ]);
//! let b = ColumnVector::from_array([5.0, -2.0, 2.0]);
//! let x = a.inverse().unwrap() * b; // x = [-3, 2, -1]
//! assert!((x[1] + 3.0).abs() < 1e-12);
//! assert!(((a * x) - b).norm() < 1e-12);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: Fixed-size `Matrix<T, R, C>` with const-generic dimensions.
//!   Stack-allocated `[[T; C]; R]` row-major storage. Arithmetic, checked
//!   1-based access, sub-matrix get/set, iteration, text formatting and
//!   parsing, and the [`Initializer`] builder.
//!
//! - [`vector`]: [`ColumnVector<T, N>`] and [`RowVector<T, N>`], thin
//!   wrappers over single-column and single-row matrices with dot, cross, and
//!   element-wise products, norms, and orientation-changing transposes.
//!   [`VectorRef`] exposes the orientation to generic code.
//!
//! - [`linalg`]: [`transpose`], [`trace`], [`determinant`] (closed forms up
//!   to 5×5, cofactor expansion beyond), [`adjugate`], and [`inverse`] (sizes
//!   1–4, 6, and 8).
//!
//! - [`error`]: [`MathError`], the seven error kinds every fallible
//!   operation reports, and [`ParseMatrixError`] for text input.
//!
//! - [`traits`]: Element trait hierarchy:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`SignedScalar`]: signed elements (`Scalar + Signed`), used by the
//!     determinant and adjugate
//!   - [`FloatScalar`]: real floats (`SignedScalar + Float`), used by norms and inversion
//!   - [`MatrixRef`] / [`MatrixMut`]: the flat row-major storage view
//!
//! ## Zero threshold
//!
//! Division by a scalar and inversion of a matrix both treat magnitudes below
//! [`ZERO_THRESHOLD`] (`1e-10`) as zero, for every element type.
//!
//! ## Logging
//!
//! Failures on the division and inversion paths are reported through the
//! [`log`](https://docs.rs/log) facade at `debug` level, and algorithm
//! selection at `trace` level. No logger is installed by the crate.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Hardware FPU via system libm, `std::error::Error` impls |
//!
//! Without `std`, float math always goes through the pure-Rust `libm`.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod linalg;
pub mod matrix;
pub mod traits;
pub mod vector;

pub use error::{MathError, ParseMatrixError};
pub use linalg::{
    adjugate, cofactor_determinant, determinant, identity, inverse, is_invertible_size, trace,
    transpose, MAX_INVERSE_DIM,
};
pub use matrix::aliases::{
    ColumnVector2, ColumnVector3, ColumnVector4, ColumnVector5, ColumnVector6, Matrix1, Matrix2,
    Matrix2x3, Matrix2x4, Matrix3, Matrix3x2, Matrix3x4, Matrix3x6, Matrix4, Matrix4x2, Matrix4x3,
    Matrix5, Matrix6, Matrix6x3, Matrix7, Matrix8, RowVector2, RowVector3, RowVector4, RowVector5,
    RowVector6, Vector3,
};
pub use matrix::init::Initializer;
pub use matrix::{tokenize, Matrix};
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar, SignedScalar, ZERO_THRESHOLD};
pub use vector::{
    cross_product, dot_product, element_product, ColumnVector, Cross, RowVector, Vector,
    VectorMut, VectorRef,
};
