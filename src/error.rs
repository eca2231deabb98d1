use thiserror::Error;

/// Errors raised by matrix and vector operations.
///
/// The kind alone determines the message, so the value is `Copy` and carries
/// no payload.
///
/// ```
/// use qmath::{Matrix, MathError};
///
/// let m = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
/// assert_eq!(m.get(3, 1), Err(MathError::IllegalIndex));
/// assert_eq!((m / 0.0).unwrap_err(), MathError::DivideByZero);
/// assert_eq!(MathError::Singular.message(), "Math Exception : Singular Matrix.");
/// ```
#[derive(Error, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MathError {
    /// Undocumented error. Reserved for callers; never raised by this crate.
    #[default]
    #[error("Math Exception : Unknown Exception")]
    Unknown,
    /// Index out of range (also: initializer over- or under-fill).
    #[error("Math Exception : Index out of range")]
    IllegalIndex,
    /// Determinant magnitude below the zero threshold.
    #[error("Math Exception : Singular Matrix.")]
    Singular,
    /// Division by a scalar whose magnitude is below the zero threshold.
    #[error("Math Exception : Division by zero.")]
    DivideByZero,
    /// Operation between non-conformable shapes.
    #[error("Math Exception : Operation between objects of incompatible sizes.")]
    IncompatibleSize,
    /// Operation between incompatible element types. Reserved for callers;
    /// never raised by this crate.
    #[error("Math Exception : Operation between objects of incompatible types.")]
    TypeMismatch,
    /// Matrix dimension unsupported by the requested algorithm (inverse of
    /// 5×5, 7×7, or anything above 8×8).
    #[error("Math Exception : Matrix too large.")]
    DimensionTooLarge,
}

impl MathError {
    /// Every kind, ordered by [`code`](Self::code).
    pub const ALL: [MathError; 7] = [
        MathError::Unknown,
        MathError::IllegalIndex,
        MathError::Singular,
        MathError::DivideByZero,
        MathError::IncompatibleSize,
        MathError::TypeMismatch,
        MathError::DimensionTooLarge,
    ];

    /// Human-readable message for this kind. Same text as `Display`, without
    /// allocating.
    pub const fn message(self) -> &'static str {
        match self {
            MathError::Unknown => "Math Exception : Unknown Exception",
            MathError::IllegalIndex => "Math Exception : Index out of range",
            MathError::Singular => "Math Exception : Singular Matrix.",
            MathError::DivideByZero => "Math Exception : Division by zero.",
            MathError::IncompatibleSize => {
                "Math Exception : Operation between objects of incompatible sizes."
            }
            MathError::TypeMismatch => {
                "Math Exception : Operation between objects of incompatible types."
            }
            MathError::DimensionTooLarge => "Math Exception : Matrix too large.",
        }
    }

    /// Stable numeric code of the kind (0 through 6).
    pub const fn code(self) -> u8 {
        match self {
            MathError::Unknown => 0,
            MathError::IllegalIndex => 1,
            MathError::Singular => 2,
            MathError::DivideByZero => 3,
            MathError::IncompatibleSize => 4,
            MathError::TypeMismatch => 5,
            MathError::DimensionTooLarge => 6,
        }
    }

    /// Inverse of [`code`](Self::code).
    pub const fn from_code(code: u8) -> Option<MathError> {
        if (code as usize) < Self::ALL.len() {
            Some(Self::ALL[code as usize])
        } else {
            None
        }
    }
}

/// Errors from reading a matrix or vector out of text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMatrixError {
    /// The input ran out before every element was read.
    #[error("expected {expected} elements, found only {found}")]
    Truncated { expected: usize, found: usize },
    /// The token at `position` (0-based, row-major) is not a valid scalar.
    #[error("element {position} is not a valid number")]
    InvalidElement { position: usize },
    /// Input continued past the last element.
    #[error("input has more than {expected} elements")]
    TrailingElements { expected: usize },
}
