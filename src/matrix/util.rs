use core::fmt;
use core::str::FromStr;

use crate::error::ParseMatrixError;
use crate::traits::Scalar;
use crate::Matrix;

// ── Constructors ────────────────────────────────────────────────────

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Create a matrix by calling `f(i, j)` for each element.
    ///
    /// The closure receives **0-based** storage coordinates, so
    /// `f(0, 0)` produces the element at position `(1, 1)`.
    ///
    /// ```
    /// use qmath::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, Matrix::identity());
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self
    where
        T: Copy + Default,
    {
        let mut data = [[T::default(); C]; R];
        for (i, row) in data.iter_mut().enumerate() {
            for (j, x) in row.iter_mut().enumerate() {
                *x = f(i, j);
            }
        }
        Self { data }
    }

    /// Apply a function to every element, producing a new matrix.
    ///
    /// ```
    /// use qmath::Matrix;
    /// let m = Matrix::new([[1.0_f64, 4.0], [9.0, 16.0]]);
    /// let r = m.map(|x: f64| x.sqrt());
    /// assert_eq!(r[(1, 1)], 1.0);
    /// assert_eq!(r[(2, 2)], 4.0);
    /// ```
    pub fn map<U: Copy + Default>(&self, f: impl Fn(T) -> U) -> Matrix<U, R, C>
    where
        T: Copy,
    {
        Matrix::from_fn(|i, j| f(self.data[i][j]))
    }
}

// ── Display ─────────────────────────────────────────────────────────

/// Row-major text: elements of a row separated by one space, rows separated
/// by `\n`, no trailing newline. A precision flag (`{:.3}`) is applied to
/// every element.
impl<T: fmt::Display, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.data.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, x) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                match f.precision() {
                    Some(p) => write!(f, "{x:.p$}")?,
                    None => write!(f, "{x}")?,
                }
            }
        }
        Ok(())
    }
}

// ── Parsing ─────────────────────────────────────────────────────────

/// Split text into scalar tokens. Any run of whitespace and commas separates
/// two tokens.
///
/// ```
/// let t: Vec<&str> = qmath::tokenize(" 1, 2\n3,,4 ").collect();
/// assert_eq!(t, ["1", "2", "3", "4"]);
/// ```
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
}

impl<T: Scalar + FromStr, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Read exactly `R * C` tokens from `tokens`, in row-major order.
    ///
    /// Tokens past the last element are left in the iterator, so several
    /// matrices can be read from one stream.
    ///
    /// ```
    /// use qmath::{tokenize, Matrix};
    /// let mut tokens = tokenize("1 2 3 4\n5 6");
    /// let a: Matrix<i32, 2, 2> = Matrix::read_elements(&mut tokens).unwrap();
    /// let b: Matrix<i32, 1, 2> = Matrix::read_elements(&mut tokens).unwrap();
    /// assert_eq!(a, Matrix::new([[1, 2], [3, 4]]));
    /// assert_eq!(b, Matrix::new([[5, 6]]));
    /// ```
    pub fn read_elements<'a, I>(tokens: &mut I) -> Result<Self, ParseMatrixError>
    where
        I: Iterator<Item = &'a str>,
    {
        let mut m = Self::zeros();
        for (position, slot) in m.as_mut_slice().iter_mut().enumerate() {
            let token = tokens.next().ok_or(ParseMatrixError::Truncated {
                expected: R * C,
                found: position,
            })?;
            *slot = token
                .parse()
                .map_err(|_| ParseMatrixError::InvalidElement { position })?;
        }
        Ok(m)
    }
}

/// Parses the [`Display`](fmt::Display) format back, accepting commas as well
/// as whitespace between elements. The text must hold exactly `R * C`
/// elements.
impl<T: Scalar + FromStr, const R: usize, const C: usize> FromStr for Matrix<T, R, C> {
    type Err = ParseMatrixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = tokenize(s);
        let m = Self::read_elements(&mut tokens)?;
        if tokens.next().is_some() {
            return Err(ParseMatrixError::TrailingElements { expected: R * C });
        }
        Ok(m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_zero_based() {
        let m: Matrix<i32, 2, 3> = Matrix::from_fn(|i, j| (10 * i + j) as i32);
        assert_eq!(m, Matrix::new([[0, 1, 2], [10, 11, 12]]));
    }

    #[test]
    fn map() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let doubled = m.map(|x| x * 2.0);
        assert_eq!(doubled[(1, 1)], 2.0);
        assert_eq!(doubled[(2, 2)], 8.0);
    }

    #[test]
    fn map_type_change() {
        let m = Matrix::new([[1.0_f64, 2.0], [3.0, 4.0]]);
        let rounded = m.map(|x| x as i32);
        assert_eq!(rounded, Matrix::new([[1, 2], [3, 4]]));
    }

    #[test]
    fn display_layout() {
        let m = Matrix::new([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.to_string(), "1 2 3\n4 5 6");
    }

    #[test]
    fn display_single_row_and_column() {
        assert_eq!(Matrix::new([[1.5, -2.0]]).to_string(), "1.5 -2");
        assert_eq!(Matrix::new([[1], [2], [3]]).to_string(), "1\n2\n3");
    }

    #[test]
    fn display_precision() {
        let m = Matrix::new([[1.0, 0.5], [0.25, 2.0]]);
        assert_eq!(format!("{m:.2}"), "1.00 0.50\n0.25 2.00");
    }

    #[test]
    fn parse_whitespace_and_commas() {
        let m: Matrix<f64, 2, 2> = "1, 2,\n 3.5 ,4".parse().unwrap();
        assert_eq!(m, Matrix::new([[1.0, 2.0], [3.5, 4.0]]));
    }

    #[test]
    fn display_then_parse() {
        let m = Matrix::new([[1.25, -3.0, 0.0], [7.5, 2.0, -0.125]]);
        let back: Matrix<f64, 2, 3> = m.to_string().parse().unwrap();
        assert_eq!(back, m);
    }

    #[test]
    fn parse_truncated() {
        let r = "1 2 3".parse::<Matrix<f64, 2, 2>>();
        assert_eq!(
            r,
            Err(ParseMatrixError::Truncated {
                expected: 4,
                found: 3
            })
        );
        let empty = "".parse::<Matrix<f64, 1, 1>>();
        assert_eq!(
            empty,
            Err(ParseMatrixError::Truncated {
                expected: 1,
                found: 0
            })
        );
    }

    #[test]
    fn parse_invalid_token() {
        let r = "1 2 x 4".parse::<Matrix<f64, 2, 2>>();
        assert_eq!(r, Err(ParseMatrixError::InvalidElement { position: 2 }));
    }

    #[test]
    fn parse_trailing() {
        let r = "1 2 3 4 5".parse::<Matrix<i32, 2, 2>>();
        assert_eq!(r, Err(ParseMatrixError::TrailingElements { expected: 4 }));
    }

    #[test]
    fn read_elements_leaves_rest() {
        let mut tokens = tokenize("1,2,3");
        let m: Matrix<i32, 1, 2> = Matrix::read_elements(&mut tokens).unwrap();
        assert_eq!(m, Matrix::new([[1, 2]]));
        assert_eq!(tokens.next(), Some("3"));
    }
}
