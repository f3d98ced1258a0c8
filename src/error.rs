//! Errors reported at the public boundary of the kernels and by matrix file I/O.

use thiserror::Error;

/// Errors that can occur before a kernel starts computing.
///
/// Numerical trouble (a zero pivot, a singular sub-block) is not an error
/// here: it shows up as `Inf`/`NaN` in the result.
#[derive(Error, Debug)]
pub enum MatrixError {
    /// A dimension was zero.
    #[error("matrix dimensions must be non-zero")]
    EmptyDimension,

    /// A buffer does not hold `rows * cols` values.
    #[error("operand {operand}: expected {expected} values, got {actual}")]
    ShapeMismatch {
        /// Which argument was wrong
        operand: &'static str,
        /// `rows * cols` implied by the given dimensions
        expected: usize,
        /// Actual buffer length
        actual: usize,
    },

    /// A matrix file could not be parsed.
    #[error("parse error on line {line}: {reason}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// What went wrong
        reason: String,
    },

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MatrixError>;

/// Checks that `buf` is a `rows x cols` row-major matrix.
pub(crate) fn ensure_shape(
    operand: &'static str,
    buf: &[f64],
    rows: usize,
    cols: usize,
) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::EmptyDimension);
    }
    if buf.len() != rows * cols {
        return Err(MatrixError::ShapeMismatch {
            operand,
            expected: rows * cols,
            actual: buf.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_checks() {
        assert!(ensure_shape("a", &[0.0; 6], 2, 3).is_ok());
        assert!(matches!(
            ensure_shape("a", &[0.0; 5], 2, 3),
            Err(MatrixError::ShapeMismatch {
                expected: 6,
                actual: 5,
                ..
            })
        ));
        assert!(matches!(
            ensure_shape("a", &[], 0, 3),
            Err(MatrixError::EmptyDimension)
        ));
    }
}
