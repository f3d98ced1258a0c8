//! Doolittle LU factorization and column-by-column inversion.
//!
//! There is no pivoting: a zero pivot divides by zero and the result fills
//! with `Inf`/`NaN`. Callers check invertibility beforehand.

use crate::error::{ensure_shape, Result};

/// Factors the `n x n` matrix `a` into a single matrix `T`.
///
/// The strict lower triangle of `T` holds the multipliers of `L` (unit
/// diagonal implied), the upper triangle including the diagonal holds `U`.
pub fn lu_decompose(a: &[f64], n: usize) -> Vec<f64> {
    debug_assert_eq!(a.len(), n * n);
    let mut t = a.to_vec();

    for i in 0..n.saturating_sub(1) {
        let (upper, lower) = t.split_at_mut((i + 1) * n);
        let pivot_row = &upper[i * n..];
        let pivot = pivot_row[i];
        for row in lower.chunks_exact_mut(n) {
            row[i] /= pivot;
            let factor = row[i];
            row[i + 1..]
                .iter_mut()
                .zip(&pivot_row[i + 1..])
                .for_each(|(r, &u)| *r -= factor * u);
        }
    }
    t
}

/// Solves `L U x = rhs` in place, where `t` holds the factors from
/// [`lu_decompose`].
pub fn lu_solve_in_place(t: &[f64], rhs: &mut [f64], n: usize) {
    debug_assert!(t.len() == n * n && rhs.len() == n);

    // forward: L y = rhs
    for i in 0..n {
        let row = &t[i * n..i * n + i];
        let dot: f64 = row.iter().zip(&rhs[..i]).map(|(l, y)| l * y).sum();
        rhs[i] -= dot;
    }
    // backward: U x = y
    for i in (0..n).rev() {
        let row = &t[i * n..(i + 1) * n];
        let dot: f64 = row[i + 1..].iter().zip(&rhs[i + 1..]).map(|(u, x)| u * x).sum();
        rhs[i] = (rhs[i] - dot) / row[i];
    }
}

/// Inverts the `n x n` matrix `a` through its LU factors, one column of the
/// inverse per canonical basis vector.
pub fn invert_lu(a: &[f64], n: usize) -> Result<Vec<f64>> {
    ensure_shape("a", a, n, n)?;
    let t = lu_decompose(a, n);
    let mut inverse = vec![0.0; n * n];
    let mut column = vec![0.0; n];

    for col in 0..n {
        column.fill(0.0);
        column[col] = 1.0;
        lu_solve_in_place(&t, &mut column, n);
        for (i, &x) in column.iter().enumerate() {
            inverse[i * n + col] = x;
        }
    }
    Ok(inverse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::{identity, matrices_equal};
    use crate::naive::multiply_naive;

    #[test]
    fn test_decompose_two_by_two() {
        let t = lu_decompose(&[4.0, 3.0, 6.0, 3.0], 2);
        // L = [1 0; 1.5 1], U = [4 3; 0 -1.5]
        assert_eq!(t, vec![4.0, 3.0, 1.5, -1.5]);
    }

    #[test]
    fn test_factors_reproduce_input() {
        let a = [2.0, -1.0, 0.0, -1.0, 2.0, -1.0, 0.0, -1.0, 2.0];
        let t = lu_decompose(&a, 3);
        let mut l = identity(3);
        let mut u = vec![0.0; 9];
        for i in 0..3 {
            for j in 0..3 {
                if j < i {
                    l[i * 3 + j] = t[i * 3 + j];
                } else {
                    u[i * 3 + j] = t[i * 3 + j];
                }
            }
        }
        let lu = multiply_naive(&l, &u, 3, 3, 3).unwrap();
        assert!(matrices_equal(&lu, &a, 3, 3, 1e-12));
    }

    #[test]
    fn test_invert_two_by_two() {
        let inv = invert_lu(&[4.0, 3.0, 6.0, 3.0], 2).unwrap();
        assert!(matrices_equal(&inv, &[-0.5, 0.5, 1.0, -0.667], 2, 2, 1e-3));
    }

    #[test]
    fn test_invert_scalar() {
        assert_eq!(invert_lu(&[4.0], 1).unwrap(), vec![0.25]);
    }

    #[test]
    fn test_zero_pivot_is_not_detected() {
        // invertible, but the leading pivot is zero
        let inv = invert_lu(&[0.0, 1.0, 1.0, 0.0], 2).unwrap();
        assert!(inv.iter().any(|x| !x.is_finite()));
    }
}
