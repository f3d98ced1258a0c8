//! Tolerance comparisons used to validate results.

/// True when `|a[i] - b[i]| <= eps` for every entry of the `m x n` matrices.
pub fn matrices_equal(a: &[f64], b: &[f64], m: usize, n: usize, eps: f64) -> bool {
    let len = m * n;
    if a.len() < len || b.len() < len {
        return false;
    }
    a[..len]
        .iter()
        .zip(&b[..len])
        .all(|(x, y)| (x - y).abs() <= eps)
}

/// Largest elementwise difference, `NaN` if either side contains one.
pub fn max_abs_diff(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, |acc: f64, d| if d.is_nan() || acc.is_nan() { f64::NAN } else { acc.max(d) })
}

/// The `n x n` identity.
pub fn identity(n: usize) -> Vec<f64> {
    let mut id = vec![0.0; n * n];
    for i in 0..n {
        id[i * n + i] = 1.0;
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matrices_equal_tolerance() {
        assert!(matrices_equal(&[1.0, 2.0], &[1.0005, 1.9995], 1, 2, 1e-3));
        assert!(!matrices_equal(&[1.0, 2.0], &[1.0, 2.01], 1, 2, 1e-3));
        assert!(!matrices_equal(&[f64::NAN], &[f64::NAN], 1, 1, 1.0));
        assert!(!matrices_equal(&[1.0], &[1.0], 1, 2, 1.0));
    }

    #[test]
    fn test_max_abs_diff() {
        assert_eq!(max_abs_diff(&[1.0, -1.0], &[0.5, 1.0]), 2.0);
        assert!(max_abs_diff(&[f64::NAN, 0.0], &[0.0, 0.0]).is_nan());
    }

    #[test]
    fn test_identity() {
        assert_eq!(identity(2), vec![1.0, 0.0, 0.0, 1.0]);
    }
}
