//! Strassen's seven-product matrix multiplication.
//!
//! Odd dimensions are zero-padded before every split and the result is
//! copied back out afterwards. Every temporary lives in the frame that
//! created it.

use crate::block::{accumulate_block, extract_block, extract_block_diff, quadrant_offsets};
use crate::error::{ensure_shape, Result};
use crate::naive::multiply_naive_into;
use crate::padding::{depad_into, pad, padded_dim, PadKind};

/// Below this size in every dimension the naive product is used instead.
pub const DEFAULT_FALLBACK_THRESHOLD: usize = 64;

/// Tuning for [`multiply_strassen_with`]. Affects speed only, never the result
/// beyond rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrassenConfig {
    /// Recursion stops once `m`, `n` and `k` are all below this. `0` or `1`
    /// recurses down to the scalar cases.
    pub fallback_threshold: usize,
}

impl Default for StrassenConfig {
    fn default() -> Self {
        Self {
            fallback_threshold: DEFAULT_FALLBACK_THRESHOLD,
        }
    }
}

/// Writes the `m x k` product of `a` (`m x n`) and `b` (`n x k`) into `c`,
/// overwriting it.
pub fn multiply_strassen_into(
    a: &[f64],
    b: &[f64],
    c: &mut [f64],
    m: usize,
    n: usize,
    k: usize,
    config: &StrassenConfig,
) {
    debug_assert!(a.len() >= m * n && b.len() >= n * k && c.len() >= m * k);

    if m == 1 && n == 1 {
        // 1x1 times 1xk
        for (r, &y) in c[..k].iter_mut().zip(&b[..k]) {
            *r = a[0] * y;
        }
        return;
    }
    if n == 1 && k == 1 {
        // mx1 times 1x1
        for (r, &x) in c[..m].iter_mut().zip(&a[..m]) {
            *r = x * b[0];
        }
        return;
    }
    let t = config.fallback_threshold;
    if m < t && n < t && k < t {
        multiply_naive_into(a, b, c, m, n, k);
        return;
    }

    let a_pad = pad(a, m, n, PadKind::Zero);
    let b_pad = pad(b, n, k, PadKind::Zero);
    let (mp, np, kp) = (padded_dim(m), padded_dim(n), padded_dim(k));
    let (hm, hn, hk) = (mp / 2, np / 2, kp / 2);
    let (a_mat, b_mat) = (&*a_pad.data, &*b_pad.data);

    let [s_a, s_b, s_c, s_d] = quadrant_offsets(mp, np);
    let [s_x, s_y, s_z, s_t] = quadrant_offsets(np, kp);
    let [r11, r12, r21, r22] = quadrant_offsets(mp, kp);

    let half_product = |lhs: &[f64], rhs: &[f64]| {
        let mut q = vec![0.0; hm * hk];
        multiply_strassen_into(lhs, rhs, &mut q, hm, hn, hk, config);
        q
    };

    // q1 = a (x + z)
    let q1 = {
        let a11 = extract_block(a_mat, s_a, mp, np);
        let x_plus_z = extract_block_diff(b_mat, s_x, s_z, np, kp, 1.0);
        half_product(&a11, &x_plus_z)
    };
    // q2 = d (y + t)
    let q2 = {
        let a22 = extract_block(a_mat, s_d, mp, np);
        let y_plus_t = extract_block_diff(b_mat, s_y, s_t, np, kp, 1.0);
        half_product(&a22, &y_plus_t)
    };
    // q3 = (d - a)(z - y)
    let q3 = {
        let d_minus_a = extract_block_diff(a_mat, s_d, s_a, mp, np, -1.0);
        let z_minus_y = extract_block_diff(b_mat, s_z, s_y, np, kp, -1.0);
        half_product(&d_minus_a, &z_minus_y)
    };
    // q4 = (b - d)(z + t)
    let q4 = {
        let b_minus_d = extract_block_diff(a_mat, s_b, s_d, mp, np, -1.0);
        let z_plus_t = extract_block_diff(b_mat, s_z, s_t, np, kp, 1.0);
        half_product(&b_minus_d, &z_plus_t)
    };
    // q5 = (b - a) z
    let q5 = {
        let b_minus_a = extract_block_diff(a_mat, s_b, s_a, mp, np, -1.0);
        let b21 = extract_block(b_mat, s_z, np, kp);
        half_product(&b_minus_a, &b21)
    };
    // q6 = (c - a)(x + y)
    let q6 = {
        let c_minus_a = extract_block_diff(a_mat, s_c, s_a, mp, np, -1.0);
        let x_plus_y = extract_block_diff(b_mat, s_x, s_y, np, kp, 1.0);
        half_product(&c_minus_a, &x_plus_y)
    };
    // q7 = (c - d) y
    let q7 = {
        let c_minus_d = extract_block_diff(a_mat, s_c, s_d, mp, np, -1.0);
        let b12 = extract_block(b_mat, s_y, np, kp);
        half_product(&c_minus_d, &b12)
    };

    let mut c_pad = vec![0.0; mp * kp];
    // R11 = q1 + q5
    accumulate_block(&mut c_pad, &q1, Some(&q5), r11, mp, kp, 1.0, 1.0);
    // R12 = q2 + q3 + q4 - q5
    accumulate_block(&mut c_pad, &q2, Some(&q3), r12, mp, kp, 1.0, 1.0);
    accumulate_block(&mut c_pad, &q4, Some(&q5), r12, mp, kp, 1.0, -1.0);
    // R21 = q1 + q3 + q6 - q7
    accumulate_block(&mut c_pad, &q1, Some(&q3), r21, mp, kp, 1.0, 1.0);
    accumulate_block(&mut c_pad, &q6, Some(&q7), r21, mp, kp, 1.0, -1.0);
    // R22 = q2 + q7
    accumulate_block(&mut c_pad, &q2, Some(&q7), r22, mp, kp, 1.0, 1.0);

    depad_into(&c_pad, mp, kp, c, m, k);
}

/// Multiplies `a` (`m x n`) by `b` (`n x k`) with an explicit configuration.
pub fn multiply_strassen_with(
    a: &[f64],
    b: &[f64],
    m: usize,
    n: usize,
    k: usize,
    config: &StrassenConfig,
) -> Result<Vec<f64>> {
    ensure_shape("a", a, m, n)?;
    ensure_shape("b", b, n, k)?;
    let mut c = vec![0.0; m * k];
    multiply_strassen_into(a, b, &mut c, m, n, k, config);
    Ok(c)
}

/// Multiplies `a` (`m x n`) by `b` (`n x k`) into a new `m x k` matrix.
pub fn multiply_strassen(a: &[f64], b: &[f64], m: usize, n: usize, k: usize) -> Result<Vec<f64>> {
    multiply_strassen_with(a, b, m, n, k, &StrassenConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::matrices_equal;
    use crate::naive::multiply_naive;

    const FULL_RECURSION: StrassenConfig = StrassenConfig {
        fallback_threshold: 1,
    };

    fn ramp(len: usize, scale: f64) -> Vec<f64> {
        (0..len).map(|i| ((i * 7 + 3) % 11) as f64 * scale - 2.0).collect()
    }

    #[test]
    fn test_identity_leaves_matrix_unchanged() {
        let a = [4.0, 3.0, 6.0, 3.0];
        let id = [1.0, 0.0, 0.0, 1.0];
        let c = multiply_strassen_with(&a, &id, 2, 2, 2, &FULL_RECURSION).unwrap();
        assert_eq!(c, a.to_vec());
    }

    #[test]
    fn test_ones_squared_through_padding() {
        let ones = vec![1.0; 9];
        let c = multiply_strassen_with(&ones, &ones, 3, 3, 3, &FULL_RECURSION).unwrap();
        assert_eq!(c, vec![3.0; 9]);
    }

    #[test]
    fn test_scalar_broadcasts() {
        // 1x1 on the left
        let c = multiply_strassen_with(&[2.0], &[1.0, -3.0, 0.5], 1, 1, 3, &FULL_RECURSION).unwrap();
        assert_eq!(c, vec![2.0, -6.0, 1.0]);
        // 1x1 on the right
        let c = multiply_strassen_with(&[1.0, -3.0, 0.5], &[2.0], 3, 1, 1, &FULL_RECURSION).unwrap();
        assert_eq!(c, vec![2.0, -6.0, 1.0]);
    }

    #[test]
    fn test_matches_naive_on_mixed_shapes() {
        for &(m, n, k) in &[(2, 2, 2), (3, 5, 2), (8, 8, 8), (7, 3, 9), (1, 4, 4), (4, 4, 1), (16, 15, 7)] {
            let a = ramp(m * n, 0.5);
            let b = ramp(n * k, 0.25);
            let expected = multiply_naive(&a, &b, m, n, k).unwrap();
            let got = multiply_strassen_with(&a, &b, m, n, k, &FULL_RECURSION).unwrap();
            assert!(matrices_equal(&got, &expected, m, k, 1e-9), "{m}x{n}x{k}");
        }
    }

    #[test]
    fn test_default_threshold_falls_back_to_naive() {
        let a = ramp(12, 1.0);
        let b = ramp(12, 1.0);
        let expected = multiply_naive(&a, &b, 3, 4, 3).unwrap();
        assert_eq!(multiply_strassen(&a, &b, 3, 4, 3).unwrap(), expected);
    }

    #[test]
    fn test_into_overwrites_destination() {
        let a = ramp(16, 1.0);
        let b = ramp(16, 1.0);
        let mut c = vec![f64::NAN; 16];
        multiply_strassen_into(&a, &b, &mut c, 4, 4, 4, &FULL_RECURSION);
        let expected = multiply_naive(&a, &b, 4, 4, 4).unwrap();
        assert!(matrices_equal(&c, &expected, 4, 4, 1e-9));
    }
}
