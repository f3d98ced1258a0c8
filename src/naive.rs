use crate::error::{ensure_shape, Result};

/// Writes the `m x k` product of `a` (`m x n`) and `b` (`n x k`) into `c`.
///
/// `c` is overwritten. Loops run row of `a`, then inner index, then row of
/// `b`, so every entry still sums its terms in ascending inner order.
pub fn multiply_naive_into(a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
    debug_assert!(a.len() >= m * n && b.len() >= n * k && c.len() >= m * k);
    c[..m * k].fill(0.0);

    for (i, a_row) in a.chunks_exact(n).take(m).enumerate() {
        let c_row = &mut c[i * k..(i + 1) * k];
        for (l, &a_val) in a_row.iter().enumerate() {
            let b_row = &b[l * k..(l + 1) * k];
            c_row
                .iter_mut()
                .zip(b_row)
                .for_each(|(r, &b_val)| *r += a_val * b_val);
        }
    }
}

/// Multiplies `a` (`m x n`) by `b` (`n x k`) into a new `m x k` matrix.
pub fn multiply_naive(a: &[f64], b: &[f64], m: usize, n: usize, k: usize) -> Result<Vec<f64>> {
    ensure_shape("a", a, m, n)?;
    ensure_shape("b", b, n, k)?;
    let mut c = vec![0.0; m * k];
    multiply_naive_into(a, b, &mut c, m, n, k);
    Ok(c)
}
