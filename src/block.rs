//! Quadrant access for row-major matrices with even dimensions.
//!
//! A block is one quarter of an `m x n` parent, addressed by its flat start
//! offset and the parent's row stride `n`. Blocks are always copied out into
//! their own contiguous buffer, so recursive calls can treat them as
//! top-level matrices. Callers pad to even dimensions first.

/// Start offsets of the four quadrants `[11, 12, 21, 22]` of an `m x n` matrix.
pub fn quadrant_offsets(m: usize, n: usize) -> [usize; 4] {
    let top_right = n / 2;
    let bottom_left = m / 2 * n;
    [0, top_right, bottom_left, bottom_left + top_right]
}

#[inline]
fn debug_check_block(len: usize, start: usize, m: usize, n: usize) {
    debug_assert!(m % 2 == 0 && n % 2 == 0, "block access needs even dimensions");
    debug_assert!(len >= m * n, "parent buffer shorter than m * n");
    debug_assert!(
        start + (m / 2 - 1) * n + (n / 2 - 1) < m * n,
        "block at {start} leaves the {m}x{n} parent"
    );
}

/// Returns `a[i] + alpha * b[i]` for `i < size`.
pub fn scaled_add(a: &[f64], b: &[f64], size: usize, alpha: f64) -> Vec<f64> {
    assert!(
        a.len() >= size && b.len() >= size,
        "scaled_add operands shorter than {size}"
    );
    a[..size]
        .iter()
        .zip(&b[..size])
        .map(|(&x, &y)| x + alpha * y)
        .collect()
}

/// Returns the block at `start1` plus `alpha` times the block at `start2`.
pub fn extract_block_diff(
    a: &[f64],
    start1: usize,
    start2: usize,
    m: usize,
    n: usize,
    alpha: f64,
) -> Vec<f64> {
    debug_check_block(a.len(), start1, m, n);
    debug_check_block(a.len(), start2, m, n);
    let half = n / 2;
    let mut out = Vec::with_capacity(m / 2 * half);
    for i in 0..m / 2 {
        let row1 = &a[start1 + i * n..start1 + i * n + half];
        let row2 = &a[start2 + i * n..start2 + i * n + half];
        out.extend(row1.iter().zip(row2).map(|(&x, &y)| x + alpha * y));
    }
    out
}

/// Copies the `(m/2) x (n/2)` block at `start` into a new buffer.
pub fn extract_block(a: &[f64], start: usize, m: usize, n: usize) -> Vec<f64> {
    debug_check_block(a.len(), start, m, n);
    let half = n / 2;
    let mut out = Vec::with_capacity(m / 2 * half);
    for i in 0..m / 2 {
        out.extend_from_slice(&a[start + i * n..start + i * n + half]);
    }
    out
}

/// Adds `alpha * a + beta * b` (or `alpha * a` when `b` is `None`) into the
/// block of `c` at `start`. Always accumulates, never overwrites.
#[allow(clippy::too_many_arguments)]
pub fn accumulate_block(
    c: &mut [f64],
    a: &[f64],
    b: Option<&[f64]>,
    start: usize,
    m: usize,
    n: usize,
    alpha: f64,
    beta: f64,
) {
    debug_check_block(c.len(), start, m, n);
    let half = n / 2;
    debug_assert!(a.len() >= m / 2 * half);
    for (i, a_row) in a.chunks_exact(half).take(m / 2).enumerate() {
        let c_row = &mut c[start + i * n..start + i * n + half];
        match b {
            Some(b) => {
                let b_row = &b[i * half..(i + 1) * half];
                c_row
                    .iter_mut()
                    .zip(a_row.iter().zip(b_row))
                    .for_each(|(r, (&x, &y))| *r += alpha * x + beta * y);
            }
            None => c_row
                .iter_mut()
                .zip(a_row)
                .for_each(|(r, &x)| *r += alpha * x),
        }
    }
}
