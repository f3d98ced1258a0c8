//! Padding to even dimensions around a recursive descent.
//!
//! `pad` hands back a [`Padded`] value that owns (or borrows, when nothing
//! needed padding) the enlarged matrix together with its dimensions. The
//! caller threads it into the recursive call and drops it afterwards;
//! `depad` copies the original top-left corner back out.

use std::borrow::Cow;

use num_integer::Integer;

/// What the added rows and columns are filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadKind {
    /// All zeros. Used around products.
    Zero,
    /// Zeros with `1` on the new diagonal entries, so an invertible matrix
    /// stays invertible. Used around inversion.
    Identity,
}

/// A matrix that has been rounded up to even dimensions.
#[derive(Debug, Clone)]
pub struct Padded<'a> {
    pub data: Cow<'a, [f64]>,
    pub rows: usize,
    pub cols: usize,
}

impl Padded<'_> {
    /// True when `pad` had to allocate.
    pub fn is_padded(&self) -> bool {
        matches!(self.data, Cow::Owned(_))
    }
}

/// Rounds `dim` up to the next even number.
#[inline]
pub fn padded_dim(dim: usize) -> usize {
    if dim.is_odd() {
        dim + 1
    } else {
        dim
    }
}

/// Pads the `m x n` matrix `a` to even dimensions.
///
/// Even input is returned borrowed and unchanged.
pub fn pad(a: &[f64], m: usize, n: usize, kind: PadKind) -> Padded<'_> {
    debug_assert_eq!(a.len(), m * n);
    let (rows, cols) = (padded_dim(m), padded_dim(n));
    if rows == m && cols == n {
        return Padded {
            data: Cow::Borrowed(a),
            rows,
            cols,
        };
    }

    let mut data = vec![0.0; rows * cols];
    for (src, dst) in a.chunks_exact(n).zip(data.chunks_exact_mut(cols)) {
        dst[..n].copy_from_slice(src);
    }
    if kind == PadKind::Identity {
        // New diagonal entries only exist where both a row and a column were added.
        for d in m.max(n)..rows.min(cols) {
            data[d * cols + d] = 1.0;
        }
    }

    Padded {
        data: Cow::Owned(data),
        rows,
        cols,
    }
}

/// Copies the top-left `m x n` corner of `padded` (`rows x cols`) into `out`.
pub fn depad_into(padded: &[f64], rows: usize, cols: usize, out: &mut [f64], m: usize, n: usize) {
    debug_assert!(m <= rows && n <= cols);
    debug_assert!(padded.len() >= rows * cols && out.len() >= m * n);
    if cols == n {
        out[..m * n].copy_from_slice(&padded[..m * n]);
        return;
    }
    for (src, dst) in padded.chunks_exact(cols).zip(out.chunks_exact_mut(n)).take(m) {
        dst.copy_from_slice(&src[..n]);
    }
}

/// Returns the top-left `m x n` corner of `padded` (`rows x cols`).
pub fn depad(padded: &[f64], rows: usize, cols: usize, m: usize, n: usize) -> Vec<f64> {
    let mut out = vec![0.0; m * n];
    depad_into(padded, rows, cols, &mut out, m, n);
    out
}
