//! Recursive block inversion through the Schur complement.
//!
//! For `A = [a b; c d]` with `e = a^-1` and `t = (d - c e b)^-1`:
//!
//! ```text
//! A^-1 = [ e + e b t c e   -e b t ]
//!        [ -t c e           t     ]
//! ```
//!
//! Both `a` and the Schur complement must be invertible at every level.
//! Nothing checks this; a singular block shows up as `Inf`/`NaN`.

use crate::block::{accumulate_block, extract_block, quadrant_offsets, scaled_add};
use crate::error::{ensure_shape, Result};
use crate::naive::multiply_naive_into;
use crate::padding::{depad_into, pad, PadKind};
use crate::strassen::{multiply_strassen_into, StrassenConfig};

/// The multiply used for the block products inside the inversion.
pub trait BlockMultiply {
    /// Overwrites `c` with the `m x k` product of `a` (`m x n`) and `b` (`n x k`).
    fn multiply_into(&self, a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize);

    /// Square `size x size` product into a new buffer.
    fn square(&self, a: &[f64], b: &[f64], size: usize) -> Vec<f64> {
        let mut c = vec![0.0; size * size];
        self.multiply_into(a, b, &mut c, size, size, size);
        c
    }
}

/// Triple-loop products.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveMultiply;

impl BlockMultiply for NaiveMultiply {
    fn multiply_into(&self, a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
        multiply_naive_into(a, b, c, m, n, k);
    }
}

/// Strassen products with the given configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrassenMultiply(pub StrassenConfig);

impl BlockMultiply for StrassenMultiply {
    fn multiply_into(&self, a: &[f64], b: &[f64], c: &mut [f64], m: usize, n: usize, k: usize) {
        multiply_strassen_into(a, b, c, m, n, k, &self.0);
    }
}

/// Writes the inverse of the `n x n` matrix `a` into `inverse`, overwriting it.
pub fn invert_strassen_into<M: BlockMultiply>(a: &[f64], inverse: &mut [f64], n: usize, mul: &M) {
    debug_assert!(a.len() >= n * n && inverse.len() >= n * n);
    if n == 1 {
        inverse[0] = 1.0 / a[0];
        return;
    }

    let a_pad = pad(&a[..n * n], n, n, PadKind::Identity);
    let np = a_pad.rows;
    let h = np / 2;
    let [s_a, s_b, s_c, s_d] = quadrant_offsets(np, np);

    let a11 = extract_block(&a_pad.data, s_a, np, np);
    let a12 = extract_block(&a_pad.data, s_b, np, np);
    let a21 = extract_block(&a_pad.data, s_c, np, np);
    let a22 = extract_block(&a_pad.data, s_d, np, np);

    let mut e = vec![0.0; h * h];
    invert_strassen_into(&a11, &mut e, h, mul);

    let ce = mul.square(&a21, &e, h);
    let ceb = mul.square(&ce, &a12, h);
    let schur = scaled_add(&a22, &ceb, h * h, -1.0);

    let mut t = vec![0.0; h * h];
    invert_strassen_into(&schur, &mut t, h, mul);

    let eb = mul.square(&e, &a12, h);
    let ebt = mul.square(&eb, &t, h);
    let ebtce = mul.square(&ebt, &ce, h);
    let tce = mul.square(&t, &ce, h);

    let mut inv_pad = vec![0.0; np * np];
    accumulate_block(&mut inv_pad, &e, Some(&ebtce), s_a, np, np, 1.0, 1.0);
    accumulate_block(&mut inv_pad, &ebt, None, s_b, np, np, -1.0, 0.0);
    accumulate_block(&mut inv_pad, &tce, None, s_c, np, np, -1.0, 0.0);
    accumulate_block(&mut inv_pad, &t, None, s_d, np, np, 1.0, 0.0);

    depad_into(&inv_pad, np, np, inverse, n, n);
}

/// Inverts the `n x n` matrix `a` with block products from `mul`.
pub fn invert_strassen_with<M: BlockMultiply>(a: &[f64], n: usize, mul: &M) -> Result<Vec<f64>> {
    ensure_shape("a", a, n, n)?;
    let mut inverse = vec![0.0; n * n];
    invert_strassen_into(a, &mut inverse, n, mul);
    Ok(inverse)
}

/// Recursive inversion using naive block products.
pub fn invert_strassen_using_naive(a: &[f64], n: usize) -> Result<Vec<f64>> {
    invert_strassen_with(a, n, &NaiveMultiply)
}

/// Recursive inversion using Strassen block products.
pub fn invert_strassen_using_strassen(a: &[f64], n: usize) -> Result<Vec<f64>> {
    invert_strassen_with(a, n, &StrassenMultiply::default())
}
