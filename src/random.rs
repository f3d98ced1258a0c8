//! Random test matrices.

use rand::distributions::Open01;
use rand::Rng;

/// Fills `buffer` with values drawn from the open interval `(0, 1)`.
pub fn fill_random<R: Rng>(buffer: &mut [f64], rng: &mut R) {
    buffer.iter_mut().for_each(|x| *x = rng.sample(Open01));
}

/// A fresh `m x n` matrix with entries in `(0, 1)`.
pub fn random_matrix(m: usize, n: usize) -> Vec<f64> {
    let mut rng = rand::thread_rng();
    let mut a = vec![0.0; m * n];
    fill_random(&mut a, &mut rng);
    a
}

/// Draws random `n x n` matrices until one passes [`is_invertible`].
pub fn random_invertible<R: Rng>(n: usize, rng: &mut R) -> Vec<f64> {
    let mut a = vec![0.0; n * n];
    loop {
        fill_random(&mut a, rng);
        if is_invertible(&a, n) {
            return a;
        }
    }
}

/// Rank test by Gaussian elimination with partial pivoting.
///
/// This is a driver-side sanity check on inputs; the LU kernel itself does
/// not pivot.
pub fn is_invertible(a: &[f64], n: usize) -> bool {
    if a.len() != n * n || n == 0 {
        return false;
    }
    let scale = a.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    if !scale.is_finite() || scale == 0.0 {
        return false;
    }
    let tol = scale * n as f64 * f64::EPSILON;
    let mut w = a.to_vec();

    for col in 0..n {
        let Some(pivot_row) = (col..n).max_by(|&i, &j| {
            w[i * n + col].abs().total_cmp(&w[j * n + col].abs())
        }) else {
            return false;
        };
        if w[pivot_row * n + col].abs() <= tol {
            return false;
        }
        if pivot_row != col {
            for j in 0..n {
                w.swap(col * n + j, pivot_row * n + j);
            }
        }
        let pivot = w[col * n + col];
        for i in col + 1..n {
            let factor = w[i * n + col] / pivot;
            for j in col..n {
                w[i * n + j] -= factor * w[col * n + j];
            }
        }
    }
    true
}
