//! Property-based tests across the kernels.

#[cfg(test)]
mod tests {
    use proptest::collection::vec;
    use proptest::prelude::*;

    use crate::compare::{identity, matrices_equal};
    use crate::lu::invert_lu;
    use crate::naive::multiply_naive;
    use crate::padding::{depad, pad, PadKind};
    use crate::strassen::{multiply_strassen_with, StrassenConfig};

    const FULL_RECURSION: StrassenConfig = StrassenConfig {
        fallback_threshold: 1,
    };

    fn product_operands() -> impl Strategy<Value = (usize, usize, usize, Vec<f64>, Vec<f64>)> {
        (1usize..=16, 1usize..=16, 1usize..=16).prop_flat_map(|(m, n, k)| {
            (
                Just(m),
                Just(n),
                Just(k),
                vec(-10.0f64..10.0, m * n),
                vec(-10.0f64..10.0, n * k),
            )
        })
    }

    fn matrix() -> impl Strategy<Value = (usize, usize, Vec<f64>)> {
        (1usize..=9, 1usize..=9)
            .prop_flat_map(|(m, n)| (Just(m), Just(n), vec(any::<f64>(), m * n)))
    }

    // Strictly diagonally dominant rows keep the unpivoted LU well defined.
    fn dominant_square() -> impl Strategy<Value = (usize, Vec<f64>)> {
        (1usize..=12).prop_flat_map(|n| {
            (Just(n), vec(-1.0f64..1.0, n * n)).prop_map(|(n, mut a)| {
                for i in 0..n {
                    a[i * n + i] += n as f64 + 1.0;
                }
                (n, a)
            })
        })
    }

    proptest! {
        #[test]
        fn strassen_matches_naive((m, n, k, a, b) in product_operands()) {
            let expected = multiply_naive(&a, &b, m, n, k).unwrap();
            let got = multiply_strassen_with(&a, &b, m, n, k, &FULL_RECURSION).unwrap();
            let scale = expected.iter().fold(1.0f64, |acc, x| acc.max(x.abs()));
            prop_assert!(matrices_equal(&got, &expected, m, k, 1e-9 * scale));
        }

        #[test]
        fn depad_undoes_pad((m, n, a) in matrix()) {
            for kind in [PadKind::Zero, PadKind::Identity] {
                let p = pad(&a, m, n, kind);
                prop_assert!(p.rows % 2 == 0 && p.cols % 2 == 0);
                let back = depad(&p.data, p.rows, p.cols, m, n);
                let exact = back.iter().zip(&a).all(|(x, y)| x.to_bits() == y.to_bits());
                prop_assert!(exact);
            }
        }

        #[test]
        fn lu_inverse_round_trips((n, a) in dominant_square()) {
            let inv = invert_lu(&a, n).unwrap();
            let product = multiply_naive(&a, &inv, n, n, n).unwrap();
            prop_assert!(matrices_equal(&product, &identity(n), n, n, 1e-9));
        }
    }
}
