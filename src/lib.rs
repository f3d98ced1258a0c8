//! Dense matrix products and inverses on row-major `f64` buffers.
//!
//! Every matrix is a flat slice plus explicit dimensions. Products come in a
//! triple-loop and a Strassen flavour; inverses come from LU factors or from
//! recursive Schur-complement block inversion on top of either product.
//!
//! ```
//! use strassen_kernels::{invert_lu, multiply_strassen};
//!
//! let a = [4.0, 3.0, 6.0, 3.0];
//! let id = [1.0, 0.0, 0.0, 1.0];
//! assert_eq!(multiply_strassen(&a, &id, 2, 2, 2).unwrap(), a.to_vec());
//!
//! let inv = invert_lu(&a, 2).unwrap();
//! assert!((inv[0] + 0.5).abs() < 1e-12);
//! ```

pub mod bench;
pub mod block;
pub mod compare;
pub mod error;
pub mod inverse;
pub mod io;
pub mod lu;
pub mod naive;
pub mod padding;
pub mod random;
pub mod strassen;

mod proptests;

pub use error::{MatrixError, Result};
pub use inverse::{
    invert_strassen_using_naive, invert_strassen_using_strassen, invert_strassen_with,
    BlockMultiply, NaiveMultiply, StrassenMultiply,
};
pub use lu::{invert_lu, lu_decompose};
pub use naive::multiply_naive;
pub use strassen::{multiply_strassen, multiply_strassen_with, StrassenConfig};
