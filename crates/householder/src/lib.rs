//! Householder QR decomposition of real matrices.
//!
//! This crate re-exports the API of `householder-core` behind a single
//! dependency, together with the `nalgebra` version its matrices come from.
//!
//! # Quick Start
//!
//! ```
//! use householder::prelude::*;
//!
//! // Tall 4×3 input: Q is 4×4, R is 4×3
//! let qr = QrDecomposition::<f64>::from_rows(&[
//!     [12.0, -51.0, 4.0],
//!     [6.0, 167.0, -68.0],
//!     [-4.0, 24.0, -41.0],
//!     [-5.0, 34.0, 7.0],
//! ])
//! .unwrap();
//!
//! assert_eq!(qr.q().shape(), (4, 4));
//! assert_eq!(qr.r().shape(), (4, 3));
//! assert_eq!(qr.r()[(3, 2)], 0.0);
//! ```

pub use householder_core::{decomposition, error, matrix, numerical, types};
pub use householder_core::{DecompositionError, Result};

pub use nalgebra;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use householder_core::prelude::*;
}
