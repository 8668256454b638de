//! Core types and the Householder QR decomposition.
//!
//! This crate factors an arbitrary real `m × n` matrix as `A = Q·R`, with
//! `Q` an `m × m` orthogonal matrix and `R` an `m × n` upper-trapezoidal
//! matrix. Tall, wide and rank-deficient matrices are all supported.
//!
//! # Key Concepts
//!
//! - **Householder reflectors**: `I − β·v·vᵀ`, one per column, each zeroing
//!   the entries below the diagonal of its column
//! - **Packed reduction**: `R` and the reflector vectors share one working
//!   copy of the input
//! - **Cached factors**: `R`, `H`, `Q` and `Qᵗ` are derived on first use and
//!   returned by reference afterwards
//!
//! # Modules
//!
//! - [`core`]: Scalar trait, matrix aliases and error types
//! - [`matrix`]: Construction helpers and sub-column kernels
//! - [`decomposition`]: Reduction, accumulation and the cached decomposition
//! - [`numerical`]: Stable norms and decomposition validation

pub mod core;
pub mod decomposition;
pub mod matrix;
pub mod numerical;
pub mod utils;

// Re-export commonly used items at the crate root
pub use crate::core::{error, types};
pub use error::{DecompositionError, Result};

#[cfg(any(test, feature = "test-utils"))]
pub use utils::test_utils;

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use householder_core::prelude::*;
///
/// let qr = QrDecomposition::new(&DMatrix::<f64>::identity(2, 2)).unwrap();
/// assert_eq!(qr.reflector_count(), 2);
/// ```
pub mod prelude {
    pub use crate::core::error::{DecompositionError, Result};
    pub use crate::core::types::{constants, DMatrix, DVector, Scalar};
    pub use crate::decomposition::{
        accumulate_q, pivot_sign, DerivationStats, Factor, HouseholderReduction, QrDecomposition,
    };
    pub use crate::matrix::{from_rows, identity};
    pub use crate::numerical::{
        stable_norm, DecompositionValidator, ValidationConfig, ValidationReport,
    };
}
