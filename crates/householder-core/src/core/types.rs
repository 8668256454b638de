//! Type definitions and aliases for the decomposition.
//!
//! This module provides the scalar trait shared by every algorithm in the
//! crate, the dense matrix aliases it works with, and precision-dependent
//! tolerances.

use nalgebra::{Dyn, OMatrix, OVector, RealField, Scalar as NalgebraScalar};
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types the decomposition works with (f32 or f64).
///
/// This trait combines the nalgebra field bounds needed for matrix
/// arithmetic with the `num-traits` float operations used by the kernels.
pub trait Scalar:
    NalgebraScalar
    + RealField
    + Float
    + FromPrimitive
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Relative tolerance on `‖Q·R − A‖ / max(1, ‖A‖)`.
    const RECONSTRUCTION_TOLERANCE: Self;

    /// Absolute tolerance on `‖Qᵗ·Q − I‖`.
    const ORTHOGONALITY_TOLERANCE: Self;

    /// Largest magnitude accepted for an entry that must be zero.
    const ENTRY_TOLERANCE: Self;
}

impl Scalar for f32 {
    const RECONSTRUCTION_TOLERANCE: Self = 1e-5;
    const ORTHOGONALITY_TOLERANCE: Self = 1e-5;
    const ENTRY_TOLERANCE: Self = 1e-7;
}

impl Scalar for f64 {
    const RECONSTRUCTION_TOLERANCE: Self = 1e-14;
    const ORTHOGONALITY_TOLERANCE: Self = 1e-13;
    const ENTRY_TOLERANCE: Self = 1e-16;
}

/// Type alias for a dynamically-sized matrix.
pub type DMatrix<T> = OMatrix<T, Dyn, Dyn>;

/// Type alias for a dynamically-sized column vector.
pub type DVector<T> = OVector<T, Dyn>;

/// Numerical constants for different precision levels.
pub mod constants {
    use super::Scalar;

    /// Get the relative reconstruction tolerance.
    pub fn reconstruction_tolerance<T: Scalar>() -> T {
        T::RECONSTRUCTION_TOLERANCE
    }

    /// Get the orthogonality checking tolerance.
    pub fn orthogonality_tolerance<T: Scalar>() -> T {
        T::ORTHOGONALITY_TOLERANCE
    }

    /// Get the tolerance for structurally zero entries.
    pub fn entry_tolerance<T: Scalar>() -> T {
        T::ENTRY_TOLERANCE
    }
}
