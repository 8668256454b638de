//! Numerical validation of QR decompositions.
//!
//! This module measures how well a decomposition satisfies its defining
//! properties: reconstruction `Q·R ≈ A`, orthogonality `Qᵗ·Q ≈ I`, and the
//! trapezoidal structure of `R` and `H`.

use num_traits::Float;

use crate::{
    core::{
        error::{DecompositionError, Result},
        types::{constants, DMatrix, Scalar},
    },
    decomposition::QrDecomposition,
    matrix::{identity, shape_string},
    numerical::stability::{scaled_error, stable_norm},
};

/// Configuration for decomposition validation.
#[derive(Debug, Clone)]
pub struct ValidationConfig<T> {
    /// Tolerance on `‖Q·R − A‖ / max(1, ‖A‖)`
    pub reconstruction_tolerance: T,
    /// Tolerance on `‖Qᵗ·Q − I‖`
    pub orthogonality_tolerance: T,
    /// Largest magnitude accepted for structurally zero entries
    pub entry_tolerance: T,
}

impl<T: Scalar> Default for ValidationConfig<T> {
    fn default() -> Self {
        Self {
            reconstruction_tolerance: constants::reconstruction_tolerance::<T>(),
            orthogonality_tolerance: constants::orthogonality_tolerance::<T>(),
            entry_tolerance: constants::entry_tolerance::<T>(),
        }
    }
}

/// Measured errors of one decomposition.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationReport<T> {
    /// `‖Q·R − A‖ / max(1, ‖A‖)`
    pub reconstruction_error: T,
    /// `‖Qᵗ·Q − I‖`
    pub orthogonality_error: T,
    /// Largest magnitude strictly below the diagonal of `R`
    pub r_lower_max: T,
    /// Largest magnitude strictly above the diagonal of `H`
    pub h_upper_max: T,
    /// Whether every measurement is within its tolerance
    pub passed: bool,
}

/// Validation tools for QR decompositions.
pub struct DecompositionValidator;

impl DecompositionValidator {
    /// Measure every property of `qr` against the matrix it was built from.
    ///
    /// Returns [`DecompositionError::DimensionMismatch`] if `a` does not have
    /// the decomposition's shape.
    pub fn validate<T: Scalar>(
        a: &DMatrix<T>,
        qr: &QrDecomposition<T>,
        config: &ValidationConfig<T>,
    ) -> Result<ValidationReport<T>> {
        if a.shape() != (qr.nrows(), qr.ncols()) {
            return Err(DecompositionError::dimension_mismatch(
                format!("{}x{}", qr.nrows(), qr.ncols()),
                shape_string(a),
            ));
        }

        let reconstruction_error = Self::reconstruction_error(a, qr.q(), qr.r());
        let orthogonality_error = Self::orthogonality_error(qr.q(), qr.qt());
        let r_lower_max = Self::max_below_diagonal(qr.r());
        let h_upper_max = Self::max_above_diagonal(qr.h());

        let passed = reconstruction_error <= config.reconstruction_tolerance
            && orthogonality_error <= config.orthogonality_tolerance
            && r_lower_max <= config.entry_tolerance
            && h_upper_max <= config.entry_tolerance;

        Ok(ValidationReport {
            reconstruction_error,
            orthogonality_error,
            r_lower_max,
            h_upper_max,
            passed,
        })
    }

    /// `‖Q·R − A‖ / max(1, ‖A‖)` in the Frobenius norm.
    pub fn reconstruction_error<T: Scalar>(a: &DMatrix<T>, q: &DMatrix<T>, r: &DMatrix<T>) -> T {
        let residual = q * r - a;
        scaled_error(stable_norm(&residual), stable_norm(a))
    }

    /// `‖Qᵗ·Q − I‖` in the Frobenius norm.
    pub fn orthogonality_error<T: Scalar>(q: &DMatrix<T>, qt: &DMatrix<T>) -> T {
        let residual = qt * q - identity::<T>(q.ncols());
        stable_norm(&residual)
    }

    /// Largest magnitude strictly below the main diagonal.
    pub fn max_below_diagonal<T: Scalar>(m: &DMatrix<T>) -> T {
        let mut max = T::zero();
        for j in 0..m.ncols() {
            for i in (j + 1)..m.nrows() {
                max = <T as Float>::max(max, <T as Float>::abs(m[(i, j)]));
            }
        }
        max
    }

    /// Largest magnitude strictly above the main diagonal.
    pub fn max_above_diagonal<T: Scalar>(m: &DMatrix<T>) -> T {
        Self::max_below_diagonal(&m.transpose())
    }
}
