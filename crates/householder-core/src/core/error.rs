//! Error types for the decomposition.
//!
//! The decomposition itself has a single failure mode, an input with no
//! rows or no columns. The remaining variants belong to the construction
//! helpers and the validator.

use thiserror::Error;

/// Errors that can occur while building or checking a decomposition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecompositionError {
    /// Matrix has zero rows or zero columns.
    ///
    /// This is the only error `QrDecomposition::new` returns. Singular and
    /// rank-deficient matrices are valid inputs.
    #[error("Invalid matrix shape {rows}x{cols}: at least one row and one column are required")]
    InvalidShape {
        /// Number of rows of the rejected matrix
        rows: usize,
        /// Number of columns of the rejected matrix
        cols: usize,
    },

    /// Row-array input whose rows do not all have the same length.
    #[error("Row {row} has {actual} entries, expected {expected}")]
    RaggedRows {
        /// Index of the first offending row
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Dimension mismatch between a matrix and a decomposition.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions
        expected: String,
        /// Actual dimensions
        actual: String,
    },
}

impl DecompositionError {
    /// Create an InvalidShape error.
    pub fn invalid_shape(rows: usize, cols: usize) -> Self {
        Self::InvalidShape { rows, cols }
    }

    /// Create a RaggedRows error.
    pub fn ragged_rows(row: usize, expected: usize, actual: usize) -> Self {
        Self::RaggedRows {
            row,
            expected,
            actual,
        }
    }

    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

/// Result type alias for operations that can produce DecompositionError.
pub type Result<T> = std::result::Result<T, DecompositionError>;
