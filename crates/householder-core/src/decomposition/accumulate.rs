//! Accumulation of the orthogonal factor.
//!
//! `Q = H_0·H_1·…·H_{p−1}` is built by applying the reflectors to the
//! identity in reverse order, so each product is formed from the right
//! without ever materializing an `m × m` reflector.

use crate::{
    core::types::{DMatrix, Scalar},
    decomposition::reflector::HouseholderReduction,
    matrix::identity,
};

/// Build the explicit `m × m` orthogonal factor of a reduction.
pub fn accumulate_q<T: Scalar>(reduction: &HouseholderReduction<T>) -> DMatrix<T> {
    let m = reduction.nrows();
    let mut q = identity::<T>(m);

    for k in (0..reduction.reflector_count()).rev() {
        // Columns j < k are still e_j here and vanish on rows k..m
        for col in k..m {
            reduction.apply_reflector(k, &mut q, col);
        }
    }

    q
}
