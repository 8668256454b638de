//! Numerical stability utilities.
//!
//! Norm and error-scaling helpers shared by the reduction kernels and the
//! validator.

use nalgebra::{storage::RawStorage, Dim, Matrix};
use num_traits::Float;

use crate::core::types::Scalar;

/// Stabilized Euclidean norm of every entry of `v`.
///
/// Entries are scaled by the largest magnitude before squaring so that
/// neither overflow nor underflow occurs for representable inputs. Returns
/// exactly zero if and only if every entry is zero.
pub fn stable_norm<T, R, C, S>(v: &Matrix<T, R, C, S>) -> T
where
    T: Scalar,
    R: Dim,
    C: Dim,
    S: RawStorage<T, R, C>,
{
    let max_elem = v
        .iter()
        .fold(T::zero(), |acc, x| <T as Float>::max(acc, <T as Float>::abs(*x)));

    if max_elem == T::zero() || !<T as Float>::is_finite(max_elem) {
        return max_elem;
    }

    let scaled_sum = v.iter().fold(T::zero(), |acc, x| {
        let scaled = *x / max_elem;
        acc + scaled * scaled
    });

    max_elem * <T as Float>::sqrt(scaled_sum)
}

/// Scale an absolute error by the magnitude of its reference, floored at one.
///
/// Small references keep an absolute criterion; large ones a relative one.
pub fn scaled_error<T: Scalar>(error: T, reference_norm: T) -> T {
    error / <T as Float>::max(T::one(), reference_norm)
}
