//! Householder QR decomposition.
//!
//! - [`reflector`]: reflector computation and in-place reduction
//! - [`accumulate`]: explicit construction of the orthogonal factor
//! - [`qr`]: the decomposition type with its cached factors

pub mod accumulate;
pub mod qr;
pub mod reflector;

pub use accumulate::accumulate_q;
pub use qr::{DerivationStats, Factor, QrDecomposition};
pub use reflector::{pivot_sign, HouseholderReduction};
