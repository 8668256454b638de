//! QR decomposition with lazily cached factors.
//!
//! The reduction runs once, at construction. `R`, `H`, `Q` and `Qᵗ` are
//! derived from it on first request and kept for the lifetime of the
//! decomposition. Every later request returns the same allocation, so
//! callers may compare references with [`std::ptr::eq`] to tell that no new
//! computation happened.
//!
//! # Example
//!
//! ```
//! use householder_core::prelude::*;
//!
//! let a = DMatrix::from_row_slice(3, 3, &[
//!     12.0_f64, -51.0, 4.0,
//!     6.0, 167.0, -68.0,
//!     -4.0, 24.0, -41.0,
//! ]);
//! let qr = QrDecomposition::new(&a).unwrap();
//!
//! let error = (qr.q() * qr.r() - &a).norm();
//! assert!(error < 1e-12);
//! assert!(std::ptr::eq(qr.q(), qr.q()));
//! ```

use std::fmt;

use log::trace;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;

use crate::{
    core::{
        error::{DecompositionError, Result},
        types::{DMatrix, Scalar},
    },
    decomposition::{accumulate::accumulate_q, reflector::HouseholderReduction},
    matrix::from_rows,
};

/// Factors that are derived on demand and cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Factor {
    /// Upper-trapezoidal factor `R`
    R,
    /// Lower-trapezoidal matrix of reflector vectors `H`
    H,
    /// Orthogonal factor `Q`
    Q,
    /// Transpose of the orthogonal factor `Qᵗ`
    QT,
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::R => "R",
            Self::H => "H",
            Self::Q => "Q",
            Self::QT => "QT",
        };
        f.write_str(name)
    }
}

/// Counts of factor derivations and cache hits for one decomposition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivationStats {
    /// Number of times `R` was built
    pub r_builds: usize,
    /// Number of times `H` was built
    pub h_builds: usize,
    /// Number of times `Q` was built
    pub q_builds: usize,
    /// Number of times `Qᵗ` was built
    pub qt_builds: usize,
    /// Number of requests served from the cache
    pub cache_hits: usize,
}

impl DerivationStats {
    /// Builds recorded for one factor.
    pub fn builds(&self, factor: Factor) -> usize {
        match factor {
            Factor::R => self.r_builds,
            Factor::H => self.h_builds,
            Factor::Q => self.q_builds,
            Factor::QT => self.qt_builds,
        }
    }

    /// Total number of factor builds.
    pub fn total_builds(&self) -> usize {
        self.r_builds + self.h_builds + self.q_builds + self.qt_builds
    }

    fn record_build(&mut self, factor: Factor) {
        match factor {
            Factor::R => self.r_builds += 1,
            Factor::H => self.h_builds += 1,
            Factor::Q => self.q_builds += 1,
            Factor::QT => self.qt_builds += 1,
        }
    }
}

/// Householder QR decomposition `A = Q·R` of an `m × n` real matrix.
///
/// The instance is immutable after construction and can be shared across
/// threads. Each factor is computed at most once, whichever thread asks
/// first; the others wait for it and receive the same matrix.
#[derive(Debug)]
pub struct QrDecomposition<T: Scalar> {
    reduction: HouseholderReduction<T>,
    r: OnceCell<DMatrix<T>>,
    h: OnceCell<DMatrix<T>>,
    q: OnceCell<DMatrix<T>>,
    qt: OnceCell<DMatrix<T>>,
    stats: Mutex<DerivationStats>,
}

impl<T: Scalar> QrDecomposition<T> {
    /// Decompose `a`. The caller's matrix is not modified.
    ///
    /// Fails only if `a` has no rows or no columns.
    pub fn new(a: &DMatrix<T>) -> Result<Self> {
        let (rows, cols) = a.shape();
        if rows == 0 || cols == 0 {
            return Err(DecompositionError::invalid_shape(rows, cols));
        }

        Ok(Self {
            reduction: HouseholderReduction::new(a),
            r: OnceCell::new(),
            h: OnceCell::new(),
            q: OnceCell::new(),
            qt: OnceCell::new(),
            stats: Mutex::new(DerivationStats::default()),
        })
    }

    /// Decompose a matrix given as equally sized rows.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let a = from_rows(rows)?;
        Self::new(&a)
    }

    /// Number of rows `m` of the decomposed matrix.
    pub fn nrows(&self) -> usize {
        self.reduction.nrows()
    }

    /// Number of columns `n` of the decomposed matrix.
    pub fn ncols(&self) -> usize {
        self.reduction.ncols()
    }

    /// Number of Householder reflectors, `min(m, n)`.
    pub fn reflector_count(&self) -> usize {
        self.reduction.reflector_count()
    }

    /// Scale factor `β_k` of each reflector, zero for skipped columns.
    pub fn betas(&self) -> &[T] {
        self.reduction.betas()
    }

    /// Diagonal of `R`.
    pub fn r_diagonal(&self) -> Vec<T> {
        self.reduction.r_diagonal()
    }

    /// Packed reduction state the factors are derived from.
    pub fn reduction(&self) -> &HouseholderReduction<T> {
        &self.reduction
    }

    /// The `m × n` upper-trapezoidal factor `R`.
    pub fn r(&self) -> &DMatrix<T> {
        self.cached(&self.r, Factor::R, || self.reduction.r_factor())
    }

    /// The `m × min(m, n)` lower-trapezoidal matrix of reflector vectors.
    pub fn h(&self) -> &DMatrix<T> {
        self.cached(&self.h, Factor::H, || self.reduction.householder_vectors())
    }

    /// The `m × m` orthogonal factor `Q`.
    pub fn q(&self) -> &DMatrix<T> {
        self.cached(&self.q, Factor::Q, || accumulate_q(&self.reduction))
    }

    /// The transpose of [`q`](Self::q), cached separately.
    pub fn qt(&self) -> &DMatrix<T> {
        self.cached(&self.qt, Factor::QT, || self.q().transpose())
    }

    /// Snapshot of the derivation statistics.
    pub fn stats(&self) -> DerivationStats {
        self.stats.lock().clone()
    }

    fn cached<'a, F>(
        &'a self,
        cell: &'a OnceCell<DMatrix<T>>,
        factor: Factor,
        build: F,
    ) -> &'a DMatrix<T>
    where
        F: FnOnce() -> DMatrix<T>,
    {
        let mut built = false;
        let value = cell.get_or_init(|| {
            built = true;
            trace!(
                "building factor {factor} for a {}x{} decomposition",
                self.nrows(),
                self.ncols()
            );
            build()
        });

        let mut stats = self.stats.lock();
        if built {
            stats.record_build(factor);
        } else {
            stats.cache_hits += 1;
        }

        value
    }
}
