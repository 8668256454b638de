//! Householder reflector computation and in-place reduction.
//!
//! Column `k` of the working copy is reduced by the reflector
//! `H_k = I − β_k·v_k·v_kᵀ`, with `v_k = x + s·‖x‖·e_k` where `x` is the
//! sub-column `A[k.., k]` and `s` the sign of its pivot. Choosing `s` this
//! way keeps `|v_k[k]| ≥ ‖x‖`, so the head never comes from subtracting
//! two nearly equal numbers.
//!
//! After reduction the working copy holds `R` on and above the diagonal,
//! and the untouched sub-diagonal components of each `v_k` below it. The
//! heads `v_k[k]` are kept aside because the diagonal is overwritten by
//! `R`'s diagonal `−s·‖x‖`.

use log::debug;

use crate::{
    core::types::{DMatrix, DVector, Scalar},
    matrix::{reflect_column, sub_column, upper_trapezoid},
    numerical::stability::stable_norm,
};

/// Packed result of reducing a matrix with Householder reflections.
#[derive(Debug, Clone)]
pub struct HouseholderReduction<T: Scalar> {
    packed: DMatrix<T>,
    heads: Vec<T>,
    betas: Vec<T>,
}

impl<T: Scalar> HouseholderReduction<T> {
    /// Reduce a copy of `a`, leaving the caller's matrix untouched.
    pub fn new(a: &DMatrix<T>) -> Self {
        Self::from_owned(a.clone())
    }

    /// Reduce `packed` in place.
    pub fn from_owned(mut packed: DMatrix<T>) -> Self {
        let p = packed.nrows().min(packed.ncols());
        let mut heads = Vec::with_capacity(p);
        let mut betas = Vec::with_capacity(p);

        for k in 0..p {
            let (head, beta, diagonal) = reduce_column(&mut packed, k);
            packed[(k, k)] = diagonal;
            heads.push(head);
            betas.push(beta);
        }

        Self {
            packed,
            heads,
            betas,
        }
    }

    /// Number of rows of the reduced matrix.
    pub fn nrows(&self) -> usize {
        self.packed.nrows()
    }

    /// Number of columns of the reduced matrix.
    pub fn ncols(&self) -> usize {
        self.packed.ncols()
    }

    /// Number of reflectors, `min(m, n)`.
    pub fn reflector_count(&self) -> usize {
        self.betas.len()
    }

    /// Reduced working copy: `R` on and above the diagonal, reflector
    /// components below it.
    pub fn packed(&self) -> &DMatrix<T> {
        &self.packed
    }

    /// Leading component of each reflector vector, zero for skipped columns.
    pub fn heads(&self) -> &[T] {
        &self.heads
    }

    /// Scale factor `1 / (s·‖x‖·head)` of each reflector, zero for skipped
    /// columns.
    ///
    /// Informational only: it overflows or underflows for columns of extreme
    /// magnitude, and the reflections are applied in normalized form instead.
    pub fn betas(&self) -> &[T] {
        &self.betas
    }

    /// Diagonal entries of `R`, one per reflector.
    pub fn r_diagonal(&self) -> Vec<T> {
        (0..self.reflector_count())
            .map(|k| self.packed[(k, k)])
            .collect()
    }

    /// The `m × n` upper-trapezoidal factor `R`.
    pub fn r_factor(&self) -> DMatrix<T> {
        upper_trapezoid(&self.packed)
    }

    /// The `m × p` lower-trapezoidal matrix of reflector vectors.
    ///
    /// Column `j` holds `v_j / (s·‖x‖)`, that is `v_j` divided by `−R[j][j]`.
    /// Columns of skipped reflectors are zero.
    pub fn householder_vectors(&self) -> DMatrix<T> {
        let m = self.nrows();
        let p = self.reflector_count();
        let mut h = DMatrix::zeros(m, p);

        for j in 0..p {
            let scale = -self.packed[(j, j)];
            if scale == T::zero() {
                continue;
            }
            h[(j, j)] = self.heads[j] / scale;
            for i in (j + 1)..m {
                h[(i, j)] = self.packed[(i, j)] / scale;
            }
        }

        h
    }

    /// Full reflector vector `v_k`, spanning rows `k..m`.
    ///
    /// # Panics
    ///
    /// Panics if `k >= reflector_count()`.
    pub fn reflector(&self, k: usize) -> DVector<T> {
        let mut v = sub_column(&self.packed, k, k);
        v[0] = self.heads[k];
        v
    }

    /// Apply `H_k` to rows `k..` of column `col` of `target`.
    ///
    /// Skipped reflectors (zero head) leave `target` unchanged.
    pub fn apply_reflector(&self, k: usize, target: &mut DMatrix<T>, col: usize) {
        let head = self.heads[k];
        if head == T::zero() {
            return;
        }
        let mut u = self.reflector(k) / head;
        u[0] = T::one();
        reflect_column(target, col, k, &u, head / -self.packed[(k, k)]);
    }
}

/// `+1` for non-negative pivots, `−1` for negative ones; `sign(0) = +1`.
pub fn pivot_sign<T: Scalar>(pivot: T) -> T {
    if pivot < T::zero() {
        -T::one()
    } else {
        T::one()
    }
}

/// Reduce column `k`, updating the trailing columns of `packed`.
///
/// Returns the reflector head, its scale factor and the new diagonal entry.
fn reduce_column<T: Scalar>(packed: &mut DMatrix<T>, k: usize) -> (T, T, T) {
    let x_norm = {
        let column = packed.column(k);
        stable_norm(&column.rows(k, packed.nrows() - k))
    };

    if x_norm == T::zero() {
        debug!("column {k} is zero on and below the diagonal, skipping its reflector");
        return (T::zero(), T::zero(), T::zero());
    }

    let s = pivot_sign(packed[(k, k)]);
    let signed_norm = s * x_norm;
    let head = packed[(k, k)] + signed_norm;
    let beta = T::one() / (signed_norm * head);

    // β·v·vᵀ = (head / signed_norm)·u·uᵀ with u = v / head, which stays
    // finite when β itself over- or underflows
    let mut u = sub_column(packed, k, k) / head;
    u[0] = T::one();
    let scale = head / signed_norm;
    for j in (k + 1)..packed.ncols() {
        reflect_column(packed, j, k, &u, scale);
    }

    (head, beta, -signed_norm)
}
