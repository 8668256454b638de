//! Dense matrix helpers.
//!
//! Construction from nested rows, trapezoidal extraction, and the
//! sub-column kernels shared by the reduction and the accumulation of
//! Householder reflectors.

use crate::core::{
    error::{DecompositionError, Result},
    types::{DMatrix, DVector, Scalar},
};

/// Build a matrix from a slice of equally sized rows.
///
/// An empty slice yields a `0 × 0` matrix. Rows of different lengths are
/// rejected with [`DecompositionError::RaggedRows`].
///
/// # Example
///
/// ```
/// use householder_core::matrix::from_rows;
///
/// let a = from_rows::<f64, _>(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
/// assert_eq!(a.shape(), (3, 2));
/// assert_eq!(a[(2, 1)], 6.0);
/// ```
pub fn from_rows<T, R>(rows: &[R]) -> Result<DMatrix<T>>
where
    T: Scalar,
    R: AsRef<[T]>,
{
    let ncols = rows.first().map_or(0, |row| row.as_ref().len());

    for (index, row) in rows.iter().enumerate() {
        let len = row.as_ref().len();
        if len != ncols {
            return Err(DecompositionError::ragged_rows(index, ncols, len));
        }
    }

    Ok(DMatrix::from_fn(rows.len(), ncols, |i, j| rows[i].as_ref()[j]))
}

/// Square identity matrix of order `n`.
pub fn identity<T: Scalar>(n: usize) -> DMatrix<T> {
    DMatrix::identity(n, n)
}

/// Copy of `m` with every entry strictly below the main diagonal set to zero.
pub fn upper_trapezoid<T: Scalar>(m: &DMatrix<T>) -> DMatrix<T> {
    DMatrix::from_fn(m.nrows(), m.ncols(), |i, j| {
        if i <= j {
            m[(i, j)]
        } else {
            T::zero()
        }
    })
}

/// Human-readable `rows x cols` shape, used in error messages.
pub fn shape_string<T: Scalar>(m: &DMatrix<T>) -> String {
    format!("{}x{}", m.nrows(), m.ncols())
}

/// Copy rows `offset..` of column `col` of `m` into an owned vector.
pub fn sub_column<T: Scalar>(m: &DMatrix<T>, col: usize, offset: usize) -> DVector<T> {
    let len = m.nrows() - offset;
    m.column(col).rows(offset, len).into_owned()
}

/// Apply the reflector `I − β·v·vᵀ` to rows `offset..` of column `col`.
///
/// Callers may pass any rescaling `(v / c, β·c²)` of the same reflector.
///
/// `v` spans rows `offset..offset + v.len()` of `target`.
pub fn reflect_column<T: Scalar>(
    target: &mut DMatrix<T>,
    col: usize,
    offset: usize,
    v: &DVector<T>,
    beta: T,
) {
    let mut column = target.column_mut(col);
    let mut tail = column.rows_mut(offset, v.len());
    let alpha = v.dot(&tail) * beta;
    tail.axpy(-alpha, v, T::one());
}
