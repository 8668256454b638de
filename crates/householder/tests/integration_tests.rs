//! Integration tests for the QR decomposition on reference matrices.
//!
//! Covers factor shapes, reconstruction, orthogonality, trapezoidal
//! structure, known factor values and cache identity for square, singular,
//! wide and tall inputs.

use approx::assert_relative_eq;
use householder::prelude::*;
use householder_core::test_utils::{fixtures, DecompositionPropertyTester, PropertyTestConfig};
use pretty_assertions::assert_eq;

const ENTRY_TOLERANCE: f64 = 1e-16;
const NORM_TOLERANCE: f64 = 1e-13;

#[test]
fn test_dimensions() {
    let cases = [
        (fixtures::nonsingular_3x3(), (3, 3), (3, 3)),
        (fixtures::tall_4x3(), (4, 4), (4, 3)),
        (fixtures::wide_3x4(), (3, 3), (3, 4)),
    ];

    for (a, q_shape, r_shape) in cases {
        let qr = QrDecomposition::new(&a).unwrap();
        assert_eq!(qr.q().shape(), q_shape);
        assert_eq!(qr.r().shape(), r_shape);
    }
}

#[test]
fn test_a_equals_qr() {
    for (name, a) in fixtures::all() {
        let qr = QrDecomposition::new(&a).unwrap();
        let norm = (qr.q() * qr.r() - &a).norm();
        assert!(
            norm <= NORM_TOLERANCE * a.norm().max(1.0),
            "{name}: ‖QR − A‖ = {norm:e}"
        );
    }
}

#[test]
fn test_q_orthogonal() {
    for (name, a) in fixtures::all() {
        // Separate instances, as Q and Qᵗ must agree across decompositions
        let q = QrDecomposition::new(&a).unwrap().q().clone();
        let qt = QrDecomposition::new(&a).unwrap().qt().clone();
        let eye = identity::<f64>(a.nrows());

        let norm = (qt * q - eye).norm();
        assert!(norm <= NORM_TOLERANCE, "{name}: ‖QᵗQ − I‖ = {norm:e}");
    }
}

#[test]
fn test_r_upper_triangular() {
    for (name, a) in fixtures::all() {
        let qr = QrDecomposition::new(&a).unwrap();
        let r = qr.r();
        for i in 0..r.nrows() {
            for j in 0..i.min(r.ncols()) {
                let entry = r[(i, j)];
                assert!(entry.abs() <= ENTRY_TOLERANCE, "{name}: R[({i}, {j})] = {entry}");
            }
        }
    }
}

#[test]
fn test_h_trapezoidal() {
    for (name, a) in fixtures::all() {
        let qr = QrDecomposition::new(&a).unwrap();
        let h = qr.h();
        assert_eq!(h.shape(), (a.nrows(), a.nrows().min(a.ncols())));
        for i in 0..h.nrows() {
            for j in (i + 1)..h.ncols() {
                let entry = h[(i, j)];
                assert!(entry.abs() <= ENTRY_TOLERANCE, "{name}: H[({i}, {j})] = {entry}");
            }
        }
    }
}

#[test]
fn test_matrices_values() {
    let qr = QrDecomposition::new(&fixtures::nonsingular_3x3()).unwrap();
    let q_ref = fixtures::nonsingular_3x3_q();

    let q = qr.q();
    assert_relative_eq!((q - &q_ref).norm(), 0.0, epsilon = 1e-13);
    let qt = qr.qt();
    assert_relative_eq!((qt - q_ref.transpose()).norm(), 0.0, epsilon = 1e-13);
    let r = qr.r();
    assert_relative_eq!((r - fixtures::nonsingular_3x3_r()).norm(), 0.0, epsilon = 1e-13);
    let h = qr.h();
    assert_relative_eq!((h - fixtures::nonsingular_3x3_h()).norm(), 0.0, epsilon = 1e-13);

    // The same cached instance is returned the second time
    assert!(std::ptr::eq(q, qr.q()));
    assert!(std::ptr::eq(qt, qr.qt()));
    assert!(std::ptr::eq(r, qr.r()));
    assert!(std::ptr::eq(h, qr.h()));
}

#[test]
fn test_known_diagonal_and_first_column() {
    let qr = QrDecomposition::new(&fixtures::nonsingular_3x3()).unwrap();

    let r = qr.r();
    for (k, expected) in [-14.0, -175.0, 35.0].into_iter().enumerate() {
        assert_relative_eq!(r[(k, k)], expected, epsilon = 1e-13);
    }

    let q = qr.q();
    for (i, expected) in [-12.0 / 14.0, -6.0 / 14.0, 4.0 / 14.0].into_iter().enumerate() {
        assert_relative_eq!(q[(i, 0)], expected, epsilon = 1e-13);
    }
}

#[test]
fn test_singular_matrix() {
    let a = fixtures::singular_3x3();
    let qr = QrDecomposition::new(&a).unwrap();

    let report = DecompositionValidator::validate(&a, &qr, &ValidationConfig::default()).unwrap();
    assert!(report.passed, "{report:?}");
    assert!(qr.q().iter().chain(qr.r().iter()).all(|x| x.is_finite()));
}

#[test]
fn test_zero_matrix() {
    let a = DMatrix::<f64>::zeros(3, 2);
    let qr = QrDecomposition::new(&a).unwrap();

    assert_eq!(qr.betas(), &[0.0, 0.0]);
    assert_eq!(qr.q(), &DMatrix::<f64>::identity(3, 3));
    assert_eq!(qr.r(), &a);
    assert_eq!(qr.h(), &DMatrix::<f64>::zeros(3, 2));
}

#[test]
fn test_single_entry_matrices() {
    let positive = QrDecomposition::<f64>::from_rows(&[[5.0]]).unwrap();
    assert_eq!(positive.q()[(0, 0)], -1.0);
    assert_eq!(positive.r()[(0, 0)], -5.0);

    // A 1×1 reflector is always −1, so the sign moves into R
    let negative = QrDecomposition::<f64>::from_rows(&[[-5.0]]).unwrap();
    assert_eq!(negative.q()[(0, 0)], -1.0);
    assert_eq!(negative.r()[(0, 0)], 5.0);
}

#[test]
fn test_row_and_column_vectors() {
    let row = QrDecomposition::<f64>::from_rows(&[[3.0, 4.0, 12.0]]).unwrap();
    assert_eq!(row.q().shape(), (1, 1));
    assert_eq!(row.r().shape(), (1, 3));
    let a = from_rows::<f64, _>(&[[3.0, 4.0, 12.0]]).unwrap();
    assert_relative_eq!((row.q() * row.r() - a).norm(), 0.0, epsilon = 1e-14);

    let column = QrDecomposition::<f64>::from_rows(&[[3.0], [4.0], [12.0]]).unwrap();
    assert_eq!(column.q().shape(), (3, 3));
    assert_relative_eq!(column.r()[(0, 0)], -13.0, epsilon = 1e-13);
    assert_eq!(column.r()[(1, 0)], 0.0);
    assert_eq!(column.r()[(2, 0)], 0.0);
}

#[test]
fn test_invalid_shape_rejected() {
    let err = QrDecomposition::new(&DMatrix::<f64>::zeros(0, 4)).unwrap_err();
    assert_eq!(err, DecompositionError::InvalidShape { rows: 0, cols: 4 });

    let rows: [[f64; 0]; 2] = [[], []];
    let err = QrDecomposition::<f64>::from_rows(&rows).unwrap_err();
    assert_eq!(err, DecompositionError::InvalidShape { rows: 2, cols: 0 });
}

#[test]
fn test_single_precision() {
    let a = fixtures::nonsingular_3x3().map(|x| x as f32);
    let qr = QrDecomposition::new(&a).unwrap();

    let report = DecompositionValidator::validate(&a, &qr, &ValidationConfig::default()).unwrap();
    assert!(report.passed, "{report:?}");
    assert_relative_eq!(qr.r()[(1, 1)], -175.0_f32, epsilon = 1e-3);
}

#[test]
fn test_random_matrices() {
    let result = DecompositionPropertyTester::test_random_matrices::<f64>(&PropertyTestConfig {
        num_matrices: 64,
        ..PropertyTestConfig::default()
    });

    assert!(result.passed, "{:?}", result.errors);
    assert_eq!(result.num_tests, 64);
}

#[cfg(feature = "serde")]
#[test]
fn test_report_serialization() {
    let a = fixtures::tall_4x3();
    let qr = QrDecomposition::new(&a).unwrap();
    let report = DecompositionValidator::validate(&a, &qr, &ValidationConfig::default()).unwrap();

    let json = serde_json::to_string(&report).unwrap();
    let back: ValidationReport<f64> = serde_json::from_str(&json).unwrap();

    // Errors near machine precision must come back bit for bit
    assert_eq!(back, report);
}
