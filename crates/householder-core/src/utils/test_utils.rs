//! Test utilities for checking decompositions.
//!
//! Reference matrices with known factors, random matrix generation, and a
//! property tester that runs the validator over many random shapes.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    core::types::{DMatrix, Scalar},
    decomposition::QrDecomposition,
    numerical::validation::{DecompositionValidator, ValidationConfig},
};

/// Reference matrices shared by unit tests, integration tests and benches.
pub mod fixtures {
    use crate::core::types::DMatrix;

    /// Non-singular 3×3 matrix with integer factors.
    pub fn nonsingular_3x3() -> DMatrix<f64> {
        DMatrix::from_row_slice(
            3,
            3,
            &[12.0, -51.0, 4.0, 6.0, 167.0, -68.0, -4.0, 24.0, -41.0],
        )
    }

    /// Rank-2 3×3 matrix whose rows form an arithmetic progression.
    pub fn singular_3x3() -> DMatrix<f64> {
        DMatrix::from_row_slice(3, 3, &[1.0, 4.0, 7.0, 2.0, 5.0, 8.0, 3.0, 6.0, 9.0])
    }

    /// Wide 3×4 matrix.
    pub fn wide_3x4() -> DMatrix<f64> {
        DMatrix::from_row_slice(
            3,
            4,
            &[
                12.0, -51.0, 4.0, 1.0, 6.0, 167.0, -68.0, 2.0, -4.0, 24.0, -41.0, 3.0,
            ],
        )
    }

    /// Tall 4×3 matrix.
    pub fn tall_4x3() -> DMatrix<f64> {
        DMatrix::from_row_slice(
            4,
            3,
            &[
                12.0, -51.0, 4.0, 6.0, 167.0, -68.0, -4.0, 24.0, -41.0, -5.0, 34.0, 7.0,
            ],
        )
    }

    /// Every fixture with a short name.
    pub fn all() -> Vec<(&'static str, DMatrix<f64>)> {
        vec![
            ("3x3 nonsingular", nonsingular_3x3()),
            ("3x3 singular", singular_3x3()),
            ("3x4", wide_3x4()),
            ("4x3", tall_4x3()),
        ]
    }

    /// Expected `Q` of [`nonsingular_3x3`].
    pub fn nonsingular_3x3_q() -> DMatrix<f64> {
        DMatrix::from_row_slice(
            3,
            3,
            &[
                -12.0 / 14.0,
                69.0 / 175.0,
                -58.0 / 175.0,
                -6.0 / 14.0,
                -158.0 / 175.0,
                6.0 / 175.0,
                4.0 / 14.0,
                -30.0 / 175.0,
                -165.0 / 175.0,
            ],
        )
    }

    /// Expected `R` of [`nonsingular_3x3`].
    pub fn nonsingular_3x3_r() -> DMatrix<f64> {
        DMatrix::from_row_slice(
            3,
            3,
            &[-14.0, -21.0, 14.0, 0.0, -175.0, 70.0, 0.0, 0.0, 35.0],
        )
    }

    /// Expected `H` of [`nonsingular_3x3`].
    pub fn nonsingular_3x3_h() -> DMatrix<f64> {
        DMatrix::from_row_slice(
            3,
            3,
            &[
                26.0 / 14.0,
                0.0,
                0.0,
                6.0 / 14.0,
                648.0 / 325.0,
                0.0,
                -4.0 / 14.0,
                36.0 / 325.0,
                2.0,
            ],
        )
    }
}

/// Random matrix with entries uniform in `[-scale, scale)`.
pub fn random_matrix<T: Scalar, G: Rng + ?Sized>(
    rng: &mut G,
    rows: usize,
    cols: usize,
    scale: f64,
) -> DMatrix<T> {
    DMatrix::from_fn(rows, cols, |_, _| nalgebra::convert(rng.gen_range(-scale..scale)))
}

/// Random `rows × cols` matrix of rank at most `rank`.
pub fn random_low_rank<T: Scalar, G: Rng + ?Sized>(
    rng: &mut G,
    rows: usize,
    cols: usize,
    rank: usize,
) -> DMatrix<T> {
    let left = random_matrix::<T, G>(rng, rows, rank, 1.0);
    let right = random_matrix::<T, G>(rng, rank, cols, 1.0);
    left * right
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropertyTestConfig<T> {
    /// Tolerances checked for each matrix
    pub validation: ValidationConfig<T>,
    /// Number of random matrices to test
    pub num_matrices: usize,
    /// Largest row or column count
    pub max_dim: usize,
    /// Magnitude of the random entries
    pub scale: f64,
    /// Seed of the random generator
    pub seed: u64,
}

impl<T: Scalar> Default for PropertyTestConfig<T> {
    fn default() -> Self {
        Self {
            validation: ValidationConfig::default(),
            num_matrices: 32,
            max_dim: 8,
            scale: 10.0,
            seed: 42,
        }
    }
}

/// Results from property tests.
#[derive(Debug)]
pub struct PropertyTestResult<T> {
    /// Whether all tests passed
    pub passed: bool,
    /// Largest relative reconstruction error observed
    pub max_reconstruction_error: T,
    /// Largest orthogonality error observed
    pub max_orthogonality_error: T,
    /// Number of tests performed
    pub num_tests: usize,
    /// Detailed error messages
    pub errors: Vec<String>,
}

/// Property-based checks of the decomposition over random matrices.
pub struct DecompositionPropertyTester;

impl DecompositionPropertyTester {
    /// Decompose random matrices of random shapes and validate each one.
    pub fn test_random_matrices<T: Scalar>(
        config: &PropertyTestConfig<T>,
    ) -> PropertyTestResult<T> {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let mut max_reconstruction_error = T::zero();
        let mut max_orthogonality_error = T::zero();
        let mut errors = Vec::new();

        for _ in 0..config.num_matrices {
            let rows = rng.gen_range(1..=config.max_dim);
            let cols = rng.gen_range(1..=config.max_dim);
            let a = random_matrix::<T, _>(&mut rng, rows, cols, config.scale);

            let outcome = QrDecomposition::new(&a)
                .and_then(|qr| DecompositionValidator::validate(&a, &qr, &config.validation));

            match outcome {
                Ok(report) => {
                    if report.reconstruction_error > max_reconstruction_error {
                        max_reconstruction_error = report.reconstruction_error;
                    }
                    if report.orthogonality_error > max_orthogonality_error {
                        max_orthogonality_error = report.orthogonality_error;
                    }
                    if !report.passed {
                        errors.push(format!("{rows}x{cols} matrix failed validation: {report:?}"));
                    }
                }
                Err(err) => errors.push(format!("{rows}x{cols} matrix: {err}")),
            }
        }

        PropertyTestResult {
            passed: errors.is_empty(),
            max_reconstruction_error,
            max_orthogonality_error,
            num_tests: config.num_matrices,
            errors,
        }
    }
}
