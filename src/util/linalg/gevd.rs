//! Generalized eigenvalues `A x = λ B x` through faer's QZ decomposition.

use faer::{linalg::solvers::GeneralizedEigen, Mat};
use na::DMatrix;
use num::{complex::Complex64, Zero};

use super::LinalgError;

/// A generalized eigenvalue `λ = alpha / beta`.
///
/// Infinite eigenvalues have `beta == 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneralizedEigenvalue {
    pub alpha: Complex64,
    pub beta: Complex64,
}

impl GeneralizedEigenvalue {
    #[must_use]
    pub fn is_infinite(&self) -> bool {
        self.beta.is_zero()
    }

    /// The eigenvalue as a single number. Infinite eigenvalues are returned
    /// as `inf` (or `NaN` if `alpha` is also zero), never as a large finite
    /// value.
    #[must_use]
    pub fn value(&self) -> Complex64 {
        if self.beta.is_zero() {
            if self.alpha.is_zero() {
                Complex64::new(f64::NAN, f64::NAN)
            } else {
                Complex64::new(f64::INFINITY, 0.0)
            }
        } else {
            self.alpha / self.beta
        }
    }
}

/// Generalized eigenvalues of the pencil `(a, b)`.
///
/// A `beta` no larger than `n ε ‖B‖_F` is set to exactly zero, so eigenvalues
/// that are infinite up to round-off are reported as infinite rather than as
/// huge finite values.
///
/// # Errors
/// - `NotSquare`/`ShapeMismatch`: malformed pencil
/// - `NonFinite`: either matrix contains `inf` or `NaN`
/// - `NoConvergence`: faer could not compute the decomposition
pub fn generalized_eigenvalues(
    a: &DMatrix<Complex64>,
    b: &DMatrix<Complex64>,
) -> Result<Vec<GeneralizedEigenvalue>, LinalgError> {
    if !a.is_square() {
        return Err(LinalgError::NotSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    if a.shape() != b.shape() {
        return Err(LinalgError::ShapeMismatch {
            lhs: a.shape(),
            rhs: b.shape(),
        });
    }
    if a.iter().chain(b.iter()).any(|z| !z.is_finite()) {
        return Err(LinalgError::NonFinite);
    }

    let n = a.nrows();
    if n == 0 {
        return Ok(vec![]);
    }

    let lhs = Mat::from_fn(n, n, |i, j| a[(i, j)]);
    let rhs = Mat::from_fn(n, n, |i, j| b[(i, j)]);
    let decomposition = GeneralizedEigen::new(lhs.as_ref(), rhs.as_ref()).map_err(|_| {
        log::debug!("generalized eigensolver failed {{size: {n}}}");
        LinalgError::NoConvergence
    })?;
    let alpha = decomposition.S_a().column_vector();
    let beta = decomposition.S_b().column_vector();

    #[allow(clippy::cast_precision_loss)]
    let beta_tol = f64::MIN_POSITIVE.max(n as f64 * f64::EPSILON * b.norm());

    Ok((0..n)
        .map(|k| {
            let beta = if beta[k].norm() <= beta_tol {
                Complex64::zero()
            } else {
                beta[k]
            };
            GeneralizedEigenvalue {
                alpha: alpha[k],
                beta,
            }
        })
        .collect())
}
