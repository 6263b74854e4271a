//! Dense complex kernels used to transform the companion pencil.

use na::{linalg::Hessenberg, DMatrix, DVector, Matrix2};
use num::{complex::Complex64, Zero};
use thiserror::Error;

mod gevd;
pub use gevd::{generalized_eigenvalues, GeneralizedEigenvalue};

/// Failures of the dense eigenvalue machinery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LinalgError {
    #[error("matrix must be square, got {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("pencil matrices must have the same shape, got {lhs:?} and {rhs:?}")]
    ShapeMismatch {
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    #[error("matrix contains non-finite entries")]
    NonFinite,

    #[error("generalized eigenvalue solver did not converge")]
    NoConvergence,
}

/// In-place `m[[i, j], ..] = g * m[[i, j], ..]`
pub(crate) fn rotate_rows(m: &mut DMatrix<Complex64>, i: usize, j: usize, g: &Matrix2<Complex64>) {
    for col in 0..m.ncols() {
        let x = m[(i, col)];
        let y = m[(j, col)];
        m[(i, col)] = g[(0, 0)] * x + g[(0, 1)] * y;
        m[(j, col)] = g[(1, 0)] * x + g[(1, 1)] * y;
    }
}

/// Householder reflector `I - 2uuᴴ/‖u‖²` with `u = x + ‖x‖e₁`.
///
/// When `x[0]` is real and non-negative, the reflector maps `x` onto
/// `-‖x‖e₁`. Returns `None` for a zero vector.
pub(crate) fn householder_reflector(x: &DVector<Complex64>) -> Option<DMatrix<Complex64>> {
    let n = x.len();
    let x_norm = x.norm();
    if n == 0 || x_norm.is_zero() {
        return None;
    }

    let mut u = x.clone();
    u[0] += x_norm;
    let u_norm_sqr = u.norm_squared();

    let two = Complex64::from(2.0);
    Some(DMatrix::identity(n, n) - (&u * u.adjoint()) * (two / u_norm_sqr))
}

/// Unitary Hessenberg reduction `m = q * h * qᴴ`, returns `(q, h)`.
///
/// The first row and column of `q` are `e₁`.
pub(crate) fn hessenberg(m: DMatrix<Complex64>) -> (DMatrix<Complex64>, DMatrix<Complex64>) {
    debug_assert!(m.is_square(), "matrix must be square");
    if m.nrows() == 0 {
        return (m.clone(), m);
    }
    Hessenberg::new(m).unpack()
}

/// Embed `m` in the trailing block of an identity one size larger, leaving
/// index 0 untouched.
pub(crate) fn embed(m: &DMatrix<Complex64>) -> DMatrix<Complex64> {
    let n = m.nrows();
    let mut out = DMatrix::identity(n + 1, n + 1);
    out.view_mut((1, 1), (n, m.ncols())).copy_from(m);
    out
}

/// Drop the first row and the first column.
pub(crate) fn drop_leading(m: &DMatrix<Complex64>) -> DMatrix<Complex64> {
    debug_assert!(m.nrows() > 0 && m.ncols() > 0);
    m.view((1, 1), (m.nrows() - 1, m.ncols() - 1)).into_owned()
}
