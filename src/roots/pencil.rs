use na::{DMatrix, DVector, Matrix2};
use num::{complex::Complex64, Zero};

use crate::util::{
    complex::has_phase,
    linalg::{
        drop_leading, embed, generalized_eigenvalues, hessenberg, householder_reflector,
        rotate_rows, GeneralizedEigenvalue, LinalgError,
    },
};

/// The matrix pair `(A, B)` whose finite generalized eigenvalues are the roots
/// of a barycentric Lagrange polynomial.
///
/// Every transformation returns a new pencil and leaves `self` untouched.
#[derive(Clone, Debug, PartialEq)]
pub struct CompanionPencil {
    a: DMatrix<Complex64>,
    b: DMatrix<Complex64>,
}

impl CompanionPencil {
    /// Build the `(n+1)x(n+1)` pencil
    ///
    /// ```text
    /// A = [ 0  cᵀ ]    B = [ 0  0 ]
    ///     [ w  X  ]        [ 0  I ]
    /// ```
    ///
    /// where `X = diag(nodes)` and `c`, `w` are the coefficients and weights
    /// scaled to unit 2-norm. Slices are assumed to have the same length.
    #[must_use]
    pub fn new(nodes: &[Complex64], weights: &[Complex64], coefficients: &[Complex64]) -> Self {
        debug_assert_eq!(nodes.len(), weights.len());
        debug_assert_eq!(nodes.len(), coefficients.len());

        let n = nodes.len();
        let coefficients = DVector::from_column_slice(coefficients);
        let weights = DVector::from_column_slice(weights);
        let coefficients = coefficients.unscale(coefficients.norm());
        let weights = weights.unscale(weights.norm());

        let mut a = DMatrix::zeros(n + 1, n + 1);
        a.view_mut((1, 1), (n, n))
            .set_diagonal(&DVector::from_column_slice(nodes));
        a.view_mut((0, 1), (1, n)).tr_copy_from(&coefficients);
        a.view_mut((1, 0), (n, 1)).copy_from(&weights);

        let mut b = DMatrix::identity(n + 1, n + 1);
        b[(0, 0)] = Complex64::zero();

        Self { a, b }
    }

    #[cfg(test)]
    pub(crate) const fn from_parts(a: DMatrix<Complex64>, b: DMatrix<Complex64>) -> Self {
        Self { a, b }
    }

    #[must_use]
    pub const fn a(&self) -> &DMatrix<Complex64> {
        &self.a
    }

    #[must_use]
    pub const fn b(&self) -> &DMatrix<Complex64> {
        &self.b
    }

    /// Number of rows (and columns) of either matrix
    #[must_use]
    pub fn size(&self) -> usize {
        self.a.nrows()
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.a.iter().chain(self.b.iter()).all(|z| z.is_finite())
    }

    /// Diagonal similarity `diag(1/s) A diag(s)` with `s[0] = 1` and
    /// `s[j] = sqrt(|A[j,0] / A[0,j]|)`, which equalizes the magnitude of the
    /// weights and coefficients. Entries where either is zero are left
    /// unscaled. `B` commutes with the scaling.
    #[must_use]
    pub fn balanced(&self) -> Self {
        let n = self.size();
        let s: Vec<f64> = (0..n)
            .map(|j| {
                let (w, c) = (self.a[(j, 0)], self.a[(0, j)]);
                if j == 0 || w.is_zero() || c.is_zero() {
                    1.0
                } else {
                    (w.norm() / c.norm()).sqrt()
                }
            })
            .collect();

        let a = DMatrix::from_fn(n, n, |i, j| self.a[(i, j)] * (s[j] / s[i]));
        Self {
            a,
            b: self.b.clone(),
        }
    }

    /// Rotate the weight column so that `A[1,0]` becomes real and
    /// non-negative. This right-multiplies both matrices by a unitary diagonal
    /// (`B` has an empty first column), so eigenvalues are unchanged.
    ///
    /// Returns `None` if `A[1,0]` is zero or non-finite.
    #[must_use]
    pub fn phase_rotated(&self) -> Option<Self> {
        let pivot = self.a[(1, 0)];
        if !has_phase(pivot) {
            return None;
        }

        let factor = Complex64::from_polar(1.0, -pivot.arg());
        let mut a = self.a.clone();
        a.view_mut((1, 0), (self.size() - 1, 1))
            .apply(|z| *z *= factor);
        Some(Self {
            a,
            b: self.b.clone(),
        })
    }

    /// Householder similarity on indices `1..`, mapping the weight column onto
    /// a multiple of `e₁`. Returns `None` if the column is zero.
    #[must_use]
    pub fn reflected(&self) -> Option<Self> {
        let n = self.size() - 1;
        let column: DVector<Complex64> = self.a.view((1, 0), (n, 1)).column(0).into_owned();
        let reflector = embed(&householder_reflector(&column)?);

        // the reflector is hermitian, so it is its own inverse
        Some(Self {
            a: &reflector * &self.a * &reflector,
            b: &reflector * &self.b * &reflector,
        })
    }

    /// Unitary similarity on indices `1..` that brings the trailing block of
    /// `A` to upper Hessenberg form. The transformation fixes `e₁`, so a
    /// reflected weight column survives unchanged.
    #[must_use]
    pub fn hessenberg_reduced(&self) -> Self {
        let n = self.size() - 1;
        let (q, _) = hessenberg(self.a.view((1, 1), (n, n)).into_owned());
        let transform = embed(&q.adjoint());
        let transform_adj = transform.adjoint();

        Self {
            a: &transform * &self.a * &transform_adj,
            b: &transform * &self.b * &transform_adj,
        }
    }

    /// Swap rows 0 and 1 of both matrices and drop row and column 0.
    ///
    /// After reflection and Hessenberg reduction the first column of the
    /// swapped pencil is `(β, 0, ..)` for `A` and zero for `B`, so this
    /// removes one infinite eigenvalue.
    #[must_use]
    pub fn swapped_and_deflated(&self) -> Self {
        let mut a = self.a.clone();
        let mut b = self.b.clone();
        a.swap_rows(0, 1);
        b.swap_rows(0, 1);
        Self {
            a: drop_leading(&a),
            b: drop_leading(&b),
        }
    }

    /// Annihilate `A[1,0]` with the rotation `[[c̄, s̄], [-s, c]]` on rows
    /// 0 and 1, `c = A[0,0]/r`, `s = A[1,0]/r`, `r = sqrt(A[0,0]² + A[1,0]²)`,
    /// and drop row and column 0. This removes the second infinite
    /// eigenvalue.
    ///
    /// Returns `None` if `r` is zero or non-finite.
    #[must_use]
    pub fn rotated_and_deflated(&self) -> Option<Self> {
        let (x, y) = (self.a[(0, 0)], self.a[(1, 0)]);
        let r = (x * x + y * y).sqrt();
        if r.is_zero() || !r.is_finite() {
            return None;
        }
        let (c, s) = (x / r, y / r);
        let rotation = Matrix2::new(c.conj(), s.conj(), -s, c);

        let mut a = self.a.clone();
        let mut b = self.b.clone();
        rotate_rows(&mut a, 0, 1, &rotation);
        rotate_rows(&mut b, 0, 1, &rotation);
        Some(Self {
            a: drop_leading(&a),
            b: drop_leading(&b),
        })
    }

    /// Generalized eigenvalues of the pencil.
    ///
    /// # Errors
    /// Passes through failures of [`generalized_eigenvalues`].
    pub fn eigenvalues(&self) -> Result<Vec<GeneralizedEigenvalue>, LinalgError> {
        generalized_eigenvalues(&self.a, &self.b)
    }
}
