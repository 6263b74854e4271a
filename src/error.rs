use thiserror::Error;

use crate::util::linalg::LinalgError;

/// The top-level error type for this crate.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Inputs have the wrong shape or mismatched lengths.
    #[error("{what}: expected {expected}, found {found}")]
    Dimension {
        what: &'static str,
        expected: String,
        found: String,
    },

    /// The coefficient vector is identically zero, so there is no polynomial
    /// to find the roots of.
    #[error("coefficient vector is identically zero, the polynomial is undefined")]
    ZeroPolynomial,

    /// The eigenvalue solver failed.
    #[error(transparent)]
    LinearAlgebra(#[from] LinalgError),

    /// The computation produced a result that would be silently wrong if it
    /// was returned.
    #[error("invariant violated: {0}")]
    InvariantViolation(Violation),
}

/// What went wrong in an [`Error::InvariantViolation`].
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum Violation {
    /// The unfiltered pencil did not have exactly two infinite eigenvalues.
    #[error("expected {expected} finite eigenvalues, found {found}")]
    FiniteEigenvalueCount { expected: usize, found: usize },

    /// The companion pencil contains `inf` or `NaN`, usually because two nodes
    /// coincide and their barycentric weights are infinite.
    #[error("companion pencil has non-finite entries, nodes must be pairwise distinct")]
    NonFinitePencil,

    /// The pivot of the Householder reflection was not real after the phase
    /// rotation.
    #[error("pivot is not real after phase rotation (imaginary part {imag:e})")]
    ComplexPivot { imag: f64 },

    /// A reflection or rotation used for deflation is undefined because the
    /// vector it is built from vanishes.
    #[error("cannot construct a unitary transformation from a zero vector")]
    SingularRotation,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn dimension(what: &'static str, expected: impl ToString, found: impl ToString) -> Self {
        Self::Dimension {
            what,
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}

impl From<Violation> for Error {
    fn from(value: Violation) -> Self {
        Self::InvariantViolation(value)
    }
}

#[cfg(test)]
mod test {
    use super::{Error, Violation};

    #[test]
    fn display() {
        let e = Error::dimension("coefficients", 3, 2);
        assert_eq!(e.to_string(), "coefficients: expected 3, found 2");

        let e: Error = Violation::FiniteEigenvalueCount {
            expected: 2,
            found: 3,
        }
        .into();
        assert_eq!(
            e.to_string(),
            "invariant violated: expected 2 finite eigenvalues, found 3"
        );
    }
}
