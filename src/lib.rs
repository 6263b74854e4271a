//! Rootfinding for polynomials in barycentric Lagrange form.
//!
//! A polynomial is represented by its values (coefficients) at a set of
//! pairwise distinct interpolation nodes. Its roots are the finite
//! eigenvalues of an (n+1)×(n+1) companion pencil built from the nodes, the
//! barycentric weights and the coefficients. That pencil always carries a
//! double eigenvalue at infinity, which is removed exactly by a sequence of
//! unitary transformations before the eigenvalue solve.
//!
//! ```
//! use lagrange_roots::{complex, LagrangeBasis};
//!
//! let basis = LagrangeBasis::from_reals(&[-1.0, 0.0, 1.0]).unwrap();
//!
//! // values of (x - 0.2)(x + 0.3) at the nodes
//! let coeffs = [complex!(0.84), complex!(-0.06), complex!(1.04)];
//! let roots = basis.roots(&coeffs, true).unwrap();
//! assert_eq!(roots.len(), 2);
//! assert!(roots.iter().any(|z| (z - complex!(0.2)).norm() < 1E-8));
//! assert!(roots.iter().any(|z| (z - complex!(-0.3)).norm() < 1E-8));
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

extern crate nalgebra as na;
pub use num;

mod basis;
pub use basis::LagrangeBasis;

mod error;
pub use error::{Error, Result, Violation};

mod poly;
pub use poly::LagrangePoly;

pub mod roots;
pub use roots::{lagrange_roots, FallbackReason, Roots, RootsConfig, SolvePath};

mod util;
pub use util::linalg::{generalized_eigenvalues, GeneralizedEigenvalue, LinalgError};

#[doc(hidden)]
pub use util::__testing;

/// Shorthand for [`num::complex::Complex64`] literals.
///
/// ```
/// use lagrange_roots::complex;
/// use num::complex::Complex64;
///
/// assert_eq!(complex!(1.0), Complex64::new(1.0, 0.0));
/// assert_eq!(complex!(1.0, -2.0), Complex64::new(1.0, -2.0));
/// ```
#[macro_export]
macro_rules! complex {
    ($re:expr) => {
        $crate::num::complex::Complex64::new($re, 0.0)
    };
    ($re:expr, $im:expr) => {
        $crate::num::complex::Complex64::new($re, $im)
    };
}
