use std::fmt::Display;

use na::DVector;
use num::complex::Complex64;

use crate::{
    error::{Error, Result},
    roots::{Roots, RootsConfig},
    util::{
        complex::complex_fmt,
        doc_macros::{errors_roots, roots_unordered},
    },
    LagrangeBasis,
};

/// A polynomial in barycentric Lagrange form: a basis and one coefficient per
/// node.
///
/// Evaluation computes the barycentric sum `Σ w[j] c[j] / (x - x[j])`, i.e.
/// the rows of [`LagrangeBasis::vandermonde`] times the coefficients. At a
/// node this is the coefficient of that node. Away from the nodes it is the
/// polynomial divided by the node polynomial `∏(x - x[j])`, which every member
/// of the basis shares, so ratios of two evaluations are ratios of the
/// polynomials themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct LagrangePoly {
    basis: LagrangeBasis,
    coefficients: Vec<Complex64>,
}

impl LagrangePoly {
    /// # Errors
    /// `Dimension` if there is not exactly one coefficient per node.
    pub fn new(basis: LagrangeBasis, coefficients: &[Complex64]) -> Result<Self> {
        if coefficients.len() != basis.len() {
            return Err(Error::dimension(
                "coefficients",
                basis.len(),
                coefficients.len(),
            ));
        }
        Ok(Self {
            basis,
            coefficients: coefficients.to_vec(),
        })
    }

    /// The polynomial of degree `basis.len() - 1` interpolating `f` at the
    /// nodes.
    #[must_use]
    pub fn interpolate(basis: LagrangeBasis, f: impl Fn(Complex64) -> Complex64) -> Self {
        let coefficients = basis.nodes().iter().map(|&x| f(x)).collect();
        Self {
            basis,
            coefficients,
        }
    }

    #[must_use]
    pub const fn basis(&self) -> &LagrangeBasis {
        &self.basis
    }

    #[must_use]
    pub fn coefficients(&self) -> &[Complex64] {
        &self.coefficients
    }

    /// Evaluate at each of `points`.
    #[must_use]
    pub fn eval(&self, points: &[Complex64]) -> Vec<Complex64> {
        let values = self.basis.vandermonde(points) * DVector::from_column_slice(&self.coefficients);
        values.iter().copied().collect()
    }

    /// Evaluate at a single point.
    #[must_use]
    pub fn eval_point(&self, x: Complex64) -> Complex64 {
        self.eval(&[x])[0]
    }

    /// Roots of the polynomial, see [`LagrangeBasis::roots`].
    ///
    #[doc = roots_unordered!()]
    /// # Errors
    #[doc = errors_roots!()]
    pub fn roots(&self, use_deflation: bool) -> Result<Vec<Complex64>> {
        self.basis.roots(&self.coefficients, use_deflation)
    }

    /// Roots with an explicit [`RootsConfig`].
    ///
    /// # Errors
    #[doc = errors_roots!()]
    pub fn roots_with(&self, config: &RootsConfig) -> Result<Roots> {
        self.basis.roots_with(&self.coefficients, config)
    }
}

impl Display for LagrangePoly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let terms: Vec<String> = self
            .basis
            .nodes()
            .iter()
            .zip(&self.coefficients)
            .map(|(x, c)| format!("{}@{}", complex_fmt(c), complex_fmt(x)))
            .collect();
        write!(f, "lagrange[{}]", terms.join(", "))
    }
}

#[cfg(test)]
mod test {
    use num::complex::Complex64;

    use super::LagrangePoly;
    use crate::{
        complex,
        util::__testing::{check_roots, chebyshev_nodes},
        Error, LagrangeBasis,
    };

    fn basis() -> LagrangeBasis {
        LagrangeBasis::from_reals(&[-1.0, 0.0, 1.0]).unwrap()
    }

    #[test]
    fn new() {
        assert!(LagrangePoly::new(basis(), &[complex!(1.0); 3]).is_ok());
        assert!(matches!(
            LagrangePoly::new(basis(), &[complex!(1.0); 2]),
            Err(Error::Dimension { .. })
        ));
    }

    #[test]
    fn interpolate() {
        let p = LagrangePoly::interpolate(basis(), |x| (x - 0.2) * (x + 0.3));
        let expected = [complex!(0.84), complex!(-0.06), complex!(1.04)];
        for (got, want) in p.coefficients().iter().zip(expected) {
            assert!((got - want).norm() < 1E-14);
        }
    }

    #[test]
    fn eval_at_nodes() {
        let p = LagrangePoly::new(basis(), &[complex!(1.0), complex!(2.0), complex!(3.0, 1.0)]).unwrap();
        assert_eq!(p.eval(basis().nodes()), p.coefficients());
        assert_eq!(p.eval_point(complex!(0.0)), complex!(2.0));
    }

    #[test]
    fn eval_between_nodes() {
        // sum divided by the node polynomial gives back the polynomial
        let f = |x: Complex64| x * x - 2.0 * x + 0.5;
        let b = LagrangeBasis::new(&chebyshev_nodes(4)).unwrap();
        let p = LagrangePoly::interpolate(b.clone(), f);
        for x in [complex!(0.1), complex!(0.7, 0.4), complex!(-3.0)] {
            let l: Complex64 = b.nodes().iter().map(|n| x - n).product();
            assert!((p.eval_point(x) * l - f(x)).norm() < 1E-12);
        }
    }

    #[test]
    fn roots() {
        let p = LagrangePoly::interpolate(basis(), |x| (x - 0.2) * (x + 0.3));
        assert!(check_roots(
            p.roots(true).unwrap(),
            vec![complex!(0.2), complex!(-0.3)],
            1E-8
        ));
    }

    #[test]
    fn display() {
        let p = LagrangePoly::new(basis(), &[complex!(1.0), complex!(2.0), complex!(3.0, 1.0)]).unwrap();
        assert_eq!(p.to_string(), "lagrange[1@-1, 2@0, (3+i)@1]");
    }
}
