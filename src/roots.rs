//! Roots of barycentric Lagrange polynomials from a companion pencil.
//!
//! The roots of `p(x) = l(x) Σ wⱼ cⱼ / (x - xⱼ)` are the finite eigenvalues of
//! an `(n+1)x(n+1)` [`CompanionPencil`]. That pencil always has two spurious
//! eigenvalues at infinity. By default they are removed exactly with a chain of
//! unitary transformations, leaving an `(n-1)x(n-1)` pencil whose eigenvalues
//! are all roots. Alternatively the full pencil is solved and the infinite
//! eigenvalues filtered out.

use std::fmt::Display;

use num::{complex::Complex64, Zero};

use crate::{
    error::{Error, Result, Violation},
    util::{
        complex::{complex_fmt, complex_sort_mut},
        doc_macros::{errors_roots, roots_unordered},
    },
};

mod pencil;
pub use pencil::CompanionPencil;

/// Knobs for [`lagrange_roots`].
///
/// ```
/// use lagrange_roots::RootsConfig;
///
/// let config = RootsConfig::default().with_deflation(false).with_pivot_tolerance(1E-8);
/// assert!(!config.use_deflation());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RootsConfig {
    use_deflation: bool,
    pivot_tolerance: f64,
}

impl Default for RootsConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RootsConfig {
    /// Deflation enabled, pivot tolerance `1e-10`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            use_deflation: true,
            pivot_tolerance: 1E-10,
        }
    }

    /// Remove the infinite eigenvalues before solving (`true`), or solve the
    /// full pencil and filter them out afterwards (`false`).
    #[must_use]
    pub const fn with_deflation(self, use_deflation: bool) -> Self {
        Self {
            use_deflation,
            ..self
        }
    }

    /// Largest relative imaginary part tolerated in the reflection pivot after
    /// the phase rotation.
    #[must_use]
    pub const fn with_pivot_tolerance(self, pivot_tolerance: f64) -> Self {
        Self {
            pivot_tolerance,
            ..self
        }
    }

    #[must_use]
    pub const fn use_deflation(&self) -> bool {
        self.use_deflation
    }

    #[must_use]
    pub const fn pivot_tolerance(&self) -> f64 {
        self.pivot_tolerance
    }
}

/// Which algorithm produced a set of [`Roots`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SolvePath {
    /// Both infinite eigenvalues were deflated before the solve.
    Deflated,
    /// The full pencil was solved and the infinite eigenvalues discarded.
    Filtered(FallbackReason),
}

/// Why the full pencil was solved instead of the deflated one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackReason {
    /// Deflation was turned off in the [`RootsConfig`].
    Requested,
    /// The leading weight of the balanced pencil is zero or non-finite, so
    /// the phase rotation is undefined.
    DegeneratePhase,
}

/// The roots of a polynomial together with the path that computed them.
#[derive(Clone, Debug, PartialEq)]
pub struct Roots {
    values: Vec<Complex64>,
    path: SolvePath,
}

impl Roots {
    pub(crate) const fn new(values: Vec<Complex64>, path: SolvePath) -> Self {
        Self { values, path }
    }

    #[must_use]
    pub const fn path(&self) -> SolvePath {
        self.path
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Complex64] {
        &self.values
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Complex64> {
        self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Complex64> {
        self.values.iter()
    }

    /// Sort lexicographically by real, then imaginary part.
    #[must_use]
    pub fn sorted(mut self) -> Self {
        complex_sort_mut(&mut self.values);
        self
    }
}

impl IntoIterator for Roots {
    type Item = Complex64;
    type IntoIter = std::vec::IntoIter<Complex64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Roots {
    type Item = &'a Complex64;
    type IntoIter = std::slice::Iter<'a, Complex64>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

impl Display for Roots {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let items: Vec<String> = self.values.iter().map(complex_fmt).collect();
        write!(f, "[{}]", items.join(", "))
    }
}

/// Find the roots of the polynomial with the given `coefficients` (its values
/// at `nodes`) in barycentric form with `weights`.
///
/// A polynomial on `n` nodes has degree at most `n - 1` and exactly `n - 1`
/// roots are returned, counted with multiplicity. The nodes must be pairwise
/// distinct and the weights must be their barycentric weights.
///
#[doc = roots_unordered!()]
/// # Errors
#[doc = errors_roots!()]
pub fn lagrange_roots(
    nodes: &[Complex64],
    weights: &[Complex64],
    coefficients: &[Complex64],
    config: &RootsConfig,
) -> Result<Roots> {
    let n = nodes.len();
    if n == 0 {
        return Err(Error::dimension("nodes", "at least one node", 0));
    }
    if weights.len() != n {
        return Err(Error::dimension("weights", n, weights.len()));
    }
    if coefficients.len() != n {
        return Err(Error::dimension("coefficients", n, coefficients.len()));
    }
    if coefficients.iter().all(Zero::is_zero) {
        return Err(Error::ZeroPolynomial);
    }

    log::trace!("starting with arguments: {{nodes: {n}, config: \"{config:?}\"}}");

    let requested_path = if config.use_deflation {
        SolvePath::Deflated
    } else {
        SolvePath::Filtered(FallbackReason::Requested)
    };
    if n == 1 {
        // a non-zero constant
        return Ok(Roots::new(vec![], requested_path));
    }

    let pencil = CompanionPencil::new(nodes, weights, coefficients).balanced();
    if !pencil.is_finite() {
        return Err(Violation::NonFinitePencil.into());
    }

    match (pencil.phase_rotated(), config.use_deflation) {
        (Some(rotated), true) => deflated_roots(&rotated, config),
        (Some(rotated), false) => filtered_roots(&rotated, FallbackReason::Requested),
        (None, use_deflation) => {
            if use_deflation {
                log::warn!(
                    "leading weight has no phase, solving the full pencil {{pivot: {}}}",
                    pencil.a()[(1, 0)]
                );
            }
            let reason = if use_deflation {
                FallbackReason::DegeneratePhase
            } else {
                FallbackReason::Requested
            };
            filtered_roots(&pencil, reason)
        }
    }
}

fn deflated_roots(pencil: &CompanionPencil, config: &RootsConfig) -> Result<Roots> {
    let pivot = pencil.a()[(1, 0)];
    if pivot.im.abs() > config.pivot_tolerance * pivot.norm() {
        return Err(Violation::ComplexPivot { imag: pivot.im }.into());
    }

    let pencil = pencil
        .reflected()
        .ok_or(Violation::SingularRotation)?
        .hessenberg_reduced()
        .swapped_and_deflated();
    log::debug!("first infinite eigenvalue deflated {{size: {}}}", pencil.size());

    let pencil = pencil
        .rotated_and_deflated()
        .ok_or(Violation::SingularRotation)?;
    log::debug!("second infinite eigenvalue deflated {{size: {}}}", pencil.size());

    let expected = pencil.size();
    let values: Vec<Complex64> = pencil
        .eigenvalues()?
        .iter()
        .map(crate::GeneralizedEigenvalue::value)
        .collect();

    // a degree-deficient polynomial leaves an infinite eigenvalue behind
    let found = values.iter().filter(|z| z.is_finite()).count();
    if found != expected {
        return Err(Violation::FiniteEigenvalueCount { expected, found }.into());
    }
    Ok(Roots::new(values, SolvePath::Deflated))
}

fn filtered_roots(pencil: &CompanionPencil, reason: FallbackReason) -> Result<Roots> {
    let expected = pencil.size() - 2;
    let values: Vec<Complex64> = pencil
        .eigenvalues()?
        .iter()
        .map(crate::GeneralizedEigenvalue::value)
        .filter(|z| z.is_finite())
        .collect();
    log::debug!(
        "filtered infinite eigenvalues {{expected: {expected}, found: {}}}",
        values.len()
    );

    if values.len() != expected {
        return Err(Violation::FiniteEigenvalueCount {
            expected,
            found: values.len(),
        }
        .into());
    }
    Ok(Roots::new(values, SolvePath::Filtered(reason)))
}
