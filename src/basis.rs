use na::DMatrix;
use num::{complex::Complex64, One, Zero};

use crate::{
    error::{Error, Result},
    roots::{lagrange_roots, Roots, RootsConfig},
    util::{
        complex::nearest,
        doc_macros::{errors_roots, roots_unordered},
    },
};

/// Lagrange polynomial basis in barycentric form over a fixed set of nodes.
///
/// The basis is built once and can be reused for any number of evaluations
/// and rootfinding calls. Nodes are expected to be pairwise distinct, a
/// repeated node produces infinite weights, which the rootfinder rejects.
#[derive(Clone, Debug, PartialEq)]
pub struct LagrangeBasis {
    nodes: Vec<Complex64>,
    weights: Vec<Complex64>,
}

impl LagrangeBasis {
    /// # Errors
    /// `Dimension` if `nodes` is empty.
    pub fn new(nodes: &[Complex64]) -> Result<Self> {
        if nodes.is_empty() {
            return Err(Error::dimension("nodes", "at least one node", 0));
        }

        // w[j] = 1 / ∏_{k≠j}(x[j] - x[k])
        let weights = nodes
            .iter()
            .enumerate()
            .map(|(j, xj)| {
                let denominator: Complex64 = nodes
                    .iter()
                    .enumerate()
                    .filter(|(k, _)| *k != j)
                    .map(|(_, xk)| xj - xk)
                    .product();
                Complex64::one() / denominator
            })
            .collect();

        Ok(Self {
            nodes: nodes.to_vec(),
            weights,
        })
    }

    /// Basis over real nodes.
    ///
    /// # Errors
    /// `Dimension` if `nodes` is empty.
    pub fn from_reals(nodes: &[f64]) -> Result<Self> {
        let nodes: Vec<Complex64> = nodes.iter().map(|&x| Complex64::new(x, 0.0)).collect();
        Self::new(&nodes)
    }

    /// Basis over the entries of a row or column vector.
    ///
    /// # Errors
    /// `Dimension` if the matrix has more than one row and more than one
    /// column, or if it is empty.
    pub fn from_matrix(nodes: &DMatrix<Complex64>) -> Result<Self> {
        let (rows, cols) = nodes.shape();
        if rows > 1 && cols > 1 {
            return Err(Error::dimension(
                "nodes",
                "a one-dimensional vector",
                format!("{rows}x{cols} matrix"),
            ));
        }
        // column-major storage, so this is the node order for both shapes
        Self::new(nodes.as_slice())
    }

    #[must_use]
    pub fn nodes(&self) -> &[Complex64] {
        &self.nodes
    }

    #[must_use]
    pub fn weights(&self) -> &[Complex64] {
        &self.weights
    }

    /// Number of nodes, one more than the maximum degree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`, a basis has at least one node.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Evaluate every basis function at every point.
    ///
    /// Entry `(i, j)` is `w[j] / (points[i] - x[j])`. A point that coincides
    /// with a node, exactly or up to round-off, would produce a non-finite
    /// row. Such a row is replaced by the indicator of the nearest node, so
    /// the result is always finite and the basis interpolates at the nodes.
    #[must_use]
    pub fn vandermonde(&self, points: &[Complex64]) -> DMatrix<Complex64> {
        let mut v = DMatrix::from_fn(points.len(), self.len(), |i, j| {
            self.weights[j] / (points[i] - self.nodes[j])
        });

        for (i, &x) in points.iter().enumerate() {
            if v.row(i).iter().all(|z| z.is_finite()) {
                continue;
            }
            log::trace!("point coincides with a node {{row: {i}, point: {x}}}");
            v.row_mut(i).fill(Complex64::zero());
            if let Some(k) = nearest(&self.nodes, x) {
                v[(i, k)] = Complex64::one();
            }
        }
        v
    }

    /// Roots of the polynomial with the given coefficients in this basis.
    ///
    #[doc = roots_unordered!()]
    /// # Errors
    #[doc = errors_roots!()]
    pub fn roots(&self, coefficients: &[Complex64], use_deflation: bool) -> Result<Vec<Complex64>> {
        let config = RootsConfig::default().with_deflation(use_deflation);
        self.roots_with(coefficients, &config).map(Roots::into_vec)
    }

    /// Like [`LagrangeBasis::roots`], with full control over the solver and
    /// reporting which path produced the roots.
    ///
    #[doc = roots_unordered!()]
    /// # Errors
    #[doc = errors_roots!()]
    pub fn roots_with(&self, coefficients: &[Complex64], config: &RootsConfig) -> Result<Roots> {
        lagrange_roots(&self.nodes, &self.weights, coefficients, config)
    }
}
