//! Macros for reducing doc comment boilerplate.

/// Documents the errors of every rootfinding entry point.
macro_rules! errors_roots {
    () => {
        r"- `Dimension`: nodes, weights and coefficients are empty or differ in length
- `ZeroPolynomial`: the coefficient vector is identically zero
- `LinearAlgebra`: the generalized eigenvalue solver failed
- `InvariantViolation`:
  - `NonFinitePencil`: the pencil has non-finite entries, usually from duplicate nodes
  - `ComplexPivot`: the pivot left by the phase rotation is not real within `pivot_tolerance`
  - `SingularRotation`: a deflating reflection or rotation would be built from a zero vector
  - `FiniteEigenvalueCount`: not exactly `n - 1` finite eigenvalues were found, e.g. for a degree-deficient polynomial
"
    };
}
pub(crate) use errors_roots;

/// Documents how root order is (not) defined.
macro_rules! roots_unordered {
    () => {
        r"Roots are returned in no particular order, compare them as a set.

"
    };
}
pub(crate) use roots_unordered;
