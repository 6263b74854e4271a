//! Testing utilities, do not depend on any of these in production!

use std::f64::consts::{PI, TAU};

use fastrand::Rng;
use itertools::Itertools;
use num::{complex::Complex64, One};

struct RandStreamF64 {
    state: Rng,
}

impl RandStreamF64 {
    fn new(seed: u64) -> Self {
        Self {
            state: Rng::with_seed(seed),
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.state.f64())
    }
}

/// Infinite stream of real numbers uniformly distributed in `[min, max)`
pub struct RandStreamR64 {
    real_stream: RandStreamF64,
    min: f64,
    max: f64,
}

impl RandStreamR64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            real_stream: RandStreamF64::new(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamR64 {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = (self.real_stream.next()?).mul_add(self.max - self.min, self.min);
        Some(Complex64::new(re, 0.0))
    }
}

/// Infinite stream of complex numbers uniformly distributed in a rectangle
pub struct RandStreamC64Cartesian {
    real_stream: RandStreamF64,
    min_re: f64,
    max_re: f64,
    min_im: f64,
    max_im: f64,
}

impl RandStreamC64Cartesian {
    #[must_use]
    pub fn new(seed: u64, min_re: f64, max_re: f64, min_im: f64, max_im: f64) -> Self {
        assert!(
            min_re <= max_re && min_im <= max_im,
            "minimum should be smaller or equal to maximum"
        );
        Self {
            real_stream: RandStreamF64::new(seed),
            min_re,
            max_re,
            min_im,
            max_im,
        }
    }
}

impl Iterator for RandStreamC64Cartesian {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let re = (self.real_stream.next()?).mul_add(self.max_re - self.min_re, self.min_re);
        let im = (self.real_stream.next()?).mul_add(self.max_im - self.min_im, self.min_im);
        Some(Complex64::new(re, im))
    }
}

/// Infinite stream of complex numbers in an annular sector, angles are given
/// as fractions of a full turn
pub struct RandStreamC64Polar {
    real_stream: RandStreamF64,
    min_radius: f64,
    max_radius: f64,
    min_angle: f64,
    max_angle: f64,
}

impl RandStreamC64Polar {
    #[must_use]
    pub fn new(
        seed: u64,
        min_radius: f64,
        max_radius: f64,
        min_angle: f64,
        max_angle: f64,
    ) -> Self {
        assert!(
            0.0 <= min_angle && max_angle <= 1.0,
            "angles should be specified in the range [0,1]"
        );
        assert!(
            min_angle <= max_angle,
            "min_angle should be smaller or equal to max_angle"
        );
        assert!(0.0 <= min_radius, "radius should be non-negative");
        assert!(
            min_radius <= max_radius,
            "min_radius should be smaller or equal to max_radius"
        );
        Self {
            real_stream: RandStreamF64::new(seed),
            min_radius,
            max_radius,
            min_angle,
            max_angle,
        }
    }
}

impl Iterator for RandStreamC64Polar {
    type Item = Complex64;

    fn next(&mut self) -> Option<Self::Item> {
        let r =
            (self.real_stream.next()?).mul_add(self.max_radius - self.min_radius, self.min_radius);
        let a = (self.real_stream.next()?).mul_add(self.max_angle - self.min_angle, self.min_angle);
        Some(Complex64::from_polar(r, a * TAU))
    }
}

/// Chebyshev points of the first kind on `[-1, 1]`
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn chebyshev_nodes(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|j| Complex64::new((PI * (2 * j + 1) as f64 / (2 * n) as f64).cos(), 0.0))
        .collect()
}

/// The `n`-th roots of unity
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn roots_of_unity(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|k| Complex64::from_polar(1.0, TAU * k as f64 / n as f64))
        .collect()
}

/// Values of `scale * ∏(x - root)` at each node, i.e. the barycentric
/// coefficients of the polynomial with the given roots
#[must_use]
pub fn coefficients_from_roots(
    nodes: &[Complex64],
    roots: &[Complex64],
    scale: Complex64,
) -> Vec<Complex64> {
    nodes
        .iter()
        .map(|x| scale * roots.iter().map(|r| x - r).product::<Complex64>())
        .collect()
}

/// Generate one test case where the roots are known and can be compared, the
/// degree is one less than the number of nodes
pub fn test_case_roots(
    roots_stream: impl Iterator<Item = Complex64>,
    mut scale_stream: impl Iterator<Item = Complex64>,
    nodes: &[Complex64],
) -> (Vec<Complex64>, Vec<Complex64>) {
    let roots = roots_stream
        .take(nodes.len().saturating_sub(1))
        .collect_vec();
    let scale = scale_stream.next().unwrap_or_else(Complex64::one);
    (coefficients_from_roots(nodes, &roots, scale), roots)
}

/// Check that all roots have been found, pairing each found root with the
/// closest expected one
#[must_use]
pub fn check_roots(roots1: Vec<Complex64>, roots2: Vec<Complex64>, tol: f64) -> bool {
    check_roots_inner(roots1, roots2, |_| tol)
}

/// Like [`check_roots`], with a tolerance relative to the magnitude of the
/// expected root (absolute for roots smaller than one)
#[must_use]
pub fn check_roots_relative(roots1: Vec<Complex64>, roots2: Vec<Complex64>, tol: f64) -> bool {
    check_roots_inner(roots1, roots2, |r| tol * r.norm().max(1.0))
}

fn check_roots_inner(
    roots1: Vec<Complex64>,
    mut roots2: Vec<Complex64>,
    tol: impl Fn(Complex64) -> f64,
) -> bool {
    if roots1.len() != roots2.len() {
        return false;
    }

    for r1 in roots1 {
        let mut best_idx = 0;
        let mut best_d = f64::MAX;
        for (i, r2) in roots2.iter().enumerate() {
            let d = (r1 - r2).norm();
            if d < best_d {
                best_idx = i;
                best_d = d;
            }
        }
        if best_d > tol(roots2[best_idx]) {
            return false;
        }
        roots2.remove(best_idx);
    }
    true
}
