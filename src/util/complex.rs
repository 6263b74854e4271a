// internal utilities for dealing with Complex annoyiances

use std::{cmp::Ordering, ops::Neg};

use itertools::Itertools;
use num::{complex::Complex64, One, Zero};

// sort a vector of complex numbers lexicographically, using their real part first
pub(crate) fn complex_sort_mut(v: &mut [Complex64]) {
    v.sort_by(|a, b| {
        let re_ord = a.re.partial_cmp(&b.re).unwrap_or(Ordering::Equal);
        if re_ord != Ordering::Equal {
            return re_ord;
        }
        a.im.partial_cmp(&b.im).unwrap_or(Ordering::Equal)
    });
}

/// index of the point closest to `x`, `None` if `points` is empty
pub(crate) fn nearest(points: &[Complex64], x: Complex64) -> Option<usize> {
    points
        .iter()
        .map(|p| (x - p).norm())
        .position_min_by(f64::total_cmp)
}

/// `true` if `z` is finite and its phase can be taken, i.e. it is non-zero
pub(crate) fn has_phase(z: Complex64) -> bool {
    !z.is_zero() && z.is_finite() && z.arg().is_finite()
}

/// formatting for Complex, because the implementation is not good enough for me
pub(crate) fn complex_fmt<T>(c: &num::Complex<T>) -> String
where
    T: std::fmt::Display + Zero + One + PartialOrd + Neg<Output = T> + Clone,
{
    let r = &c.re;
    let (sign, i) = if c.im < T::zero() {
        ('-', -c.im.clone())
    } else {
        ('+', c.im.clone())
    };
    if i.is_zero() {
        format!("{r}")
    } else if i.is_one() {
        format!("({r}{sign}i)")
    } else {
        format!("({r}{sign}i{i})")
    }
}
