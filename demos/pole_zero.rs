//! Locate the zeros and poles of a rational function given by its values at a
//! handful of nodes.
//!
//! `r(x) = p(x) / q(x)` with numerator and denominator in the same barycentric
//! basis, as a rational fitting routine would produce them.

use lagrange_roots::{complex, num::complex::Complex64, LagrangeBasis, LagrangePoly};

fn main() {
    let _ = simple_logger::init_with_level(log::Level::Debug);

    let basis = LagrangeBasis::from_reals(&[-2.0, -1.0, 0.0, 1.0, 2.0]).expect("distinct nodes");

    // r(x) = (x - 0.5)(x + 0.25) / ((x - 1.5i)(x + 1.5i)(x - 3))
    let numerator =
        LagrangePoly::interpolate(basis.clone(), |x| (x - 0.5) * (x + 0.25));
    let denominator = LagrangePoly::interpolate(basis, |x| {
        (x - complex!(0.0, 1.5)) * (x + complex!(0.0, 1.5)) * (x - 3.0)
    });

    let zeros = numerator.roots(true).expect("zeros");
    let poles = denominator.roots(true).expect("poles");
    println!("numerator: {numerator}");
    println!("zeros: {zeros:?}");
    println!("poles: {poles:?}");

    // the node polynomial cancels in the ratio
    let x = complex!(0.3, 0.1);
    let r: Complex64 = numerator.eval_point(x) / denominator.eval_point(x);
    let exact = (x - 0.5) * (x + 0.25) / ((x * x + 2.25) * (x - 3.0));
    println!("r({x}) = {r}, exact {exact}");
}
