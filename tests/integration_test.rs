use lagrange_roots::{
    complex, lagrange_roots,
    num::complex::Complex64,
    roots::CompanionPencil,
    Error, FallbackReason, LagrangeBasis, LagrangePoly, RootsConfig, SolvePath, Violation,
    __testing::{check_roots, coefficients_from_roots, roots_of_unity},
};

fn three_nodes() -> LagrangeBasis {
    LagrangeBasis::from_reals(&[-1.0, 0.0, 1.0]).unwrap()
}

#[test]
fn three_node_quadratic() {
    let basis = three_nodes();
    assert_eq!(
        basis.weights(),
        &[complex!(0.5), complex!(-1.0), complex!(0.5)]
    );

    let coeffs = coefficients_from_roots(
        basis.nodes(),
        &[complex!(0.2), complex!(-0.3)],
        complex!(1.0),
    );
    for use_deflation in [true, false] {
        let roots = basis.roots(&coeffs, use_deflation).unwrap();
        assert!(
            check_roots(roots.clone(), vec![complex!(0.2), complex!(-0.3)], 1E-8),
            "{roots:?} @ use_deflation = {use_deflation}"
        );
    }
}

#[test]
fn constant_has_no_roots() {
    let basis = LagrangeBasis::from_reals(&[0.5]).unwrap();
    for use_deflation in [true, false] {
        assert!(basis.roots(&[complex!(4.0)], use_deflation).unwrap().is_empty());
    }
}

#[test]
fn linear() {
    let basis = LagrangeBasis::from_reals(&[0.0, 1.0]).unwrap();
    // 2x - 1
    let coeffs = [complex!(-1.0), complex!(1.0)];
    for use_deflation in [true, false] {
        let roots = basis.roots(&coeffs, use_deflation).unwrap();
        assert!(check_roots(roots, vec![complex!(0.5)], 1E-12));
    }
}

#[test]
fn complex_nodes_and_roots() {
    let basis = LagrangeBasis::new(&roots_of_unity(6)).unwrap();
    let expected = vec![
        complex!(0.3, 0.4),
        complex!(-0.5, 0.1),
        complex!(0.0, -0.8),
        complex!(0.9),
        complex!(-0.2, -0.2),
    ];
    let coeffs = coefficients_from_roots(basis.nodes(), &expected, complex!(0.5, 2.0));
    for use_deflation in [true, false] {
        let roots = basis.roots(&coeffs, use_deflation).unwrap();
        assert!(
            check_roots(roots.clone(), expected.clone(), 1E-8),
            "{roots:?} != {expected:?}"
        );
    }
}

#[test]
fn permutation_invariance() {
    let nodes = [complex!(-1.0), complex!(-0.2), complex!(0.4, 0.3), complex!(1.0)];
    let expected = [complex!(0.1), complex!(-0.6), complex!(0.5, -0.5)];
    let basis = LagrangeBasis::new(&nodes).unwrap();
    let coeffs = coefficients_from_roots(&nodes, &expected, complex!(3.0));
    let reference = basis.roots(&coeffs, true).unwrap();

    let perm = [2, 0, 3, 1];
    let nodes_p: Vec<Complex64> = perm.iter().map(|&i| nodes[i]).collect();
    let weights_p: Vec<Complex64> = perm.iter().map(|&i| basis.weights()[i]).collect();
    let coeffs_p: Vec<Complex64> = perm.iter().map(|&i| coeffs[i]).collect();

    for config in [
        RootsConfig::default(),
        RootsConfig::default().with_deflation(false),
    ] {
        let roots = lagrange_roots(&nodes_p, &weights_p, &coeffs_p, &config).unwrap();
        assert!(check_roots(roots.into_vec(), reference.clone(), 1E-10));
    }
}

#[test]
fn duplicate_nodes_are_rejected() {
    let basis = LagrangeBasis::from_reals(&[-1.0, 0.5, 0.5, 1.0]).unwrap();
    let coeffs = [complex!(1.0), complex!(-1.0), complex!(-1.0), complex!(2.0)];
    for use_deflation in [true, false] {
        assert_eq!(
            basis.roots(&coeffs, use_deflation),
            Err(Error::InvariantViolation(Violation::NonFinitePencil))
        );
    }
}

#[test]
fn zero_polynomial() {
    let basis = three_nodes();
    assert_eq!(
        basis.roots(&[complex!(0.0); 3], true),
        Err(Error::ZeroPolynomial)
    );
}

#[test]
fn mismatched_lengths() {
    let basis = three_nodes();
    let err = basis.roots(&[complex!(1.0); 4], true).unwrap_err();
    assert!(matches!(err, Error::Dimension { .. }));
    assert_eq!(err.to_string(), "coefficients: expected 3, found 4");
}

#[test]
fn solve_path_is_reported() {
    let basis = three_nodes();
    let coeffs = [complex!(0.84), complex!(-0.06), complex!(1.04)];

    let roots = basis.roots_with(&coeffs, &RootsConfig::default()).unwrap();
    assert_eq!(roots.path(), SolvePath::Deflated);

    let config = RootsConfig::default().with_deflation(false);
    let roots = basis.roots_with(&coeffs, &config).unwrap();
    assert_eq!(roots.path(), SolvePath::Filtered(FallbackReason::Requested));
}

#[test]
fn degenerate_phase_falls_back() {
    let _ = simple_logger::init_with_level(log::Level::Warn);

    // a zero leading weight leaves nothing to take the phase of
    let basis = three_nodes();
    let mut weights = basis.weights().to_vec();
    weights[0] = complex!(0.0);
    let coeffs = [complex!(0.84), complex!(-0.06), complex!(1.04)];

    let roots = lagrange_roots(basis.nodes(), &weights, &coeffs, &RootsConfig::default()).unwrap();
    assert_eq!(
        roots.path(),
        SolvePath::Filtered(FallbackReason::DegeneratePhase)
    );
    assert_eq!(roots.len(), 2);
    assert!(roots.iter().all(|z| z.is_finite()));
    // decoupled node
    assert!(roots.iter().any(|z| (z - complex!(-1.0)).norm() < 1E-10));
}

#[test]
fn lagrange_poly_round_trip() {
    let basis = LagrangeBasis::from_reals(&[-2.0, -1.0, 0.0, 1.0, 2.0]).unwrap();
    let p = LagrangePoly::interpolate(basis, |x| (x * x + 1.0) * (x - 0.5) * (x + 1.5));
    let roots = p.roots_with(&RootsConfig::default()).unwrap().sorted();
    let expected = vec![
        complex!(-1.5),
        complex!(0.0, -1.0),
        complex!(0.0, 1.0),
        complex!(0.5),
    ];
    assert!(check_roots(roots.clone().into_vec(), expected, 1E-8), "{roots}");
    for r in &roots {
        assert!(p.eval_point(*r).norm() < 1E-8);
    }
}

#[test]
fn pencil_stages_compose() {
    let basis = three_nodes();
    let coeffs = [complex!(0.84), complex!(-0.06), complex!(1.04)];
    let pencil = CompanionPencil::new(basis.nodes(), basis.weights(), &coeffs)
        .balanced()
        .phase_rotated()
        .unwrap()
        .reflected()
        .unwrap()
        .hessenberg_reduced()
        .swapped_and_deflated()
        .rotated_and_deflated()
        .unwrap();
    assert_eq!(pencil.size(), 2);

    let roots = pencil
        .eigenvalues()
        .unwrap()
        .iter()
        .map(|e| e.value())
        .collect();
    assert!(check_roots(roots, vec![complex!(0.2), complex!(-0.3)], 1E-8));
}
