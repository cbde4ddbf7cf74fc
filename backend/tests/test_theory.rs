//! Tests for the closed-form M/M/m solver

use proptest::prelude::*;

use mmm_queue_core_rs::{
    solve_theoretical, solve_theoretical_with_margin, QueueParameters, DEFAULT_HORIZON_MARGIN,
};

fn params(lam: f64, mu: f64, m: usize) -> QueueParameters {
    QueueParameters::new(lam, mu, m).unwrap()
}

#[test]
fn test_three_server_scenario_against_closed_form() {
    // lambda = 4, mu = 2, m = 3, rho = 2/3. Closed form:
    // P0 = 1 / (1 + 2 + 2 + 4) = 1/9, Lq = 8/9, L = Lq + 2 = 26/9.
    let solution = solve_theoretical(&params(4.0, 2.0, 3));

    assert!((solution.empty_probability - 1.0 / 9.0).abs() < 1e-9);
    assert!((solution.mean_in_system - 26.0 / 9.0).abs() < 1e-9);
    assert!((solution.utilization - 2.0 / 3.0).abs() < 1e-12);
    assert!(!solution.is_degenerate());
}

#[test]
fn test_single_server_closed_form() {
    // M/M/1 with rho = 0.25: P(n) = (1-rho)·rho^n for every state.
    let solution = solve_theoretical(&params(1.0, 4.0, 1));
    let rho: f64 = 0.25;

    assert_eq!(solution.distribution.len(), 1 + DEFAULT_HORIZON_MARGIN);
    for (n, p) in solution.distribution.iter() {
        let expected = (1.0 - rho) * rho.powi(n as i32);
        assert!(
            (p - expected).abs() < 1e-12,
            "P({}) = {}, closed form {}",
            n,
            p,
            expected
        );
    }
    // L = rho / (1 - rho)
    assert!((solution.mean_in_system - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn test_truncated_mass_near_one_for_stable_parameters() {
    // (lambda, mu, m, tolerance): the tail beyond the horizon grows as
    // rho approaches 1, so the tolerance widens with rho.
    let cases = [
        (1.0, 4.0, 1, 1e-12), // rho = 0.25
        (4.0, 2.0, 3, 1e-6),  // rho = 2/3
        (3.0, 2.0, 2, 1e-3),  // rho = 0.75
        (9.0, 2.0, 5, 1e-2),  // rho = 0.9
    ];

    for (lam, mu, m, tol) in cases {
        let mass = solve_theoretical(&params(lam, mu, m))
            .distribution
            .total_mass();
        assert!(
            (mass - 1.0).abs() < tol,
            "mass {} for lambda={} mu={} m={}",
            mass,
            lam,
            mu,
            m
        );
    }
}

#[test]
fn test_solver_is_pure() {
    let p = params(4.0, 2.0, 3);
    let first = solve_theoretical(&p);
    let second = solve_theoretical(&p);

    // Bit-identical output, not merely approximately equal
    assert_eq!(first, second);
}

#[test]
fn test_unstable_scenario_returns_sentinel() {
    // lambda = 4, mu = 2, m = 1: rho = 2
    let solution = solve_theoretical(&params(4.0, 2.0, 1));

    assert!(solution.is_degenerate());
    assert_eq!(solution.distribution.as_slice(), &[0.0]);
    assert_eq!(solution.empty_probability, 0.0);
    assert_eq!(solution.mean_in_system, f64::INFINITY);
}

#[test]
fn test_critical_utilization_is_degenerate() {
    // rho = 1 exactly has no stationary distribution either
    let solution = solve_theoretical(&params(4.0, 2.0, 2));
    assert!(solution.is_degenerate());
}

#[test]
fn test_margin_controls_support_length() {
    let p = params(4.0, 2.0, 3);

    assert_eq!(
        solve_theoretical(&p).distribution.len(),
        3 + DEFAULT_HORIZON_MARGIN
    );
    assert_eq!(solve_theoretical_with_margin(&p, 10).distribution.len(), 13);
}

#[test]
fn test_large_server_count_stays_finite() {
    // Naive factorial evaluation would overflow long before m = 120;
    // iterative accumulation must keep every term finite.
    let solution = solve_theoretical(&params(100.0, 1.0, 120));

    assert!(solution.empty_probability.is_finite());
    assert!(solution.empty_probability > 0.0);
    assert!(solution.mean_in_system.is_finite());
    assert!((solution.distribution.total_mass() - 1.0).abs() < 1e-6);
}

proptest! {
    #[test]
    fn prop_unstable_inputs_always_yield_sentinel(
        mu in 0.1f64..50.0,
        m in 1usize..10,
        factor in 1.0001f64..10.0,
    ) {
        // lambda >= m·mu guarantees rho >= 1
        let lam = m as f64 * mu * factor;
        let solution = solve_theoretical(&params(lam, mu, m));

        prop_assert!(solution.is_degenerate());
        prop_assert_eq!(solution.distribution.as_slice(), &[0.0]);
        prop_assert_eq!(solution.empty_probability, 0.0);
    }

    #[test]
    fn prop_stable_distributions_are_non_negative_and_decaying_tail(
        mu in 0.1f64..50.0,
        m in 1usize..10,
        factor in 0.05f64..0.95,
    ) {
        let lam = m as f64 * mu * factor;
        let solution = solve_theoretical(&params(lam, mu, m));

        prop_assert!(!solution.is_degenerate());
        for (_, p) in solution.distribution.iter() {
            prop_assert!(p >= 0.0);
        }
        // Beyond m the terms shrink geometrically by rho < 1
        let support = solution.distribution.as_slice();
        for n in m..support.len() - 1 {
            prop_assert!(support[n + 1] <= support[n] * 1.0000001);
        }
    }
}
