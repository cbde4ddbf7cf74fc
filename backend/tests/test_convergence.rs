//! Convergence of the empirical estimate as the run length grows
//!
//! Longer runs use a larger (capped) analysis window, so the sampling
//! noise in the empirical distribution shrinks and the total variation
//! distance to the closed-form distribution trends downward on average.
//! It does not vanish: transition-counted estimation settles on the
//! jump-chain distribution, which differs from the time-averaged one by
//! a fixed bias.

use mmm_queue_core_rs::{simulate, solve_theoretical, QueueParameters};

#[test]
fn test_tv_distance_trends_downward_with_run_length() {
    let params = QueueParameters::new(4.0, 2.0, 3).unwrap();
    let theory = solve_theoretical(&params).distribution;
    let seeds = [11u64, 22, 33, 44, 55];

    let avg_tv = |transitions: usize| -> f64 {
        let total: f64 = seeds
            .iter()
            .map(|&seed| {
                simulate(&params, transitions, seed)
                    .unwrap()
                    .distribution
                    .total_variation_distance(&theory)
            })
            .sum();
        total / seeds.len() as f64
    };

    let short = avg_tv(1_000);
    let long = avg_tv(50_000);

    assert!(
        long < short,
        "average TV did not decrease: {} (T=1000) vs {} (T=50000)",
        short,
        long
    );
}

#[test]
fn test_long_stable_run_lands_near_theory() {
    // For these parameters the jump-chain bias is about 0.11 in total
    // variation; bias plus residual noise stays well under 0.25.
    let params = QueueParameters::new(4.0, 2.0, 3).unwrap();
    let theory = solve_theoretical(&params).distribution;

    let outcome = simulate(&params, 50_000, 4242).unwrap();
    let tv = outcome.distribution.total_variation_distance(&theory);

    assert!(tv < 0.25, "TV distance to theory {}", tv);
}
