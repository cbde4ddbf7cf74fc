//! Closed-form M/M/m solver
//!
//! Evaluates the standard birth-death stationary formulas:
//!
//! - P0 = [ Σ_{k=0}^{m-1} a^k/k!  +  a^m / (m!·(1−ρ)) ]⁻¹  with a = λ/μ
//! - P(n) = a^n/n! · P0                for n < m
//! - P(n) = a^n/(m!·m^{n−m}) · P0      for n ≥ m
//! - Lq = P0 · a^m · ρ / (m!·(1−ρ)²),  L = Lq + a
//!
//! All factorial and power terms are accumulated iteratively (each term
//! is the previous one times a simple ratio), never via naive
//! `factorial()`/`powi()` chains, so large m or large offered load does
//! not overflow intermediate values.

use serde::{Deserialize, Serialize};

use crate::models::{QueueParameters, StationaryDistribution};

/// Number of states kept beyond the server count in the truncated
/// distribution.
///
/// The horizon `m + DEFAULT_HORIZON_MARGIN` is fixed, not adaptive: the
/// truncation error is negligible for any ρ bounded away from 1, but for
/// ρ very close to 1 the returned vector will not have fully decayed by
/// the horizon. That is a documented limitation of the fixed horizon,
/// not something the solver papers over by renormalizing.
pub const DEFAULT_HORIZON_MARGIN: usize = 50;

/// Closed-form steady-state solution
///
/// For unstable parameters (ρ ≥ 1) this is the degenerate sentinel:
/// distribution `[0.0]`, `empty_probability` 0 and `mean_in_system` +∞,
/// so a caller can still render "no stable result" without a special
/// error path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TheoreticalSolution {
    /// P(N = n) for n = 0 .. m + margin − 1
    pub distribution: StationaryDistribution,
    /// P0, probability the system is empty
    pub empty_probability: f64,
    /// L, expected number of customers in the system
    pub mean_in_system: f64,
    /// Traffic intensity ρ the solution was computed for
    pub utilization: f64,
}

impl TheoreticalSolution {
    /// True when no stationary distribution exists (ρ ≥ 1)
    pub fn is_degenerate(&self) -> bool {
        !self.mean_in_system.is_finite()
    }
}

/// Solve the M/M/m queue in steady state with the default horizon
///
/// Pure and deterministic: identical inputs yield bit-identical output.
///
/// # Example
///
/// ```
/// use mmm_queue_core_rs::{solve_theoretical, QueueParameters};
///
/// let params = QueueParameters::new(4.0, 2.0, 3).unwrap();
/// let solution = solve_theoretical(&params);
///
/// assert!((solution.empty_probability - 1.0 / 9.0).abs() < 1e-9);
/// assert!((solution.mean_in_system - 26.0 / 9.0).abs() < 1e-9);
/// ```
pub fn solve_theoretical(params: &QueueParameters) -> TheoreticalSolution {
    solve_theoretical_with_margin(params, DEFAULT_HORIZON_MARGIN)
}

/// Solve with an explicit truncation margin
///
/// The returned distribution covers `servers + horizon_margin` states.
/// [`DEFAULT_HORIZON_MARGIN`] is the right choice unless the caller has
/// a specific precision/size tradeoff in mind.
pub fn solve_theoretical_with_margin(
    params: &QueueParameters,
    horizon_margin: usize,
) -> TheoreticalSolution {
    let rho = params.utilization();
    if rho >= 1.0 {
        return TheoreticalSolution {
            distribution: StationaryDistribution::from_probabilities(vec![0.0]),
            empty_probability: 0.0,
            mean_in_system: f64::INFINITY,
            utilization: rho,
        };
    }

    let a = params.offered_load();
    let m = params.servers();

    // Erlang-C normalizer. term tracks a^k/k! via term_{k+1} = term_k·a/(k+1);
    // after the loop term = a^m/m!.
    let mut term = 1.0;
    let mut partial_sum = 0.0;
    for k in 0..m {
        partial_sum += term;
        term *= a / (k + 1) as f64;
    }
    let erlang_term = term;
    let empty_probability = 1.0 / (partial_sum + erlang_term / (1.0 - rho));

    // P(n+1) = P(n)·a/(n+1) while n+1 < m, then P(n+1) = P(n)·a/m = P(n)·ρ.
    let horizon = m + horizon_margin;
    let mut probabilities = Vec::with_capacity(horizon);
    let mut p = empty_probability;
    for n in 0..horizon {
        probabilities.push(p);
        p *= a / (n + 1).min(m) as f64;
    }

    let one_minus_rho = 1.0 - rho;
    let mean_in_queue = empty_probability * erlang_term * rho / (one_minus_rho * one_minus_rho);
    let mean_in_system = mean_in_queue + a;

    TheoreticalSolution {
        distribution: StationaryDistribution::from_probabilities(probabilities),
        empty_probability,
        mean_in_system,
        utilization: rho,
    }
}
