//! Trailing-window estimation
//!
//! The head of a trajectory reflects the empty-system start, not the
//! steady state, so estimation only looks at the trailing window of the
//! trace and treats everything before it as burn-in.

use crate::models::StationaryDistribution;

/// Length of the trailing analysis window, in transitions.
///
/// Runs shorter than this use their whole trace.
pub const ANALYSIS_WINDOW: usize = 5000;

/// The last `min(ANALYSIS_WINDOW, len)` entries of the trace
pub(crate) fn trailing_window(trace: &[usize]) -> &[usize] {
    let start = trace.len().saturating_sub(ANALYSIS_WINDOW);
    &trace[start..]
}

/// Empirical distribution and mean occupancy over a window
///
/// The distribution spans [0, max state in window]; visit counts are
/// normalized by the window length, so the mass sums to 1 over that
/// support.
pub(crate) fn empirical_estimate(window: &[usize]) -> (StationaryDistribution, f64) {
    debug_assert!(!window.is_empty(), "estimation window must be non-empty");

    let max_state = window.iter().copied().max().unwrap_or(0);
    let mut counts = vec![0usize; max_state + 1];
    for &state in window {
        counts[state] += 1;
    }

    let total = window.len() as f64;
    let probabilities = counts.into_iter().map(|c| c as f64 / total).collect();
    let mean = window.iter().copied().sum::<usize>() as f64 / total;

    (StationaryDistribution::from_probabilities(probabilities), mean)
}
