//! Stationary distribution of the number of customers in the system
//!
//! Both engines produce one of these: the solver over a fixed truncated
//! horizon, the simulator over the states actually visited in its
//! analysis window. Index n holds P(N = n).

use serde::{Deserialize, Serialize};

/// Probability vector over customer counts n = 0, 1, 2, …
///
/// The vector is truncated: `probability(n)` is 0 for any n beyond the
/// stored support. A theoretical distribution therefore does not sum to
/// exactly 1 (the discarded tail is analytically negligible for stable
/// parameters bounded away from ρ = 1), while an empirical one sums to 1
/// over its observed support by construction.
///
/// # Example
///
/// ```
/// use mmm_queue_core_rs::StationaryDistribution;
///
/// let dist = StationaryDistribution::from_probabilities(vec![0.5, 0.3, 0.2]);
/// assert_eq!(dist.probability(1), 0.3);
/// assert_eq!(dist.probability(99), 0.0);
/// assert!((dist.mean() - 0.7).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationaryDistribution(Vec<f64>);

impl StationaryDistribution {
    /// Wrap a probability vector indexed by state
    pub fn from_probabilities(probabilities: Vec<f64>) -> Self {
        Self(probabilities)
    }

    /// P(N = n), 0 beyond the stored support
    pub fn probability(&self, n: usize) -> f64 {
        self.0.get(n).copied().unwrap_or(0.0)
    }

    /// Number of states in the stored support
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the support is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw probability vector
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Iterate over (state, probability) pairs
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.0.iter().copied().enumerate()
    }

    /// Total probability mass over the stored support
    pub fn total_mass(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Mean Σ n·P(n) over the stored support
    pub fn mean(&self) -> f64 {
        self.iter().map(|(n, p)| n as f64 * p).sum()
    }

    /// Total variation distance ½ Σ |p(n) − q(n)| over the union of supports
    pub fn total_variation_distance(&self, other: &Self) -> f64 {
        let states = self.len().max(other.len());
        let abs_diff_sum: f64 = (0..states)
            .map(|n| (self.probability(n) - other.probability(n)).abs())
            .sum();
        abs_diff_sum / 2.0
    }
}

impl From<Vec<f64>> for StationaryDistribution {
    fn from(probabilities: Vec<f64>) -> Self {
        Self::from_probabilities(probabilities)
    }
}
