//! PyO3 wrappers for the two engines
//!
//! Provides the Python interface to the Rust core so the (Python)
//! presentation layer can call both estimators directly. The surface is
//! two plain functions returning tuples; invalid parameters surface as
//! `ValueError` at the boundary.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::models::{ParameterError, QueueParameters};
use crate::rng::RngManager;

impl From<ParameterError> for PyErr {
    fn from(err: ParameterError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Closed-form steady-state solution of an M/M/m queue
///
/// Returns `(distribution, p0, mean_in_system)`. For unstable
/// parameters the degenerate sentinel `([0.0], 0.0, inf)` is returned
/// rather than raising.
///
/// # Example (from Python)
///
/// ```python
/// from mmm_queue_core_rs import solve_theoretical
///
/// dist, p0, mean = solve_theoretical(4.0, 2.0, 3)
/// print(f"P0 = {p0:.4f}, L = {mean:.2f}")
/// ```
#[pyfunction]
#[pyo3(name = "solve_theoretical")]
pub fn solve_theoretical(lam: f64, mu: f64, m: usize) -> PyResult<(Vec<f64>, f64, f64)> {
    let params = QueueParameters::new(lam, mu, m)?;
    let solution = crate::theory::solve_theoretical(&params);

    Ok((
        solution.distribution.as_slice().to_vec(),
        solution.empty_probability,
        solution.mean_in_system,
    ))
}

/// Simulate the embedded chain and estimate the steady state
///
/// Returns `(distribution, mean_in_system)`. A run without an explicit
/// seed draws one from the clock, so repeated calls generally differ;
/// pass `seed` for reproducible output. Unstable parameters log an
/// advisory and run anyway.
///
/// # Example (from Python)
///
/// ```python
/// from mmm_queue_core_rs import simulate
///
/// dist, mean = simulate(4.0, 2.0, 3, transitions=10_000, seed=42)
/// print(f"empirical L = {mean:.2f}")
/// ```
#[pyfunction]
#[pyo3(name = "simulate")]
#[pyo3(signature = (lam, mu, m, transitions = 10_000, seed = None))]
pub fn simulate(
    lam: f64,
    mu: f64,
    m: usize,
    transitions: usize,
    seed: Option<u64>,
) -> PyResult<(Vec<f64>, f64)> {
    let params = QueueParameters::new(lam, mu, m)?;
    let seed = seed.unwrap_or_else(RngManager::entropy_seed);
    let outcome = crate::simulation::simulate(&params, transitions, seed)?;

    Ok((
        outcome.distribution.as_slice().to_vec(),
        outcome.mean_in_system,
    ))
}
