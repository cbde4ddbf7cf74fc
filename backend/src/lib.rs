//! M/M/m Queue Analyzer - Rust Engine
//!
//! Two independent estimators of the steady-state behavior of a
//! multi-server queue with exponential arrivals and exponential service,
//! sharing nothing but their input parameters.
//!
//! # Architecture
//!
//! - **models**: Domain types (QueueParameters, StationaryDistribution)
//! - **theory**: Closed-form birth-death solver (Erlang-C formulas)
//! - **simulation**: Embedded-chain Monte-Carlo simulator
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All randomness is deterministic (seeded RNG); the solver uses none
//! 2. Instability (ρ ≥ 1) is never an error: the solver returns a
//!    degenerate sentinel, the simulator runs with an advisory
//! 3. The two engines never read each other's output
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod models;
pub mod rng;
pub mod simulation;
pub mod theory;

// Re-exports for convenience
pub use models::{
    distribution::StationaryDistribution,
    params::{ParameterError, QueueParameters},
};
pub use rng::RngManager;
pub use simulation::{simulate, QueueSimulator, SimulationOutcome, ANALYSIS_WINDOW};
pub use theory::{
    solve_theoretical, solve_theoretical_with_margin, TheoreticalSolution, DEFAULT_HORIZON_MARGIN,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn mmm_queue_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(ffi::solve_theoretical, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::simulate, m)?)?;
    Ok(())
}
