//! Stochastic estimation of the M/M/m steady state
//!
//! Simulates the embedded Markov chain of the continuous-time
//! birth-death process and estimates the stationary distribution from
//! the trailing window of the generated trajectory.

mod engine;
mod estimate;

pub use engine::{simulate, QueueSimulator, SimulationOutcome};
pub use estimate::ANALYSIS_WINDOW;
