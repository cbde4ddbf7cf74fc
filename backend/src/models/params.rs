//! Queue parameters
//!
//! The single input shared by the closed-form solver and the simulator.
//! Parameters are validated once at construction; every engine downstream
//! operates on an already-valid value.
//!
//! # Critical Invariants
//!
//! 1. `arrival_rate` and `service_rate` are finite and strictly positive
//! 2. `servers >= 1`
//! 3. A constructed value is immutable (`Copy`, no setters)

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from parameter validation
#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("arrival rate must be finite and strictly positive, got {0}")]
    InvalidArrivalRate(f64),

    #[error("service rate must be finite and strictly positive, got {0}")]
    InvalidServiceRate(f64),

    #[error("server count must be at least 1")]
    NoServers,

    #[error("transition count must be at least 1")]
    NoTransitions,
}

/// Parameters of an M/M/m queue
///
/// - `arrival_rate`: Poisson arrival rate λ
/// - `service_rate`: exponential service rate μ of each server
/// - `servers`: number of identical parallel servers m
///
/// The system is stable only when the traffic intensity
/// ρ = λ / (m·μ) is below 1. Instability is not a validation error:
/// both engines accept unstable parameters and signal the condition in
/// their own way.
///
/// # Example
///
/// ```
/// use mmm_queue_core_rs::QueueParameters;
///
/// let params = QueueParameters::new(4.0, 2.0, 3).unwrap();
/// assert!((params.utilization() - 2.0 / 3.0).abs() < 1e-12);
/// assert!(params.is_stable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QueueParameters {
    /// Arrival rate λ (customers per unit time)
    arrival_rate: f64,
    /// Per-server service rate μ
    service_rate: f64,
    /// Number of parallel servers m
    servers: usize,
}

impl QueueParameters {
    /// Validate and construct queue parameters
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError`] if either rate is non-positive or
    /// non-finite, or if `servers` is zero.
    pub fn new(
        arrival_rate: f64,
        service_rate: f64,
        servers: usize,
    ) -> Result<Self, ParameterError> {
        if !arrival_rate.is_finite() || arrival_rate <= 0.0 {
            return Err(ParameterError::InvalidArrivalRate(arrival_rate));
        }
        if !service_rate.is_finite() || service_rate <= 0.0 {
            return Err(ParameterError::InvalidServiceRate(service_rate));
        }
        if servers == 0 {
            return Err(ParameterError::NoServers);
        }

        Ok(Self {
            arrival_rate,
            service_rate,
            servers,
        })
    }

    /// Arrival rate λ
    pub fn arrival_rate(&self) -> f64 {
        self.arrival_rate
    }

    /// Per-server service rate μ
    pub fn service_rate(&self) -> f64 {
        self.service_rate
    }

    /// Number of parallel servers m
    pub fn servers(&self) -> usize {
        self.servers
    }

    /// Offered load a = λ/μ (mean number of busy servers in steady state)
    pub fn offered_load(&self) -> f64 {
        self.arrival_rate / self.service_rate
    }

    /// Traffic intensity ρ = λ / (m·μ)
    pub fn utilization(&self) -> f64 {
        self.arrival_rate / (self.servers as f64 * self.service_rate)
    }

    /// Whether a stationary distribution exists (ρ < 1)
    pub fn is_stable(&self) -> bool {
        self.utilization() < 1.0
    }
}
