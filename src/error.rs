//! Error types for configuration, stepping, and numerical faults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a configuration is rejected before any step is taken.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A parameter that must be strictly positive was not.
    #[error("`{name}` must be positive, got {value}")]
    NonPositive {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A parameter that must not be negative was.
    #[error("`{name}` must not be negative, got {value}")]
    Negative {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A parameter was NaN or infinite.
    #[error("`{name}` must be finite, got {value}")]
    NonFinite {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// The string is too short to reach the light mass at release.
    #[error("initial light-mass radius must be positive, got {r0}")]
    DegenerateGeometry {
        /// Radius derived from `length - y2_0 - R * (pi/2 + theta0)`.
        r0: f64,
    },

    /// Configuration file could not be read.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration document could not be parsed.
    #[error("failed to parse configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl ConfigError {
    /// Creates a non-positive parameter error.
    #[must_use]
    pub const fn non_positive(name: &'static str, value: f64) -> Self {
        Self::NonPositive { name, value }
    }

    /// Creates a negative parameter error.
    #[must_use]
    pub const fn negative(name: &'static str, value: f64) -> Self {
        Self::Negative { name, value }
    }

    /// Creates a non-finite parameter error.
    #[must_use]
    pub const fn non_finite(name: &'static str, value: f64) -> Self {
        Self::NonFinite { name, value }
    }
}

/// State component or derived quantity checked for finiteness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quantity {
    /// Light-mass angle.
    Theta,
    /// Light-mass angular velocity.
    ThetaDot,
    /// Light-side string length.
    Radius,
    /// Rate of change of the light-side string length.
    RadiusRate,
    /// Heavy-mass vertical velocity.
    HeavyVelocity,
    /// String tension on either side of the axle.
    Tension,
}

/// What went wrong inside a step function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaultKind {
    /// `r' * cos(theta_dot * h)` reached or crossed zero.
    SingularDenominator,
    /// A state component or tension became NaN or infinite.
    NonFinite(Quantity),
}

/// Fatal numerical failure; the run is aborted at `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("numerical fault at step {step}: {kind:?}")]
pub struct NumericalFault {
    /// Index of the step that failed.
    pub step: usize,
    /// Failure classification.
    pub kind: FaultKind,
}

/// Errors surfaced by the step-by-step driver API.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A step produced an ill-defined state.
    #[error(transparent)]
    Numerical(#[from] NumericalFault),

    /// All configured steps have already been taken.
    #[error("simulation finished after {steps} steps")]
    Finished {
        /// Number of steps taken.
        steps: usize,
    },
}
