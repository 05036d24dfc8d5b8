//! Looping Pendulum – capstan-friction counterweight simulator for Rust.
//!
//! A light mass loops on a string that passes over a friction axle to a
//! heavier hanging mass. The crate integrates both masses forward in fixed
//! steps until the axle friction can hold the heavy mass, then keeps looping
//! the light mass alone while re-testing the lock on every step.

pub mod config;
pub mod core;
pub mod dynamics;
pub mod error;
pub mod sweep;
pub mod trajectory;
pub mod utils;
pub mod world;

pub use glam::DVec2;

pub use config::{ModeTransition, PhysicalConfig};
pub use crate::core::types::{StateVector, Tensions};
pub use dynamics::{
    friction::{CapstanFriction, FrictionState},
    integrator::{Integrator, Mode, StepOutput},
};
pub use error::{ConfigError, FaultKind, NumericalFault, Quantity, SimulationError};
pub use sweep::{friction_sweep, run_many};
pub use trajectory::{DriftStats, RunSummary, Termination, Trajectory, TrajectoryRecord};
pub use world::{run, Simulation};
