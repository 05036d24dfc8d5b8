//! Simulation dynamics: the capstan friction law and the two-regime stepper.

pub mod friction;
pub mod integrator;

pub use friction::{CapstanFriction, FrictionState};
pub use integrator::{Integrator, Mode, StepOutput, DENOMINATOR_EPSILON};
