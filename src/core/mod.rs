//! Core value types shared by the step functions and the driver.

pub mod types;

pub use types::{StateVector, Tensions};
