//! Utility helpers: string geometry and run logging.

pub mod logging;
pub mod math;

pub use math::*;
