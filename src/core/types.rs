use serde::{Deserialize, Serialize};

use crate::error::{FaultKind, Quantity};

/// Kinematic state of the mechanism at one step.
///
/// `theta` is measured from the top of the light mass's arc. `y2_dot` is the
/// heavy mass's vertical velocity: negative while it falls, zero while the
/// axle holds it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    pub theta: f64,
    pub theta_dot: f64,
    pub r: f64,
    pub r_dot: f64,
    pub y2_dot: f64,
}

impl StateVector {
    /// Returns the first non-finite component, if any.
    pub fn check_finite(&self) -> Result<(), FaultKind> {
        let components = [
            (Quantity::Theta, self.theta),
            (Quantity::ThetaDot, self.theta_dot),
            (Quantity::Radius, self.r),
            (Quantity::RadiusRate, self.r_dot),
            (Quantity::HeavyVelocity, self.y2_dot),
        ];
        match components.iter().find(|(_, value)| !value.is_finite()) {
            Some((quantity, _)) => Err(FaultKind::NonFinite(*quantity)),
            None => Ok(()),
        }
    }

    /// Whether the heavy mass has stopped falling.
    pub fn heavy_mass_stalled(&self) -> bool {
        self.y2_dot >= 0.0
    }
}

/// String tensions either side of the axle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tensions {
    /// Light-mass side, `T1`.
    pub light_side: f64,
    /// Heavy-mass side, `T2`. While the heavy mass is locked this is the
    /// largest tension friction could transmit.
    pub heavy_side: f64,
}
