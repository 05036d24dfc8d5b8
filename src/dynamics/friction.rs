use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

/// Capstan friction around the axle: the heavy side can carry up to
/// `T_in * exp(mu * wrap)` where the wrap angle is `theta + pi/2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CapstanFriction {
    pub coefficient: f64,
}

impl CapstanFriction {
    pub fn new(coefficient: f64) -> Self {
        Self { coefficient }
    }

    /// Wrap angle of the string around the axle for a light-mass angle.
    pub fn wrap_angle(theta: f64) -> f64 {
        theta + FRAC_PI_2
    }

    /// Multiplier `exp(mu * wrap)`; exactly 1 when `mu == 0`.
    pub fn amplification(&self, theta: f64) -> f64 {
        (self.coefficient * Self::wrap_angle(theta)).exp()
    }

    /// Tension delivered to the heavy side for a light-side tension.
    pub fn transmit(&self, light_side: f64, theta: f64) -> f64 {
        light_side * self.amplification(theta)
    }

    /// Decides whether the axle can keep a stationary heavy mass in place.
    pub fn hold(&self, max_tension: f64, weight: f64, heavy_mass: f64) -> FrictionState {
        if max_tension >= weight {
            FrictionState::Locked
        } else {
            FrictionState::Slipping {
                acceleration: (max_tension - weight) / heavy_mass,
            }
        }
    }
}

/// Outcome of the lock/slip test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FrictionState {
    /// Static friction holds the heavy mass.
    Locked,
    /// Friction is overcome; the heavy mass accelerates from rest.
    Slipping { acceleration: f64 },
}

impl FrictionState {
    pub fn is_locked(&self) -> bool {
        matches!(self, FrictionState::Locked)
    }

    /// Heavy-mass velocity after one step starting from rest.
    pub fn velocity_after(&self, dt: f64) -> f64 {
        match self {
            FrictionState::Locked => 0.0,
            FrictionState::Slipping { acceleration } => acceleration * dt,
        }
    }
}
