use std::f64::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use crate::{
    config::PhysicalConfig,
    core::types::{StateVector, Tensions},
    dynamics::friction::{CapstanFriction, FrictionState},
    error::{FaultKind, Quantity},
};

/// Smallest magnitude accepted for `r' * cos(theta_dot * h)`.
pub const DENOMINATOR_EPSILON: f64 = 1e-12;

/// Which masses are free to move during a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Both masses move; the heavy mass is not held by the axle.
    #[default]
    Coupled,
    /// The heavy mass is friction-locked and only the light mass loops.
    Decoupled,
}

/// Result of advancing the state by one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutput {
    pub state: StateVector,
    pub tensions: Tensions,
    /// Lock/slip decision. Only the decoupled step makes one.
    pub friction: Option<FrictionState>,
}

/// Explicit single-pass stepper for both motion regimes.
#[derive(Debug, Clone, Copy)]
pub struct Integrator {
    pub dt: f64,
    gravity: f64,
    light_mass: f64,
    heavy_mass: f64,
    axle_radius: f64,
    capstan: CapstanFriction,
}

impl Integrator {
    pub fn new(config: &PhysicalConfig) -> Self {
        Self {
            dt: config.time_step,
            gravity: config.gravity,
            light_mass: config.light_mass,
            heavy_mass: config.heavy_mass,
            axle_radius: config.axle_radius,
            capstan: CapstanFriction::new(config.friction_coefficient),
        }
    }

    pub fn capstan(&self) -> &CapstanFriction {
        &self.capstan
    }

    /// Advances `state` by one step using the variant selected by `mode`.
    pub fn advance(&self, mode: Mode, state: &StateVector) -> Result<StepOutput, FaultKind> {
        match mode {
            Mode::Coupled => self.coupled_step(state),
            Mode::Decoupled => self.decoupled_step(state),
        }
    }

    /// One step with both masses in free motion.
    pub fn coupled_step(&self, state: &StateVector) -> Result<StepOutput, FaultKind> {
        let h = self.dt;

        let r = state.r + state.r_dot * h;
        let theta_dot = self.tangential_rate(state, r)?;
        let theta = state.theta + theta_dot * h;

        let light_side = self.light_side_tension(r, theta, theta_dot);
        let heavy_side = self.capstan.transmit(light_side, theta);
        check_tension(heavy_side)?;

        let y2_acc = (heavy_side - self.heavy_mass * self.gravity) / self.heavy_mass;
        let y2_dot = state.y2_dot + y2_acc * h;
        let r_dot = -self.axle_radius * theta_dot - y2_dot;

        let next = StateVector {
            theta,
            theta_dot,
            r,
            r_dot,
            y2_dot,
        };
        next.check_finite()?;

        Ok(StepOutput {
            state: next,
            tensions: Tensions {
                light_side,
                heavy_side,
            },
            friction: None,
        })
    }

    /// One step with the heavy mass held at rest, testing whether the axle
    /// can keep holding it. The incoming `y2_dot` is ignored.
    pub fn decoupled_step(&self, state: &StateVector) -> Result<StepOutput, FaultKind> {
        let h = self.dt;

        // Only the light side pays out or takes in string.
        let r = state.r - self.axle_radius * state.theta_dot * h;
        let theta_dot = self.tangential_rate(state, r)?;
        let theta = state.theta + theta_dot * h;

        let light_side = self.light_side_tension(r, theta, theta_dot);
        let r_dot = -self.axle_radius * theta_dot;

        let max_heavy_side = self.capstan.transmit(light_side, theta);
        check_tension(max_heavy_side)?;
        let friction = self.capstan.hold(
            max_heavy_side,
            self.heavy_mass * self.gravity,
            self.heavy_mass,
        );

        let next = StateVector {
            theta,
            theta_dot,
            r,
            r_dot,
            y2_dot: friction.velocity_after(h),
        };
        next.check_finite()?;

        Ok(StepOutput {
            state: next,
            tensions: Tensions {
                light_side,
                heavy_side: max_heavy_side,
            },
            friction: Some(friction),
        })
    }

    /// Angular velocity after the step from the tangential force balance,
    /// given the new radius `r_next`.
    fn tangential_rate(&self, state: &StateVector, r_next: f64) -> Result<f64, FaultKind> {
        let h = self.dt;
        let inputs = [
            (Quantity::Theta, state.theta),
            (Quantity::ThetaDot, state.theta_dot),
            (Quantity::Radius, state.r),
        ];
        if let Some((quantity, _)) = inputs.iter().find(|(_, value)| !value.is_finite()) {
            return Err(FaultKind::NonFinite(*quantity));
        }

        // A fixed step can jump the denominator across zero without landing
        // near it: the string winding fully onto the axle, or the cosine
        // changing sign at |theta_dot * h| = pi/2.
        if (state.r > 0.0 && r_next <= 0.0) || (state.theta_dot * h).abs() >= FRAC_PI_2 {
            return Err(FaultKind::SingularDenominator);
        }

        let denominator = r_next * (state.theta_dot * h).cos();
        if !denominator.is_finite() || denominator.abs() < DENOMINATOR_EPSILON {
            return Err(FaultKind::SingularDenominator);
        }
        Ok((self.gravity * state.theta.cos() * h + state.r * state.theta_dot) / denominator)
    }

    /// Centripetal plus radial gravity component on the light mass.
    fn light_side_tension(&self, r: f64, theta: f64, theta_dot: f64) -> f64 {
        self.light_mass * r * theta_dot.powi(2) + self.light_mass * self.gravity * theta.sin()
    }
}

fn check_tension(tension: f64) -> Result<(), FaultKind> {
    if tension.is_finite() {
        Ok(())
    } else {
        Err(FaultKind::NonFinite(Quantity::Tension))
    }
}
