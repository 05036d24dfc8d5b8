//! Run configuration for the looping pendulum and its nominal defaults.

use std::{f64::consts::FRAC_PI_2, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{core::types::StateVector, error::ConfigError};

/// Gravitational acceleration (m/s²).
pub const DEFAULT_GRAVITY: f64 = 9.81;

/// Default integration timestep (in seconds).
pub const DEFAULT_TIME_STEP: f64 = 1e-5;

/// Number of fixed steps in a nominal run.
pub const DEFAULT_STEP_COUNT: usize = 560_000;

/// Looping (light) mass in kilograms.
pub const DEFAULT_LIGHT_MASS: f64 = 0.2;

/// Hanging (heavy) mass in kilograms.
pub const DEFAULT_HEAVY_MASS: f64 = 0.5;

/// Axle friction coefficient used by the capstan law.
pub const DEFAULT_FRICTION_COEFFICIENT: f64 = 0.03;

/// Air drag coefficient for a `-kv` force model. Currently has no effect.
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 1e-4;

/// Axle radius in metres.
pub const DEFAULT_AXLE_RADIUS: f64 = 0.01;

/// Total string length in metres.
pub const DEFAULT_STRING_LENGTH: f64 = 1.0;

/// Release angular velocity of the light mass (rad/s).
pub const DEFAULT_THETA_DOT0: f64 = 5.0;

/// Release length of the heavy-side string segment (m).
pub const DEFAULT_Y2_0: f64 = 0.2;

/// Accepted absolute deviation of the length check before warning.
pub const DEFAULT_DRIFT_TOLERANCE: f64 = 1e-3;

/// How the driver leaves the decoupled (friction-locked) mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeTransition {
    /// Once the heavy mass stops it is treated as locked for the rest of the
    /// run, even when a later slip gives it a falling velocity.
    #[default]
    OneWay,
    /// A slip with a falling velocity hands control back to coupled motion.
    TwoWay,
}

/// Constants and initial conditions of one run. Never mutated once a run
/// starts; every step borrows it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhysicalConfig {
    #[serde(alias = "g")]
    pub gravity: f64,
    #[serde(alias = "h")]
    pub time_step: f64,
    #[serde(alias = "count")]
    pub step_count: usize,
    #[serde(alias = "m")]
    pub light_mass: f64,
    #[serde(alias = "M")]
    pub heavy_mass: f64,
    #[serde(alias = "mu")]
    pub friction_coefficient: f64,
    /// Air drag coefficient. Accepted for compatibility with existing
    /// parameter sets but not used by either step function.
    #[serde(alias = "k")]
    pub drag_coefficient: f64,
    #[serde(alias = "R")]
    pub axle_radius: f64,
    #[serde(alias = "length")]
    pub string_length: f64,
    /// Release angle, measured from the top of the arc.
    pub theta0: f64,
    pub theta_dot0: f64,
    pub y2_0: f64,
    /// Release velocity of the heavy mass; downwards is negative.
    pub y2_dot0: f64,
    pub transition: ModeTransition,
    pub drift_tolerance: f64,
}

impl Default for PhysicalConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            time_step: DEFAULT_TIME_STEP,
            step_count: DEFAULT_STEP_COUNT,
            light_mass: DEFAULT_LIGHT_MASS,
            heavy_mass: DEFAULT_HEAVY_MASS,
            friction_coefficient: DEFAULT_FRICTION_COEFFICIENT,
            drag_coefficient: DEFAULT_DRAG_COEFFICIENT,
            axle_radius: DEFAULT_AXLE_RADIUS,
            string_length: DEFAULT_STRING_LENGTH,
            theta0: 0.0,
            theta_dot0: DEFAULT_THETA_DOT0,
            y2_0: DEFAULT_Y2_0,
            y2_dot0: 0.0,
            transition: ModeTransition::OneWay,
            drift_tolerance: DEFAULT_DRIFT_TOLERANCE,
        }
    }
}

impl PhysicalConfig {
    /// Parses a YAML document. Keys that are absent keep their nominal value;
    /// unrecognised keys are rejected so a misspelt parameter cannot fall
    /// back to the default silently.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a YAML configuration file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Rejects non-physical parameter sets.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("gravity", self.gravity),
            ("time_step", self.time_step),
            ("light_mass", self.light_mass),
            ("heavy_mass", self.heavy_mass),
            ("friction_coefficient", self.friction_coefficient),
            ("drag_coefficient", self.drag_coefficient),
            ("axle_radius", self.axle_radius),
            ("string_length", self.string_length),
            ("theta0", self.theta0),
            ("theta_dot0", self.theta_dot0),
            ("y2_0", self.y2_0),
            ("y2_dot0", self.y2_dot0),
            ("drift_tolerance", self.drift_tolerance),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::non_finite(name, value));
            }
        }

        let positive = [
            ("gravity", self.gravity),
            ("time_step", self.time_step),
            ("light_mass", self.light_mass),
            ("heavy_mass", self.heavy_mass),
            ("string_length", self.string_length),
            ("drift_tolerance", self.drift_tolerance),
        ];
        for (name, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::non_positive(name, value));
            }
        }

        let non_negative = [
            ("friction_coefficient", self.friction_coefficient),
            ("drag_coefficient", self.drag_coefficient),
            ("axle_radius", self.axle_radius),
        ];
        for (name, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::negative(name, value));
            }
        }

        let r0 = self.initial_radius();
        if r0 <= 0.0 {
            return Err(ConfigError::DegenerateGeometry { r0 });
        }

        Ok(())
    }

    /// Light-side string length at release.
    pub fn initial_radius(&self) -> f64 {
        self.string_length - self.y2_0 - self.axle_radius * (FRAC_PI_2 + self.theta0)
    }

    /// State at release. The radial rate starts at rest.
    pub fn initial_state(&self) -> StateVector {
        StateVector {
            theta: self.theta0,
            theta_dot: self.theta_dot0,
            r: self.initial_radius(),
            r_dot: 0.0,
            y2_dot: self.y2_dot0,
        }
    }

    /// Weight of the hanging mass, `M * g`.
    pub fn heavy_weight(&self) -> f64 {
        self.heavy_mass * self.gravity
    }

    /// Simulated time covered by `step_count` steps.
    pub fn duration(&self) -> f64 {
        self.step_count as f64 * self.time_step
    }
}
