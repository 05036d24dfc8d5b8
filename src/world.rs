use log::{debug, error, info};

use crate::{
    config::{ModeTransition, PhysicalConfig},
    core::types::StateVector,
    dynamics::{
        friction::FrictionState,
        integrator::{Integrator, Mode},
    },
    error::{ConfigError, NumericalFault, SimulationError},
    trajectory::{Termination, Trajectory, TrajectoryRecord},
    utils::{
        logging::{warn_if_length_drift, ScopedTimer},
        math::{light_mass_position, string_length},
    },
};

/// Records preallocated up front; longer runs grow the buffer as they go.
const MAX_PREALLOCATED_RECORDS: usize = 1 << 20;

/// Driver owning the evolving state, the current mode, the heavy-mass
/// displacement accumulator, and the trajectory.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: PhysicalConfig,
    integrator: Integrator,
    state: StateVector,
    mode: Mode,
    y2: f64,
    steps_taken: usize,
    trajectory: Trajectory,
}

impl Simulation {
    /// Validates `config` and places the system at its release state.
    pub fn new(config: PhysicalConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let state = config.initial_state();
        let check = string_length(config.y2_0, state.theta, state.r, config.axle_radius);
        info!(
            "Initial state: theta = {}, theta_dot = {}, r = {}, r_dot = {}, y2_dot = {}",
            state.theta, state.theta_dot, state.r, state.r_dot, state.y2_dot
        );
        info!(
            "Expected length: {}, calculated length: {}",
            config.string_length, check
        );
        if config.drag_coefficient != 0.0 {
            debug!(
                "drag coefficient {} is accepted but has no effect",
                config.drag_coefficient
            );
        }

        Ok(Self {
            integrator: Integrator::new(&config),
            state,
            mode: Mode::Coupled,
            y2: config.y2_0,
            steps_taken: 0,
            trajectory: Trajectory::with_capacity(config.step_count.min(MAX_PREALLOCATED_RECORDS)),
            config,
        })
    }

    pub fn config(&self) -> &PhysicalConfig {
        &self.config
    }

    /// State after the most recent step (the release state before any).
    pub fn state(&self) -> &StateVector {
        &self.state
    }

    /// Mode the next step will run in.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Heavy-side string coordinate accumulated so far.
    pub fn y2(&self) -> f64 {
        self.y2
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn is_finished(&self) -> bool {
        self.trajectory.termination() != Termination::Running
    }

    /// Takes one step and appends its record.
    pub fn step(&mut self) -> Result<TrajectoryRecord, SimulationError> {
        match self.trajectory.termination() {
            Termination::Faulted(fault) => return Err(fault.into()),
            Termination::Completed => {
                return Err(SimulationError::Finished {
                    steps: self.steps_taken,
                })
            }
            Termination::Running => {}
        }
        if self.steps_taken >= self.config.step_count {
            self.trajectory.finish(Termination::Completed);
            return Err(SimulationError::Finished {
                steps: self.steps_taken,
            });
        }

        let step = self.steps_taken;
        let h = self.config.time_step;
        let mode = self.mode;

        let output = match self.integrator.advance(mode, &self.state) {
            Ok(output) => output,
            Err(kind) => {
                let fault = NumericalFault { step, kind };
                error!("Aborting run: {fault}");
                self.trajectory.finish(Termination::Faulted(fault));
                return Err(fault.into());
            }
        };

        if let Some(FrictionState::Slipping { acceleration }) = output.friction {
            self.trajectory.record_slip();
            debug!(
                "heavy mass slips at step {step} (acceleration {acceleration:.4} m/s², max tension {:.4} N)",
                output.tensions.heavy_side
            );
        }

        let next = output.state;
        self.mode = self.next_mode(&next);
        if self.mode != mode {
            info!(
                "Mode {:?} -> {:?} at t = {:.5} s (step {step})",
                mode,
                self.mode,
                step as f64 * h
            );
        }

        self.y2 += next.y2_dot * h;
        let position = light_mass_position(next.theta, next.r, self.config.axle_radius);
        let length_check = string_length(self.y2, next.theta, next.r, self.config.axle_radius);
        let drift = length_check - self.config.string_length;
        let exceeded = warn_if_length_drift(
            step,
            drift,
            self.config.drift_tolerance,
            self.trajectory.drift().exceedances == 0,
        );

        let record = TrajectoryRecord {
            step,
            t: step as f64 * h,
            theta: next.theta,
            x: position.x,
            y: position.y,
            y2_dot: next.y2_dot,
            length_check,
            mode,
        };
        self.trajectory.push(record, drift, exceeded);
        self.state = next;
        self.steps_taken += 1;

        if self.steps_taken == self.config.step_count {
            self.trajectory.finish(Termination::Completed);
        }
        Ok(record)
    }

    /// Steps until the configured count is reached or a fault aborts the run.
    pub fn run_to_end(mut self) -> Trajectory {
        {
            let remaining = self.config.step_count.saturating_sub(self.steps_taken);
            let _timer = ScopedTimer::new("simulation::run", remaining);
            while !self.is_finished() {
                if self.step().is_err() {
                    break;
                }
            }
        }
        if let Some(fault) = self.trajectory.fault() {
            info!(
                "Run incomplete: {} of {} steps before {fault}",
                self.steps_taken, self.config.step_count
            );
        } else {
            info!("Done! Timestep: {}", self.config.time_step);
        }
        self.trajectory
    }

    pub fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }

    fn next_mode(&self, next: &StateVector) -> Mode {
        if next.heavy_mass_stalled() {
            return Mode::Decoupled;
        }
        match self.config.transition {
            ModeTransition::OneWay => self.mode,
            ModeTransition::TwoWay => Mode::Coupled,
        }
    }
}

/// Runs `config` from release to the last configured step.
pub fn run(config: &PhysicalConfig) -> Result<Trajectory, ConfigError> {
    Ok(Simulation::new(config.clone())?.run_to_end())
}
