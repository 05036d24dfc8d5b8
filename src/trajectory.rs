//! Per-step records accumulated by the driver and handed to consumers.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::{dynamics::integrator::Mode, error::NumericalFault};

/// One record per simulated step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryRecord {
    pub step: usize,
    /// `step * h`.
    pub t: f64,
    pub theta: f64,
    /// Light-mass position.
    pub x: f64,
    pub y: f64,
    pub y2_dot: f64,
    /// `y2 + R * (theta + pi/2) + r`; should stay close to the string length.
    pub length_check: f64,
    /// Mode whose step function produced this record.
    pub mode: Mode,
}

impl TrajectoryRecord {
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Termination {
    /// Still accumulating.
    #[default]
    Running,
    /// Every configured step was taken.
    Completed,
    /// Aborted; records stop at the step before the fault.
    Faulted(NumericalFault),
}

/// Invariant-drift diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DriftStats {
    pub max_abs: f64,
    /// Records whose length check was beyond tolerance.
    pub exceedances: usize,
}

/// Append-only sequence of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    records: Vec<TrajectoryRecord>,
    termination: Termination,
    drift: DriftStats,
    slips: usize,
}

impl Trajectory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            ..Self::default()
        }
    }

    pub(crate) fn push(&mut self, record: TrajectoryRecord, drift: f64, exceeded: bool) {
        self.drift.max_abs = self.drift.max_abs.max(drift.abs());
        if exceeded {
            self.drift.exceedances += 1;
        }
        self.records.push(record);
    }

    pub(crate) fn record_slip(&mut self) {
        self.slips += 1;
    }

    pub(crate) fn finish(&mut self, termination: Termination) {
        self.termination = termination;
    }

    pub fn records(&self) -> &[TrajectoryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&TrajectoryRecord> {
        self.records.last()
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn is_complete(&self) -> bool {
        self.termination == Termination::Completed
    }

    pub fn fault(&self) -> Option<NumericalFault> {
        match self.termination {
            Termination::Faulted(fault) => Some(fault),
            _ => None,
        }
    }

    pub fn drift(&self) -> DriftStats {
        self.drift
    }

    /// Decoupled steps in which friction failed to hold the heavy mass.
    pub fn slip_count(&self) -> usize {
        self.slips
    }

    /// `(t, theta)` pairs.
    pub fn theta_series(&self) -> Vec<(f64, f64)> {
        self.records.iter().map(|r| (r.t, r.theta)).collect()
    }

    /// Path traced by the light mass.
    pub fn light_mass_path(&self) -> Vec<DVec2> {
        self.records.iter().map(TrajectoryRecord::position).collect()
    }

    /// `(t, y2_dot)` pairs.
    pub fn y2_dot_series(&self) -> Vec<(f64, f64)> {
        self.records.iter().map(|r| (r.t, r.y2_dot)).collect()
    }

    /// `(t, length_check)` pairs.
    pub fn length_check_series(&self) -> Vec<(f64, f64)> {
        self.records.iter().map(|r| (r.t, r.length_check)).collect()
    }

    /// Time of the first record at which the heavy mass was not falling.
    pub fn stop_time(&self) -> Option<f64> {
        self.records.iter().find(|r| r.y2_dot >= 0.0).map(|r| r.t)
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            steps: self.records.len(),
            final_time: self.last().map_or(0.0, |r| r.t),
            stop_time: self.stop_time(),
            decoupled_steps: self
                .records
                .iter()
                .filter(|r| r.mode == Mode::Decoupled)
                .count(),
            slips: self.slips,
            max_length_drift: self.drift.max_abs,
            termination: self.termination,
        }
    }
}

/// Condensed report of a run for console output or logging.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub steps: usize,
    pub final_time: f64,
    pub stop_time: Option<f64>,
    pub decoupled_steps: usize,
    pub slips: usize,
    pub max_length_drift: f64,
    pub termination: Termination,
}
