use log::{log_enabled, warn, Level};
use std::time::Instant;

/// Traces the wall-clock time and step throughput of a section of a run.
pub struct ScopedTimer<'a> {
    label: &'a str,
    steps: usize,
    start: Instant,
}

impl<'a> ScopedTimer<'a> {
    pub fn new(label: &'a str, steps: usize) -> Self {
        if log_enabled!(Level::Trace) {
            log::trace!("start {label} ({steps} steps)");
        }
        Self {
            label,
            steps,
            start: Instant::now(),
        }
    }
}

impl<'a> Drop for ScopedTimer<'a> {
    fn drop(&mut self) {
        if log_enabled!(Level::Trace) {
            let elapsed = self.start.elapsed();
            let rate = self.steps as f64 / elapsed.as_secs_f64().max(f64::EPSILON);
            log::trace!(
                "end {} ({} ms, {:.0} steps/s)",
                self.label,
                elapsed.as_millis(),
                rate
            );
        }
    }
}

/// Warns when the string-length check has drifted past `tolerance`.
/// Returns whether the drift was out of tolerance.
pub fn warn_if_length_drift(step: usize, drift: f64, tolerance: f64, first: bool) -> bool {
    let exceeded = drift.abs() > tolerance;
    if exceeded && first {
        warn!(
            "String length drifted by {:.3e} m at step {} (tolerance {:.1e} m)",
            drift, step, tolerance
        );
    }
    exceeded
}
