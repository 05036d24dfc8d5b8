//! Batches of independent runs, e.g. sweeping the axle friction coefficient.
//!
//! Each run is still integrated strictly sequentially; only separate runs are
//! spread across threads when the `parallel` feature is enabled.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{config::PhysicalConfig, error::ConfigError, trajectory::Trajectory, world::run};

/// Runs every configuration, returning results in input order.
pub fn run_many(configs: &[PhysicalConfig]) -> Vec<Result<Trajectory, ConfigError>> {
    #[cfg(feature = "parallel")]
    {
        configs.par_iter().map(run).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        configs.iter().map(run).collect()
    }
}

/// Copies of `base` that differ only in their friction coefficient.
pub fn friction_sweep(base: &PhysicalConfig, coefficients: &[f64]) -> Vec<PhysicalConfig> {
    coefficients
        .iter()
        .map(|&friction_coefficient| PhysicalConfig {
            friction_coefficient,
            ..base.clone()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sweep_only_changes_friction() {
        let base = PhysicalConfig::default();
        let configs = friction_sweep(&base, &[0.0, 0.5]);
        assert_eq!(configs.len(), 2);
        assert_eq!(configs[1].friction_coefficient, 0.5);
        assert_eq!(configs[1].heavy_mass, base.heavy_mass);
    }

    #[test]
    fn invalid_members_fail_individually() {
        let good = PhysicalConfig {
            step_count: 10,
            ..PhysicalConfig::default()
        };
        let bad = PhysicalConfig {
            heavy_mass: -1.0,
            ..good.clone()
        };
        let results = run_many(&[good, bad]);
        assert!(results[0].is_ok());
        assert!(matches!(results[1], Err(ConfigError::NonPositive { .. })));
    }
}
