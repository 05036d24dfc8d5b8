use looping_pendulum::*;

#[test]
fn nominal_run_keeps_string_length() {
    let config = PhysicalConfig::default();
    let trajectory = run(&config).expect("nominal config is valid");

    assert!(trajectory.is_complete());
    assert_eq!(trajectory.len(), config.step_count);

    for record in trajectory.records() {
        let drift = (record.length_check - config.string_length).abs();
        assert!(
            drift < 1e-3,
            "length drifted by {} at step {}",
            drift,
            record.step
        );
    }
    assert_eq!(trajectory.drift().exceedances, 0);
    assert!(trajectory.drift().max_abs < 1e-3);
}

#[test]
fn records_are_indexed_by_step_time() {
    let config = PhysicalConfig {
        step_count: 1_000,
        ..PhysicalConfig::default()
    };
    let trajectory = run(&config).unwrap();
    for (i, record) in trajectory.records().iter().enumerate() {
        assert_eq!(record.step, i);
        assert_eq!(record.t, i as f64 * config.time_step);
    }
}

#[test]
fn identical_configs_give_identical_trajectories() {
    let config = PhysicalConfig {
        step_count: 100_000,
        ..PhysicalConfig::default()
    };
    let a = run(&config).unwrap();
    let b = run(&config).unwrap();

    assert_eq!(a.len(), b.len());
    for (ra, rb) in a.records().iter().zip(b.records()) {
        assert_eq!(ra.theta.to_bits(), rb.theta.to_bits());
        assert_eq!(ra.x.to_bits(), rb.x.to_bits());
        assert_eq!(ra.y.to_bits(), rb.y.to_bits());
        assert_eq!(ra.y2_dot.to_bits(), rb.y2_dot.to_bits());
        assert_eq!(ra.length_check.to_bits(), rb.length_check.to_bits());
        assert_eq!(ra.mode, rb.mode);
    }
}

#[test]
fn drag_coefficient_has_no_effect() {
    let config = PhysicalConfig {
        step_count: 20_000,
        drag_coefficient: 0.0,
        ..PhysicalConfig::default()
    };
    let draggy = PhysicalConfig {
        drag_coefficient: 5.0,
        ..config.clone()
    };
    assert_eq!(
        run(&config).unwrap().records(),
        run(&draggy).unwrap().records()
    );
}

#[test]
fn batch_runs_match_standalone_runs() {
    let base = PhysicalConfig {
        step_count: 10_000,
        ..PhysicalConfig::default()
    };
    let configs = friction_sweep(&base, &[0.0, 0.03, 0.3]);
    let batch = run_many(&configs);

    assert_eq!(batch.len(), configs.len());
    for (config, result) in configs.iter().zip(batch) {
        let standalone = run(config).unwrap();
        assert_eq!(result.unwrap(), standalone);
    }
}
