use std::f64::consts::PI;

use looping_pendulum::*;

/// `theta_dot * h == pi/2` drives `cos(theta_dot * h)` to zero.
fn singular_config() -> PhysicalConfig {
    let time_step = 0.01;
    PhysicalConfig {
        time_step,
        theta_dot0: PI / (2.0 * time_step),
        step_count: 10,
        ..PhysicalConfig::default()
    }
}

#[test]
fn vanishing_cosine_is_a_numerical_fault() {
    let config = singular_config();
    let integrator = Integrator::new(&config);
    let state = config.initial_state();

    assert_eq!(
        integrator.coupled_step(&state),
        Err(FaultKind::SingularDenominator)
    );
    assert_eq!(
        integrator.decoupled_step(&state),
        Err(FaultKind::SingularDenominator)
    );
}

#[test]
fn faulted_run_is_tagged_incomplete() {
    let trajectory = run(&singular_config()).unwrap();

    assert!(!trajectory.is_complete());
    assert!(trajectory.is_empty());
    assert_eq!(
        trajectory.fault(),
        Some(NumericalFault {
            step: 0,
            kind: FaultKind::SingularDenominator,
        })
    );
    assert_eq!(trajectory.summary().termination, trajectory.termination());
}

#[test]
fn driver_refuses_to_continue_after_fault() {
    let mut sim = Simulation::new(singular_config()).unwrap();
    assert!(matches!(sim.step(), Err(SimulationError::Numerical(_))));
    assert!(sim.is_finished());
    assert!(matches!(sim.step(), Err(SimulationError::Numerical(_))));
    assert_eq!(sim.steps_taken(), 0);
}

#[test]
fn non_finite_input_state_is_rejected() {
    let config = PhysicalConfig::default();
    let integrator = Integrator::new(&config);
    let state = StateVector {
        theta_dot: f64::INFINITY,
        ..config.initial_state()
    };
    assert_eq!(
        integrator.coupled_step(&state),
        Err(FaultKind::NonFinite(Quantity::ThetaDot))
    );
    assert_eq!(
        integrator.decoupled_step(&state),
        Err(FaultKind::NonFinite(Quantity::ThetaDot))
    );
}

/// Strong friction locks the heavy mass early, after which the light mass
/// winds the string onto a wide axle until its radius would go negative.
fn winding_config() -> PhysicalConfig {
    PhysicalConfig {
        friction_coefficient: 10.0,
        axle_radius: 0.05,
        step_count: 150_000,
        ..PhysicalConfig::default()
    }
}

#[test]
fn string_winding_onto_axle_aborts_the_run() {
    let mut sim = Simulation::new(winding_config()).unwrap();
    let fault = loop {
        match sim.step() {
            Ok(_) => {}
            Err(SimulationError::Numerical(fault)) => break fault,
            Err(other) => panic!("run ended without a fault: {other}"),
        }
    };

    assert_eq!(fault.kind, FaultKind::SingularDenominator);
    assert!(fault.step > 0);
    assert!(sim.state().r > 0.0);
    assert_eq!(sim.mode(), Mode::Decoupled);
    assert_eq!(
        sim.trajectory().termination(),
        Termination::Faulted(fault)
    );
}

#[test]
fn mid_run_fault_keeps_records_gathered_so_far() {
    let config = winding_config();
    let trajectory = run(&config).unwrap();

    let fault = trajectory.fault().expect("winding run faults");
    assert!(!trajectory.is_complete());
    assert!(fault.step > 0 && fault.step < config.step_count);
    assert_eq!(trajectory.len(), fault.step);

    let mut sim = Simulation::new(config).unwrap();
    for expected in trajectory.records() {
        let record = sim.step().unwrap();
        assert_eq!(&record, expected);
    }
    assert!(matches!(sim.step(), Err(SimulationError::Numerical(f)) if f == fault));
}
