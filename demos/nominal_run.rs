use looping_pendulum::*;

fn main() {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => PhysicalConfig::from_yaml_file(&path).expect("failed to load configuration"),
        None => PhysicalConfig::default(),
    };

    let trajectory = run(&config).expect("invalid configuration");
    let summary = trajectory.summary();

    println!("Steps simulated: {} ({:?})", summary.steps, summary.termination);
    match summary.stop_time {
        Some(t) => println!("Heavy mass stopped at t = {t:.5} s"),
        None => println!("Heavy mass never stopped"),
    }
    println!(
        "Decoupled steps: {}, slips: {}",
        summary.decoupled_steps, summary.slips
    );
    println!("Max string length drift: {:.3e} m", summary.max_length_drift);

    if let Some(last) = trajectory.last() {
        println!(
            "Final light mass position: ({:.4}, {:.4}) at theta = {:.3} rad",
            last.x, last.y, last.theta
        );
    }
}
