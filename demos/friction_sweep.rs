use looping_pendulum::*;

fn main() {
    env_logger::init();

    let base = PhysicalConfig {
        step_count: 100_000,
        ..PhysicalConfig::default()
    };
    let coefficients = [0.0, 0.01, 0.03, 0.05, 0.1, 0.2];
    let configs = friction_sweep(&base, &coefficients);

    for (mu, result) in coefficients.iter().zip(run_many(&configs)) {
        match result {
            Ok(trajectory) => {
                let summary = trajectory.summary();
                let stop = summary
                    .stop_time
                    .map_or_else(|| "never".to_string(), |t| format!("{t:.5} s"));
                println!(
                    "mu = {mu:<5} stop: {stop:>10}  slips: {:>6}  drift: {:.2e}",
                    summary.slips, summary.max_length_drift
                );
            }
            Err(err) => println!("mu = {mu:<5} rejected: {err}"),
        }
    }
}
