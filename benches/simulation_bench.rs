use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use looping_pendulum::*;
use std::hint::black_box;

fn config(step_count: usize) -> PhysicalConfig {
    PhysicalConfig {
        step_count,
        ..PhysicalConfig::default()
    }
}

fn bench_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("run");
    for &steps in &[10_000usize, 100_000] {
        group.bench_with_input(BenchmarkId::new("nominal", steps), &steps, |b, &steps| {
            let config = config(steps);
            b.iter(|| black_box(run(&config).unwrap()))
        });
    }
    group.finish();
}

fn bench_step_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance");
    let config = PhysicalConfig::default();
    let integrator = Integrator::new(&config);
    let state = config.initial_state();

    group.bench_function("coupled", |b| {
        b.iter(|| black_box(integrator.advance(Mode::Coupled, black_box(&state))))
    });
    group.bench_function("decoupled", |b| {
        b.iter(|| black_box(integrator.advance(Mode::Decoupled, black_box(&state))))
    });
    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("friction_sweep");
    let coefficients: Vec<f64> = (0..8).map(|i| 0.01 * i as f64).collect();
    let configs = friction_sweep(&config(20_000), &coefficients);
    group.bench_function("run_many", |b| b.iter(|| black_box(run_many(&configs))));
    group.finish();
}

criterion_group!(benches, bench_run, bench_step_variants, bench_sweep);
criterion_main!(benches);
