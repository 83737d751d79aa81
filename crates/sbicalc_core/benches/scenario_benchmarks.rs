//! Criterion benchmarks for sbicalc_core
//!
//! Run with: cargo bench -p sbicalc_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sbicalc_core::persist::default_inputs;
use sbicalc_core::{Assumptions, Catalog, Field, MetricId, SweepRequest, evaluate, normalize, sweep};

fn bench_normalize(c: &mut Criterion) {
    let raw = default_inputs();

    c.bench_function("normalize_defaults", |b| b.iter(|| normalize(black_box(&raw))));
}

fn bench_evaluate(c: &mut Criterion) {
    let baseline = Assumptions::default();
    // A small launcher and short life push the production run past the exact-sum cutoff
    let large_run = baseline
        .with(Field::SalvoSize, 20.0)
        .with(Field::SbiLifeExpectancyYears, 1.0);

    c.bench_function("evaluate_default", |b| b.iter(|| evaluate(black_box(&baseline))));
    c.bench_function("evaluate_large_production_run", |b| {
        b.iter(|| evaluate(black_box(&large_run)))
    });
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let catalog = Catalog::standard();
    let baseline = Assumptions::default();

    for end in [11, 101, 501] {
        let request = SweepRequest::new("salvoSize", MetricId::TotalSystemCostBillion, "1", end.to_string());
        group.bench_with_input(BenchmarkId::new("salvo_points", end), &request, |b, request| {
            b.iter(|| sweep(&catalog, Some(black_box(&baseline)), request))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_evaluate, bench_sweep);
criterion_main!(benches);
