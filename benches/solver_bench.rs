//! Benchmarks for the beam solver

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use beam_deflection::prelude::*;

fn create_cantilever() -> Beam {
    let mut beam = Beam::new(10.0, 200e9, 8.33e-6)
        .unwrap()
        .with_anchors(Anchor::Fixed, Anchor::Free);
    beam.add_point_load(10.0, 1000.0).unwrap();
    beam.set_continuous_load(ContinuousLoad::uniform(50.0));
    beam
}

fn create_continuous_beam(spans: usize) -> Beam {
    let span = 6.0;
    let mut beam = Beam::new(span * spans as f64, 200e9, 8.33e-6).unwrap();
    for i in 0..=spans {
        beam.add_pin(i as f64 * span).unwrap();
    }
    for i in 0..spans {
        beam.add_point_load((i as f64 + 0.5) * span, 5000.0).unwrap();
    }
    beam.set_continuous_load(ContinuousLoad::polynomial(vec![100.0, 5.0]));
    beam
}

fn benchmark_cantilever(c: &mut Criterion) {
    let beam = create_cantilever();
    let options = AnalysisOptions::with_grid_points(100);
    c.bench_function("cantilever_100pts", |b| {
        b.iter(|| black_box(beam.solve(&options).unwrap()))
    });
}

fn benchmark_fine_grid(c: &mut Criterion) {
    let beam = create_cantilever();
    let options = AnalysisOptions::with_grid_points(10_000);
    c.bench_function("cantilever_10000pts", |b| {
        b.iter(|| black_box(beam.solve(&options).unwrap()))
    });
}

fn benchmark_continuous(c: &mut Criterion) {
    let beam = create_continuous_beam(20);
    let options = AnalysisOptions::default();
    c.bench_function("continuous_20span", |b| {
        b.iter(|| black_box(beam.solve(&options).unwrap()))
    });
}

criterion_group!(
    benches,
    benchmark_cantilever,
    benchmark_fine_grid,
    benchmark_continuous,
);

criterion_main!(benches);
