//! Benchmark for end-to-end shape classification.

use chartshape::{classify, ChartLayout, PlanetPosition};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn chart(count: usize, spread: f64) -> Vec<PlanetPosition> {
    (0..count)
        .map(|i| {
            // Deterministic jitter
            let jitter = ((i * 7919) % 13) as f64;
            PlanetPosition::new(format!("body{i}"), i as f64 * spread / count as f64 + jitter)
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for count in [5usize, 10, 20, 50] {
        for (label, spread) in [("bowl", 170.0), ("scattered", 360.0)] {
            let positions = chart(count, spread);
            group.bench_with_input(
                BenchmarkId::new(label, count),
                &positions,
                |b, positions| b.iter(|| classify(black_box(positions))),
            );
        }
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let positions = chart(20, 360.0);
    c.bench_function("layout_from_positions_20", |b| {
        b.iter(|| ChartLayout::from_positions(black_box(&positions)))
    });
}

criterion_group!(benches, bench_classify, bench_layout);
criterion_main!(benches);
