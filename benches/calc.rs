//! Benchmarks for the calculation core.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use castmix::types::{Colour, PigmentEntry, PigmentLibrary};
use castmix::{compute_mix, compute_weights, mix_colour, rebalance};

fn pigments(n: usize) -> Vec<PigmentEntry> {
    PigmentLibrary::all()
        .iter()
        .cycle()
        .take(n)
        .map(|p| PigmentEntry::from_library(p, 2.0 / n as f64))
        .collect()
}

// -- Mix benchmarks --

fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("mix");

    group.bench_function("compute_mix", |b| {
        b.iter(|| compute_mix(black_box(250.0), black_box(10.0), black_box("AC730")))
    });

    group.bench_function("compute_mix_unknown_product", |b| {
        b.iter(|| compute_mix(black_box(250.0), black_box(10.0), black_box("XX000")))
    });

    group.finish();
}

// -- Pigment benchmarks --

fn bench_pigments(c: &mut Criterion) {
    let mut group = c.benchmark_group("pigments");

    let small = pigments(3);
    let large = pigments(64);

    group.bench_function("rebalance_small", |b| {
        b.iter(|| rebalance(black_box(&small), 0, black_box(1.5), 2.0))
    });

    group.bench_function("rebalance_large", |b| {
        b.iter(|| rebalance(black_box(&large), 10, black_box(1.0), 2.0))
    });

    group.bench_function("weights_large", |b| {
        b.iter(|| compute_weights(black_box(&large), 125.0, 50.0))
    });

    group.bench_function("mix_colour_large", |b| {
        b.iter(|| mix_colour(black_box(&large), 2.0))
    });

    let custom: Vec<PigmentEntry> = (0..16u8)
        .map(|i| PigmentEntry::custom(Colour::rgb(i * 16, 255 - i * 16, i), 0.1))
        .collect();
    group.bench_function("mix_colour_custom", |b| {
        b.iter(|| mix_colour(black_box(&custom), 2.0))
    });

    group.finish();
}

criterion_group!(benches, bench_mix, bench_pigments);
criterion_main!(benches);
