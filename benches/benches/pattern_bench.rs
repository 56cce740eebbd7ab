//! # Pattern Benchmarks
//!
//! Measures pattern construction, index access and rotation. Every
//! operation is a handful of word operations on a `u64`.
//!
//! Run: `cargo bench --bench pattern_bench`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lights::Pattern;

/// Benchmark Pattern creation
fn bench_pattern_creation(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_creation");

    group.bench_function("all_off", |b| {
        b.iter(|| black_box(Pattern::new(black_box(24), false)))
    });

    group.bench_function("all_on", |b| {
        b.iter(|| black_box(Pattern::new(black_box(24), true)))
    });

    group.bench_function("from_raw", |b| {
        b.iter(|| black_box(Pattern::from_raw(black_box(24), black_box(0xA5A5A5))))
    });

    group.finish();
}

/// Benchmark index access
fn bench_pattern_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_access");
    let mut pattern = Pattern::from_raw(24, 0xA5A5A5).unwrap();

    group.bench_function("get", |b| {
        b.iter(|| black_box(pattern.get(black_box(13))))
    });

    group.bench_function("set", |b| {
        b.iter(|| pattern.set(black_box(13), black_box(true)))
    });

    group.finish();
}

/// Benchmark rotations across widths
fn bench_pattern_rotation(c: &mut Criterion) {
    let mut group = c.benchmark_group("pattern_rotation");

    for width in [8_usize, 24, 64] {
        let mut pattern = Pattern::from_raw(width, 0x0123_4567_89AB_CDEF).unwrap();

        group.bench_with_input(BenchmarkId::new("rotate_left", width), &width, |b, _| {
            b.iter(|| pattern.rotate_left(black_box(3)))
        });

        group.bench_with_input(BenchmarkId::new("rotate_right", width), &width, |b, _| {
            b.iter(|| pattern.rotate_right(black_box(3)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_pattern_creation,
    bench_pattern_access,
    bench_pattern_rotation,
);

criterion_main!(benches);
