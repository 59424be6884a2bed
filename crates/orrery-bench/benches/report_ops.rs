//! Criterion micro-benchmarks for snapshot capture and report rendering.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use orrery_bench::synthetic_scene;
use orrery_stats::{format_duration, SnapshotCache, StatsReporter};

/// Benchmark: Capture a 1K-body scene.
fn bench_capture_1k(c: &mut Criterion) {
    let scene = synthetic_scene(1_000, 42);

    c.bench_function("capture_1k", |b| {
        b.iter(|| {
            let mut cache = SnapshotCache::new();
            cache.capture(black_box(&scene));
            black_box(cache);
        });
    });
}

/// Benchmark: Render a report of 100 snapshots x 100 bodies.
fn bench_report_100x100(c: &mut Criterion) {
    let mut scene = synthetic_scene(100, 7);
    let mut cache = SnapshotCache::new();
    for step in 0..100u32 {
        if let Some(star) = scene.iter_mut().next() {
            star.time = Some(f64::from(step) * 3_600.0);
        }
        cache.capture(&scene);
    }
    let reporter = StatsReporter::default();

    c.bench_function("report_100x100", |b| {
        b.iter(|| {
            let mut out = Vec::with_capacity(512 * 1024);
            reporter.write_report(&cache, &mut out).unwrap();
            black_box(out);
        });
    });
}

/// Benchmark: Format a multi-unit duration.
fn bench_format_duration(c: &mut Criterion) {
    c.bench_function("format_duration", |b| {
        b.iter(|| black_box(format_duration(black_box(98_765_432))));
    });
}

criterion_group!(
    benches,
    bench_capture_1k,
    bench_report_100x100,
    bench_format_duration
);
criterion_main!(benches);
