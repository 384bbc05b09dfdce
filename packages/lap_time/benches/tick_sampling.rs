//! Benchmark comparing `lap_time` counter sampling with `std::time::Instant::now()`.

#![expect(missing_docs, reason = "benchmarks do not require API documentation")]

use std::hint::black_box;
use std::time::Instant;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use lap_time::{Clock, Stopwatch};

/// Benchmark group comparing counter sampling and a full measurement cycle.
fn tick_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_sampling");

    let clock = Clock::new();

    // Benchmark std::time::Instant::now()
    group.bench_with_input(BenchmarkId::new("std_instant", "now"), &(), |b, ()| {
        b.iter(|| {
            let instant = black_box(Instant::now());
            black_box(instant);
        });
    });

    // Benchmark lap_time::Clock::now()
    group.bench_with_input(BenchmarkId::new("lap_time_clock", "now"), &(), |b, ()| {
        b.iter(|| {
            let ticks = black_box(clock.now());
            black_box(ticks);
        });
    });

    // Benchmark a full update cycle: sample, convert to seconds, re-arm.
    group.bench_with_input(BenchmarkId::new("lap_time_stopwatch", "update"), &(), |b, ()| {
        let mut watch = Stopwatch::<f64>::new();
        watch.reset(&clock);

        b.iter(|| {
            watch.update(&clock);
            black_box(watch.get());
        });
    });

    group.finish();
}

criterion_group!(benches, tick_sampling);
criterion_main!(benches);
