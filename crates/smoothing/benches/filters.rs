//! Filter Benchmarks
//!
//! Run with: `cargo bench -p smoothing`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use smoothing::{MovingAverage, TrimmedMeanFilter};

/// Deterministic jittery signal around 2150 centi-degrees
fn jitter(i: u32) -> i32 {
    2150 + ((i.wrapping_mul(2_654_435_761) >> 24) as i32 % 41) - 20
}

fn bench_trimmed_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("trimmed_mean");

    group.bench_function("push_13", |b| {
        let mut filter = TrimmedMeanFilter::<13>::new(0.85).unwrap();
        filter.seed(2150);
        let mut i = 0u32;
        b.iter(|| {
            i = i.wrapping_add(1);
            black_box(filter.push(black_box(jitter(i))))
        })
    });

    group.bench_function("push_31", |b| {
        let mut filter = TrimmedMeanFilter::<31>::new(0.85).unwrap();
        filter.seed(2150);
        let mut i = 0u32;
        b.iter(|| {
            i = i.wrapping_add(1);
            black_box(filter.push(black_box(jitter(i))))
        })
    });

    group.finish();
}

fn bench_moving_average(c: &mut Criterion) {
    c.bench_function("moving_average_push_10", |b| {
        let mut avg = MovingAverage::<10>::new().unwrap();
        avg.seed(2150);
        let mut i = 0u32;
        b.iter(|| {
            i = i.wrapping_add(1);
            black_box(avg.push(black_box(jitter(i))))
        })
    });
}

criterion_group!(benches, bench_trimmed_mean, bench_moving_average);
criterion_main!(benches);
