//! Estimation benchmarks for both request modes.
//!
//! Run with: `cargo bench --package nthbuyer-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use nthbuyer_bench::{absolute_request, purchase_rate_request, wall_clock_request};
use nthbuyer_lib::{Request, estimate};
use std::hint::black_box;

const HISTORY_SIZES: [usize; 3] = [3, 50, 1_000];

fn purchase_rate_benchmark(c: &mut Criterion) {
    let request = Request::from_value(purchase_rate_request()).unwrap();
    let text = purchase_rate_request().to_string();

    let mut group = c.benchmark_group("purchase_rate");
    group.bench_function("estimate", |b| b.iter(|| estimate(black_box(&request))));
    group.bench_function("estimate_json", |b| {
        b.iter(|| nthbuyer_lib::estimate_json(black_box(&text)));
    });
    group.finish();
}

fn cadence_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("winner_timestamps");

    for size in HISTORY_SIZES {
        group.throughput(Throughput::Elements(size as u64));

        let wall_clock = Request::from_value(wall_clock_request(size)).unwrap();
        group.bench_with_input(BenchmarkId::new("wall_clock", size), &wall_clock, |b, r| {
            b.iter(|| estimate(black_box(r)));
        });

        let absolute = Request::from_value(absolute_request(size)).unwrap();
        group.bench_with_input(BenchmarkId::new("absolute", size), &absolute, |b, r| {
            b.iter(|| estimate(black_box(r)));
        });
    }

    group.finish();
}

criterion_group!(benches, purchase_rate_benchmark, cadence_benchmark);
criterion_main!(benches);
