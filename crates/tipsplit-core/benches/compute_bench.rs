//! Benchmarks for bill calculation and display formatting.
//!
//! Run with: cargo bench -p tipsplit-core --bench compute_bench

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tipsplit_core::{CalculationResult, ResultDisplay, Tip, compute, format_currency, parse_bill};

// =============================================================================
// compute
// =============================================================================

fn bench_compute(c: &mut Criterion) {
    let mut group = c.benchmark_group("calc/compute");

    group.bench_function("no_tip", |b| {
        b.iter(|| black_box(compute(black_box(100.0), Tip::None, black_box(2))))
    });

    group.bench_function("percentage", |b| {
        b.iter(|| black_box(compute(black_box(87.35), Tip::FifteenPercent, black_box(3))))
    });

    group.bench_function("custom", |b| {
        b.iter(|| black_box(compute(black_box(300.0), Tip::custom(200.0), black_box(2))))
    });

    group.finish();
}

// =============================================================================
// Input and display
// =============================================================================

fn bench_edges(c: &mut Criterion) {
    let mut group = c.benchmark_group("calc/edges");

    group.bench_function("parse_bill", |b| {
        b.iter(|| black_box(parse_bill(black_box("$1,250.50"))))
    });

    group.bench_function("format_currency", |b| {
        b.iter(|| black_box(format_currency(black_box(1_234_567.5))))
    });

    let result = CalculationResult {
        total_bill: 120.0,
        total_tip: 20.0,
        amount_per_person: 40.0,
    };
    group.bench_function("result_display", |b| {
        b.iter(|| black_box(ResultDisplay::from(black_box(&result))))
    });

    group.finish();
}

criterion_group!(benches, bench_compute, bench_edges);
criterion_main!(benches);
