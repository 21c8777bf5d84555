//! Benchmark for effectful composition: log, optional, multiplicity and fallible.
//!
//! Measures both the success path and the short-circuit path of each effect.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use funkit::effect::{
    Logged, compose_fallible, compose_logged, compose_multi, compose_optional, logged,
};
use std::hint::black_box;

// =============================================================================
// Log Benchmarks
// =============================================================================

fn benchmark_logged(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("compose_logged");

    fn step(value: u64) -> Logged<u64> {
        logged(value + 1, "step")
    }

    let two_steps = compose_logged(step, step);
    group.bench_function("depth_2", |bencher| {
        bencher.iter(|| black_box(two_steps(black_box(1))));
    });

    let four_steps = compose_logged(compose_logged(compose_logged(step, step), step), step);
    group.bench_function("depth_4", |bencher| {
        bencher.iter(|| black_box(four_steps(black_box(1))));
    });

    group.finish();
}

// =============================================================================
// Optional / Fallible Benchmarks
// =============================================================================

fn benchmark_short_circuit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("short_circuit");

    let checked_halve = |value: u64| (value % 2 == 0).then_some(value / 2);
    let optional = compose_optional(
        compose_optional(checked_halve, checked_halve),
        checked_halve,
    );

    // 8 passes every stage, 3 stops at the first
    for input in [8_u64, 3] {
        group.bench_with_input(
            BenchmarkId::new("optional", input),
            &input,
            |bencher, &input| {
                bencher.iter(|| black_box(optional(black_box(input))));
            },
        );
    }

    let halve_or_reject = |value: u64| {
        if value % 2 == 0 {
            Ok(value / 2)
        } else {
            Err(value)
        }
    };
    let fallible = compose_fallible(
        compose_fallible(halve_or_reject, halve_or_reject),
        halve_or_reject,
    );

    for input in [8_u64, 3] {
        group.bench_with_input(
            BenchmarkId::new("fallible", input),
            &input,
            |bencher, &input| {
                bencher.iter(|| black_box(fallible(black_box(input))));
            },
        );
    }

    group.finish();
}

// =============================================================================
// Multiplicity Benchmarks
// =============================================================================

fn benchmark_multi(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("compose_multi");

    for fan_out in [2_u32, 16, 128] {
        let expand = move |value: u32| {
            (0..fan_out)
                .map(|offset| value + offset)
                .collect::<Vec<_>>()
        };
        let composed = compose_multi(expand, expand);

        group.bench_with_input(
            BenchmarkId::new("fan_out", fan_out),
            &fan_out,
            |bencher, _| {
                bencher.iter(|| black_box(composed(black_box(1))));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_logged,
    benchmark_short_circuit,
    benchmark_multi
);

criterion_main!(benches);
