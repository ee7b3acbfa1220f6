//! Criterion benchmarks for coefficient design and response evaluation
//!
//! Run with: cargo bench -p filtra-core
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use filtra_core::{Coefficients, FilterParams, FilterType, FrequencyResponse, PlotScale};

const SAMPLE_RATE: f64 = 44100.0;

fn bench_design(c: &mut Criterion) {
    let mut group = c.benchmark_group("design");

    let params = FilterParams {
        cutoff_hz: 1000.0,
        sample_rate_hz: SAMPLE_RATE,
        q: 0.707,
        gain_db: 6.0,
    };

    for filter in FilterType::ALL {
        group.bench_with_input(
            BenchmarkId::new("coefficients", filter.short_name()),
            &filter,
            |b, &filter| {
                b.iter(|| black_box(Coefficients::design(black_box(filter), black_box(&params))));
            },
        );
    }

    group.finish();
}

fn bench_response(c: &mut Criterion) {
    let mut group = c.benchmark_group("response");

    let params = FilterParams {
        cutoff_hz: 1000.0,
        sample_rate_hz: SAMPLE_RATE,
        q: 0.707,
        gain_db: 0.0,
    };
    let coeffs = Coefficients::design(FilterType::LowPass, &params);

    for (name, scale) in [
        ("linear_512", PlotScale::Linear),
        ("log_512", PlotScale::Logarithmic),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(FrequencyResponse::evaluate(
                    black_box(&coeffs),
                    scale,
                    SAMPLE_RATE,
                    512,
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_design, bench_response);
criterion_main!(benches);
