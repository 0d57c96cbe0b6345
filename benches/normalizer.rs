//! Benchmarks for STL decomposition and the full normalization pipeline.

use birth_profile::core::BirthSeries;
use birth_profile::normalize::TrendNormalizer;
use birth_profile::seasonality::STL;
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn generate_births(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let trend = 300.0 + 0.02 * i as f64;
            let yearly = 25.0 * (2.0 * std::f64::consts::PI * i as f64 / 365.0).sin();
            let weekly = if i % 7 >= 5 { -40.0 } else { 0.0 };
            trend + yearly + weekly
        })
        .collect()
}

fn bench_stl(c: &mut Criterion) {
    let mut group = c.benchmark_group("stl_decompose");
    group.sample_size(10);

    for years in [3usize, 5, 10].iter() {
        let series = generate_births(years * 365);

        group.bench_with_input(BenchmarkId::new("robust", years), years, |b, _| {
            let stl = STL::default();
            b.iter(|| stl.decompose(black_box(&series)))
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("trend_normalizer");
    group.sample_size(10);

    let first = NaiveDate::from_ymd_opt(2010, 1, 1).unwrap();
    for years in [3usize, 5, 10].iter() {
        let days = years * 365 + years / 4;
        let counts = generate_births(days);
        let series = BirthSeries::from_pairs(
            counts
                .iter()
                .enumerate()
                .map(|(i, &c)| (first + Duration::days(i as i64), c)),
        )
        .unwrap();

        group.bench_with_input(BenchmarkId::new("normalize", years), years, |b, _| {
            let normalizer = TrendNormalizer::new();
            b.iter(|| normalizer.normalize(black_box(&series)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stl, bench_pipeline);
criterion_main!(benches);
