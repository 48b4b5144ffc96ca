//! Criterion benchmarks for recur_models generators.
//!
//! Measures window generation for recurring time intervals and occurrence
//! scanning for dense, sparse and impossible schedules.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use recur_core::math::interval::Interval;
use recur_core::types::{Instant, Unit};
use recur_models::recurrence::TimeInterval;
use recur_models::schedules::Schedule;

/// Benchmark taking windows from recurring time intervals.
fn bench_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_interval_windows");
    let start = Instant::from_ymd_hms(2024, 1, 15, 10, 30, 0).unwrap();

    let cases = [
        ("minutes_of_hour", Interval::new(15, 45), Unit::Minute, Unit::Hour),
        ("days_of_month", Interval::new(29, 31), Unit::Day, Unit::Month),
        ("weeks_of_year", Interval::new(10, 12), Unit::Week, Unit::Year),
    ];

    for (name, interval, unit, recurrence) in cases {
        let ti = TimeInterval::new(interval, unit, Some(recurrence)).unwrap();
        for count in [1usize, 100] {
            group.bench_with_input(BenchmarkId::new(name, count), &count, |b, &count| {
                b.iter(|| ti.forward(black_box(start)).take(count).count());
            });
        }
    }

    group.finish();
}

/// Benchmark schedule scans.
fn bench_schedules(c: &mut Criterion) {
    let mut group = c.benchmark_group("schedule_forward");
    let start = Instant::from_ymd_hms(2024, 1, 15, 10, 30, 0).unwrap();

    let dense = Schedule::default();
    let sparse = Schedule::builder()
        .months([2])
        .days([29])
        .weekdays([])
        .hours([12])
        .minutes([0])
        .seconds([0])
        .build();
    let impossible = Schedule::builder().months([2]).days([30]).weekdays([]).build();

    group.bench_function("dense_take_1000", |b| {
        b.iter(|| dense.forward(black_box(start)).take(1000).count());
    });
    group.bench_function("leap_day_take_10", |b| {
        b.iter(|| sparse.forward(black_box(start)).take(10).count());
    });

    group.sample_size(10);
    group.bench_function("impossible_exhaustion", |b| {
        b.iter(|| impossible.forward(black_box(start)).next());
    });

    group.finish();
}

criterion_group!(benches, bench_windows, bench_schedules);
criterion_main!(benches);
