use std::hint::black_box;

use chrono::{NaiveDate, TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use solar_astronomy::{DayPrediction, compute_event};
use solar_types::{SolarEvent, Zenith};

fn compute_event_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap();

    let mut group = c.benchmark_group("compute_event");
    group.bench_function("sunrise_official", |b| {
        b.iter(|| {
            compute_event(
                SolarEvent::Sunrise,
                black_box(date),
                black_box(37.334606),
                black_box(-122.009102),
                Zenith::Official,
            )
        })
    });
    group.bench_function("sunset_astronomical", |b| {
        b.iter(|| {
            compute_event(
                SolarEvent::Sunset,
                black_box(date),
                black_box(51.5),
                black_box(-0.12),
                Zenith::Astronomical,
            )
        })
    });
    group.finish();
}

fn prediction_bench(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2024, 11, 3, 10, 0, 0).unwrap();

    c.bench_function("day_prediction_create", |b| {
        b.iter(|| {
            DayPrediction::create(
                black_box(now),
                black_box(37.334606),
                black_box(-122.009102),
                Zenith::Official,
            )
        })
    });
}

criterion_group!(benches, compute_event_bench, prediction_bench);
criterion_main!(benches);
