use chrono::{Days, NaiveDate};
use criterion::{Criterion, criterion_group, criterion_main};
use listing_chart::core::{DayPoint, latest_day, points_on_or_after, trailing_cutoff};
use std::hint::black_box;

fn daily_history_10k() -> Vec<DayPoint> {
    let base = NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date");
    (0..10_000_u64)
        .map(|i| {
            let day = base
                .checked_add_days(Days::new(i % 3_650))
                .expect("date in range");
            DayPoint::new(day, (i as f64).sin() * 100.0)
        })
        .collect()
}

fn bench_window_filter_10k(c: &mut Criterion) {
    let points = daily_history_10k();
    let latest = latest_day(&points).expect("non-empty history");

    c.bench_function("window_filter_10k", |b| {
        b.iter(|| {
            let cutoff = trailing_cutoff(black_box(latest), black_box(90));
            let _ = points_on_or_after(black_box(&points), cutoff);
        })
    });
}

fn bench_latest_day_10k(c: &mut Criterion) {
    let points = daily_history_10k();

    c.bench_function("latest_day_10k", |b| {
        b.iter(|| {
            let _ = latest_day(black_box(&points));
        })
    });
}

criterion_group!(benches, bench_window_filter_10k, bench_latest_day_10k);
criterion_main!(benches);
