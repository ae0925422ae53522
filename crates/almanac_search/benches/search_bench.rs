use almanac_core::{Body, GeoCoordinate, position};
use almanac_search::{
    MoonPhaseCache, SearchConfig, body_day, moon_orientation, noon_phase, sun_day, year_events,
};
use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

const JD: f64 = 2_458_858.5;

fn brisbane() -> GeoCoordinate {
    GeoCoordinate::new(-27.467, 153.033).expect("valid location")
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 1, 10).expect("valid date")
}

fn position_bench(c: &mut Criterion) {
    let loc = brisbane();
    let mut group = c.benchmark_group("position");
    for body in [Body::Moon, Body::Saturn] {
        group.bench_function(body.name(), |b| {
            b.iter(|| {
                position(black_box(body), black_box(&loc), black_box(JD)).expect("position")
            })
        });
    }
    group.finish();
}

fn day_search_bench(c: &mut Criterion) {
    let loc = brisbane();
    let tz = chrono_tz::Australia::Brisbane;
    let config = SearchConfig::default();

    let mut group = c.benchmark_group("search_day");
    group.sample_size(20);
    group.bench_function("sun_day", |b| {
        b.iter(|| {
            sun_day(black_box(&loc), black_box(date()), tz, &config)
                .expect("search should succeed")
        })
    });
    group.bench_function("moon_day", |b| {
        b.iter(|| {
            body_day(Body::Moon, black_box(&loc), black_box(date()), tz, &config)
                .expect("search should succeed")
        })
    });
    group.finish();
}

fn lunar_phase_bench(c: &mut Criterion) {
    let tz = chrono_tz::Australia::Brisbane;
    let loc = brisbane();

    let mut group = c.benchmark_group("lunar_phase");
    group.sample_size(20);
    group.bench_function("year_events", |b| {
        b.iter(|| year_events(black_box(2024), tz).expect("phases"))
    });
    group.bench_function("noon_phase_cached", |b| {
        let mut cache = MoonPhaseCache::default();
        b.iter(|| noon_phase(black_box(date()), tz, &mut cache).expect("phase"))
    });
    group.bench_function("moon_orientation", |b| {
        b.iter(|| moon_orientation(black_box(&loc), black_box(JD)).expect("orientation"))
    });
    group.finish();
}

criterion_group!(benches, position_bench, day_search_bench, lunar_phase_bench);
criterion_main!(benches);
