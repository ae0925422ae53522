//! Range and continuity properties of the position calculator.

use almanac_core::*;
use chrono::TimeZone;
use chrono_tz::Australia::Brisbane;

const JD_2020: f64 = 2_458_849.5;

fn locations() -> Vec<GeoCoordinate> {
    [
        (-27.467, 153.033),
        (55.95, -3.19),
        (69.65, 18.96),
        (0.0, 0.0),
        (-90.0, 45.0),
        (90.0, -120.0),
        (-33.9, -70.6),
    ]
    .iter()
    .map(|&(lat, lon)| GeoCoordinate::new(lat, lon).unwrap())
    .collect()
}

#[test]
fn azimuth_and_elevation_stay_in_range() {
    for loc in locations() {
        for body in Body::ALL {
            for step in 0..200 {
                let jd = JD_2020 + step as f64 * 1.83;
                let p = position(body, &loc, jd).unwrap();
                assert!(
                    (0.0..360.0).contains(&p.azimuth_deg),
                    "{body} az {} at {jd}",
                    p.azimuth_deg
                );
                assert!(
                    (-90.0..=90.0).contains(&p.true_elevation_deg),
                    "{body} el {} at {jd}",
                    p.true_elevation_deg
                );
                assert!(p.elevation_deg <= 90.0 + 1e-9);
            }
        }
    }
}

#[test]
fn elevation_is_continuous_minute_to_minute() {
    // No branch jumps across meridian or horizon; the Moon is the fastest
    // mover at about 0.25° per minute.
    let loc = GeoCoordinate::new(-27.467, 153.033).unwrap();
    for body in [Body::Sun, Body::Moon, Body::Jupiter] {
        let mut prev = position(body, &loc, JD_2020).unwrap();
        for minute in 1..(3 * 1440) {
            let jd = JD_2020 + minute as f64 / 1440.0;
            let p = position(body, &loc, jd).unwrap();
            assert!(
                (p.true_elevation_deg - prev.true_elevation_deg).abs() < 0.3,
                "{body} elevation jump at minute {minute}"
            );
            prev = p;
        }
    }
}

#[test]
fn sun_is_high_at_brisbane_noon_in_january() {
    // Brisbane, local noon in January: the Sun is close to the zenith.
    let loc = GeoCoordinate::new(-27.467, 153.033).unwrap();
    let noon = Brisbane.with_ymd_and_hms(2020, 1, 10, 12, 0, 0).unwrap();
    let p = position_at(Body::Sun, &loc, &noon).unwrap();
    assert!(p.elevation_deg > 80.0, "el = {}", p.elevation_deg);
}

#[test]
fn moon_distance_within_orbit_limits() {
    let loc = GeoCoordinate::new(0.0, 0.0).unwrap();
    for day in 0..60 {
        let p = position(Body::Moon, &loc, JD_2020 + day as f64).unwrap();
        assert!(
            (356_000.0..407_000.0).contains(&p.distance_km),
            "distance {} km",
            p.distance_km
        );
        assert!((0.88..1.03).contains(&p.horizontal_parallax_deg));
    }
}

#[test]
fn inner_planets_stay_near_the_sun() {
    let loc = GeoCoordinate::new(40.0, -74.0).unwrap();
    for day in (0..730).step_by(5) {
        let jd = JD_2020 + day as f64;
        let sun = position(Body::Sun, &loc, jd).unwrap();
        for (body, max_elong) in [(Body::Mercury, 28.5), (Body::Venus, 47.5)] {
            let p = position(body, &loc, jd).unwrap();
            let mut diff = (p.ecliptic_lon_deg - sun.ecliptic_lon_deg).abs();
            if diff > 180.0 {
                diff = 360.0 - diff;
            }
            assert!(diff < max_elong, "{body} elongation {diff} on day {day}");
        }
    }
}
