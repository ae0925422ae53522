//! Orientation of the Moon's disk: bright limb, parallactic angle, axis and
//! optical libration (Meeus ch. 48 and 53, nutation neglected).

use almanac_core::{Body, GeoCoordinate, POSITION_LATITUDE_LIMIT_DEG, elements_at, position};
use almanac_frames::{
    EquatorialCoords, mean_obliquity_deg, normalize_deg, normalize_signed_deg,
    parallactic_angle_deg,
};
use almanac_time::{day_number, julian_century};

use crate::error::SearchError;
use crate::lunar_phase_types::OrientationAngles;

/// Inclination of the mean lunar equator to the ecliptic, degrees.
pub const LUNAR_EQUATOR_INCLINATION_DEG: f64 = 1.542_42;

/// Position angle of the bright limb's midpoint, degrees in [0, 360).
///
/// Measured from celestial north through east. The Sun's and Moon's
/// equatorial coordinates must be in the same frame.
pub fn bright_limb_angle_deg(sun: &EquatorialCoords, moon: &EquatorialCoords) -> f64 {
    let (sin_ds, cos_ds) = sun.dec_deg.to_radians().sin_cos();
    let (sin_dm, cos_dm) = moon.dec_deg.to_radians().sin_cos();
    let (sin_da, cos_da) = (sun.ra_deg - moon.ra_deg).to_radians().sin_cos();
    normalize_deg(
        (cos_ds * sin_da)
            .atan2(sin_ds * cos_dm - cos_ds * sin_dm * cos_da)
            .to_degrees(),
    )
}

/// Optical libration `(l′, b′)` in degrees from the Moon's geocentric
/// ecliptic position, the ascending node Ω and argument of latitude F.
pub fn optical_libration_deg(
    lon_deg: f64,
    lat_deg: f64,
    node_deg: f64,
    arg_lat_deg: f64,
) -> (f64, f64) {
    let (sin_i, cos_i) = LUNAR_EQUATOR_INCLINATION_DEG.to_radians().sin_cos();
    let (sin_w, cos_w) = (lon_deg - node_deg).to_radians().sin_cos();
    let (sin_b, cos_b) = lat_deg.to_radians().sin_cos();
    let a = (sin_w * cos_b * cos_i - sin_b * sin_i)
        .atan2(cos_w * cos_b)
        .to_degrees();
    let l = normalize_signed_deg(a - arg_lat_deg);
    let b = (-sin_w * cos_b * sin_i - sin_b * cos_i)
        .clamp(-1.0, 1.0)
        .asin()
        .to_degrees();
    (l, b)
}

/// Position angle of the Moon's rotation axis in degrees.
pub fn axis_position_angle_deg(
    ra_deg: f64,
    node_deg: f64,
    obliquity_deg: f64,
    libration_lat_deg: f64,
) -> f64 {
    let (sin_i, cos_i) = LUNAR_EQUATOR_INCLINATION_DEG.to_radians().sin_cos();
    let (sin_v, cos_v) = node_deg.to_radians().sin_cos();
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();
    let x = sin_i * sin_v;
    let y = sin_i * cos_v * cos_e - cos_i * sin_e;
    let omega = x.atan2(y).to_degrees();
    ((x * x + y * y).sqrt() * (ra_deg - omega).to_radians().cos()
        / libration_lat_deg.to_radians().cos())
    .clamp(-1.0, 1.0)
    .asin()
    .to_degrees()
}

/// Disk orientation for an observer at a UT Julian Date.
///
/// Bright limb and axis use geocentric coordinates; the parallactic angle
/// uses the Moon's topocentric hour angle and declination.
pub fn moon_orientation(
    location: &GeoCoordinate,
    jd_ut: f64,
) -> Result<OrientationAngles, SearchError> {
    let moon = position(Body::Moon, location, jd_ut)?;
    let sun = position(Body::Sun, location, jd_ut)?;
    let lat = location.clamped(POSITION_LATITUDE_LIMIT_DEG).latitude_deg();

    let el = elements_at(Body::Moon, day_number(jd_ut));
    let node = el.node_deg;
    let arg_lat = el.mean_longitude_deg() - node;
    let (libration_lon_deg, libration_lat_deg) =
        optical_libration_deg(moon.ecliptic_lon_deg, moon.ecliptic_lat_deg, node, arg_lat);
    let eps = mean_obliquity_deg(julian_century(jd_ut));

    Ok(OrientationAngles {
        bright_limb_deg: bright_limb_angle_deg(&sun.geocentric, &moon.geocentric),
        parallactic_deg: parallactic_angle_deg(
            moon.hour_angle_deg,
            moon.topocentric.dec_deg,
            lat,
        ),
        axis_deg: axis_position_angle_deg(moon.geocentric.ra_deg, node, eps, libration_lat_deg),
        libration_lon_deg,
        libration_lat_deg,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lunar_phase::{SYNODIC_MONTH_DAYS, true_phase};
    use crate::lunar_phase_types::MoonPhase;

    fn london() -> GeoCoordinate {
        GeoCoordinate::new(51.5, 0.0).unwrap()
    }

    #[test]
    fn waxing_lit_on_west_waning_on_east() {
        for k in 1490..1500 {
            let new = true_phase(k as f64, MoonPhase::New);
            for frac in [0.1, 0.4] {
                let a = moon_orientation(&london(), new + frac * SYNODIC_MONTH_DAYS).unwrap();
                assert!(
                    (200.0..340.0).contains(&a.bright_limb_deg),
                    "waxing k={k} frac={frac}: {}",
                    a.bright_limb_deg
                );
            }
            for frac in [0.6, 0.9] {
                let a = moon_orientation(&london(), new + frac * SYNODIC_MONTH_DAYS).unwrap();
                assert!(
                    (20.0..160.0).contains(&a.bright_limb_deg),
                    "waning k={k} frac={frac}: {}",
                    a.bright_limb_deg
                );
            }
        }
    }

    #[test]
    fn libration_and_axis_bounds() {
        for i in 0..400 {
            let a = moon_orientation(&london(), 2_458_849.5 + i as f64 * 0.7).unwrap();
            assert!(a.libration_lon_deg.abs() < 8.5, "l' = {}", a.libration_lon_deg);
            assert!(a.libration_lat_deg.abs() < 7.0, "b' = {}", a.libration_lat_deg);
            assert!(a.axis_deg.abs() < 25.0, "P = {}", a.axis_deg);
            assert!((-180.0..=180.0).contains(&a.parallactic_deg));
        }
    }

    #[test]
    fn bright_limb_points_at_sun() {
        // Sun due east of the Moon on the equator: limb angle 90°.
        let moon = EquatorialCoords {
            ra_deg: 100.0,
            dec_deg: 0.0,
        };
        let sun = EquatorialCoords {
            ra_deg: 130.0,
            dec_deg: 0.0,
        };
        assert!((bright_limb_angle_deg(&sun, &moon) - 90.0).abs() < 1e-9);
        let sun_west = EquatorialCoords {
            ra_deg: 70.0,
            dec_deg: 0.0,
        };
        assert!((bright_limb_angle_deg(&sun_west, &moon) - 270.0).abs() < 1e-9);
    }
}
