//! Greenwich and local mean sidereal time.
//!
//! Sidereal time here follows the Sun's mean longitude rather than the IAU
//! Earth Rotation Angle: `GMST = L☉ + 180° + 15°·UT`, where `L☉ = M☉ + ω☉`
//! from the solar element table. Accurate to a few seconds of time over
//! several centuries, which is below the resolution of the event search.
//!
//! All functions take UT Julian Dates.

use crate::julian::day_number;

/// Sun's mean anomaly at d = 0, degrees.
const SUN_M0_DEG: f64 = 356.0470;
/// Sun's mean anomaly rate, degrees per day.
const SUN_M_RATE: f64 = 0.985_600_258_5;
/// Sun's argument of perihelion at d = 0, degrees.
const SUN_W0_DEG: f64 = 282.9404;
/// Sun's argument of perihelion drift, degrees per day.
const SUN_W_RATE: f64 = 4.709_35e-5;

/// Sun's mean longitude `L☉ = M☉ + ω☉` for a UT Julian Date.
///
/// Returns degrees in [0, 360).
pub fn mean_sun_longitude_deg(jd_ut: f64) -> f64 {
    let d = day_number(jd_ut);
    let l = (SUN_M0_DEG + SUN_M_RATE * d) + (SUN_W0_DEG + SUN_W_RATE * d);
    wrap_360(l)
}

/// Hours of UT elapsed since the preceding 0h UT, in [0, 24).
pub fn ut_hours(jd_ut: f64) -> f64 {
    (jd_ut + 0.5).rem_euclid(1.0) * 24.0
}

/// Greenwich Mean Sidereal Time for a UT Julian Date.
///
/// Returns degrees in [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    wrap_360(mean_sun_longitude_deg(jd_ut) + 180.0 + 15.0 * ut_hours(jd_ut))
}

/// Local mean sidereal time in degrees, [0, 360).
///
/// `longitude_east_deg` is positive east of Greenwich.
pub fn local_sidereal_time_deg(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    wrap_360(gmst_deg(jd_ut) + longitude_east_deg)
}

// rem_euclid can round a tiny negative input up to exactly 360.0.
fn wrap_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Local mean sidereal time in hours, [0, 24).
///
/// `LST = GMST0/15 + UT + longitude/15`.
pub fn local_sidereal_time_hours(jd_ut: f64, longitude_east_deg: f64) -> f64 {
    local_sidereal_time_deg(jd_ut, longitude_east_deg) / 15.0
}
