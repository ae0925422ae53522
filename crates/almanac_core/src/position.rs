//! Apparent position of a body for an observer at an instant.
//!
//! Pipeline: mean elements → geocentric ecliptic → equatorial (mean
//! obliquity of date) → topocentric (parallax) → horizontal → refraction.
//! Every step is closed form; the only loop is the capped Kepler solver.

use almanac_frames::{
    EquatorialCoords, SphericalCoords, apparent_elevation_deg, cartesian_to_spherical,
    ecliptic_to_equatorial, equatorial_to_horizontal, hour_angle_deg, mean_obliquity_deg,
    spherical_to_cartesian, topocentric_equatorial,
};
use almanac_time::{day_number, jd_from_datetime, julian_century, local_sidereal_time_deg};
use chrono::{DateTime, TimeZone};

use crate::body::Body;
use crate::ephemeris::{GeocentricEcliptic, geocentric_ecliptic};
use crate::error::CoreError;
use crate::location::{GeoCoordinate, POSITION_LATITUDE_LIMIT_DEG};

/// Where a body appears from one location at one instant.
///
/// All angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub body: Body,
    /// UT Julian Date the position was evaluated at.
    pub jd_ut: f64,
    /// Azimuth, [0, 360), 0 = north, 90 = east.
    pub azimuth_deg: f64,
    /// Refraction-corrected elevation.
    pub elevation_deg: f64,
    /// Geometric topocentric elevation, [-90, 90].
    pub true_elevation_deg: f64,
    /// RA/Dec seen from Earth's centre.
    pub geocentric: EquatorialCoords,
    /// RA/Dec seen from the observer.
    pub topocentric: EquatorialCoords,
    /// Geocentric ecliptic longitude, [0, 360).
    pub ecliptic_lon_deg: f64,
    /// Geocentric ecliptic latitude.
    pub ecliptic_lat_deg: f64,
    /// Topocentric hour angle, [-180, 180), negative east of the meridian.
    pub hour_angle_deg: f64,
    /// Local mean sidereal time, [0, 360).
    pub local_sidereal_time_deg: f64,
    /// Geocentric distance in km.
    pub distance_km: f64,
    /// Geocentric distance in equatorial Earth radii.
    pub distance_earth_radii: f64,
    /// Equatorial horizontal parallax.
    pub horizontal_parallax_deg: f64,
}

/// Geocentric RA/Dec of an ecliptic position at a UT Julian Date.
pub fn geocentric_equatorial(ecl: &GeocentricEcliptic, jd_ut: f64) -> EquatorialCoords {
    let eps = mean_obliquity_deg(julian_century(jd_ut));
    let v = spherical_to_cartesian(&SphericalCoords {
        lon_deg: ecl.lon_deg,
        lat_deg: ecl.lat_deg,
        distance: 1.0,
    });
    let eq = cartesian_to_spherical(&ecliptic_to_equatorial(&v, eps));
    EquatorialCoords {
        ra_deg: eq.lon_deg,
        dec_deg: eq.lat_deg,
    }
}

/// Compute the position of `body` seen from `location` at UT Julian Date
/// `jd_ut`.
///
/// Latitude is clamped to ±[`POSITION_LATITUDE_LIMIT_DEG`] before the
/// horizontal transform.
pub fn position(body: Body, location: &GeoCoordinate, jd_ut: f64) -> Result<Position, CoreError> {
    if !jd_ut.is_finite() {
        return Err(CoreError::InvalidInstant);
    }
    let loc = location.clamped(POSITION_LATITUDE_LIMIT_DEG);
    let lat = loc.latitude_deg();

    let ecl = geocentric_ecliptic(body, day_number(jd_ut));
    let geocentric = geocentric_equatorial(&ecl, jd_ut);
    let lst = local_sidereal_time_deg(jd_ut, loc.longitude_deg());
    let topocentric = topocentric_equatorial(geocentric, ecl.horizontal_parallax_deg, lst, lat);
    let ha = hour_angle_deg(lst, topocentric.ra_deg);
    let hor = equatorial_to_horizontal(ha, topocentric.dec_deg, lat);

    Ok(Position {
        body,
        jd_ut,
        azimuth_deg: hor.azimuth_deg,
        elevation_deg: apparent_elevation_deg(hor.elevation_deg),
        true_elevation_deg: hor.elevation_deg,
        geocentric,
        topocentric,
        ecliptic_lon_deg: ecl.lon_deg,
        ecliptic_lat_deg: ecl.lat_deg,
        hour_angle_deg: ha,
        local_sidereal_time_deg: lst,
        distance_km: ecl.distance_km,
        distance_earth_radii: ecl.distance_earth_radii(),
        horizontal_parallax_deg: ecl.horizontal_parallax_deg,
    })
}

/// [`position`] for a zoned timestamp.
pub fn position_at<Z: TimeZone>(
    body: Body,
    location: &GeoCoordinate,
    instant: &DateTime<Z>,
) -> Result<Position, CoreError> {
    position(body, location, jd_from_datetime(instant))
}
