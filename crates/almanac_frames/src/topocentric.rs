//! Geocentric → topocentric parallax correction.
//!
//! The observer is placed on an oblate Earth using the geocentric latitude
//! and radius approximations, then subtracted from the body's geocentric
//! equatorial vector expressed in Earth radii. The result is continuous in
//! hour angle and latitude; it has none of the `1/sin(g)` singularities of
//! the closed-form RA/Dec corrections.

use crate::spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};

/// Equatorial direction of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialCoords {
    /// Right ascension in degrees, [0, 360).
    pub ra_deg: f64,
    /// Declination in degrees, [-90, 90].
    pub dec_deg: f64,
}

/// Geocentric latitude of an observer at geodetic latitude `lat_deg`.
///
/// `φ' = φ − 0.1924° · sin(2φ)`. Degrees in, degrees out.
pub fn geocentric_latitude_deg(lat_deg: f64) -> f64 {
    lat_deg - 0.1924 * (2.0 * lat_deg).to_radians().sin()
}

/// Distance from Earth's centre to an observer at geodetic latitude
/// `lat_deg`, in equatorial Earth radii.
pub fn geocentric_radius(lat_deg: f64) -> f64 {
    0.99833 + 0.00167 * (2.0 * lat_deg).to_radians().cos()
}

/// Shift a geocentric RA/Dec to the observer's position on the surface.
///
/// * `geocentric`: body direction seen from Earth's centre, degrees
/// * `horizontal_parallax_deg`: `asin(1 / distance_in_earth_radii)`, degrees
/// * `lst_deg`: local sidereal time, degrees
/// * `lat_deg`: observer geodetic latitude, degrees
///
/// A non-positive parallax returns the geocentric direction unchanged.
pub fn topocentric_equatorial(
    geocentric: EquatorialCoords,
    horizontal_parallax_deg: f64,
    lst_deg: f64,
    lat_deg: f64,
) -> EquatorialCoords {
    if horizontal_parallax_deg <= 0.0 {
        return geocentric;
    }
    let distance_er = 1.0 / horizontal_parallax_deg.to_radians().sin();
    let body = spherical_to_cartesian(&SphericalCoords {
        lon_deg: geocentric.ra_deg,
        lat_deg: geocentric.dec_deg,
        distance: distance_er,
    });
    let observer = spherical_to_cartesian(&SphericalCoords {
        lon_deg: lst_deg,
        lat_deg: geocentric_latitude_deg(lat_deg),
        distance: geocentric_radius(lat_deg),
    });
    let topo = cartesian_to_spherical(&[
        body[0] - observer[0],
        body[1] - observer[1],
        body[2] - observer[2],
    ]);
    EquatorialCoords {
        ra_deg: topo.lon_deg,
        dec_deg: topo.lat_deg,
    }
}
