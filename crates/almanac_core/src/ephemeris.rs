//! Geocentric ecliptic positions from mean elements plus perturbations.
//!
//! The Sun and Moon are solved directly about the Earth. Planets are solved
//! about the Sun, corrected for the largest mutual perturbations
//! (Jupiter/Saturn great inequality, Uranus), then translated to the Earth
//! by adding the Sun's geocentric vector.
//!
//! Accuracy is of order 1′ for the Sun and planets and a few arcminutes
//! for the Moon over a few centuries around 2000.

use almanac_frames::{cartesian_to_spherical, normalize_deg, spherical_to_cartesian};

use crate::body::Body;
use crate::elements::elements_at;
use crate::kepler::{ecliptic_rectangular, orbit_point};

/// Astronomical unit in km.
pub const AU_KM: f64 = 149_597_870.7;

/// Equatorial Earth radius in km.
pub const EARTH_RADIUS_KM: f64 = 6378.14;

/// Equatorial horizontal parallax of a body at 1 AU, arcseconds.
pub const SOLAR_PARALLAX_ARCSEC: f64 = 8.794;

/// The Sun seen from Earth's centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunSolution {
    /// Geocentric ecliptic longitude in degrees, [0, 360).
    pub lon_deg: f64,
    /// Distance in AU.
    pub distance_au: f64,
    /// Mean anomaly in degrees, not reduced.
    pub mean_anomaly_deg: f64,
    /// Mean longitude `w + M` in degrees, [0, 360).
    pub mean_longitude_deg: f64,
}

impl SunSolution {
    /// Geocentric ecliptic rectangular vector in AU.
    pub fn rectangular_au(&self) -> [f64; 3] {
        let (s, c) = self.lon_deg.to_radians().sin_cos();
        [self.distance_au * c, self.distance_au * s, 0.0]
    }
}

/// Solve the Sun at day number `d` (see [`crate::elements`]).
pub fn sun(d: f64) -> SunSolution {
    let el = elements_at(Body::Sun, d);
    let p = orbit_point(&el);
    SunSolution {
        lon_deg: normalize_deg(p.true_anomaly_deg + el.perihelion_deg),
        distance_au: p.radius,
        mean_anomaly_deg: el.mean_anomaly_deg,
        mean_longitude_deg: normalize_deg(el.perihelion_deg + el.mean_anomaly_deg),
    }
}

/// Geocentric ecliptic position of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricEcliptic {
    /// Ecliptic longitude in degrees, [0, 360).
    pub lon_deg: f64,
    /// Ecliptic latitude in degrees, [-90, 90].
    pub lat_deg: f64,
    /// Distance from Earth's centre in km.
    pub distance_km: f64,
    /// Equatorial horizontal parallax in degrees.
    pub horizontal_parallax_deg: f64,
}

impl GeocentricEcliptic {
    /// Distance in AU.
    pub fn distance_au(&self) -> f64 {
        self.distance_km / AU_KM
    }

    /// Distance in equatorial Earth radii.
    pub fn distance_earth_radii(&self) -> f64 {
        self.distance_km / EARTH_RADIUS_KM
    }
}

/// Geocentric ecliptic position of `body` at day number `d`.
pub fn geocentric_ecliptic(body: Body, d: f64) -> GeocentricEcliptic {
    match body {
        Body::Sun => {
            let s = sun(d);
            GeocentricEcliptic {
                lon_deg: s.lon_deg,
                lat_deg: 0.0,
                distance_km: s.distance_au * AU_KM,
                horizontal_parallax_deg: parallax_from_au(s.distance_au),
            }
        }
        Body::Moon => moon(d),
        _ => planet(body, d),
    }
}

fn parallax_from_au(distance_au: f64) -> f64 {
    SOLAR_PARALLAX_ARCSEC / 3600.0 / distance_au
}

fn sind(deg: f64) -> f64 {
    deg.to_radians().sin()
}

fn cosd(deg: f64) -> f64 {
    deg.to_radians().cos()
}

fn moon(d: f64) -> GeocentricEcliptic {
    let el = elements_at(Body::Moon, d);
    let raw = cartesian_to_spherical(&ecliptic_rectangular(&el, &orbit_point(&el)));

    let sun_el = elements_at(Body::Sun, d);
    let ms = sun_el.mean_anomaly_deg;
    let mm = el.mean_anomaly_deg;
    let ls = sun_el.mean_longitude_deg();
    let lm = el.mean_longitude_deg();
    let dd = lm - ls;
    let f = lm - el.node_deg;

    let dlon = -1.274 * sind(mm - 2.0 * dd)
        + 0.658 * sind(2.0 * dd)
        - 0.186 * sind(ms)
        - 0.059 * sind(2.0 * mm - 2.0 * dd)
        - 0.057 * sind(mm - 2.0 * dd + ms)
        + 0.053 * sind(mm + 2.0 * dd)
        + 0.046 * sind(2.0 * dd - ms)
        + 0.041 * sind(mm - ms)
        - 0.035 * sind(dd)
        - 0.031 * sind(mm + ms)
        - 0.015 * sind(2.0 * f - 2.0 * dd)
        + 0.011 * sind(mm - 4.0 * dd);
    let dlat = -0.173 * sind(f - 2.0 * dd)
        - 0.055 * sind(mm - f - 2.0 * dd)
        - 0.046 * sind(mm + f - 2.0 * dd)
        + 0.033 * sind(f + 2.0 * dd)
        + 0.017 * sind(2.0 * mm + f);
    let ddist = -0.58 * cosd(mm - 2.0 * dd) - 0.46 * cosd(2.0 * dd);

    let distance_er = raw.distance + ddist;
    GeocentricEcliptic {
        lon_deg: normalize_deg(raw.lon_deg + dlon),
        lat_deg: raw.lat_deg + dlat,
        distance_km: distance_er * EARTH_RADIUS_KM,
        horizontal_parallax_deg: (1.0 / distance_er).asin().to_degrees(),
    }
}

/// Longitude and latitude corrections in degrees for the outer planets.
fn planet_perturbation(body: Body, d: f64) -> (f64, f64) {
    let mj = elements_at(Body::Jupiter, d).mean_anomaly_deg;
    let ms = elements_at(Body::Saturn, d).mean_anomaly_deg;
    match body {
        Body::Jupiter => (
            -0.332 * sind(2.0 * mj - 5.0 * ms - 67.6)
                - 0.056 * sind(2.0 * mj - 2.0 * ms + 21.0)
                + 0.042 * sind(3.0 * mj - 5.0 * ms + 21.0)
                - 0.036 * sind(mj - 2.0 * ms)
                + 0.022 * cosd(mj - ms)
                + 0.023 * sind(2.0 * mj - 3.0 * ms + 52.0)
                - 0.016 * sind(mj - 5.0 * ms - 69.0),
            0.0,
        ),
        Body::Saturn => (
            0.812 * sind(2.0 * mj - 5.0 * ms - 67.6) - 0.229 * cosd(2.0 * mj - 4.0 * ms - 2.0)
                + 0.119 * sind(mj - 2.0 * ms - 3.0)
                + 0.046 * sind(2.0 * mj - 6.0 * ms - 69.0)
                + 0.014 * sind(mj - 3.0 * ms + 32.0),
            -0.020 * cosd(2.0 * mj - 4.0 * ms - 2.0) + 0.018 * sind(2.0 * mj - 6.0 * ms - 49.0),
        ),
        Body::Uranus => {
            let mu = elements_at(Body::Uranus, d).mean_anomaly_deg;
            (
                0.040 * sind(ms - 2.0 * mu + 6.0) + 0.035 * sind(ms - 3.0 * mu + 33.0)
                    - 0.015 * sind(mj - mu + 20.0),
                0.0,
            )
        }
        _ => (0.0, 0.0),
    }
}

fn planet(body: Body, d: f64) -> GeocentricEcliptic {
    let el = elements_at(body, d);
    let mut helio = cartesian_to_spherical(&ecliptic_rectangular(&el, &orbit_point(&el)));
    let (dlon, dlat) = planet_perturbation(body, d);
    helio.lon_deg += dlon;
    helio.lat_deg += dlat;

    let h = spherical_to_cartesian(&helio);
    let s = sun(d).rectangular_au();
    let geo = cartesian_to_spherical(&[h[0] + s[0], h[1] + s[1], h[2] + s[2]]);
    GeocentricEcliptic {
        lon_deg: geo.lon_deg,
        lat_deg: geo.lat_deg,
        distance_km: geo.distance * AU_KM,
        horizontal_parallax_deg: parallax_from_au(geo.distance),
    }
}
