//! Orbital position model and apparent-position calculator.
//!
//! Bodies are solved from linear mean elements plus short perturbation
//! series ([`elements`], [`kepler`], [`ephemeris`]), then carried through
//! the frame pipeline in `almanac_frames` by [`position()`].
//!
//! Everything here is a pure function of its inputs. Angles are degrees
//! at the public API; instants are UT Julian Dates unless a
//! `chrono::DateTime` is taken explicitly.

pub mod body;
pub mod elements;
pub mod ephemeris;
pub mod error;
pub mod kepler;
pub mod location;
pub mod position;

pub use body::Body;
pub use elements::{ElementSeries, LinearTerm, OrbitalElements, elements_at};
pub use ephemeris::{
    AU_KM, EARTH_RADIUS_KM, GeocentricEcliptic, SOLAR_PARALLAX_ARCSEC, SunSolution,
    geocentric_ecliptic, sun,
};
pub use error::CoreError;
pub use kepler::{KEPLER_MAX_ITERATIONS, KEPLER_TOLERANCE_DEG, eccentric_anomaly_deg};
pub use location::{DAY_EVENT_LATITUDE_LIMIT_DEG, GeoCoordinate, POSITION_LATITUDE_LIMIT_DEG};
pub use position::{Position, geocentric_equatorial, position, position_at};
