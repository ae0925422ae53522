//! Frame conversion helpers for apparent sky positions.
//!
//! Provides the coordinate pipeline from ecliptic rectangular coordinates to
//! what an observer sees:
//! ecliptic → equatorial (obliquity rotation) → topocentric (parallax)
//! → horizontal (azimuth/elevation) → apparent (refraction).
//!
//! Every public angle is in degrees; radians only appear inside function
//! bodies.

pub mod angle;
pub mod horizontal;
pub mod obliquity;
pub mod refraction;
pub mod rotation;
pub mod spherical;
pub mod topocentric;

pub use angle::{normalize_deg, normalize_signed_deg};
pub use horizontal::{
    HorizontalCoords, equatorial_to_horizontal, hour_angle_deg, parallactic_angle_deg,
};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg};
pub use refraction::{REFRACTION_CUTOFF_DEG, apparent_elevation_deg, refraction_deg};
pub use rotation::ecliptic_to_equatorial;
pub use spherical::{SphericalCoords, cartesian_to_spherical, spherical_to_cartesian};
pub use topocentric::{
    EquatorialCoords, geocentric_latitude_deg, geocentric_radius, topocentric_equatorial,
};
