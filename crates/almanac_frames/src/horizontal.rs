//! Equatorial → horizontal (azimuth/elevation) projection.

use crate::angle::{normalize_deg, normalize_signed_deg};

/// Horizontal coordinates of a body for one observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalCoords {
    /// Azimuth in degrees, [0, 360), 0 = north, 90 = east.
    pub azimuth_deg: f64,
    /// Geometric (unrefracted) elevation in degrees, [-90, 90].
    pub elevation_deg: f64,
}

/// Local hour angle `LST − α` in degrees, wrapped to [-180, 180).
///
/// Negative east of the meridian (before transit), positive west of it.
pub fn hour_angle_deg(lst_deg: f64, ra_deg: f64) -> f64 {
    normalize_signed_deg(lst_deg - ra_deg)
}

/// Project an hour angle and declination onto the observer's horizon.
///
/// All arguments in degrees. The rectangular form keeps azimuth continuous
/// through the meridian and elevation continuous through the zenith.
pub fn equatorial_to_horizontal(
    hour_angle_deg: f64,
    dec_deg: f64,
    latitude_deg: f64,
) -> HorizontalCoords {
    let (sin_ha, cos_ha) = hour_angle_deg.to_radians().sin_cos();
    let (sin_dec, cos_dec) = dec_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = latitude_deg.to_radians().sin_cos();

    let x = cos_ha * cos_dec;
    let y = sin_ha * cos_dec;
    let z = sin_dec;

    let x_hor = x * sin_lat - z * cos_lat;
    let z_hor = x * cos_lat + z * sin_lat;

    HorizontalCoords {
        azimuth_deg: normalize_deg(y.atan2(x_hor).to_degrees() + 180.0),
        elevation_deg: z_hor.clamp(-1.0, 1.0).asin().to_degrees(),
    }
}

/// Parallactic angle in degrees: the angle at the body between the
/// directions to the celestial pole and to the zenith.
///
/// Positive west of the meridian. Written in the `cos φ`-scaled form so it
/// stays finite at high latitudes.
pub fn parallactic_angle_deg(hour_angle_deg: f64, dec_deg: f64, latitude_deg: f64) -> f64 {
    let (sin_ha, cos_ha) = hour_angle_deg.to_radians().sin_cos();
    let (sin_dec, cos_dec) = dec_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = latitude_deg.to_radians().sin_cos();
    (sin_ha * cos_lat)
        .atan2(sin_lat * cos_dec - cos_lat * sin_dec * cos_ha)
        .to_degrees()
}
