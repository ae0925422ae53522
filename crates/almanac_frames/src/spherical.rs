//! Cartesian ↔ Spherical coordinate conversion.

use crate::angle::normalize_deg;

/// Spherical coordinates: longitude, latitude, distance.
///
/// Used for both ecliptic (λ, β) and equatorial (α, δ) directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    /// Measured in the x-y plane from +x toward +y.
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    /// Elevation above the x-y plane.
    pub lat_deg: f64,
    /// Distance from origin, in the unit of the input vector
    /// (AU for planets, Earth radii for the Moon).
    pub distance: f64,
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
///
/// Longitude is measured in the x-y plane from +x toward +y.
/// Latitude is elevation above the x-y plane.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();

    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }

    SphericalCoords {
        lon_deg: normalize_deg(y.atan2(x).to_degrees()),
        lat_deg: z.atan2((x * x + y * y).sqrt()).to_degrees(),
        distance: r,
    }
}

/// Convert spherical coordinates back to Cartesian `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let (sin_lon, cos_lon) = s.lon_deg.to_radians().sin_cos();
    let (sin_lat, cos_lat) = s.lat_deg.to_radians().sin_cos();
    [
        s.distance * cos_lat * cos_lon,
        s.distance * cos_lat * sin_lon,
        s.distance * sin_lat,
    ]
}
