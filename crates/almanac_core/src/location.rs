//! Observer location.

use crate::error::CoreError;

/// Latitude clamp applied by the position calculator.
///
/// Keeps the horizontal transform away from the pole, where azimuth is
/// undefined. Not a validation limit: inputs up to ±90° are accepted.
pub const POSITION_LATITUDE_LIMIT_DEG: f64 = 89.8;

/// Latitude clamp applied by the day-event search.
pub const DAY_EVENT_LATITUDE_LIMIT_DEG: f64 = 89.0;

/// Geographic location on Earth's surface (WGS84-equivalent, no datum
/// correction).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl GeoCoordinate {
    /// Create a validated location.
    ///
    /// * `latitude_deg`: north positive, [-90, 90]
    /// * `longitude_deg`: east positive, [-180, 180]
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, CoreError> {
        if !latitude_deg.is_finite() || !longitude_deg.is_finite() {
            return Err(CoreError::InvalidLocation("coordinates must be finite"));
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(CoreError::InvalidLocation("latitude must be in [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(CoreError::InvalidLocation(
                "longitude must be in [-180, 180]",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Geodetic latitude in degrees, north positive.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Longitude in degrees, east positive.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    /// Copy of this location with latitude clamped to `±limit_deg`.
    pub fn clamped(&self, limit_deg: f64) -> Self {
        Self {
            latitude_deg: self.latitude_deg.clamp(-limit_deg, limit_deg),
            longitude_deg: self.longitude_deg,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_locations() {
        let loc = GeoCoordinate::new(-27.467, 153.033).unwrap();
        assert_eq!(loc.latitude_deg(), -27.467);
        assert_eq!(loc.longitude_deg(), 153.033);
        assert!(GeoCoordinate::new(90.0, 180.0).is_ok());
        assert!(GeoCoordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn invalid_locations() {
        assert!(GeoCoordinate::new(90.01, 0.0).is_err());
        assert!(GeoCoordinate::new(-91.0, 0.0).is_err());
        assert!(GeoCoordinate::new(0.0, 180.5).is_err());
        assert!(GeoCoordinate::new(f64::NAN, 0.0).is_err());
        assert!(GeoCoordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn clamp_near_pole() {
        let pole = GeoCoordinate::new(90.0, 10.0).unwrap();
        assert_eq!(
            pole.clamped(POSITION_LATITUDE_LIMIT_DEG).latitude_deg(),
            89.8
        );
        let south = GeoCoordinate::new(-89.5, 10.0).unwrap();
        assert_eq!(
            south.clamped(DAY_EVENT_LATITUDE_LIMIT_DEG).latitude_deg(),
            -89.0
        );
        let mid = GeoCoordinate::new(55.95, -3.19).unwrap();
        assert_eq!(mid.clamped(89.0), mid);
    }
}
