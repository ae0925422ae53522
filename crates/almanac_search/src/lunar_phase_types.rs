//! Types for Moon phase events and disk orientation.

use std::fmt::{Display, Formatter};

use almanac_frames::normalize_deg;
use chrono::DateTime;
use chrono_tz::Tz;

/// Principal lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoonPhase {
    New,
    FirstQuarter,
    Full,
    LastQuarter,
}

impl MoonPhase {
    /// All four phases in lunation order.
    pub const ALL: [MoonPhase; 4] = [
        Self::New,
        Self::FirstQuarter,
        Self::Full,
        Self::LastQuarter,
    ];

    /// Phase fraction of the lunation: 0 new, 0.25 first quarter,
    /// 0.5 full, 0.75 last quarter.
    pub const fn fraction(self) -> f64 {
        match self {
            Self::New => 0.0,
            Self::FirstQuarter => 0.25,
            Self::Full => 0.5,
            Self::LastQuarter => 0.75,
        }
    }

    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "new moon",
            Self::FirstQuarter => "first quarter",
            Self::Full => "full moon",
            Self::LastQuarter => "last quarter",
        }
    }
}

impl Display for MoonPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A principal phase instant.
#[derive(Debug, Clone, PartialEq)]
pub struct MoonPhaseEvent {
    pub phase: MoonPhase,
    /// UT Julian Date of the phase.
    pub jd_ut: f64,
    /// Phase time in the zone the events were requested for.
    pub time: DateTime<Tz>,
}

/// Angles needed to draw the Moon's disk as seen by an observer.
///
/// Position angles are in degrees, measured from celestial north through
/// east, [0, 360).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationAngles {
    /// Position angle of the midpoint of the bright limb. Near 270° for a
    /// waxing Moon (lit on the west side), within (0°, 180°) when waning.
    pub bright_limb_deg: f64,
    /// Parallactic angle: rotation from celestial north to the zenith
    /// direction at the Moon, [-180, 180). Positive west of the meridian.
    pub parallactic_deg: f64,
    /// Position angle of the Moon's rotation axis, [-180, 180].
    pub axis_deg: f64,
    /// Optical libration in longitude, [-180, 180).
    pub libration_lon_deg: f64,
    /// Optical libration in latitude.
    pub libration_lat_deg: f64,
}

impl OrientationAngles {
    /// Bright-limb angle measured from the observer's vertical instead of
    /// celestial north, [0, 360). This is the rotation a renderer applies
    /// to a north-up crescent.
    pub fn zenith_limb_deg(&self) -> f64 {
        normalize_deg(self.bright_limb_deg - self.parallactic_deg)
    }
}
