//! Day-event search and Moon phase calculator.
//!
//! This crate provides:
//! - Rise/set, civil/nautical/astronomical twilight and golden-hour
//!   crossings for any body on a local calendar day
//! - Transit (culmination) time and elevation, and up time
//! - Principal Moon phases for a year, phase fraction and illumination
//! - Moon disk orientation angles for rendering

pub mod error;
pub mod lunar_phase;
pub mod lunar_phase_types;
pub mod moon_orientation;
pub mod riseset;
pub mod riseset_types;

pub use error::SearchError;
pub use lunar_phase::{
    MoonPhaseCache, QUARTER_LUNATION_MS, SYNODIC_MONTH_DAYS, illuminated_fraction,
    illuminated_percent, noon_phase, phase_at, true_phase, year_events,
};
pub use lunar_phase_types::{MoonPhase, MoonPhaseEvent, OrientationAngles};
pub use moon_orientation::{
    LUNAR_EQUATOR_INCLINATION_DEG, axis_position_angle_deg, bright_limb_angle_deg,
    moon_orientation, optical_libration_deg,
};
pub use riseset::{body_day, search_day, sun_day};
pub use riseset_types::{
    BodyDay, DayClassification, DayEvent, Direction, EventThreshold, RISESET_ELEVATION_DEG,
    SearchConfig, ThresholdDay,
};
