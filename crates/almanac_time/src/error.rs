//! Error types for calendar and time-scale conversions.

use thiserror::Error;

/// Errors from Julian Day conversion or local-time resolution.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Calendar fields out of range, or a date inside the 1582 Gregorian gap.
    #[error("invalid date: {0}")]
    InvalidDate(&'static str),
    /// A Julian Day was NaN or infinite.
    #[error("Julian Day must be finite")]
    NonFiniteJulianDay,
    /// A Julian Day cannot be represented as a `chrono` timestamp.
    #[error("Julian Day {0} is outside the representable timestamp range")]
    OutOfRange(f64),
    /// A local wall-clock time has no mapping in the time zone.
    #[error("local time {0} cannot be resolved in the time zone")]
    LocalTimeUnresolved(String),
}
