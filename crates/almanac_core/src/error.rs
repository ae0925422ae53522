//! Error types for the position model.

use almanac_time::TimeError;
use thiserror::Error;

/// Core engine errors.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum CoreError {
    /// Latitude/longitude outside the valid range or not finite.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// A body name that the model has no elements for.
    #[error("unsupported body: {0}")]
    UnsupportedBody(String),
    /// The evaluation instant is NaN or infinite.
    #[error("instant must be a finite Julian Day")]
    InvalidInstant,
    /// Error from time conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}
