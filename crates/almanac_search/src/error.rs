//! Error types for event and phase searches.

use almanac_core::CoreError;
use almanac_time::TimeError;
use thiserror::Error;

/// Errors from a day-event or Moon-phase search.
///
/// A body that never crosses a threshold is not an error; see
/// [`crate::DayClassification`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Invalid body, location or instant.
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    /// Calendar or time-zone conversion failed.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// A [`crate::SearchConfig`] field is out of range.
    #[error("invalid search config: {0}")]
    InvalidConfig(&'static str),
}
