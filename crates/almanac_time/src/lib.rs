//! Time and frame utilities for the almanac engine.
//!
//! This crate provides:
//! - Julian Date ↔ calendar conversions (Gregorian/Julian switch at 1582-10-15)
//! - Julian centuries since J2000.0 and day numbers for the element tables
//! - Mean sidereal time from the Sun's mean longitude
//! - Zoned instant ↔ UT Julian Date conversion and local-day boundaries
//!
//! Units: Julian Dates are UT days, angles at this API are degrees unless
//! the function name says otherwise, sidereal time is offered in both
//! degrees and hours.

pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use error::TimeError;
pub use instant::{
    datetime_from_jd, jd_from_datetime, local_day_bounds, local_midnight, local_noon,
    resolve_local,
};
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, day_number,
    jd_to_calendar, julian_century, to_julian_day,
};
pub use sidereal::{
    gmst_deg, local_sidereal_time_deg, local_sidereal_time_hours, mean_sun_longitude_deg,
    ut_hours,
};
