//! Conversion between zoned wall-clock instants and UT Julian Dates.
//!
//! All computation happens in UT. The observer's [`Tz`] is only used to
//! find local day boundaries and to present results; DST transitions are
//! resolved by the zone database, not by the engine.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD};

const MILLIS_PER_DAY: f64 = SECONDS_PER_DAY * 1000.0;

/// UT Julian Date of any zoned instant.
pub fn jd_from_datetime<Z: TimeZone>(instant: &DateTime<Z>) -> f64 {
    instant.timestamp_millis() as f64 / MILLIS_PER_DAY + UNIX_EPOCH_JD
}

/// Zoned instant for a UT Julian Date, rounded to the nearest millisecond.
pub fn datetime_from_jd(jd_ut: f64, tz: Tz) -> Result<DateTime<Tz>, TimeError> {
    if !jd_ut.is_finite() {
        return Err(TimeError::NonFiniteJulianDay);
    }
    let millis = ((jd_ut - UNIX_EPOCH_JD) * MILLIS_PER_DAY).round();
    if millis.abs() > i64::MAX as f64 / 2.0 {
        return Err(TimeError::OutOfRange(jd_ut));
    }
    DateTime::from_timestamp_millis(millis as i64)
        .map(|utc| utc.with_timezone(&tz))
        .ok_or(TimeError::OutOfRange(jd_ut))
}

/// Resolve a local wall-clock time in `tz`.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant. Times
/// inside a DST gap resolve to the same wall time one hour later.
pub fn resolve_local(naive: NaiveDateTime, tz: Tz) -> Result<DateTime<Tz>, TimeError> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(t) => Ok(t),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .ok_or_else(|| TimeError::LocalTimeUnresolved(naive.to_string())),
    }
}

/// First instant of a local calendar day.
pub fn local_midnight(date: NaiveDate, tz: Tz) -> Result<DateTime<Tz>, TimeError> {
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or(TimeError::InvalidDate("midnight is not a valid time"))?;
    resolve_local(midnight, tz)
}

/// Local clock noon of a calendar day.
pub fn local_noon(date: NaiveDate, tz: Tz) -> Result<DateTime<Tz>, TimeError> {
    let noon = date
        .and_hms_opt(12, 0, 0)
        .ok_or(TimeError::InvalidDate("noon is not a valid time"))?;
    resolve_local(noon, tz)
}

/// Local-day window `[start, end)` as zoned instants.
///
/// `end` is the following local midnight, so the window is 23 or 25 hours
/// long on DST transition days.
pub fn local_day_bounds(
    date: NaiveDate,
    tz: Tz,
) -> Result<(DateTime<Tz>, DateTime<Tz>), TimeError> {
    let next = date
        .succ_opt()
        .ok_or(TimeError::InvalidDate("date has no successor"))?;
    Ok((local_midnight(date, tz)?, local_midnight(next, tz)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike, Utc};
    use chrono_tz::{Australia::Brisbane, Europe::London, UTC};

    #[test]
    fn unix_epoch_is_jd_2440587_5() {
        let t = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(jd_from_datetime(&t), UNIX_EPOCH_JD);
    }

    #[test]
    fn roundtrip_exact_to_the_second() {
        let t = Brisbane.with_ymd_and_hms(2020, 1, 10, 5, 1, 37).unwrap();
        let jd = jd_from_datetime(&t);
        let back = datetime_from_jd(jd, Brisbane).unwrap();
        assert_eq!(back.timestamp(), t.timestamp());
        assert_eq!((back.hour(), back.minute(), back.second()), (5, 1, 37));
    }

    #[test]
    fn zone_does_not_change_jd() {
        let utc = Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap();
        let london = utc.with_timezone(&London);
        assert_eq!(jd_from_datetime(&utc), jd_from_datetime(&london));
    }

    #[test]
    fn non_finite_rejected() {
        assert!(matches!(
            datetime_from_jd(f64::NAN, UTC),
            Err(TimeError::NonFiniteJulianDay)
        ));
        assert!(matches!(
            datetime_from_jd(1.0e300, UTC),
            Err(TimeError::OutOfRange(_))
        ));
    }

    #[test]
    fn dst_day_lengths() {
        // Spring forward: 2020-03-29 is 23 h long in London.
        let spring = NaiveDate::from_ymd_opt(2020, 3, 29).unwrap();
        let (s, e) = local_day_bounds(spring, London).unwrap();
        assert_eq!((e - s).num_hours(), 23);

        // Fall back: 2020-10-25 is 25 h long.
        let autumn = NaiveDate::from_ymd_opt(2020, 10, 25).unwrap();
        let (s, e) = local_day_bounds(autumn, London).unwrap();
        assert_eq!((e - s).num_hours(), 25);
    }

    #[test]
    fn ambiguous_resolves_to_earliest() {
        let naive = NaiveDate::from_ymd_opt(2020, 10, 25)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap();
        let t = resolve_local(naive, London).unwrap();
        // 01:30 BST = 00:30 UTC
        assert_eq!(t.with_timezone(&Utc).hour(), 0);
    }

    #[test]
    fn gap_moves_forward_one_hour() {
        let naive = NaiveDate::from_ymd_opt(2020, 3, 29)
            .unwrap()
            .and_hms_opt(1, 30, 0)
            .unwrap();
        let t = resolve_local(naive, London).unwrap();
        assert_eq!((t.hour(), t.minute()), (2, 30));
    }

    #[test]
    fn local_noon_in_zone() {
        let date = NaiveDate::from_ymd_opt(2020, 1, 10).unwrap();
        let noon = local_noon(date, Brisbane).unwrap();
        assert_eq!(noon.day(), 10);
        // Brisbane is UTC+10 without DST.
        assert_eq!(noon.with_timezone(&Utc).hour(), 2);
    }
}
