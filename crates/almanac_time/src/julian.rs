//! Julian Date ↔ calendar conversion.
//!
//! Meeus, *Astronomical Algorithms*, ch. 7. Dates on or after 1582-10-15
//! are Gregorian, dates on or before 1582-10-04 are Julian; the ten days in
//! between never existed and are rejected.

use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00 UT).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Convert a calendar date with fractional day to a Julian Date.
///
/// `day` carries the time of day as a fraction (`15.5` is noon on the 15th).
/// The calendar is chosen by date; callers wanting validation of the
/// Gregorian gap should use [`to_julian_day`].
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year as f64 - 1.0, month as f64 + 12.0)
    } else {
        (year as f64, month as f64)
    };
    let gregorian = (year, month, day.floor() as u32) >= (1582, 10, 15);
    let b = if gregorian {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Convert calendar date and UT clock time to a Julian Date.
///
/// Rejects out-of-range fields and the nonexistent days 1582-10-05..14.
pub fn to_julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    min: u32,
    sec: f64,
) -> Result<f64, TimeError> {
    if !(1..=12).contains(&month) {
        return Err(TimeError::InvalidDate("month must be in 1..=12"));
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(TimeError::InvalidDate("day out of range for month"));
    }
    if hour > 23 || min > 59 || !(0.0..60.0).contains(&sec) {
        return Err(TimeError::InvalidDate("time of day out of range"));
    }
    if year == 1582 && month == 10 && (5..=14).contains(&day) {
        return Err(TimeError::InvalidDate(
            "1582-10-05..14 do not exist in the Gregorian reform",
        ));
    }
    let day_frac =
        day as f64 + hour as f64 / 24.0 + min as f64 / 1440.0 + sec / SECONDS_PER_DAY;
    Ok(calendar_to_jd(year, month, day_frac))
}

/// Convert a Julian Date to `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;
    let a = if z < 2_299_161.0 {
        z
    } else {
        let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + alpha - (alpha / 4.0).floor()
    };
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Julian centuries since J2000.0: `T = (JD − 2451545.0) / 36525`.
pub fn julian_century(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Days since 1999-12-31 00:00 UT, the epoch of the orbital element tables.
///
/// `d = JD − 2451543.5`; d = 1.0 at 2000-01-01 00:00 UT.
pub fn day_number(jd: f64) -> f64 {
    jd - 2_451_543.5
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = if year > 1582 {
                (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
            } else {
                year.rem_euclid(4) == 0
            };
            if leap { 29 } else { 28 }
        }
        _ => 31,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        let jd = to_julian_day(2000, 1, 1, 12, 0, 0.0).unwrap();
        assert!((jd - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn meeus_example_7a_sputnik() {
        // 1957-10-04.81
        let jd = calendar_to_jd(1957, 10, 4.81);
        assert!((jd - 2_436_116.31).abs() < 1e-6, "jd = {jd}");
    }

    #[test]
    fn meeus_example_7b_julian_calendar() {
        // 333-01-27 12:00 (Julian calendar)
        let jd = to_julian_day(333, 1, 27, 12, 0, 0.0).unwrap();
        assert!((jd - 1_842_713.0).abs() < 1e-9, "jd = {jd}");
    }

    #[test]
    fn gregorian_switch_is_contiguous() {
        let last_julian = to_julian_day(1582, 10, 4, 0, 0, 0.0).unwrap();
        let first_gregorian = to_julian_day(1582, 10, 15, 0, 0, 0.0).unwrap();
        assert!((first_gregorian - last_julian - 1.0).abs() < 1e-9);
    }

    #[test]
    fn gregorian_gap_rejected() {
        for day in 5..=14 {
            assert!(matches!(
                to_julian_day(1582, 10, day, 0, 0, 0.0),
                Err(TimeError::InvalidDate(_))
            ));
        }
    }

    #[test]
    fn bad_fields_rejected() {
        assert!(to_julian_day(2021, 13, 1, 0, 0, 0.0).is_err());
        assert!(to_julian_day(2021, 2, 29, 0, 0, 0.0).is_err());
        assert!(to_julian_day(2020, 2, 29, 0, 0, 0.0).is_ok());
        assert!(to_julian_day(2020, 1, 1, 24, 0, 0.0).is_err());
        assert!(to_julian_day(2020, 1, 1, 0, 0, 60.0).is_err());
    }

    #[test]
    fn calendar_inverse() {
        let jd = to_julian_day(2020, 1, 10, 18, 30, 0.0).unwrap();
        let (y, m, d) = jd_to_calendar(jd);
        assert_eq!((y, m), (2020, 1));
        assert!((d - (10.0 + 18.5 / 24.0)).abs() < 1e-8, "day = {d}");

        let (y, m, d) = jd_to_calendar(1_842_713.0);
        assert_eq!((y, m), (333, 1));
        assert!((d - 27.5).abs() < 1e-9);
    }

    #[test]
    fn century_and_day_number() {
        assert_eq!(julian_century(J2000_JD), 0.0);
        assert!((julian_century(J2000_JD + DAYS_PER_CENTURY) - 1.0).abs() < 1e-15);
        let jd = to_julian_day(2000, 1, 1, 0, 0, 0.0).unwrap();
        assert!((day_number(jd) - 1.0).abs() < 1e-12);
    }
}
