//! Principal Moon phases, phase fraction and illumination.
//!
//! Phase instants come from the mean lunation formula plus periodic
//! corrections (Meeus, *Astronomical Algorithms*, ch. 49, in the
//! 1900-epoch form). Each phase is a direct evaluation; there is no
//! iteration. Accuracy is a few minutes against published tables.

use std::collections::VecDeque;
use std::f64::consts::TAU;
use std::sync::Arc;

use almanac_time::{TimeError, datetime_from_jd, jd_from_datetime, local_noon};
use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;
use log::debug;

use crate::error::SearchError;
use crate::lunar_phase_types::{MoonPhase, MoonPhaseEvent};

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_68;

/// Fallback quarter-lunation length used when a year's event list has no
/// phase on one side of the requested noon.
pub const QUARTER_LUNATION_MS: i64 = 637_860_715;

/// Julian Date of the mean new Moon with lunation index 0 (1900 Jan 0.76).
const LUNATION_EPOCH_JD: f64 = 2_415_020.759_33;

const LUNATIONS_PER_YEAR: f64 = 12.3685;

/// Upper bound on lunations examined for one calendar year.
const MAX_LUNATIONS_PER_YEAR: i64 = 20;

fn sind(deg: f64) -> f64 {
    deg.to_radians().sin()
}

fn cosd(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// Julian Date of `phase` in lunation `k` (k = 0 is the first new Moon of
/// 1900).
pub fn true_phase(k: f64, phase: MoonPhase) -> f64 {
    let k = k + phase.fraction();
    let t = k / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;

    let mut jd = LUNATION_EPOCH_JD + SYNODIC_MONTH_DAYS * k + 0.000_117_8 * t2
        - 0.000_000_155 * t3
        + 0.000_33 * sind(166.56 + 132.87 * t - 0.009_173 * t2);

    // Sun's mean anomaly, Moon's mean anomaly, Moon's argument of latitude.
    let m = 359.2242 + 29.105_356_08 * k - 0.000_033_3 * t2 - 0.000_003_47 * t3;
    let mp = 306.0253 + 385.816_918_06 * k + 0.010_730_6 * t2 + 0.000_012_36 * t3;
    let f = 21.2964 + 390.670_506_46 * k - 0.001_652_8 * t2 - 0.000_002_39 * t3;

    match phase {
        MoonPhase::New | MoonPhase::Full => {
            jd += (0.1734 - 0.000_393 * t) * sind(m) + 0.0021 * sind(2.0 * m)
                - 0.4068 * sind(mp)
                + 0.0161 * sind(2.0 * mp)
                - 0.0004 * sind(3.0 * mp)
                + 0.0104 * sind(2.0 * f)
                - 0.0051 * sind(m + mp)
                - 0.0074 * sind(m - mp)
                + 0.0004 * sind(2.0 * f + m)
                - 0.0004 * sind(2.0 * f - m)
                - 0.0006 * sind(2.0 * f + mp)
                + 0.0010 * sind(2.0 * f - mp)
                + 0.0005 * sind(m + 2.0 * mp);
        }
        MoonPhase::FirstQuarter | MoonPhase::LastQuarter => {
            jd += (0.1721 - 0.0004 * t) * sind(m) + 0.0021 * sind(2.0 * m)
                - 0.6280 * sind(mp)
                + 0.0089 * sind(2.0 * mp)
                - 0.0004 * sind(3.0 * mp)
                + 0.0079 * sind(2.0 * f)
                - 0.0119 * sind(m + mp)
                - 0.0047 * sind(m - mp)
                + 0.0003 * sind(2.0 * f + m)
                - 0.0004 * sind(2.0 * f - m)
                - 0.0006 * sind(2.0 * f + mp)
                + 0.0021 * sind(2.0 * f - mp)
                + 0.0003 * sind(m + 2.0 * mp)
                + 0.0004 * sind(m - 2.0 * mp)
                - 0.0003 * sind(2.0 * m + mp);
            let w = 0.0028 - 0.0004 * cosd(m) + 0.0003 * cosd(mp);
            if phase == MoonPhase::FirstQuarter {
                jd += w;
            } else {
                jd -= w;
            }
        }
    }
    jd
}

/// Every principal phase whose local time in `tz` falls in `year`, in time
/// order.
pub fn year_events(year: i32, tz: Tz) -> Result<Vec<MoonPhaseEvent>, SearchError> {
    if NaiveDate::from_ymd_opt(year, 1, 1).is_none() {
        return Err(TimeError::InvalidDate("year outside the supported calendar range").into());
    }
    let k0 = ((f64::from(year) - 1900.0) * LUNATIONS_PER_YEAR).floor() as i64 - 2;
    let mut events = Vec::with_capacity(52);
    for k in k0..k0 + MAX_LUNATIONS_PER_YEAR {
        let mut after = 0;
        for phase in MoonPhase::ALL {
            let jd_ut = true_phase(k as f64, phase);
            let time = datetime_from_jd(jd_ut, tz)?;
            match time.year().cmp(&year) {
                std::cmp::Ordering::Equal => events.push(MoonPhaseEvent { phase, jd_ut, time }),
                std::cmp::Ordering::Greater => after += 1,
                std::cmp::Ordering::Less => {}
            }
        }
        if after == MoonPhase::ALL.len() {
            break;
        }
    }
    debug!("{} Moon phases in {year} ({tz})", events.len());
    Ok(events)
}

/// Caller-owned cache of [`year_events`] keyed by (year, time zone).
///
/// Least recently used entries are evicted once `capacity` is reached.
#[derive(Debug, Clone)]
pub struct MoonPhaseCache {
    capacity: usize,
    entries: VecDeque<(i32, Tz, Arc<[MoonPhaseEvent]>)>,
}

impl Default for MoonPhaseCache {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl MoonPhaseCache {
    /// Default number of (year, zone) entries kept.
    pub const DEFAULT_CAPACITY: usize = 4;

    /// Create an empty cache. A zero capacity is treated as one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Phase events for `year` in `tz`, computed on first use.
    pub fn year_events(
        &mut self,
        year: i32,
        tz: Tz,
    ) -> Result<Arc<[MoonPhaseEvent]>, SearchError> {
        if let Some(idx) = self
            .entries
            .iter()
            .position(|(y, z, _)| *y == year && *z == tz)
        {
            if let Some(entry) = self.entries.remove(idx) {
                let events = Arc::clone(&entry.2);
                self.entries.push_front(entry);
                return Ok(events);
            }
        }
        debug!("moon phase cache miss for {year} ({tz})");
        let events: Arc<[MoonPhaseEvent]> = year_events(year, tz)?.into();
        if self.entries.len() >= self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front((year, tz, Arc::clone(&events)));
        Ok(events)
    }
}

/// Interpolate the phase fraction between two bracketing events.
fn interpolate(base_fraction: f64, jd_before: f64, jd_after: f64, jd: f64) -> f64 {
    let p = (base_fraction + 0.25 * (jd - jd_before) / (jd_after - jd_before)).rem_euclid(1.0);
    if p >= 1.0 { 0.0 } else { p }
}

/// Phase fraction at local noon of `date`, in [0, 1).
///
/// Interpolated linearly between the last principal phase at or before
/// noon and the first one after it. At a year boundary, where one side is
/// missing from the year's list, a fixed quarter-lunation length of
/// [`QUARTER_LUNATION_MS`] stands in for it.
pub fn noon_phase(
    date: NaiveDate,
    tz: Tz,
    cache: &mut MoonPhaseCache,
) -> Result<f64, SearchError> {
    let noon = jd_from_datetime(&local_noon(date, tz)?);
    let events = cache.year_events(date.year(), tz)?;
    let quarter_days = QUARTER_LUNATION_MS as f64 / 86_400_000.0;

    let prev = events.iter().rev().find(|e| e.jd_ut <= noon);
    let next = events.iter().find(|e| e.jd_ut > noon);
    let phase = match (prev, next) {
        (Some(p), Some(n)) => interpolate(p.phase.fraction(), p.jd_ut, n.jd_ut, noon),
        (Some(p), None) => interpolate(p.phase.fraction(), p.jd_ut, p.jd_ut + quarter_days, noon),
        (None, Some(n)) => interpolate(
            n.phase.fraction() - 0.25,
            n.jd_ut - quarter_days,
            n.jd_ut,
            noon,
        ),
        (None, None) => phase_at(noon),
    };
    Ok(phase)
}

/// Phase fraction at any UT Julian Date, in [0, 1). 0 = new, 0.5 = full.
///
/// Brackets `jd_ut` with the principal phases of neighbouring lunations and
/// interpolates linearly between them.
pub fn phase_at(jd_ut: f64) -> f64 {
    let k = ((jd_ut - LUNATION_EPOCH_JD) / SYNODIC_MONTH_DAYS).floor();
    let mut prev: Option<(f64, f64)> = None;
    for dk in -1..=1 {
        for phase in MoonPhase::ALL {
            let jd = true_phase(k + dk as f64, phase);
            if jd <= jd_ut {
                prev = Some((phase.fraction(), jd));
            } else if let Some((fraction, before)) = prev {
                return interpolate(fraction, before, jd, jd_ut);
            }
        }
    }
    ((jd_ut - LUNATION_EPOCH_JD) / SYNODIC_MONTH_DAYS).rem_euclid(1.0)
}

/// Illuminated fraction of the disk for a phase fraction, in [0, 1].
pub fn illuminated_fraction(phase: f64) -> f64 {
    (1.0 - (phase * TAU).cos()) / 2.0
}

/// Illuminated percentage of the disk for a phase fraction, rounded to the
/// nearest integer.
pub fn illuminated_percent(phase: f64) -> u8 {
    (illuminated_fraction(phase) * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::UTC;

    #[test]
    fn first_lunation_of_1900() {
        // New Moon 1900-01-01 13:50 UT.
        let jd = true_phase(0.0, MoonPhase::New);
        assert!((jd - 2_415_021.077).abs() < 0.01, "jd = {jd}");
    }

    #[test]
    fn phases_are_ordered_within_lunation() {
        for k in [0.0, 500.0, 1490.0, 1600.0] {
            let jds: Vec<f64> = MoonPhase::ALL.iter().map(|&p| true_phase(k, p)).collect();
            assert!(jds.windows(2).all(|w| w[1] - w[0] > 6.0 && w[1] - w[0] < 9.0));
        }
    }

    #[test]
    fn events_cover_the_year() {
        let events = year_events(2024, UTC).unwrap();
        assert_eq!(events.len(), 50);
        assert!(events.iter().all(|e| e.time.year() == 2024));
        assert!(events.windows(2).all(|w| w[0].jd_ut < w[1].jd_ut));
    }

    #[test]
    fn extreme_years_are_rejected() {
        for year in [i32::MIN, i32::MIN + 1, i32::MAX] {
            assert!(
                matches!(year_events(year, UTC), Err(SearchError::Time(_))),
                "year {year} accepted"
            );
        }
    }

    #[test]
    fn cache_hits_and_evicts() {
        let mut cache = MoonPhaseCache::new(2);
        let a = cache.year_events(2020, UTC).unwrap();
        let again = cache.year_events(2020, UTC).unwrap();
        assert!(Arc::ptr_eq(&a, &again));
        cache.year_events(2021, UTC).unwrap();
        cache.year_events(2022, UTC).unwrap();
        assert_eq!(cache.len(), 2);
        // 2020 was least recently used and is gone.
        let fresh = cache.year_events(2020, UTC).unwrap();
        assert!(!Arc::ptr_eq(&a, &fresh));
        assert_eq!(&a[..], &fresh[..]);
    }

    #[test]
    fn zones_are_cached_separately() {
        let mut cache = MoonPhaseCache::default();
        cache.year_events(2020, UTC).unwrap();
        cache
            .year_events(2020, chrono_tz::Pacific::Kiritimati)
            .unwrap();
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn zero_capacity_holds_one() {
        let mut cache = MoonPhaseCache::new(0);
        cache.year_events(2020, UTC).unwrap();
        assert_eq!(cache.capacity(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn phase_at_matches_events() {
        for e in year_events(2020, UTC).unwrap() {
            let p = phase_at(e.jd_ut + 1e-6);
            let diff = (p - e.phase.fraction()).abs();
            assert!(diff.min(1.0 - diff) < 1e-3, "{} -> {p}", e.phase);
        }
    }

    #[test]
    fn noon_phase_near_full_moon() {
        // Full Moon 2020-01-10 19:21 UT.
        let mut cache = MoonPhaseCache::default();
        let date = NaiveDate::from_ymd_opt(2020, 1, 10).unwrap();
        let p = noon_phase(date, UTC, &mut cache).unwrap();
        assert!(p > 0.48 && p < 0.5, "phase = {p}");
        assert_eq!(illuminated_percent(p), 100);
    }

    #[test]
    fn noon_phase_at_year_edges() {
        let mut cache = MoonPhaseCache::default();
        for (y, m, d) in [(2020, 1, 1), (2020, 12, 31), (2021, 1, 1)] {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            let p = noon_phase(date, UTC, &mut cache).unwrap();
            let direct = phase_at(jd_from_datetime(&local_noon(date, UTC).unwrap()));
            let diff = (p - direct).abs();
            assert!(diff.min(1.0 - diff) < 0.01, "{date}: {p} vs {direct}");
        }
    }

    #[test]
    fn illumination_extremes() {
        assert_eq!(illuminated_percent(0.0), 0);
        assert_eq!(illuminated_percent(0.5), 100);
        assert_eq!(illuminated_percent(0.25), 50);
        assert_eq!(illuminated_percent(0.75), 50);
        assert_eq!(illuminated_percent(0.999_999), 0);
    }
}
