//! Rise, set, twilight and transit search over a local calendar day.
//!
//! The body's apparent elevation is sampled every hour from local midnight
//! (through the following day too when transit and up time are wanted).
//! For each hour where `elevation − level` changes sign, a linear guess of
//! the crossing minute is refined by walking one minute at a time until the
//! sign flips again; whichever of the two straddling minutes is closer to
//! the level is the event.
//!
//! Transit is detected where the azimuth moves from the eastern half of the
//! sky, [0°, 180°), into the western half, [180°, 360°), between two hourly
//! samples. The elevation maximum is then hill-climbed with a halving step.
//!
//! A body that rises and sets inside the same clock hour is not seen by the
//! hourly scan. At most one rising and one descending crossing per
//! threshold are kept for a day.

use almanac_core::{Body, DAY_EVENT_LATITUDE_LIMIT_DEG, GeoCoordinate, position};
use almanac_time::{SECONDS_PER_DAY, datetime_from_jd, jd_from_datetime, local_day_bounds};
use chrono::{NaiveDate, TimeDelta};
use chrono_tz::Tz;
use log::{debug, trace};

use crate::error::SearchError;
use crate::riseset_types::{
    BodyDay, DayClassification, DayEvent, Direction, EventThreshold, SearchConfig, ThresholdDay,
};

const HOUR_DAYS: f64 = 1.0 / 24.0;
const MINUTE_DAYS: f64 = 1.0 / 1440.0;

/// Hourly sample used to classify a day when no transit is found.
const NOON_SAMPLE_INDEX: usize = 12;

#[derive(Debug, Clone, Copy)]
struct Sample {
    jd: f64,
    azimuth_deg: f64,
    elevation_deg: f64,
}

/// A refined threshold crossing.
///
/// `sample` is the straddling minute closer to the level and `other` the
/// one on the far side. `jd` is the crossing instant interpolated between
/// them; it decides which calendar day the event belongs to.
#[derive(Debug, Clone, Copy)]
struct Crossing {
    sample: Sample,
    other: Sample,
    jd: f64,
    direction: Direction,
}

impl Crossing {
    /// The reported minute, kept on the same side of `[start, end)` as the
    /// interpolated instant.
    fn reported(&self, jd_start: f64, jd_end: f64) -> &Sample {
        if (jd_start..jd_end).contains(&self.sample.jd) {
            &self.sample
        } else {
            &self.other
        }
    }
}

struct Sampler {
    body: Body,
    location: GeoCoordinate,
}

impl Sampler {
    fn at(&self, jd: f64) -> Result<Sample, SearchError> {
        let p = position(self.body, &self.location, jd)?;
        Ok(Sample {
            jd,
            azimuth_deg: p.azimuth_deg,
            elevation_deg: p.elevation_deg,
        })
    }
}

fn is_above(elevation_deg: f64, level_deg: f64) -> bool {
    elevation_deg >= level_deg
}

/// Refine a crossing of `level` known to lie between two hourly samples.
///
/// Returns the closer straddling minute, the other one, and the
/// interpolated crossing instant. If the walk runs out of steps the last
/// minute reached stands for all three.
fn refine_crossing(
    sampler: &Sampler,
    before: &Sample,
    after: &Sample,
    level: f64,
    max_steps: u32,
) -> Result<(Sample, Sample, f64), SearchError> {
    let frac = ((level - before.elevation_deg) / (after.elevation_deg - before.elevation_deg))
        .clamp(0.0, 1.0);
    let guess_minutes = (frac * 60.0).round();
    let start_side = is_above(before.elevation_deg, level);

    let mut current = sampler.at(before.jd + guess_minutes * MINUTE_DAYS)?;
    // Still on the starting side: the crossing is later.
    let step = if is_above(current.elevation_deg, level) == start_side {
        MINUTE_DAYS
    } else {
        -MINUTE_DAYS
    };

    for _ in 0..max_steps {
        let next = sampler.at(current.jd + step)?;
        if is_above(next.elevation_deg, level) != is_above(current.elevation_deg, level) {
            let current_off = (current.elevation_deg - level).abs();
            let next_off = (next.elevation_deg - level).abs();
            let frac = current_off / (current_off + next_off);
            let jd = current.jd + (next.jd - current.jd) * frac;
            return Ok(if current_off <= next_off {
                (current, next, jd)
            } else {
                (next, current, jd)
            });
        }
        current = next;
    }
    Ok((current, current, current.jd))
}

/// Every crossing of `level` in the sampled window, in time order.
fn scan_crossings(
    sampler: &Sampler,
    samples: &[Sample],
    level: f64,
    config: &SearchConfig,
) -> Result<Vec<Crossing>, SearchError> {
    let mut crossings = Vec::new();
    for pair in samples.windows(2) {
        let (before, after) = (&pair[0], &pair[1]);
        if is_above(before.elevation_deg, level) == is_above(after.elevation_deg, level) {
            continue;
        }
        let (sample, other, jd) =
            refine_crossing(sampler, before, after, level, config.max_minute_steps)?;
        let direction = if after.elevation_deg > before.elevation_deg {
            Direction::Rising
        } else {
            Direction::Descending
        };
        trace!(
            "{:?} through {level}° at JD {:.5}, el {:.3}°",
            direction,
            jd,
            sample.elevation_deg
        );
        crossings.push(Crossing {
            sample,
            other,
            jd,
            direction,
        });
    }
    Ok(crossings)
}

/// Hill-climb to the elevation maximum near an east→west azimuth change.
fn refine_transit(
    sampler: &Sampler,
    before: &Sample,
    after: &Sample,
    config: &SearchConfig,
) -> Result<Sample, SearchError> {
    let mut best = sampler.at(0.5 * (before.jd + after.jd))?;
    let mut step_s = config.transit_initial_step_s;
    let mut depth = 0;
    while depth < config.transit_max_depth && step_s >= config.transit_min_step_s {
        let centre = best.jd;
        let step = step_s / SECONDS_PER_DAY;
        for jd in [centre - step, centre + step] {
            let s = sampler.at(jd)?;
            if s.elevation_deg > best.elevation_deg {
                best = s;
            }
        }
        step_s *= 0.5;
        depth += 1;
    }
    trace!(
        "transit at JD {:.5}, el {:.3}°, after {depth} levels",
        best.jd, best.elevation_deg
    );
    Ok(best)
}

fn first_transit_in(
    sampler: &Sampler,
    samples: &[Sample],
    jd_start: f64,
    jd_end: f64,
    config: &SearchConfig,
) -> Result<Option<Sample>, SearchError> {
    for pair in samples.windows(2) {
        let (before, after) = (&pair[0], &pair[1]);
        if before.azimuth_deg < 180.0 && after.azimuth_deg >= 180.0 {
            let t = refine_transit(sampler, before, after, config)?;
            if (jd_start..jd_end).contains(&t.jd) {
                return Ok(Some(t));
            }
        }
    }
    Ok(None)
}

fn day_event(
    threshold: EventThreshold,
    direction: Direction,
    sample: &Sample,
    tz: Tz,
) -> Result<DayEvent, SearchError> {
    Ok(DayEvent {
        threshold,
        direction,
        time: datetime_from_jd(sample.jd, tz)?,
        jd_ut: sample.jd,
        azimuth_deg: sample.azimuth_deg,
        elevation_deg: sample.elevation_deg,
    })
}

fn days_to_delta(days: f64) -> TimeDelta {
    TimeDelta::milliseconds((days * SECONDS_PER_DAY * 1000.0).round() as i64)
}

fn up_time(day: &ThresholdDay, window: &[Crossing]) -> Option<TimeDelta> {
    match &day.rising {
        Some(rise) => {
            let set = window
                .iter()
                .find(|c| c.direction == Direction::Descending && c.jd > rise.jd_ut);
            Some(match set {
                Some(c) => days_to_delta(c.sample.jd - rise.jd_ut),
                None => TimeDelta::hours(24),
            })
        }
        None => match day.classification {
            DayClassification::Risen => Some(TimeDelta::hours(24)),
            DayClassification::Set => Some(TimeDelta::zero()),
            DayClassification::Crossing => None,
        },
    }
}

/// Search one local calendar day for threshold crossings of `body`.
///
/// * `thresholds`: levels to search, in the order their events are
///   inserted before the stable time sort. [`EventThreshold::Transit`] in
///   this list is equivalent to `include_transit`.
/// * `include_transit`: also report the culmination and the up time, and
///   extend sampling to 48 h so a set after midnight is found.
///
/// The day runs from local midnight to the next local midnight in `tz`, so
/// DST days are 23 or 25 hours long. Latitude is clamped to
/// ±[`DAY_EVENT_LATITUDE_LIMIT_DEG`].
pub fn search_day(
    body: Body,
    location: &GeoCoordinate,
    date: NaiveDate,
    tz: Tz,
    thresholds: &[EventThreshold],
    include_transit: bool,
    config: &SearchConfig,
) -> Result<BodyDay, SearchError> {
    config.validate()?;
    let include_transit = include_transit || thresholds.contains(&EventThreshold::Transit);
    let sampler = Sampler {
        body,
        location: location.clamped(DAY_EVENT_LATITUDE_LIMIT_DEG),
    };

    let (start, end) = local_day_bounds(date, tz)?;
    let jd_start = jd_from_datetime(&start);
    let jd_end = jd_from_datetime(&end);
    let day_hours = ((jd_end - jd_start) * 24.0).round() as usize;
    let window_hours = if include_transit { day_hours + 24 } else { day_hours };
    debug!("searching {body} on {date} ({tz}): {day_hours} h day, {window_hours} h window");

    let samples = (0..=window_hours)
        .map(|h| sampler.at(jd_start + h as f64 * HOUR_DAYS))
        .collect::<Result<Vec<_>, _>>()?;

    let transit = first_transit_in(&sampler, &samples, jd_start, jd_end, config)?;
    let reference_elevation = match &transit {
        Some(t) => t.elevation_deg,
        None => samples[NOON_SAMPLE_INDEX].elevation_deg,
    };

    let in_day = |c: &&Crossing| (jd_start..jd_end).contains(&c.jd);
    let mut threshold_days = Vec::with_capacity(thresholds.len());
    let mut up = None;
    for &threshold in thresholds {
        let Some(level) = threshold.elevation_deg() else {
            continue;
        };
        let window = scan_crossings(&sampler, &samples, level, config)?;
        let rising = window
            .iter()
            .filter(in_day)
            .find(|c| c.direction == Direction::Rising)
            .map(|c| {
                let sample = c.reported(jd_start, jd_end);
                day_event(threshold, Direction::Rising, sample, tz)
            })
            .transpose()?;
        let descending = window
            .iter()
            .filter(in_day)
            .find(|c| c.direction == Direction::Descending)
            .map(|c| {
                let sample = c.reported(jd_start, jd_end);
                day_event(threshold, Direction::Descending, sample, tz)
            })
            .transpose()?;
        let classification = if rising.is_some() || descending.is_some() {
            DayClassification::Crossing
        } else if reference_elevation > level {
            DayClassification::Risen
        } else {
            DayClassification::Set
        };
        let day = ThresholdDay {
            threshold,
            rising,
            descending,
            classification,
        };
        if include_transit && threshold == EventThreshold::RiseSet {
            up = up_time(&day, &window);
        }
        threshold_days.push(day);
    }

    let transit = match (include_transit, transit) {
        (true, Some(t)) => Some(day_event(
            EventThreshold::Transit,
            Direction::Transit,
            &t,
            tz,
        )?),
        _ => None,
    };

    // Stable sort: equal times keep rising, transit, descending order.
    let mut events: Vec<DayEvent> = threshold_days
        .iter()
        .filter_map(|d| d.rising.clone())
        .collect();
    events.extend(transit.clone());
    events.extend(threshold_days.iter().filter_map(|d| d.descending.clone()));
    events.sort_by(|a, b| a.jd_ut.total_cmp(&b.jd_ut));

    debug!("{body} on {date}: {} events", events.len());
    Ok(BodyDay {
        body,
        date,
        thresholds: threshold_days,
        transit,
        up_time: up,
        events,
    })
}

/// Sunrise/sunset, all twilight bands, golden hour, solar noon and
/// daylight length.
pub fn sun_day(
    location: &GeoCoordinate,
    date: NaiveDate,
    tz: Tz,
    config: &SearchConfig,
) -> Result<BodyDay, SearchError> {
    search_day(
        Body::Sun,
        location,
        date,
        tz,
        &EventThreshold::SOLAR,
        true,
        config,
    )
}

/// Rise, set, transit and up time of any body.
pub fn body_day(
    body: Body,
    location: &GeoCoordinate,
    date: NaiveDate,
    tz: Tz,
    config: &SearchConfig,
) -> Result<BodyDay, SearchError> {
    search_day(
        body,
        location,
        date,
        tz,
        &[EventThreshold::RiseSet],
        true,
        config,
    )
}
