//! Types for rise/set/transit/twilight day searches.
//!
//! Thresholds are compared against apparent (refraction-corrected)
//! elevation of the body's centre.

use std::fmt::{Display, Formatter};

use almanac_core::Body;
use chrono::{DateTime, NaiveDate, TimeDelta};
use chrono_tz::Tz;

use crate::error::SearchError;

/// Horizon used for sunrise/sunset and for rising/setting of other bodies.
pub const RISESET_ELEVATION_DEG: f64 = -0.833;

/// Elevation levels a day search can look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventThreshold {
    /// Rise/set: −0.833° (34′ refraction + 16′ solar semidiameter).
    RiseSet,
    /// Civil twilight, −6°.
    Civil,
    /// Nautical twilight, −12°.
    Nautical,
    /// Astronomical twilight, −18°.
    Astronomical,
    /// Golden hour: the band between the horizon and +6°. Crossings are
    /// reported at the +6° edge; the lower edge is [`EventThreshold::RiseSet`].
    GoldenHour,
    /// Culmination. A local maximum rather than a level crossing.
    Transit,
}

impl EventThreshold {
    /// Every threshold the Sun is searched for by [`crate::sun_day`], in
    /// event insertion order.
    pub const SOLAR: [EventThreshold; 5] = [
        Self::RiseSet,
        Self::Civil,
        Self::Nautical,
        Self::Astronomical,
        Self::GoldenHour,
    ];

    /// Apparent elevation in degrees whose crossing this threshold reports.
    /// `None` for [`EventThreshold::Transit`].
    pub const fn elevation_deg(self) -> Option<f64> {
        match self {
            Self::RiseSet => Some(RISESET_ELEVATION_DEG),
            Self::Civil => Some(-6.0),
            Self::Nautical => Some(-12.0),
            Self::Astronomical => Some(-18.0),
            Self::GoldenHour => Some(6.0),
            Self::Transit => None,
        }
    }

    /// `(lower, upper)` elevation band for thresholds that describe an
    /// interval rather than a single level.
    pub const fn band(self) -> Option<(f64, f64)> {
        match self {
            Self::GoldenHour => Some((RISESET_ELEVATION_DEG, 6.0)),
            _ => None,
        }
    }

    /// Short lower-case name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::RiseSet => "riseset",
            Self::Civil => "civil",
            Self::Nautical => "nautical",
            Self::Astronomical => "astronomical",
            Self::GoldenHour => "golden-hour",
            Self::Transit => "transit",
        }
    }
}

impl Display for EventThreshold {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which way a body moves through a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Elevation increasing through the level.
    Rising,
    /// Elevation decreasing through the level.
    Descending,
    /// Upper culmination.
    Transit,
}

/// A single event on a calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayEvent {
    pub threshold: EventThreshold,
    pub direction: Direction,
    /// Event time in the observer's zone, whole minutes for crossings.
    pub time: DateTime<Tz>,
    /// Event time as a UT Julian Date.
    pub jd_ut: f64,
    /// Azimuth at the event in degrees, [0, 360).
    pub azimuth_deg: f64,
    /// Apparent elevation at the event in degrees.
    pub elevation_deg: f64,
}

/// Outcome of one threshold over a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayClassification {
    /// At least one crossing falls inside the day.
    Crossing,
    /// No crossing; above the threshold all day.
    Risen,
    /// No crossing; below the threshold all day.
    Set,
}

/// Events for one threshold over a day.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdDay {
    pub threshold: EventThreshold,
    /// First upward crossing in the day.
    pub rising: Option<DayEvent>,
    /// First downward crossing in the day.
    pub descending: Option<DayEvent>,
    pub classification: DayClassification,
}

/// Everything found for one body on one calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyDay {
    pub body: Body,
    pub date: NaiveDate,
    /// Per-threshold results in request order.
    pub thresholds: Vec<ThresholdDay>,
    /// Upper culmination inside the day, when requested and found.
    pub transit: Option<DayEvent>,
    /// Time from the day's first rise to the following set.
    ///
    /// 24 h when the body never sets after rising within the search
    /// window, or never crosses and is up all day; zero when it never
    /// crosses and stays down; `None` when the body sets during the day
    /// without having risen in it, or when [`EventThreshold::RiseSet`]
    /// was not requested.
    pub up_time: Option<TimeDelta>,
    /// All events sorted by time.
    pub events: Vec<DayEvent>,
}

impl BodyDay {
    /// Result for a specific threshold, if it was requested.
    pub fn threshold(&self, threshold: EventThreshold) -> Option<&ThresholdDay> {
        self.thresholds.iter().find(|t| t.threshold == threshold)
    }

    /// Classification of the rise/set horizon, if it was requested.
    pub fn classification(&self) -> Option<DayClassification> {
        self.threshold(EventThreshold::RiseSet)
            .map(|t| t.classification)
    }
}

/// Numerical caps for the day search.
///
/// Changing these changes output slightly; defaults reproduce the
/// reference behaviour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchConfig {
    /// Maximum one-minute steps when refining a crossing (default 60).
    pub max_minute_steps: u32,
    /// First step of the transit hill-climb in seconds (default 1800).
    pub transit_initial_step_s: f64,
    /// Transit refinement stops once the step drops below this (default 15 s).
    pub transit_min_step_s: f64,
    /// Maximum transit refinement levels (default 10).
    pub transit_max_depth: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_minute_steps: 60,
            transit_initial_step_s: 1800.0,
            transit_min_step_s: 15.0,
            transit_max_depth: 10,
        }
    }
}

impl SearchConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_minute_steps == 0 {
            return Err(SearchError::InvalidConfig("max_minute_steps must be > 0"));
        }
        if !self.transit_initial_step_s.is_finite() || self.transit_initial_step_s <= 0.0 {
            return Err(SearchError::InvalidConfig(
                "transit_initial_step_s must be positive",
            ));
        }
        if !self.transit_min_step_s.is_finite() || self.transit_min_step_s <= 0.0 {
            return Err(SearchError::InvalidConfig(
                "transit_min_step_s must be positive",
            ));
        }
        if self.transit_min_step_s > self.transit_initial_step_s {
            return Err(SearchError::InvalidConfig(
                "transit_min_step_s must not exceed transit_initial_step_s",
            ));
        }
        if self.transit_max_depth == 0 {
            return Err(SearchError::InvalidConfig("transit_max_depth must be > 0"));
        }
        Ok(())
    }
}
