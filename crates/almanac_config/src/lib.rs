//! TOML configuration for the almanac.
//!
//! ```toml
//! [search]
//! max_minute_steps = 60
//! transit_initial_step_s = 1800.0
//! transit_min_step_s = 15.0
//! transit_max_depth = 10
//!
//! [moon_phase]
//! cache_capacity = 4
//!
//! [observer]
//! latitude_deg = -27.467
//! longitude_deg = 153.033
//! time_zone = "Australia/Brisbane"
//! ```
//!
//! Every section is optional; missing sections and fields take the
//! library defaults.

pub mod error;

use std::fs;
use std::path::Path;
use std::str::FromStr;

use almanac_core::{CoreError, GeoCoordinate};
use almanac_search::{MoonPhaseCache, SearchConfig, SearchError};
use chrono_tz::Tz;
use log::debug;
use serde::{Deserialize, Serialize};

pub use error::ConfigError;

/// Numerical caps of the day search. See [`SearchConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchSection {
    pub max_minute_steps: u32,
    pub transit_initial_step_s: f64,
    pub transit_min_step_s: f64,
    pub transit_max_depth: u32,
}

impl Default for SearchSection {
    fn default() -> Self {
        SearchConfig::default().into()
    }
}

impl From<SearchConfig> for SearchSection {
    fn from(c: SearchConfig) -> Self {
        Self {
            max_minute_steps: c.max_minute_steps,
            transit_initial_step_s: c.transit_initial_step_s,
            transit_min_step_s: c.transit_min_step_s,
            transit_max_depth: c.transit_max_depth,
        }
    }
}

impl From<SearchSection> for SearchConfig {
    fn from(s: SearchSection) -> Self {
        Self {
            max_minute_steps: s.max_minute_steps,
            transit_initial_step_s: s.transit_initial_step_s,
            transit_min_step_s: s.transit_min_step_s,
            transit_max_depth: s.transit_max_depth,
        }
    }
}

/// Moon phase year cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct MoonPhaseSection {
    /// Number of (year, zone) event lists kept.
    pub cache_capacity: usize,
}

impl Default for MoonPhaseSection {
    fn default() -> Self {
        Self {
            cache_capacity: MoonPhaseCache::DEFAULT_CAPACITY,
        }
    }
}

/// Default observer used when a command gives no location.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ObserverSection {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// IANA zone name, UTC when omitted.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
}

fn default_time_zone() -> String {
    "UTC".to_string()
}

/// A validated observer: location plus the zone local days are taken in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observer {
    pub location: GeoCoordinate,
    pub tz: Tz,
}

/// Whole configuration file.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlmanacConfig {
    pub search: SearchSection,
    pub moon_phase: MoonPhaseSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observer: Option<ObserverSection>,
}

impl AlmanacConfig {
    /// Read, parse and validate a config file.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config: Self = contents.parse()?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.search_config()?;
        if self.moon_phase.cache_capacity == 0 {
            return Err(ConfigError::Invalid("moon_phase.cache_capacity must be > 0"));
        }
        self.observer()?;
        Ok(())
    }

    /// Validated search caps.
    pub fn search_config(&self) -> Result<SearchConfig, ConfigError> {
        let config = SearchConfig::from(self.search);
        config.validate().map_err(|e| match e {
            SearchError::InvalidConfig(msg) => ConfigError::Invalid(msg),
            _ => ConfigError::Invalid("search section rejected"),
        })?;
        Ok(config)
    }

    /// An empty Moon phase cache sized by `[moon_phase]`.
    pub fn phase_cache(&self) -> MoonPhaseCache {
        MoonPhaseCache::new(self.moon_phase.cache_capacity)
    }

    /// The `[observer]` section, if present.
    pub fn observer(&self) -> Result<Option<Observer>, ConfigError> {
        let Some(section) = &self.observer else {
            return Ok(None);
        };
        let location = GeoCoordinate::new(section.latitude_deg, section.longitude_deg)
            .map_err(|e| match e {
                CoreError::InvalidLocation(msg) => ConfigError::Invalid(msg),
                _ => ConfigError::Invalid("observer location rejected"),
            })?;
        let tz = parse_time_zone(&section.time_zone)?;
        Ok(Some(Observer { location, tz }))
    }
}

impl FromStr for AlmanacConfig {
    type Err = ConfigError;

    /// Parse and validate TOML text.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}

/// Look up an IANA time zone by name.
pub fn parse_time_zone(name: &str) -> Result<Tz, ConfigError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| ConfigError::UnknownTimeZone(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config: AlmanacConfig = "".parse().unwrap();
        assert_eq!(config, AlmanacConfig::default());
        assert_eq!(config.search_config().unwrap(), SearchConfig::default());
        assert_eq!(config.phase_cache().capacity(), MoonPhaseCache::DEFAULT_CAPACITY);
        assert_eq!(config.observer().unwrap(), None);
    }

    #[test]
    fn partial_search_section_keeps_other_defaults() {
        let config: AlmanacConfig = "[search]\nmax_minute_steps = 90\n".parse().unwrap();
        let search = config.search_config().unwrap();
        assert_eq!(search.max_minute_steps, 90);
        assert_eq!(search.transit_max_depth, 10);
        assert_eq!(search.transit_initial_step_s, 1800.0);
    }

    #[test]
    fn observer_section() {
        let config: AlmanacConfig = r#"
            [observer]
            latitude_deg = 55.95
            longitude_deg = -3.19
            time_zone = "Europe/London"
        "#
        .parse()
        .unwrap();
        let obs = config.observer().unwrap().unwrap();
        assert_eq!(obs.tz, chrono_tz::Europe::London);
        assert!((obs.location.latitude_deg() - 55.95).abs() < 1e-12);
    }

    #[test]
    fn observer_zone_defaults_to_utc() {
        let config: AlmanacConfig = "[observer]\nlatitude_deg = 0.0\nlongitude_deg = 0.0\n"
            .parse()
            .unwrap();
        assert_eq!(config.observer().unwrap().unwrap().tz, chrono_tz::UTC);
    }

    #[test]
    fn rejects_bad_values() {
        let cases = [
            "[search]\nmax_minute_steps = 0\n",
            "[search]\ntransit_min_step_s = 4000.0\n",
            "[moon_phase]\ncache_capacity = 0\n",
            "[observer]\nlatitude_deg = 91.0\nlongitude_deg = 0.0\n",
        ];
        for text in cases {
            let err = text.parse::<AlmanacConfig>().unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{text:?}: {err}");
        }
    }

    #[test]
    fn rejects_unknown_zone_and_fields() {
        let text = r#"
            [observer]
            latitude_deg = 0.0
            longitude_deg = 0.0
            time_zone = "Mars/Olympus"
        "#;
        let err = text.parse::<AlmanacConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTimeZone(ref z) if z == "Mars/Olympus"));

        let err = "[search]\nmax_steps = 3\n".parse::<AlmanacConfig>().unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn toml_round_trip() {
        let mut config = AlmanacConfig::default();
        config.moon_phase.cache_capacity = 8;
        config.observer = Some(ObserverSection {
            latitude_deg: -27.467,
            longitude_deg: 153.033,
            time_zone: "Australia/Brisbane".to_string(),
        });
        let text = config.to_toml_string().unwrap();
        let parsed: AlmanacConfig = text.parse().unwrap();
        assert_eq!(parsed, config);
    }
}
