//! Error types for configuration loading.

use thiserror::Error;

/// Errors from reading, parsing or validating an [`crate::AlmanacConfig`].
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The file could not be read.
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid TOML or does not match the schema.
    #[error("cannot parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// The config could not be written back as TOML.
    #[error("cannot serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// A value is out of range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
    /// `time_zone` is not an IANA zone name.
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),
}
