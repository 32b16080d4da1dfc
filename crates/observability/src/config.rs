use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Variable holding the filter directives (standard `tracing-subscriber` name).
pub const FILTER_ENV: &str = "RUST_LOG";

/// Variable selecting the output format.
pub const FORMAT_ENV: &str = "GILDED_ROSE_LOG_FORMAT";

const DEFAULT_FILTER: &str = "info";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown log format {0:?} (expected json, pretty or compact)")]
    UnknownFormat(String),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
    Compact,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            "compact" => Ok(LogFormat::Compact),
            _ => Err(ConfigError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directives, e.g. `info,gildedrose_inventory=trace`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            format: LogFormat::default(),
        }
    }
}

impl ObservabilityConfig {
    /// Read configuration from the process environment.
    ///
    /// Missing variables use the defaults; an unrecognised format is reported
    /// on stderr and replaced by the default, since no subscriber exists yet.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok()).unwrap_or_else(|err| {
            eprintln!("{err}; using default log format");
            Self {
                filter: std::env::var(FILTER_ENV).unwrap_or_else(|_| DEFAULT_FILTER.to_string()),
                format: LogFormat::default(),
            }
        })
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let filter = lookup(FILTER_ENV)
            .filter(|f| !f.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILTER.to_string());
        let format = match lookup(FORMAT_ENV) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };
        Ok(Self { filter, format })
    }
}
