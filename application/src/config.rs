//! [`Config`]-related definitions.

use std::{path::PathBuf, time};

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::{infra::source, read::listing::list::PageSize};
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    /// Listing source configuration.
    #[serde(default)]
    pub source: Source,

    /// Storage configuration.
    #[serde(default)]
    pub storage: Storage,

    /// Session configuration.
    #[serde(default)]
    pub session: Session,

    /// Log configuration.
    #[serde(default)]
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Listing source configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Source {
    /// Seed of the generated listings.
    #[default(42)]
    pub seed: u64,

    /// Number of the generated listings.
    #[default(source::mock::COUNT)]
    pub count: usize,

    /// Simulated latency of a search request.
    #[default(time::Duration::from_millis(500))]
    #[serde(with = "humantime_serde")]
    pub search_latency: time::Duration,

    /// Simulated latency of a page change request.
    #[default(time::Duration::from_millis(300))]
    #[serde(with = "humantime_serde")]
    pub page_latency: time::Duration,
}

impl From<Source> for source::memory::Config {
    fn from(value: Source) -> Self {
        let Source {
            search_latency,
            page_latency,
            ..
        } = value;
        Self {
            search_latency,
            page_latency,
        }
    }
}

/// Storage configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Storage {
    /// Directory to store the liked listings and tokens in.
    #[default(PathBuf::from(".honestspace"))]
    pub dir: PathBuf,
}

/// Session configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Number of listings on a page (12, 24 or 48).
    pub page_size: PageSize,
}

impl From<Session> for service::Config {
    fn from(value: Session) -> Self {
        let Session { page_size } = value;
        Self { page_size }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    Info,

    /// Designates hazardous situations.
    #[default]
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
