//! Validator configuration.
//!
//! ```rust
//! use chainable_validator::config::{FailureLevel, ValidatorConfig};
//!
//! let config: ValidatorConfig = serde_json::from_str(r#"{"failure_level":"debug"}"#)?;
//! assert_eq!(config.failure_level, FailureLevel::Debug);
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Environment variable read by [`ValidatorConfig::from_env`].
pub const FAILURE_LEVEL_ENV: &str = "CHAINABLE_FAILURE_LEVEL";

/// Settings for a [`ChainValidator`](crate::schema::ChainValidator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Level of the event emitted for every failure.
    pub failure_level: FailureLevel,
}

impl ValidatorConfig {
    /// Reads overrides from the environment, keeping defaults for anything
    /// unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(FAILURE_LEVEL_ENV) {
            match raw.parse() {
                Ok(level) => config.failure_level = level,
                Err(err) => tracing::warn!(
                    variable = FAILURE_LEVEL_ENV,
                    %err,
                    "ignoring invalid failure level"
                ),
            }
        }
        config
    }

    #[must_use]
    pub const fn with_failure_level(mut self, level: FailureLevel) -> Self {
        self.failure_level = level;
        self
    }
}

/// Level of the per-failure event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureLevel {
    /// No event.
    Off,
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
}

impl FailureLevel {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }

    /// The matching `tracing` level, `None` for [`Off`](Self::Off).
    #[must_use]
    pub const fn to_tracing(self) -> Option<tracing::Level> {
        match self {
            Self::Off => None,
            Self::Trace => Some(tracing::Level::TRACE),
            Self::Debug => Some(tracing::Level::DEBUG),
            Self::Info => Some(tracing::Level::INFO),
            Self::Warn => Some(tracing::Level::WARN),
        }
    }
}

impl fmt::Display for FailureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown failure level `{0}`, expected one of off, trace, debug, info, warn")]
pub struct UnknownFailureLevel(pub String);

impl FromStr for FailureLevel {
    type Err = UnknownFailureLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            _ => Err(UnknownFailureLevel(s.to_owned())),
        }
    }
}
