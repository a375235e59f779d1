//! # chainable-log
//!
//! Logging setup for applications using `chainable-validator`. The
//! validator only emits `tracing` events; this crate installs a subscriber
//! that prints them.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! fn main() -> Result<(), chainable_log::LogError> {
//!     let _guard = chainable_log::auto_init()?;
//!
//!     chainable_log::info!(fields = 2, "validator ready");
//!     Ok(())
//! }
//! ```
//!
//! ## Environment
//!
//! - `CHAINABLE_LOG` (or `RUST_LOG`): filter directives, e.g. `debug,chainable_validator=trace`
//! - `CHAINABLE_LOG_FORMAT`: `pretty`, `compact` or `json`
//! - `CHAINABLE_LOG_TIME`, `CHAINABLE_LOG_SOURCE`, `CHAINABLE_LOG_COLORS`: `0`/`false` to disable

#![forbid(unsafe_code)]

mod builder;
mod config;

pub use builder::{LoggerBuilder, LoggerGuard};
pub use config::{Config, DisplayConfig, Format, UnknownFormat};

pub use tracing::{debug, error, info, trace, warn};

/// Result type for logger setup.
pub type LogResult<T> = Result<T, LogError>;

/// Errors raised while installing the logger.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// Filter directives could not be parsed
    #[error("Invalid filter '{filter}': {reason}")]
    Filter { filter: String, reason: String },

    /// A global subscriber is already installed
    #[error("Logger initialization failed: {0}")]
    Init(String),
}

// ============================================================================
// Initialization Functions
// ============================================================================

/// Picks a configuration from the environment and build profile, then
/// installs it.
///
/// Returns an inert guard when a global subscriber is already installed,
/// so calling it from several tests or examples is harmless.
pub fn auto_init() -> LogResult<LoggerGuard> {
    if tracing::dispatcher::has_been_set() {
        return Ok(LoggerGuard::noop());
    }

    if config::env_level().is_some() {
        init_with(Config::from_env())
    } else if cfg!(debug_assertions) {
        init_with(Config::development())
    } else {
        init_with(Config::production())
    }
}

/// Installs the default configuration.
pub fn init() -> LogResult<LoggerGuard> {
    init_with(Config::default())
}

/// Installs `config`.
pub fn init_with(config: Config) -> LogResult<LoggerGuard> {
    LoggerBuilder::from_config(config).build()
}
