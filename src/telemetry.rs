//! Console logging setup for host binaries.

use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Errors raised while installing the global subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter {
        /// Directive as supplied.
        directive: String,
        /// Parser message.
        reason: String,
    },

    /// A global subscriber is already installed.
    #[error("logger already initialised: {0}")]
    AlreadyInitialised(String),
}

/// Installs a console subscriber filtered by `level`
/// (e.g. `info` or `stateless_rtm_bot=debug`).
///
/// # Errors
///
/// Returns [`TelemetryError`] when `level` is not a valid filter directive
/// or a global subscriber already exists.
pub fn init(level: &str) -> Result<(), TelemetryError> {
    let filter = EnvFilter::try_new(level).map_err(|error| TelemetryError::InvalidFilter {
        directive: level.to_owned(),
        reason: error.to_string(),
    })?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_thread_ids(true))
        .try_init()
        .map_err(|error| TelemetryError::AlreadyInitialised(error.to_string()))
}
