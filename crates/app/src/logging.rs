//! Tracing subscriber bootstrap for the binary.
//!
//! Logs go to stderr so they never interleave with the drill on stdout.
//! `RUST_LOG` overrides the configured level, e.g. `RUST_LOG=drill_services=debug`.

use std::sync::OnceLock;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

static LOGGING_INITIALIZED: OnceLock<()> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum LogError {
    #[error("logging already initialized")]
    AlreadyInitialized,

    #[error("invalid log level: {0}")]
    InvalidLevel(String),

    #[error("failed to set global subscriber: {0}")]
    SetSubscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Builds the filter: `RUST_LOG` when set, otherwise `level`.
///
/// # Errors
///
/// Returns `LogError::InvalidLevel` if `level` is not a valid filter directive.
pub fn env_filter(level: &str) -> Result<EnvFilter, LogError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level).map_err(|_| LogError::InvalidLevel(level.to_string())),
    }
}

/// Install the global subscriber. Call once at startup.
///
/// # Errors
///
/// Returns `LogError` if called twice, if the level is invalid, or if another
/// subscriber was already installed.
pub fn init_logging(level: &str) -> Result<(), LogError> {
    if LOGGING_INITIALIZED.get().is_some() {
        return Err(LogError::AlreadyInitialized);
    }

    let filter = env_filter(level)?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .try_init()?;

    let _ = LOGGING_INITIALIZED.set(());
    Ok(())
}
