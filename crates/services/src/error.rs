//! Shared error types for the services crate.

use thiserror::Error;

use drill_core::model::SessionSummaryError;

/// Errors emitted by the quiz session and the drill service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("no game has been started")]
    NotStarted,
    #[error("session already completed")]
    Completed,
    #[error("session is not complete yet")]
    NotComplete,
    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
}
