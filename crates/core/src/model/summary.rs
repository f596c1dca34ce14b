use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionSummaryError {
    #[error("completed_at is before started_at")]
    InvalidTimeRange,

    #[error("solved count ({solved}) does not match total questions ({total})")]
    CountMismatch { total: u32, solved: u32 },
}

/// Aggregate summary for a completed drill session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    total: u32,
    solved: u32,
    mistakes: u32,
    started_at: DateTime<Utc>,
    completed_at: DateTime<Utc>,
}

impl SessionSummary {
    /// Build a summary for a session whose every question was solved.
    ///
    /// # Errors
    ///
    /// Returns `SessionSummaryError::InvalidTimeRange` if `completed_at` is before `started_at`.
    /// Returns `SessionSummaryError::CountMismatch` if `solved != total`.
    pub fn new(
        total: u32,
        solved: u32,
        mistakes: u32,
        started_at: DateTime<Utc>,
        completed_at: DateTime<Utc>,
    ) -> Result<Self, SessionSummaryError> {
        if completed_at < started_at {
            return Err(SessionSummaryError::InvalidTimeRange);
        }
        if solved != total {
            return Err(SessionSummaryError::CountMismatch { total, solved });
        }

        Ok(Self {
            total,
            solved,
            mistakes,
            started_at,
            completed_at,
        })
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn solved(&self) -> u32 {
        self.solved
    }

    #[must_use]
    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.completed_at - self.started_at
    }

    /// Share of submissions that were correct; `1.0` when nothing was submitted.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        let attempts = u64::from(self.solved) + u64::from(self.mistakes);
        if attempts == 0 {
            return 1.0;
        }
        f64::from(self.solved) / attempts as f64
    }
}
