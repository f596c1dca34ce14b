use chrono::{DateTime, Utc};
use std::fmt;
use tracing::{info, trace};

use drill_core::Clock;
use drill_core::model::{AnswerOutcome, Question, SessionSummary};

use super::progress::SessionProgress;
use crate::error::SessionError;

//
// ─── PHASE ─────────────────────────────────────────────────────────────────────
//

/// Lifecycle of a [`QuizSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// No game started, or the last one was reset.
    Inactive,
    /// A current question is waiting for an answer.
    Active,
    /// Game started and every question has been solved (possibly zero of them).
    Complete,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory multiplication drill.
///
/// Holds the unseen questions as a stack (the order is already random, so
/// popping from the back is enough), the question on screen, and the counters
/// behind the progress bar. A wrong answer leaves everything but the mistake
/// counter untouched, so the same question is asked again.
pub struct QuizSession {
    clock: Clock,
    active: bool,
    queue: Vec<Question>,
    current: Option<Question>,
    score: usize,
    total: usize,
    mistakes: usize,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Creates an inactive session stamped by the given clock.
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            active: false,
            queue: Vec::new(),
            current: None,
            score: 0,
            total: 0,
            mistakes: 0,
            started_at: None,
            completed_at: None,
        }
    }

    /// Starts a fresh game over `pairs`, discarding any previous state.
    ///
    /// An empty `pairs` list still starts a game; it is complete immediately.
    pub fn start(&mut self, pairs: impl IntoIterator<Item = impl Into<Question>>) {
        let mut queue: Vec<Question> = pairs.into_iter().map(Into::into).collect();
        let now = self.clock.now();

        self.total = queue.len();
        self.score = 0;
        self.mistakes = 0;
        self.current = queue.pop();
        self.queue = queue;
        self.active = true;
        self.started_at = Some(now);
        self.completed_at = if self.current.is_none() { Some(now) } else { None };

        info!(total = self.total, "quiz session started");
    }

    /// Checks `value` against the current question.
    ///
    /// On a correct answer the score goes up and the next question (if any)
    /// takes its place. On a wrong answer the question stays and the outcome
    /// carries the last digit of the product as a hint.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` before `start`, and
    /// `SessionError::Completed` once no question remains. State is unchanged in both cases.
    pub fn submit_answer(&mut self, value: i64) -> Result<AnswerOutcome, SessionError> {
        if !self.active {
            return Err(SessionError::NotStarted);
        }
        let Some(question) = self.current else {
            return Err(SessionError::Completed);
        };

        let outcome = question.check(value);
        trace!(%question, value, correct = outcome.is_correct(), "answer submitted");

        match outcome {
            AnswerOutcome::Correct => {
                self.score += 1;
                self.current = self.queue.pop();
                if self.current.is_none() {
                    self.completed_at = Some(self.clock.now());
                    info!(
                        total = self.total,
                        mistakes = self.mistakes,
                        "quiz session complete"
                    );
                }
            }
            AnswerOutcome::Incorrect { .. } => {
                self.mistakes += 1;
            }
        }

        Ok(outcome)
    }

    /// Returns to `Inactive`, dropping all questions and counters.
    pub fn reset(&mut self) {
        *self = Self::new(self.clock);
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        match (self.active, self.current) {
            (false, _) => SessionPhase::Inactive,
            (true, Some(_)) => SessionPhase::Active,
            (true, None) => SessionPhase::Complete,
        }
    }

    /// True once a game has been started and not reset, including completed games.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase() == SessionPhase::Complete
    }

    #[must_use]
    pub fn current_question(&self) -> Option<Question> {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    /// Questions still to solve, including the current one.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len() + usize::from(self.current.is_some())
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        SessionProgress {
            total: self.total,
            solved: self.score,
            remaining: self.remaining(),
            is_complete: self.is_complete(),
        }
    }

    /// Summary of a finished game.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotComplete` unless the session is complete.
    pub fn summary(&self) -> Result<SessionSummary, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::NotComplete);
        }
        let (Some(started_at), Some(completed_at)) = (self.started_at, self.completed_at) else {
            return Err(SessionError::NotComplete);
        };

        let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
        Ok(SessionSummary::new(
            count(self.total),
            count(self.score),
            count(self.mistakes),
            started_at,
            completed_at,
        )?)
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new(Clock::default())
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("phase", &self.phase())
            .field("current", &self.current)
            .field("queue_len", &self.queue.len())
            .field("score", &self.score)
            .field("total", &self.total)
            .field("mistakes", &self.mistakes)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
