use tracing::debug;

use drill_core::Clock;
use drill_core::model::{AnswerOutcome, OperandRange, SessionSummary};

use super::progress::SessionProgress;
use super::service::QuizSession;
use crate::error::SessionError;
use crate::pairs::PairGenerator;

/// Result of answering the current question through [`DrillService`].
#[derive(Debug, Clone, PartialEq)]
pub struct DrillAnswer {
    pub outcome: AnswerOutcome,
    pub progress: SessionProgress,
    /// Set only on the answer that finished the game.
    pub summary: Option<SessionSummary>,
}

/// Orchestrates game start, answering, and replay for a configured pair of ranges.
#[derive(Debug, Clone, Copy)]
pub struct DrillService {
    clock: Clock,
    generator: PairGenerator,
}

impl DrillService {
    #[must_use]
    pub fn new(first: OperandRange, second: OperandRange) -> Self {
        Self {
            clock: Clock::default(),
            generator: PairGenerator::new(first, second),
        }
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn generator(&self) -> &PairGenerator {
        &self.generator
    }

    /// A fresh, inactive session sharing this service's clock.
    #[must_use]
    pub fn session(&self) -> QuizSession {
        QuizSession::new(self.clock)
    }

    /// Generate a shuffled question set and start `session` over it.
    pub fn new_game(&self, session: &mut QuizSession) {
        let questions = self.generator.generate();
        debug!(
            first = %self.generator.first(),
            second = %self.generator.second(),
            count = questions.len(),
            "starting new game"
        );
        session.start(questions);
    }

    /// Answer the current question and report progress.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` when no question is pending.
    pub fn answer(
        &self,
        session: &mut QuizSession,
        value: i64,
    ) -> Result<DrillAnswer, SessionError> {
        let outcome = session.submit_answer(value)?;
        let summary = if outcome.is_correct() && session.is_complete() {
            Some(session.summary()?)
        } else {
            None
        };

        Ok(DrillAnswer {
            outcome,
            progress: session.progress(),
            summary,
        })
    }

    /// Reset `session` and immediately start another game with the same ranges.
    pub fn play_again(&self, session: &mut QuizSession) {
        session.reset();
        self.new_game(session);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::time::fixed_clock;

    #[test]
    fn answer_reports_summary_only_on_finish() {
        let service = DrillService::new(OperandRange::new(1, 2), OperandRange::new(0, 0))
            .with_clock(fixed_clock());
        let mut session = service.session();
        service.new_game(&mut session);
        assert_eq!(session.total_count(), 2);

        let first = service.answer(&mut session, 0).unwrap();
        assert!(first.outcome.is_correct());
        assert_eq!(first.progress.solved, 1);
        assert!(first.summary.is_none());

        let wrong = service.answer(&mut session, 5).unwrap();
        assert_eq!(wrong.outcome, AnswerOutcome::Incorrect { hint: '0' });
        assert!(wrong.summary.is_none());

        let last = service.answer(&mut session, 0).unwrap();
        assert!(last.progress.is_complete);
        let summary = last.summary.unwrap();
        assert_eq!(summary.solved(), 2);
        assert_eq!(summary.mistakes(), 1);
    }

    #[test]
    fn play_again_starts_over() {
        let service = DrillService::new(OperandRange::new(3, 3), OperandRange::new(3, 3))
            .with_clock(fixed_clock());
        let mut session = service.session();
        service.new_game(&mut session);
        service.answer(&mut session, 9).unwrap();
        assert!(session.is_complete());

        service.play_again(&mut session);
        assert_eq!(session.score(), 0);
        assert_eq!(session.total_count(), 1);
        assert!(!session.is_complete());
    }

    #[test]
    fn answering_without_a_game_fails() {
        let service = DrillService::new(OperandRange::new(1, 1), OperandRange::new(1, 1));
        let mut session = service.session();
        assert_eq!(service.answer(&mut session, 1), Err(SessionError::NotStarted));
    }
}
