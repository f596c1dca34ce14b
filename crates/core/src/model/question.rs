use serde::{Deserialize, Serialize};
use std::fmt;

//
// ─── ANSWER OUTCOME ────────────────────────────────────────────────────────────
//

/// Result of checking a submitted answer against a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The submitted value equals the product.
    Correct,
    /// The submitted value was wrong. `hint` is the last digit of the product.
    Incorrect { hint: char },
}

impl AnswerOutcome {
    #[must_use]
    pub fn is_correct(self) -> bool {
        matches!(self, AnswerOutcome::Correct)
    }

    /// Hint digit carried by an incorrect outcome.
    #[must_use]
    pub fn hint(self) -> Option<char> {
        match self {
            AnswerOutcome::Correct => None,
            AnswerOutcome::Incorrect { hint } => Some(hint),
        }
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// One multiplication prompt: `multiplicand x multiplier`.
///
/// The product is derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Question {
    multiplicand: i32,
    multiplier: i32,
}

impl Question {
    #[must_use]
    pub fn new(multiplicand: i32, multiplier: i32) -> Self {
        Self {
            multiplicand,
            multiplier,
        }
    }

    #[must_use]
    pub fn multiplicand(&self) -> i32 {
        self.multiplicand
    }

    #[must_use]
    pub fn multiplier(&self) -> i32 {
        self.multiplier
    }

    /// The correct answer. Widened to `i64`, so no pair of `i32` operands overflows.
    #[must_use]
    pub fn answer(&self) -> i64 {
        i64::from(self.multiplicand) * i64::from(self.multiplier)
    }

    /// Last decimal digit of the product, sign ignored.
    #[must_use]
    pub fn hint_digit(&self) -> char {
        let digit = (self.answer() % 10).unsigned_abs();
        char::from(b'0' + digit as u8)
    }

    #[must_use]
    pub fn check(&self, value: i64) -> AnswerOutcome {
        if value == self.answer() {
            AnswerOutcome::Correct
        } else {
            AnswerOutcome::Incorrect {
                hint: self.hint_digit(),
            }
        }
    }
}

impl From<(i32, i32)> for Question {
    fn from((multiplicand, multiplier): (i32, i32)) -> Self {
        Self::new(multiplicand, multiplier)
    }
}

impl From<Question> for (i32, i32) {
    fn from(question: Question) -> Self {
        (question.multiplicand, question.multiplier)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.multiplicand, self.multiplier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_is_the_product() {
        assert_eq!(Question::new(7, 8).answer(), 56);
        assert_eq!(Question::new(-4, 6).answer(), -24);
        assert_eq!(
            Question::new(i32::MAX, i32::MAX).answer(),
            4_611_686_014_132_420_609
        );
    }

    #[test]
    fn hint_is_last_digit() {
        assert_eq!(Question::new(7, 8).hint_digit(), '6');
        assert_eq!(Question::new(10, 3).hint_digit(), '0');
        assert_eq!(Question::new(-7, 8).hint_digit(), '6');
        assert_eq!(Question::new(0, 0).hint_digit(), '0');
    }

    #[test]
    fn check_reports_hint_on_mismatch() {
        let question = Question::new(7, 8);
        assert_eq!(question.check(56), AnswerOutcome::Correct);
        assert_eq!(question.check(50), AnswerOutcome::Incorrect { hint: '6' });
        assert_eq!(question.check(50).hint(), Some('6'));
        assert!(question.check(56).is_correct());
    }

    #[test]
    fn tuple_conversions_keep_order() {
        let question = Question::from((3, 4));
        assert_eq!(question.multiplicand(), 3);
        assert_eq!(question.multiplier(), 4);
        assert_eq!(<(i32, i32)>::from(question), (3, 4));
        assert_eq!(question.to_string(), "3 x 4");
    }
}
