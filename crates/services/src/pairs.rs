use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use drill_core::model::{OperandRange, Question};

/// Builds the full question set for two operand ranges.
///
/// Every `(x, y)` with `x` from the first range and `y` from the second appears
/// exactly once. An inverted range on either side yields no questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairGenerator {
    first: OperandRange,
    second: OperandRange,
}

impl PairGenerator {
    #[must_use]
    pub fn new(first: OperandRange, second: OperandRange) -> Self {
        Self { first, second }
    }

    #[must_use]
    pub fn first(&self) -> OperandRange {
        self.first
    }

    #[must_use]
    pub fn second(&self) -> OperandRange {
        self.second
    }

    /// Number of questions `generate` will return.
    #[must_use]
    pub fn question_count(&self) -> usize {
        self.first.len().saturating_mul(self.second.len())
    }

    /// Cartesian product in row-major order (first range outer).
    #[must_use]
    pub fn ordered(&self) -> Vec<Question> {
        let second = self.second;
        self.first
            .iter()
            .flat_map(|x| second.iter().map(move |y| Question::new(x, y)))
            .collect()
    }

    /// Shuffled product using the thread-local generator.
    #[must_use]
    pub fn generate(&self) -> Vec<Question> {
        self.generate_with_rng(&mut rand::rng())
    }

    /// Shuffled product using the caller's generator.
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Question> {
        if self.first.is_inverted() || self.second.is_inverted() {
            warn!(
                first = %self.first,
                second = %self.second,
                "inverted range produces an empty question set"
            );
            return Vec::new();
        }

        let mut questions = self.ordered();
        questions.as_mut_slice().shuffle(rng);
        debug!(count = questions.len(), "generated question set");
        questions
    }
}

/// Shuffled Cartesian product of `first` x `second`.
#[must_use]
pub fn generate(first: OperandRange, second: OperandRange) -> Vec<Question> {
    PairGenerator::new(first, second).generate()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn sorted(mut questions: Vec<Question>) -> Vec<Question> {
        questions.sort();
        questions
    }

    #[test]
    fn produces_every_pair_exactly_once() {
        let generator = PairGenerator::new(OperandRange::new(11, 30), OperandRange::new(1, 10));
        let questions = generator.generate_with_rng(&mut StdRng::seed_from_u64(7));

        assert_eq!(questions.len(), 200);
        assert_eq!(generator.question_count(), 200);

        let unique: HashSet<_> = questions.iter().copied().collect();
        assert_eq!(unique.len(), 200);
        for x in 11..=30 {
            for y in 1..=10 {
                assert!(unique.contains(&Question::new(x, y)), "missing {x} x {y}");
            }
        }
    }

    #[test]
    fn repeated_values_stay_distinct_by_position() {
        let questions = generate(OperandRange::new(2, 3), OperandRange::new(2, 3));
        assert_eq!(
            sorted(questions),
            vec![
                Question::new(2, 2),
                Question::new(2, 3),
                Question::new(3, 2),
                Question::new(3, 3),
            ]
        );
    }

    #[test]
    fn negative_ranges_are_supported() {
        let questions = generate(OperandRange::new(-1, 1), OperandRange::new(-2, -2));
        assert_eq!(
            sorted(questions),
            vec![Question::new(-1, -2), Question::new(0, -2), Question::new(1, -2)]
        );
    }

    #[test]
    fn inverted_range_yields_no_questions() {
        let ok = OperandRange::new(1, 10);
        let inverted = OperandRange::new(10, 1);

        assert!(generate(inverted, ok).is_empty());
        assert!(generate(ok, inverted).is_empty());
        assert_eq!(PairGenerator::new(ok, inverted).question_count(), 0);
    }

    #[test]
    fn shuffle_keeps_the_same_multiset() {
        let generator = PairGenerator::new(OperandRange::new(1, 12), OperandRange::new(1, 12));
        let a = generator.generate_with_rng(&mut StdRng::seed_from_u64(1));
        let b = generator.generate_with_rng(&mut StdRng::seed_from_u64(2));

        assert_ne!(a, generator.ordered());
        assert_eq!(sorted(a), sorted(b));
    }

    #[test]
    fn single_pair_ranges() {
        let questions = generate(OperandRange::new(1, 1), OperandRange::new(1, 1));
        assert_eq!(questions, vec![Question::new(1, 1)]);
        assert_eq!(questions[0].answer(), 1);
    }
}
