//! Command-line and environment configuration.

use clap::Parser;
use thiserror::Error;

use drill_core::model::{OperandRange, RangeError};
use drill_services::PairGenerator;

/// Largest question set a single game may hold.
pub const MAX_QUESTIONS: usize = 1_000_000;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error(transparent)]
    Range(#[from] RangeError),

    #[error("{first} x {second} makes {count} questions, the limit is {limit}")]
    TooManyQuestions {
        first: OperandRange,
        second: OperandRange,
        count: usize,
        limit: usize,
    },
}

#[derive(Debug, Parser)]
#[command(name = "drill")]
#[command(version)]
#[command(about = "Multiplication drill over every pair from two ranges")]
pub struct Cli {
    /// Range for the first factor
    #[arg(
        long,
        env = "DRILL_FIRST_RANGE",
        value_name = "MIN..MAX",
        default_value_t = OperandRange::DEFAULT_FIRST,
        allow_hyphen_values = true
    )]
    pub first: OperandRange,

    /// Range for the second factor
    #[arg(
        long,
        env = "DRILL_SECOND_RANGE",
        value_name = "MIN..MAX",
        default_value_t = OperandRange::DEFAULT_SECOND,
        allow_hyphen_values = true
    )]
    pub second: OperandRange,

    /// Refuse inverted ranges instead of starting an empty game
    #[arg(long, env = "DRILL_STRICT_RANGES")]
    pub strict_ranges: bool,

    /// Print the completion summary as JSON
    #[arg(long)]
    pub summary_json: bool,

    /// Log filter used when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, env = "DRILL_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// The configured ranges, checked for ordering when `--strict-ranges` is set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Range` for an inverted range in strict mode, and
    /// `ConfigError::TooManyQuestions` when the product exceeds [`MAX_QUESTIONS`].
    pub fn ranges(&self) -> Result<(OperandRange, OperandRange), ConfigError> {
        if self.strict_ranges {
            self.first.ensure_ordered()?;
            self.second.ensure_ordered()?;
        }

        let count = PairGenerator::new(self.first, self.second).question_count();
        if count > MAX_QUESTIONS {
            return Err(ConfigError::TooManyQuestions {
                first: self.first,
                second: self.second,
                count,
                limit: MAX_QUESTIONS,
            });
        }
        Ok((self.first, self.second))
    }
}
