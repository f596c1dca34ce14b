mod question;
mod range;
mod summary;

pub use question::{AnswerOutcome, Question};
pub use range::{OperandRange, RangeError};
pub use summary::{SessionSummary, SessionSummaryError};
