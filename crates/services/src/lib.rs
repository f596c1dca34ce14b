#![forbid(unsafe_code)]

pub mod error;
pub mod pairs;
pub mod sessions;

pub use drill_core::Clock;
pub use sessions as session;

pub use error::SessionError;
pub use pairs::{PairGenerator, generate};
pub use sessions::{DrillAnswer, DrillService, QuizSession, SessionPhase, SessionProgress};
