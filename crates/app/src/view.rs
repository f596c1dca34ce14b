use chrono::Duration;

use drill_core::model::{AnswerOutcome, OperandRange, Question, SessionSummary};
use drill_services::SessionProgress;

const BAR_WIDTH: usize = 20;

#[must_use]
pub fn game_header(first: OperandRange, second: OperandRange, count: usize) -> String {
    format!("Random Multiplier: {first} x {second} ({count} questions)")
}

#[must_use]
pub fn progress_line(progress: &SessionProgress) -> String {
    format!(
        "Progress: {} / {} Completed {}",
        progress.solved,
        progress.total,
        progress_bar(progress.ratio(), BAR_WIDTH)
    )
}

/// Text bar such as `[#####---------------]`.
#[must_use]
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let filled = (ratio.clamp(0.0, 1.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

#[must_use]
pub fn question_prompt(question: Question) -> String {
    format!(
        "What is {} x {}?",
        question.multiplicand(),
        question.multiplier()
    )
}

#[must_use]
pub fn feedback(outcome: AnswerOutcome) -> String {
    match outcome {
        AnswerOutcome::Correct => "Correct!".to_string(),
        AnswerOutcome::Incorrect { hint } => {
            format!("Incorrect. Try again! (Hint: it ends in {hint})")
        }
    }
}

#[must_use]
pub fn completion_banner(total: usize) -> String {
    format!("MISSION COMPLETE! You solved all {total} problems!")
}

#[must_use]
pub fn summary_line(summary: &SessionSummary) -> String {
    format!(
        "Time: {}, mistakes: {}, accuracy: {:.0}%",
        format_duration(summary.duration()),
        summary.mistakes(),
        summary.accuracy() * 100.0
    )
}

#[must_use]
pub fn format_duration(value: Duration) -> String {
    let secs = value.num_seconds().max(0);
    let (mins, secs) = (secs / 60, secs % 60);
    if mins == 0 {
        format!("{secs}s")
    } else {
        format!("{mins}m {secs:02}s")
    }
}

pub const HELP: &str = "\
Commands:
  <number>   answer the current question
  new        start a new game with the same ranges
  help       show this help
  quit       leave the drill";
