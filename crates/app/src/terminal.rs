//! Line-oriented host loop: shows the current question, reads answers, and
//! drives the session through new game / answer / play again.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use drill_core::model::SessionSummary;
use drill_services::{DrillService, QuizSession, SessionProgress};

use crate::view;

/// One parsed line of user input at the answer prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Answer(i64),
    NewGame,
    Help,
    Quit,
    Blank,
    Invalid(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        match line.to_ascii_lowercase().as_str() {
            "" => Self::Blank,
            "new" | "n" | "reset" => Self::NewGame,
            "help" | "h" | "?" => Self::Help,
            "quit" | "q" | "exit" => Self::Quit,
            _ => line
                .parse::<i64>()
                .map_or_else(|_| Self::Invalid(line.to_string()), Self::Answer),
        }
    }
}

/// What the loop does after handling one prompt.
#[derive(Debug)]
enum Step {
    Continue,
    Restart,
    Finished {
        summary: SessionSummary,
        progress: SessionProgress,
    },
    Quit,
}

pub struct Terminal<R, W> {
    input: R,
    output: W,
    service: DrillService,
    session: QuizSession,
    summary_json: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W, service: DrillService) -> Self {
        let session = service.session();
        Self {
            input,
            output,
            service,
            session,
            summary_json: false,
        }
    }

    #[must_use]
    pub fn with_summary_json(mut self, enabled: bool) -> Self {
        self.summary_json = enabled;
        self
    }

    /// Runs games until the user quits, declines to play again, or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        self.service.new_game(&mut self.session);
        self.write_header()?;

        loop {
            // An empty question set is complete before any answer is given.
            let step = if self.session.is_complete() {
                Step::Finished {
                    summary: self.session.summary()?,
                    progress: self.session.progress(),
                }
            } else {
                self.ask_question()?
            };

            match step {
                Step::Continue => {}
                Step::Restart => {
                    debug!("new game requested mid-session");
                    self.service.new_game(&mut self.session);
                    self.write_header()?;
                }
                Step::Finished { summary, progress } => {
                    self.show_completion(&summary, &progress)?;
                    if !self.ask_play_again()? {
                        return Ok(());
                    }
                    self.service.play_again(&mut self.session);
                    self.write_header()?;
                }
                Step::Quit => return Ok(()),
            }
        }
    }

    fn write_header(&mut self) -> Result<()> {
        let generator = self.service.generator();
        writeln!(
            self.output,
            "{}",
            view::game_header(
                generator.first(),
                generator.second(),
                self.session.total_count()
            )
        )?;
        Ok(())
    }

    /// Shows the current question and handles one line of input.
    fn ask_question(&mut self) -> Result<Step> {
        let Some(question) = self.session.current_question() else {
            return Ok(Step::Continue);
        };

        writeln!(self.output)?;
        writeln!(self.output, "{}", view::progress_line(&self.session.progress()))?;
        writeln!(self.output, "{}", view::question_prompt(question))?;

        let Some(line) = self.prompt("> ")? else {
            return Ok(Step::Quit);
        };

        let step = match Input::parse(&line) {
            Input::Answer(value) => {
                let answer = self.service.answer(&mut self.session, value)?;
                writeln!(self.output, "{}", view::feedback(answer.outcome))?;
                match answer.summary {
                    Some(summary) => Step::Finished {
                        summary,
                        progress: answer.progress,
                    },
                    None => Step::Continue,
                }
            }
            Input::NewGame => Step::Restart,
            Input::Help => {
                writeln!(self.output, "{}", view::HELP)?;
                Step::Continue
            }
            Input::Quit => Step::Quit,
            Input::Blank => Step::Continue,
            Input::Invalid(raw) => {
                writeln!(self.output, "Not a number: {raw} (type `help` for commands)")?;
                Step::Continue
            }
        };
        Ok(step)
    }

    fn show_completion(
        &mut self,
        summary: &SessionSummary,
        progress: &SessionProgress,
    ) -> Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{}", view::progress_line(progress))?;
        writeln!(self.output, "{}", view::completion_banner(progress.total))?;
        writeln!(self.output, "{}", view::summary_line(summary))?;
        if self.summary_json {
            let json = serde_json::to_string(summary).context("failed to encode summary")?;
            writeln!(self.output, "{json}")?;
        }
        Ok(())
    }

    fn ask_play_again(&mut self) -> Result<bool> {
        let answer = self.prompt("Play again? [y/N] ")?;
        Ok(answer.is_some_and(|line| {
            matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
        }))
    }

    /// Writes `label` and reads one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
