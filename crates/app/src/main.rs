mod cli;
mod logging;
mod terminal;
mod view;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use drill_services::DrillService;

use crate::cli::Cli;
use crate::terminal::Terminal;

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level).context("failed to initialize logging")?;

    let (first, second) = cli.ranges()?;
    info!(%first, %second, "starting drill");

    // The session lives inside the terminal loop and is handed to the service by reference.
    let service = DrillService::new(first, second);
    let mut terminal = Terminal::new(io::stdin().lock(), io::stdout().lock(), service)
        .with_summary_json(cli.summary_json);
    terminal.run()
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}
