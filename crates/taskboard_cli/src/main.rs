//! Project board CLI.
//!
//! # Responsibility
//! - Build the application context once and bootstrap the board.
//! - Replay form submissions and drag gestures given on the command line.
//! - Print the resulting lists as text or JSON.

mod cli;
mod session;

use clap::Parser;
use cli::{Cli, OutputFormat};
use log::info;
use session::BoardSnapshot;
use std::process::ExitCode;
use taskboard_core::{
    core_version, default_log_level, init_logging, AppContext, LogConfig, ProjectBoard,
};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::from(1),
        Ok(false) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("taskboard: {message}");
            ExitCode::from(2)
        }
    }
}

/// Returns `Ok(true)` when some submissions or moves were rejected.
fn run(cli: &Cli) -> Result<bool, String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let config = LogConfig::parse(level, log_dir).map_err(|err| err.to_string())?;
        init_logging(&config).map_err(|err| err.to_string())?;
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    let ctx = AppContext::new();
    let board = ProjectBoard::bootstrap(&ctx).map_err(|err| err.to_string())?;
    if !cli.no_example {
        board.seed_example().map_err(|err| err.to_string())?;
    }

    let mut rejected = false;
    for raw in &cli.projects {
        if let Err(message) = session::submit(&board, raw) {
            eprintln!("taskboard: {message}");
            rejected = true;
        }
    }
    for title in &cli.finish {
        if let Err(message) = session::finish(&ctx, &board, title) {
            eprintln!("taskboard: {message}");
            rejected = true;
        }
    }

    match cli.format {
        OutputFormat::Text => print!("{}", session::render_text(&board)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&BoardSnapshot::capture(&board))
                .map_err(|err| format!("failed to encode board: {err}"))?;
            println!("{json}");
        }
    }
    Ok(rejected)
}
