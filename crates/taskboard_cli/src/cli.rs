//! Command-line arguments.

use clap::{Parser, ValueEnum};

/// Output rendering for the final board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Runs one scripted board session and prints the resulting lists.
#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about)]
pub struct Cli {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, env = "TASKBOARD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off without it.
    #[arg(long, env = "TASKBOARD_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Project to submit, as `TITLE|DESCRIPTION|PEOPLE`. Repeatable.
    #[arg(long = "project", value_name = "TITLE|DESCRIPTION|PEOPLE")]
    pub projects: Vec<String>,

    /// Title of a project to drag onto the finished list. Repeatable.
    #[arg(long = "finish", value_name = "TITLE")]
    pub finish: Vec<String>,

    /// Skip inserting the example project.
    #[arg(long)]
    pub no_example: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}
