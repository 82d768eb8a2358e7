// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line arguments for `taskdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskdag",
    version,
    about = "Derive schedule views from a task snapshot.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the snapshot file (JSON export of the task store).
    ///
    /// Default: `tasks.json` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "tasks.json", global = true)]
    pub snapshot: String,

    /// Treat this date as "today" for next-up selection (YYYY-MM-DD).
    ///
    /// If omitted, the current local date is used.
    #[arg(long, value_name = "DATE", global = true)]
    pub today: Option<NaiveDate>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print all tasks grouped by owner, with readiness and critical-path
    /// markers.
    Report,

    /// Pick the tasks that should be worked on next.
    Next,

    /// Preview the date shifts a changed end date pushes onto direct
    /// dependents.
    Cascade {
        /// Id of the task whose end date changes.
        #[arg(long, value_name = "ID")]
        task: String,

        /// The task's new end date (YYYY-MM-DD).
        #[arg(long, value_name = "DATE")]
        new_end: NaiveDate,
    },

    /// Validate a dependency edit before submitting it to the store.
    Check {
        /// Id of the task being edited; omit for a task being created.
        #[arg(long, value_name = "ID")]
        task: Option<String>,

        /// Candidate dependency ids, comma separated.
        #[arg(long, value_name = "IDS", value_delimiter = ',')]
        deps: Vec<String>,

        /// Proposed start date, to warn when it precedes a dependency's
        /// end date.
        #[arg(long, value_name = "DATE")]
        start: Option<NaiveDate>,
    },
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
