// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for the `taskdag` inspection tool.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskdag",
    version,
    about = "Compute levels, layout and relations for a task dependency snapshot.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the task snapshot (JSON array of task records, or an object
    /// with a `tasks` field).
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: String,

    /// Path to a layout config file (TOML).
    ///
    /// If omitted, the built-in canvas constants are used.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Classify every task relative to this focused task id.
    #[arg(long, value_name = "ID")]
    pub focus: Option<String>,

    /// Use transitive-closure classification instead of direct edges.
    ///
    /// Only meaningful together with `--focus`.
    #[arg(long)]
    pub transitive: bool,

    /// Emit the computed layout as JSON on stdout instead of a text report
    /// (`--focus` classification is text-mode only).
    #[arg(long)]
    pub json: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
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
