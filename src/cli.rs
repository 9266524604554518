// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dagview`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dagview",
    version,
    about = "Lay out a workflow DAG and replay job status events against it.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the view config file (TOML).
    ///
    /// Default: `Dagview.toml` in the current working directory. A missing
    /// file means built-in defaults.
    #[arg(long, value_name = "PATH", default_value = "Dagview.toml")]
    pub config: PathBuf,

    /// JSON file holding the workflow's node list.
    #[arg(long, value_name = "PATH")]
    pub workflow: PathBuf,

    /// JSON-lines file of status events to replay, in order.
    ///
    /// Without it the view is drawn and then waits for Ctrl-C.
    #[arg(long, value_name = "PATH")]
    pub events: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAGVIEW_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the render descriptor and exit.
    #[arg(long)]
    pub dry_run: bool,
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
