// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

use crate::types::DataState;

/// Command-line arguments for `taskstack`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskstack",
    version,
    about = "Run a plan of tasks sequentially, letting tasks schedule follow-up work by name.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a run-plan file (TOML).
    ///
    /// Without it the built-in default plan is used.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Initial task to run; repeat to build an ordered plan.
    ///
    /// Overrides `[run].tasks` from the config file.
    #[arg(long = "task", value_name = "NAME")]
    pub tasks: Vec<String>,

    /// State of the data seen by the demo validation task.
    ///
    /// Overrides `[demo].data_state`.
    #[arg(long, value_name = "STATE")]
    pub data_state: Option<DataState>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKSTACK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve and print the plan, but don't run anything.
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
