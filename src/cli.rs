// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `plandag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "plandag",
    version,
    about = "Order dependent tasks and time their completion by a worker pool.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the instruction file (one precedence sentence per line).
    #[arg(value_name = "INPUT")]
    pub input: String,

    /// Path to the config file (TOML).
    ///
    /// If omitted, `Plandag.toml` in the current working directory is used
    /// when present; otherwise built-in defaults apply. An explicitly given
    /// path must exist.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Number of simulated workers (overrides the config file).
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Base duration added to every task's letter index (overrides the
    /// config file).
    #[arg(long, value_name = "TICKS")]
    pub base_duration: Option<u64>,

    /// Print only the serial-order report, skipping the worker simulation.
    #[arg(long)]
    pub order_only: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PLANDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the task graph, but don't compute anything.
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
