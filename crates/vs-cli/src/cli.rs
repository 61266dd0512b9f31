//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Verstep - inspect the module-migration version ledger
#[derive(Parser, Debug)]
#[command(name = "verstep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Path to the ledger database file
    #[arg(short, long, global = true, env = "VERSTEP_DB", default_value = "verstep.duckdb")]
    pub db: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current version of every tracked module
    Status(StatusArgs),

    /// Show the applied-step history for one module
    History(HistoryArgs),
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON array
    Json,
}

/// Arguments for the status command
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Show the init track for this subdomain instead of the global track
    #[arg(short, long)]
    pub subdomain: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the history command
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Module relative name
    pub module: String,

    /// Show the init track for this subdomain instead of the global track
    #[arg(short, long)]
    pub subdomain: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod cli_test;
