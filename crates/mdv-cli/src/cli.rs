//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mdv",
    version,
    about = "Master data validator - check spreadsheet uploads against category rules",
    long_about = "Validate master-data spreadsheet uploads against the field rules \
                  stored for each category.\n\n\
                  Rules are read from a SQLite catalog configured in mdv.toml \
                  (or the file named by --config / MDV_CONFIG)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow uploaded cell values to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Catalog configuration file.
    #[arg(long = "config", value_name = "PATH", global = true, env = "MDV_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List main categories and their subcategories.
    Categories,

    /// Show the field rules that apply to a category.
    Instructions(InstructionsArgs),

    /// Validate an uploaded CSV file against a category's rules.
    Validate(ValidateArgs),

    /// Write a one-row sample template for a category.
    Sample(SampleArgs),
}

#[derive(Parser)]
pub struct InstructionsArgs {
    /// Main category name (exact, case-sensitive).
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Print rules as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Main category name (exact, case-sensitive).
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// CSV upload to validate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the outcome as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Also write a per-row CSV report.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Parser)]
pub struct SampleArgs {
    /// Main category name (exact, case-sensitive).
    #[arg(value_name = "CATEGORY")]
    pub category: String,

    /// Output file (default: stdout).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
