//! CLI argument definitions for the checklist viewer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "herp",
    version,
    about = "Italian herpetofauna checklist viewer",
    long_about = "Browse the Italian amphibian and reptile checklist.\n\n\
                  The table view filters, sorts, and prints taxa; the map view\n\
                  summarizes regional presence for the filtered taxa."
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

    /// TOML file with default source, filters, sort keys, and columns.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

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
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the filtered and sorted checklist.
    Table(TableArgs),

    /// Print the regional presence summary of the filtered checklist.
    Map(MapArgs),

    /// List region codes, names, and macro-regions.
    Regions,
}

/// Dataset location and row filters shared by the views.
#[derive(Args)]
pub struct SourceArgs {
    /// Checklist path or http(s) URL (default: checklist.csv).
    #[arg(long = "source", short = 's', value_name = "PATH|URL")]
    pub source: Option<String>,

    /// Field delimiter: a single character, or `tab`.
    #[arg(long = "delimiter", short = 'd', value_name = "CHAR")]
    pub delimiter: Option<String>,

    /// Case-insensitive substring filter on a field (repeatable).
    #[arg(long = "filter", short = 'f', value_name = "FIELD=QUERY")]
    pub filters: Vec<String>,
}

#[derive(Parser)]
pub struct TableArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Sort key, primary first (repeatable).
    #[arg(long = "sort", value_name = "FIELD[:asc|:desc]")]
    pub sort: Vec<String>,

    /// Visible columns, comma separated.
    #[arg(long = "columns", value_delimiter = ',', value_name = "FIELD,...")]
    pub columns: Option<Vec<String>>,

    /// Print at most this many rows.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: TableFormatArg,

    /// List the dataset's fields instead of printing rows.
    #[arg(long = "list-fields")]
    pub list_fields: bool,
}

#[derive(Parser)]
pub struct MapArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: MapFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TableFormatArg {
    Table,
    Json,
    Csv,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum MapFormatArg {
    Table,
    Json,
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
