//! CLI argument definitions for the UK field cleaner.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use ukclean_model::{FieldSelection, FieldType};

#[derive(Parser)]
#[command(
    name = "ukclean",
    version,
    about = "Validate and clean UK phone numbers, NI numbers, postcodes and sort codes",
    long_about = "Validate and clean UK personal and banking fields.\n\n\
                  Reads CSV or plain-text files, repairs what can be repaired safely,\n\
                  explains what cannot, and exports the results as CSV or JSON."
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

    /// Allow raw field values in log output.
    ///
    /// Phone numbers, NI numbers and postcodes are personal data; they are
    /// redacted from logs unless this flag is set.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Validate the fields of a CSV or text file.
    Process(ProcessArgs),

    /// Validate a single value.
    Check(CheckArgs),

    /// List the supported field types and the names they accept.
    Types,
}

#[derive(Args)]
pub struct ProcessArgs {
    /// CSV (.csv) or plain-text (.txt, .tsv) file; the first line is the header.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// How accepted phone numbers are written.
    #[arg(long = "phone-format", value_enum, default_value = "international")]
    pub phone_format: PhoneFormatArg,

    /// Auto-detect the type of every non-empty cell in every column.
    #[arg(long = "all-columns", conflicts_with = "fields")]
    pub all_columns: bool,

    /// Validate a named column, optionally pinned to a type (COLUMN or COLUMN=TYPE).
    ///
    /// Repeatable. Without a type the column name itself is tried as a type
    /// name (e.g. `postcode`, `ni`), falling back to auto-detection. Without
    /// any --field or --all-columns, the phone column is found from the header.
    #[arg(long = "field", value_name = "COLUMN[=TYPE]")]
    pub fields: Vec<FieldSelection>,

    /// Report the header row as a row of header results.
    #[arg(long = "include-header")]
    pub include_header: bool,

    /// Reject files larger than this many bytes.
    #[arg(long = "max-file-bytes", value_name = "BYTES")]
    pub max_file_bytes: Option<u64>,

    /// Write an export in this format.
    #[arg(long = "export", value_enum)]
    pub export: Option<ExportFormatArg>,

    /// CSV export layout (default: single-column for phone-column mode,
    /// per-field otherwise).
    #[arg(long = "layout", value_enum)]
    pub layout: Option<CsvLayoutArg>,

    /// Export destination (default: <FILE stem>_cleaned.<ext> next to FILE).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Maximum number of problem rows listed in the issue table (0 for all).
    #[arg(long = "max-issues", value_name = "N", default_value_t = 50)]
    pub max_issues: usize,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Value to validate.
    #[arg(value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Field type to validate as (auto-detected when omitted).
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub field_type: Option<FieldType>,

    /// How an accepted phone number is written.
    #[arg(long = "phone-format", value_enum, default_value = "international")]
    pub phone_format: PhoneFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PhoneFormatArg {
    /// +44 followed by the national number.
    International,
    /// Leading 0 followed by the national number.
    Uk,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Csv,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CsvLayoutArg {
    SingleColumn,
    PerField,
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
