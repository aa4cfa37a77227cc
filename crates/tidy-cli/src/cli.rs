//! CLI argument definitions for the `tidy` binary.

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tidy_cli::logging::LogFormat;
use tracing::level_filters::LevelFilter;

use tidy_normalization::{
    CleaningRule, CleaningType, DEFAULT_MIN_PHONE_DIGITS, Passphrase, PercentageMode,
};

#[derive(Parser)]
#[command(
    name = "tidy",
    version,
    about = "Column Tidy - Normalize messy text columns in CSV files",
    long_about = "Normalize messy text columns in CSV files.\n\n\
                  Cleans phone numbers, currency, percentages, emails, URLs,\n\
                  scientific notation and roman numerals. Cells that cannot be\n\
                  parsed become empty; the summary reports how many were lost."
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

    /// Allow cell values in trace-level logs.
    ///
    /// Off by default because cells often hold personal data.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Apply one transform to the given columns of a CSV file.
    Apply(ApplyArgs),

    /// Apply a cleaning plan (TOML or JSON) to a CSV file.
    Run(RunArgs),

    /// List the available transforms.
    Transforms,
}

/// Input and output options shared by `apply` and `run`.
#[derive(Args)]
pub struct IoArgs {
    /// CSV file to clean.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV path (default: <INPUT stem>_clean.csv beside the input).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Also write the per-column report as JSON.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Clean and report without writing the output CSV.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Transform to apply.
    #[arg(long = "transform", short = 't', value_enum)]
    pub transform: TransformArg,

    /// Comma-separated column names.
    #[arg(
        long = "columns",
        short = 'c',
        value_name = "COLUMNS",
        value_delimiter = ',',
        required = true
    )]
    pub columns: Vec<String>,

    /// Minimum digit count for phone numbers.
    #[arg(long = "min-digits", value_name = "N", default_value_t = DEFAULT_MIN_PHONE_DIGITS)]
    pub min_digits: usize,

    /// Accept percentages without a `%` sign as already-decimal values.
    #[arg(long = "lenient")]
    pub lenient: bool,

    /// Passphrase for the encrypt and decrypt transforms.
    #[arg(long = "passphrase", value_name = "PASSPHRASE")]
    pub passphrase: Option<String>,
}

impl ApplyArgs {
    /// Build the single-rule plan this invocation describes.
    pub fn to_rule(&self) -> Result<CleaningRule> {
        let transform = self.transform.to_cleaning_type(self)?;
        Ok(CleaningRule::new(transform, self.columns.iter().cloned()))
    }
}

#[derive(Parser)]
pub struct RunArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Cleaning plan file (`.toml`, or `.json`).
    #[arg(long = "plan", short = 'p', value_name = "PLAN")]
    pub plan: PathBuf,
}

/// CLI transform choices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TransformArg {
    Phone,
    Monetary,
    Percentage,
    Email,
    Url,
    Scientific,
    Roman,
    Encrypt,
    Decrypt,
}

impl TransformArg {
    fn to_cleaning_type(self, args: &ApplyArgs) -> Result<CleaningType> {
        let transform = match self {
            Self::Phone => CleaningType::Phone {
                min_digits: args.min_digits,
            },
            Self::Monetary => CleaningType::Monetary,
            Self::Percentage => CleaningType::Percentage {
                mode: if args.lenient {
                    PercentageMode::Lenient
                } else {
                    PercentageMode::Strict
                },
            },
            Self::Email => CleaningType::Email,
            Self::Url => CleaningType::Url,
            Self::Scientific => CleaningType::Scientific,
            Self::Roman => CleaningType::Roman,
            Self::Encrypt => CleaningType::Encrypt {
                passphrase: require_passphrase(args)?,
            },
            Self::Decrypt => CleaningType::Decrypt {
                passphrase: require_passphrase(args)?,
            },
        };
        Ok(transform)
    }
}

fn require_passphrase(args: &ApplyArgs) -> Result<Passphrase> {
    let Some(value) = args.passphrase.as_deref() else {
        bail!("--passphrase is required for the {:?} transform", args.transform);
    };
    Ok(Passphrase::new(value)?)
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
