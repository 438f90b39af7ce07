//! CLI argument definitions for the ARFF preparation tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "arff-prep",
    version,
    about = "ARFF dataset preparation - repair, load, and convert to Parquet",
    long_about = "Prepare ARFF dataset files for analysis.\n\n\
                  Repairs duplicate attribute declarations, loads each file into a\n\
                  typed table, integer-codes the class label column, and writes one\n\
                  Parquet file per input."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the full pipeline over a directory of ARFF files.
    Run(RunArgs),

    /// Scan a directory and report duplicate attribute declarations.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct RunArgs {
    /// Directory containing the raw .arff input files.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,

    /// Staging directory for corrected copies (default: <INPUT_DIR>/pre-processed).
    #[arg(long = "staging-dir", value_name = "DIR")]
    pub staging_dir: Option<PathBuf>,

    /// Output directory for Parquet files (default: <INPUT_DIR>/processed).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Parquet compression codec.
    #[arg(long = "compression", value_enum, default_value = "snappy")]
    pub compression: CompressionArg,

    /// Stage and load without writing Parquet output.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Directory containing the raw .arff input files.
    #[arg(value_name = "INPUT_DIR")]
    pub input_dir: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CompressionArg {
    Snappy,
    Zstd,
    Uncompressed,
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
