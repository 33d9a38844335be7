//! CLI argument definitions for the MediGuide data validator.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "mediguide-validate",
    version,
    about = "Validate MediGuide medical directory data",
    long_about = "Validate MediGuide practitioner and symptom records for structural\n\
                  completeness, field-level correctness, and cross-record consistency.\n\n\
                  Writes a categorized report and exits non-zero when errors are found,\n\
                  so it can gate CI."
)]
pub struct Cli {
    /// Directory containing doctors.json and symptoms.json.
    #[arg(value_name = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Path for the plain-text validation report (overwritten each run).
    #[arg(
        long = "report-file",
        value_name = "PATH",
        default_value = "validation_report.txt"
    )]
    pub report_file: PathBuf,

    /// Also write a machine-readable JSON report.
    #[arg(long = "json-report", value_name = "PATH")]
    pub json_report: Option<PathBuf>,

    /// Skip printing the full report to stdout (the summary table is
    /// always printed).
    #[arg(long = "no-print-report")]
    pub no_print_report: bool,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
