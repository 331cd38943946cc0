//! CLI argument definitions for the `anthro` screening tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "anthro",
    version,
    about = "WHO child growth screening for ages 0-60 months",
    long_about = "Compute WHO Child Growth Standards z-scores and clinical categories.\n\n\
                  Covers head circumference, length/height and weight for age,\n\
                  weight for length/height, and MUAC for age."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the WHO reference tables
    /// (default: $ANTHRO_REFERENCE_DIR, then the bundled `reference/`).
    #[arg(long = "reference-dir", value_name = "DIR", global = true)]
    pub reference_dir: Option<PathBuf>,

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

    /// Prefix log lines with timestamps.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Include measurement values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Screen one child on every indicator that was measured.
    Assess(AssessArgs),

    /// Compute a single rounded z-score.
    Zscore(ZscoreArgs),

    /// List the loaded reference tables.
    Tables(TablesArgs),
}

#[derive(Parser)]
pub struct AssessArgs {
    /// 1 or female, 2 or male.
    #[arg(long, value_name = "GENDER", allow_hyphen_values = true)]
    pub gender: String,

    /// Age in completed months (0-60).
    #[arg(long = "age", value_name = "MONTHS", allow_hyphen_values = true)]
    pub age_months: i64,

    /// Length or height in cm.
    #[arg(long = "height", value_name = "CM")]
    pub height_cm: Option<f64>,

    /// Weight in kg.
    #[arg(long = "weight", value_name = "KG")]
    pub weight_kg: Option<f64>,

    /// Head circumference in cm.
    #[arg(long = "head", value_name = "CM")]
    pub head_circumference_cm: Option<f64>,

    /// Mid-upper arm circumference in cm.
    #[arg(long = "muac", value_name = "CM")]
    pub muac_cm: Option<f64>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct ZscoreArgs {
    /// Indicator name or abbreviation (HCFA, HFA, WFA, WFH).
    #[arg(long, value_name = "INDICATOR")]
    pub indicator: String,

    /// Measured value (cm for head/height, kg for weight).
    #[arg(long, value_name = "VALUE")]
    pub value: f64,

    /// 1 or female, 2 or male.
    #[arg(long, value_name = "GENDER", allow_hyphen_values = true)]
    pub gender: String,

    /// Age in completed months (0-60).
    #[arg(long = "age", value_name = "MONTHS", allow_hyphen_values = true)]
    pub age_months: i64,

    /// Length or height in cm (weight-for-height only).
    #[arg(long = "height", value_name = "CM")]
    pub height_cm: Option<f64>,
}

#[derive(Parser)]
pub struct TablesArgs {
    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_layout_flags_are_global() {
        let cli = Cli::try_parse_from([
            "anthro",
            "tables",
            "--log-timestamps",
            "--log-target",
        ])
        .expect("parse");
        assert!(cli.log_timestamps);
        assert!(cli.log_target);
        assert!(!cli.log_data);
    }

    #[test]
    fn assess_accepts_negative_age() {
        let cli = Cli::try_parse_from(["anthro", "assess", "--gender", "f", "--age", "-1"])
            .expect("parse");
        match cli.command {
            Command::Assess(args) => assert_eq!(args.age_months, -1),
            _ => panic!("expected assess"),
        }
    }
}
