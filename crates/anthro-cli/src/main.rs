//! `anthro` growth screening CLI.

use std::io::{self, IsTerminal};

use clap::{ColorChoice, Parser};
use tracing::level_filters::LevelFilter;

use anthro_cli::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use anthro_cli::commands::{run_assess, run_tables, run_zscore};
use anthro_cli::logging::{LogConfig, LogFormat, init_logging};
use anthro_cli::summary::{print_assessment, print_tables, print_zscore};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let reference_dir = cli.reference_dir.as_deref();
    let exit_code = match &cli.command {
        Command::Assess(args) => match run_assess(args, reference_dir) {
            Ok(assessment) => {
                if args.json {
                    print_json(&assessment);
                } else {
                    print_assessment(&assessment);
                }
                if assessment.has_failures() { 1 } else { 0 }
            }
            Err(error) => report(&error),
        },
        Command::Zscore(args) => match run_zscore(args, reference_dir) {
            Ok(score) => {
                print_zscore(&score);
                0
            }
            Err(error) => report(&error),
        },
        Command::Tables(args) => match run_tables(reference_dir) {
            Ok(summary) => {
                if args.json {
                    print_json(&summary);
                } else {
                    print_tables(&summary);
                }
                0
            }
            Err(error) => report(&error),
        },
    };
    std::process::exit(exit_code);
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(error) => eprintln!("error: serialize output: {error}"),
    }
}

fn report(error: &anyhow::Error) -> i32 {
    eprintln!("error: {error:#}");
    1
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.log_data = cli.log_data;
    config.with_timestamps = cli.log_timestamps;
    config.with_target = cli.log_target;
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
