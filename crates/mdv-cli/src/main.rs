//! Master data validator CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use mdv_cli::commands::{
    Service, open_service, run_categories, run_instructions, run_sample, run_validate,
};
use mdv_cli::logging::{LogConfig, LogFormat, init_logging};
use mdv_cli::output::{write_report_file, write_sample_csv, write_sample_file};
use tracing::level_filters::LevelFilter;

mod cli;
mod summary;

use crate::cli::{
    Cli, Command, InstructionsArgs, LogFormatArg, LogLevelArg, SampleArgs, ValidateArgs,
};
use crate::summary::{print_categories, print_rules, print_validation};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<i32> {
    let service = open_service(cli.config.as_deref())?;
    match &cli.command {
        Command::Categories => {
            print_categories(&run_categories(&service)?);
            Ok(0)
        }
        Command::Instructions(args) => instructions(&service, args),
        Command::Validate(args) => validate(&service, args),
        Command::Sample(args) => sample(&service, args),
    }
}

fn instructions(service: &Service, args: &InstructionsArgs) -> Result<i32> {
    let rules = run_instructions(service, &args.category)?;
    if args.json {
        let json = serde_json::to_string_pretty(&rules.unique()).context("serialize rules")?;
        println!("{json}");
    } else {
        print_rules(&args.category, &rules);
    }
    Ok(0)
}

fn validate(service: &Service, args: &ValidateArgs) -> Result<i32> {
    let report = run_validate(service, &args.category, &args.file)?;
    if args.json {
        println!("{}", report.to_json().context("serialize report")?);
    } else {
        print_validation(&report);
    }
    if let Some(path) = &args.report {
        write_report_file(path, &report)?;
        if !args.json {
            println!("Report: {}", path.display());
        }
    }
    Ok(if report.summary.has_errors() { 1 } else { 0 })
}

fn sample(service: &Service, args: &SampleArgs) -> Result<i32> {
    let template = run_sample(service, &args.category)?;
    if template.headers.is_empty() {
        eprintln!("No field rules found for '{}'.", args.category);
        return Ok(0);
    }
    match &args.output {
        Some(path) => {
            write_sample_file(path, &template)?;
            println!("Sample: {}", path.display());
        }
        None => write_sample_csv(io::stdout().lock(), &template).context("write sample")?,
    }
    Ok(0)
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
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
