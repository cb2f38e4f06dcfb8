// Copyright 2025 benchcmp Contributors
// SPDX-License-Identifier: Apache-2.0

//! CLI for benchmark log comparison.
//!
//! Compares a baseline log against an optimized log, given either as two
//! positional paths or as a results directory searched with `--dir`.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

use anyhow::Context;
use benchcmp_benchmarks::{io, ColorMode, ReportConfig, ReportFormat, RunSelection};
use clap::{CommandFactory, Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Compare benchmark results before and after optimization.
#[derive(Parser, Debug)]
#[command(name = "benchcmp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Baseline log file.
    pub baseline: Option<PathBuf>,

    /// Optimized log file.
    pub optimized: Option<PathBuf>,

    /// Directory containing benchmark results (`*baseline*.log`, `*after*.log`
    /// or `*optimized*.log`); the latest of each is compared.
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// TOML file overriding key tests and SLA targets.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the report to a file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Disable ANSI colors.
    #[arg(long)]
    pub no_color: bool,

    /// Log more detail to stderr (repeat for debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Terminal report.
    Text,
    /// Markdown tables.
    Markdown,
    /// JSON.
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ReportFormat::Text,
            Format::Markdown => ReportFormat::Markdown,
            Format::Json => ReportFormat::Json,
        }
    }
}

impl Cli {
    /// Resolve the logs to compare, `None` when neither mode was given.
    pub fn selection(&self) -> benchcmp_benchmarks::Result<Option<RunSelection>> {
        if let Some(dir) = &self.dir {
            return RunSelection::from_dir(dir).map(Some);
        }
        Ok(match (&self.baseline, &self.optimized) {
            (Some(baseline), Some(optimized)) => Some(RunSelection::from_paths(baseline, optimized)),
            _ => None,
        })
    }

    fn color_mode(&self) -> ColorMode {
        if self.no_color || self.output.is_some() {
            ColorMode::Plain
        } else {
            ColorMode::Ansi
        }
    }

    fn log_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "warn",
            (false, 1) => "info",
            (false, _) => "debug",
        }
    }
}

fn init_tracing(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// `ExitCode::FAILURE` after printing help when no logs were named, otherwise
/// `ExitCode::SUCCESS` once the report is written.
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let Some(selection) = cli.selection()? else {
        Cli::command().print_help().context("printing usage")?;
        return Ok(ExitCode::FAILURE);
    };

    let format = ReportFormat::from(cli.format);
    if cli.dir.is_some() && format == ReportFormat::Text && cli.output.is_none() {
        println!("{}", selection.describe());
        println!();
    }

    let config = match &cli.config {
        Some(path) => ReportConfig::load(path)?,
        None => ReportConfig::default(),
    };
    debug!(?config, "report config");

    let comparison = benchcmp_benchmarks::compare(&selection, &config)?;
    let report = benchcmp_benchmarks::render(&comparison, format, cli.color_mode())?;

    match &cli.output {
        Some(path) => {
            io::write_report(&report, path)?;
            eprintln!("Report written to {}", path.display());
        }
        None => print!("{report}"),
    }

    Ok(ExitCode::SUCCESS)
}
