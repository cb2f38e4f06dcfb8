// Copyright 2025 benchcmp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Baseline-vs-optimized benchmark log comparison.
//!
//! This crate extracts latency and throughput metrics from free-form
//! benchmark logs, computes per-test improvements and renders a comparison
//! report with SLA verdicts.
//!
//! # Quick Start
//!
//! ```no_run
//! use benchcmp_benchmarks::{compare, render, ColorMode, ReportConfig, ReportFormat, RunSelection};
//!
//! let selection = RunSelection::from_paths("baseline.log", "optimized.log");
//! let comparison = compare(&selection, &ReportConfig::default())?;
//! print!("{}", render(&comparison, ReportFormat::Text, ColorMode::Ansi)?);
//! # Ok::<(), benchcmp_benchmarks::CompareError>(())
//! ```
//!
//! # Modules
//!
//! - [`result`] - `MetricRecord` and `ParseResult`
//! - [`extract`] - Pattern-based log extraction
//! - [`improvement`] - Percent improvement and speedup
//! - [`comparison`] - Structured comparison and SLA checks
//! - [`report`] - Terminal report
//! - [`markdown`] - Markdown report
//! - [`selector`] - Choosing which logs to compare
//! - [`config`] - Key tests and SLA targets
//! - [`io`] - Reading logs and writing reports

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod comparison;
pub mod config;
pub mod error;
pub mod extract;
pub mod improvement;
pub mod io;
pub mod markdown;
pub mod report;
pub mod result;
pub mod selector;
pub mod style;

pub use comparison::{Comparison, SlaCheck, Verdict};
pub use config::ReportConfig;
pub use error::{CompareError, Result};
pub use extract::parse_log;
pub use improvement::{Direction, Improvement};
pub use report::ReportFormat;
pub use result::{MetricRecord, ParseResult};
pub use selector::RunSelection;
pub use style::ColorMode;

/// Read both logs of `selection` and compare them.
///
/// A mirrored selection gets a note in the report header so a
/// baseline-vs-baseline run is not mistaken for "no change".
pub fn compare(selection: &RunSelection, config: &ReportConfig) -> Result<Comparison> {
    let baseline = io::read_log(&selection.baseline)?;
    let optimized = io::read_log(&selection.optimized)?;

    let comparison = Comparison::build(&baseline, &optimized, config);
    Ok(match selection.note() {
        Some(note) => comparison.with_note(note),
        None => comparison,
    })
}

/// Render a comparison in the requested format.
pub fn render(comparison: &Comparison, format: ReportFormat, mode: ColorMode) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(report::render_text(comparison, mode)),
        ReportFormat::Markdown => Ok(markdown::generate_report(comparison)),
        ReportFormat::Json => io::comparison_json(comparison),
    }
}
