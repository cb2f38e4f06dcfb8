// Copyright 2025 benchcmp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Plain-text comparison report.
//!
//! Renders a [`Comparison`] as the fixed-layout terminal report: banner,
//! latency section, throughput section and SLA status. Color comes only
//! from [`crate::style::paint`].

use crate::comparison::{Comparison, MetricDelta, SlaCheck, Verdict};
use crate::style::{paint, ColorMode, Tone};
use std::fmt::Write;

const WIDTH: usize = 80;
const NAME_WIDTH: usize = 23;

/// Output format for a rendered comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Fixed-layout terminal report.
    #[default]
    Text,
    /// GitHub-flavored markdown tables.
    Markdown,
    /// Pretty-printed JSON of the [`Comparison`].
    Json,
}

/// Render the terminal report.
pub fn render_text(comparison: &Comparison, mode: ColorMode) -> String {
    let heavy = "=".repeat(WIDTH);
    let light = "-".repeat(WIDTH);
    let mut output = String::new();

    writeln!(output, "{heavy}").unwrap();
    writeln!(output, "BENCHMARK COMPARISON REPORT").unwrap();
    writeln!(output, "{heavy}").unwrap();
    if let Some(note) = &comparison.note {
        writeln!(output, "{note}").unwrap();
    }
    writeln!(output).unwrap();

    writeln!(output, "LATENCY COMPARISON (lower is better)").unwrap();
    writeln!(output, "{light}").unwrap();
    writeln!(
        output,
        "{:<25} {:<15} {:<15} {:<25}",
        "Metric", "Baseline", "Optimized", "Improvement"
    )
    .unwrap();
    writeln!(output, "{light}").unwrap();
    for row in &comparison.latency {
        writeln!(
            output,
            "  {:<NAME_WIDTH$} P50: {}",
            truncate(&row.test),
            delta_cells(&row.p50, "ms", mode)
        )
        .unwrap();
        writeln!(output, "  {:<NAME_WIDTH$} P99: {}", "", delta_cells(&row.p99, "ms", mode)).unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "THROUGHPUT COMPARISON (higher is better)").unwrap();
    writeln!(output, "{light}").unwrap();
    for row in &comparison.throughput {
        writeln!(
            output,
            "  {:<NAME_WIDTH$} {}",
            truncate(&row.test),
            delta_cells(&row.throughput, "qps", mode)
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "{heavy}").unwrap();
    writeln!(output, "SLA TARGET STATUS").unwrap();
    writeln!(output, "{heavy}").unwrap();
    for check in &comparison.sla {
        writeln!(
            output,
            "  {:<30}: {:>10} [{}]",
            check.label,
            fmt_value(check.value),
            verdict_cell(check, mode)
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "{heavy}").unwrap();

    output
}

fn delta_cells(delta: &MetricDelta, unit: &str, mode: ColorMode) -> String {
    format!(
        "{:>8} → {:>8} {unit}  {}",
        fmt_value(delta.baseline),
        fmt_value(delta.optimized),
        delta.improvement.display(mode)
    )
}

fn verdict_cell(check: &SlaCheck, mode: ColorMode) -> String {
    match check.verdict {
        Verdict::Pass => paint(check.verdict.as_str(), Tone::Good, mode),
        Verdict::Fail => paint(check.verdict.as_str(), Tone::Bad, mode),
        Verdict::NotApplicable => check.verdict.as_str().to_string(),
    }
}

fn truncate(name: &str) -> String {
    name.chars().take(NAME_WIDTH).collect()
}

/// Format a metric value, `N/A` when absent.
///
/// Whole numbers keep one decimal (`200.0`); others print as parsed (`60.4`).
pub fn fmt_value(value: Option<f64>) -> String {
    match value {
        None => "N/A".to_string(),
        Some(v) if v.is_finite() && v.fract() == 0.0 && v.abs() < 1e16 => format!("{v:.1}"),
        Some(v) => v.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use crate::extract::parse_log;
    use crate::style::strip_ansi;

    fn text_for(baseline: &str, optimized: &str) -> String {
        let comparison = Comparison::build(
            &parse_log(baseline),
            &parse_log(optimized),
            &ReportConfig::default(),
        );
        render_text(&comparison, ColorMode::Plain)
    }

    #[test]
    fn test_fmt_value() {
        assert_eq!(fmt_value(None), "N/A");
        assert_eq!(fmt_value(Some(60.40)), "60.4");
        assert_eq!(fmt_value(Some(200.0)), "200.0");
        assert_eq!(fmt_value(Some(0.0)), "0.0");
        assert_eq!(fmt_value(Some(3919.22)), "3919.22");
    }

    #[test]
    fn test_latency_halved_report() {
        let text = text_for("P50: 60.40 ms\nP99: 200.00 ms\n", "P50: 30.20 ms\nP99: 200.00 ms\n");

        assert!(text.contains("  overall                 P50:     60.4 →     30.2 ms  +50.0% (2.0x)"));
        assert!(text.contains("                          P99:    200.0 →    200.0 ms  0.0%"));
        assert!(!text.contains("+0.0%"));
    }

    #[test]
    fn test_sections_in_order() {
        let text = text_for("P50: 1 ms\n", "P50: 1 ms\n");
        let banner = text.find("BENCHMARK COMPARISON REPORT").unwrap();
        let latency = text.find("LATENCY COMPARISON (lower is better)").unwrap();
        let throughput = text.find("THROUGHPUT COMPARISON (higher is better)").unwrap();
        let sla = text.find("SLA TARGET STATUS").unwrap();
        assert!(banner < latency && latency < throughput && throughput < sla);
        assert!(text.starts_with(&"=".repeat(80)));
    }

    #[test]
    fn test_throughput_row() {
        let text = text_for("Throughput: 80 qps\n", "Throughput: 150 qps\n");
        assert!(text.contains("  overall                     80.0 →    150.0 qps  +87.5% (1.9x)"));
    }

    #[test]
    fn test_missing_values_render_na() {
        let text = text_for("P50: 10 ms\n", "nothing\n");
        assert!(text.contains("P50:     10.0 →      N/A ms  N/A"));
        assert!(text.contains("P99:      N/A →      N/A ms  N/A"));
    }

    #[test]
    fn test_zero_baseline_marker() {
        let text = text_for("P50: 0 ms\n", "P50: 5 ms\n");
        assert!(text.contains("N/A (baseline=0)"));
    }

    #[test]
    fn test_sla_rows() {
        let text = text_for("", "P50: 42 ms\nP99: 700 ms\n");
        assert!(text.contains(&format!("  {:<30}: {:>10} [PASS]", "p50 ≤ 50ms", "42.0")));
        assert!(text.contains(&format!("  {:<30}: {:>10} [FAIL]", "p99 ≤ 500ms", "700.0")));
        assert!(text.contains(&format!("  {:<30}: {:>10} [N/A]", "Throughput ≥ 100 qps", "N/A")));
    }

    #[test]
    fn test_sla_all_na_without_reference() {
        let text = text_for("P50: 10 ms\n", "TEST_F(S, Other)\nP50: 10 ms\n");
        let sla = &text[text.find("SLA TARGET STATUS").unwrap()..];
        assert_eq!(sla.matches("[N/A]").count(), 3);
        assert!(!sla.contains("FAIL"));
    }

    #[test]
    fn test_long_names_are_truncated() {
        let text = text_for("TEST_F(S, RangeQuery_1Hour_1MinStep)\nP50: 1 ms\n", "");
        assert!(text.contains("  RangeQuery_1Hour_1MinSt P50:"));
    }

    #[test]
    fn test_note_under_banner() {
        let comparison = Comparison::build(
            &parse_log("P50: 1 ms\n"),
            &parse_log("P50: 1 ms\n"),
            &ReportConfig::default(),
        )
        .with_note("same file");
        let text = render_text(&comparison, ColorMode::Plain);
        let banner = format!("BENCHMARK COMPARISON REPORT\n{}\nsame file\n", "=".repeat(80));
        assert!(text.contains(&banner));
    }

    #[test]
    fn test_ansi_report_strips_to_plain() {
        let comparison = Comparison::build(
            &parse_log("P50: 60.40 ms\nThroughput: 80 qps\n"),
            &parse_log("P50: 30.20 ms\nThroughput: 150 qps\n"),
            &ReportConfig::default(),
        );
        let ansi = render_text(&comparison, ColorMode::Ansi);
        assert!(ansi.contains("\u{1b}[92m+50.0% (2.0x)\u{1b}[0m"));
        assert!(ansi.contains("[\u{1b}[92mPASS\u{1b}[0m]"));
        assert_eq!(strip_ansi(&ansi), render_text(&comparison, ColorMode::Plain));
    }
}
