// Copyright 2025 benchcmp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Markdown output generation for comparisons.
//!
//! Same sections as the terminal report, as GitHub tables and without
//! escape codes.

use crate::comparison::Comparison;
use crate::report::fmt_value;
use std::fmt::Write;

/// Generate a markdown comparison report.
pub fn generate_report(comparison: &Comparison) -> String {
    let mut output = String::new();

    writeln!(output, "# Benchmark Comparison Report").unwrap();
    writeln!(output).unwrap();
    if let Some(note) = &comparison.note {
        writeln!(output, "> {note}").unwrap();
        writeln!(output).unwrap();
    }

    writeln!(output, "## Latency (lower is better)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "| Test | Metric | Baseline (ms) | Optimized (ms) | Improvement |").unwrap();
    writeln!(output, "|------|--------|---------------|----------------|-------------|").unwrap();
    for row in &comparison.latency {
        for (metric, delta) in [("P50", &row.p50), ("P99", &row.p99)] {
            writeln!(
                output,
                "| {} | {} | {} | {} | {} |",
                row.test,
                metric,
                fmt_value(delta.baseline),
                fmt_value(delta.optimized),
                delta.improvement
            )
            .unwrap();
        }
    }

    writeln!(output).unwrap();
    writeln!(output, "## Throughput (higher is better)").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "| Test | Baseline (qps) | Optimized (qps) | Improvement |").unwrap();
    writeln!(output, "|------|----------------|-----------------|-------------|").unwrap();
    for row in &comparison.throughput {
        writeln!(
            output,
            "| {} | {} | {} | {} |",
            row.test,
            fmt_value(row.throughput.baseline),
            fmt_value(row.throughput.optimized),
            row.throughput.improvement
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "## SLA Target Status").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "| Target | Value | Status |").unwrap();
    writeln!(output, "|--------|-------|--------|").unwrap();
    for check in &comparison.sla {
        writeln!(
            output,
            "| {} | {} | {} |",
            check.label,
            fmt_value(check.value),
            check.verdict.as_str()
        )
        .unwrap();
    }

    writeln!(output).unwrap();
    writeln!(output, "---").unwrap();
    writeln!(output, "Key tests compared: {}", comparison.latency.len()).unwrap();

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use crate::extract::parse_log;

    #[test]
    fn test_markdown_tables() {
        let comparison = Comparison::build(
            &parse_log("P50: 60.40 ms\nThroughput: 80 qps\n"),
            &parse_log("P50: 30.20 ms\nThroughput: 150 qps\n"),
            &ReportConfig::default(),
        );
        let md = generate_report(&comparison);

        assert!(md.starts_with("# Benchmark Comparison Report"));
        assert!(md.contains("| overall | P50 | 60.4 | 30.2 | +50.0% (2.0x) |"));
        assert!(md.contains("| overall | P99 | N/A | N/A | N/A |"));
        assert!(md.contains("| overall | 80.0 | 150.0 | +87.5% (1.9x) |"));
        assert!(md.contains("| p50 ≤ 50ms | 30.2 | PASS |"));
        assert!(md.contains("Key tests compared: 1"));
        assert!(!md.contains('\u{1b}'));
    }

    #[test]
    fn test_markdown_note() {
        let comparison = Comparison::build(
            &parse_log("P50: 1 ms\n"),
            &parse_log("P50: 1 ms\n"),
            &ReportConfig::default(),
        )
        .with_note("mirrored");
        assert!(generate_report(&comparison).contains("> mirrored\n"));
    }
}
