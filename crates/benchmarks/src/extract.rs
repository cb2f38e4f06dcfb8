// Copyright 2025 benchcmp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Metric extraction from free-form benchmark logs.
//!
//! Extraction runs in two ordered passes:
//!
//! 1. A line scan that tracks which test is currently active and writes
//!    every matched metric into that test's record (last match wins).
//! 2. A summary override pass that rewrites `overall` p50/p99 from
//!    top-level summary lines such as `Latency p50: 60.40 ms`.
//!
//! Nothing here rejects input. Lines that match no pattern are skipped.

use crate::result::{MetricRecord, ParseResult, OVERALL};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

/// `TEST_F(Suite, Name)` / `BENCHMARK(Suite, Name)` or `Name: Count: 123`.
static TEST_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:TEST_F|BENCHMARK)\([^,]+,\s*(\w+)\)|(\w+):\s+Count:").expect("test pattern")
});

static COUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"Count:\s+([0-9]+)").expect("count pattern"));

static METRIC_PATTERNS: Lazy<Vec<(MetricField, Regex)>> = Lazy::new(|| {
    const LATENCY_UNIT: &str = r"\s*(?:ms|us|μs)";
    let latency = |label: &str| {
        Regex::new(&format!(r"{label}[:\s]+([0-9]+\.?[0-9]*){LATENCY_UNIT}")).expect("latency pattern")
    };
    vec![
        (MetricField::P50, latency("[Pp]50")),
        (MetricField::P90, latency("[Pp]90")),
        (MetricField::P99, latency("[Pp]99")),
        (MetricField::Max, latency("[Mm]ax")),
        (
            MetricField::Throughput,
            Regex::new(r"[Tt]hroughput[:\s]+([0-9]+\.?[0-9]*)\s*(?:qps|queries/sec|samples/sec)")
                .expect("throughput pattern"),
        ),
    ]
});

static SUMMARY_PATTERNS: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"Latency p50[:\s]+([0-9]+\.?[0-9]*)\s*ms").expect("summary p50 pattern"),
        Regex::new(r"Read.*p99[:\s]+([0-9]+\.?[0-9]*)\s*ms").expect("summary p99 pattern"),
    ]
});

/// A numeric field of [`MetricRecord`] that a pattern can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricField {
    /// `p50_ms`
    P50,
    /// `p90_ms`
    P90,
    /// `p99_ms`
    P99,
    /// `max_ms`
    Max,
    /// `throughput_qps`
    Throughput,
}

impl MetricField {
    fn slot<'r>(&self, record: &'r mut MetricRecord) -> &'r mut Option<f64> {
        match self {
            Self::P50 => &mut record.p50_ms,
            Self::P90 => &mut record.p90_ms,
            Self::P99 => &mut record.p99_ms,
            Self::Max => &mut record.max_ms,
            Self::Throughput => &mut record.throughput_qps,
        }
    }
}

/// Which record the line scan is currently writing into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestContext {
    /// No test declared yet.
    Overall,
    /// A test declaration was seen.
    Named(String),
}

impl TestContext {
    /// Record name for this context.
    pub fn name(&self) -> &str {
        match self {
            Self::Overall => OVERALL,
            Self::Named(name) => name,
        }
    }
}

/// Parse a whole log into per-test records.
pub fn parse_log(content: &str) -> ParseResult {
    let mut result = scan_lines(content);
    apply_summary_overrides(content, &mut result);
    result
}

/// First pass: per-line extraction under the current test context.
pub fn scan_lines(content: &str) -> ParseResult {
    let mut result = ParseResult::new();
    let mut context = TestContext::Overall;

    // An empty log still scans one empty line, so `overall` exists.
    for line in content.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if let Some(declared) = match_test_declaration(line) {
            debug!(test = %declared.name, "test declaration");
            context = TestContext::Named(declared.name);
            let record = result.entry(context.name());
            if declared.count.is_some() {
                record.count = declared.count;
            }
        }

        let record = result.entry(context.name());
        extract_metrics(line, record);
    }

    result
}

/// Second pass: summary lines overwrite the `overall` record's p50/p99.
///
/// Has no effect unless `overall` already exists in `result`.
pub fn apply_summary_overrides(content: &str, result: &mut ParseResult) {
    for line in content.lines() {
        for pattern in SUMMARY_PATTERNS.iter() {
            let Some(caps) = pattern.captures(line) else {
                continue;
            };
            let Some(value) = parse_number(&caps[1]) else {
                continue;
            };
            let Some(overall) = result.get_mut(OVERALL) else {
                continue;
            };

            let lower = line.to_lowercase();
            if lower.contains("p50") {
                debug!(value, "summary override p50");
                overall.p50_ms = Some(value);
            } else if lower.contains("p99") {
                debug!(value, "summary override p99");
                overall.p99_ms = Some(value);
            }
        }
    }
}

/// A test declaration found on a line.
#[derive(Debug, Clone, PartialEq)]
pub struct TestDeclaration {
    /// Declared test name.
    pub name: String,
    /// Sample count from a `Name: Count: N` line.
    pub count: Option<u64>,
}

/// Recognize a test declaration line.
pub fn match_test_declaration(line: &str) -> Option<TestDeclaration> {
    let caps = TEST_PATTERN.captures(line)?;
    if let Some(name) = caps.get(1) {
        return Some(TestDeclaration {
            name: name.as_str().to_string(),
            count: None,
        });
    }
    let name = caps.get(2)?.as_str().to_string();
    let count = COUNT_PATTERN
        .captures(line)
        .and_then(|c| c[1].parse::<u64>().ok());
    Some(TestDeclaration { name, count })
}

/// Write every metric found on `line` into `record`.
pub fn extract_metrics(line: &str, record: &mut MetricRecord) {
    for (field, pattern) in METRIC_PATTERNS.iter() {
        if let Some(value) = pattern.captures(line).and_then(|c| parse_number(&c[1])) {
            trace!(test = %record.name, ?field, value, "metric");
            *field.slot(record) = Some(value);
        }
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok()
}
