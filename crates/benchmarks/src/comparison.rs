// Copyright 2025 benchcmp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Structured baseline-vs-optimized comparison.
//!
//! [`Comparison::build`] reads two [`ParseResult`]s pairwise by test name and
//! produces the rows every renderer consumes. Only tests listed in
//! [`ReportConfig::key_tests`] appear.

use crate::config::{ReportConfig, SLA_RECORD};
use crate::improvement::{Direction, Improvement};
use crate::result::{MetricRecord, ParseResult, OVERALL};
use serde::{Deserialize, Serialize};

/// One metric on both sides plus the computed improvement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricDelta {
    /// Baseline value.
    pub baseline: Option<f64>,
    /// Optimized value.
    pub optimized: Option<f64>,
    /// Improvement of optimized over baseline.
    pub improvement: Improvement,
}

impl MetricDelta {
    /// Compare two optional values.
    pub fn new(baseline: Option<f64>, optimized: Option<f64>, direction: Direction) -> Self {
        Self {
            baseline,
            optimized,
            improvement: Improvement::calculate(baseline, optimized, direction),
        }
    }
}

/// p50/p99 latency for one key test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyRow {
    /// Test name.
    pub test: String,
    /// Median latency.
    pub p50: MetricDelta,
    /// 99th percentile latency.
    pub p99: MetricDelta,
}

/// Throughput for one key test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThroughputRow {
    /// Test name.
    pub test: String,
    /// Throughput in qps.
    pub throughput: MetricDelta,
}

/// Outcome of one SLA check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Target met.
    Pass,
    /// Target missed.
    Fail,
    /// Metric absent; never counted as a failure.
    NotApplicable,
}

impl Verdict {
    fn evaluate(value: Option<f64>, threshold: f64, direction: Direction) -> Self {
        match (value, direction) {
            (None, _) => Self::NotApplicable,
            (Some(v), Direction::LowerIsBetter) if v <= threshold => Self::Pass,
            (Some(v), Direction::HigherIsBetter) if v >= threshold => Self::Pass,
            (Some(_), _) => Self::Fail,
        }
    }

    /// Label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::NotApplicable => "N/A",
        }
    }
}

/// One SLA target checked against the optimized run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlaCheck {
    /// Human-readable target, e.g. `p50 ≤ 50ms`.
    pub label: String,
    /// Observed value.
    pub value: Option<f64>,
    /// Threshold the value is checked against.
    pub threshold: f64,
    /// Result of the check.
    pub verdict: Verdict,
}

/// Everything a report shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Extra line shown under the banner, e.g. when a log is compared to itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Latency rows in key-test order.
    pub latency: Vec<LatencyRow>,
    /// Throughput rows in key-test order.
    pub throughput: Vec<ThroughputRow>,
    /// Name of the optimized record the SLA checks used, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sla_source: Option<String>,
    /// SLA checks.
    pub sla: Vec<SlaCheck>,
}

impl Comparison {
    /// Compare two parsed logs.
    pub fn build(baseline: &ParseResult, optimized: &ParseResult, config: &ReportConfig) -> Self {
        let mut latency = Vec::new();
        let mut throughput = Vec::new();

        for test in &config.key_tests {
            if !baseline.contains(test) && !optimized.contains(test) {
                continue;
            }
            let empty = MetricRecord::new(test.as_str());
            let b = baseline.get(test).unwrap_or(&empty);
            let o = optimized.get(test).unwrap_or(&empty);

            latency.push(LatencyRow {
                test: test.clone(),
                p50: MetricDelta::new(b.p50_ms, o.p50_ms, Direction::LowerIsBetter),
                p99: MetricDelta::new(b.p99_ms, o.p99_ms, Direction::LowerIsBetter),
            });

            if b.throughput_qps.is_some() || o.throughput_qps.is_some() {
                throughput.push(ThroughputRow {
                    test: test.clone(),
                    throughput: MetricDelta::new(
                        b.throughput_qps,
                        o.throughput_qps,
                        Direction::HigherIsBetter,
                    ),
                });
            }
        }

        let reference = optimized.get(SLA_RECORD).or_else(|| optimized.get(OVERALL));
        let sla = sla_checks(reference, config);

        Self {
            note: None,
            latency,
            throughput,
            sla_source: reference.map(|r| r.name.clone()),
            sla,
        }
    }

    /// Attach a note shown under the report banner.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

fn sla_checks(reference: Option<&MetricRecord>, config: &ReportConfig) -> Vec<SlaCheck> {
    let targets = &config.sla;
    let field = |get: fn(&MetricRecord) -> Option<f64>| reference.and_then(get);

    [
        (
            format!("p50 ≤ {}ms", fmt_threshold(targets.p50_max_ms)),
            field(|r| r.p50_ms),
            targets.p50_max_ms,
            Direction::LowerIsBetter,
        ),
        (
            format!("p99 ≤ {}ms", fmt_threshold(targets.p99_max_ms)),
            field(|r| r.p99_ms),
            targets.p99_max_ms,
            Direction::LowerIsBetter,
        ),
        (
            format!("Throughput ≥ {} qps", fmt_threshold(targets.throughput_min_qps)),
            field(|r| r.throughput_qps),
            targets.throughput_min_qps,
            Direction::HigherIsBetter,
        ),
    ]
    .into_iter()
    .map(|(label, value, threshold, direction)| SlaCheck {
        label,
        value,
        threshold,
        verdict: Verdict::evaluate(value, threshold, direction),
    })
    .collect()
}

fn fmt_threshold(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}
