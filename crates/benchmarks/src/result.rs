// Copyright 2025 benchcmp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Parsed benchmark metrics.
//!
//! A [`MetricRecord`] holds what one log said about one test case. A
//! [`ParseResult`] maps test names to records for a whole log file.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name used for values that appear before any test declaration.
pub const OVERALL: &str = "overall";

/// Statistics observed for one test case in one log.
///
/// Every field is optional: `None` means the log never mentioned it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Test or benchmark label, or [`OVERALL`].
    pub name: String,
    /// Median latency in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p50_ms: Option<f64>,
    /// 90th percentile latency in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p90_ms: Option<f64>,
    /// 99th percentile latency in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p99_ms: Option<f64>,
    /// Maximum latency in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_ms: Option<f64>,
    /// Throughput in queries (or samples) per second.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub throughput_qps: Option<f64>,
    /// Number of samples.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl MetricRecord {
    /// Create an empty record.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// True when no field was ever filled in.
    pub fn is_empty(&self) -> bool {
        self.p50_ms.is_none()
            && self.p90_ms.is_none()
            && self.p99_ms.is_none()
            && self.max_ms.is_none()
            && self.throughput_qps.is_none()
            && self.count.is_none()
    }
}

/// All records extracted from one log, keyed by test name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParseResult {
    records: BTreeMap<String, MetricRecord>,
}

impl ParseResult {
    /// Create an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a record by test name.
    pub fn get(&self, name: &str) -> Option<&MetricRecord> {
        self.records.get(name)
    }

    /// True if the log mentioned the test at all.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Record for `name`, created empty on first use.
    pub fn entry(&mut self, name: &str) -> &mut MetricRecord {
        self.records
            .entry(name.to_string())
            .or_insert_with(|| MetricRecord::new(name))
    }

    /// Mutable access to an existing record only.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut MetricRecord> {
        self.records.get_mut(name)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the log yielded no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in name order.
    pub fn iter(&self) -> impl Iterator<Item = &MetricRecord> {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creates_once() {
        let mut result = ParseResult::new();
        result.entry("RangeQuery").p50_ms = Some(12.5);
        result.entry("RangeQuery").p99_ms = Some(80.0);

        assert_eq!(result.len(), 1);
        let record = result.get("RangeQuery").unwrap();
        assert_eq!(record.name, "RangeQuery");
        assert_eq!(record.p50_ms, Some(12.5));
        assert_eq!(record.p99_ms, Some(80.0));
    }

    #[test]
    fn test_get_mut_does_not_create() {
        let mut result = ParseResult::new();
        assert!(result.get_mut(OVERALL).is_none());
        assert!(result.is_empty());
    }

    #[test]
    fn test_record_serializes_without_absent_fields() {
        let mut record = MetricRecord::new(OVERALL);
        record.throughput_qps = Some(150.0);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json, serde_json::json!({"name": "overall", "throughput_qps": 150.0}));
        assert!(!record.is_empty());
        assert!(MetricRecord::new("x").is_empty());
    }
}
