// Copyright 2025 benchcmp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Report configuration.
//!
//! The defaults are the curated dashboard: a fixed list of key tests and
//! three SLA targets. A TOML file may override any of them, e.g.
//!
//! ```toml
//! key_tests = ["overall", "SLA_Compliance"]
//!
//! [sla]
//! p50_max_ms = 25.0
//! ```

use crate::error::{CompareError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tests shown in the report, in display order.
pub const DEFAULT_KEY_TESTS: [&str; 5] = [
    "overall",
    "SLA_Compliance",
    "RangeQuery_1Hour_1MinStep",
    "InstantQuery_SimpleSelector",
    "InstantQuery_RateFunction",
];

/// Record preferred as the SLA reference in the optimized log.
pub const SLA_RECORD: &str = "SLA_Compliance";

/// What the report shows and which targets it checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Test names shown in the latency and throughput sections.
    pub key_tests: Vec<String>,
    /// SLA thresholds.
    pub sla: SlaTargets,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            key_tests: DEFAULT_KEY_TESTS.iter().map(|s| s.to_string()).collect(),
            sla: SlaTargets::default(),
        }
    }
}

/// SLA thresholds evaluated against the optimized run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlaTargets {
    /// p50 must be at or below this many milliseconds.
    pub p50_max_ms: f64,
    /// p99 must be at or below this many milliseconds.
    pub p99_max_ms: f64,
    /// Throughput must be at or above this many queries per second.
    pub throughput_min_qps: f64,
}

impl Default for SlaTargets {
    fn default() -> Self {
        Self {
            p50_max_ms: 50.0,
            p99_max_ms: 500.0,
            throughput_min_qps: 100.0,
        }
    }
}

impl ReportConfig {
    /// Load a config file. Keys it leaves out keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CompareError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| CompareError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
