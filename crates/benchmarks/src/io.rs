// Copyright 2025 benchcmp Contributors
// SPDX-License-Identifier: Apache-2.0

//! I/O operations for benchmark logs and reports.
//!
//! Logs are read whole into memory before parsing; there is no streaming.

use crate::comparison::Comparison;
use crate::error::{CompareError, Result};
use crate::extract::parse_log;
use crate::result::ParseResult;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a log file and extract its metrics.
pub fn read_log(path: impl AsRef<Path>) -> Result<ParseResult> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CompareError::ReadLog {
        path: path.to_path_buf(),
        source,
    })?;
    let result = parse_log(&content);
    debug!(path = %path.display(), tests = result.len(), "parsed log");
    Ok(result)
}

/// Serialize a comparison as pretty JSON.
pub fn comparison_json(comparison: &Comparison) -> Result<String> {
    Ok(serde_json::to_string_pretty(comparison)?)
}

/// Write a rendered report to `path`.
pub fn write_report(report: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, report).map_err(|source| CompareError::Write {
        path: path.to_path_buf(),
        source,
    })
}
