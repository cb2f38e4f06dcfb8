// Copyright 2025 benchcmp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Error types for benchmark comparison.
//!
//! Only input resolution and I/O can fail. A metric that never shows up in a
//! log is not an error; it is carried as `None` all the way to the report.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while resolving, reading or writing benchmark data.
#[derive(Debug, Error)]
pub enum CompareError {
    /// Directory mode found no `*baseline*.log` file.
    #[error("No baseline files found in {}", dir.display())]
    NoBaseline {
        /// Directory that was searched.
        dir: PathBuf,
    },

    /// A log file could not be read.
    #[error("Failed to read log {}: {source}", path.display())]
    ReadLog {
        /// Path of the log.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A results directory could not be listed.
    #[error("Failed to list directory {}: {source}", path.display())]
    ReadDir {
        /// Path of the directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A report configuration file could not be read.
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigIo {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A report configuration file is not valid TOML for [`crate::ReportConfig`].
    #[error("Invalid config {}: {source}", path.display())]
    Config {
        /// Path of the config file.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// JSON serialization of a comparison failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A rendered report could not be written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Result type for comparison operations.
pub type Result<T> = std::result::Result<T, CompareError>;
