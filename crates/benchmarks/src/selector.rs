// Copyright 2025 benchcmp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Resolving which two logs to compare.
//!
//! Either both paths are given, or a results directory is searched. Log names
//! are assumed to embed a timestamp, so the lexically last match is the most
//! recent run.

use crate::error::{CompareError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Name fragment of baseline logs.
pub const BASELINE_MARKER: &str = "baseline";
/// Name fragments of optimized logs, tried in order. Later markers are only
/// used when earlier ones match nothing.
pub const OPTIMIZED_MARKERS: [&str; 2] = ["after", "optimized"];
const LOG_EXTENSION: &str = ".log";

/// The pair of logs to compare.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSelection {
    /// Baseline log.
    pub baseline: PathBuf,
    /// Optimized log.
    pub optimized: PathBuf,
    /// True when no optimized log existed and the baseline is compared to itself.
    pub mirrored: bool,
}

impl RunSelection {
    /// Use two explicit paths.
    pub fn from_paths(baseline: impl Into<PathBuf>, optimized: impl Into<PathBuf>) -> Self {
        Self {
            baseline: baseline.into(),
            optimized: optimized.into(),
            mirrored: false,
        }
    }

    /// Pick the latest baseline and optimized logs from `dir`.
    ///
    /// Fails when no baseline log exists. When no optimized log exists the
    /// baseline is reused and [`RunSelection::mirrored`] is set.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let names = log_names(dir)?;

        let baseline = latest_matching(&names, BASELINE_MARKER).ok_or_else(|| {
            CompareError::NoBaseline {
                dir: dir.to_path_buf(),
            }
        })?;
        let optimized = OPTIMIZED_MARKERS
            .iter()
            .find_map(|marker| latest_matching(&names, marker));

        let selection = match optimized {
            Some(optimized) => Self::from_paths(dir.join(baseline), dir.join(optimized)),
            None => {
                warn!(dir = %dir.display(), "no optimized log found, comparing baseline against itself");
                Self {
                    baseline: dir.join(baseline),
                    optimized: dir.join(baseline),
                    mirrored: true,
                }
            }
        };
        info!(
            baseline = %selection.baseline.display(),
            optimized = %selection.optimized.display(),
            "selected runs"
        );
        Ok(selection)
    }

    /// `Comparing: <baseline> vs <optimized>` using file names.
    pub fn describe(&self) -> String {
        format!(
            "Comparing: {} vs {}",
            file_name(&self.baseline),
            file_name(&self.optimized)
        )
    }

    /// Report note for a mirrored selection.
    pub fn note(&self) -> Option<String> {
        self.mirrored
            .then(|| "(no optimized log found; comparing baseline against itself)".to_string())
    }
}

/// Sorted names of `*.log` files (or links to files) in `dir`.
fn log_names(dir: &Path) -> Result<Vec<String>> {
    let read_dir_err = |source: std::io::Error| CompareError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        // Follows symlinks; a dangling link is skipped.
        if !entry.path().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if name.ends_with(LOG_EXTENSION) {
                names.push(name.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}

/// Lexically last name matching `*<marker>*.log`.
fn latest_matching<'a>(names: &'a [String], marker: &str) -> Option<&'a str> {
    names
        .iter()
        .rev()
        .map(String::as_str)
        .find(|name| name[..name.len() - LOG_EXTENSION.len()].contains(marker))
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results_dir(files: &[&str]) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in files {
            fs::write(dir.path().join(name), "P50: 1 ms\n").unwrap();
        }
        dir
    }

    #[test]
    fn test_latest_pair_wins() {
        let dir = results_dir(&["baseline_2024.log", "baseline_2025.log", "after_2025.log"]);
        let selection = RunSelection::from_dir(dir.path()).unwrap();

        assert_eq!(selection.baseline, dir.path().join("baseline_2025.log"));
        assert_eq!(selection.optimized, dir.path().join("after_2025.log"));
        assert!(!selection.mirrored);
        assert_eq!(selection.describe(), "Comparing: baseline_2025.log vs after_2025.log");
        assert_eq!(selection.note(), None);
    }

    #[test]
    fn test_optimized_is_fallback_not_union() {
        let dir = results_dir(&["baseline_1.log", "after_1.log", "optimized_9.log"]);
        let selection = RunSelection::from_dir(dir.path()).unwrap();
        assert_eq!(selection.optimized, dir.path().join("after_1.log"));

        let dir = results_dir(&["baseline_1.log", "optimized_2.log", "optimized_9.log"]);
        let selection = RunSelection::from_dir(dir.path()).unwrap();
        assert_eq!(selection.optimized, dir.path().join("optimized_9.log"));
    }

    #[test]
    fn test_missing_optimized_mirrors_baseline() {
        let dir = results_dir(&["run_baseline_a.log"]);
        let selection = RunSelection::from_dir(dir.path()).unwrap();

        assert!(selection.mirrored);
        assert_eq!(selection.baseline, selection.optimized);
        assert!(selection.note().unwrap().contains("comparing baseline against itself"));
    }

    #[test]
    fn test_no_baseline_fails() {
        let dir = results_dir(&["after_1.log", "baseline.txt"]);
        let err = RunSelection::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, CompareError::NoBaseline { .. }));
    }

    #[test]
    fn test_directories_are_ignored() {
        let dir = results_dir(&["baseline_1.log"]);
        fs::create_dir(dir.path().join("baseline_9.log")).unwrap();
        let selection = RunSelection::from_dir(dir.path()).unwrap();
        assert_eq!(selection.baseline, dir.path().join("baseline_1.log"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_logs_are_selected() {
        let dir = results_dir(&["data.txt", "after_2025.log"]);
        std::os::unix::fs::symlink(dir.path().join("data.txt"), dir.path().join("baseline_2025.log"))
            .unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone.txt"), dir.path().join("baseline_2026.log"))
            .unwrap();

        let selection = RunSelection::from_dir(dir.path()).unwrap();
        assert_eq!(selection.baseline, dir.path().join("baseline_2025.log"));
        assert_eq!(selection.optimized, dir.path().join("after_2025.log"));
    }

    #[test]
    fn test_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = RunSelection::from_dir(dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, CompareError::ReadDir { .. }));
    }
}
