// Copyright 2025 benchcmp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Relative improvement between a baseline and an optimized value.

use crate::style::{paint, ColorMode, Tone};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Speedups at or below this ratio are not shown.
pub const SPEEDUP_DISPLAY_THRESHOLD: f64 = 1.1;

/// Which way a metric should move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Latency: smaller is better.
    LowerIsBetter,
    /// Throughput: larger is better.
    HigherIsBetter,
}

/// Outcome of comparing two optional values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Improvement {
    /// One side is missing.
    Missing,
    /// Baseline is exactly zero; no ratio exists.
    ZeroBaseline,
    /// A real comparison.
    Delta {
        /// Percent change relative to baseline, positive is better.
        percent: f64,
        /// Multiplicative speedup, infinite when the divisor is zero.
        speedup: f64,
    },
}

impl Improvement {
    /// Compare `baseline` against `optimized` in the given direction.
    pub fn calculate(baseline: Option<f64>, optimized: Option<f64>, direction: Direction) -> Self {
        let (Some(b), Some(o)) = (baseline, optimized) else {
            return Self::Missing;
        };
        if b == 0.0 {
            return Self::ZeroBaseline;
        }

        let (percent, speedup) = match direction {
            Direction::LowerIsBetter => ((b - o) / b * 100.0, ratio(b, o)),
            Direction::HigherIsBetter => ((o - b) / b * 100.0, ratio(o, b)),
        };
        Self::Delta { percent, speedup }
    }

    /// Percent improvement, if applicable.
    pub fn percent(&self) -> Option<f64> {
        match self {
            Self::Delta { percent, .. } => Some(*percent),
            _ => None,
        }
    }

    /// True for a strictly positive improvement.
    pub fn is_improvement(&self) -> bool {
        self.percent().is_some_and(|p| p > 0.0)
    }

    /// Display string, styled by tone when `mode` allows it.
    pub fn display(&self, mode: ColorMode) -> String {
        match self {
            Self::Delta { .. } => {
                let tone = if self.is_improvement() {
                    Tone::Good
                } else {
                    Tone::Bad
                };
                paint(&self.to_string(), tone, mode)
            }
            _ => self.to_string(),
        }
    }
}

impl fmt::Display for Improvement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("N/A"),
            Self::ZeroBaseline => f.write_str("N/A (baseline=0)"),
            Self::Delta { percent, speedup } => {
                let sign = if *percent > 0.0 { "+" } else { "" };
                write!(f, "{sign}{percent:.1}%")?;
                if speedup.abs() > SPEEDUP_DISPLAY_THRESHOLD {
                    write!(f, " ({speedup:.1}x)")?;
                }
                Ok(())
            }
        }
    }
}

fn ratio(numerator: f64, divisor: f64) -> f64 {
    if divisor > 0.0 {
        numerator / divisor
    } else {
        f64::INFINITY
    }
}
