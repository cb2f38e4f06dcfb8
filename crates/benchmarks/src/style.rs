// Copyright 2025 benchcmp Contributors
// SPDX-License-Identifier: Apache-2.0

//! Terminal styling for report verdicts and deltas.
//!
//! All ANSI escape codes in the text report come from [`paint`]. Stripping
//! them leaves the plain report unchanged. The [`ColorMode`] alone decides
//! whether codes are emitted; terminal detection and color environment
//! variables are not consulted.

use colored::Color;
use serde::{Deserialize, Serialize};

/// Visual meaning of a styled fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Improvement or PASS.
    Good,
    /// Regression, no change, or FAIL.
    Bad,
}

impl Tone {
    fn color(self) -> Color {
        match self {
            Self::Good => Color::BrightGreen,
            Self::Bad => Color::BrightRed,
        }
    }
}

/// Whether styled output carries escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Emit ANSI colors.
    #[default]
    Ansi,
    /// Plain text only.
    Plain,
}

/// Style `text` with the color for `tone`.
pub fn paint(text: &str, tone: Tone, mode: ColorMode) -> String {
    match mode {
        ColorMode::Plain => text.to_string(),
        ColorMode::Ansi => format!("\x1b[{}m{text}\x1b[0m", tone.color().to_fg_str()),
    }
}

#[cfg(test)]
pub(crate) fn strip_ansi(text: &str) -> String {
    use once_cell::sync::Lazy;
    use regex::Regex;

    static ANSI: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"\x1b\[[0-9;?]*[A-Za-z]").expect("ansi pattern"));
    ANSI.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_mode_has_no_escapes() {
        assert_eq!(paint("PASS", Tone::Good, ColorMode::Plain), "PASS");
        assert_eq!(paint("FAIL", Tone::Bad, ColorMode::Plain), "FAIL");
    }

    #[test]
    fn test_ansi_mode_always_emits_escapes() {
        assert_eq!(paint("PASS", Tone::Good, ColorMode::Ansi), "\u{1b}[92mPASS\u{1b}[0m");
        assert_eq!(paint("FAIL", Tone::Bad, ColorMode::Ansi), "\u{1b}[91mFAIL\u{1b}[0m");
    }

    #[test]
    fn test_ansi_mode_strips_to_plain() {
        let styled = paint("+50.0% (2.0x)", Tone::Good, ColorMode::Ansi);
        assert!(styled.contains("\u{1b}["));
        assert_eq!(strip_ansi(&styled), "+50.0% (2.0x)");
    }

    #[test]
    fn test_strip_ansi() {
        assert_eq!(strip_ansi("\u{1b}[92mPASS\u{1b}[0m"), "PASS");
        assert_eq!(strip_ansi("no codes"), "no codes");
    }
}
