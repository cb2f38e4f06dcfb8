// Copyright 2025 benchcmp Contributors
// SPDX-License-Identifier: Apache-2.0

//! benchcmp CLI entry point.

use std::process::ExitCode;

fn main() -> ExitCode {
    match benchcmp_cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
