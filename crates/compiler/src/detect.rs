// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compiler flavor detection by probing the binary's banner.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::{Brand, DetectError, Dialect};

/// How long a single `--version` or `/?` probe may run.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Work out which vendor and argument dialect `command` speaks.
///
/// `<command> --version` succeeding means a cc-style compiler; otherwise
/// `<command> /?` succeeding means an msvc-style one. The banner (stdout
/// and stderr together) picks the brand.
pub async fn detect_flavor(command: &[String]) -> Result<(Brand, Dialect), DetectError> {
    if let Some(banner) = probe(command, "--version").await {
        let brand = if banner.contains("Free Software Foundation") {
            Brand::Gcc
        } else if banner.contains("clang") {
            Brand::Clang
        } else {
            Brand::Unknown
        };
        return Ok((brand, Dialect::Cc));
    }

    if let Some(banner) = probe(command, "/?").await {
        let brand = if banner.contains("Microsoft (R)") { Brand::Msvc } else { Brand::Unknown };
        return Ok((brand, Dialect::Msvc));
    }

    Err(DetectError::UndeterminedFlavor)
}

/// Run `command flag`, returning its combined output if it exited 0.
async fn probe(command: &[String], flag: &str) -> Option<String> {
    let (program, args) = command.split_first()?;
    let mut cmd = Command::new(program);
    cmd.args(args).arg(flag).stdin(Stdio::null()).kill_on_drop(true);

    let output = match tokio::time::timeout(PROBE_TIMEOUT, cmd.output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) => {
            tracing::debug!(program = %program, flag, error = %e, "compiler probe failed to run");
            return None;
        }
        Err(_) => {
            tracing::debug!(program = %program, flag, "compiler probe timed out");
            return None;
        }
    };

    if !output.status.success() {
        tracing::debug!(program = %program, flag, status = %output.status, "compiler probe rejected");
        return None;
    }

    let mut banner = String::from_utf8_lossy(&output.stdout).into_owned();
    banner.push_str(&String::from_utf8_lossy(&output.stderr));
    Some(banner)
}

#[cfg(test)]
#[path = "detect_tests.rs"]
mod tests;
