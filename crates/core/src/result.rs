// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test identity, verdicts, and captured output.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Verdict for a single compilation test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestResult {
    pub passed: bool,
    pub message: String,
}

impl TestResult {
    pub fn pass(message: impl Into<String>) -> Self {
        Self { passed: true, message: message.into() }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self { passed: false, message: message.into() }
    }
}

/// Everything the compiler wrote while a test ran.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TestOutput {
    pub stdout: String,
    pub stderr: String,
}

impl TestOutput {
    /// Decode captured bytes, replacing invalid UTF-8.
    pub fn from_bytes(stdout: &[u8], stderr: &[u8]) -> Self {
        Self {
            stdout: String::from_utf8_lossy(stdout).into_owned(),
            stderr: String::from_utf8_lossy(stderr).into_owned(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stdout.is_empty() && self.stderr.is_empty()
    }
}

static NEXT_TEST_ID: AtomicU64 = AtomicU64::new(0);

/// Fully-qualified test name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TestName {
    pub suite: String,
    pub name: String,
    /// Unique within the process; distinguishes tests sharing a name.
    pub id: u64,
}

impl TestName {
    /// Name a test, assigning the next process-wide id.
    pub fn next(suite: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            name: name.into(),
            id: NEXT_TEST_ID.fetch_add(1, Ordering::Relaxed),
        }
    }
}

impl fmt::Display for TestName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} > {}", self.suite, self.name)
    }
}
