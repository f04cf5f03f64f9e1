// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The reporting interface between the orchestrator and its loggers.

use std::time::Duration;

use caliber_core::{TestName, TestOutput};
use serde::Serialize;

/// Receives the events of a test run, in order.
///
/// A test is reported exactly once: skipped tests get only
/// `skipped_test`, run tests get `started_test` followed by `passed_test`
/// or `failed_test`. Hidden tests are never reported.
pub trait TestLogger {
    fn started_run(&mut self) {}
    fn ended_run(&mut self) {}
    fn started_suite(&mut self, _suite: &str) {}
    fn ended_suite(&mut self, _suite: &str) {}
    fn started_test(&mut self, _name: &TestName) {}

    fn passed_test(&mut self, name: &TestName, output: &TestOutput, duration: Duration);

    fn failed_test(
        &mut self,
        name: &TestName,
        message: &str,
        output: &TestOutput,
        duration: Duration,
    );

    fn skipped_test(&mut self, name: &TestName, reason: &str);
}

/// One logger event, as written by [`ChildLogger`](crate::ChildLogger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEvent {
    StartedRun,
    EndedRun,
    StartedSuite {
        suite: String,
    },
    EndedSuite {
        suite: String,
    },
    StartedTest {
        test: TestName,
    },
    PassedTest {
        test: TestName,
        output: TestOutput,
        duration_ms: u64,
    },
    FailedTest {
        test: TestName,
        message: String,
        output: TestOutput,
        duration_ms: u64,
    },
    SkippedTest {
        test: TestName,
        reason: String,
    },
}

pub(crate) fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
