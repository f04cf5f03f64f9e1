// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-lines logger for a parent process reading results over a pipe.

use std::io::Write;
use std::time::Duration;

use caliber_core::{TestName, TestOutput};

use crate::logger::{millis, LogEvent, TestLogger};

/// Writes one JSON object per event, newline terminated and flushed.
///
/// Write failures are logged via tracing and do not stop the run; a parent
/// that went away must not turn passing tests into errors.
pub struct ChildLogger<W: Write> {
    out: W,
}

impl<W: Write> ChildLogger<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, event: LogEvent) {
        if let Err(e) = self.write_event(&event) {
            tracing::warn!(error = %e, "failed to write result event");
        }
    }

    fn write_event(&mut self, event: &LogEvent) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, event)?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

impl<W: Write> TestLogger for ChildLogger<W> {
    fn started_run(&mut self) {
        self.emit(LogEvent::StartedRun);
    }

    fn ended_run(&mut self) {
        self.emit(LogEvent::EndedRun);
    }

    fn started_suite(&mut self, suite: &str) {
        self.emit(LogEvent::StartedSuite { suite: suite.to_string() });
    }

    fn ended_suite(&mut self, suite: &str) {
        self.emit(LogEvent::EndedSuite { suite: suite.to_string() });
    }

    fn started_test(&mut self, name: &TestName) {
        self.emit(LogEvent::StartedTest { test: name.clone() });
    }

    fn passed_test(&mut self, name: &TestName, output: &TestOutput, duration: Duration) {
        self.emit(LogEvent::PassedTest {
            test: name.clone(),
            output: output.clone(),
            duration_ms: millis(duration),
        });
    }

    fn failed_test(
        &mut self,
        name: &TestName,
        message: &str,
        output: &TestOutput,
        duration: Duration,
    ) {
        self.emit(LogEvent::FailedTest {
            test: name.clone(),
            message: message.to_string(),
            output: output.clone(),
            duration_ms: millis(duration),
        });
    }

    fn skipped_test(&mut self, name: &TestName, reason: &str) {
        self.emit(LogEvent::SkippedTest { test: name.clone(), reason: reason.to_string() });
    }
}

#[cfg(test)]
#[path = "child_logger_tests.rs"]
mod tests;
