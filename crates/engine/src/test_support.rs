// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logger and runner doubles for orchestrator tests.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use caliber_core::{FakeClock, TestName, TestOutput, TestResult, Tool};
use caliber_directive::Directive;

use crate::logger::{millis, LogEvent, TestLogger};
use crate::CompileRunner;

/// Captures every event it receives.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    pub events: Vec<LogEvent>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(name, verdict)` for each reported test, with the skip reason or
    /// failure message as the verdict for those outcomes.
    pub fn verdicts(&self) -> Vec<(String, String)> {
        self.events
            .iter()
            .filter_map(|event| match event {
                LogEvent::PassedTest { test, .. } => Some((test.name.clone(), "passed".into())),
                LogEvent::FailedTest { test, message, .. } => {
                    Some((test.name.clone(), format!("failed: {message}")))
                }
                LogEvent::SkippedTest { test, reason, .. } => {
                    Some((test.name.clone(), format!("skipped: {reason}")))
                }
                _ => None,
            })
            .collect()
    }
}

impl TestLogger for RecordingLogger {
    fn started_run(&mut self) {
        self.events.push(LogEvent::StartedRun);
    }

    fn ended_run(&mut self) {
        self.events.push(LogEvent::EndedRun);
    }

    fn started_suite(&mut self, suite: &str) {
        self.events.push(LogEvent::StartedSuite { suite: suite.to_string() });
    }

    fn ended_suite(&mut self, suite: &str) {
        self.events.push(LogEvent::EndedSuite { suite: suite.to_string() });
    }

    fn started_test(&mut self, name: &TestName) {
        self.events.push(LogEvent::StartedTest { test: name.clone() });
    }

    fn passed_test(&mut self, name: &TestName, output: &TestOutput, duration: Duration) {
        self.events.push(LogEvent::PassedTest {
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
        self.events.push(LogEvent::FailedTest {
            test: name.clone(),
            message: message.to_string(),
            output: output.clone(),
            duration_ms: millis(duration),
        });
    }

    fn skipped_test(&mut self, name: &TestName, reason: &str) {
        self.events.push(LogEvent::SkippedTest { test: name.clone(), reason: reason.to_string() });
    }
}

/// Runner answering from a table keyed by file name, passing by default.
///
/// Each run advances the shared clock by `elapsed`.
#[derive(Clone)]
pub struct FakeRunner {
    tool: Tool,
    results: HashMap<String, (TestResult, TestOutput)>,
    clock: FakeClock,
    elapsed: Duration,
    calls: Arc<parking_lot::Mutex<Vec<(PathBuf, Directive)>>>,
}

impl FakeRunner {
    pub fn new(tool: Tool, clock: FakeClock) -> Self {
        Self {
            tool,
            results: HashMap::new(),
            clock,
            elapsed: Duration::ZERO,
            calls: Arc::default(),
        }
    }

    pub fn elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed = elapsed;
        self
    }

    pub fn with_result(mut self, file: &str, result: TestResult, output: TestOutput) -> Self {
        self.results.insert(file.to_string(), (result, output));
        self
    }

    /// Every `(file, directive)` the orchestrator asked to run.
    pub fn calls(&self) -> Vec<(PathBuf, Directive)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl CompileRunner for FakeRunner {
    fn matches_tool(&self, tool: &str) -> bool {
        self.tool.matches(tool)
    }

    fn primary_name(&self) -> &str {
        self.tool.primary_name()
    }

    async fn run(&self, src: &Path, directive: &Directive) -> (TestResult, TestOutput) {
        self.calls.lock().push((src.to_path_buf(), directive.clone()));
        self.clock.advance(self.elapsed);
        let key = src.file_name().map(|name| name.to_string_lossy().into_owned()).unwrap_or_default();
        self.results
            .get(&key)
            .cloned()
            .unwrap_or_else(|| (TestResult::pass("Compilation successful"), TestOutput::default()))
    }
}
