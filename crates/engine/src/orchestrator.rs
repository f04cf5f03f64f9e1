// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runs a list of test files through a [`CompileRunner`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use caliber_core::{Clock, FilterSet, SystemClock, TestAction, TestName, TestOutput};
use caliber_directive::{Directive, DEFAULT_MARKER};
use tracing::{field, Instrument};

use crate::{CompileRunner, TestLogger};

/// Suite name used when none is given.
pub const DEFAULT_SUITE: &str = "compilation tests";

/// Counts of reported tests. Hidden tests are not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn good(&self) -> bool {
        self.failed == 0
    }
}

/// Walks test files one at a time, reporting each to a logger.
pub struct Orchestrator<R, C: Clock = SystemClock> {
    runner: R,
    clock: C,
    suite: String,
    marker: String,
    filters: FilterSet,
}

impl<R: CompileRunner> Orchestrator<R, SystemClock> {
    pub fn new(runner: R) -> Self {
        Self::with_clock(runner, SystemClock)
    }
}

impl<R: CompileRunner, C: Clock> Orchestrator<R, C> {
    pub fn with_clock(runner: R, clock: C) -> Self {
        Self {
            runner,
            clock,
            suite: DEFAULT_SUITE.to_string(),
            marker: DEFAULT_MARKER.to_string(),
            filters: FilterSet::new(),
        }
    }

    caliber_core::setters! {
        set { suite: String, marker: String, filters: FilterSet }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run every file in order inside one suite.
    pub async fn run_test_files(
        &self,
        files: &[PathBuf],
        logger: &mut dyn TestLogger,
    ) -> RunSummary {
        let mut summary = RunSummary::default();
        logger.started_run();
        logger.started_suite(&self.suite);

        for file in files {
            let span = tracing::info_span!(
                "caliber.test",
                file = %file.display(),
                id = field::Empty,
                verdict = field::Empty,
            );
            let verdict = self.run_test_file(file, logger).instrument(span.clone()).await;
            if let Some(verdict) = verdict {
                span.record("verdict", field::display(verdict));
                match verdict {
                    Verdict::Passed => summary.passed += 1,
                    Verdict::Failed => summary.failed += 1,
                    Verdict::Skipped => summary.skipped += 1,
                }
            }
        }

        logger.ended_suite(&self.suite);
        logger.ended_run();
        tracing::info!(?summary, "run finished");
        summary
    }

    /// Returns `None` for hidden tests.
    async fn run_test_file(&self, file: &Path, logger: &mut dyn TestLogger) -> Option<Verdict> {
        let file_name = file.display().to_string();

        let directive = match self.load_directive(file) {
            Ok(directive) => directive,
            Err(message) => {
                let name = self.name(file_name);
                tracing::warn!(error = %message, "bad test file");
                logger.started_test(&name);
                logger.failed_test(&name, &message, &TestOutput::default(), Duration::ZERO);
                return Some(Verdict::Failed);
            }
        };

        let name = self.name(directive.name.clone().unwrap_or(file_name));
        let attrs = &directive.attributes;
        match self.filters.evaluate(&name.name, attrs).resolve(attrs) {
            TestAction::Hide => {
                tracing::debug!("hidden by filters");
                return None;
            }
            TestAction::Skip(reason) => {
                logger.skipped_test(&name, &reason);
                return Some(Verdict::Skipped);
            }
            TestAction::Run | TestAction::Indeterminate => {}
        }

        if !directive.tools.is_empty()
            && !directive.tools.iter().any(|tool| self.runner.matches_tool(tool))
        {
            let reason = format!("skipped for {}", self.runner.primary_name());
            logger.skipped_test(&name, &reason);
            return Some(Verdict::Skipped);
        }

        logger.started_test(&name);
        let start = self.clock.now();
        let (result, output) = self.runner.run(file, &directive).await;
        let duration = self.clock.now().saturating_duration_since(start);

        if result.passed {
            logger.passed_test(&name, &output, duration);
            Some(Verdict::Passed)
        } else {
            logger.failed_test(&name, &result.message, &output, duration);
            Some(Verdict::Failed)
        }
    }

    fn load_directive(&self, file: &Path) -> Result<Directive, String> {
        let source = std::fs::read_to_string(file)
            .map_err(|e| format!("unable to read {}: {e}", file.display()))?;
        Directive::parse(&source, &self.marker).map_err(|e| e.to_string())
    }

    fn name(&self, test: String) -> TestName {
        let name = TestName::next(self.suite.clone(), test);
        tracing::Span::current().record("id", name.id);
        name
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Passed,
    Failed,
    Skipped,
}

caliber_core::simple_display! {
    Verdict {
        Passed => "passed",
        Failed => "failed",
        Skipped => "skipped",
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
