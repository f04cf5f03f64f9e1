// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Human-readable logger for interactive runs.
//!
//! Brief mode prints one mark per test (`.` passed, `!` failed, `_`
//! skipped); verbose mode prints one line per test and the captured output
//! of failures as they happen. Both end with a summary listing every
//! failure.

use std::fmt::Write as _;
use std::io::Write;
use std::time::Duration;

use caliber_core::{format_elapsed_ms, TestName, TestOutput};

use crate::logger::TestLogger;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    #[default]
    Brief,
    Verbose,
}

caliber_core::simple_display! {
    Verbosity {
        Brief => "brief",
        Verbose => "verbose",
    }
}

/// 256-color codes used to paint verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub passed: u8,
    pub failed: u8,
    pub skipped: u8,
    pub muted: u8,
}

const RESET: &str = "\x1b[0m";

struct Failure {
    name: TestName,
    message: String,
    output: TestOutput,
}

pub struct TermLogger<W: Write> {
    out: W,
    verbosity: Verbosity,
    show_time: bool,
    palette: Option<Palette>,
    passed: usize,
    skipped: usize,
    failures: Vec<Failure>,
}

impl<W: Write> TermLogger<W> {
    pub fn new(out: W, verbosity: Verbosity) -> Self {
        Self {
            out,
            verbosity,
            show_time: false,
            palette: None,
            passed: 0,
            skipped: 0,
            failures: Vec::new(),
        }
    }

    caliber_core::setters! {
        set { show_time: bool }
        option { palette: Palette }
    }

    /// True iff no test has failed so far.
    pub fn good(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, pick: fn(&Palette) -> u8, text: &str) -> String {
        match &self.palette {
            Some(palette) => format!("\x1b[38;5;{}m{text}{RESET}", pick(palette)),
            None => text.to_string(),
        }
    }

    fn timing(&self, duration: Duration) -> String {
        if self.show_time {
            format!(" {}", self.paint(|p| p.muted, &format!("({})", format_elapsed_ms(duration))))
        } else {
            String::new()
        }
    }

    fn write(&mut self, text: &str) {
        let res = self.out.write_all(text.as_bytes()).and_then(|()| self.out.flush());
        if let Err(e) = res {
            tracing::warn!(error = %e, "failed to write test report");
        }
    }

    fn summary(&self) -> String {
        let failed = self.failures.len();
        let total = self.passed + failed + self.skipped;
        let mut text = String::from("\n");

        let counts = format!("{}/{total} tests passed", self.passed);
        if self.good() {
            text.push_str(&self.paint(|p| p.passed, &counts));
        } else {
            text.push_str(&self.paint(|p| p.failed, &counts));
        }
        if self.skipped > 0 {
            let skipped = format!("({} skipped)", self.skipped);
            let _ = write!(text, " {}", self.paint(|p| p.skipped, &skipped));
        }
        text.push('\n');

        for failure in &self.failures {
            let _ = writeln!(text, "  {} {}", failure.name, self.paint(|p| p.failed, "FAILED"));
            push_indented(&mut text, &failure.message, "    ");
            if self.verbosity == Verbosity::Brief {
                push_output(&mut text, &failure.output, "    ");
            }
        }
        text
    }
}

impl<W: Write> TestLogger for TermLogger<W> {
    fn ended_run(&mut self) {
        let mut text = String::new();
        if self.verbosity == Verbosity::Brief && self.passed + self.skipped + self.failures.len() > 0
        {
            text.push('\n');
        }
        text.push_str(&self.summary());
        self.write(&text);
    }

    fn started_suite(&mut self, suite: &str) {
        if self.verbosity == Verbosity::Verbose {
            self.write(&format!("{suite}\n"));
        }
    }

    fn passed_test(&mut self, name: &TestName, _output: &TestOutput, duration: Duration) {
        self.passed += 1;
        let text = match self.verbosity {
            Verbosity::Brief => self.paint(|p| p.passed, "."),
            Verbosity::Verbose => format!(
                "  {} {}{}\n",
                name.name,
                self.paint(|p| p.passed, "PASSED"),
                self.timing(duration)
            ),
        };
        self.write(&text);
    }

    fn failed_test(
        &mut self,
        name: &TestName,
        message: &str,
        output: &TestOutput,
        duration: Duration,
    ) {
        let text = match self.verbosity {
            Verbosity::Brief => self.paint(|p| p.failed, "!"),
            Verbosity::Verbose => {
                let mut text = format!(
                    "  {} {}{}\n",
                    name.name,
                    self.paint(|p| p.failed, "FAILED"),
                    self.timing(duration)
                );
                push_indented(&mut text, message, "    ");
                push_output(&mut text, output, "    ");
                text
            }
        };
        self.write(&text);
        self.failures.push(Failure {
            name: name.clone(),
            message: message.to_string(),
            output: output.clone(),
        });
    }

    fn skipped_test(&mut self, name: &TestName, reason: &str) {
        self.skipped += 1;
        let text = match self.verbosity {
            Verbosity::Brief => self.paint(|p| p.skipped, "_"),
            Verbosity::Verbose => {
                format!("  {} {} ({reason})\n", name.name, self.paint(|p| p.skipped, "SKIPPED"))
            }
        };
        self.write(&text);
    }
}

fn push_indented(text: &mut String, block: &str, indent: &str) {
    for line in block.lines() {
        let _ = writeln!(text, "{indent}{line}");
    }
}

fn push_output(text: &mut String, output: &TestOutput, indent: &str) {
    for (label, captured) in [("stdout", &output.stdout), ("stderr", &output.stderr)] {
        if captured.is_empty() {
            continue;
        }
        let _ = writeln!(text, "{indent}{label}:");
        push_indented(text, captured, &format!("{indent}| "));
    }
}

#[cfg(test)]
#[path = "term_logger_tests.rs"]
mod tests;
