// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! How a supervised process ended, and what that means for the test.

use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;
use std::time::Duration;

use caliber_core::{exit_code, TestResult};
use nix::sys::signal::Signal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProcessOutcome {
    Exited(i32),
    Signaled(i32),
    TimedOut,
}

impl ProcessOutcome {
    /// A fired deadline wins over whatever status the kill produced.
    pub(crate) fn from_status(status: ExitStatus, timed_out: bool) -> Self {
        if timed_out {
            return Self::TimedOut;
        }
        match (status.code(), status.signal()) {
            (Some(exit_code::TIMEOUT), _) => Self::TimedOut,
            (Some(code), _) => Self::Exited(code),
            (None, Some(signum)) => Self::Signaled(signum),
            (None, None) => Self::Exited(status.into_raw()),
        }
    }

    pub(crate) fn classify(
        self,
        argv: &[String],
        expect_fail: bool,
        timeout: Option<Duration>,
    ) -> TestResult {
        match self {
            Self::TimedOut => TestResult::fail(match timeout {
                Some(timeout) => format!("Timed out after {} ms", timeout.as_millis()),
                None => "Timed out".to_string(),
            }),
            Self::Exited(code) => {
                let success = code == exit_code::SUCCESS;
                let verdict = if success { "Compilation successful" } else { "Compilation failed" };
                TestResult {
                    passed: success != expect_fail,
                    message: format!("{}\n{verdict}", argv.join(" ")),
                }
            }
            Self::Signaled(signum) => TestResult::fail(describe_signal(signum)),
        }
    }
}

/// Human-readable signal name, as `strsignal(3)` would put it.
pub(crate) fn describe_signal(signum: i32) -> String {
    let Ok(signal) = Signal::try_from(signum) else {
        return format!("Unknown signal {signum}");
    };
    let text = match signal {
        Signal::SIGHUP => "Hangup",
        Signal::SIGINT => "Interrupt",
        Signal::SIGQUIT => "Quit",
        Signal::SIGILL => "Illegal instruction",
        Signal::SIGTRAP => "Trace/breakpoint trap",
        Signal::SIGABRT => "Aborted",
        Signal::SIGBUS => "Bus error",
        Signal::SIGFPE => "Floating point exception",
        Signal::SIGKILL => "Killed",
        Signal::SIGUSR1 => "User defined signal 1",
        Signal::SIGSEGV => "Segmentation fault",
        Signal::SIGUSR2 => "User defined signal 2",
        Signal::SIGPIPE => "Broken pipe",
        Signal::SIGALRM => "Alarm clock",
        Signal::SIGTERM => "Terminated",
        Signal::SIGXCPU => "CPU time limit exceeded",
        Signal::SIGXFSZ => "File size limit exceeded",
        Signal::SIGSYS => "Bad system call",
        other => return format!("Signal {}", other.as_str()),
    };
    text.to_string()
}

#[cfg(test)]
#[path = "outcome_tests.rs"]
mod tests;
