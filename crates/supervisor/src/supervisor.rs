// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Supervised execution of a single compiler invocation.

use std::os::unix::process::CommandExt;
use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use caliber_core::{TestOutput, TestResult};
use nix::sys::signal::Signal;
use nix::unistd::Pid;
use tokio::time::{sleep_until, Instant};
use tracing::{field, Instrument};

use crate::context::{self, kill_group, ActiveSupervision};
use crate::drain::{OutputDrain, DRAIN_GRACE};
use crate::outcome::ProcessOutcome;
use crate::SupervisorError;

/// What happens to the driver after an interrupt is forwarded to the child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterruptPolicy {
    /// Kill the whole group, then restore the signal's default action and
    /// raise it against the driver.
    #[default]
    Reraise,
    /// Keep running and classify whatever the child does with the signal.
    Forward,
}

caliber_core::simple_display! {
    InterruptPolicy {
        Reraise => "reraise",
        Forward => "forward",
    }
}

/// Runs compiler invocations one at a time.
#[derive(Debug, Clone, Default)]
pub struct Supervisor {
    timeout: Option<Duration>,
    policy: InterruptPolicy,
}

struct Supervised {
    status: ExitStatus,
    timed_out: bool,
    output: TestOutput,
}

impl Supervisor {
    pub fn new() -> Self {
        Self::default()
    }

    caliber_core::setters! {
        set { policy: InterruptPolicy }
        option { timeout: Duration }
    }

    pub fn timeout_duration(&self) -> Option<Duration> {
        self.timeout
    }

    /// Run `argv` and judge it as a compilation test.
    ///
    /// Never fails: setup problems and spawn errors come back as failed
    /// results carrying the error text.
    pub async fn run(&self, argv: &[String], expect_fail: bool) -> (TestResult, TestOutput) {
        let program = argv.first().map(String::as_str).unwrap_or_default();
        let span = tracing::info_span!(
            "caliber.supervise",
            program,
            pid = field::Empty,
            pgid = field::Empty,
            exit = field::Empty,
        );

        match self.supervise(argv).instrument(span.clone()).await {
            Ok(done) => {
                let outcome = ProcessOutcome::from_status(done.status, done.timed_out);
                span.record("exit", field::debug(outcome));
                (outcome.classify(argv, expect_fail, self.timeout), done.output)
            }
            Err(e) => {
                tracing::warn!(parent: &span, error = %e, "supervision failed");
                (TestResult::fail(e.to_string()), TestOutput::default())
            }
        }
    }

    async fn supervise(&self, argv: &[String]) -> Result<Supervised, SupervisorError> {
        let (program, args) = argv.split_first().ok_or(SupervisorError::EmptyCommand)?;
        let mut active = context::acquire()?;

        let mut command = std::process::Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .process_group(0);

        // Returns once the child has exec'd, so its group already exists.
        let mut child = tokio::process::Command::from(command)
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| SupervisorError::Spawn { program: program.clone(), source })?;

        let pid = child.id().ok_or_else(|| {
            SupervisorError::io("reading compiler pid")(std::io::ErrorKind::NotFound.into())
        })?;
        let pgid = Pid::from_raw(pid as i32);
        active.set_process_group(pgid);
        tracing::Span::current().record("pid", pid).record("pgid", pgid.as_raw());
        tracing::debug!(pid, "compiler started");

        let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
            return Err(SupervisorError::io("capturing compiler output")(
                std::io::ErrorKind::BrokenPipe.into(),
            ));
        };
        let mut drain = OutputDrain::new(stdout, stderr);

        let deadline = self.timeout.map(|timeout| Instant::now() + timeout);
        let mut timed_out = false;

        let status = loop {
            tokio::select! {
                res = drain.step(), if !drain.is_done() => {
                    res.map_err(SupervisorError::io("reading compiler output"))?;
                }
                res = child.wait() => {
                    break res.map_err(SupervisorError::io("waiting for compiler"))?;
                }
                () = expire(deadline), if !timed_out => {
                    tracing::info!(pid, "compiler timed out, killing its process group");
                    timed_out = true;
                    kill_group(pgid, Signal::SIGKILL);
                }
                signal = active.next_interrupt() => {
                    self.forward(&active, pgid, signal);
                }
            }
        };

        // Nothing in the group may outlive the compiler.
        kill_group(pgid, Signal::SIGKILL);
        active.clear_process_group();

        drain.finish(DRAIN_GRACE).await.map_err(SupervisorError::io("reading compiler output"))?;
        active.release(self.policy == InterruptPolicy::Reraise);

        tracing::debug!(%status, timed_out, "compiler finished");
        Ok(Supervised { status, timed_out, output: drain.into_output() })
    }

    fn forward(&self, active: &ActiveSupervision, pgid: Pid, signal: i32) {
        tracing::info!(signal, pgid = pgid.as_raw(), policy = %self.policy, "forwarding interrupt");
        match Signal::try_from(signal) {
            Ok(sig) => kill_group(pgid, sig),
            Err(e) => tracing::warn!(signal, error = %e, "cannot forward unknown signal"),
        }
        if self.policy == InterruptPolicy::Reraise {
            // The driver dies on re-raise, so descendants ignoring the
            // forwarded signal must go first.
            kill_group(pgid, Signal::SIGKILL);
            active.clear_process_group();
            active.reraise(signal);
        }
    }
}

async fn expire(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}

#[cfg(test)]
#[path = "supervisor_tests.rs"]
mod tests;
