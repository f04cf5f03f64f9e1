// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wires the parsed command line to the orchestrator.

use anyhow::Context;
use caliber_compiler::Compiler;
use caliber_core::exit_code;
use caliber_directive::split_words;
use caliber_engine::{ChildLogger, CompilationTestRunner, Orchestrator, TermLogger, Verbosity};
use caliber_supervisor::Supervisor;

use crate::args::Cli;
use crate::color;
use crate::exit_error::ExitError;
use crate::output::open_output_fd;

/// Run every test file and return the process exit status.
pub async fn run(cli: Cli) -> anyhow::Result<i32> {
    if cli.files.is_empty() {
        return Err(ExitError::new(exit_code::NO_INPUTS, "no inputs specified").into());
    }
    let filters = cli.filters()?;

    let command = split_words(&cli.compiler)
        .map_err(|e| ExitError::bad_args(format!("invalid compiler command: {e}")))?;
    let compiler = Compiler::detect(&command)
        .await
        .with_context(|| format!("unable to use compiler `{}`", cli.compiler))?;

    let mut supervisor = Supervisor::new();
    if let Some(timeout) = cli.timeout() {
        supervisor = supervisor.timeout(timeout);
    }
    let runner = CompilationTestRunner::new(compiler, supervisor);
    let orchestrator = Orchestrator::new(runner)
        .suite(cli.suite_name.clone())
        .marker(cli.marker.clone())
        .filters(filters);

    if let Some(fd) = cli.output_fd {
        let mut logger = ChildLogger::new(open_output_fd(fd)?);
        orchestrator.run_test_files(&cli.files, &mut logger).await;
        // The parent judges the results it received.
        return Ok(exit_code::SUCCESS);
    }

    let verbosity: Verbosity = cli.output.unwrap_or_default().into();
    let mut logger = TermLogger::new(std::io::stdout(), verbosity).show_time(cli.show_time);
    if cli.color.unwrap_or_default().enabled() {
        logger = logger.palette(color::palette());
    }
    let summary = orchestrator.run_test_files(&cli.files, &mut logger).await;
    tracing::debug!(?summary, "reported");

    Ok(if logger.good() { exit_code::SUCCESS } else { exit_code::FAILURE })
}
