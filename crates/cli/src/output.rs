// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::fs::{File, OpenOptions};

use caliber_core::exit_code;
use caliber_engine::Verbosity;
use clap::ValueEnum;

use crate::exit_error::ExitError;

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One mark per test
    #[default]
    Brief,
    /// One line per test, with compiler output for failures
    Verbose,
}

impl From<OutputFormat> for Verbosity {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Brief => Verbosity::Brief,
            OutputFormat::Verbose => Verbosity::Verbose,
        }
    }
}

/// Open an inherited file descriptor for writing results to a parent.
pub fn open_output_fd(fd: i32) -> Result<File, ExitError> {
    if fd < 0 {
        return Err(ExitError::new(exit_code::BAD_ARGS, format!("invalid output fd {fd}")));
    }
    OpenOptions::new().write(true).open(format!("/dev/fd/{fd}")).map_err(|e| {
        ExitError::new(exit_code::BAD_ARGS, format!("unable to open output fd {fd}: {e}"))
    })
}
