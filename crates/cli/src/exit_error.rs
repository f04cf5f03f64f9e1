// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! The driver returns `ExitError` instead of calling `std::process::exit()`
//! directly, so `main()` prints the message and picks the status. Anything
//! else reaching `main()` is a startup error.

use std::fmt;

use caliber_core::exit_code;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn bad_args(message: impl Into<String>) -> Self {
        Self::new(exit_code::BAD_ARGS, message)
    }

    /// Map any error to its exit status and message.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        match err.downcast_ref::<ExitError>() {
            Some(exit) => Self::new(exit.code, exit.message.clone()),
            None => Self::new(exit_code::UNKNOWN_ERROR, format!("{err:#}")),
        }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}
