// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use caliber_core::LookupError;
use thiserror::Error;

/// Errors building a compiler descriptor at startup.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("no compiler command given")]
    EmptyCommand,

    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Neither `--version` nor `/?` produced a successful answer.
    #[error("unable to determine compiler flavor")]
    UndeterminedFlavor,
}

/// Errors translating a test's options into compiler arguments.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("unsupported compiler option `{key}`")]
    UnsupportedOption { key: String },
}
