// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Errors that end a supervised invocation before it can be classified.
///
/// None of these is a compilation failure; each becomes a failed result
/// carrying the message.
#[derive(Debug, Error)]
pub enum SupervisorError {
    /// Another invocation already owns the process-wide supervision context.
    #[error("another compiler invocation is already being supervised")]
    AlreadyActive,

    #[error("no command to run")]
    EmptyCommand,

    /// The child could not be started: lookup, exec, or pre-exec setup failed.
    #[error("failed to start `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A parent-side operation failed.
    #[error("{context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl SupervisorError {
    pub(crate) fn io(context: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| Self::Io { context, source }
    }
}
