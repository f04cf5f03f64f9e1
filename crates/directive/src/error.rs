// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for directive parsing.

use thiserror::Error;

use crate::{context_snippet, Span};

/// Errors splitting directive text into words.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SplitError {
    /// Unterminated single quote.
    #[error("unterminated single quote at position {}", span.start)]
    UnterminatedSingleQuote { span: Span },

    /// Unterminated double quote.
    #[error("unterminated double quote at position {}", span.start)]
    UnterminatedDoubleQuote { span: Span },

    /// Backslash with nothing left to escape.
    #[error("trailing backslash at position {}", span.start)]
    TrailingBackslash { span: Span },
}

impl SplitError {
    pub fn span(&self) -> Span {
        match self {
            Self::UnterminatedSingleQuote { span }
            | Self::UnterminatedDoubleQuote { span }
            | Self::TrailingBackslash { span } => *span,
        }
    }

    /// The offending line of `text` with carets under the error.
    pub fn context(&self, text: &str) -> String {
        context_snippet(text, self.span())
    }
}

/// Errors parsing a test file's directive.
///
/// Any of these fails the one test it belongs to.
#[derive(Debug, Error)]
pub enum DirectiveError {
    #[error("malformed directive: {source}\n{context}")]
    Split {
        #[source]
        source: SplitError,
        /// Snippet of the directive pointing at the error.
        context: String,
    },

    #[error("invalid directive: {0}")]
    InvalidArgs(String),
}

impl DirectiveError {
    pub(crate) fn split(source: SplitError, text: &str) -> Self {
        let context = source.context(text);
        Self::Split { source, context }
    }

    /// Condense a clap error to its first line, without the `error: ` prefix.
    pub(crate) fn from_clap(err: &clap::Error) -> Self {
        let rendered = err.to_string();
        let first = rendered.lines().next().unwrap_or_default();
        Self::InvalidArgs(first.trim_start_matches("error: ").to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
