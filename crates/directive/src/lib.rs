// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! caliber-directive: Per-file test configuration embedded in a leading comment
//!
//! A test file may begin with a comment such as
//!
//! ```text
//! // caliber -F --std=c++17 -X cc=-Wall
//! ```
//!
//! whose words are parsed like a command line into a [`Directive`].

mod comment;
mod directive;
mod error;
mod span;
mod split;

pub use comment::extract_comment;
pub use directive::{help, Directive, DirectiveArgs};
pub use error::{DirectiveError, SplitError};
pub use span::{context_snippet, Span};
pub use split::split_words;

/// Default word introducing a directive.
pub const DEFAULT_MARKER: &str = "caliber";
