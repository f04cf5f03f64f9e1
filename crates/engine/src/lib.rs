// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! caliber-engine: Runs compilation tests and reports them
//!
//! The orchestrator walks the input files one at a time: it parses each
//! file's directive, applies the test filters, hands surviving tests to a
//! [`CompileRunner`], and forwards every verdict to a [`TestLogger`].

mod child_logger;
mod logger;
mod orchestrator;
mod runner;
mod term_logger;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use child_logger::ChildLogger;
pub use logger::{LogEvent, TestLogger};
pub use orchestrator::{Orchestrator, RunSummary, DEFAULT_SUITE};
pub use runner::{CompilationTestRunner, CompileRunner};
pub use term_logger::{Palette, TermLogger, Verbosity};
