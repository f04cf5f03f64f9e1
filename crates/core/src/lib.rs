// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! caliber-core: Shared data model for the caliber compilation-test driver

pub mod macros;

pub mod clock;
pub mod exit_code;
pub mod filter;
pub mod options;
pub mod result;
pub mod time_fmt;
pub mod tool;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use clock::{Clock, FakeClock, SystemClock};
pub use filter::{AttrFilter, Attributes, FilterError, FilterSet, TestAction, SKIP_ATTR};
pub use options::{CompilerOption, RawOption};
pub use result::{TestName, TestOutput, TestResult};
pub use time_fmt::format_elapsed_ms;
pub use tool::{which, LookupError, Tool};
