// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! caliber-compiler: Compiler descriptors, flavor detection, and argument translation

mod compiler;
mod detect;
mod dialect;
mod error;

pub use compiler::Compiler;
pub use detect::{detect_flavor, PROBE_TIMEOUT};
pub use dialect::{Brand, Dialect};
pub use error::{DetectError, TranslateError};
