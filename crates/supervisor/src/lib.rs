// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! caliber-supervisor: Runs one compiler invocation under supervision
//!
//! The compiler is spawned in its own process group with piped output and a
//! null stdin. While it runs, both pipes are drained concurrently, an
//! optional deadline is armed, and SIGINT/SIGQUIT delivered to the driver are
//! forwarded to the whole group. Once the compiler is reaped the group is
//! killed, the pipes get a last bounded drain, and the outcome is classified
//! into a [`TestResult`](caliber_core::TestResult).

mod context;
mod drain;
mod error;
mod outcome;
mod supervisor;

pub use context::active_process_group;
pub use drain::DRAIN_GRACE;
pub use error::SupervisorError;
pub use supervisor::{InterruptPolicy, Supervisor};
