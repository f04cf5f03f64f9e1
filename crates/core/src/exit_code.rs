// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes shared by the driver and its child processes.
//!
//! `TIMEOUT` doubles as a reserved compiler status: a compiler exiting with
//! it is reported as timed out. It is assumed not to collide with any real
//! compiler's own exit codes; nothing enforces that.

/// Every test passed (or the tool exited cleanly).
pub const SUCCESS: i32 = 0;
/// At least one test failed.
pub const FAILURE: i32 = 1;
/// Invalid command line.
pub const BAD_ARGS: i32 = 2;
/// No input files were given.
pub const NO_INPUTS: i32 = 3;
/// Startup error: tool lookup, flavor detection, I/O.
pub const UNKNOWN_ERROR: i32 = 64;
/// A watchdog killed the process after its deadline.
pub const TIMEOUT: i32 = 65;
