// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

#![allow(clippy::expect_used)]

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

// ── Proptest strategies ─────────────────────────────────────────────────

/// Proptest strategies for directive option types.
pub mod strategies {
    use crate::options::{CompilerOption, RawOption};
    use proptest::prelude::*;

    fn arb_value() -> impl Strategy<Value = String> {
        "[A-Za-z0-9_./+=-]{1,12}"
    }

    pub fn arb_compiler_option() -> impl Strategy<Value = CompilerOption> {
        prop_oneof![
            arb_value().prop_map(CompilerOption::std),
            arb_value().prop_map(CompilerOption::include),
            arb_value().prop_map(CompilerOption::define),
            arb_value().prop_map(CompilerOption::undefine),
        ]
    }

    pub fn arb_raw_option() -> impl Strategy<Value = RawOption> {
        (prop_oneof![Just(""), Just("cc"), Just("msvc"), Just("gcc"), Just("clang")], arb_value())
            .prop_map(|(scope, value)| RawOption::new(scope, value))
    }
}

// ── Fake tools ──────────────────────────────────────────────────────────

/// Write an executable `/bin/sh` script named `name` into `dir`.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).expect("write script");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("chmod script");
    path
}

/// Banner a fake compiler prints when probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FakeBanner {
    Gcc,
    Clang,
    /// Answers `--version` with an unrecognized banner.
    GenericCc,
    Msvc,
    /// Answers `/?` with an unrecognized banner.
    GenericMsvc,
    /// Rejects every probe.
    Silent,
}

/// Shell fragment shared by every fake compiler.
///
/// The source file is the last argument. Sources containing `caliber-hang`
/// record the compiler's pid next to the source and never finish. Sources
/// containing `caliber-background` start a background `sleep`, record its
/// pid in `<source>.bgpid` and wait on it. Sources containing `syntax error`
/// fail with a diagnostic on stderr; everything else compiles. Each invocation's arguments are appended to `<script>.calls`.
const COMPILE_BODY: &str = r#"for last; do :; done
printf '%s\n' "$*" >> "$0.calls"
if grep -q 'caliber-hang' "$last" 2>/dev/null; then
  echo $$ > "$last.pid"
  exec sleep 30
fi
if grep -q 'caliber-background' "$last" 2>/dev/null; then
  sleep 30 &
  echo $! > "$last.bgpid"
  wait
fi
if grep -q 'syntax error' "$last" 2>/dev/null; then
  echo "$last:1:1: error: expected unqualified-id" >&2
  exit 1
fi
exit 0"#;

/// Write a fake compiler named `name` into `dir`.
pub fn fake_compiler(dir: &Path, name: &str, banner: FakeBanner) -> PathBuf {
    let probe = match banner {
        FakeBanner::Gcc => {
            r#"if [ "$1" = "--version" ]; then
  echo "g++ (GCC) 11.4.0"
  echo "Copyright (C) 2021 Free Software Foundation, Inc."
  exit 0
fi"#
        }
        FakeBanner::Clang => {
            r#"if [ "$1" = "--version" ]; then
  echo "Ubuntu clang version 17.0.6"
  echo "Target: x86_64-pc-linux-gnu"
  exit 0
fi"#
        }
        FakeBanner::GenericCc => {
            r#"if [ "$1" = "--version" ]; then
  echo "c++ 1.0"
  exit 0
fi"#
        }
        FakeBanner::Msvc => {
            r#"if [ "$1" = "--version" ]; then
  echo "cl : Command line warning D9002 : ignoring unknown option '--version'" >&2
  exit 2
fi
if [ "$1" = "/?" ]; then
  echo "Microsoft (R) C/C++ Optimizing Compiler Version 19.36.32532 for x64"
  exit 0
fi"#
        }
        FakeBanner::GenericMsvc => {
            r#"if [ "$1" = "--version" ]; then
  exit 2
fi
if [ "$1" = "/?" ]; then
  echo "msvc 1.0"
  exit 0
fi"#
        }
        FakeBanner::Silent => {
            r#"if [ "$1" = "--version" ] || [ "$1" = "/?" ]; then
  echo "usage: program FILE" >&2
  exit 1
fi"#
        }
    };
    write_script(dir, name, &format!("{probe}\n{COMPILE_BODY}"))
}

/// Argument lines recorded by a fake compiler, one per invocation.
pub fn recorded_calls(compiler: &Path) -> Vec<String> {
    let mut calls = compiler.as_os_str().to_owned();
    calls.push(".calls");
    std::fs::read_to_string(PathBuf::from(calls))
        .map(|text| text.lines().map(str::to_string).collect())
        .unwrap_or_default()
}

/// Run `f` with `dir` prepended to `PATH`, restoring the old value afterwards.
///
/// Mutates process-wide state: callers must serialize on `path_env`.
pub fn with_path_prefix<T>(dir: &Path, f: impl FnOnce() -> T) -> T {
    let old = std::env::var_os("PATH").unwrap_or_default();
    let mut entries = vec![dir.to_path_buf()];
    entries.extend(std::env::split_paths(&old));
    let joined = std::env::join_paths(entries).expect("join PATH");
    std::env::set_var("PATH", &joined);
    let result = f();
    std::env::set_var("PATH", old);
    result
}
