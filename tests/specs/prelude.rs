// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for driving the binary.

use std::path::{Path, PathBuf};
use std::process::Output;

pub use caliber_core::test_support::FakeBanner;
use tempfile::TempDir;

/// The binary with a clean environment: no `CXX`, no color, no logs.
pub fn cli() -> Cli {
    let mut cmd = assert_cmd::Command::cargo_bin("caliber").expect("caliber binary is built");
    cmd.env_remove("CXX")
        .env_remove("COLOR")
        .env_remove("CALIBER_LOG")
        .env("NO_COLOR", "1");
    Cli { cmd }
}

/// The binary as a plain child process, for specs that signal it while running.
pub fn spawn_caliber(project: &Project, compiler: &Path, file: &str) -> std::process::Child {
    std::process::Command::new(assert_cmd::cargo::cargo_bin("caliber"))
        .arg("--compiler")
        .arg(compiler)
        .arg(file)
        .current_dir(project.path())
        .env_remove("CXX")
        .env_remove("COLOR")
        .env_remove("CALIBER_LOG")
        .env("NO_COLOR", "1")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn()
        .expect("spawn caliber")
}

/// Pid recorded by a fake compiler, once the file is complete.
pub fn read_pid(path: &Path) -> Option<i32> {
    std::fs::read_to_string(path).ok()?.trim().parse().ok()
}

pub struct Cli {
    cmd: assert_cmd::Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn arg(mut self, arg: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.arg(arg);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cmd.current_dir(dir);
        self
    }

    /// Run and require exit status 0.
    pub fn passes(self) -> RunAssert {
        self.exits(0)
    }

    /// Run and require exit status 1 (some test failed).
    pub fn fails(self) -> RunAssert {
        self.exits(1)
    }

    pub fn exits(mut self, code: i32) -> RunAssert {
        let output = self.cmd.output().expect("run caliber");
        let run = RunAssert { output };
        assert_eq!(
            run.output.status.code(),
            Some(code),
            "unexpected exit status\nstdout:\n{}\nstderr:\n{}",
            run.stdout(),
            run.stderr()
        );
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(expected), "stdout lacks {expected:?}:\n{stdout}");
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(!stdout.contains(unexpected), "stdout has {unexpected:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(expected), "stderr lacks {expected:?}:\n{stderr}");
        self
    }

    /// Parse stdout as JSON lines.
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout()
            .lines()
            .map(|line| serde_json::from_str(line).expect("stdout line is JSON"))
            .collect()
    }
}

/// A temporary directory holding test files and a fake compiler.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self { dir: TempDir::new().expect("create project dir") }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(&path, contents).expect("write test file");
        path
    }

    /// Write a fake compiler into `bin/` and return its path.
    pub fn compiler(&self, name: &str, banner: FakeBanner) -> PathBuf {
        let bin = self.dir.path().join("bin");
        std::fs::create_dir_all(&bin).expect("create bin dir");
        caliber_core::test_support::fake_compiler(&bin, name, banner)
    }

    /// The binary, run from the project directory with a fake `g++`.
    pub fn caliber(&self) -> Cli {
        let gxx = self.compiler("g++", FakeBanner::Gcc);
        cli().arg("--compiler").arg(gxx).current_dir(self.path())
    }
}

/// True while `pid` exists and is not a zombie.
pub fn is_alive(pid: i32) -> bool {
    if nix::sys::signal::kill(nix::unistd::Pid::from_raw(pid), None).is_err() {
        return false;
    }
    let stat = std::fs::read_to_string(format!("/proc/{pid}/stat")).unwrap_or_default();
    let state = stat.rsplit_once(')').and_then(|(_, rest)| rest.trim_start().chars().next());
    !matches!(state, Some('Z') | Some('X') | None)
}

/// Poll `check` for up to two seconds.
pub fn eventually(mut check: impl FnMut() -> bool) -> bool {
    for _ in 0..200 {
        if check() {
            return true;
        }
        std::thread::sleep(std::time::Duration::from_millis(10));
    }
    false
}
