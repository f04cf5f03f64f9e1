// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The seam between the orchestrator and the compiler.

use std::path::Path;

use async_trait::async_trait;
use caliber_compiler::Compiler;
use caliber_core::{TestOutput, TestResult};
use caliber_directive::Directive;
use caliber_supervisor::Supervisor;

/// Runs one compilation test.
#[async_trait]
pub trait CompileRunner: Send + Sync {
    /// True iff a per-test tool filter naming `tool` selects this compiler.
    fn matches_tool(&self, tool: &str) -> bool;

    /// The name used when a test is skipped for this compiler.
    fn primary_name(&self) -> &str;

    /// Compile `src` with the directive's options and judge the result.
    async fn run(&self, src: &Path, directive: &Directive) -> (TestResult, TestOutput);
}

/// Syntax-checks files with a detected compiler under a [`Supervisor`].
#[derive(Debug, Clone)]
pub struct CompilationTestRunner {
    compiler: Compiler,
    supervisor: Supervisor,
}

impl CompilationTestRunner {
    pub fn new(compiler: Compiler, supervisor: Supervisor) -> Self {
        Self { compiler, supervisor }
    }

    pub fn compiler(&self) -> &Compiler {
        &self.compiler
    }
}

#[async_trait]
impl CompileRunner for CompilationTestRunner {
    fn matches_tool(&self, tool: &str) -> bool {
        self.compiler.matches(tool)
    }

    fn primary_name(&self) -> &str {
        self.compiler.tool().primary_name()
    }

    async fn run(&self, src: &Path, directive: &Directive) -> (TestResult, TestOutput) {
        let argv = match self.compiler.translate_args(
            src,
            &directive.options,
            &directive.raw_options,
        ) {
            Ok(argv) => argv,
            Err(e) => return (TestResult::fail(e.to_string()), TestOutput::default()),
        };
        tracing::debug!(?argv, "compiling");
        self.supervisor.run(&argv, directive.expect_fail).await
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
