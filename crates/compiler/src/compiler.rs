// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The long-lived description of the compiler under test.

use std::path::Path;

use caliber_core::{CompilerOption, RawOption, Tool};
use serde::Serialize;

use crate::{detect_flavor, Brand, DetectError, Dialect, TranslateError};

/// A compiler command with its identity, vendor and argument dialect.
///
/// Built once at startup; every test's arguments are translated through it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Compiler {
    tool: Tool,
    /// Words following the tool in the compiler command.
    args: Vec<String>,
    brand: Brand,
    dialect: Dialect,
}

impl Compiler {
    pub fn new(tool: Tool, brand: Brand, dialect: Dialect) -> Self {
        Self { tool, args: Vec::new(), brand, dialect }
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Resolve the first word of `command` and probe the whole command for
    /// its flavor.
    pub async fn detect(command: &[String]) -> Result<Self, DetectError> {
        let (program, args) = command.split_first().ok_or(DetectError::EmptyCommand)?;
        let tool = Tool::resolve(program.as_str())?;
        let (brand, dialect) = detect_flavor(command).await?;
        tracing::info!(
            tool = tool.primary_name(),
            %brand,
            %dialect,
            "detected compiler"
        );
        Ok(Self::new(tool, brand, dialect).with_args(args.to_vec()))
    }

    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    pub fn brand(&self) -> Brand {
        self.brand
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// The command words that start every invocation.
    pub fn command(&self) -> Vec<String> {
        std::iter::once(self.tool.path.clone()).chain(self.args.iter().cloned()).collect()
    }

    /// True iff `scope` names this compiler by tool alias, dialect, or brand.
    pub fn matches(&self, scope: &str) -> bool {
        self.tool.matches(scope)
            || scope == self.dialect.to_string()
            || self.brand.scope_name() == Some(scope)
    }

    /// Build the full argument vector that syntax-checks `src`.
    ///
    /// Include directories are taken relative to the source file's
    /// directory. Raw options are kept when unscoped or when their scope
    /// [`matches`](Self::matches). The vector always ends with the
    /// syntax-only flag and then `src`.
    pub fn translate_args(
        &self,
        src: &Path,
        options: &[CompilerOption],
        raw_options: &[RawOption],
    ) -> Result<Vec<String>, TranslateError> {
        let base = src.parent().unwrap_or(Path::new(""));
        let mut argv = self.command();

        for option in options {
            let value = option.value();
            let arg = match option.key.as_str() {
                CompilerOption::STD => self.dialect.std_flag(value),
                CompilerOption::INCLUDE => self.dialect.include_flag(&base.join(value)),
                CompilerOption::DEFINE => self.dialect.macro_flag('D', value),
                CompilerOption::UNDEFINE => self.dialect.macro_flag('U', value),
                other => return Err(TranslateError::UnsupportedOption { key: other.to_string() }),
            };
            argv.push(arg);
        }

        argv.extend(
            raw_options
                .iter()
                .filter(|raw| raw.is_unscoped() || self.matches(&raw.scope))
                .map(|raw| raw.value.clone()),
        );

        argv.push(self.dialect.syntax_only_flag().to_string());
        argv.push(src.to_string_lossy().into_owned());
        Ok(argv)
    }
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
