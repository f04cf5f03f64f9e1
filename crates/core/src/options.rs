// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compiler options carried by a test's directive.

use serde::Serialize;

/// A recognized, dialect-independent compiler option.
///
/// `key` is the option as spelled in the directive (`std`, `-I`, `-D`,
/// `-U`); translation into a concrete flag happens per dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompilerOption {
    pub key: String,
    pub values: Vec<String>,
}

impl CompilerOption {
    pub const STD: &'static str = "std";
    pub const INCLUDE: &'static str = "-I";
    pub const DEFINE: &'static str = "-D";
    pub const UNDEFINE: &'static str = "-U";

    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: key.into(), values: vec![value.into()] }
    }

    pub fn std(value: impl Into<String>) -> Self {
        Self::new(Self::STD, value)
    }

    pub fn include(value: impl Into<String>) -> Self {
        Self::new(Self::INCLUDE, value)
    }

    pub fn define(value: impl Into<String>) -> Self {
        Self::new(Self::DEFINE, value)
    }

    pub fn undefine(value: impl Into<String>) -> Self {
        Self::new(Self::UNDEFINE, value)
    }

    /// The option's first value, or `""` when it has none.
    pub fn value(&self) -> &str {
        self.values.first().map(String::as_str).unwrap_or("")
    }
}

/// An argument forwarded verbatim to compilers matching `scope`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawOption {
    /// Tool alias, dialect, or brand; empty applies to every compiler.
    pub scope: String,
    pub value: String,
}

impl RawOption {
    pub fn new(scope: impl Into<String>, value: impl Into<String>) -> Self {
        Self { scope: scope.into(), value: value.into() }
    }

    /// Parse the `FLAVOR=OPTION` form; text without `=` applies to any flavor.
    pub fn parse(text: &str) -> Self {
        match text.split_once('=') {
            Some((scope, value)) => Self::new(scope, value),
            None => Self::new("", text),
        }
    }

    pub fn is_unscoped(&self) -> bool {
        self.scope.is_empty()
    }
}
