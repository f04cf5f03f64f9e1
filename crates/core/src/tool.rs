// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tool identity resolution.
//!
//! A [`Tool`] pairs the command a user asked for with its identity: the chain
//! of aliases it answers to, from the exact binary name down to the generic
//! family (`g++-11` → `g++` → `c++`). Per-test tool filters and raw option
//! scopes are matched against this chain.

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while locating a tool.
#[derive(Debug, Error)]
pub enum LookupError {
    /// No executable with this name on the search path.
    #[error("unable to locate command `{command}`")]
    NotFound { command: String },

    /// The executable was found but its symlink chain could not be resolved.
    #[error("unable to resolve `{}`: {source}", path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

struct ToolDef {
    pattern: Regex,
    parents: &'static [&'static str],
}

/// Known compiler names, most specific first. Patterns must match the whole
/// binary name so that `clang++` never falls through to the `clang` entry.
static KNOWN_TOOLS: LazyLock<Vec<ToolDef>> = LazyLock::new(|| {
    [
        (r"^.*clang\+\+(-\d+(\.\d+)?)?$", &["clang++", "c++"][..]),
        (r"^.*clang(-\d+(\.\d+)?)?$", &["clang", "cc"][..]),
        (r"^.*g\+\+(-\d+(\.\d+)?)?$", &["g++", "c++"][..]),
        (r"^.*gcc(-\d+(\.\d+)?)?$", &["gcc", "cc"][..]),
        (r"^c\+\+$", &["c++"][..]),
        (r"^cc$", &["cc"][..]),
        (r"^cl(\.exe)?$", &["cl", "msvc"][..]),
    ]
    .into_iter()
    .filter_map(|(pattern, parents)| {
        Regex::new(pattern).ok().map(|pattern| ToolDef { pattern, parents })
    })
    .collect()
});

/// A resolved compiler or tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    /// The command as given by the user (not canonicalized).
    pub path: String,
    /// Aliases from most to least specific. Never empty for resolved tools.
    pub identity: Vec<String>,
}

impl Tool {
    /// Locate `path` on the search path, follow its symlinks, and derive the
    /// identity chain from the real binary's name.
    pub fn resolve(path: impl Into<String>) -> Result<Self, LookupError> {
        let path = path.into();
        let name = tool_name(&path)?;
        let identity = identity_for(&name);
        tracing::debug!(path = %path, resolved = %name, ?identity, "resolved tool");
        Ok(Self { path, identity })
    }

    /// Build a tool with an explicit identity, skipping the filesystem.
    pub fn with_identity<I, S>(path: impl Into<String>, identity: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { path: path.into(), identity: identity.into_iter().map(Into::into).collect() }
    }

    /// True iff `name` is one of this tool's aliases.
    pub fn matches(&self, name: &str) -> bool {
        self.identity.iter().any(|alias| alias == name)
    }

    /// The most specific alias, falling back to the command itself.
    pub fn primary_name(&self) -> &str {
        self.identity.first().map(String::as_str).unwrap_or(&self.path)
    }
}

/// Identity chain for a canonical binary name.
///
/// Unrecognized names still identify as themselves, so a test filter naming
/// the exact binary keeps matching.
pub fn identity_for(name: &str) -> Vec<String> {
    let mut identity = vec![name.to_string()];
    if let Some(def) = KNOWN_TOOLS.iter().find(|def| def.pattern.is_match(name)) {
        for parent in def.parents {
            if !identity.iter().any(|alias| alias == parent) {
                identity.push(parent.to_string());
            }
        }
    }
    identity
}

/// Locate an executable the way a shell would.
///
/// Commands containing a `/` are checked as-is; anything else is searched
/// for in each `PATH` entry in order.
pub fn which(command: &str) -> Result<PathBuf, LookupError> {
    let not_found = || LookupError::NotFound { command: command.to_string() };
    if command.is_empty() {
        return Err(not_found());
    }

    if command.contains('/') {
        let candidate = PathBuf::from(command);
        return if is_executable(&candidate) { Ok(candidate) } else { Err(not_found()) };
    }

    let search_path = std::env::var_os("PATH").ok_or_else(not_found)?;
    std::env::split_paths(&search_path)
        .map(|dir| if dir.as_os_str().is_empty() { PathBuf::from(".") } else { dir })
        .map(|dir| dir.join(command))
        .find(|candidate| is_executable(candidate))
        .ok_or_else(not_found)
}

fn is_executable(path: &Path) -> bool {
    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// Name of the real binary behind `command` after resolving symlinks.
fn tool_name(command: &str) -> Result<String, LookupError> {
    let located = which(command)?;
    let real = std::fs::canonicalize(&located)
        .map_err(|source| LookupError::Resolve { path: located.clone(), source })?;
    Ok(real
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| command.to_string()))
}

#[cfg(test)]
#[path = "tool_tests.rs"]
mod tests;
