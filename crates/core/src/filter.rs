// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Test selection by name and attribute.

use std::collections::BTreeSet;
use std::str::FromStr;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Attribute that skips a test unless a filter selects it explicitly.
pub const SKIP_ATTR: &str = "skip";

/// Errors building a [`FilterSet`].
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("invalid test name pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("empty attribute filter")]
    EmptyAttribute,
}

/// A test's attribute names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attributes(BTreeSet<String>);

impl Attributes {
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Attributes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// What to do with a test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestAction {
    Run,
    /// Report as skipped with the given reason.
    Skip(String),
    /// Leave out of the report entirely.
    Hide,
    /// No filter had an opinion; decided by the test's attributes.
    Indeterminate,
}

crate::simple_display! {
    TestAction {
        Run => "run",
        Skip(..) => "skip",
        Hide => "hide",
        Indeterminate => "indeterminate",
    }
}

impl TestAction {
    /// Settle an indeterminate action using the test's own attributes.
    pub fn resolve(self, attrs: &Attributes) -> TestAction {
        match self {
            TestAction::Indeterminate if attrs.contains(SKIP_ATTR) => {
                TestAction::Skip(format!("{SKIP_ATTR} attribute"))
            }
            TestAction::Indeterminate => TestAction::Run,
            other => other,
        }
    }
}

/// One attribute requirement: `NAME` or `!NAME`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrFilter {
    Has(String),
    Lacks(String),
}

impl AttrFilter {
    pub fn accepts(&self, attrs: &Attributes) -> bool {
        match self {
            AttrFilter::Has(name) => attrs.contains(name),
            AttrFilter::Lacks(name) => !attrs.contains(name),
        }
    }
}

impl FromStr for AttrFilter {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let filter = match s.strip_prefix('!') {
            Some(name) => AttrFilter::Lacks(name.to_string()),
            None => AttrFilter::Has(s.to_string()),
        };
        match &filter {
            AttrFilter::Has(name) | AttrFilter::Lacks(name) if name.is_empty() => {
                Err(FilterError::EmptyAttribute)
            }
            _ => Ok(filter),
        }
    }
}

/// Name and attribute filters from the command line.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    names: Vec<Regex>,
    attrs: Vec<AttrFilter>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only show tests whose name matches at least one pattern.
    pub fn with_name_patterns<I, S>(mut self, patterns: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let regex = Regex::new(pattern).map_err(|source| FilterError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            self.names.push(regex);
        }
        Ok(self)
    }

    /// Only run tests satisfying every attribute filter.
    pub fn with_attr_filters(mut self, filters: impl IntoIterator<Item = AttrFilter>) -> Self {
        self.attrs.extend(filters);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.attrs.is_empty()
    }

    /// Decide what to do with a test before its attributes are consulted.
    pub fn evaluate(&self, name: &str, attrs: &Attributes) -> TestAction {
        if !self.names.is_empty() && !self.names.iter().any(|re| re.is_match(name)) {
            return TestAction::Hide;
        }
        if self.attrs.is_empty() {
            return TestAction::Indeterminate;
        }
        if self.attrs.iter().all(|filter| filter.accepts(attrs)) {
            TestAction::Run
        } else {
            TestAction::Hide
        }
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
