// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed per-file options.

use caliber_core::{Attributes, CompilerOption, RawOption};
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser};

use crate::{extract_comment, split_words, DirectiveError};

/// Command-line grammar of a directive.
#[derive(Debug, Parser)]
#[command(
    name = "directive",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct DirectiveArgs {
    /// Expect the test to fail
    #[arg(short = 'F', long = "fail", help_heading = "Per-file options")]
    pub fail: bool,

    /// The test's name
    #[arg(short = 'n', long, value_name = "NAME", help_heading = "Per-file options")]
    pub name: Option<String>,

    /// The test's attributes
    #[arg(short = 'a', long = "attr", value_name = "ATTR", help_heading = "Per-file options")]
    pub attrs: Vec<String>,

    /// Only run this test with the named tool
    #[arg(
        short = 'c',
        long = "tool",
        visible_alias = "compiler",
        value_name = "NAME",
        help_heading = "Per-file options"
    )]
    pub tools: Vec<String>,

    /// Forward an untranslated argument to compilers matching FLAVOR
    #[arg(
        short = 'X',
        value_name = "FLAVOR=OPTION",
        allow_hyphen_values = true,
        help_heading = "Per-file options"
    )]
    pub raw: Vec<String>,

    /// Add a directory to the include search path
    #[arg(short = 'I', value_name = "PATH", help_heading = "Compiler options")]
    pub include: Vec<String>,

    /// Pre-define a macro
    #[arg(short = 'D', value_name = "MACRO", help_heading = "Compiler options")]
    pub define: Vec<String>,

    /// Undefine a macro
    #[arg(short = 'U', value_name = "MACRO", help_heading = "Compiler options")]
    pub undefine: Vec<String>,

    /// Language standard
    #[arg(long = "std", value_name = "LANG", help_heading = "Compiler options")]
    pub std: Option<String>,
}

/// Argument ids of the translated compiler options, with their option keys.
const COMPILER_ARGS: [(&str, &str); 4] = [
    ("include", CompilerOption::INCLUDE),
    ("define", CompilerOption::DEFINE),
    ("undefine", CompilerOption::UNDEFINE),
    ("std", CompilerOption::STD),
];

/// Configuration of one compilation test.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directive {
    pub expect_fail: bool,
    /// Overrides the file name in reports.
    pub name: Option<String>,
    pub attributes: Attributes,
    /// Tools this test is limited to; empty means any.
    pub tools: Vec<String>,
    /// Compiler options in the order they were written.
    pub options: Vec<CompilerOption>,
    pub raw_options: Vec<RawOption>,
}

impl Directive {
    /// Parse the directive opening `source`. A file without one gets defaults.
    pub fn parse(source: &str, marker: &str) -> Result<Self, DirectiveError> {
        let Some(body) = extract_comment(source, marker) else {
            return Ok(Self::default());
        };
        let words = split_words(body).map_err(|err| DirectiveError::split(err, body))?;
        Self::from_words(words)
    }

    /// Parse already-split directive words.
    pub fn from_words<I, S>(words: I) -> Result<Self, DirectiveError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        let matches = DirectiveArgs::command()
            .try_get_matches_from(&words)
            .map_err(|err| DirectiveError::from_clap(&err))?;
        let args =
            DirectiveArgs::from_arg_matches(&matches).map_err(|err| DirectiveError::from_clap(&err))?;

        let directive = Self {
            expect_fail: args.fail,
            name: args.name,
            attributes: args.attrs.into_iter().collect(),
            tools: args.tools,
            options: ordered_options(&matches),
            raw_options: args.raw.iter().map(|raw| RawOption::parse(raw)).collect(),
        };
        tracing::trace!(?directive, "parsed directive");
        Ok(directive)
    }
}

/// Collect compiler options across argument ids in command-line order.
fn ordered_options(matches: &ArgMatches) -> Vec<CompilerOption> {
    let mut indexed: Vec<(usize, CompilerOption)> = Vec::new();
    for (id, key) in COMPILER_ARGS {
        let (Some(indices), Some(values)) =
            (matches.indices_of(id), matches.get_many::<String>(id))
        else {
            continue;
        };
        indexed.extend(indices.zip(values).map(|(i, v)| (i, CompilerOption::new(key, v.clone()))));
    }
    indexed.sort_by_key(|(i, _)| *i);
    indexed.into_iter().map(|(_, option)| option).collect()
}

/// Help text for the options a directive accepts.
pub fn help() -> String {
    DirectiveArgs::command()
        .help_template("{all-args}")
        .render_help()
        .to_string()
}

#[cfg(test)]
#[path = "directive_tests.rs"]
mod tests;
