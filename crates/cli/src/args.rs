// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line interface.

use std::path::PathBuf;
use std::time::Duration;

use caliber_core::{AttrFilter, FilterSet};
use caliber_directive::DEFAULT_MARKER;
use caliber_engine::DEFAULT_SUITE;
use clap::Parser;

use crate::color::ColorChoice;
use crate::exit_error::ExitError;
use crate::output::OutputFormat;

pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_GIT_HASH"), ")");

#[derive(Debug, Parser)]
#[command(
    name = "caliber",
    version = VERSION,
    about = "Run compilation tests: check that each file compiles, or fails to, as expected",
    styles = crate::color::styles(),
    after_help = per_file_help(),
)]
pub struct Cli {
    /// Test files to compile
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// The compiler command to use for these tests
    #[arg(
        long = "compiler",
        visible_alias = "tool",
        value_name = "CMD",
        env = "CXX",
        default_value = "c++",
        help_heading = "Driver options"
    )]
    pub compiler: String,

    /// The name of the suite containing these tests
    #[arg(
        short = 'S',
        long,
        value_name = "NAME",
        default_value = DEFAULT_SUITE,
        help_heading = "Driver options"
    )]
    pub suite_name: String,

    /// Kill a compiler still running after this many milliseconds
    #[arg(short, long, value_name = "MS", help_heading = "Driver options")]
    pub timeout: Option<u64>,

    /// Word that opens a per-file directive comment
    #[arg(long, value_name = "WORD", default_value = DEFAULT_MARKER, help_heading = "Driver options")]
    pub marker: String,

    /// Only run tests whose name matches REGEX
    #[arg(short = 'T', long = "test", value_name = "REGEX", help_heading = "Driver options")]
    pub tests: Vec<String>,

    /// Only run tests with (ATTR) or without (!ATTR) an attribute
    #[arg(short = 'A', long = "attr", value_name = "FILTER", help_heading = "Driver options")]
    pub attrs: Vec<AttrFilter>,

    /// Log driver diagnostics to stderr
    #[arg(short, long, help_heading = "Driver options")]
    pub verbose: bool,

    /// How to report results
    #[arg(short, long, value_enum, value_name = "FORMAT", help_heading = "Output options")]
    pub output: Option<OutputFormat>,

    /// When to color the report
    #[arg(long, value_enum, value_name = "WHEN", help_heading = "Output options")]
    pub color: Option<ColorChoice>,

    /// Show how long each test took
    #[arg(long, help_heading = "Output options")]
    pub show_time: bool,

    /// Stream results as JSON lines to this file descriptor
    #[arg(long, value_name = "FD", hide = true, conflicts_with_all = ["output", "color", "show_time"])]
    pub output_fd: Option<i32>,
}

fn per_file_help() -> String {
    format!(
        "Per-file directive: a leading `// {DEFAULT_MARKER} ...` or `/* {DEFAULT_MARKER} ... */` \
         comment accepts:\n{}",
        caliber_directive::help()
    )
}

impl Cli {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout.map(Duration::from_millis)
    }

    pub fn filters(&self) -> Result<FilterSet, ExitError> {
        FilterSet::new()
            .with_name_patterns(&self.tests)
            .map(|filters| filters.with_attr_filters(self.attrs.iter().cloned()))
            .map_err(|e| ExitError::bad_args(e.to_string()))
    }
}

/// First line of a clap error, without its `error: ` prefix.
pub fn clap_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}

#[cfg(test)]
#[path = "args_tests.rs"]
mod tests;
