// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use caliber_engine::Palette;
use clap::builder::styling::{Ansi256Color, Color, Style, Styles};
use clap::ValueEnum;
use std::io::IsTerminal;

pub mod codes {
    /// Section headers: pastel cyan / steel blue
    pub const HEADER: u8 = 74;
    /// Commands and literals: light grey
    pub const LITERAL: u8 = 250;
    /// Descriptions and context: medium grey
    pub const CONTEXT: u8 = 245;
    /// Timings and secondary text: darker grey
    pub const MUTED: u8 = 240;
    /// Passing tests: soft green
    pub const PASSED: u8 = 114;
    /// Failing tests: muted red
    pub const FAILED: u8 = 167;
    /// Skipped tests: amber
    pub const SKIPPED: u8 = 179;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

/// Determine if color output should be enabled.
///
/// Priority: `NO_COLOR=1` disables → `COLOR=1` forces → TTY check.
pub fn should_colorize() -> bool {
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }
    std::io::stdout().is_terminal()
}

impl ColorChoice {
    /// An explicit `--color` wins over the environment.
    pub fn enabled(self) -> bool {
        match self {
            ColorChoice::Auto => should_colorize(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

/// Build clap `Styles` using the project palette.
pub fn styles() -> Styles {
    if !should_colorize() {
        return Styles::plain();
    }
    Styles::styled()
        .header(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::HEADER)))))
        .literal(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::LITERAL)))))
        .placeholder(Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(codes::CONTEXT)))))
}

/// Verdict colors for the terminal logger.
pub fn palette() -> Palette {
    Palette {
        passed: codes::PASSED,
        failed: codes::FAILED,
        skipped: codes::SKIPPED,
        muted: codes::MUTED,
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
