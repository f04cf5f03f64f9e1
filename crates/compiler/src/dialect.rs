// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Compiler argument dialects and vendor brands.

use std::path::Path;

use serde::Serialize;

/// Argument syntax family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// gcc-style: `-std=c++17`, `-Iinc`, `-fsyntax-only`
    Cc,
    /// cl-style: `/std:c++17`, `/Iinc`, `/Zs`
    Msvc,
}

caliber_core::simple_display! {
    Dialect {
        Cc => "cc",
        Msvc => "msvc",
    }
}

impl Dialect {
    /// Flag asking the compiler to check syntax without producing output.
    pub fn syntax_only_flag(self) -> &'static str {
        match self {
            Dialect::Cc => "-fsyntax-only",
            Dialect::Msvc => "/Zs",
        }
    }

    pub(crate) fn std_flag(self, standard: &str) -> String {
        match self {
            Dialect::Cc => format!("-std={standard}"),
            Dialect::Msvc => format!("/std:{standard}"),
        }
    }

    pub(crate) fn include_flag(self, dir: &Path) -> String {
        let dir = dir.to_string_lossy();
        match self {
            Dialect::Cc => format!("-I{dir}"),
            Dialect::Msvc => format!("/I{dir}"),
        }
    }

    /// `letter` is the bare option letter, `D` or `U`.
    pub(crate) fn macro_flag(self, letter: char, name: &str) -> String {
        match self {
            Dialect::Cc => format!("-{letter}{name}"),
            Dialect::Msvc => format!("/{letter}{name}"),
        }
    }
}

/// Compiler vendor, when recognizable from its banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Brand {
    Gcc,
    Clang,
    Msvc,
    Unknown,
}

caliber_core::simple_display! {
    Brand {
        Gcc => "gcc",
        Clang => "clang",
        Msvc => "msvc",
        Unknown => "unknown",
    }
}

impl Brand {
    /// Brand name usable as an option scope; `None` for [`Brand::Unknown`].
    pub fn scope_name(self) -> Option<&'static str> {
        match self {
            Brand::Gcc => Some("gcc"),
            Brand::Clang => Some("clang"),
            Brand::Msvc => Some("msvc"),
            Brand::Unknown => None,
        }
    }
}
