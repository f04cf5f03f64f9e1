// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Locating the directive comment at the top of a test file.

const LINE_SPACE: &[char] = &[' ', '\t'];
const BLOCK_SPACE: &[char] = &[' ', '\t', '\r', '\n'];

/// Return the text following `marker` in the comment that opens `source`.
///
/// The comment must be the very first thing in the file, either
/// `// <marker> ...` (to end of line) or `/* <marker> ... */`. An
/// unterminated block comment runs to the end of the file.
pub fn extract_comment<'a>(source: &'a str, marker: &str) -> Option<&'a str> {
    if let Some(rest) = source.strip_prefix("//") {
        let line = rest.lines().next().unwrap_or_default();
        return after_marker(line, marker, LINE_SPACE);
    }
    if let Some(rest) = source.strip_prefix("/*") {
        let body = rest.find("*/").map_or(rest, |end| &rest[..end]);
        return after_marker(body, marker, BLOCK_SPACE);
    }
    None
}

fn after_marker<'a>(text: &'a str, marker: &str, space: &[char]) -> Option<&'a str> {
    let rest = text.trim_start_matches(space).strip_prefix(marker)?;
    match rest.chars().next() {
        Some(ch) if !space.contains(&ch) => None,
        _ => Some(rest),
    }
}
