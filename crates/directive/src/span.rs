// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Byte ranges within a directive body.

/// A byte-offset range in directive text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    #[inline]
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The spanned text, or `""` if out of bounds.
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start..self.end).unwrap_or("")
    }
}

/// Show the line of `text` holding `span` with carets under it.
///
/// ```text
/// -F -n 'broken
///       ^^^^^^^
/// ```
pub fn context_snippet(text: &str, span: Span) -> String {
    let start = span.start.min(text.len());
    let line_start = text[..start].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let line_end = text[start..].find('\n').map(|i| start + i).unwrap_or(text.len());
    let line = &text[line_start..line_end];

    let column = text[line_start..start].chars().count();
    let width = Span::new(start, span.end.clamp(start, line_end)).slice(text).chars().count();

    format!("{}\n{}{}", line, " ".repeat(column), "^".repeat(width.max(1)))
}

#[cfg(test)]
#[path = "span_tests.rs"]
mod tests;
