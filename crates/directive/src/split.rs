// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-style word splitting for directive text.

use std::iter::Peekable;
use std::str::CharIndices;

use crate::{Span, SplitError};

/// Split `text` into words the way a POSIX shell would, without expansions.
///
/// Single quotes are literal. Inside double quotes a backslash escapes only
/// `\`, `"`, `$` and `` ` ``. Outside quotes a backslash escapes any
/// character. Quoted empty strings are kept as empty words.
pub fn split_words(text: &str) -> Result<Vec<String>, SplitError> {
    Splitter { chars: text.char_indices().peekable() }.run()
}

struct Splitter<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl Splitter<'_> {
    fn run(mut self) -> Result<Vec<String>, SplitError> {
        let mut words = Vec::new();
        loop {
            while self.chars.next_if(|&(_, ch)| ch.is_whitespace()).is_some() {}
            if self.chars.peek().is_none() {
                return Ok(words);
            }
            words.push(self.word()?);
        }
    }

    fn word(&mut self) -> Result<String, SplitError> {
        let mut word = String::new();
        while let Some(&(pos, ch)) = self.chars.peek() {
            match ch {
                c if c.is_whitespace() => break,
                '\'' => self.single_quoted(pos, &mut word)?,
                '"' => self.double_quoted(pos, &mut word)?,
                '\\' => {
                    self.chars.next();
                    let Some((_, escaped)) = self.chars.next() else {
                        return Err(SplitError::TrailingBackslash { span: Span::new(pos, pos + 1) });
                    };
                    word.push(escaped);
                }
                _ => {
                    word.push(ch);
                    self.chars.next();
                }
            }
        }
        Ok(word)
    }

    fn single_quoted(&mut self, start: usize, word: &mut String) -> Result<(), SplitError> {
        self.chars.next();
        let mut end = start + 1;
        for (pos, ch) in self.chars.by_ref() {
            if ch == '\'' {
                return Ok(());
            }
            word.push(ch);
            end = pos + ch.len_utf8();
        }
        Err(SplitError::UnterminatedSingleQuote { span: Span::new(start, end) })
    }

    fn double_quoted(&mut self, start: usize, word: &mut String) -> Result<(), SplitError> {
        self.chars.next();
        let mut end = start + 1;
        while let Some((pos, ch)) = self.chars.next() {
            end = pos + ch.len_utf8();
            match ch {
                '"' => return Ok(()),
                '\\' => match self.chars.next_if(|&(_, c)| matches!(c, '\\' | '"' | '$' | '`')) {
                    Some((esc_pos, escaped)) => {
                        word.push(escaped);
                        end = esc_pos + escaped.len_utf8();
                    }
                    None => word.push('\\'),
                },
                _ => word.push(ch),
            }
        }
        Err(SplitError::UnterminatedDoubleQuote { span: Span::new(start, end) })
    }
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
