// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Word splitting tests: plain words, quoting, escapes, and error spans.

use super::*;

/// Generate word splitting success tests.
///
/// ```ignore
/// split_tests! {
///     name: "input" => ["word1", "word2"],
/// }
/// ```
macro_rules! split_tests {
    ($($name:ident: $input:expr => [$($word:expr),* $(,)?]),* $(,)?) => {
        $(
            #[test]
            fn $name() {
                let words = split_words($input).expect(concat!("failed to split: ", $input));
                let expected: Vec<String> = vec![$($word.to_string()),*];
                assert_eq!(words, expected, "input: {:?}", $input);
            }
        )*
    };
}

// =============================================================================
// Plain words
// =============================================================================

split_tests! {
    empty_input: "" => [],
    only_whitespace: " \t\n " => [],
    single_word: "-F" => ["-F"],
    several_words: "-F -n name" => ["-F", "-n", "name"],
    runs_of_whitespace: "  -I\t\tinc \n -DFOO  " => ["-I", "inc", "-DFOO"],
    equals_kept: "--std=c++17 -X cc=-Wall" => ["--std=c++17", "-X", "cc=-Wall"],
}

// =============================================================================
// Quoting
// =============================================================================

split_tests! {
    single_quote_basic: "'hello world'" => ["hello world"],
    single_quote_is_literal: r"'a\b$c'" => [r"a\b$c"],
    single_quote_empty: "''" => [""],
    double_quote_basic: "\"two words\"" => ["two words"],
    double_quote_escapes: r#""a\"b\\c\$d""# => [r#"a"b\c$d"#],
    double_quote_keeps_other_backslashes: r#""a\nb""# => [r"a\nb"],
    adjacent_parts_join: "-D'FOO=a b'\"c\"d" => ["-DFOO=a bcd"],
    quote_inside_other_quote: "\"it's\" 'say \"hi\"'" => ["it's", "say \"hi\""],
    unicode_in_quotes: "-n 'größe'" => ["-n", "größe"],
}

// =============================================================================
// Escapes outside quotes
// =============================================================================

split_tests! {
    escaped_space: r"a\ b" => ["a b"],
    escaped_quote: r"\'x" => ["'x"],
    escaped_backslash: r"a\\b" => [r"a\b"],
}

// =============================================================================
// Errors
// =============================================================================

#[yare::parameterized(
    single_quote     = { "-n 'oops",     SplitError::UnterminatedSingleQuote { span: Span::new(3, 8) } },
    double_quote     = { "-n \"oops",    SplitError::UnterminatedDoubleQuote { span: Span::new(3, 8) } },
    empty_single     = { "'",            SplitError::UnterminatedSingleQuote { span: Span::new(0, 1) } },
    trailing_escape  = { "-D\\",         SplitError::TrailingBackslash { span: Span::new(2, 3) } },
)]
fn split_errors(input: &str, expected: SplitError) {
    assert_eq!(split_words(input), Err(expected));
}
