//! Line tokenization
//!
//! Lines are split on whitespace. A question mark is always its own token, so
//! `"glob?"` yields `glob` and `?`.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\s?]+|\?").expect("token pattern is a valid regex"));

/// Byte range of a token (or run of tokens) within its line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Smallest span covering both `self` and `other`
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub span: Span,
}

impl Token<'_> {
    /// Keyword comparison ignores ASCII case
    pub fn is(&self, keyword: &str) -> bool {
        self.text.eq_ignore_ascii_case(keyword)
    }
}

pub fn tokenize(line: &str) -> Vec<Token<'_>> {
    TOKEN_PATTERN
        .find_iter(line)
        .map(|m| Token {
            text: m.as_str(),
            span: Span {
                start: m.start(),
                end: m.end(),
            },
        })
        .collect()
}

/// Index of the first token matching `keyword`
pub fn position(tokens: &[Token<'_>], keyword: &str) -> Option<usize> {
    tokens.iter().position(|t| t.is(keyword))
}

/// Span covering a run of tokens, or `fallback` when the run is empty
pub fn span_of(tokens: &[Token<'_>], fallback: Span) -> Span {
    match (tokens.first(), tokens.last()) {
        (Some(first), Some(last)) => first.span.cover(last.span),
        _ => fallback,
    }
}

/// Token texts joined by single spaces
pub fn join(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(|t| t.text).collect::<Vec<_>>().join(" ")
}

pub fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
    tokens.iter().map(|t| t.text).collect()
}
