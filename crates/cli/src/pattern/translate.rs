// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Translation of wildcard patterns into anchored regular expressions.
//!
//! A pattern is first split into [`Token`]s. Escaped asterisks and the
//! leading `*.` shorthand become dedicated tokens before any wildcard
//! expansion happens, so nothing in the pattern or candidate text can
//! collide with them. The tokens are then rendered in order:
//!
//! ```text
//! ^ [scheme prefix] tokens [scheme tail] [host-only tail] $
//! ```
//!
//! Wildcards never cross a line terminator (`\n`, `\r`, U+2028, U+2029).

/// Optional scheme and `//` accepted in front of patterns without a scheme.
const DEFAULT_SCHEME_PREFIX: &str = "(?:https?:|ftp:|mailto:|file:|tel:|sms:|data:)?(?://)?";

/// Any character except a line terminator.
macro_rules! line_char {
    () => {
        r"[^\n\r\x{2028}\x{2029}]"
    };
}

/// Expansion of an unescaped `*`.
const LAZY_ANY: &str = concat!(line_char!(), "*?");

/// Expansion of a leading `*.`: any subdomains, or none at all.
const SUBDOMAIN_PREFIX: &str = concat!("(?:", line_char!(), r"*?\.)?");

/// Expansion of an escaped `\*`.
const LITERAL_STAR: &str = r"\*";

/// Appended to scheme patterns ending in `//`.
const SCHEME_TAIL: &str = concat!(line_char!(), "*");

/// Appended to host-only patterns so any path, query or fragment is accepted.
const HOST_ONLY_TAIL: &str = concat!("(?:/", line_char!(), "*)?");

/// A lexical unit of a wildcard pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token {
    /// A character matched as itself.
    Literal(char),
    /// Unescaped `*`.
    Wildcard,
    /// `\*`, a literal asterisk.
    EscapedStar,
    /// `*.` at the very start of the pattern.
    SubdomainPrefix,
}

/// Result of translating one pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Regular expression source, fully anchored.
    pub source: String,
    /// Whether the pattern names only a host (see [`is_host_only`]).
    pub host_only: bool,
}

/// True if the pattern contains any `*`, escaped or not.
///
/// Patterns without one are compared for exact equality and never reach
/// [`translate`].
pub fn has_wildcard(pattern: &str) -> bool {
    memchr::memchr(b'*', pattern.as_bytes()).is_some()
}

/// True if the pattern starts with an explicit scheme such as `https:`.
///
/// A scheme is one or more ASCII word characters followed by `:`.
pub fn has_scheme(pattern: &str) -> bool {
    let bytes = pattern.as_bytes();
    let word_len = bytes
        .iter()
        .take_while(|&&b| b.is_ascii_alphanumeric() || b == b'_')
        .count();
    word_len > 0 && bytes.get(word_len) == Some(&b':')
}

/// True if the pattern has no scheme and none of `/`, `?` or `#`.
pub fn is_host_only(pattern: &str) -> bool {
    !has_scheme(pattern) && !pattern.contains(['/', '?', '#'])
}

/// Split a pattern into tokens.
pub(crate) fn tokenize(pattern: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(pattern.len());
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'*') => {
                chars.next();
                tokens.push(Token::EscapedStar);
            }
            '*' => tokens.push(Token::Wildcard),
            c => tokens.push(Token::Literal(c)),
        }
    }

    if tokens.starts_with(&[Token::Wildcard, Token::Literal('.')]) {
        tokens[0] = Token::SubdomainPrefix;
        tokens.remove(1);
    }

    tokens
}

/// Translate a wildcard pattern into an anchored regular expression.
pub fn translate(pattern: &str) -> Translation {
    let tokens = tokenize(pattern);
    let host_only = is_host_only(pattern);
    let explicit_scheme = has_scheme(pattern);

    let mut source = String::with_capacity(pattern.len() * 2 + DEFAULT_SCHEME_PREFIX.len() + 16);
    source.push('^');

    if !explicit_scheme {
        source.push_str(DEFAULT_SCHEME_PREFIX);
    }

    for token in &tokens {
        push_token(&mut source, *token);
    }

    // `https://` style patterns cover everything under the scheme
    if explicit_scheme && tokens.ends_with(&[Token::Literal('/'), Token::Literal('/')]) {
        source.push_str(SCHEME_TAIL);
    }

    if host_only {
        source.push_str(HOST_ONLY_TAIL);
    }

    source.push('$');

    Translation { source, host_only }
}

fn push_token(out: &mut String, token: Token) {
    match token {
        Token::Literal(c) => {
            let mut buf = [0u8; 4];
            out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
        }
        Token::Wildcard => out.push_str(LAZY_ANY),
        Token::EscapedStar => out.push_str(LITERAL_STAR),
        Token::SubdomainPrefix => out.push_str(SUBDOMAIN_PREFIX),
    }
}

#[cfg(test)]
#[path = "translate_tests.rs"]
mod tests;
