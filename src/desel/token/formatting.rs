//! Turning token streams back into text
//!
//! Two renderings are provided:
//!
//! - [detokenize]: concatenates token texts. Since tokens partition the source (whole-line
//!   comments and `#` tails included, newlines synthesized between lines), this reproduces the
//!   tokenized source exactly. Useful for round-trip testing.
//! - [render]: one token per line as `line:column category "text"`, for debugging and
//!   snapshot tests.

use super::core::Token;
use std::fmt::Write;

/// Concatenate the text of every token, in order.
pub fn detokenize<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a Token>,
{
    tokens.into_iter().map(Token::text).collect()
}

/// Render tokens one per line, e.g. `0:5 element-marker "@"`.
pub fn render<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'a Token>,
{
    let mut out = String::new();
    for token in tokens {
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "{}:{} {} {:?}",
            token.line(),
            token.column(),
            token.category(),
            token.text()
        );
    }
    out
}
