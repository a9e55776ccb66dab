//! Lexer
//!
//!     This module turns Desel source text into a flat, position-annotated token stream.
//!
//! The Lexing Pipeline
//!
//!     1. Line splitting. See [line_splitting](line_splitting).
//!        The source is split on `\n`; nothing is normalized.
//!
//!     2. Line scanning. See [line_scanner](line_scanner).
//!        Each line is scanned on its own. Non-directive lines become a single comment token;
//!        directive lines are handed to the logos lexer in [lexeme](lexeme).
//!
//!     3. Stitching. Between two consecutive lines a synthetic newline token is inserted,
//!        carrying the previous line's index and its length (in code points) as column. No
//!        newline is emitted before the first line, nor after the last one: the stream never
//!        claims a terminator the source did not have.
//!
//!     Tokenizing is total. Malformed input (unbalanced parentheses, dangling operators,
//!     unterminated quotes) still tokenizes; judging structure is a parser's job.

pub mod lexeme;
pub mod line_scanner;
pub mod line_splitting;

pub use line_scanner::{tokenize_line, LineScanner};
pub use line_splitting::split_lines;

use crate::desel::token::{Token, TokenStream};

/// Tokenize a whole source.
#[tracing::instrument(level = "debug", skip(source), fields(bytes = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_lines(&split_lines(source))
}

/// Tokenize already split lines, stitching them together with synthetic newlines.
///
/// Items are expected to be lines as produced by [split_lines], without `\n`. An item that
/// does contain one is still tokenized losslessly, but the `\n` is treated as ordinary
/// content: it does not start a new line index or reset the column.
pub fn tokenize_lines<S: AsRef<str>>(lines: &[S]) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut previous_length = 0;
    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        if index > 0 {
            tokens.push(Token::newline(index - 1, previous_length));
        }
        tokens.extend(tokenize_line(line, index));
        previous_length = line.chars().count();
    }
    tokens
}

/// Tokenize a source and label the stream with `source_label`.
pub fn tokenize_labelled(source_label: impl Into<String>, source: &str) -> TokenStream {
    TokenStream::new(source_label, tokenize(source))
}
