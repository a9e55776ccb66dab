//! Token factories for tests

use crate::desel::token::{Category, Token};

pub fn mk_token(category: Category, text: &str, line: usize, column: usize) -> Token {
    Token::new(category, text, line, column)
}

/// Tokens of a single line from `(category, text, column)` rows.
pub fn mk_line(line: usize, specs: &[(Category, &str, usize)]) -> Vec<Token> {
    specs
        .iter()
        .map(|&(category, text, column)| mk_token(category, text, line, column))
        .collect()
}
