//! The token record emitted by the tokenizer

use super::Category;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An immutable, position-annotated lexeme.
///
/// `text` is the exact source slice, quotes included for quoted labels. `line` and `column`
/// are zero-based; `column` counts code points from the start of the line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    category: Category,
    text: String,
    line: usize,
    column: usize,
}

impl Token {
    pub fn new(category: Category, text: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            category,
            text: text.into(),
            line,
            column,
        }
    }

    /// The synthetic terminator placed after a line of `line_length` code points.
    pub fn newline(line: usize, line_length: usize) -> Self {
        Self::new(Category::Newline, "\n", line, line_length)
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    /// Column one past the last code point of the token.
    pub fn end_column(&self) -> usize {
        self.column + self.text.chars().count()
    }

    /// `(category, text, line, column)`, the shape used in logs and test comparisons.
    pub fn as_tuple(&self) -> (Category, &str, usize, usize) {
        (self.category, &self.text, self.line, self.column)
    }

    /// A quoted label whose closing quote never showed up before the end of its line.
    ///
    /// The tokenizer closes such labels at end of line; whether that is an error is for
    /// whoever consumes the stream to decide.
    pub fn is_unterminated(&self) -> bool {
        if self.category != Category::Label {
            return false;
        }
        let mut chars = self.text.chars();
        match chars.next() {
            Some(quote @ ('\'' | '"')) => chars.next_back() != Some(quote),
            _ => false,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({:?})@{}:{}",
            self.category, self.text, self.line, self.column
        )
    }
}
