//! Lexical categories
//!
//!     The set is closed: adding or removing a category is meant to break every exhaustive
//!     `match` over it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexical category of a [Token](super::Token)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// A whole non-directive line, or the `#` tail of a directive line
    Comment,
    /// A maximal run of spaces and tabs
    Whitespace,
    /// `%`
    SetMarker,
    /// `@`
    ElementMarker,
    /// Quoted or bare identifier
    Label,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `&`
    AndOp,
    /// `-`
    MinusOp,
    /// `!`
    NotOp,
    /// Synthetic line terminator
    Newline,
}

impl Category {
    /// Stable kebab-case name, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Comment => "comment",
            Category::Whitespace => "whitespace",
            Category::SetMarker => "set-marker",
            Category::ElementMarker => "element-marker",
            Category::Label => "label",
            Category::LeftParen => "left-paren",
            Category::RightParen => "right-paren",
            Category::AndOp => "and-op",
            Category::MinusOp => "minus-op",
            Category::NotOp => "not-op",
            Category::Newline => "newline",
        }
    }

    /// Set and element markers.
    pub fn is_marker(&self) -> bool {
        matches!(self, Category::SetMarker | Category::ElementMarker)
    }

    /// Boolean operators (`&`, `-`, `!`).
    pub fn is_operator(&self) -> bool {
        matches!(self, Category::AndOp | Category::MinusOp | Category::NotOp)
    }

    /// Tokens a parser would normally skip over.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            Category::Comment | Category::Whitespace | Category::Newline
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
