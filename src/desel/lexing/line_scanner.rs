//! Line-level scanning
//!
//!     A line is scanned in one pass with a column cursor that only moves forward:
//!
//!         line-start ──(not a marker)──────────────▶ done   (whole line is one comment)
//!             │
//!             └──(% or @, emit marker)──▶ in-directive ──(cursor hits end)──▶ done
//!                                            │    ▲
//!                                            │    └── one token per step
//!                                            └──(#, emit tail)──▶ done
//!
//!     Whether a line is a directive line is decided by its first character alone. A line
//!     starting with `#` is an ordinary comment line, same as any other non-directive line.
//!
//!     All state lives in a [LineScanner] owned by one call, so scanning is reentrant.

use super::lexeme::Lexeme;
use crate::desel::token::{Category, Token};
use logos::Logos;

pub const SET_MARKER: char = '%';
pub const ELEMENT_MARKER: char = '@';

/// Scanner for a single line of source text
pub struct LineScanner<'a> {
    text: &'a str,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
}

impl<'a> LineScanner<'a> {
    pub fn new(text: &'a str, line: usize) -> Self {
        Self {
            text,
            line,
            column: 0,
            tokens: Vec::new(),
        }
    }

    /// Scan the whole line and return its tokens.
    pub fn scan(mut self) -> Vec<Token> {
        match self.text.chars().next() {
            None => {}
            Some(SET_MARKER | ELEMENT_MARKER) => self.scan_directive(),
            Some(_) => self.push(Category::Comment, self.text),
        }
        tracing::trace!(
            line = self.line,
            tokens = self.tokens.len(),
            "scanned line"
        );
        self.tokens
    }

    fn scan_directive(&mut self) {
        let text = self.text;
        let mut lexer = Lexeme::lexer(text);
        while let Some(result) = lexer.next() {
            let category = match result {
                Ok(lexeme) => classify(lexeme),
                // Unreachable for valid UTF-8; keep the scan total anyway
                Err(()) => Category::Label,
            };
            if category == Category::Comment {
                // The tail owns the rest of the text, embedded `\n` included
                let tail = &text[lexer.span().start..];
                self.push(category, tail);
                break;
            }
            self.push(category, lexer.slice());
        }
    }

    fn push(&mut self, category: Category, text: &str) {
        let token = Token::new(category, text, self.line, self.column);
        if token.is_unterminated() {
            tracing::debug!(
                line = self.line,
                column = self.column,
                "quoted label closed at end of line"
            );
        }
        self.column = token.end_column();
        self.tokens.push(token);
    }
}

fn classify(lexeme: Lexeme) -> Category {
    match lexeme {
        Lexeme::CommentTail => Category::Comment,
        Lexeme::SetMarker => Category::SetMarker,
        Lexeme::ElementMarker => Category::ElementMarker,
        Lexeme::LeftParen => Category::LeftParen,
        Lexeme::RightParen => Category::RightParen,
        Lexeme::And => Category::AndOp,
        Lexeme::Minus => Category::MinusOp,
        Lexeme::Not => Category::NotOp,
        Lexeme::Whitespace => Category::Whitespace,
        Lexeme::SingleQuoted | Lexeme::DoubleQuoted | Lexeme::Bare => Category::Label,
    }
}

/// Tokenize one line. `line` is the zero-based index stamped on every token.
pub fn tokenize_line(text: &str, line: usize) -> Vec<Token> {
    LineScanner::new(text, line).scan()
}
