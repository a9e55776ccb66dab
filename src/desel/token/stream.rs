//! Token streams labelled with their source
//!
//!     The tokenizer itself never sees where text came from. Callers that do (the loader, for
//!     one) wrap the tokens in a [TokenStream] so diagnostics can name the source.

use super::core::Token;
use super::formatting::detokenize;
use serde::Serialize;

/// The full token stream of one source, plus a description of that source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenStream {
    source: String,
    tokens: Vec<Token>,
}

impl TokenStream {
    pub fn new(source: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            source: source.into(),
            tokens,
        }
    }

    /// Description of the source, e.g. a file path.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Tokens scanned from line `line`. The synthetic newline that follows a line carries that
    /// line's index, so it is included too.
    pub fn line_tokens(&self, line: usize) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter().filter(move |token| token.line() == line)
    }

    /// Quoted labels left open at end of line.
    pub fn unterminated_labels(&self) -> impl Iterator<Item = &Token> + '_ {
        self.tokens.iter().filter(|token| token.is_unterminated())
    }

    /// Reassemble the source text.
    pub fn detokenize(&self) -> String {
        detokenize(&self.tokens)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl IntoIterator for TokenStream {
    type Item = Token;
    type IntoIter = std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}
