//! Directive-line lexemes
//!
//!     Once a line is known to be a directive line, the rest of it is plain regular language
//!     and is left to a logos lexer. Every character of a line matches some variant below,
//!     so scanning never gets stuck:
//!
//!         - delimiters have their own single-character tokens (whitespace is a run)
//!         - `'` and `"` open a quoted label that runs to the matching quote or to end of line
//!         - anything else starts a bare label that runs up to the next delimiter
//!
//!     Quotes are only special at the start of a label. `a'b` is a single bare label.

use logos::Logos;

/// Raw lexemes of a directive line
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lexeme {
    /// `#` up to the next `\n`; the line scanner extends it to the end of its text
    #[regex(r"#[^\n]*")]
    CommentTail,

    #[token("%")]
    SetMarker,

    #[token("@")]
    ElementMarker,

    #[token("(")]
    LeftParen,

    #[token(")")]
    RightParen,

    #[token("&")]
    And,

    #[token("-")]
    Minus,

    #[token("!")]
    Not,

    #[regex(r"[ \t]+")]
    Whitespace,

    /// Closing quote is optional: an unterminated label closes at end of line
    #[regex(r"'[^']*'?")]
    SingleQuoted,

    #[regex(r#""[^"]*"?"#)]
    DoubleQuoted,

    #[regex(r#"[^#%@()&!\t '"-][^#%@()&!\t -]*"#)]
    Bare,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexemes(source: &str) -> Vec<(Lexeme, &str)> {
        let mut lexer = Lexeme::lexer(source);
        let mut out = Vec::new();
        while let Some(result) = lexer.next() {
            out.push((result.expect("every character is classified"), lexer.slice()));
        }
        out
    }

    #[test]
    fn test_single_character_tokens() {
        assert_eq!(
            lexemes("%@()&-!"),
            vec![
                (Lexeme::SetMarker, "%"),
                (Lexeme::ElementMarker, "@"),
                (Lexeme::LeftParen, "("),
                (Lexeme::RightParen, ")"),
                (Lexeme::And, "&"),
                (Lexeme::Minus, "-"),
                (Lexeme::Not, "!"),
            ]
        );
    }

    #[test]
    fn test_whitespace_run() {
        assert_eq!(
            lexemes("a \t  b"),
            vec![
                (Lexeme::Bare, "a"),
                (Lexeme::Whitespace, " \t  "),
                (Lexeme::Bare, "b"),
            ]
        );
    }

    #[test]
    fn test_comment_tail_swallows_delimiters() {
        assert_eq!(
            lexemes("x#( @ 'y"),
            vec![(Lexeme::Bare, "x"), (Lexeme::CommentTail, "#( @ 'y")]
        );
    }

    #[test]
    fn test_quoted_labels() {
        assert_eq!(
            lexemes(r#"'e 3' "e 'x' 4""#),
            vec![
                (Lexeme::SingleQuoted, "'e 3'"),
                (Lexeme::Whitespace, " "),
                (Lexeme::DoubleQuoted, r#""e 'x' 4""#),
            ]
        );
    }

    #[test]
    fn test_unterminated_quote_runs_to_end() {
        assert_eq!(
            lexemes("'a & b"),
            vec![(Lexeme::SingleQuoted, "'a & b")]
        );
        assert_eq!(lexemes("\""), vec![(Lexeme::DoubleQuoted, "\"")]);
    }

    #[test]
    fn test_quote_inside_bare_label() {
        assert_eq!(
            lexemes("a'b c'"),
            vec![
                (Lexeme::Bare, "a'b"),
                (Lexeme::Whitespace, " "),
                (Lexeme::Bare, "c'"),
            ]
        );
    }

    #[test]
    fn test_non_ascii_bare_label() {
        assert_eq!(
            lexemes("集合-ß"),
            vec![
                (Lexeme::Bare, "集合"),
                (Lexeme::Minus, "-"),
                (Lexeme::Bare, "ß"),
            ]
        );
    }
}
