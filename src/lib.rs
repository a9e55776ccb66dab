//! # desel
//!
//! Lexical analysis for Desel, a small line-oriented selector language.
//!
//! A Desel source is plain text. Lines starting with a set marker (`%`) or an element marker
//! (`@`) are directive lines and get scanned token by token; every other line is free-form
//! comment. See [desel::lexing] for the tokenizer and [desel::loader] for reading sources.
//!
//! For testing helpers and the sample corpus, see the [testing module](desel::testing).

pub mod desel;
