//! Main module for desel library functionality

pub mod config;
pub mod lexing;
pub mod loader;
pub mod testing;
pub mod token;

pub use lexing::{split_lines, tokenize, tokenize_labelled, tokenize_line, tokenize_lines};
pub use token::{detokenize, Category, Token, TokenStream};
