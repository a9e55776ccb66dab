//! Core token types shared by the tokenizer, the loader and tooling.
//!
//! Token Layers
//!
//!     Desel has a single layer of tokens. Every token carries the exact source text it spans
//!     plus its zero-based line and column, so a stream can always be turned back into the
//!     source it came from (see [detokenize]).
//!
//!     Scanned Tokens:
//!         Markers, parentheses, operators, whitespace runs, labels and comments. They are
//!         produced while scanning a single line. See [core](core).
//!
//!     Synthetic Tokens:
//!         The newline token is not scanned from any line. It is inserted between two lines
//!         to stand for the terminator that separated them, and is positioned one past the
//!         last character of the preceding line.
//!
//!     Columns count code points, not bytes.

pub mod category;
pub mod core;
pub mod formatting;
pub mod stream;

pub use category::Category;
pub use self::core::Token;
pub use formatting::{detokenize, render};
pub use stream::TokenStream;
