//! Testing utilities
//!
//!     Helpers shared by unit tests and the integration tests under `tests/`.
//!
//! Factories
//!
//!     Expected streams are easiest to read as `(category, text, column)` rows per line. See
//!     [factories](factories).
//!
//!     ```rust,ignore
//!     assert_eq!(
//!         tokenize_line("@e", 0),
//!         mk_line(0, &[(Category::ElementMarker, "@", 0), (Category::Label, "e", 1)])
//!     );
//!     ```
//!
//! Samples
//!
//!     Whole-file cases live in `docs/samples/*.desel` and are reached through
//!     [Samples](samples::Samples), so fixtures are shared rather than repeated as string
//!     literals in every test file.

pub mod factories;
pub mod samples;

pub use factories::{mk_line, mk_token};
pub use samples::Samples;
