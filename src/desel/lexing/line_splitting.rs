//! Line splitting
//!
//!     Sources are split on `\n` only. Empty lines are kept, a trailing newline yields a
//!     trailing empty line, and `\r` is left in place as ordinary content.

/// Split `source` into lines on `\n`. Always yields at least one (possibly empty) line.
pub fn split_lines(source: &str) -> Vec<&str> {
    source.split('\n').collect()
}
