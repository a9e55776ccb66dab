//! Source loading
//!
//! This module reads Desel sources from readers, strings and files. Each source keeps a
//! description (a path, or whatever the caller chose) next to its lines, so token streams and
//! diagnostics can say where they came from.
//!
//! # Example
//!
//! ```rust,ignore
//! use desel::desel::loader::{read_desel_files, DeselSource};
//!
//! let source = DeselSource::from_path("sets.desel")?;
//! let stream = source.tokenize();
//!
//! let sources = read_desel_files(&["a.desel", "b.desel"])?;
//! ```
//!
//! Tokenizing never fails; only I/O and decoding do, and those errors name the source.

use crate::desel::config::{DiagnosticsConfig, LoaderConfig};
use crate::desel::lexing::{split_lines, tokenize_lines};
use crate::desel::token::TokenStream;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error that can occur when loading sources
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("reading \"{description}\": {source}")]
    Io {
        description: String,
        #[source]
        source: io::Error,
    },
    #[error("reading \"{description}\": not valid UTF-8")]
    InvalidUtf8 { description: String },
    #[error("\"{}\" is not a directory", path.display())]
    NotADirectory { path: PathBuf },
}

/// A named source, split into lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeselSource {
    description: String,
    contents: Vec<String>,
}

impl DeselSource {
    /// Read all of `reader`. `description` only labels the result.
    pub fn read<R: Read>(
        description: impl Into<String>,
        mut reader: R,
    ) -> Result<Self, LoaderError> {
        let description = description.into();
        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .map_err(|source| LoaderError::Io {
                description: description.clone(),
                source,
            })?;
        let text = String::from_utf8(buf).map_err(|_| LoaderError::InvalidUtf8 {
            description: description.clone(),
        })?;
        tracing::debug!(source = %description, bytes = text.len(), "read desel source");
        Ok(Self::from_string(description, &text))
    }

    pub fn from_string(description: impl Into<String>, text: &str) -> Self {
        Self {
            description: description.into(),
            contents: split_lines(text).into_iter().map(String::from).collect(),
        }
    }

    /// Load a file; the description is the path as given.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let description = path.display().to_string();
        let file = fs::File::open(path).map_err(|source| LoaderError::Io {
            description: description.clone(),
            source,
        })?;
        Self::read(description, file)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn contents(&self) -> &[String] {
        &self.contents
    }

    /// The source text, lines joined back with `\n`.
    pub fn text(&self) -> String {
        self.contents.join("\n")
    }

    pub fn tokenize(&self) -> TokenStream {
        TokenStream::new(self.description.clone(), tokenize_lines(&self.contents))
    }

    /// Tokenize and report anomalies the diagnostics settings ask for.
    pub fn tokenize_with(&self, diagnostics: &DiagnosticsConfig) -> TokenStream {
        let stream = self.tokenize();
        if diagnostics.warn_unterminated_quotes {
            for token in stream.unterminated_labels() {
                tracing::warn!(
                    source = %self.description,
                    line = token.line(),
                    column = token.column(),
                    label = token.text(),
                    "unterminated quoted label"
                );
            }
        }
        stream
    }
}

/// Load several files, in order. Stops at the first file that cannot be read.
pub fn read_desel_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<DeselSource>, LoaderError> {
    paths.iter().map(DeselSource::from_path).collect()
}

/// List the files directly inside `dir` that carry the configured extension, sorted by path.
pub fn discover_desel_files(
    dir: &Path,
    config: &LoaderConfig,
) -> Result<Vec<PathBuf>, LoaderError> {
    if !dir.is_dir() {
        return Err(LoaderError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }
    let io_error = |source| LoaderError::Io {
        description: dir.display().to_string(),
        source,
    };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        let matches = path
            .extension()
            .is_some_and(|ext| ext == config.extension.as_str());
        if matches && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Discover and load every source in `dir`.
pub fn load_dir(dir: &Path, config: &LoaderConfig) -> Result<Vec<DeselSource>, LoaderError> {
    let paths = discover_desel_files(dir, config)?;
    read_desel_files(&paths)
}
