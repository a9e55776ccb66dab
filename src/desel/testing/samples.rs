//! Sample corpus access
//!
//!     Samples are plain `.desel` files under `docs/samples`, addressed by file stem:
//!     `Samples::source("020-expressions")` reads `docs/samples/020-expressions.desel`.
//!
//!     Failing to find or read a sample is a broken test setup, so these helpers panic with
//!     the offending path instead of returning errors.

use crate::desel::loader::DeselSource;
use crate::desel::token::TokenStream;
use once_cell::sync::Lazy;
use std::path::{Path, PathBuf};

static SAMPLES_DIR: Lazy<PathBuf> =
    Lazy::new(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("docs").join("samples"));

/// Entry point for loading samples
pub struct Samples;

impl Samples {
    pub fn dir() -> &'static Path {
        SAMPLES_DIR.as_path()
    }

    pub fn path(name: &str) -> PathBuf {
        SAMPLES_DIR.join(format!("{}.desel", name))
    }

    /// Load a sample as a [DeselSource].
    pub fn load(name: &str) -> DeselSource {
        let path = Self::path(name);
        DeselSource::from_path(&path)
            .unwrap_or_else(|e| panic!("Failed to load sample {}: {}", path.display(), e))
    }

    /// Raw text of a sample.
    pub fn source(name: &str) -> String {
        Self::load(name).text()
    }

    /// Tokenize a sample, labelling the stream with its path.
    pub fn tokenize(name: &str) -> TokenStream {
        Self::load(name).tokenize()
    }
}
