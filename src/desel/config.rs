//! Configuration
//!
//! Settings come from two layers: the TOML in `defaults/desel.default.toml`, compiled into the
//! library, and an optional user file on top of it. Keys missing from the user file keep their
//! default value.

use config::{Config, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../../defaults/desel.default.toml");

#[derive(Debug, Clone, Deserialize)]
pub struct DeselConfig {
    pub loader: LoaderConfig,
    pub diagnostics: DiagnosticsConfig,
}

/// Which files count as Desel sources when a directory is scanned.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoaderConfig {
    pub extension: String,
}

/// Anomalies reported while tokenizing loaded sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DiagnosticsConfig {
    pub warn_unterminated_quotes: bool,
}

impl DeselConfig {
    /// The compiled-in defaults alone.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// Defaults, overlaid with `user_file` when given. A user file that does not exist is
    /// skipped; one that exists but is not valid TOML is an error.
    pub fn load(user_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        if let Some(path) = user_file {
            let user = File::from(path).format(FileFormat::Toml).required(false);
            builder = builder.add_source(user);
        }
        builder.build()?.try_deserialize()
    }
}
