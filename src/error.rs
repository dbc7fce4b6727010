use std::path::PathBuf;

use thiserror::Error;

use crate::{EXIT_CONFIG_ERROR, EXIT_IO_ERROR};

#[derive(Error, Debug)]
pub enum TextSeekError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Search keyword must not be empty")]
    EmptyKeyword,

    #[error("Failed to scan directory: {root}")]
    Scan {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file: {path}")]
    Search {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl TextSeekError {
    /// Process exit code for this error kind.
    ///
    /// Configuration-class errors map to `EXIT_CONFIG_ERROR`; I/O failures
    /// during scanning or searching map to `EXIT_IO_ERROR`.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_)
            | Self::EmptyKeyword
            | Self::InvalidPattern { .. }
            | Self::TomlParse(_)
            | Self::JsonSerialize(_) => EXIT_CONFIG_ERROR,
            Self::Scan { .. } | Self::Search { .. } | Self::Io(_) => EXIT_IO_ERROR,
        }
    }
}

pub type Result<T> = std::result::Result<T, TextSeekError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
