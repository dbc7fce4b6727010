use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TextSeekError};

pub const DEFAULT_SCAN_DIRECTORY: &str = "./data";
pub const DEFAULT_EXTENSION: &str = ".txt";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Scanner configuration (file discovery).
    #[serde(default)]
    pub scan: ScanConfig,

    /// Search configuration (keyword matching).
    #[serde(default)]
    pub search: SearchConfig,
}

/// Scanner configuration for file discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanConfig {
    /// Directory under which the recursive scan begins.
    #[serde(default = "default_scan_directory")]
    pub directory: PathBuf,

    /// File name suffixes to scan. Matching is a plain case-insensitive
    /// suffix test, not a dot-delimited extension parse.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Exclude patterns (glob syntax).
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            directory: default_scan_directory(),
            extensions: default_extensions(),
            exclude: Vec::new(),
        }
    }
}

/// Search configuration for keyword matching.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Keyword to search for. Required; an empty keyword fails validation.
    #[serde(default)]
    pub keyword: String,

    /// Compare keyword and line content with original casing.
    #[serde(default)]
    pub case_sensitive: bool,

    /// Skip unreadable files instead of aborting the run.
    #[serde(default)]
    pub skip_unreadable: bool,
}

fn default_scan_directory() -> PathBuf {
    PathBuf::from(DEFAULT_SCAN_DIRECTORY)
}

fn default_extensions() -> Vec<String> {
    vec![DEFAULT_EXTENSION.to_string()]
}

impl Config {
    /// Validate the resolved configuration before any scanning begins.
    ///
    /// # Errors
    /// Returns a configuration error if the keyword is empty or the scan
    /// directory does not exist or is not a directory.
    pub fn validate(&self) -> Result<()> {
        if self.search.keyword.is_empty() {
            return Err(TextSeekError::Config(
                "search.keyword is not set".to_string(),
            ));
        }

        if !self.scan.directory.exists() {
            return Err(TextSeekError::Config(format!(
                "Scan directory does not exist: {}",
                self.scan.directory.display()
            )));
        }

        if !self.scan.directory.is_dir() {
            return Err(TextSeekError::Config(format!(
                "Scan path is not a directory: {}",
                self.scan.directory.display()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
