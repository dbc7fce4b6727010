use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};
use indexmap::IndexSet;

use crate::error::{Result, TextSeekError};

pub trait FileFilter {
    fn should_include(&self, path: &Path) -> bool;
}

/// Includes files whose name ends with one of the allowed suffixes and does
/// not match any exclude pattern.
///
/// Suffix matching is case-insensitive and not dot-aware: a suffix of
/// `"txt"` matches both `report.txt` and `reporttxt`. Suffixes are trimmed,
/// lowercased and deduplicated once at construction; an empty suffix set
/// matches nothing.
#[derive(Debug)]
pub struct ExtensionFilter {
    suffixes: IndexSet<String>,
    exclude_patterns: GlobSet,
}

impl ExtensionFilter {
    /// Create a new filter with the given suffixes and exclude patterns.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new<I, S>(extensions: I, exclude_patterns: &[String]) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let suffixes = extensions
            .into_iter()
            .filter_map(|ext| {
                let trimmed = ext.as_ref().trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_lowercase())
                }
            })
            .collect();

        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| TextSeekError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| TextSeekError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            suffixes,
            exclude_patterns,
        })
    }

    fn has_allowed_suffix(&self, path: &Path) -> bool {
        let Some(name) = path.file_name() else {
            return false;
        };
        let name = name.to_string_lossy().to_lowercase();
        self.suffixes.iter().any(|suffix| name.ends_with(suffix))
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl FileFilter for ExtensionFilter {
    fn should_include(&self, path: &Path) -> bool {
        self.has_allowed_suffix(path) && !self.is_excluded(path)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
