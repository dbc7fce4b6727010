use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, TextSeekError};

/// Trait for testing whether a file's contents contain a search term.
pub trait ContentSearcher {
    /// Returns `true` if any line of the file contains the term.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn contains_keyword(&self, path: &Path) -> Result<bool>;
}

/// Line-oriented substring search with optional case sensitivity.
///
/// Matching is strictly intra-line: a keyword split across a line boundary
/// is not detected.
#[derive(Debug)]
pub struct KeywordSearcher {
    keyword: String,
    case_sensitive: bool,
}

impl KeywordSearcher {
    /// Create a searcher for `keyword`.
    ///
    /// The keyword is lowercased once here when the search is
    /// case-insensitive, so per-line matching never re-normalizes it.
    ///
    /// # Errors
    /// Returns an error if `keyword` is empty.
    pub fn new(keyword: &str, case_sensitive: bool) -> Result<Self> {
        if keyword.is_empty() {
            return Err(TextSeekError::EmptyKeyword);
        }
        let keyword = if case_sensitive {
            keyword.to_string()
        } else {
            keyword.to_lowercase()
        };
        Ok(Self {
            keyword,
            case_sensitive,
        })
    }

    fn line_matches(&self, line: &str) -> bool {
        if self.case_sensitive {
            line.contains(&self.keyword)
        } else {
            line.to_lowercase().contains(&self.keyword)
        }
    }

    fn search_impl(&self, path: &Path) -> std::io::Result<bool> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        for line in reader.lines() {
            if self.line_matches(&line?) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

impl ContentSearcher for KeywordSearcher {
    fn contains_keyword(&self, path: &Path) -> Result<bool> {
        self.search_impl(path).map_err(|e| TextSeekError::Search {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
