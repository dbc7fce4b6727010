mod filter;

pub use filter::{ExtensionFilter, FileFilter};

use std::path::PathBuf;

use walkdir::WalkDir;

use crate::error::{Result, TextSeekError};

/// Trait for scanning directories and finding candidate files.
pub trait FileScanner {
    /// Scan the configured root and return all matching file paths.
    ///
    /// The result is either the complete list or an error, never a
    /// truncated list.
    ///
    /// # Errors
    /// Returns an error if any part of the tree cannot be walked.
    fn scan(&self) -> Result<Vec<PathBuf>>;
}

#[derive(Debug)]
pub struct DirectoryScanner<F: FileFilter> {
    root: PathBuf,
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    /// Create a scanner rooted at `root`.
    ///
    /// # Errors
    /// Returns a configuration error if `root` does not exist or is not a
    /// directory. Both preconditions are checked here, before any walking
    /// begins.
    pub fn new(root: impl Into<PathBuf>, filter: F) -> Result<Self> {
        let root = root.into();
        if !root.exists() {
            return Err(TextSeekError::Config(format!(
                "Scan directory does not exist: {}",
                root.display()
            )));
        }
        if !root.is_dir() {
            return Err(TextSeekError::Config(format!(
                "Scan path is not a directory: {}",
                root.display()
            )));
        }
        Ok(Self { root, filter })
    }

    fn scan_impl(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        // Symlinks are not followed, so only regular files pass the
        // file_type check. A walk error aborts the scan; partial results
        // are discarded.
        for entry in WalkDir::new(&self.root) {
            let entry = entry.map_err(|e| TextSeekError::Scan {
                root: self.root.clone(),
                source: e,
            })?;
            if entry.file_type().is_file() && self.filter.should_include(entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self) -> Result<Vec<PathBuf>> {
        self.scan_impl()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
