use std::path::{Path, PathBuf};

use crate::error::{Result, TextSeekError};

/// Resolve a matched file path to its absolute, normalized form for output.
///
/// Symlinks and `.`/`..` components are resolved. On Windows, `dunce` keeps
/// the familiar drive-letter form instead of a `\\?\` verbatim path.
///
/// # Errors
/// Returns an error wrapping the file path if resolution fails (e.g., the
/// file was deleted between scan and output).
pub fn canonical_path(path: &Path) -> Result<PathBuf> {
    dunce::canonicalize(path).map_err(|e| TextSeekError::Search {
        path: path.to_path_buf(),
        source: e,
    })
}
