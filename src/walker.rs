//! Recursive enumeration of template files.
//! Returns file paths relative to the template root; directory entries are
//! never included since they are created on demand while writing.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists every regular file under `root`, relative to `root`.
///
/// The order is directory-traversal order as reported by the filesystem.
/// Any unreadable directory aborts the whole enumeration; no partial result
/// is returned.
pub fn walk_template_dir<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        files.push(relative.to_path_buf());
    }

    Ok(files)
}
