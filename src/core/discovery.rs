//! Recursive input discovery for batch runs.
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Extension without a leading dot, so both "las" and ".las" work.
fn normalize_extension(extension: &str) -> &str {
    extension.strip_prefix('.').unwrap_or(extension)
}

/// True when the file name's extension equals `extension` exactly (case-sensitive).
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == normalize_extension(extension))
}

/// Every regular file under `root` (any depth) with the given extension, sorted by path.
/// Symlinked files are included; symlinked directories are not descended into.
pub fn discover_files(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::InputDirNotFound(root.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|e| e.file_type().is_file() || (e.path_is_symlink() && e.path().is_file()))
        .map(|e| e.into_path())
        .filter(|p| has_extension(p, extension))
        .collect();

    files.sort();
    debug!("Discovered {} *.{} files under {:?}", files.len(), normalize_extension(extension), root);
    Ok(files)
}
