use crate::detector::FileSet;
use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads `paths` (relative to `root`) from an extracted root filesystem.
///
/// Files that do not exist are left out of the returned set. Any other
/// failure to read a file is an error.
pub fn load_from_root<P: AsRef<Path>>(root: P, paths: &[&str]) -> Result<FileSet> {
    let root = root.as_ref();
    let mut files = FileSet::new();

    for &path in paths {
        let full = root.join(path.trim_start_matches('/'));
        match fs::read(&full) {
            Ok(content) => {
                tracing::trace!(path = %full.display(), bytes = content.len(), "read");
                files.insert(path.to_string(), content);
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %full.display(), "not found, skipping");
            }
            Err(e) => return Err(Error::io(full.display().to_string(), e)),
        }
    }
    Ok(files)
}
