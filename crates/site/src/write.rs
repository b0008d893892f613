//! Writing generated documents to disk.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Writes `contents` to `path`, creating parent directories as needed.
///
/// Existing files are overwritten in place.
///
/// # Errors
///
/// Returns [`Error::Write`] if a directory cannot be created or the file
/// cannot be written.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, contents).map_err(write_err)
}
