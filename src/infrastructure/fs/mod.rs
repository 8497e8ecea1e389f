//! File writes
//!
//! Atomic writes via tempfile + rename in the target directory.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{BuildError, BuildResult};

/// Write `content` to `path` atomically, creating parent directories.
pub fn atomic_write(path: &Path, content: &[u8]) -> BuildResult<()> {
    let tmp = staged(path, content)?;
    tmp.persist(path).map_err(|e| BuildError::Io(e.error))?;
    Ok(())
}

/// Like `atomic_write`, but refuses to replace an existing file unless `force`.
///
/// Without `force` the final rename itself refuses to clobber, so a file
/// created after the call started is never overwritten.
pub fn write_new(path: &Path, content: &[u8], force: bool) -> BuildResult<()> {
    if force {
        return atomic_write(path, content);
    }

    let tmp = staged(path, content)?;
    tmp.persist_noclobber(path).map_err(|e| {
        if e.error.kind() == std::io::ErrorKind::AlreadyExists {
            BuildError::AlreadyExists {
                path: path.to_path_buf(),
            }
        } else {
            BuildError::Io(e.error)
        }
    })?;
    Ok(())
}

/// Temp file next to `path` holding `content`, synced to disk.
fn staged(path: &Path, content: &[u8]) -> BuildResult<NamedTempFile> {
    let parent = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            std::fs::create_dir_all(parent)?;
            parent
        }
        None => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    Ok(tmp)
}
