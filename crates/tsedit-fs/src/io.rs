//! File I/O with path-aware errors and locked atomic writes

use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Read the full contents of a file.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|e| Error::io(path, e))
}

/// Write content atomically to a file with locking.
///
/// The content goes to a hidden sibling of `path` which is then renamed over
/// the target, so a reader never observes a half-written configuration file.
/// If any step fails the sibling is removed again.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    let temp_path = staging_path(path);
    let written = write_locked(&temp_path, path, content)
        .and_then(|()| fs::rename(&temp_path, path).map_err(|e| Error::io(path, e)));

    if written.is_err() && temp_path.exists() {
        if let Err(e) = fs::remove_file(&temp_path) {
            tracing::warn!(path = %temp_path.display(), error = %e, "Could not remove staging file");
        }
    }
    written
}

/// Hidden sibling of `path` used while writing it.
fn staging_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    path.with_file_name(format!(".{file_name}.{}.tmp", std::process::id()))
}

fn write_locked(temp_path: &Path, target: &Path, content: &[u8]) -> Result<()> {
    let lock_failed = || Error::LockFailed {
        path: target.to_path_buf(),
    };

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(temp_path)
        .map_err(|e| Error::io(temp_path, e))?;

    file.lock_exclusive().map_err(|_| lock_failed())?;
    file.write_all(content).map_err(|e| Error::io(temp_path, e))?;
    file.sync_all().map_err(|e| Error::io(temp_path, e))?;
    file.unlock().map_err(|_| lock_failed())
}
