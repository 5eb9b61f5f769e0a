//! Per-slot file operations: open, lock, unlock.

use crate::error::{Result, SectionError};
use fs2::FileExt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;

/// Open a slot file read/write, creating it (and its directory) if missing.
///
/// The file is never truncated or written; its content stays empty.
pub(super) fn open_slot(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|source| SectionError::Environment {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|source| SectionError::Environment {
            path: path.to_path_buf(),
            source,
        })
}

/// Try to take an exclusive advisory lock without blocking.
///
/// Returns `Ok(false)` when another holder owns the lock.
pub(super) fn try_lock(file: &File, path: &Path) -> Result<bool> {
    match FileExt::try_lock_exclusive(file) {
        Ok(()) => Ok(true),
        Err(e) if is_contended(&e) => Ok(false),
        Err(source) => Err(SectionError::Environment {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Release the advisory lock held through `file`.
pub(super) fn unlock(file: &File) -> io::Result<()> {
    FileExt::unlock(file)
}

fn is_contended(err: &io::Error) -> bool {
    let contended = fs2::lock_contended_error();
    err.kind() == io::ErrorKind::WouldBlock
        || (err.raw_os_error().is_some() && err.raw_os_error() == contended.raw_os_error())
}
