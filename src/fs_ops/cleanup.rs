//! Removing a source directory once its contents have been moved out.

use std::fs;
use std::io;
use tracing::{debug, info};

use crate::errors::{FlattenError, FlattenResult};

use super::entry::PathEntry;

fn is_not_empty(e: &io::Error) -> bool {
    if e.kind() == io::ErrorKind::DirectoryNotEmpty {
        return true;
    }
    // Some Unix flavours report a non-empty rmdir as EEXIST.
    #[cfg(unix)]
    if matches!(e.raw_os_error(), Some(libc::ENOTEMPTY) | Some(libc::EEXIST)) {
        return true;
    }
    false
}

/// Remove `dir` if the filesystem agrees it is empty.
///
/// Emptiness is left to `rmdir` itself rather than checked beforehand, so a
/// directory still holding a skipped collision simply stays (`Ok(false)`).
/// Any other failure is a `Delete` error.
pub fn remove_if_empty(dir: &PathEntry) -> FlattenResult<bool> {
    match fs::remove_dir(dir.path()) {
        Ok(()) => {
            info!(path = %dir.path().display(), "Removed emptied directory");
            Ok(true)
        }
        Err(e) if is_not_empty(&e) => {
            debug!(path = %dir.path().display(), "Directory not empty; left in place");
            Ok(false)
        }
        Err(source) => Err(FlattenError::Delete {
            path: dir.path().to_path_buf(),
            source,
        }),
    }
}
