//! Materializing a named destination directory (mkdir -p semantics).

use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use crate::errors::{FlattenError, FlattenResult};

use super::entry::{Destination, PathEntry};

/// Create `name` (and any missing parents) and return it as a Destination.
/// Relative names are resolved against `working_dir`; `..` segments are kept
/// and left to the OS.
pub fn ensure_destination(name: &str, working_dir: &Path) -> FlattenResult<Destination> {
    let path = working_dir.join(name.trim());

    fs::create_dir_all(&path).map_err(|source| FlattenError::Create {
        path: path.clone(),
        source,
    })?;
    debug!(path = %path.display(), "mkdir -p");

    let entry = PathEntry::stat(&path)?;
    let dest = Destination::from_entry(entry).ok_or_else(|| FlattenError::Create {
        path: path.clone(),
        source: io::Error::from(io::ErrorKind::NotADirectory),
    })?;
    info!(dest = %dest.path().display(), "Destination ready");
    Ok(dest)
}
