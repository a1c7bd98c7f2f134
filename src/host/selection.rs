//! Selection sources for the command line.
//! Both sources hand back every listed path, sorted and deduplicated; paths
//! that have since vanished are reported and dropped by the run itself.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::errors::{FlattenError, FlattenResult};

use super::{SelectionClear, SelectionSource, sort_selection};

/// Paths given as command-line arguments.
#[derive(Debug, Clone, Default)]
pub struct ArgSelection {
    paths: Vec<PathBuf>,
}

impl ArgSelection {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl SelectionSource for ArgSelection {
    fn selections(&self) -> FlattenResult<Vec<PathBuf>> {
        Ok(sort_selection(self.paths.clone()))
    }
}

impl SelectionClear for ArgSelection {
    fn clear(&self) {
        debug!("selection came from arguments; nothing to clear");
    }
}

/// A selection file: one path per line, blank lines and `#` comments ignored.
/// Relative lines are taken relative to the file's directory. Clearing
/// truncates the file.
#[derive(Debug, Clone)]
pub struct FileSelection {
    path: PathBuf,
}

impl FileSelection {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SelectionSource for FileSelection {
    fn selections(&self) -> FlattenResult<Vec<PathBuf>> {
        let contents = fs::read_to_string(&self.path).map_err(|source| FlattenError::Selection {
            path: self.path.clone(),
            source,
        })?;
        let base = self.path.parent().unwrap_or_else(|| Path::new("."));
        let lines = contents
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(|l| base.join(l));
        Ok(sort_selection(lines.collect()))
    }
}

impl SelectionClear for FileSelection {
    fn clear(&self) {
        if let Err(e) = fs::write(&self.path, b"") {
            warn!(path = %self.path.display(), error = %e, "could not clear selection file");
        }
    }
}
