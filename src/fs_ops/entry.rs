//! Snapshot types for one flatten run: PathEntry, Destination and SourceSet.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{FlattenError, FlattenResult};

/// What a path was when it was statted. Symlinks and special files count as
/// `File`: they are moved as-is and never descended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// A path plus the kind observed at stat time. Not re-validated later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry {
    path: PathBuf,
    kind: EntryKind,
}

impl PathEntry {
    pub fn new(path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Stat `path` without following a trailing symlink.
    pub fn stat(path: &Path) -> FlattenResult<Self> {
        let meta = fs::symlink_metadata(path).map_err(|source| FlattenError::Stat {
            path: path.to_path_buf(),
            source,
        })?;
        let kind = if meta.file_type().is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        Ok(Self::new(path, kind))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// The single directory every leaf is moved into.
#[derive(Debug, Clone)]
pub struct Destination {
    entry: PathEntry,
    canonical: PathBuf,
}

impl Destination {
    /// Wrap a directory entry; returns None for non-directories.
    pub fn from_entry(entry: PathEntry) -> Option<Self> {
        if !entry.is_dir() {
            return None;
        }
        let canonical = dunce::canonicalize(entry.path()).unwrap_or_else(|_| entry.path().to_path_buf());
        Some(Self { entry, canonical })
    }

    pub fn path(&self) -> &Path {
        self.entry.path()
    }

    /// True if `path` resolves to this destination directory.
    pub fn is_same(&self, path: &Path) -> bool {
        if path == self.entry.path() {
            return true;
        }
        dunce::canonicalize(path)
            .map(|p| p == self.canonical)
            .unwrap_or(false)
    }
}

/// Top-level entries to flatten, ordered by path.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    entries: Vec<PathEntry>,
}

impl SourceSet {
    pub fn new(mut entries: Vec<PathEntry>) -> Self {
        entries.sort_by(|a, b| a.path().as_os_str().cmp(b.path().as_os_str()));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a SourceSet {
    type Item = &'a PathEntry;
    type IntoIter = std::slice::Iter<'a, PathEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn stat_classifies_files_and_dirs() {
        let td = tempdir().unwrap();
        let f = td.path().join("f.txt");
        fs::write(&f, b"x").unwrap();
        assert_eq!(PathEntry::stat(&f).unwrap().kind(), EntryKind::File);
        assert_eq!(PathEntry::stat(td.path()).unwrap().kind(), EntryKind::Directory);
    }

    #[test]
    fn stat_missing_is_stat_error() {
        let td = tempdir().unwrap();
        let err = PathEntry::stat(&td.path().join("gone")).unwrap_err();
        assert!(matches!(err, FlattenError::Stat { .. }));
    }

    #[test]
    fn destination_rejects_files() {
        let entry = PathEntry::new("/tmp/f.txt", EntryKind::File);
        assert!(Destination::from_entry(entry).is_none());
    }

    #[test]
    fn source_set_sorts_by_path() {
        let set = SourceSet::new(vec![
            PathEntry::new("/b", EntryKind::File),
            PathEntry::new("/a/z", EntryKind::Directory),
            PathEntry::new("/a", EntryKind::File),
        ]);
        let paths: Vec<_> = set.iter().map(|e| e.path().to_path_buf()).collect();
        assert_eq!(
            paths,
            vec![PathBuf::from("/a"), PathBuf::from("/a/z"), PathBuf::from("/b")]
        );
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_dir_is_a_leaf() {
        let td = tempdir().unwrap();
        let real = td.path().join("real");
        fs::create_dir(&real).unwrap();
        let link = td.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();
        assert_eq!(PathEntry::stat(&link).unwrap().kind(), EntryKind::File);
    }
}
