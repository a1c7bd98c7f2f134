//! Resolving the destination and the set of sources.
//! - Every selection is statted up front; one failure aborts with no result.
//! - A supplied destination makes every other selection a source.
//! - Otherwise the first selected directory (in the given order) is promoted.
//! - A source lying inside another selected source directory is dropped; the
//!   walk of the outer one already covers it.

use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::{FlattenError, FlattenResult};

use super::entry::{Destination, PathEntry, SourceSet};

/// Stat and classify every selection, failing on the first one that cannot be.
pub fn stat_selections(selections: &[PathBuf]) -> FlattenResult<Vec<PathEntry>> {
    selections.iter().map(|p| PathEntry::stat(p)).collect()
}

/// Split `selections` into a destination and the sources to flatten into it.
pub fn resolve(
    destination: Option<Destination>,
    selections: &[PathBuf],
) -> FlattenResult<(Destination, SourceSet)> {
    resolve_entries(destination, stat_selections(selections)?)
}

/// Same as [`resolve`], over entries that were already statted.
pub fn resolve_entries(
    destination: Option<Destination>,
    entries: Vec<PathEntry>,
) -> FlattenResult<(Destination, SourceSet)> {
    let (dest, sources) = match destination {
        Some(dest) => {
            let sources: Vec<PathEntry> = entries
                .into_iter()
                .filter(|e| {
                    let same = dest.is_same(e.path());
                    if same {
                        debug!(path = %e.path().display(), "selection is the destination; not a source");
                    }
                    !same
                })
                .collect();
            (dest, sources)
        }
        None => {
            let mut dest = None;
            let mut sources = Vec::with_capacity(entries.len());
            for entry in entries {
                if dest.is_none() && entry.is_dir() {
                    dest = Destination::from_entry(entry);
                } else {
                    sources.push(entry);
                }
            }
            let dest = dest.ok_or(FlattenError::NoDestination)?;
            info!(dest = %dest.path().display(), "Promoted first selected directory to destination");
            (dest, sources)
        }
    };

    Ok((dest, SourceSet::new(drop_nested(sources))))
}

fn drop_nested(sources: Vec<PathEntry>) -> Vec<PathEntry> {
    let dirs: Vec<PathBuf> = sources
        .iter()
        .filter(|e| e.is_dir())
        .map(|e| e.path().to_path_buf())
        .collect();
    let covered = |path: &Path| dirs.iter().any(|d| d != path && path.starts_with(d));
    sources
        .into_iter()
        .filter(|e| {
            let inner = covered(e.path());
            if inner {
                debug!(path = %e.path().display(), "inside another selected source; walked from there");
            }
            !inner
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_ops::entry::EntryKind;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn first_directory_becomes_destination() {
        let td = tempdir().unwrap();
        let f = td.path().join("a.txt");
        let d1 = td.path().join("b");
        let d2 = td.path().join("c");
        fs::write(&f, b"a").unwrap();
        fs::create_dir(&d1).unwrap();
        fs::create_dir(&d2).unwrap();

        let (dest, sources) = resolve(None, &[f.clone(), d1.clone(), d2.clone()]).unwrap();
        assert_eq!(dest.path(), d1);
        let paths: Vec<_> = sources.iter().map(|e| e.path().to_path_buf()).collect();
        assert_eq!(paths, vec![f, d2]);
    }

    #[test]
    fn files_only_without_destination_fails() {
        let td = tempdir().unwrap();
        let a = td.path().join("a");
        let b = td.path().join("b");
        fs::write(&a, b"a").unwrap();
        fs::write(&b, b"b").unwrap();
        let err = resolve(None, &[a, b]).unwrap_err();
        assert!(matches!(err, FlattenError::NoDestination));
    }

    #[test]
    fn supplied_destination_takes_every_selection() {
        let td = tempdir().unwrap();
        let out = td.path().join("out");
        let d = td.path().join("d");
        fs::create_dir(&out).unwrap();
        fs::create_dir(&d).unwrap();
        let dest = Destination::from_entry(PathEntry::new(&out, EntryKind::Directory)).unwrap();

        let (dest, sources) = resolve(Some(dest), &[d.clone(), out.clone()]).unwrap();
        assert_eq!(dest.path(), out);
        assert_eq!(sources.len(), 1, "destination must not be a source");
        assert_eq!(sources.iter().next().unwrap().path(), d);
    }

    #[test]
    fn selection_inside_another_source_is_dropped() {
        let td = tempdir().unwrap();
        let out = td.path().join("out");
        let s = td.path().join("s");
        let s2 = td.path().join("s2");
        fs::create_dir(&out).unwrap();
        fs::create_dir_all(s.join("sub")).unwrap();
        fs::create_dir(&s2).unwrap();
        fs::write(s.join("sub/f.txt"), b"f").unwrap();
        let dest = Destination::from_entry(PathEntry::new(&out, EntryKind::Directory)).unwrap();

        let (_, sources) = resolve(
            Some(dest),
            &[s.clone(), s.join("sub"), s.join("sub/f.txt"), s2.clone()],
        )
        .unwrap();
        let paths: Vec<_> = sources.iter().map(|e| e.path().to_path_buf()).collect();
        assert_eq!(paths, vec![s, s2], "s2 only shares a name prefix with s");
    }

    #[test]
    fn stat_failure_aborts() {
        let td = tempdir().unwrap();
        let d = td.path().join("d");
        fs::create_dir(&d).unwrap();
        let err = resolve(None, &[d, td.path().join("missing")]).unwrap_err();
        assert!(matches!(err, FlattenError::Stat { .. }));
    }
}
