//! The flatten walk.
//! Depth-first: every leaf is moved into the destination with a non-clobbering
//! rename, and each directory is offered to cleanup once all of its children
//! have been handled. The first hard failure stops the whole walk; nothing
//! already moved is rolled back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

use crate::config::MAX_DEPTH_DEFAULT;
use crate::errors::{FlattenError, FlattenResult};

use super::cleanup::remove_if_empty;
use super::entry::{Destination, EntryKind, PathEntry, SourceSet};
use super::noclobber::{move_no_clobber, MoveOutcome};

/// Knobs for one walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlattenOptions {
    /// Deepest level still processed; entries below it are left alone.
    pub max_depth: usize,
    /// Log what would happen without touching the filesystem.
    pub dry_run: bool,
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            max_depth: MAX_DEPTH_DEFAULT,
            dry_run: false,
        }
    }
}

/// What a completed walk did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlattenReport {
    /// Leaves moved into the destination.
    pub moved: usize,
    /// Leaves left in place because the destination already had that name.
    pub collisions: Vec<PathBuf>,
    /// Source directories removed after being emptied.
    pub removed_dirs: usize,
    /// Source directories kept because something was left inside.
    pub kept_dirs: Vec<PathBuf>,
    /// Entries not descended into because of the depth bound.
    pub truncated: Vec<PathBuf>,
}

/// Flatten every source into `dest`, in SourceSet order.
pub fn flatten_all(
    dest: &Destination,
    sources: &SourceSet,
    opts: FlattenOptions,
) -> FlattenResult<FlattenReport> {
    let mut report = FlattenReport::default();
    for source in sources {
        flatten(dest, source, 0, opts, &mut report)?;
    }
    info!(
        dest = %dest.path().display(),
        moved = report.moved,
        collisions = report.collisions.len(),
        removed_dirs = report.removed_dirs,
        truncated = report.truncated.len(),
        "Flatten finished"
    );
    Ok(report)
}

/// Flatten one entry found at `depth` below its top-level source.
pub fn flatten(
    dest: &Destination,
    source: &PathEntry,
    depth: usize,
    opts: FlattenOptions,
    report: &mut FlattenReport,
) -> FlattenResult<()> {
    if depth > opts.max_depth {
        error!(
            path = %source.path().display(),
            depth,
            max_depth = opts.max_depth,
            "Maximum depth exceeded; branch left unflattened"
        );
        report.truncated.push(source.path().to_path_buf());
        return Ok(());
    }

    match source.kind() {
        EntryKind::File => move_leaf(dest, source.path(), opts, report),
        EntryKind::Directory => {
            if dest.is_same(source.path()) {
                debug!(path = %source.path().display(), "skipping destination inside a source");
                return Ok(());
            }
            for child in list_children(source.path())? {
                flatten(dest, &child, depth + 1, opts, report)?;
            }
            cleanup(source, opts, report)
        }
    }
}

/// Immediate children in the order the filesystem returns them.
/// Collected up front so the directory is not mutated while being read.
fn list_children(dir: &Path) -> FlattenResult<Vec<PathEntry>> {
    let read_dir_err = |source: io::Error| FlattenError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut children = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let kind = if entry.file_type().map_err(read_dir_err)?.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        children.push(PathEntry::new(entry.path(), kind));
    }
    Ok(children)
}

fn move_leaf(
    dest: &Destination,
    src: &Path,
    opts: FlattenOptions,
    report: &mut FlattenReport,
) -> FlattenResult<()> {
    let name = src.file_name().ok_or_else(|| FlattenError::Move {
        src: src.to_path_buf(),
        dest: dest.path().to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidInput, "source has no file name"),
    })?;
    let target = dest.path().join(name);

    if opts.dry_run {
        if target.symlink_metadata().is_ok() {
            info!(src = %src.display(), dest = %target.display(), "dry-run: name taken, would skip");
            report.collisions.push(src.to_path_buf());
        } else {
            info!(src = %src.display(), dest = %target.display(), "dry-run: would move");
            report.moved += 1;
        }
        return Ok(());
    }

    match move_no_clobber(src, &target) {
        Ok(MoveOutcome::Moved) => {
            debug!(src = %src.display(), dest = %target.display(), "Moved");
            report.moved += 1;
            Ok(())
        }
        Ok(MoveOutcome::Collision) => {
            debug!(src = %src.display(), dest = %target.display(), "Name taken in destination; skipped");
            report.collisions.push(src.to_path_buf());
            Ok(())
        }
        Err(source) => Err(FlattenError::Move {
            src: src.to_path_buf(),
            dest: target,
            source,
        }),
    }
}

fn cleanup(dir: &PathEntry, opts: FlattenOptions, report: &mut FlattenReport) -> FlattenResult<()> {
    if opts.dry_run {
        info!(path = %dir.path().display(), "dry-run: would remove if empty");
        return Ok(());
    }
    if remove_if_empty(dir)? {
        report.removed_dirs += 1;
    } else {
        report.kept_dirs.push(dir.path().to_path_buf());
    }
    Ok(())
}
