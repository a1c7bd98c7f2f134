//! Non-clobbering move of a single leaf into the destination.
//! An existing same-named target is a collision, not an error: the source stays put.

use std::io;
use std::path::Path;

use crate::platform::rename_noreplace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved,
    Collision,
}

/// Move `src` to `dst` unless `dst` already exists.
pub fn move_no_clobber(src: &Path, dst: &Path) -> io::Result<MoveOutcome> {
    match rename_noreplace(src, dst) {
        Ok(()) => {
            // Persist the new directory entry; a failed fsync does not undo the rename.
            if let Some(parent) = dst.parent() {
                let _ = fsync_dir(parent);
            }
            Ok(MoveOutcome::Moved)
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(MoveOutcome::Collision),
        Err(e) => Err(e),
    }
}

#[cfg(unix)]
fn fsync_dir(dir: &Path) -> io::Result<()> {
    std::fs::File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn fsync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn collision_leaves_both_files() {
        let td = tempdir().unwrap();
        let src = td.path().join("x.txt");
        let dst = td.path().join("out_x.txt");
        fs::write(&src, "src").unwrap();
        fs::write(&dst, "dst").unwrap();
        assert_eq!(move_no_clobber(&src, &dst).unwrap(), MoveOutcome::Collision);
        assert_eq!(fs::read_to_string(&src).unwrap(), "src");
        assert_eq!(fs::read_to_string(&dst).unwrap(), "dst");
    }

    #[test]
    fn missing_source_is_an_error() {
        let td = tempdir().unwrap();
        let err = move_no_clobber(&td.path().join("nope"), &td.path().join("dst")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
