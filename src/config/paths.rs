//! Default path helpers and symlink checks.
//! Determines OS-appropriate config/log paths and detects symlinked ancestors for safety.

use dirs::{config_dir, data_dir};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FLATTEN_MOVE_CONFIG";

/// Config path: `$FLATTEN_MOVE_CONFIG` if set, else the OS config dir.
pub fn default_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(p));
    }
    if let Some(mut base) = config_dir() {
        base.push("flatten_move");
        base.push("config.xml");
        Some(base)
    } else {
        env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".config")
                .join("flatten_move")
                .join("config.xml")
        })
    }
}

/// OS-appropriate default log file path (data dir).
pub fn default_log_path() -> Option<PathBuf> {
    if let Some(mut base) = data_dir() {
        base.push("flatten_move");
        base.push("flatten_move.log");
        Some(base)
    } else {
        env::var("HOME").ok().map(|h| {
            PathBuf::from(h)
                .join(".local")
                .join("share")
                .join("flatten_move")
                .join("flatten_move.log")
        })
    }
}

/// Return true if any existing ancestor of `path` is a symlink.
pub fn path_has_symlink_ancestor(path: &Path) -> io::Result<bool> {
    let mut p = path.parent();
    while let Some(anc) = p {
        if anc.exists() {
            let meta = fs::symlink_metadata(anc)?;
            if meta.file_type().is_symlink() {
                return Ok(true);
            }
        }
        p = anc.parent();
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    #[serial]
    fn env_override_wins() {
        unsafe {
            env::set_var(CONFIG_ENV, "/tmp/custom/flatten.xml");
        }
        assert_eq!(
            default_config_path(),
            Some(PathBuf::from("/tmp/custom/flatten.xml"))
        );
        unsafe {
            env::remove_var(CONFIG_ENV);
        }
    }

    #[test]
    fn plain_tree_has_no_symlink_ancestor() {
        let td = tempdir().unwrap();
        let p = td.path().join("a/b/log.txt");
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        // The tempdir root itself may sit under a symlink (macOS /var), so only
        // assert on a path built from a canonical root.
        let root = dunce::canonicalize(td.path()).unwrap();
        assert!(!path_has_symlink_ancestor(&root.join("a/b/log.txt")).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_parent_is_detected() {
        let td = tempdir().unwrap();
        let root = dunce::canonicalize(td.path()).unwrap();
        fs::create_dir(root.join("real")).unwrap();
        std::os::unix::fs::symlink(root.join("real"), root.join("link")).unwrap();
        assert!(path_has_symlink_ancestor(&root.join("link/log.txt")).unwrap());
    }
}
