//! I/O error hints.
//!
//! Turns an io::Error into a short, actionable suffix for user-facing messages.
//! Raw OS codes are checked first (platform-specific), then the ErrorKind.
//!
//! Usage:
//!   format!("cannot move '{}': {}{}", p.display(), e, io_hint(&e))

use std::io;

#[cfg(unix)]
use libc;

/// Hint for a raw OS error code, if one is known.
fn os_hint(code: i32) -> Option<&'static str> {
    #[cfg(unix)]
    {
        match code {
            libc::EACCES | libc::EPERM => {
                Some("permission denied; check ownership and write permissions")
            }
            libc::EXDEV => Some("cross-filesystem; flatten only within one filesystem"),
            libc::EBUSY => Some("resource busy; ensure no other process is using it"),
            libc::ENOENT => Some("path not found; it may have been moved or deleted"),
            libc::EEXIST => Some("already exists"),
            libc::ENOTEMPTY => Some("directory not empty"),
            libc::ENOSPC => Some("insufficient space on device"),
            libc::EROFS => Some("read-only filesystem; cannot write here"),
            libc::ELOOP => Some("too many symbolic link levels; possible symlink cycle"),
            libc::ENAMETOOLONG => Some("filename or path too long; shorten path segments"),
            libc::EMFILE | libc::ENFILE => Some("too many open files; close files or raise limits"),
            _ => None,
        }
    }
    #[cfg(windows)]
    {
        match code {
            5 => Some("access denied; check permissions"), // ERROR_ACCESS_DENIED
            17 => Some("not same device; flatten only within one volume"), // ERROR_NOT_SAME_DEVICE
            32 => Some("sharing violation; file is in use"), // ERROR_SHARING_VIOLATION
            2 | 3 => Some("path not found; it may have been moved or deleted"),
            80 | 183 => Some("already exists"), // ERROR_FILE_EXISTS / ERROR_ALREADY_EXISTS
            145 => Some("directory not empty"), // ERROR_DIR_NOT_EMPTY
            112 => Some("insufficient disk space"), // ERROR_DISK_FULL
            19 => Some("write protected / read-only media"), // ERROR_WRITE_PROTECT
            206 => Some("filename or path too long"), // ERROR_FILENAME_EXCED_RANGE
            _ => None,
        }
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = code;
        None
    }
}

/// Hint derived from the error kind when there is no OS code.
fn kind_hint(kind: io::ErrorKind) -> Option<&'static str> {
    match kind {
        io::ErrorKind::PermissionDenied => {
            Some("permission denied; check ownership and write permissions")
        }
        io::ErrorKind::NotFound => Some("path not found; it may have been moved or deleted"),
        io::ErrorKind::AlreadyExists => Some("already exists"),
        io::ErrorKind::DirectoryNotEmpty => Some("directory not empty"),
        io::ErrorKind::NotADirectory => Some("a non-directory is in the way"),
        _ => None,
    }
}

/// Suffix (leading "; ") describing `e`, or an empty string when nothing
/// useful can be added.
pub fn io_hint(e: &io::Error) -> String {
    match e.raw_os_error() {
        Some(code) => match os_hint(code) {
            Some(h) => format!("; {h} [os code: {code}]"),
            None => format!(" [os code: {code}]"),
        },
        None => kind_hint(e.kind())
            .map(|h| format!("; {h}"))
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_only_errors_get_kind_hint() {
        let e = io::Error::from(io::ErrorKind::NotFound);
        assert!(io_hint(&e).contains("path not found"));
    }

    #[test]
    fn unknown_kind_is_empty() {
        let e = io::Error::other("boom");
        assert_eq!(io_hint(&e), "");
    }

    #[cfg(unix)]
    #[test]
    fn raw_code_includes_os_code() {
        let e = io::Error::from_raw_os_error(libc::EXDEV);
        let h = io_hint(&e);
        assert!(h.contains("cross-filesystem"), "{h}");
        assert!(h.contains(&format!("[os code: {}]", libc::EXDEV)), "{h}");
    }
}
