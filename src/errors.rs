//! Typed error definitions for flatten_move.
//! Every hard failure of a flatten operation maps to one variant; the io
//! variants carry the path involved plus a platform-aware hint.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::fs_ops::io_hint;

pub type FlattenResult<T> = Result<T, FlattenError>;

#[derive(Debug, Error)]
pub enum FlattenError {
    #[error("Select at least two entries to flatten (got {0})")]
    TooFewSelections(usize),

    #[error("No destination: give a destination name or select at least one directory")]
    NoDestination,

    #[error("Nothing to flatten: every selection is the destination")]
    NothingToFlatten,

    #[error("Cannot read selection from '{}': {}{}", .path.display(), .source, io_hint(.source))]
    Selection {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot stat '{}': {}{}", .path.display(), .source, io_hint(.source))]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot create destination '{}': {}{}", .path.display(), .source, io_hint(.source))]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot list directory '{}': {}{}", .path.display(), .source, io_hint(.source))]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot move '{}' -> '{}': {}{}", .src.display(), .dest.display(), .source, io_hint(.source))]
    Move {
        src: PathBuf,
        dest: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot remove directory '{}': {}{}", .path.display(), .source, io_hint(.source))]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FlattenError {
    /// Stable short identifier, used as a structured log field.
    pub fn code(&self) -> &'static str {
        match self {
            FlattenError::TooFewSelections(_) => "too_few_selections",
            FlattenError::NoDestination => "no_destination",
            FlattenError::NothingToFlatten => "nothing_to_flatten",
            FlattenError::Selection { .. } => "selection_failed",
            FlattenError::Stat { .. } => "stat_failed",
            FlattenError::Create { .. } => "create_failed",
            FlattenError::ReadDir { .. } => "read_dir_failed",
            FlattenError::Move { .. } => "move_failed",
            FlattenError::Delete { .. } => "delete_failed",
        }
    }

    /// User-input problems are reported as warnings rather than errors.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            FlattenError::TooFewSelections(_)
                | FlattenError::NoDestination
                | FlattenError::NothingToFlatten
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_input_kinds_are_warnings() {
        assert!(FlattenError::TooFewSelections(1).is_user_input());
        assert!(FlattenError::NoDestination.is_user_input());
        assert!(FlattenError::NothingToFlatten.is_user_input());
        let e = FlattenError::Stat {
            path: PathBuf::from("/nope"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(!e.is_user_input());
        assert_eq!(e.code(), "stat_failed");
    }

    #[test]
    fn display_includes_path_and_hint() {
        let e = FlattenError::Delete {
            path: PathBuf::from("/srv/dir"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        let msg = e.to_string();
        assert!(msg.contains("/srv/dir"), "{msg}");
        assert!(msg.contains("permission denied"), "{msg}");
    }
}
