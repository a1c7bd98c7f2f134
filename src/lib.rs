//! Core library for `flatten_move`.
//!
//! Collapses selected directory trees into one destination directory:
//! resolve a destination, walk each source depth-first, move every leaf with a
//! non-clobbering rename and remove the directories that end up empty.
//! Host concerns (selection, prompting, notifications) come in through the
//! traits in [`host`] so the walk itself only touches the filesystem.

pub mod cli;
pub mod config;
pub mod errors;
pub mod fs_ops;
pub mod host;
pub mod operation;
pub mod output;
pub mod platform;
pub mod shutdown;

pub use config::{default_config_path, default_log_path, path_has_symlink_ancestor};
pub use config::{load_config_from_xml_path, Config, LogLevel, MAX_DEPTH_DEFAULT};
pub use errors::{FlattenError, FlattenResult};
pub use fs_ops::{
    ensure_destination, flatten, flatten_all, remove_if_empty, resolve, resolve_entries,
    stat_selections, Destination, EntryKind, FlattenReport, PathEntry, SourceSet,
};
pub use host::{DestinationPrompt, Notifier, PromptReply, SelectionClear, SelectionSource, Severity};
pub use operation::{run_flatten, FlattenContext, Outcome};

/// Convenience re-exports for callers and tests.
pub mod prelude {
    pub use crate::config::{default_config_path, Config, LogLevel};
    pub use crate::errors::{FlattenError, FlattenResult};
    pub use crate::fs_ops::{
        ensure_destination, flatten, flatten_all, remove_if_empty, resolve, Destination,
        FlattenReport, PathEntry, SourceSet,
    };
    pub use crate::host::{
        DestinationPrompt, Notifier, PromptReply, SelectionClear, SelectionSource, Severity,
    };
    pub use crate::operation::{run_flatten, FlattenContext, Outcome};
    pub use crate::shutdown::request as request_shutdown;
}
