//! Collaborators a flatten run calls into.
//!
//! The walk never reaches for UI state on its own: selections, the
//! destination prompt, user notifications and clearing the selection are all
//! passed in through these traits (see [`crate::operation::FlattenContext`]).

use std::path::PathBuf;

use crate::errors::FlattenResult;

mod notify;
mod prompt;
mod selection;

pub use notify::ConsoleNotifier;
pub use prompt::{ConsolePrompt, FixedPrompt};
pub use selection::{ArgSelection, FileSelection};

/// How loudly a message is surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Supplies the currently selected paths, sorted by path.
pub trait SelectionSource {
    fn selections(&self) -> FlattenResult<Vec<PathBuf>>;
}

/// Answer from the destination prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptReply {
    /// Create (if needed) and use this directory.
    Name(String),
    /// Promote the first selected directory.
    FromSelection,
    /// Stop before touching the filesystem.
    Abort,
}

pub trait DestinationPrompt {
    fn ask(&self) -> PromptReply;
}

/// One-way message sink; implementations swallow their own failures.
pub trait Notifier {
    fn notify(&self, severity: Severity, message: &str);
}

/// Clears the host's selection after a fully successful run.
pub trait SelectionClear {
    fn clear(&self);
}

/// Sort by path string and drop duplicates.
pub(crate) fn sort_selection(mut paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    paths.dedup();
    paths
}
