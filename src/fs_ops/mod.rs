//! Filesystem operations behind a flatten run.

mod cleanup;
mod entry;
mod flatten;
mod helpers;
mod materialize;
mod noclobber;
mod resolve;

pub use cleanup::remove_if_empty;
pub use entry::{Destination, EntryKind, PathEntry, SourceSet};
pub use flatten::{flatten, flatten_all, FlattenOptions, FlattenReport};
pub use helpers::io_hint;
pub use materialize::ensure_destination;
pub use noclobber::{move_no_clobber, MoveOutcome};
pub use resolve::{resolve, resolve_entries, stat_selections};
