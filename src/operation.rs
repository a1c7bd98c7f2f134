//! One flatten run, end to end.
//!
//! selection -> drop vanished paths -> (>= 2 check) -> prompt -> stat
//! -> materialize (named destination only) -> resolve -> walk -> summary
//! -> clear selection.
//!
//! User-input problems come back as `Outcome::Rejected` after a warning;
//! hard failures are reported as errors and returned as `Err`. Neither path
//! clears the selection.

use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::errors::{FlattenError, FlattenResult};
use crate::fs_ops::{
    ensure_destination, flatten_all, resolve_entries, stat_selections, Destination, EntryKind,
    FlattenOptions, FlattenReport, PathEntry,
};
use crate::host::{
    DestinationPrompt, Notifier, PromptReply, SelectionClear, SelectionSource, Severity,
};

/// Everything a run needs from its host.
pub struct FlattenContext<'a> {
    pub selection: &'a dyn SelectionSource,
    pub prompt: &'a dyn DestinationPrompt,
    pub notifier: &'a dyn Notifier,
    pub clear: &'a dyn SelectionClear,
    /// Base for relative destination names.
    pub working_dir: PathBuf,
    pub options: FlattenOptions,
}

#[derive(Debug)]
pub enum Outcome {
    /// The walk ran to completion.
    Completed(FlattenReport),
    /// The prompt was aborted; nothing was touched.
    Aborted,
    /// Rejected as a user-input problem; nothing was touched.
    Rejected(FlattenError),
}

/// Run a flatten against the given host collaborators.
pub fn run_flatten(ctx: &FlattenContext<'_>) -> FlattenResult<Outcome> {
    let selections = ctx.selection.selections().map_err(|e| fail(ctx, e))?;
    let selections = drop_missing(ctx, selections);
    if selections.len() < 2 {
        return Ok(reject(ctx, FlattenError::TooFewSelections(selections.len())));
    }

    let name = match ctx.prompt.ask() {
        PromptReply::Abort => {
            info!("Destination prompt aborted; nothing changed");
            return Ok(Outcome::Aborted);
        }
        PromptReply::FromSelection => None,
        PromptReply::Name(name) => Some(name),
    };

    // Stat before materializing so a bad selection leaves no new directory.
    let entries = stat_selections(&selections).map_err(|e| fail(ctx, e))?;
    let destination = match name {
        Some(name) => Some(named_destination(ctx, &name)?),
        None => None,
    };

    let (dest, sources) = match resolve_entries(destination, entries) {
        Ok(v) => v,
        Err(e) if e.is_user_input() => return Ok(reject(ctx, e)),
        Err(e) => return Err(fail(ctx, e)),
    };
    if sources.is_empty() {
        return Ok(reject(ctx, FlattenError::NothingToFlatten));
    }

    let report = flatten_all(&dest, &sources, ctx.options).map_err(|e| fail(ctx, e))?;
    summarize(ctx, &dest, &report);

    if ctx.options.dry_run {
        info!("dry-run: selection left as is");
    } else {
        ctx.clear.clear();
    }
    Ok(Outcome::Completed(report))
}

/// Drop selections that no longer exist, warning about each one. Other stat
/// failures are kept so they surface as a `Stat` error.
fn drop_missing(ctx: &FlattenContext<'_>, selections: Vec<PathBuf>) -> Vec<PathBuf> {
    let (present, missing): (Vec<_>, Vec<_>) = selections.into_iter().partition(|p| {
        !matches!(fs::symlink_metadata(p), Err(e) if e.kind() == io::ErrorKind::NotFound)
    });
    for path in &missing {
        warn!(path = %path.display(), "Selected path not found; skipped");
        ctx.notifier.notify(
            Severity::Warning,
            &format!("Selected path not found, skipped: {}", path.display()),
        );
    }
    present
}

fn named_destination(ctx: &FlattenContext<'_>, name: &str) -> FlattenResult<Destination> {
    if !ctx.options.dry_run {
        return ensure_destination(name, &ctx.working_dir).map_err(|e| fail(ctx, e));
    }
    let path = ctx.working_dir.join(name.trim());
    let entry = match PathEntry::stat(&path) {
        Ok(entry) => entry,
        Err(_) => {
            info!(path = %path.display(), "dry-run: would create destination");
            PathEntry::new(&path, EntryKind::Directory)
        }
    };
    Destination::from_entry(entry).ok_or_else(|| {
        fail(
            ctx,
            FlattenError::Create {
                path,
                source: io::Error::from(io::ErrorKind::NotADirectory),
            },
        )
    })
}

fn reject(ctx: &FlattenContext<'_>, e: FlattenError) -> Outcome {
    warn!(code = e.code(), "{e}");
    ctx.notifier.notify(Severity::Warning, &e.to_string());
    Outcome::Rejected(e)
}

fn fail(ctx: &FlattenContext<'_>, e: FlattenError) -> FlattenError {
    error!(code = e.code(), "{e}");
    ctx.notifier.notify(Severity::Error, &e.to_string());
    e
}

fn summarize(ctx: &FlattenContext<'_>, dest: &Destination, report: &FlattenReport) {
    for path in &report.truncated {
        ctx.notifier.notify(
            Severity::Error,
            &format!(
                "Maximum depth ({}) exceeded; left unflattened: {}",
                ctx.options.max_depth,
                path.display()
            ),
        );
    }
    if !report.collisions.is_empty() {
        ctx.notifier.notify(
            Severity::Warning,
            &format!(
                "{} file(s) skipped: name already present in {}",
                report.collisions.len(),
                dest.path().display()
            ),
        );
    }
    let verb = if ctx.options.dry_run { "Would move" } else { "Moved" };
    ctx.notifier.notify(
        Severity::Info,
        &format!(
            "{verb} {} file(s) into {}; removed {} folder(s)",
            report.moved,
            dest.path().display(),
            report.removed_dirs
        ),
    );
}
