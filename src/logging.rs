//! Tracing initialization.
//!
//! Behavior:
//! - Console diagnostics go to stderr and only from `--log-level info` up;
//!   at quiet/normal the notifier lines are the whole console output.
//! - A log file, when configured, always records info and above (everything
//!   at debug).
//! - Compact or JSON formatting is selected via the `json` flag.
//!
//! File logging uses tracing_appender::non_blocking and is refused when any
//! ancestor of the log path is a symlink.

use anyhow::Result;
use chrono::Local;
use flatten_move::output as out;
use flatten_move::platform::open_log_file_secure_append;
use flatten_move::{LogLevel, default_log_path, path_has_symlink_ancestor};
use std::fmt as stdfmt;
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%d/%m/%y %H:%M:%S"))
    }
}

fn console_level(lvl: &LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet | LogLevel::Normal => LevelFilter::OFF,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

fn file_level(lvl: &LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Debug => LevelFilter::TRACE,
        _ => LevelFilter::INFO,
    }
}

fn env_filter_from_level(level_filter: LevelFilter) -> EnvFilter {
    let level_str = match level_filter {
        LevelFilter::OFF => "off",
        LevelFilter::ERROR => "error",
        LevelFilter::WARN => "warn",
        LevelFilter::INFO => "info",
        LevelFilter::DEBUG => "debug",
        _ => "trace",
    };
    EnvFilter::new(level_str)
}

/// One formatted layer with its own level filter.
fn fmt_layer<S, W>(writer: W, json: bool, level: LevelFilter) -> Box<dyn Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = env_filter_from_level(level);
    if json {
        tsfmt::layer()
            .json()
            .with_timer(LocalHumanTime)
            .with_target(true)
            .with_writer(writer)
            .with_filter(filter)
            .boxed()
    } else {
        tsfmt::layer()
            .compact()
            .with_timer(LocalHumanTime)
            .with_target(true)
            .with_writer(writer)
            .with_filter(filter)
            .boxed()
    }
}

/// Try to open a non-blocking file writer for logging:
/// - Refuse if any ancestor is a symlink
/// - Open file for append (0600 on create) and wrap with non_blocking
fn maybe_open_non_blocking_writer(path: &Path) -> Option<(NonBlocking, WorkerGuard)> {
    match path_has_symlink_ancestor(path) {
        Ok(true) => {
            out::print_warn(&format!(
                "Refusing file logging: an ancestor of {} is a symlink",
                path.display()
            ));
            return None;
        }
        Err(e) => {
            out::print_warn(&format!(
                "Cannot check log path {} for symlinks: {e}",
                path.display()
            ));
            return None;
        }
        Ok(false) => {}
    }

    match open_log_file_secure_append(path) {
        Ok(file) => Some(tracing_appender::non_blocking(file)),
        Err(e) => {
            out::print_warn(&format!("Cannot open log file {}: {e}", path.display()));
            None
        }
    }
}

/// Install the global subscriber. Returns the file appender's guard, which
/// must be held until exit so buffered lines are flushed.
pub fn init_tracing(
    lvl: &LogLevel,
    log_file: Option<&Path>,
    json: bool,
) -> Result<Option<WorkerGuard>> {
    let console = match console_level(lvl) {
        LevelFilter::OFF => None,
        level => Some(fmt_layer(std::io::stderr, json, level)),
    };

    let mut guard = None;
    let file = match log_file.map(|p| (p, maybe_open_non_blocking_writer(p))) {
        Some((_, Some((writer, g)))) => {
            guard = Some(g);
            Some(fmt_layer(writer, json, file_level(lvl)))
        }
        Some((path, None)) => {
            out::print_warn(&format!(
                "File logging to '{}' was not enabled; continuing without it.",
                path.display()
            ));
            if let Some(def) = default_log_path() {
                out::print_info(&format!(
                    "You can try using the default log path instead: {}",
                    def.display()
                ));
            }
            None
        }
        None => None,
    };

    registry().with(console).with(file).try_init()?;
    Ok(guard)
}
