//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Selections come from positional PATHs or from --selection-file, not both.
//! - --debug is a shorthand for --log-level debug.
//! - Flags override values loaded from config.xml.

use clap::{Parser, ValueHint};
use std::path::{Path, PathBuf};

use crate::config::types::{Config, LogLevel};

/// Flatten selected folders into one destination folder.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Move every file under the selected folders into one folder, then remove the emptied folders"
)]
pub struct Args {
    /// Selected files and folders (at least two).
    #[arg(value_name = "PATH", value_hint = ValueHint::AnyPath, conflicts_with = "selection_file")]
    pub paths: Vec<PathBuf>,

    /// Read the selection from a file (one path per line); the file is emptied on success.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub selection_file: Option<PathBuf>,

    /// Destination folder name; created if missing. Omit to use the first selected folder.
    #[arg(short = 'o', long = "dest", value_name = "NAME")]
    pub dest: Option<String>,

    /// Ask for the destination folder name interactively.
    #[arg(short = 'p', long)]
    pub prompt: bool,

    /// Directory relative destination names are resolved against (default: current directory).
    #[arg(short = 'C', long, value_name = "DIR", value_hint = ValueHint::DirPath)]
    pub working_dir: Option<PathBuf>,

    /// Deepest nesting level to descend into.
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Show what would be done, but do not modify files/directories.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging (shorthand for --log-level debug).
    #[arg(short = 'd', long)]
    pub debug: bool,

    /// Set log level: quiet, normal, info, debug.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Also write logs to this file.
    #[arg(long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON.
    #[arg(long)]
    pub json: bool,

    /// Print the config file location used by flatten_move and exit.
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Selected paths with shell-quoting leftovers removed.
    pub fn resolved_paths(&self) -> Vec<PathBuf> {
        self.paths.iter().map(|p| Self::sanitize_path(p)).collect()
    }

    #[inline]
    fn sanitize_path(p: &Path) -> PathBuf {
        Self::sanitize_str(&p.to_string_lossy())
    }

    /// Trim surrounding quotes that file-manager custom actions sometimes pass
    /// through verbatim, plus one trailing separator.
    fn sanitize_str(s: &str) -> PathBuf {
        let trimmed = s.trim();
        let mut inner = if trimmed.len() >= 2
            && ((trimmed.starts_with('"') && trimmed.ends_with('"'))
                || (trimmed.starts_with('\'') && trimmed.ends_with('\'')))
        {
            trimmed[1..trimmed.len() - 1].to_string()
        } else {
            trimmed.to_string()
        };

        if (inner.ends_with('\\') || inner.ends_with('/')) && inner.len() > 1 {
            inner.pop();
        }

        PathBuf::from(inner)
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a loaded Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(file) = &self.log_file {
            cfg.log_file = Some(file.clone());
        }
        if let Some(depth) = self.max_depth {
            cfg.max_depth = depth;
        }
        if let Some(dest) = &self.dest {
            cfg.destination = Some(dest.clone());
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.prompt {
            cfg.prompt = true;
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
