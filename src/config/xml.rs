//! XML configuration support.
//! - Loads settings from config.xml (quick_xml + serde).
//! - A missing file at the default location means "use defaults"; a missing
//!   file named by FLATTEN_MOVE_CONFIG is an error.
//! - Unknown XML fields are rejected so typos surface early.
//!
//! Example:
//! <config>
//!   <log_level>info</log_level>
//!   <log_file>/var/log/flatten_move.log</log_file>
//!   <max_depth>10</max_depth>
//!   <dry_run>false</dry_run>
//!   <prompt>true</prompt>
//!   <destination>merged</destination>
//! </config>

use anyhow::{Context, Result, bail};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::{default_config_path, CONFIG_ENV};
use super::types::{Config, LogLevel};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    log_level: Option<String>,
    log_file: Option<String>,
    #[serde(default, deserialize_with = "de_usize_trimmed_opt")]
    max_depth: Option<usize>,
    dry_run: Option<bool>,
    prompt: Option<bool>,
    destination: Option<String>,
}

// Custom deserializer that trims surrounding whitespace for optional usize
fn de_usize_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    Ok(opt.and_then(|s| s.trim().parse::<usize>().ok()))
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

// Map XmlConfig -> Config; absent fields keep their defaults.
fn xml_to_config(parsed: XmlConfig) -> Config {
    let mut cfg = Config::default();

    if let Some(level) = non_empty(parsed.log_level.as_deref()).and_then(LogLevel::parse) {
        cfg.log_level = level;
    }
    cfg.log_file = non_empty(parsed.log_file.as_deref()).map(PathBuf::from);
    if let Some(depth) = parsed.max_depth {
        cfg.max_depth = depth;
    }
    cfg.dry_run = parsed.dry_run.unwrap_or(false);
    cfg.prompt = parsed.prompt.unwrap_or(false);
    cfg.destination = non_empty(parsed.destination.as_deref()).map(str::to_owned);

    cfg
}

/// Load a Config from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    Ok(xml_to_config(parsed))
}

/// Load the config from `$FLATTEN_MOVE_CONFIG` or the default location.
/// Returns Ok(None) when no file exists at the default location.
pub fn load_config() -> Result<Option<(PathBuf, Config)>> {
    let explicit = env::var_os(CONFIG_ENV).is_some_and(|v| !v.is_empty());
    let Some(path) = default_config_path() else {
        debug!("no config location could be determined; using defaults");
        return Ok(None);
    };
    if !path.exists() {
        if explicit {
            bail!("{CONFIG_ENV} points to a missing file: {}", path.display());
        }
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(None);
    }
    let cfg = load_config_from_xml_path(&path)?;
    debug!(path = %path.display(), "loaded config");
    Ok(Some((path, cfg)))
}
