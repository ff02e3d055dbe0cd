//! Configuration loading.
//!
//! `edcore` runs with sensible defaults out of the box; an optional TOML
//! file can override the tunables below. Nothing here is required for
//! correctness; the engine behaves identically at any positive
//! `snapshot_interval`, only its undo/redo cost profile changes.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// `[history]` section of the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryConfig {
    #[serde(default = "HistoryConfig::default_snapshot_interval")]
    pub snapshot_interval: usize,
}

impl HistoryConfig {
    fn default_snapshot_interval() -> usize {
        300
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            snapshot_interval: Self::default_snapshot_interval(),
        }
    }
}

/// `[frontend]` section of the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct FrontendConfig {
    #[serde(default = "FrontendConfig::default_max_line_bytes")]
    pub max_line_bytes: usize,
}

impl FrontendConfig {
    fn default_max_line_bytes() -> usize {
        1024
    }
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            max_line_bytes: Self::default_max_line_bytes(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    history: HistoryConfig,
    #[serde(default)]
    frontend: FrontendConfig,
}

/// The resolved, effective configuration for a session.
#[derive(Debug, Clone)]
pub struct Config {
    pub snapshot_interval: usize,
    pub max_line_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_interval: HistoryConfig::default_snapshot_interval(),
            max_line_bytes: FrontendConfig::default_max_line_bytes(),
        }
    }
}

/// Loads configuration from `path`, or from `edcore.toml` in the current
/// directory if `path` is `None`. Missing files are not an error: the
/// defaults above apply.
pub fn load_from(path: Option<&Path>) -> Result<Config> {
    let candidate: PathBuf = match path {
        Some(p) => p.to_path_buf(),
        None => PathBuf::from("edcore.toml"),
    };

    if !candidate.exists() {
        tracing::debug!(target: "config", path = %candidate.display(), "no config file found, using defaults");
        return Ok(Config::default());
    }

    let raw = fs::read_to_string(&candidate)
        .with_context(|| format!("reading config file {}", candidate.display()))?;
    let file: ConfigFile = toml::from_str(&raw)
        .with_context(|| format!("parsing config file {}", candidate.display()))?;

    let config = Config {
        snapshot_interval: file.history.snapshot_interval,
        max_line_bytes: file.frontend.max_line_bytes,
    };
    tracing::info!(
        target: "config",
        path = %candidate.display(),
        snapshot_interval = config.snapshot_interval,
        max_line_bytes = config.max_line_bytes,
        "config_loaded"
    );
    Ok(config)
}
