//! Configuration management.
//!
//! Handles:
//! - Default realm for `opaque build`
//! - Default output format

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::output::OutputFormat;

/// Configuration file name.
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the configured default realm.
pub const REALM_ENV: &str = "OPAQUE_REALM";

/// Get the config directory path.
fn config_dir() -> Result<PathBuf> {
    ProjectDirs::from("io", "opaque", "opaque")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

/// Get the config file path.
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE))
}

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Realm used by `build` when neither `--realm` nor `--sector` is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_realm: Option<String>,

    /// Output format used when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Config {
    /// Load config from disk, or return default.
    pub fn load() -> Result<Self> {
        Self::load_from(&config_path()?)
    }

    /// Load config from a specific file, or return default if it is absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Load config from a specific file, falling back to the default if it
    /// cannot be read or parsed.
    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|err| {
            warn!("ignoring unreadable config: {:#}", err);
            Self::default()
        })
    }

    /// Load config from disk, falling back to the default on any error.
    pub fn load_or_default() -> Self {
        match config_path() {
            Ok(path) => Self::load_or_default_from(&path),
            Err(err) => {
                warn!("ignoring unreadable config: {:#}", err);
                Self::default()
            }
        }
    }

    /// Save config to disk.
    pub fn save(&self) -> Result<()> {
        self.save_to(&config_path()?)
    }

    /// Save config to a specific file, creating its directory.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {:?}", path))
    }

    /// Get the default realm, preferring `OPAQUE_REALM` over the file.
    pub fn effective_realm(&self) -> Option<String> {
        self.realm_with_override(std::env::var(REALM_ENV).ok())
    }

    /// Resolve the default realm against an override value. An empty
    /// override is ignored.
    fn realm_with_override(&self, realm_override: Option<String>) -> Option<String> {
        realm_override
            .filter(|realm| !realm.is_empty())
            .or_else(|| self.default_realm.clone())
    }
}
