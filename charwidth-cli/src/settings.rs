//! Settings configuration
//!
//! Default values are defined in `config/default.toml`; the user's file is
//! merged on top of them.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use charwidth_engine::NormalizeOptions;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Default configuration TOML embedded from config/default.toml
const DEFAULT_CONFIG_TOML: &str = include_str!("../config/default.toml");

/// Configuration settings for the command-line tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Categories folded when no `--only`/`--except` flag is given
    #[serde(default)]
    pub normalize: NormalizeOptions,
}

/// Parse user TOML content on top of default.toml.
///
/// Each `[normalize]` key the user sets replaces the default's; keys the
/// user leaves out keep the default value.
fn parse_with_defaults(user_content: &str) -> Result<Settings> {
    let defaults: Settings = toml::from_str(DEFAULT_CONFIG_TOML)?;
    let user: Settings = toml::from_str(user_content)?;
    Ok(Settings {
        normalize: NormalizeOptions {
            only: user.normalize.only.or(defaults.normalize.only),
            except: user.normalize.except.or(defaults.normalize.except),
        },
    })
}

impl Settings {
    /// Get the configuration file path
    pub fn config_file() -> Option<PathBuf> {
        ProjectDirs::from("com", "charwidth", "charwidth")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load settings from the default configuration file.
    /// Falls back to embedded default.toml if the config file does not exist.
    pub fn load() -> Result<Self> {
        let Some(config_file) = Self::config_file() else {
            warn!("Could not determine config directory, using defaults");
            return Self::defaults();
        };

        if !config_file.exists() {
            debug!("Config file not found, using defaults");
            return Self::defaults();
        }

        Self::load_from(&config_file)
    }

    /// Load settings from a specific file, merged on top of defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        parse_with_defaults(&content).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Settings from the embedded default.toml alone
    pub fn defaults() -> Result<Self> {
        parse_with_defaults("")
    }
}
