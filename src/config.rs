//! Configuration file support
//!
//! Read from `<config dir>/flatview/config.toml`. Every field has a default,
//! so a missing file or a partial file is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::github::constants::{DEFAULT_PER_PAGE, GH_COMMAND};
use crate::model::DEFAULT_BASE_URL;

/// Errors that can occur when loading the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatviewConfig {
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub link: LinkConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// [github] section configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubConfig {
    /// GitHub CLI binary
    #[serde(default = "default_command")]
    pub command: String,
    /// Commits per fetch
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Only list commits by this author (empty = all)
    #[serde(default)]
    pub author: String,
}

/// [link] section configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// [display] section configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Preview panel initially shown
    #[serde(default = "default_true")]
    pub preview: bool,
}

fn default_command() -> String {
    GH_COMMAND.to_string()
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            per_page: default_per_page(),
            author: String::new(),
        }
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview: default_true(),
        }
    }
}

/// Default config file location (`~/.config/flatview/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("flatview").join("config.toml"))
}

/// Load config from `path`, or from the default location when `None`
///
/// A file that does not exist yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<FlatviewConfig, ConfigError> {
    let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(path) => path,
        None => return Ok(FlatviewConfig::default()),
    };

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(FlatviewConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    parse_config(&content).map_err(|source| ConfigError::Parse { path, source })
}

/// Parse config file contents
pub fn parse_config(content: &str) -> Result<FlatviewConfig, toml::de::Error> {
    toml::from_str(content)
}
