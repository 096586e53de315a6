//! `AppConfig` struct, config file lookup and TOML loading.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// API connection settings.
    #[serde(default)]
    pub api: ApiConfig,
}

/// API connection configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL override, e.g. a staging host.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

/// File name looked up inside the config directory.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Where `config.toml` lives.
///
/// `dir` (the `--dir` flag) wins, then `env_dir` (`MOVIEBUFF_CONFIG_DIR`),
/// then `{home}/.config/moviebuff`. Empty environment values count as unset.
///
/// # Errors
///
/// Returns an error if none of the three locations is available.
pub fn config_file_path(
    dir: Option<&Path>,
    env_dir: Option<&str>,
    home: Option<&str>,
) -> Result<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir.join(CONFIG_FILE_NAME));
    }
    if let Some(env_dir) = env_dir.filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(env_dir).join(CONFIG_FILE_NAME));
    }

    let home = home
        .filter(|h| !h.is_empty())
        .context("no config directory: pass --dir or set MOVIEBUFF_CONFIG_DIR or HOME")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("moviebuff")
        .join(CONFIG_FILE_NAME))
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }
}

impl ApiConfig {
    /// Picks the base URL: `flag`, then `env`, then the config file.
    ///
    /// Empty values are skipped. `None` means the library default applies.
    #[must_use]
    pub fn resolve_base_url(&self, flag: Option<&str>, env: Option<&str>) -> Option<String> {
        [flag, env, self.base_url.as_deref()]
            .into_iter()
            .flatten()
            .find(|url| !url.is_empty())
            .map(String::from)
    }

    /// Configured request timeout.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
