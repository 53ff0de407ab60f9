//! Configuration for the Relaydeck console.
//!
//! Layered in the usual order — built-in defaults, then the user's TOML
//! config file, then `RELAYDECK_*` environment variables (strongest).
//! This crate also resolves where persisted client state (session token,
//! view preferences) lives on disk.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// The gateway admin API every build talks to unless overridden.
pub const DEFAULT_BASE_URL: &str = "https://gateway.relaydeck.dev/api/";

/// Default per-call timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 15_000;

const ENV_PREFIX: &str = "RELAYDECK_";
const CONFIG_FILE: &str = "config.toml";
const STATE_FILE: &str = "state.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration error: {0}")]
    Load(#[from] figment::Error),

    #[error("cannot determine a home directory for console state")]
    NoHomeDir,
}

/// Everything the console needs to construct its API client and stores.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Base URL of the gateway admin API.
    pub base_url: Url,
    /// Per-call timeout in milliseconds.
    pub timeout_ms: u64,
    /// Where persisted client state lives. `None` = platform default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_dir: Option<PathBuf>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            state_dir: None,
        }
    }
}

impl ConsoleConfig {
    /// Load from the platform config file and environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILE)))
    }

    /// Load with an explicit config file path (tests, `--config` flags).
    pub fn load_from(config_file: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }
        let config = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        Ok(config)
    }

    /// The per-call timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Where the persisted state file (session, preferences) lives.
    pub fn state_file(&self) -> Result<PathBuf, ConfigError> {
        if let Some(dir) = &self.state_dir {
            return Ok(dir.join(STATE_FILE));
        }
        let dirs = project_dirs().ok_or(ConfigError::NoHomeDir)?;
        Ok(dirs.data_local_dir().join(STATE_FILE))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "Relaydeck", "relaydeck")
}

/// Convenience for callers that take `&Path`.
pub fn config_file_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}

/// Render the default configuration as TOML, for `config init`-style
/// flows that write a starter file for the operator to edit.
pub fn default_config_toml() -> String {
    toml::to_string_pretty(&ConsoleConfig::default()).unwrap_or_default()
}
