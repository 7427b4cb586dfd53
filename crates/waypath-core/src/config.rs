//! Run configuration for waypath
//!
//! Looked up, in order, from an explicit `--config` path,
//! `$WAYPATH_CONFIG_DIR/config.toml`, then `~/.config/waypath/config.toml`.
//! A missing implicit config file yields the defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, WaypathError};
use crate::graph::{Algorithm, ExhaustedPolicy, SearchOptions};

const CONFIG_DIR: &str = "waypath";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "WAYPATH_CONFIG_DIR";

/// Default location dataset, resolved against the working directory
pub const DEFAULT_LOCATIONS: &str = "city.dat";
/// Default connection dataset, resolved against the working directory
pub const DEFAULT_CONNECTIONS: &str = "edge.dat";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Location dataset (`name region latitude longitude` per line)
    #[serde(default = "default_locations")]
    pub locations: PathBuf,

    /// Connection dataset (`name name` per line)
    #[serde(default = "default_connections")]
    pub connections: PathBuf,

    /// Algorithms to run, in report order
    #[serde(default = "default_algorithms")]
    pub algorithms: Vec<Algorithm>,

    /// What to report when a search exhausts its frontier
    #[serde(default)]
    pub on_exhausted: ExhaustedPolicy,
}

fn default_locations() -> PathBuf {
    PathBuf::from(DEFAULT_LOCATIONS)
}

fn default_connections() -> PathBuf {
    PathBuf::from(DEFAULT_CONNECTIONS)
}

fn default_algorithms() -> Vec<Algorithm> {
    Algorithm::ALL.to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locations: default_locations(),
            connections: default_connections(),
            algorithms: default_algorithms(),
            on_exhausted: ExhaustedPolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration, preferring an explicit path over the implicit locations
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        match Self::implicit_path() {
            Some(path) if path.exists() => Self::from_path(&path),
            _ => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse the config file at `path`
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| WaypathError::io_operation("read config", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn implicit_path() -> Option<PathBuf> {
        let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
            Ok(env_dir) => PathBuf::from(env_dir),
            Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
        };
        Some(dir.join(CONFIG_FILE))
    }

    /// Search options derived from this configuration
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            on_exhausted: self.on_exhausted,
        }
    }
}
