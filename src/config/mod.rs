//! Configuration loading and management
//!
//! Configuration comes from an optional YAML file, then environment
//! variables override individual keys:
//!
//! | key                 | YAML                          | env                  | default          |
//! |---------------------|-------------------------------|----------------------|------------------|
//! | bind address        | `server.bind_addr`            | `BIZTIME_BIND_ADDR`  | `127.0.0.1:3000` |
//! | database URL        | `database.url`                | `DATABASE_URL`       | none             |
//! | pool size           | `database.max_connections`    | (none)               | `5`              |

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable naming the YAML file to load
pub const CONFIG_PATH_ENV: &str = "BIZTIME_CONFIG";
pub const BIND_ADDR_ENV: &str = "BIZTIME_BIND_ADDR";
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

/// Relational store settings
///
/// Without a URL the binary runs on the in-memory store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: Option<String>,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            max_connections: default_max_connections(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub database: DatabaseConfig,
}

fn default_bind_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_max_connections() -> u32 {
    5
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path))?;
        Self::from_yaml_str(&content).with_context(|| format!("Failed to parse config file '{}'", path))
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Override keys from a variable lookup
    ///
    /// Empty values are ignored.
    pub fn apply_env_with<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(addr) = non_empty(BIND_ADDR_ENV) {
            self.server.bind_addr = addr;
        }
        if let Some(url) = non_empty(DATABASE_URL_ENV) {
            self.database.url = Some(url);
        }
        self
    }

    /// Override keys from the process environment
    pub fn apply_env(self) -> Self {
        self.apply_env_with(|key| std::env::var(key).ok())
    }

    /// Load the file named by `BIZTIME_CONFIG` (if set), then apply the environment
    pub fn load() -> Result<Self> {
        let base = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        Ok(base.apply_env())
    }
}
