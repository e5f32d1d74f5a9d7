//! Application configuration.
//!
//! Resolution order, last wins:
//!   1. defaults
//!   2. YAML file (`~/.scriptboard/scriptboard.conf`, or `$SCRIPTBOARD_CONFIG`)
//!   3. environment (`DB_NAME`, `SCRIPTBOARD_BIND`), after loading `.env`
//!   4. the global `--db` CLI flag (applied by the caller)

use crate::db::pool::StoreConfig;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const ENV_CONFIG_FILE: &str = "SCRIPTBOARD_CONFIG";
pub const ENV_DATABASE: &str = "DB_NAME";
pub const ENV_BIND: &str = "SCRIPTBOARD_BIND";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_bind")]
    pub bind: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_bind() -> String {
    "127.0.0.1:8501".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            bind: default_bind(),
        }
    }
}

impl Config {
    /// Standard configuration directory: `~/.scriptboard`
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".scriptboard")
    }

    /// Full path of the config file, honouring `$SCRIPTBOARD_CONFIG`
    pub fn config_file() -> PathBuf {
        match std::env::var(ENV_CONFIG_FILE) {
            Ok(p) if !p.trim().is_empty() => expand_tilde(p.trim()),
            _ => Self::config_dir().join("scriptboard.conf"),
        }
    }

    /// Default SQLite database location
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("scriptboard.sqlite")
    }

    /// Load file + environment. A missing file means defaults.
    pub fn load() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let mut cfg = Self::load_file(&Self::config_file())?;
        cfg.apply_overrides(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    pub fn load_file(path: &std::path::Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))
    }

    /// Apply environment-style overrides through `lookup`. Empty values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(db) = non_empty(ENV_DATABASE) {
            self.database = db;
        }
        if let Some(bind) = non_empty(ENV_BIND) {
            self.bind = bind;
        }
    }

    /// The explicit store configuration handed to the connection factory.
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(expand_tilde(self.database.trim()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }
}
