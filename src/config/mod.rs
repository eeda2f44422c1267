//! Configuration loading.
//!
//! Lookup order:
//!   1. `$SHELTON_CONFIG` (must exist and parse)
//!   2. `{config_dir}/shelton/config.json`, if present
//!   3. built-in defaults

pub mod schema;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use crate::registry::EmployeeRegistry;

pub use schema::{AppConfig, EmployeeSeed, LoggingConfig, ServerConfig};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SHELTON_CONFIG";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Employee \"{0}\" is listed more than once")]
    DuplicateEmployee(String),

    #[error("Employee \"{name}\" has a negative leave balance ({balance})")]
    NegativeBalance { name: String, balance: i64 },
}

/// Default config file location (`~/.config/shelton/config.json` on Linux).
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("shelton")
        .join("config.json")
}

/// The config file that [`load`] would read, if any.
pub fn resolve_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    let path = default_config_path();
    path.exists().then_some(path)
}

/// Resolve and load the configuration.
///
/// Also returns the file it came from (`None` for built-in defaults) so the
/// caller can report it once logging is up.
pub fn load() -> Result<(AppConfig, Option<PathBuf>), ConfigError> {
    match resolve_path() {
        Some(path) => Ok((load_from(&path)?, Some(path))),
        None => Ok((AppConfig::default(), None)),
    }
}

/// Load a config file. A missing or malformed file is an error.
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Build the registry described by `config`.
pub fn build_registry(config: &AppConfig) -> Result<EmployeeRegistry, ConfigError> {
    let Some(seeds) = &config.employees else {
        return Ok(EmployeeRegistry::with_default_seed());
    };

    let mut registry = EmployeeRegistry::new();
    for seed in seeds {
        if seed.record.balance < 0 {
            return Err(ConfigError::NegativeBalance {
                name: seed.name.clone(),
                balance: seed.record.balance,
            });
        }
        if !registry.register(seed.name.clone(), seed.record.clone()) {
            return Err(ConfigError::DuplicateEmployee(seed.name.clone()));
        }
    }
    if registry.is_empty() {
        warn!("Configured roster is empty");
    }
    Ok(registry)
}
