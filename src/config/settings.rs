//! TOML-based configuration for Foodlink.
//!
//! Supports a config file (foodlink.toml) with environment variable expansion.
//!
//! Example configuration:
//! ```toml
//! [database]
//! path = "${FOODLINK_DB:-food_wastage.db}"
//! pool_size = 4
//! busy_timeout_ms = 5000
//! ```

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Path value that selects a private in-memory database.
pub const IN_MEMORY: &str = ":memory:";

/// Error type for settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Database location and connection handling.
    pub database: DatabaseSettings,
}

/// `[database]` table.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseSettings {
    /// SQLite file path (supports ${ENV_VAR} expansion), or `:memory:`.
    pub path: String,

    /// Number of pooled connections.
    pub pool_size: u32,

    /// How long a connection waits on a locked database.
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "food_wastage.db".to_string(),
            pool_size: 4,
            busy_timeout_ms: 5000,
        }
    }
}

impl DatabaseSettings {
    /// The database path with environment variables expanded.
    pub fn resolved_path(&self) -> Result<String, SettingsError> {
        expand_env_vars(&self.path)
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    /// Whether the expanded path selects an in-memory database.
    pub fn is_in_memory(&self) -> Result<bool, SettingsError> {
        Ok(is_in_memory(&self.resolved_path()?))
    }
}

/// Whether an already-expanded path selects an in-memory database.
pub fn is_in_memory(path: &str) -> bool {
    path.trim() == IN_MEMORY
}

impl Settings {
    /// Load settings from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SettingsError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from the default config file locations.
    ///
    /// Searches in order:
    /// 1. Environment variable `FOODLINK_CONFIG`
    /// 2. `./foodlink.toml`
    /// 3. `<config dir>/foodlink/foodlink.toml`
    pub fn load() -> Result<Self, SettingsError> {
        if let Ok(path) = env::var("FOODLINK_CONFIG") {
            return Self::from_file(&path);
        }

        let local_config = PathBuf::from("foodlink.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("foodlink").join("foodlink.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        Ok(Settings::default())
    }

    /// Reject values that cannot produce a working store.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.database.pool_size == 0 {
            return Err(SettingsError::InvalidConfig(
                "database.pool_size must be at least 1".to_string(),
            ));
        }
        if self.database.path.trim().is_empty() {
            return Err(SettingsError::InvalidConfig(
                "database.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Expand environment variables in a string.
///
/// Supports `${VAR}`, `${VAR:-default}` and `$VAR` syntax.
pub fn expand_env_vars(s: &str) -> Result<String, SettingsError> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '$' {
            result.push(c);
            continue;
        }

        if chars.peek() == Some(&'{') {
            chars.next();
            let mut body = String::new();
            for ch in chars.by_ref() {
                if ch == '}' {
                    break;
                }
                body.push(ch);
            }
            let (name, fallback) = match body.split_once(":-") {
                Some((name, fallback)) => (name, Some(fallback)),
                None => (body.as_str(), None),
            };
            // an empty variable falls through to the default when one is given
            let value = env::var(name)
                .ok()
                .filter(|v| !v.is_empty() || fallback.is_none());
            match (value, fallback) {
                (Some(value), _) => result.push_str(&value),
                (None, Some(fallback)) => result.push_str(fallback),
                (None, None) => return Err(SettingsError::MissingEnvVar(name.to_string())),
            }
        } else {
            // $VAR ends at the first non-alphanumeric, non-underscore char
            let mut var_name = String::new();
            while let Some(&ch) = chars.peek() {
                if ch.is_alphanumeric() || ch == '_' {
                    var_name.push(ch);
                    chars.next();
                } else {
                    break;
                }
            }
            if var_name.is_empty() {
                result.push('$');
            } else {
                let value = env::var(&var_name)
                    .map_err(|_| SettingsError::MissingEnvVar(var_name.clone()))?;
                result.push_str(&value);
            }
        }
    }

    Ok(result)
}
