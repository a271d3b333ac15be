//! Configuration module for Foodlink.
//!
//! Handles the database settings file and environment variable expansion.

mod settings;

pub use settings::{
    expand_env_vars, is_in_memory, DatabaseSettings, Settings, SettingsError, IN_MEMORY,
};
