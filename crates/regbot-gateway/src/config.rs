//! Configuration file management for Regbot.
//!
//! Supports reading Supabase credentials from `~/.config/regbot/secret.json`.

use regbot_core::{RegbotError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure for secret.json
#[derive(Debug, Clone, Deserialize)]
pub struct SecretConfig {
    #[serde(default)]
    pub supabase: Option<SupabaseConfig>,
}

/// Supabase project configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
}

/// Loads the secret configuration file from ~/.config/regbot/secret.json
pub fn load_secret_config() -> Result<SecretConfig> {
    let config_path = get_config_path()?;
    load_secret_config_at(&config_path)
}

/// Loads and parses a secret configuration file at `path`.
pub fn load_secret_config_at(path: &Path) -> Result<SecretConfig> {
    if !path.exists() {
        return Err(RegbotError::config(format!(
            "Configuration file not found at: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        RegbotError::config(format!(
            "Failed to read configuration file at {}: {}",
            path.display(),
            e
        ))
    })?;

    serde_json::from_str(&content).map_err(|e| {
        RegbotError::config(format!(
            "Failed to parse configuration file at {}: {}",
            path.display(),
            e
        ))
    })
}

/// Returns the path to the configuration file: ~/.config/regbot/secret.json
fn get_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| RegbotError::config("Could not determine home directory"))?;
    Ok(home.join(".config").join("regbot").join("secret.json"))
}
