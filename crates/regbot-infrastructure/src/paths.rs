//! Unified path management for regbot files.
//!
//! All regbot configuration and data paths are resolved here so that the
//! storage and configuration code agree on one layout.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/regbot/            # Config directory
//! └── secret.json              # Supabase credentials
//!
//! ~/.local/share/regbot/       # Data directory
//! └── history.json             # Persisted chat transcript
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for regbot.
pub struct RegbotPaths;

impl RegbotPaths {
    /// Returns the regbot configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g., `~/.config/regbot/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("regbot"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the regbot data directory.
    ///
    /// This is where the persisted chat transcript lives.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to data directory (e.g., `~/.local/share/regbot/`)
    /// - `Err(PathError::HomeDirNotFound)`: Could not determine directory
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join("regbot"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions (e.g., 600) to prevent
    /// unauthorized access.
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }

    /// Returns the path to the persisted chat transcript.
    pub fn history_file() -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join("history.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = RegbotPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("regbot"));
    }

    #[test]
    fn test_data_dir() {
        let data_dir = RegbotPaths::data_dir().unwrap();
        assert!(data_dir.ends_with("regbot"));
    }

    #[test]
    fn test_secret_file() {
        let secret_file = RegbotPaths::secret_file().unwrap();
        assert!(secret_file.ends_with("secret.json"));
        // Verify it's under config_dir
        let config_dir = RegbotPaths::config_dir().unwrap();
        assert!(secret_file.starts_with(&config_dir));
    }

    #[test]
    fn test_history_file() {
        let history_file = RegbotPaths::history_file().unwrap();
        assert!(history_file.ends_with("history.json"));
        // Verify it's under data_dir
        let data_dir = RegbotPaths::data_dir().unwrap();
        assert!(history_file.starts_with(&data_dir));
    }
}
