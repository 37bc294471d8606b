//! Runtime configuration read from the environment.
//!
//! Every setting has a default, so an empty environment is valid.

use anyhow::{Context, Result};
use std::path::PathBuf;

const DEFAULT_STORE_PATH: &str = ".translate-targets.json";
const DEFAULT_SCOPE: &str = "default";
const DEFAULT_GRID_COLUMNS: usize = 4;

/// Settings for the `translate-targets` binary.
#[derive(Debug, Clone)]
pub struct Config {
    // Persistence
    pub store_path: PathBuf,
    pub project_scope: String,

    // Display
    pub grid_columns: usize,
}

impl Config {
    /// Build the configuration from environment variables.
    ///
    /// # Variables
    /// * `TRANSLATE_TARGETS_STORE` - preferences file (default `.translate-targets.json`)
    /// * `TRANSLATE_TARGETS_SCOPE` - project scope (default: current directory name)
    /// * `TRANSLATE_TARGETS_COLUMNS` - grid columns, at least 1 (default 4)
    ///
    /// # Returns
    /// * `Err` only when the scope falls back to the current directory and it cannot be read
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            store_path: std::env::var("TRANSLATE_TARGETS_STORE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH)),
            project_scope: match std::env::var("TRANSLATE_TARGETS_SCOPE") {
                Ok(scope) if !scope.trim().is_empty() => scope.trim().to_string(),
                _ => default_scope()?,
            },
            grid_columns: std::env::var("TRANSLATE_TARGETS_COLUMNS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&columns: &usize| columns >= 1)
                .unwrap_or(DEFAULT_GRID_COLUMNS),
        })
    }
}

/// Name of the working directory, which stands in for the project identity.
fn default_scope() -> Result<String> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(cwd
        .file_name()
        .and_then(|name| name.to_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_SCOPE)
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        std::env::remove_var("TRANSLATE_TARGETS_STORE");
        std::env::remove_var("TRANSLATE_TARGETS_SCOPE");
        std::env::remove_var("TRANSLATE_TARGETS_COLUMNS");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();
        let config = Config::from_env().unwrap();

        assert_eq!(config.store_path, PathBuf::from(DEFAULT_STORE_PATH));
        assert_eq!(config.grid_columns, 4);
        assert!(!config.project_scope.is_empty());
    }

    #[test]
    #[serial]
    fn test_values_from_env() {
        clear_env();
        std::env::set_var("TRANSLATE_TARGETS_STORE", "/tmp/prefs.json");
        std::env::set_var("TRANSLATE_TARGETS_SCOPE", "  my-app ");
        std::env::set_var("TRANSLATE_TARGETS_COLUMNS", "6");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.store_path, PathBuf::from("/tmp/prefs.json"));
        assert_eq!(config.project_scope, "my-app");
        assert_eq!(config.grid_columns, 6);
    }

    #[test]
    #[serial]
    fn test_invalid_columns_fall_back() {
        clear_env();
        for value in ["0", "-2", "four", ""] {
            std::env::set_var("TRANSLATE_TARGETS_COLUMNS", value);
            assert_eq!(Config::from_env().unwrap().grid_columns, DEFAULT_GRID_COLUMNS);
        }
        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_scope_uses_directory_name() {
        clear_env();
        std::env::set_var("TRANSLATE_TARGETS_SCOPE", "   ");
        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.project_scope, default_scope().unwrap());
    }
}
