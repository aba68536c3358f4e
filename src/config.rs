//! Application configuration.
//!
//! Settings are read from `config.json` in the user's config directory
//! (for example `~/.config/roster/config.json` on Linux). The data file can be
//! overridden with the `ROSTER_DATA_FILE` environment variable, and the CLI
//! `--file` flag overrides both.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "roster";
const CONFIG_FILE: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "users.json";

/// Environment variable overriding [`AppConfig::data_file`].
pub const DATA_FILE_ENV: &str = "ROSTER_DATA_FILE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path of the JSON file holding the roster. Relative paths resolve
    /// against the working directory.
    pub data_file: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

impl AppConfig {
    /// Load configuration from the user's config directory, then apply the
    /// environment override.
    /// Falls back to defaults if the file doesn't exist or fails to parse.
    pub fn load() -> Self {
        let config = match config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::warn!("Failed to locate config directory, using defaults: {e:#}");
                Self::default()
            }
        };

        config.with_env_override(std::env::var_os(DATA_FILE_ENV))
    }

    /// Load configuration from an explicit file, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {e:#}");
                Self::default()
            }
        }
    }

    fn try_load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;

        let config = serde_json::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Apply the value of [`DATA_FILE_ENV`], if it was set and non-empty.
    pub fn with_env_override(mut self, value: Option<OsString>) -> Self {
        if let Some(data_file) = value.filter(|v| !v.is_empty()) {
            self.data_file = PathBuf::from(data_file);
        }
        self
    }

    /// Replace the data file, e.g. from a command-line flag.
    pub fn with_data_file(mut self, data_file: Option<PathBuf>) -> Self {
        if let Some(data_file) = data_file {
            self.data_file = data_file;
        }
        self
    }
}

fn config_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    Ok(dirs.config_dir().join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_file() {
        assert_eq!(AppConfig::default().data_file, PathBuf::from("users.json"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.json"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_reads_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "data_file": "/srv/people.json" }"#).unwrap();

        let config = AppConfig::load_from(&path);
        assert_eq!(config.data_file, PathBuf::from("/srv/people.json"));
    }

    #[test]
    fn test_unparseable_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        assert_eq!(AppConfig::load_from(&path), AppConfig::default());
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "data_file": "from-file.json" }"#).unwrap();

        let config =
            AppConfig::load_from(&path).with_env_override(Some(OsString::from("from-env.json")));
        assert_eq!(config.data_file, PathBuf::from("from-env.json"));

        let config = AppConfig::load_from(&path).with_env_override(None);
        assert_eq!(config.data_file, PathBuf::from("from-file.json"));

        let config = AppConfig::load_from(&path).with_env_override(Some(OsString::new()));
        assert_eq!(config.data_file, PathBuf::from("from-file.json"));
    }

    #[test]
    fn test_flag_overrides_env() {
        let config = AppConfig::default()
            .with_env_override(Some(OsString::from("from-env.json")))
            .with_data_file(Some(PathBuf::from("from-flag.json")));
        assert_eq!(config.data_file, PathBuf::from("from-flag.json"));

        let config = AppConfig::default()
            .with_env_override(Some(OsString::from("from-env.json")))
            .with_data_file(None);
        assert_eq!(config.data_file, PathBuf::from("from-env.json"));
    }

    #[test]
    fn test_flag_overrides() {
        let config = AppConfig::default().with_data_file(Some(PathBuf::from("other.json")));
        assert_eq!(config.data_file, PathBuf::from("other.json"));

        let config = AppConfig::default().with_data_file(None);
        assert_eq!(config.data_file, PathBuf::from("users.json"));
    }
}
