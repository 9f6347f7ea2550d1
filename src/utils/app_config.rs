/// Application configuration management
/// Stores user preferences in ~/.config/company-profile/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::{APP_NAME, SERVICES_ENV};

const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// JSON, YAML or TOML file holding the service collection
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<String>,
}

impl AppConfig {
    /// Get config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine the user config directory")?;

        Ok(config_dir.join(APP_NAME).join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from file; a missing file means defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }

    /// Set and save the services file
    pub fn set_services_file(&mut self, path: &Path) -> Result<()> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .context("Failed to get current directory")?
                .join(path)
        };
        self.services_file = Some(absolute.to_string_lossy().to_string());
        self.save()
    }

    /// Services file to load: CLI flag, then environment, then config file
    pub fn resolve_services_file(&self, cli_override: Option<&Path>) -> Option<PathBuf> {
        self.resolve_services_file_with(cli_override, std::env::var(SERVICES_ENV).ok())
    }

    fn resolve_services_file_with(&self, cli_override: Option<&Path>, env_value: Option<String>) -> Option<PathBuf> {
        if let Some(path) = cli_override {
            return Some(path.to_path_buf());
        }

        if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
            return Some(PathBuf::from(value));
        }

        self.services_file.as_ref().map(PathBuf::from)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }

    /// Log file used by the interactive mode
    pub fn log_file(&self) -> Result<PathBuf> {
        if let Some(ref file) = self.log_file {
            return Ok(PathBuf::from(file));
        }

        let cache_dir = dirs::cache_dir()
            .context("Could not determine the user cache directory")?;

        Ok(cache_dir.join(APP_NAME).join(format!("{}.log", APP_NAME)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = AppConfig {
            services_file: Some("/srv/services.yaml".to_string()),
            log_level: Some("debug".to_string()),
            log_file: None,
        };
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.log_level(), "debug");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "services_file = [").unwrap();
        assert!(AppConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_resolution_order() {
        let config = AppConfig {
            services_file: Some("from-config.json".to_string()),
            ..Default::default()
        };

        let cli = Path::new("from-cli.toml");
        assert_eq!(
            config.resolve_services_file_with(Some(cli), Some("from-env.yaml".to_string())),
            Some(PathBuf::from("from-cli.toml"))
        );
        assert_eq!(
            config.resolve_services_file_with(None, Some("from-env.yaml".to_string())),
            Some(PathBuf::from("from-env.yaml"))
        );
        assert_eq!(
            config.resolve_services_file_with(None, Some("  ".to_string())),
            Some(PathBuf::from("from-config.json"))
        );
        assert_eq!(AppConfig::default().resolve_services_file_with(None, None), None);
    }

    #[test]
    fn test_explicit_log_file() {
        let config = AppConfig {
            log_file: Some("/tmp/profile.log".to_string()),
            ..Default::default()
        };
        assert_eq!(config.log_file().unwrap(), PathBuf::from("/tmp/profile.log"));
    }
}
