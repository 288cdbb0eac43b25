//! Configuration handling for the demo request form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::state::OptionCatalog;
use crate::submit::DEFAULT_ENDPOINT;

/// Environment variable overriding the submission endpoint
pub const ENDPOINT_ENV: &str = "DEMO_FORM_ENDPOINT";

/// Target the terminal host mounts onto
pub const DEFAULT_MOUNT_TARGET: &str = "terminal";

/// Transport timeout when the file does not set one
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Log file written while the terminal host runs
pub const LOG_FILE_NAME: &str = "demo-request-form.log";

/// User configuration for the form host
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FormConfig {
    /// Submission URL
    pub endpoint: Option<String>,
    /// Transport timeout in seconds, `0` disables it
    pub timeout_secs: Option<u64>,
    /// Target to mount the form on
    pub mount_target: Option<String>,
    /// Option lists and slider bounds
    pub catalog: Option<OptionCatalog>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "seriouserp", "demo-request-form")
}

impl FormConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file, the temp dir when no home is known
    pub fn log_dir() -> PathBuf {
        project_dirs()
            .map(|dirs| dirs.data_local_dir().to_path_buf())
            .unwrap_or_else(std::env::temp_dir)
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load from `path`, defaults when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: FormConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Write pretty JSON to `path`, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Endpoint from the environment, then the file, then the default
    pub fn endpoint(&self) -> String {
        self.resolve_endpoint(std::env::var(ENDPOINT_ENV).ok())
    }

    fn resolve_endpoint(&self, from_env: Option<String>) -> String {
        from_env
            .filter(|value| !value.trim().is_empty())
            .or_else(|| self.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string())
    }

    /// Defaults to [`DEFAULT_TIMEOUT_SECS`], zero means no timeout
    pub fn timeout(&self) -> Option<Duration> {
        Some(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn mount_target(&self) -> &str {
        self.mount_target.as_deref().unwrap_or(DEFAULT_MOUNT_TARGET)
    }

    pub fn catalog(&self) -> OptionCatalog {
        self.catalog.clone().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.timeout_secs.is_none());
        assert!(config.mount_target.is_none());
        assert!(config.catalog.is_none());
    }

    #[test]
    fn test_defaults_resolve() {
        let config = FormConfig::default();
        assert_eq!(config.resolve_endpoint(None), DEFAULT_ENDPOINT);
        assert_eq!(config.mount_target(), DEFAULT_MOUNT_TARGET);
        assert_eq!(
            config.timeout(),
            Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
        );
        assert_eq!(config.catalog(), OptionCatalog::default());
    }

    #[test]
    fn test_endpoint_precedence() {
        let config = FormConfig {
            endpoint: Some("http://file.test/submit".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_endpoint(None), "http://file.test/submit");
        assert_eq!(
            config.resolve_endpoint(Some("http://env.test/submit".to_string())),
            "http://env.test/submit"
        );
        // Blank env values are ignored
        assert_eq!(
            config.resolve_endpoint(Some("  ".to_string())),
            "http://file.test/submit"
        );
    }

    #[test]
    fn test_timeout() {
        let config = FormConfig {
            timeout_secs: Some(10),
            ..Default::default()
        };
        assert_eq!(config.timeout(), Some(Duration::from_secs(10)));

        let config = FormConfig {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_serialization() {
        let config = FormConfig {
            endpoint: Some("https://erp.test/api/demo/submit".to_string()),
            timeout_secs: Some(30),
            mount_target: Some("hero".to_string()),
            catalog: Some(OptionCatalog::default()),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: FormConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: FormConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, FormConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"mount_target": "footer", "unknown_field": "value"}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.mount_target(), "footer");
    }

    #[test]
    fn test_partial_catalog_override() {
        let json = r#"{"catalog": {"techsDrivers": ["1-10", "10+"]}}"#;
        let parsed: FormConfig = serde_json::from_str(json).unwrap();
        let catalog = parsed.catalog();
        assert_eq!(catalog.techs_drivers, vec!["1-10", "10+"]);
        assert_eq!(
            catalog.dme_software,
            OptionCatalog::default().dme_software
        );
    }

    #[test]
    fn test_config_path_returns_option() {
        let _path = FormConfig::config_path();
    }

    #[test]
    fn test_log_dir_is_absolute() {
        assert!(FormConfig::log_dir().is_absolute());
    }

    #[test]
    fn test_save_then_load_from_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = FormConfig {
            endpoint: Some("https://erp.test/api/demo/submit".to_string()),
            timeout_secs: Some(0),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\n  \"endpoint\""));

        let loaded = FormConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.timeout(), None);
    }

    #[test]
    fn test_load_from_missing_path() {
        let dir = TempDir::new().unwrap();
        let loaded = FormConfig::load_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(loaded, FormConfig::default());
    }

    #[test]
    fn test_load_from_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();
        assert!(FormConfig::load_from(&path).is_err());
    }
}
