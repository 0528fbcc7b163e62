use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ui::{DEFAULT_RATIOS, NAV_COLLAPSED_SIZE};

/// File name of the application configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Startup defaults for the view. Everything here can be overridden on the
/// command line or by the mirrored layout hints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Theme name to activate at startup
    pub theme: Option<String>,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Pane ratios as percentages, nav / list / reader
    pub ratios: [u16; 3],
    /// Start with the navigation pane as an icon rail
    pub collapsed: bool,
    /// Ratio recorded for the nav pane while collapsed
    pub collapsed_size: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            ratios: DEFAULT_RATIOS,
            collapsed: false,
            collapsed_size: NAV_COLLAPSED_SIZE,
        }
    }
}

/// Per-user configuration directory for this application.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("buzon"))
}

impl AppConfig {
    /// Load configuration from file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> ConfigResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load the configuration from the given config directory, creating the
    /// file with defaults when it does not exist
    pub fn load_or_create_default(config_dir: &Path) -> ConfigResult<Self> {
        let config_path = Self::config_path(config_dir);

        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            let config = Self::default();
            config.save_to_file(&config_path)?;
            Ok(config)
        }
    }

    pub fn config_path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILE_NAME)
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), String> {
        let sum: u16 = self.layout.ratios.iter().sum();
        if sum != 100 {
            return Err(format!("Pane ratios must sum to 100, got {}", sum));
        }
        if self.layout.collapsed_size == 0 || self.layout.collapsed_size > 14 {
            return Err(format!(
                "Collapsed size must be between 1 and 14, got {}",
                self.layout.collapsed_size
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.theme, None);
        assert_eq!(config.layout.ratios, [20, 32, 48]);
        assert!(!config.layout.collapsed);
        assert_eq!(config.layout.collapsed_size, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_file_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);

        let mut config = AppConfig::default();
        config.theme = Some("Slate Light".to_string());
        config.layout.ratios = [15, 40, 45];
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.theme.as_deref(), Some("Slate Light"));
        assert_eq!(loaded.layout.ratios, [15, 40, 45]);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "theme = \"High Contrast\"\n").unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.theme.as_deref(), Some("High Contrast"));
        assert_eq!(loaded.layout.ratios, DEFAULT_RATIOS);
    }

    #[test]
    fn test_load_or_create_writes_default_file() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load_or_create_default(dir.path()).unwrap();
        assert!(AppConfig::config_path(dir.path()).exists());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_ratios() {
        let mut config = AppConfig::default();
        config.layout.ratios = [10, 10, 10];
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.layout.collapsed_size = 40;
        assert!(config.validate().is_err());
    }
}
