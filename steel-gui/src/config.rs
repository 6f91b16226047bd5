//! Library configuration loaded from `steel_gui.json5`.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_CONFIG: &str = include_str!("../../package-content/steel_gui.json5");

/// Where the config file lives relative to the working directory.
#[cfg(feature = "dev-build")]
pub const CONFIG_PATH: &str = "config/steel_gui.json5";
/// Where the config file lives relative to the working directory.
#[cfg(not(feature = "dev-build"))]
pub const CONFIG_PATH: &str = "steel_gui.json5";

/// Errors raised while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file couldn't be read or written.
    #[error("couldn't access config file: {0}")]
    Io(#[from] io::Error),
    /// The config file isn't valid json5 or is missing fields.
    #[error("couldn't parse config file: {0}")]
    Parse(#[from] serde_json5::Error),
    /// A value is outside its allowed range.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Settings shared by every screen.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GuiConfig {
    /// Directory scanned for screen definitions.
    pub definitions_dir: PathBuf,
    /// Whether empty player inventory slots reject clicks by default.
    pub lock_player_inventory: bool,
    /// Whether button presses are logged.
    pub log_clicks: bool,
    /// Default log filter.
    pub log_level: String,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            definitions_dir: PathBuf::from("config/guis"),
            lock_player_inventory: true,
            log_clicks: false,
            log_level: "info".to_string(),
        }
    }
}

impl GuiConfig {
    /// Loads the config at `path`, writing the bundled default there if it doesn't exist.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            let config_str = fs::read_to_string(path)?;
            let config = Self::parse(&config_str)?;
            config.validate()?;
            return Ok(config);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, DEFAULT_CONFIG)?;
        log::info!("Wrote default config to {}", path.display());
        Ok(Self::default())
    }

    /// Parses a config from json5 text.
    pub fn parse(config_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json5::from_str(config_str)?)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.definitions_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid("definitions_dir must not be empty"));
        }
        if self.log_level.trim().is_empty() {
            return Err(ConfigError::Invalid("log_level must not be empty"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_default_matches() {
        let config = GuiConfig::parse(DEFAULT_CONFIG).expect("bundled config parses");
        assert_eq!(config, GuiConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_dir() {
        let config = GuiConfig {
            definitions_dir: PathBuf::new(),
            ..GuiConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_missing_field_fails() {
        assert!(matches!(
            GuiConfig::parse("{ log_clicks: true }"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_or_create_writes_default() {
        let dir = std::env::temp_dir().join(format!("steel-gui-config-{}", uuid::Uuid::new_v4()));
        let path = dir.join("steel_gui.json5");

        let created = GuiConfig::load_or_create(&path).expect("default is written");
        assert_eq!(created, GuiConfig::default());
        assert!(path.exists());

        let loaded = GuiConfig::load_or_create(&path).expect("written file loads");
        assert_eq!(loaded, created);

        fs::remove_dir_all(&dir).expect("temp dir is removable");
    }
}
