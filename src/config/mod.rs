pub mod error;
pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use error::ConfigError;
pub use model::{AppConfig, LoggingConfig, UiConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("countercard")
        .join("config.toml")
}

/// A loaded config plus the error from writing first-run defaults, if any.
/// That write is best effort, so its failure is reported rather than fatal.
pub struct LoadedConfig {
    pub config: AppConfig,
    pub save_error: Option<anyhow::Error>,
}

pub fn load_config() -> Result<LoadedConfig> {
    load_config_from(&config_path())
}

pub fn load_config_from(path: &Path) -> Result<LoadedConfig> {
    if !path.exists() {
        // First run: leave an editable copy of the defaults behind.
        let config = AppConfig::default();
        let save_error = save_config_to(path, &config).err();
        return Ok(LoadedConfig { config, save_error });
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    Ok(LoadedConfig {
        config,
        save_error: None,
    })
}

pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
    }
    let contents = toml::to_string_pretty(config).with_context(|| "Failed to serialize config")?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    Ok(())
}
