pub mod types;

use crate::error::{ConfigError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = ".qovery.toml";

/// Get the global config file path (~/.qovery.toml)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_FILE_NAME))
}

/// Load the user configuration, falling back to defaults when the file is
/// missing or unreadable
pub fn load_config() -> types::Config {
    global_config_path()
        .map(|path| load_config_from(&path))
        .unwrap_or_default()
}

/// Load a configuration file from an explicit path
pub fn load_config_from(path: &Path) -> types::Config {
    if !path.exists() {
        return types::Config::default();
    }

    match fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
            log::warn!("Ignoring unparsable config {}: {}", path.display(), e);
            types::Config::default()
        }),
        Err(e) => {
            log::warn!("Could not read config {}: {}", path.display(), e);
            types::Config::default()
        }
    }
}

/// Save configuration to the global config file
pub fn save_global_config(config: &types::Config) -> Result<()> {
    let path = global_config_path().ok_or(ConfigError::NoHomeDirectory(CONFIG_FILE_NAME))?;
    save_config_to(&path, config)
}

/// Save configuration to an explicit path
pub fn save_config_to(path: &Path, config: &types::Config) -> Result<()> {
    let content = toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParsingFailed(e.to_string()))?;
    fs::write(path, content)?;
    Ok(())
}
