//! Settings loader for config.toml

use std::path::{Path, PathBuf};
use std::time::Duration;

use super::types::Settings;
use cibon_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const CIBON_DIR: &str = "cibon";

/// Default location of the settings file (`<config dir>/cibon/config.toml`)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CIBON_DIR).join(CONFIG_FILENAME))
}

/// Load settings from an explicit path, or from the default location.
///
/// An explicit path that does not exist is an error. A missing default file
/// yields defaults, and so does a file that cannot be read or parsed (with a
/// warning).
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(Error::ConfigNotFound {
                    path: path.to_path_buf(),
                });
            }
            Ok(read_settings(path))
        }
        None => Ok(default_config_path()
            .map(|path| read_settings(&path))
            .unwrap_or_default()),
    }
}

/// Read a settings file, falling back to defaults on any problem
pub fn read_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

impl Settings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.api.request_timeout_ms)
    }
}
