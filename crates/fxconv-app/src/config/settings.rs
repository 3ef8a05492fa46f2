//! Settings loader for `<config_dir>/fxconv/config.toml`

use std::path::{Path, PathBuf};

use super::types::Settings;
use fxconv_core::prelude::*;

pub const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "fxconv";

const DEFAULT_CONFIG: &str = r#"# fxconv configuration

[endpoints]
catalog_url = "https://openexchangerates.org/api/currencies.json"
rates_url = "https://api.exchangerate-api.com/v4/latest/"   # base code is appended
timeout_secs = 10

[defaults]
source = "GBP"
target = "USD"
amount = "100"

[conversion]
expiry_secs = 10        # How long a converted result stays visible

[ui]
show_hints = true
"#;

/// Default config file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `config_path`, falling back to defaults.
///
/// A missing file is normal; an unreadable or invalid one is logged and ignored.
pub fn load_settings(config_path: &Path) -> Settings {
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

/// Write a commented default config file at `config_path` unless one exists
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(dir) = config_path.parent() {
        std::fs::create_dir_all(dir)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", dir, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;
    info!("Created default config at {:?}", config_path);

    Ok(())
}
