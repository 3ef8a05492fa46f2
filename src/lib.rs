//! fxconv - terminal currency converter
//!
//! Wires configuration and command-line overrides into one of the two front
//! ends: the ratatui TUI or the NDJSON headless mode.

pub mod headless;

use std::path::Path;

use fxconv_app::config::{self, Settings};
use fxconv_core::prelude::*;
use fxconv_core::CurrencyCode;

pub use headless::runner::run_headless;
pub use fxconv_tui::run as run_tui;

/// Values given on the command line, taking precedence over the config file
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub source: Option<CurrencyCode>,
    pub target: Option<CurrencyCode>,
    pub amount: Option<String>,
}

impl Overrides {
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(source) = &self.source {
            settings.defaults.source = source.clone();
        }
        if let Some(target) = &self.target {
            settings.defaults.target = target.clone();
        }
        if let Some(amount) = &self.amount {
            settings.defaults.amount = amount.clone();
        }
    }
}

/// Load settings from `explicit`, or from the default location.
///
/// The default file is created with commented defaults on first run. An
/// explicitly named file is only ever read.
pub fn load_config(explicit: Option<&Path>) -> Settings {
    if let Some(path) = explicit {
        info!("Using config file {:?}", path);
        return config::load_settings(path);
    }

    let Some(path) = config::default_config_path() else {
        debug!("No config directory on this platform, using defaults");
        return Settings::default();
    };

    if let Err(e) = config::init_config_file(&path) {
        warn!("Could not create default config: {}", e);
    }
    config::load_settings(&path)
}
