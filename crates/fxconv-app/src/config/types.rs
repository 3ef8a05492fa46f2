//! Configuration types
//!
//! Defines `Settings`, the contents of `config.toml`, and its sections.

use std::time::Duration;

use fxconv_core::prelude::*;
use fxconv_core::CurrencyCode;
use fxconv_rates::{Endpoints, DEFAULT_CATALOG_URL, DEFAULT_RATES_URL};
use serde::{Deserialize, Serialize};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub endpoints: EndpointSettings,

    #[serde(default)]
    pub defaults: DefaultSettings,

    #[serde(default)]
    pub conversion: ConversionSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Rate service locations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EndpointSettings {
    /// Currency list (code to display name)
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,

    /// Rate table; the base code is appended as a path segment
    #[serde(default = "default_rates_url")]
    pub rates_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
            rates_url: default_rates_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl EndpointSettings {
    /// Validated endpoint URLs
    pub fn endpoints(&self) -> Result<Endpoints> {
        Endpoints::parse(&self.catalog_url, &self.rates_url)
    }

    /// Request timeout, at least one second
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

/// Initial form values
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DefaultSettings {
    #[serde(default = "default_source")]
    pub source: CurrencyCode,

    #[serde(default = "default_target")]
    pub target: CurrencyCode,

    /// Amount text; validated like typed input
    #[serde(default = "default_amount")]
    pub amount: String,
}

impl Default for DefaultSettings {
    fn default() -> Self {
        Self {
            source: default_source(),
            target: default_target(),
            amount: default_amount(),
        }
    }
}

/// Conversion behaviour
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConversionSettings {
    /// Seconds a converted result stays visible
    #[serde(default = "default_expiry_secs")]
    pub expiry_secs: u32,
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            expiry_secs: default_expiry_secs(),
        }
    }
}

impl ConversionSettings {
    /// Countdown start value; zero would hide results immediately
    pub fn expiry(&self) -> u32 {
        self.expiry_secs.max(1)
    }
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show the key hint bar
    #[serde(default = "default_true")]
    pub show_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { show_hints: true }
    }
}

fn default_catalog_url() -> String {
    DEFAULT_CATALOG_URL.to_string()
}

fn default_rates_url() -> String {
    DEFAULT_RATES_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_source() -> CurrencyCode {
    CurrencyCode::parse("GBP").expect("Invalid default source currency")
}

fn default_target() -> CurrencyCode {
    CurrencyCode::parse("USD").expect("Invalid default target currency")
}

fn default_amount() -> String {
    "100".to_string()
}

fn default_expiry_secs() -> u32 {
    10
}

fn default_true() -> bool {
    true
}
