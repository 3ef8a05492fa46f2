//! Configuration file parsing
//!
//! Settings live in `<config_dir>/fxconv/config.toml`; every field is optional.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings, CONFIG_FILENAME};
pub use types::*;
