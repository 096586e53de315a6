//! Application configuration module.
//!
//! Locates and loads the TOML config file holding API connection settings.

#[allow(clippy::module_inception)]
mod config;

#[allow(clippy::module_name_repetitions)]
pub use config::{AppConfig, config_file_path};
