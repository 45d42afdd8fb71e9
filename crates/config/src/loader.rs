//! Configuration loading utilities

use config::{Config, ConfigError, File};
use thiserror::Error;
use tracing::debug;

use crate::settings::{ConfigValidationError, Settings};

/// Config file used when `CONFIG_PATH` is not set (extension optional)
pub const DEFAULT_CONFIG_PATH: &str = "config/config";

#[derive(Error, Debug)]
pub enum ConfigLoadError {
	#[error("Failed to read configuration: {0}")]
	Config(#[from] ConfigError),

	#[error("Invalid configuration: {0}")]
	Validation(#[from] ConfigValidationError),
}

/// Load configuration from `CONFIG_PATH` or the default path
///
/// A missing file yields the default settings.
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
	load_config_from(&path)
}

/// Load and validate configuration from `path`
pub fn load_config_from(path: &str) -> Result<Settings, ConfigLoadError> {
	debug!("Loading configuration from {}", path);

	let settings: Settings = Config::builder()
		.add_source(File::with_name(path).required(false))
		.build()?
		.try_deserialize()?;

	settings.validate()?;
	Ok(settings)
}
