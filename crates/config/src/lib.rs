//! Routing Configuration
//!
//! Configuration management and startup utilities for the unified routing engine.

pub mod configurable_value;
pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use configurable_value::{ConfigurableValue, ConfigurableValueError, ValueType};
pub use loader::{load_config, load_config_from, ConfigLoadError, DEFAULT_CONFIG_PATH};
pub use settings::{
	ConfigValidationError, LogFormat, LoggingSettings, QuoterSettings, RfqSettings,
	RoutingApiSettings, Settings, TimeoutSettings,
};
pub use startup_logger::{log_service_info, log_startup_complete};
