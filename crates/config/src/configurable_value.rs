//! Configurable value types that can load from environment variables or plain values

use routing_types::SecretString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A configurable value that can be loaded from environment variables or used as plain text
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ConfigurableValue {
	/// Type of value: "env" for environment variable, "plain" for direct value
	#[serde(rename = "type")]
	pub value_type: ValueType,
	/// The value: either environment variable name or the actual value
	pub value: String,
}

/// Type of configurable value
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
	/// Load value from environment variable (name specified in `value` field)
	Env,
	/// Use the value directly from the `value` field
	Plain,
}

impl ConfigurableValue {
	/// Create a new environment variable reference
	pub fn from_env(env_var_name: &str) -> Self {
		Self {
			value_type: ValueType::Env,
			value: env_var_name.to_string(),
		}
	}

	/// Create a new plain value
	pub fn from_plain(plain_value: &str) -> Self {
		Self {
			value_type: ValueType::Plain,
			value: plain_value.to_string(),
		}
	}

	/// Resolve the actual value based on the type
	pub fn resolve(&self) -> Result<String, ConfigurableValueError> {
		match self.value_type {
			ValueType::Env => std::env::var(&self.value).map_err(|_| {
				ConfigurableValueError::EnvironmentVariableNotFound(self.value.clone())
			}),
			ValueType::Plain => Ok(self.value.clone()),
		}
	}

	/// Resolve straight into a [`SecretString`]
	pub fn resolve_secret(&self) -> Result<SecretString, ConfigurableValueError> {
		self.resolve().map(SecretString::from)
	}

	/// Whether the secret sits in the config file itself
	pub fn is_plaintext(&self) -> bool {
		matches!(self.value_type, ValueType::Plain)
	}

	/// Get a description of this configurable value for logging
	pub fn description(&self) -> String {
		match self.value_type {
			ValueType::Env => format!("environment variable '{}'", self.value),
			ValueType::Plain => "configured plain value".to_string(),
		}
	}
}

/// Errors that can occur when resolving configurable values
#[derive(Debug, thiserror::Error)]
pub enum ConfigurableValueError {
	#[error("Environment variable '{0}' not found")]
	EnvironmentVariableNotFound(String),
}

// Never print plain values
impl fmt::Display for ConfigurableValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.value_type {
			ValueType::Env => write!(f, "env:{}", self.value),
			ValueType::Plain => write!(f, "plain:[REDACTED]"),
		}
	}
}

/// `"env:NAME"` references an environment variable, anything else is plain
impl From<&str> for ConfigurableValue {
	fn from(value: &str) -> Self {
		if let Some(env_var) = value.strip_prefix("env:") {
			Self::from_env(env_var)
		} else {
			Self::from_plain(value)
		}
	}
}

impl From<String> for ConfigurableValue {
	fn from(value: String) -> Self {
		ConfigurableValue::from(value.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::env;

	#[test]
	fn test_plain_value() {
		let config = ConfigurableValue::from_plain("test-key");
		assert_eq!(config.value_type, ValueType::Plain);
		assert_eq!(config.resolve().unwrap(), "test-key");
		assert!(config.is_plaintext());
	}

	#[test]
	fn test_env_value() {
		env::set_var("ROUTING_TEST_RFQ_KEY", "key-from-env");

		let config = ConfigurableValue::from_env("ROUTING_TEST_RFQ_KEY");
		assert_eq!(config.resolve().unwrap(), "key-from-env");
		assert_eq!(
			config.resolve_secret().unwrap().expose_secret(),
			"key-from-env"
		);
		assert!(!config.is_plaintext());

		env::remove_var("ROUTING_TEST_RFQ_KEY");
	}

	#[test]
	fn test_env_value_not_found() {
		let config = ConfigurableValue::from_env("ROUTING_TEST_MISSING_VAR");
		assert!(matches!(
			config.resolve(),
			Err(ConfigurableValueError::EnvironmentVariableNotFound(_))
		));
	}

	#[test]
	fn test_from_string_conversion() {
		let plain_config = ConfigurableValue::from("plain-value");
		assert_eq!(plain_config.value_type, ValueType::Plain);

		let env_config = ConfigurableValue::from("env:RFQ_API_KEY");
		assert_eq!(env_config.value_type, ValueType::Env);
		assert_eq!(env_config.value, "RFQ_API_KEY");
	}

	#[test]
	fn test_display_redacts_plain_values() {
		let config = ConfigurableValue::from_plain("super-secret");
		assert_eq!(config.to_string(), "plain:[REDACTED]");
		assert_eq!(ConfigurableValue::from_env("K").to_string(), "env:K");
	}

	#[test]
	fn test_serde_serialization() {
		let config = ConfigurableValue::from_env("RFQ_API_KEY");

		let json = serde_json::to_string(&config).unwrap();
		assert!(json.contains("\"type\":\"env\""));
		assert!(json.contains("\"value\":\"RFQ_API_KEY\""));

		let deserialized: ConfigurableValue = serde_json::from_str(&json).unwrap();
		assert_eq!(deserialized, config);
	}
}
