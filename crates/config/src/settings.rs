//! Configuration settings structures

use alloy_primitives::Address;
use routing_types::{
	constants::{DEFAULT_QUOTER_TIMEOUT_MS, MAX_QUOTER_TIMEOUT_MS, MIN_QUOTER_TIMEOUT_MS},
	SecretString, WrappedNativeTable,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::configurable_value::{ConfigurableValue, ConfigurableValueError};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub quoters: QuoterSettings,
	pub timeouts: TimeoutSettings,
	/// Chain id to wrapped-native address, merged over the built-in table
	pub wrapped_native: HashMap<String, String>,
	pub logging: LoggingSettings,
}

/// Remote quoter configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct QuoterSettings {
	pub routing_api: RoutingApiSettings,
	pub rfq: RfqSettings,
}

/// Route-based quoter
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RoutingApiSettings {
	pub enabled: bool,
	pub url: String,
	pub timeout_ms: u64,
}

impl Default for RoutingApiSettings {
	fn default() -> Self {
		Self {
			enabled: true,
			url: "http://localhost:3001".to_string(),
			timeout_ms: DEFAULT_QUOTER_TIMEOUT_MS,
		}
	}
}

/// RFQ auction quoter
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct RfqSettings {
	pub enabled: bool,
	pub url: String,
	/// Base URL of the order service answering nonce lookups
	pub nonce_url: String,
	/// Sent as `x-api-key`
	///
	/// Example configurations:
	/// - Environment variable: `{"type": "env", "value": "RFQ_API_KEY"}`
	/// - Plain value: `{"type": "plain", "value": "your-key-here"}`
	pub api_key: Option<ConfigurableValue>,
	pub timeout_ms: u64,
}

impl Default for RfqSettings {
	fn default() -> Self {
		Self {
			enabled: true,
			url: "http://localhost:3002".to_string(),
			nonce_url: "http://localhost:3002".to_string(),
			api_key: None,
			timeout_ms: DEFAULT_QUOTER_TIMEOUT_MS,
		}
	}
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Upper bound the router applies around every adapter call
	pub per_quoter_ms: u64,
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self {
			per_quoter_ms: DEFAULT_QUOTER_TIMEOUT_MS,
		}
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

/// Settings that parse but cannot be used
#[derive(Error, Debug)]
pub enum ConfigValidationError {
	#[error("Timeout {field} must be between {min}ms and {max}ms, got {value}ms")]
	InvalidTimeout {
		field: String,
		value: u64,
		min: u64,
		max: u64,
	},

	#[error("Quoter {quoter} is enabled without a URL")]
	MissingUrl { quoter: String },

	#[error("No quoter is enabled")]
	NoQuotersEnabled,

	#[error("Invalid wrapped native entry '{chain_id}': {reason}")]
	InvalidWrappedNative { chain_id: String, reason: String },

	#[error("Secret could not be resolved: {0}")]
	Secret(#[from] ConfigurableValueError),
}

impl Settings {
	/// Check timeouts, URLs and the wrapped-native overrides
	pub fn validate(&self) -> Result<(), ConfigValidationError> {
		let timeouts = [
			("timeouts.per_quoter_ms", self.timeouts.per_quoter_ms),
			(
				"quoters.routing_api.timeout_ms",
				self.quoters.routing_api.timeout_ms,
			),
			("quoters.rfq.timeout_ms", self.quoters.rfq.timeout_ms),
		];
		for (field, value) in timeouts {
			if !(MIN_QUOTER_TIMEOUT_MS..=MAX_QUOTER_TIMEOUT_MS).contains(&value) {
				return Err(ConfigValidationError::InvalidTimeout {
					field: field.to_string(),
					value,
					min: MIN_QUOTER_TIMEOUT_MS,
					max: MAX_QUOTER_TIMEOUT_MS,
				});
			}
		}

		let routing_api = &self.quoters.routing_api;
		let rfq = &self.quoters.rfq;
		if !routing_api.enabled && !rfq.enabled {
			return Err(ConfigValidationError::NoQuotersEnabled);
		}
		if routing_api.enabled && routing_api.url.trim().is_empty() {
			return Err(ConfigValidationError::MissingUrl {
				quoter: "routing_api".to_string(),
			});
		}
		if rfq.enabled && (rfq.url.trim().is_empty() || rfq.nonce_url.trim().is_empty()) {
			return Err(ConfigValidationError::MissingUrl {
				quoter: "rfq".to_string(),
			});
		}

		self.wrapped_native_table().map(|_| ())
	}

	/// Built-in wrapped-native table with the configured overrides applied
	pub fn wrapped_native_table(&self) -> Result<WrappedNativeTable, ConfigValidationError> {
		let mut table = WrappedNativeTable::with_defaults();
		for (chain_id, address) in &self.wrapped_native {
			let invalid = |reason: String| ConfigValidationError::InvalidWrappedNative {
				chain_id: chain_id.clone(),
				reason,
			};
			let chain: u64 = chain_id
				.parse()
				.map_err(|_| invalid("chain id must be an integer".to_string()))?;
			let wrapped: Address = address
				.parse()
				.map_err(|e| invalid(format!("invalid address '{}': {}", address, e)))?;
			table.insert(chain, wrapped);
		}
		Ok(table)
	}

	/// Resolve the RFQ API key, `None` when none is configured
	pub fn rfq_api_key(&self) -> Result<Option<SecretString>, ConfigValidationError> {
		self.quoters
			.rfq
			.api_key
			.as_ref()
			.map(|key| key.resolve_secret())
			.transpose()
			.map_err(ConfigValidationError::from)
	}

	/// Names of the enabled quoters
	pub fn enabled_quoters(&self) -> Vec<&'static str> {
		let mut quoters = Vec::new();
		if self.quoters.routing_api.enabled {
			quoters.push("routing_api");
		}
		if self.quoters.rfq.enabled {
			quoters.push("rfq");
		}
		quoters
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::address;

	#[test]
	fn test_defaults_are_valid() {
		let settings = Settings::default();
		assert!(settings.validate().is_ok());
		assert_eq!(settings.enabled_quoters(), vec!["routing_api", "rfq"]);
		assert_eq!(settings.timeouts.per_quoter_ms, DEFAULT_QUOTER_TIMEOUT_MS);
	}

	#[test]
	fn test_rejects_out_of_range_timeout() {
		let mut settings = Settings::default();
		settings.timeouts.per_quoter_ms = 10;
		assert!(matches!(
			settings.validate(),
			Err(ConfigValidationError::InvalidTimeout { .. })
		));
	}

	#[test]
	fn test_rejects_all_quoters_disabled() {
		let mut settings = Settings::default();
		settings.quoters.routing_api.enabled = false;
		settings.quoters.rfq.enabled = false;
		assert!(matches!(
			settings.validate(),
			Err(ConfigValidationError::NoQuotersEnabled)
		));
	}

	#[test]
	fn test_wrapped_native_overrides() {
		let mut settings = Settings::default();
		settings.wrapped_native.insert(
			"31337".to_string(),
			"0x5fbdb2315678afecb367f032d93f642f64180aa3".to_string(),
		);
		let table = settings.wrapped_native_table().unwrap();
		assert_eq!(
			table.get(31337),
			Some(address!("5fbdb2315678afecb367f032d93f642f64180aa3"))
		);
		assert!(table.get(1).is_some());

		settings
			.wrapped_native
			.insert("mainnet".to_string(), "0x00".to_string());
		assert!(matches!(
			settings.validate(),
			Err(ConfigValidationError::InvalidWrappedNative { .. })
		));
	}

	#[test]
	fn test_rfq_api_key_resolution() {
		let mut settings = Settings::default();
		settings.quoters.rfq.api_key = Some(ConfigurableValue::from_plain("k"));
		assert_eq!(settings.rfq_api_key().unwrap().unwrap().expose_secret(), "k");

		settings.quoters.rfq.api_key = None;
		assert!(settings.rfq_api_key().unwrap().is_none());
	}
}
