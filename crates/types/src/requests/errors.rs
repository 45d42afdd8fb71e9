//! Error types for request parsing and validation

use thiserror::Error;

use super::RoutingType;

/// Errors raised while turning caller input into requests
///
/// These are construction-time errors: they reach the caller instead of
/// being absorbed the way adapter failures are.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
	#[error("Unsupported routing type: {0}")]
	UnsupportedRoutingType(String),

	#[error("Missing required field: {field}")]
	MissingField { field: String },

	#[error("Invalid amount: {value}")]
	InvalidAmount { value: String },

	#[error("Invalid chain ID: {chain_id}")]
	InvalidChainId { chain_id: u64 },

	#[error("Invalid slippage tolerance: {value}")]
	InvalidSlippage { value: String },

	#[error("Unsupported protocol: {0}")]
	UnsupportedProtocol(String),

	#[error("Invalid {routing_type} config: {reason}")]
	InvalidConfig {
		routing_type: RoutingType,
		reason: String,
	},

	#[error("Duplicate config for routing type {0}")]
	DuplicateRoutingType(RoutingType),

	#[error("At least one routing config is required")]
	EmptyConfigs,
}
