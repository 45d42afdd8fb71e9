//! Route-based (classic) requests

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{QuoteRequestInfo, RequestError, RequestKey, RoutingType};
use crate::constants::DEFAULT_PROTOCOLS;
use crate::models::u256_string;

/// On-chain liquidity protocols the router may route through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
	V2,
	V3,
	Mixed,
}

impl Protocol {
	pub fn as_str(&self) -> &'static str {
		match self {
			Protocol::V2 => "V2",
			Protocol::V3 => "V3",
			Protocol::Mixed => "MIXED",
		}
	}
}

impl fmt::Display for Protocol {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Protocol {
	type Err = RequestError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.to_ascii_uppercase().as_str() {
			"V2" => Ok(Protocol::V2),
			"V3" => Ok(Protocol::V3),
			"MIXED" => Ok(Protocol::Mixed),
			_ => Err(RequestError::UnsupportedProtocol(value.to_string())),
		}
	}
}

/// Classic-specific request configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassicConfig {
	pub protocols: Vec<Protocol>,
	#[serde(with = "u256_string::option", default)]
	pub gas_price_wei: Option<U256>,
}

impl ClassicConfig {
	pub fn with_protocols(protocols: impl IntoIterator<Item = Protocol>) -> Self {
		Self {
			protocols: protocols.into_iter().collect(),
			gas_price_wei: None,
		}
	}

	/// Protocols in canonical order, duplicates removed
	pub fn sorted_protocols(&self) -> Vec<Protocol> {
		let mut protocols = self.protocols.clone();
		protocols.sort();
		protocols.dedup();
		protocols
	}
}

impl Default for ClassicConfig {
	fn default() -> Self {
		Self::with_protocols(DEFAULT_PROTOCOLS)
	}
}

/// Request for an on-chain routed swap quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassicRequest {
	pub info: QuoteRequestInfo,
	pub config: ClassicConfig,
}

impl ClassicRequest {
	pub fn new(info: QuoteRequestInfo, config: ClassicConfig) -> Self {
		Self { info, config }
	}

	/// Protocol set and gas price change the route; slippage is carried on the quote
	pub fn key(&self) -> RequestKey {
		let protocols = self
			.config
			.sorted_protocols()
			.iter()
			.map(Protocol::as_str)
			.collect::<Vec<_>>()
			.join(",");
		let gas_price = self
			.config
			.gas_price_wei
			.map(|price| price.to_string())
			.unwrap_or_else(|| "-".to_string());

		RequestKey::new(
			RoutingType::Classic,
			&self.info,
			&format!("{}:{}:{}", protocols, gas_price, self.info.slippage_bps),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_utils::{classic_request, request_info};

	#[test]
	fn test_protocol_parsing_is_case_insensitive() {
		assert_eq!("v3".parse::<Protocol>().unwrap(), Protocol::V3);
		assert_eq!("Mixed".parse::<Protocol>().unwrap(), Protocol::Mixed);
		assert!("v4".parse::<Protocol>().is_err());
	}

	#[test]
	fn test_key_ignores_protocol_order() {
		let info = request_info();
		let a = ClassicRequest::new(
			info.clone(),
			ClassicConfig::with_protocols([Protocol::V3, Protocol::V2]),
		);
		let b = ClassicRequest::new(
			info,
			ClassicConfig::with_protocols([Protocol::V2, Protocol::V3, Protocol::V2]),
		);
		assert_eq!(a.key(), b.key());
	}

	#[test]
	fn test_key_changes_with_identity_fields() {
		let base = classic_request();

		let mut other_amount = base.clone();
		other_amount.info.amount = base.info.amount + U256::from(1u64);
		assert_ne!(base.key(), other_amount.key());

		let mut other_protocols = base.clone();
		other_protocols.config = ClassicConfig::with_protocols([Protocol::V2]);
		assert_ne!(base.key(), other_protocols.key());

		let mut other_slippage = base.clone();
		other_slippage.info.slippage_bps = 100;
		assert_ne!(base.key(), other_slippage.key());

		// request id and swapper do not change the route
		let mut other_id = base.clone();
		other_id.info.request_id = "another".to_string();
		assert_eq!(base.key(), other_id.key());
	}
}
