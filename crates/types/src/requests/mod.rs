//! Quote request entities
//!
//! A [`QuoteRequest`] describes one swap to be quoted by one kind of quoting
//! mechanism. Requests are built once, either from a caller body or by a
//! request transformer, and are never mutated afterwards.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::u256_string;

pub mod body;
pub mod by_kind;
pub mod classic;
pub mod dutch_limit;
pub mod errors;
pub mod key;

pub use body::{parse_quote_requests, parse_slippage_bps, QuoteRequestBody};
pub use by_kind::{RequestSlots, RequestsByKind};
pub use classic::{ClassicConfig, ClassicRequest, Protocol};
pub use dutch_limit::{DutchLimitConfig, DutchLimitRequest};
pub use errors::RequestError;
pub use key::RequestKey;

/// Result type for request parsing and validation
pub type RequestResult<T> = Result<T, RequestError>;

/// Quoting mechanism a request or quote belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoutingType {
	/// On-chain route-based quoting, gas adjusted
	#[serde(rename = "CLASSIC")]
	Classic,
	/// Off-chain RFQ auction settled through a Dutch order
	#[serde(rename = "DUTCH_LIMIT")]
	DutchLimit,
}

impl RoutingType {
	/// Wire tag of the routing type
	pub fn as_str(&self) -> &'static str {
		match self {
			RoutingType::Classic => "CLASSIC",
			RoutingType::DutchLimit => "DUTCH_LIMIT",
		}
	}
}

impl fmt::Display for RoutingType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for RoutingType {
	type Err = RequestError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value {
			"CLASSIC" => Ok(RoutingType::Classic),
			"DUTCH_LIMIT" => Ok(RoutingType::DutchLimit),
			other => Err(RequestError::UnsupportedRoutingType(other.to_string())),
		}
	}
}

/// Which side of the swap the caller fixed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradeType {
	#[serde(rename = "EXACT_INPUT")]
	ExactInput,
	#[serde(rename = "EXACT_OUTPUT")]
	ExactOutput,
}

impl TradeType {
	pub fn as_str(&self) -> &'static str {
		match self {
			TradeType::ExactInput => "EXACT_INPUT",
			TradeType::ExactOutput => "EXACT_OUTPUT",
		}
	}

	pub fn opposite(&self) -> Self {
		match self {
			TradeType::ExactInput => TradeType::ExactOutput,
			TradeType::ExactOutput => TradeType::ExactInput,
		}
	}
}

impl fmt::Display for TradeType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Swap parameters shared by every routing type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestInfo {
	pub request_id: String,
	pub token_in_chain_id: u64,
	pub token_out_chain_id: u64,
	pub token_in: Address,
	pub token_out: Address,
	#[serde(with = "u256_string")]
	pub amount: U256,
	#[serde(rename = "type")]
	pub trade_type: TradeType,
	/// Address the quote is requested for
	pub swapper: Address,
	/// Slippage tolerance in basis points
	pub slippage_bps: u32,
}

/// A request for a quote of one routing type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteRequest {
	Classic(ClassicRequest),
	DutchLimit(DutchLimitRequest),
}

impl QuoteRequest {
	pub fn routing_type(&self) -> RoutingType {
		match self {
			QuoteRequest::Classic(_) => RoutingType::Classic,
			QuoteRequest::DutchLimit(_) => RoutingType::DutchLimit,
		}
	}

	pub fn info(&self) -> &QuoteRequestInfo {
		match self {
			QuoteRequest::Classic(request) => &request.info,
			QuoteRequest::DutchLimit(request) => &request.info,
		}
	}

	/// Canonical deduplication key
	pub fn key(&self) -> RequestKey {
		match self {
			QuoteRequest::Classic(request) => request.key(),
			QuoteRequest::DutchLimit(request) => request.key(),
		}
	}

	pub fn as_classic(&self) -> Option<&ClassicRequest> {
		match self {
			QuoteRequest::Classic(request) => Some(request),
			QuoteRequest::DutchLimit(_) => None,
		}
	}

	pub fn as_dutch_limit(&self) -> Option<&DutchLimitRequest> {
		match self {
			QuoteRequest::DutchLimit(request) => Some(request),
			QuoteRequest::Classic(_) => None,
		}
	}
}

impl From<ClassicRequest> for QuoteRequest {
	fn from(request: ClassicRequest) -> Self {
		QuoteRequest::Classic(request)
	}
}

impl From<DutchLimitRequest> for QuoteRequest {
	fn from(request: DutchLimitRequest) -> Self {
		QuoteRequest::DutchLimit(request)
	}
}
