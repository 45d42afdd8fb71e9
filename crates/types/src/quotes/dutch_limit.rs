//! Auction-based quotes and the Dutch order they settle through

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::models::u256_string;
use crate::requests::{RequestKey, TradeType};

/// Input leg of a Dutch order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutchInput {
	pub token: Address,
	#[serde(with = "u256_string")]
	pub start_amount: U256,
	#[serde(with = "u256_string")]
	pub end_amount: U256,
}

/// Output leg of a Dutch order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutchOutput {
	pub token: Address,
	#[serde(with = "u256_string")]
	pub start_amount: U256,
	#[serde(with = "u256_string")]
	pub end_amount: U256,
	pub recipient: Address,
}

/// Unsigned Dutch order the swapper signs to accept the quote
///
/// Amounts decay linearly from `start_amount` to `end_amount` between
/// `decay_start_time` and `decay_end_time`. Times are unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutchOrderInfo {
	pub swapper: Address,
	#[serde(with = "u256_string")]
	pub nonce: U256,
	pub deadline: u64,
	pub decay_start_time: u64,
	pub decay_end_time: u64,
	pub exclusive_filler: Address,
	pub exclusivity_override_bps: u32,
	pub input: DutchInput,
	pub output: DutchOutput,
}

/// Quote won in an RFQ auction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutchLimitQuote {
	pub request_key: RequestKey,
	pub request_id: String,
	pub quote_id: String,
	pub chain_id: u64,
	pub trade_type: TradeType,
	pub filler: Address,
	pub order: DutchOrderInfo,
	/// Output converted into the native asset through a back-to-native
	/// route, when one was available. The order still settles in
	/// `order.output.token`.
	#[serde(
		with = "u256_string::option",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub native_amount_out: Option<U256>,
}

impl DutchLimitQuote {
	pub fn token_in(&self) -> Address {
		self.order.input.token
	}

	pub fn token_out(&self) -> Address {
		self.order.output.token
	}

	pub fn nonce(&self) -> U256 {
		self.order.nonce
	}

	pub fn amount_in_start(&self) -> U256 {
		self.order.input.start_amount
	}

	pub fn amount_in_end(&self) -> U256 {
		self.order.input.end_amount
	}

	pub fn amount_out_start(&self) -> U256 {
		self.order.output.start_amount
	}

	pub fn amount_out_end(&self) -> U256 {
		self.order.output.end_amount
	}

	/// Copy of this quote carrying a native-equivalent output amount
	pub fn with_native_amount_out(&self, amount: U256) -> Self {
		Self {
			native_amount_out: Some(amount),
			..self.clone()
		}
	}

	/// Amount used when ranking against other quotes
	pub fn effective_amount(&self) -> U256 {
		match self.trade_type {
			TradeType::ExactInput => self.native_amount_out.unwrap_or(self.amount_out_start()),
			TradeType::ExactOutput => self.amount_in_start(),
		}
	}
}
