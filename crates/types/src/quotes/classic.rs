//! Route-based quotes

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::models::u256_string;
use crate::requests::{RequestKey, TradeType};

/// Token approval the swapper signs so the router can pull the input token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitData {
	pub owner: Address,
	pub token: Address,
	pub spender: Address,
	#[serde(with = "u256_string")]
	pub amount: U256,
	#[serde(with = "u256_string")]
	pub nonce: U256,
	/// Unix seconds
	pub expiration: u64,
	/// Unix seconds
	pub sig_deadline: u64,
}

/// Quote for an on-chain routed swap
///
/// `amount` is the fixed side of the trade and `quote` the side the router
/// priced. `quote_gas_adjusted` folds the estimated execution cost into
/// `quote`: lower output for exact-input, higher input for exact-output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassicQuote {
	pub request_key: RequestKey,
	pub request_id: String,
	pub quote_id: String,
	pub chain_id: u64,
	pub token_in: Address,
	pub token_out: Address,
	pub trade_type: TradeType,
	#[serde(with = "u256_string")]
	pub amount: U256,
	#[serde(with = "u256_string")]
	pub quote: U256,
	#[serde(with = "u256_string")]
	pub quote_gas_adjusted: U256,
	#[serde(with = "u256_string")]
	pub gas_use_estimate: U256,
	#[serde(with = "u256_string")]
	pub gas_use_estimate_quote: U256,
	#[serde(rename = "gasUseEstimateUSD", skip_serializing_if = "Option::is_none")]
	pub gas_use_estimate_usd: Option<String>,
	#[serde(with = "u256_string")]
	pub gas_price_wei: U256,
	pub block_number: u64,
	pub route: serde_json::Value,
	pub route_string: String,
	pub slippage_bps: u32,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub permit: Option<PermitData>,
}

impl ClassicQuote {
	pub fn amount_in(&self) -> U256 {
		match self.trade_type {
			TradeType::ExactInput => self.amount,
			TradeType::ExactOutput => self.quote,
		}
	}

	pub fn amount_out(&self) -> U256 {
		match self.trade_type {
			TradeType::ExactInput => self.quote,
			TradeType::ExactOutput => self.amount,
		}
	}

	/// Amount used when ranking against other quotes
	pub fn effective_amount(&self) -> U256 {
		self.quote_gas_adjusted
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_utils::classic_quote;

	#[test]
	fn test_amount_sides_follow_trade_type() {
		let quote = classic_quote(TradeType::ExactInput, 1_000, 980);
		assert_eq!(quote.amount_in(), quote.amount);
		assert_eq!(quote.amount_out(), U256::from(1_000u64));
		assert_eq!(quote.effective_amount(), U256::from(980u64));

		let quote = classic_quote(TradeType::ExactOutput, 1_000, 1_020);
		assert_eq!(quote.amount_in(), U256::from(1_000u64));
		assert_eq!(quote.amount_out(), quote.amount);
		assert_eq!(quote.effective_amount(), U256::from(1_020u64));
	}
}
