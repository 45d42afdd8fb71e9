//! Fixtures shared by unit and integration tests
//!
//! Enabled for this crate's own tests and, through the `test-utils` feature,
//! for the crates that depend on it.

use alloy_primitives::{address, Address, U256};

use crate::models::is_native;
use crate::quotes::{
	ClassicQuote, DutchInput, DutchLimitQuote, DutchOrderInfo, DutchOutput,
};
use crate::requests::{
	ClassicConfig, ClassicRequest, DutchLimitConfig, DutchLimitRequest, QuoteRequestInfo,
	TradeType,
};

pub const CHAIN_ID: u64 = 1;
pub const UNI: Address = address!("1f9840a85d5af5bf1d1762f925bdaddc4201f984");
pub const USDC: Address = address!("a0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
pub const WETH: Address = address!("c02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
pub const SWAPPER: Address = address!("0000000000000000000000000000000000000abc");
pub const FILLER: Address = address!("0000000000000000000000000000000000000f11");

/// UNI -> USDC on mainnet, exact input of 1e18
pub fn request_info() -> QuoteRequestInfo {
	QuoteRequestInfo {
		request_id: "test-request".to_string(),
		token_in_chain_id: CHAIN_ID,
		token_out_chain_id: CHAIN_ID,
		token_in: UNI,
		token_out: USDC,
		amount: U256::from(1_000_000_000_000_000_000u64),
		trade_type: TradeType::ExactInput,
		swapper: SWAPPER,
		slippage_bps: 50,
	}
}

pub fn classic_request() -> ClassicRequest {
	ClassicRequest::new(request_info(), ClassicConfig::default())
}

pub fn dutch_limit_request() -> DutchLimitRequest {
	DutchLimitRequest::new(request_info(), DutchLimitConfig::default())
}

/// Classic quote answering `request` with the given priced side
pub fn classic_quote_for(request: &ClassicRequest, quote: u64, gas_adjusted: u64) -> ClassicQuote {
	ClassicQuote {
		request_key: request.key(),
		request_id: request.info.request_id.clone(),
		quote_id: format!("classic-{}", quote),
		chain_id: request.info.token_in_chain_id,
		token_in: request.info.token_in,
		token_out: request.info.token_out,
		trade_type: request.info.trade_type,
		amount: request.info.amount,
		quote: U256::from(quote),
		quote_gas_adjusted: U256::from(gas_adjusted),
		gas_use_estimate: U256::from(100_000u64),
		gas_use_estimate_quote: U256::from(quote.abs_diff(gas_adjusted)),
		gas_use_estimate_usd: None,
		gas_price_wei: U256::from(10_000_000_000u64),
		block_number: 17_000_000,
		route: serde_json::Value::Array(vec![]),
		route_string: "[V3] 100.00% = UNI -- 0.3% --> USDC".to_string(),
		slippage_bps: request.info.slippage_bps,
		permit: None,
	}
}

/// Auction quote answering `request`; `amount` is the auctioned side
///
/// Native output settles in [`WETH`], as the RFQ service answers it.
pub fn dutch_limit_quote_for(request: &DutchLimitRequest, amount: u64) -> DutchLimitQuote {
	let info = &request.info;
	let token_out = if is_native(&info.token_out) {
		WETH
	} else {
		info.token_out
	};
	let (amount_in, amount_out) = match info.trade_type {
		TradeType::ExactInput => (info.amount, U256::from(amount)),
		TradeType::ExactOutput => (U256::from(amount), info.amount),
	};

	DutchLimitQuote {
		request_key: request.key(),
		request_id: info.request_id.clone(),
		quote_id: format!("dutch-{}", amount),
		chain_id: info.token_in_chain_id,
		trade_type: info.trade_type,
		filler: FILLER,
		order: DutchOrderInfo {
			swapper: info.swapper,
			nonce: U256::from(1u64),
			deadline: 1_700_000_072,
			decay_start_time: 1_700_000_000,
			decay_end_time: 1_700_000_060,
			exclusive_filler: FILLER,
			exclusivity_override_bps: request.config.exclusivity_override_bps,
			input: DutchInput {
				token: info.token_in,
				start_amount: amount_in,
				end_amount: amount_in,
			},
			output: DutchOutput {
				token: token_out,
				start_amount: amount_out,
				end_amount: amount_out,
				recipient: info.swapper,
			},
		},
		native_amount_out: None,
	}
}

pub fn classic_quote(trade_type: TradeType, quote: u64, gas_adjusted: u64) -> ClassicQuote {
	let mut request = classic_request();
	request.info.trade_type = trade_type;
	classic_quote_for(&request, quote, gas_adjusted)
}

pub fn dutch_limit_quote(trade_type: TradeType, amount: u64) -> DutchLimitQuote {
	let mut request = dutch_limit_request();
	request.info.trade_type = trade_type;
	dutch_limit_quote_for(&request, amount)
}
