//! Shared helpers for integration tests

#![allow(dead_code)]

use axum::Router;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use unified_routing::types::{
	constants::DEFAULT_PROTOCOLS, test_utils::WETH, ClassicConfig, ClassicRequest,
	DutchLimitRequest, QuoteRequestInfo, TradeType, NATIVE_ADDRESS, WRAPPED_NATIVE_UNIT,
};
use unified_routing::QuoteRequestBody;

pub const UNI: &str = "0x1f9840a85d5af5bf1d1762f925bdaddc4201f984";
pub const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
pub const NATIVE: &str = "0x0000000000000000000000000000000000000000";
pub const SWAPPER: &str = "0x0000000000000000000000000000000000000abc";
pub const ONE_ETHER: &str = "1000000000000000000";

/// Serve `router` on an ephemeral port, returning its base URL
pub async fn spawn_server(router: Router) -> String {
	let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	tokio::spawn(async move {
		axum::serve(listener, router).await.unwrap();
	});
	format!("http://{}", addr)
}

pub fn body_json(token_out: &str, configs: Value) -> Value {
	json!({
		"requestId": "e2e-request",
		"tokenInChainId": 1,
		"tokenOutChainId": 1,
		"tokenIn": UNI,
		"tokenOut": token_out,
		"amount": ONE_ETHER,
		"type": "EXACT_INPUT",
		"swapper": SWAPPER,
		"slippageTolerance": "0.5",
		"configs": configs,
	})
}

pub fn body(token_out: &str, configs: Value) -> QuoteRequestBody {
	serde_json::from_value(body_json(token_out, configs)).unwrap()
}

/// Rate request the router injects for an auction paying out native
pub fn back_to_native_request(auction: &DutchLimitRequest) -> ClassicRequest {
	ClassicRequest::new(
		QuoteRequestInfo {
			request_id: auction.info.request_id.clone(),
			token_in_chain_id: auction.info.token_out_chain_id,
			token_out_chain_id: auction.info.token_out_chain_id,
			token_in: NATIVE_ADDRESS,
			token_out: WETH,
			amount: WRAPPED_NATIVE_UNIT,
			trade_type: TradeType::ExactOutput,
			swapper: auction.info.swapper,
			slippage_bps: auction.info.slippage_bps,
		},
		ClassicConfig::with_protocols(DEFAULT_PROTOCOLS),
	)
}
