//! Router construction from settings, driven against local HTTP quoters

mod mocks;

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
	extract::Query,
	routing::{get, post},
	Json, Router,
};
use mocks::{body, spawn_server, NATIVE, ONE_ETHER, USDC};
use serde_json::{json, Value};
use unified_routing::mocks::MockQuoteAdapter;
use unified_routing::types::test_utils::WETH;
use unified_routing::{
	select_best_quote, Address, BuildError, ConfigValidationError, QuoteAdapter, RouterBuilder,
	RoutingType, Settings, U256,
};

/// Routing API echoing the requested amount; 1.02 native per wrapped unit
async fn routing_api() -> String {
	let router = Router::new().route(
		"/quote",
		get(|Query(params): Query<HashMap<String, String>>| async move {
			let to_wrapped = params["tokenOutAddress"].parse::<Address>().unwrap() == WETH;
			let (quote, adjusted) = if to_wrapped {
				("1020000000000000000", "1021000000000000000")
			} else {
				("2000000000", "1990000000")
			};
			Json(json!({
				"quoteId": "routing-quote",
				"amount": params["amount"],
				"quote": quote,
				"quoteGasAdjusted": adjusted,
				"gasUseEstimate": "120000",
				"gasUseEstimateQuote": "10000000",
				"gasPriceWei": "25000000000",
				"blockNumber": "17500000",
				"route": [],
				"routeString": "[V3] 100.00%",
			}))
		}),
	);
	spawn_server(router).await
}

/// RFQ service quoting 2.1e9 out for whatever pair it is asked
async fn rfq_service() -> String {
	let router = Router::new()
		.route(
			"/quote",
			post(|Json(request): Json<Value>| async move {
				Json(json!({
					"chainId": request["tokenInChainId"],
					"requestId": request["requestId"],
					"quoteId": "rfq-quote",
					"tokenIn": request["tokenIn"],
					"amountIn": request["amount"],
					"tokenOut": request["tokenOut"],
					"amountOut": "2100000000",
					"swapper": request["swapper"],
					"filler": "0x0000000000000000000000000000000000000f11",
				}))
			}),
		)
		.route(
			"/dutch-auction/nonce",
			get(|| async { Json(json!({ "nonce": "41" })) }),
		);
	spawn_server(router).await
}

async fn settings() -> Settings {
	let mut settings = Settings::default();
	settings.quoters.routing_api.url = routing_api().await;
	let rfq = rfq_service().await;
	settings.quoters.rfq.url = rfq.clone();
	settings.quoters.rfq.nonce_url = rfq;
	settings
}

#[tokio::test]
async fn test_configured_router_quotes_over_http() {
	let router = RouterBuilder::from_config(settings().await).build().unwrap();
	assert_eq!(router.adapters().len(), 2);

	let routed = router
		.quote(&body(
			USDC,
			json!([{ "routingType": "CLASSIC" }, { "routingType": "DUTCH_LIMIT" }]),
		))
		.await
		.unwrap();

	let classic = routed[0].quote.as_ref().unwrap().as_classic().unwrap();
	assert_eq!(classic.amount, U256::from_str_radix(ONE_ETHER, 10).unwrap());
	assert_eq!(classic.quote_gas_adjusted, U256::from(1_990_000_000u64));

	let dutch = routed[1].quote.as_ref().unwrap().as_dutch_limit().unwrap();
	assert_eq!(dutch.nonce(), U256::from(42u64));
	assert_eq!(dutch.amount_out_start(), U256::from(2_100_000_000u64));

	let best = select_best_quote(routed.iter().filter_map(|r| r.quote.as_ref()), None).unwrap();
	assert_eq!(best.routing_type(), RoutingType::DutchLimit);
}

#[tokio::test]
async fn test_configured_router_normalizes_native_auction() {
	let router = RouterBuilder::from_config(settings().await).build().unwrap();

	let routed = router
		.quote(&body(NATIVE, json!([{ "routingType": "DUTCH_LIMIT" }])))
		.await
		.unwrap();

	let dutch = routed[0].quote.as_ref().unwrap().as_dutch_limit().unwrap();
	// 2.1e9 * 1.02
	assert_eq!(dutch.native_amount_out, Some(U256::from(2_142_000_000u64)));
	assert_eq!(dutch.token_out(), WETH);
}

#[tokio::test]
async fn test_custom_adapter_replaces_configured_one() {
	let router = RouterBuilder::from_config(settings().await)
		.with_adapter(Arc::new(MockQuoteAdapter::classic()))
		.build()
		.unwrap();

	let classic = router.adapters().get(RoutingType::Classic).unwrap();
	assert_eq!(classic.id(), "mock-classic");
	assert_eq!(
		router.adapters().get(RoutingType::DutchLimit).unwrap().id(),
		"rfq"
	);
}

#[test]
fn test_build_without_adapters_fails() {
	assert!(matches!(
		RouterBuilder::new().build(),
		Err(BuildError::NoAdapters)
	));
}

#[test]
fn test_build_rejects_invalid_settings() {
	let mut settings = Settings::default();
	settings.timeouts.per_quoter_ms = 0;

	assert!(matches!(
		RouterBuilder::from_config(settings).build(),
		Err(BuildError::Config(ConfigValidationError::InvalidTimeout { .. }))
	));
}
