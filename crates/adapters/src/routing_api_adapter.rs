//! Route-based quoting through the routing API
//!
//! One `GET /quote` per request. The router prices the swap across the
//! requested protocols and reports the gas-adjusted amount alongside the
//! face quote. Permit data comes from an injected [`PermitFetcher`].

use alloy_primitives::U256;
use async_trait::async_trait;
use reqwest::Client;
use routing_types::{
	models::u256_string, AdapterError, AdapterResult, ClassicQuote, ClassicRequest, Protocol,
	Quote, QuoteAdapter, QuoteRequest, RoutingType, TradeType,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

use crate::client::{build_url, read_json, send_error, ClientConfig};
use crate::permit::{NoPermitFetcher, PermitFetcher};

pub const ROUTING_API_ADAPTER_ID: &str = "routing-api";

/// Quote payload returned by the routing API
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RoutingApiQuoteResponse {
	quote_id: String,
	#[serde(with = "u256_string")]
	amount: U256,
	#[serde(with = "u256_string")]
	quote: U256,
	#[serde(with = "u256_string")]
	quote_gas_adjusted: U256,
	#[serde(with = "u256_string")]
	gas_use_estimate: U256,
	#[serde(with = "u256_string")]
	gas_use_estimate_quote: U256,
	#[serde(rename = "gasUseEstimateUSD", default)]
	gas_use_estimate_usd: Option<String>,
	#[serde(with = "u256_string")]
	gas_price_wei: U256,
	block_number: String,
	route: serde_json::Value,
	route_string: String,
}

/// Adapter for the on-chain routing API
#[derive(Debug)]
pub struct RoutingApiAdapter {
	id: String,
	base_url: String,
	timeout_ms: u64,
	client: Client,
	permit_fetcher: Arc<dyn PermitFetcher>,
}

impl RoutingApiAdapter {
	pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> AdapterResult<Self> {
		let base_url = base_url.into();
		// fail on a bad URL at construction rather than per request
		build_url(&base_url, "quote")?;

		Ok(Self {
			id: ROUTING_API_ADAPTER_ID.to_string(),
			base_url,
			timeout_ms,
			client: ClientConfig::new(timeout_ms).build()?,
			permit_fetcher: Arc::new(NoPermitFetcher),
		})
	}

	pub fn with_permit_fetcher(mut self, permit_fetcher: Arc<dyn PermitFetcher>) -> Self {
		self.permit_fetcher = permit_fetcher;
		self
	}

	fn query_params(request: &ClassicRequest) -> Vec<(&'static str, String)> {
		let info = &request.info;
		let trade_type = match info.trade_type {
			TradeType::ExactInput => "exactIn",
			TradeType::ExactOutput => "exactOut",
		};
		let protocols = request
			.config
			.sorted_protocols()
			.iter()
			.map(|p| p.as_str().to_ascii_lowercase())
			.collect::<Vec<_>>()
			.join(",");

		let mut params = vec![
			("tokenInAddress", info.token_in.to_string()),
			("tokenInChainId", info.token_in_chain_id.to_string()),
			("tokenOutAddress", info.token_out.to_string()),
			("tokenOutChainId", info.token_out_chain_id.to_string()),
			("amount", info.amount.to_string()),
			("type", trade_type.to_string()),
			("protocols", protocols),
		];
		if let Some(gas_price) = request.config.gas_price_wei {
			params.push(("gasPriceWei", gas_price.to_string()));
		}
		params
	}

	async fn fetch_classic(&self, request: &ClassicRequest) -> AdapterResult<ClassicQuote> {
		let url = build_url(&self.base_url, "quote")?;

		debug!(
			adapter_id = %self.id,
			request_id = %request.info.request_id,
			protocols = ?request.config.protocols.iter().map(Protocol::as_str).collect::<Vec<_>>(),
			"Requesting classic quote from {}",
			url
		);

		let response = self
			.client
			.get(url)
			.query(&Self::query_params(request))
			.send()
			.await
			.map_err(|e| send_error(e, self.timeout_ms))?;
		let body: RoutingApiQuoteResponse = read_json(response, "routing API quote").await?;

		let block_number = body.block_number.parse::<u64>().map_err(|_| {
			AdapterError::invalid_response(format!("Invalid blockNumber '{}'", body.block_number))
		})?;
		if body.amount != request.info.amount {
			return Err(AdapterError::invalid_response(format!(
				"Quoted amount {} does not match requested amount {}",
				body.amount, request.info.amount
			)));
		}

		let permit = self.permit_fetcher.fetch_permit(request).await?;

		Ok(ClassicQuote {
			request_key: request.key(),
			request_id: request.info.request_id.clone(),
			quote_id: body.quote_id,
			chain_id: request.info.token_in_chain_id,
			token_in: request.info.token_in,
			token_out: request.info.token_out,
			trade_type: request.info.trade_type,
			amount: body.amount,
			quote: body.quote,
			quote_gas_adjusted: body.quote_gas_adjusted,
			gas_use_estimate: body.gas_use_estimate,
			gas_use_estimate_quote: body.gas_use_estimate_quote,
			gas_use_estimate_usd: body.gas_use_estimate_usd,
			gas_price_wei: body.gas_price_wei,
			block_number,
			route: body.route,
			route_string: body.route_string,
			slippage_bps: request.info.slippage_bps,
			permit,
		})
	}
}

#[async_trait]
impl QuoteAdapter for RoutingApiAdapter {
	fn id(&self) -> &str {
		&self.id
	}

	fn routing_type(&self) -> RoutingType {
		RoutingType::Classic
	}

	async fn fetch_quote(&self, request: &QuoteRequest) -> AdapterResult<Quote> {
		let classic = request
			.as_classic()
			.ok_or_else(|| AdapterError::UnsupportedRequest {
				adapter_id: self.id.clone(),
				routing_type: request.routing_type(),
			})?;

		let quote = self.fetch_classic(classic).await?;
		debug!(
			adapter_id = %self.id,
			quote_id = %quote.quote_id,
			quote = %quote.quote,
			quote_gas_adjusted = %quote.quote_gas_adjusted,
			"Classic quote received"
		);
		Ok(Quote::Classic(quote))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::permit::MockPermitFetcher;
	use crate::test_server::spawn_server;
	use axum::{extract::Query, routing::get, Json, Router};
	use routing_types::{test_utils::classic_request, PermitData};
	use serde_json::json;
	use std::collections::HashMap;
	use std::sync::Mutex;

	fn quote_body(amount: &str) -> serde_json::Value {
		json!({
			"quoteId": "quote-1",
			"amount": amount,
			"quote": "2000000000",
			"quoteGasAdjusted": "1990000000",
			"gasUseEstimate": "120000",
			"gasUseEstimateQuote": "10000000",
			"gasUseEstimateUSD": "10.0",
			"gasPriceWei": "25000000000",
			"blockNumber": "17500000",
			"route": [],
			"routeString": "[V3] 100.00% = UNI -- 0.3% --> USDC",
		})
	}

	async fn routing_api(body: serde_json::Value) -> (String, Arc<Mutex<Option<HashMap<String, String>>>>) {
		let seen = Arc::new(Mutex::new(None));
		let recorder = seen.clone();
		let router = Router::new().route(
			"/quote",
			get(move |Query(params): Query<HashMap<String, String>>| {
				let body = body.clone();
				let recorder = recorder.clone();
				async move {
					*recorder.lock().unwrap() = Some(params);
					Json(body)
				}
			}),
		);
		(spawn_server(router).await, seen)
	}

	#[tokio::test]
	async fn test_returns_classic_quote() {
		let request = classic_request();
		let (url, seen) = routing_api(quote_body(&request.info.amount.to_string())).await;
		let adapter = RoutingApiAdapter::new(url, 2_000).unwrap();

		let quote = adapter
			.quote(&QuoteRequest::from(request.clone()))
			.await
			.unwrap();
		let quote = quote.as_classic().unwrap();
		assert_eq!(quote.request_key, request.key());
		assert_eq!(quote.quote, U256::from(2_000_000_000u64));
		assert_eq!(quote.effective_amount(), U256::from(1_990_000_000u64));
		assert_eq!(quote.block_number, 17_500_000);
		assert!(quote.permit.is_none());

		let params = seen.lock().unwrap().clone().unwrap();
		assert_eq!(params["type"], "exactIn");
		assert_eq!(params["protocols"], "v2,v3,mixed");
		assert_eq!(params["amount"], request.info.amount.to_string());
		assert!(!params.contains_key("gasPriceWei"));
	}

	#[tokio::test]
	async fn test_malformed_response_yields_none() {
		let request = classic_request();
		let mut body = quote_body(&request.info.amount.to_string());
		body.as_object_mut().unwrap().remove("quoteGasAdjusted");
		let (url, _) = routing_api(body).await;
		let adapter = RoutingApiAdapter::new(url, 2_000).unwrap();

		assert!(adapter.quote(&QuoteRequest::from(request)).await.is_none());
	}

	#[tokio::test]
	async fn test_attaches_permit_and_absorbs_permit_failure() {
		let request = classic_request();
		let (url, _) = routing_api(quote_body(&request.info.amount.to_string())).await;

		let permit = PermitData {
			owner: request.info.swapper,
			token: request.info.token_in,
			spender: alloy_primitives::Address::repeat_byte(0x22),
			amount: request.info.amount,
			nonce: U256::from(0u64),
			expiration: 1_700_000_000,
			sig_deadline: 1_700_000_000,
		};
		let mut fetcher = MockPermitFetcher::new();
		let expected = permit.clone();
		fetcher
			.expect_fetch_permit()
			.times(1)
			.returning(move |_| Ok(Some(expected.clone())));
		let adapter = RoutingApiAdapter::new(url.clone(), 2_000)
			.unwrap()
			.with_permit_fetcher(Arc::new(fetcher));
		let quote = adapter
			.quote(&QuoteRequest::from(request.clone()))
			.await
			.unwrap();
		assert_eq!(quote.as_classic().unwrap().permit, Some(permit));

		let mut failing = MockPermitFetcher::new();
		failing.expect_fetch_permit().returning(|_| {
			Err(AdapterError::Permit {
				reason: "rpc unavailable".to_string(),
			})
		});
		let adapter = RoutingApiAdapter::new(url, 2_000)
			.unwrap()
			.with_permit_fetcher(Arc::new(failing));
		assert!(adapter.quote(&QuoteRequest::from(request)).await.is_none());
	}

	#[tokio::test]
	async fn test_rejects_auction_requests() {
		let adapter = RoutingApiAdapter::new("http://127.0.0.1:1", 500).unwrap();
		let request = QuoteRequest::from(routing_types::test_utils::dutch_limit_request());
		assert!(matches!(
			adapter.fetch_quote(&request).await,
			Err(AdapterError::UnsupportedRequest { .. })
		));
	}

	#[tokio::test]
	async fn test_unreachable_service_yields_none() {
		let adapter = RoutingApiAdapter::new("http://127.0.0.1:1", 500).unwrap();
		let request = QuoteRequest::from(classic_request());
		assert!(adapter.quote(&request).await.is_none());
	}
}
