//! Auction-based quoting through the RFQ service
//!
//! A quote is the result of two calls issued concurrently: `POST /quote` to
//! run the auction and `GET /dutch-auction/nonce` to find the swapper's next
//! order nonce. The nonce lookup never fails the quote; when it is
//! unavailable a random nonce is used instead.
//!
//! Orders cannot pay out the native asset directly. A request for native
//! output is auctioned and settled in the chain's wrapped-native token.

use alloy_primitives::{Address, U256};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use routing_types::{
	constants::BPS_DENOMINATOR, is_native, models::u256_string, parse_amount, AdapterError,
	AdapterResult, DutchInput, DutchLimitQuote, DutchLimitRequest, DutchOrderInfo, DutchOutput,
	Quote, QuoteAdapter, QuoteRequest, RoutingType, SecretString, TradeType, WrappedNativeTable,
};
use std::sync::Arc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::client::{build_url, read_json, send_error, AuthConfig, ClientConfig, API_KEY_HEADER};

pub const RFQ_ADAPTER_ID: &str = "rfq";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct RfqQuoteRequest {
	request_id: String,
	token_in_chain_id: u64,
	token_out_chain_id: u64,
	swapper: Address,
	token_in: Address,
	token_out: Address,
	#[serde(with = "u256_string")]
	amount: U256,
	#[serde(rename = "type")]
	trade_type: TradeType,
}

/// Auction result; every field is required
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RfqQuoteResponse {
	chain_id: u64,
	request_id: String,
	quote_id: String,
	token_in: Address,
	#[serde(with = "u256_string")]
	amount_in: U256,
	token_out: Address,
	#[serde(with = "u256_string")]
	amount_out: U256,
	swapper: Address,
	filler: Address,
}

#[derive(Debug, Clone, Deserialize)]
struct NonceResponse {
	#[serde(default)]
	nonce: Option<String>,
}

/// Adapter for the off-chain RFQ auction
#[derive(Debug)]
pub struct RfqAdapter {
	id: String,
	quote_url: String,
	nonce_url: String,
	timeout_ms: u64,
	client: Client,
	wrapped_native: Arc<WrappedNativeTable>,
}

impl RfqAdapter {
	pub fn new(
		quote_url: impl Into<String>,
		nonce_url: impl Into<String>,
		api_key: Option<SecretString>,
		timeout_ms: u64,
	) -> AdapterResult<Self> {
		let quote_url = quote_url.into();
		let nonce_url = nonce_url.into();
		build_url(&quote_url, "quote")?;
		build_url(&nonce_url, "dutch-auction/nonce")?;

		let client = ClientConfig::new(timeout_ms)
			.with_auth(AuthConfig::api_key(API_KEY_HEADER, api_key.as_ref()))
			.build()?;

		Ok(Self {
			id: RFQ_ADAPTER_ID.to_string(),
			quote_url,
			nonce_url,
			timeout_ms,
			client,
			wrapped_native: Arc::new(WrappedNativeTable::with_defaults()),
		})
	}

	/// Table used to settle native-output requests in the wrapped token
	pub fn with_wrapped_native(mut self, wrapped_native: Arc<WrappedNativeTable>) -> Self {
		self.wrapped_native = wrapped_native;
		self
	}

	/// Output token the order settles in
	fn settlement_token_out(&self, request: &DutchLimitRequest) -> AdapterResult<Address> {
		let info = &request.info;
		if !is_native(&info.token_out) {
			return Ok(info.token_out);
		}
		self.wrapped_native
			.get(info.token_out_chain_id)
			.ok_or_else(|| AdapterError::NoQuote {
				reason: format!(
					"no wrapped native token known for chain {}",
					info.token_out_chain_id
				),
			})
	}

	async fn post_quote(
		&self,
		request: &DutchLimitRequest,
		token_out: Address,
	) -> AdapterResult<RfqQuoteResponse> {
		let info = &request.info;
		let url = build_url(&self.quote_url, "quote")?;
		let payload = RfqQuoteRequest {
			request_id: info.request_id.clone(),
			token_in_chain_id: info.token_in_chain_id,
			token_out_chain_id: info.token_out_chain_id,
			swapper: info.swapper,
			token_in: info.token_in,
			token_out,
			amount: info.amount,
			trade_type: info.trade_type,
		};

		debug!(
			adapter_id = %self.id,
			request_id = %info.request_id,
			"Requesting RFQ quote from {}",
			url
		);

		let response = self
			.client
			.post(url)
			.json(&payload)
			.send()
			.await
			.map_err(|e| send_error(e, self.timeout_ms))?;
		read_json(response, "RFQ quote").await
	}

	async fn fetch_nonce(&self, swapper: Address, chain_id: u64) -> AdapterResult<U256> {
		let url = build_url(&self.nonce_url, "dutch-auction/nonce")?;
		let response = self
			.client
			.get(url)
			.query(&[
				("address", swapper.to_string()),
				("chainId", chain_id.to_string()),
			])
			.send()
			.await
			.map_err(|e| send_error(e, self.timeout_ms))?;
		let body: NonceResponse = read_json(response, "nonce lookup").await?;

		let current = body
			.nonce
			.ok_or_else(|| AdapterError::invalid_response("nonce lookup returned no nonce"))?;
		let current = parse_amount(&current).map_err(AdapterError::invalid_response)?;

		current
			.checked_add(U256::from(1u64))
			.ok_or_else(|| AdapterError::invalid_response("nonce overflow"))
	}

	/// Next nonce for the swapper, or a random one when the lookup fails
	async fn resolve_nonce(&self, swapper: Address, chain_id: u64) -> U256 {
		match self.fetch_nonce(swapper, chain_id).await {
			Ok(nonce) => nonce,
			Err(e) => {
				warn!(
					adapter_id = %self.id,
					%swapper,
					chain_id,
					"Nonce lookup failed, using a random nonce: {}",
					e
				);
				random_nonce()
			},
		}
	}

	async fn fetch_dutch_limit(&self, request: &DutchLimitRequest) -> AdapterResult<DutchLimitQuote> {
		let info = &request.info;
		let token_out = self.settlement_token_out(request)?;
		let (response, nonce) = tokio::join!(
			self.post_quote(request, token_out),
			self.resolve_nonce(info.swapper, info.token_in_chain_id)
		);
		let response = response?;

		// a native request must be answered in the wrapped token
		let settles_out = if is_native(&info.token_out) {
			self.wrapped_native
				.is_wrapped_native(info.token_out_chain_id, &response.token_out)
		} else {
			response.token_out == info.token_out
		};
		if response.token_in != info.token_in || !settles_out {
			return Err(AdapterError::invalid_response(format!(
				"RFQ quote {} is for a different token pair",
				response.quote_id
			)));
		}

		Ok(build_quote(request, response, nonce, unix_now()))
	}
}

#[async_trait]
impl QuoteAdapter for RfqAdapter {
	fn id(&self) -> &str {
		&self.id
	}

	fn routing_type(&self) -> RoutingType {
		RoutingType::DutchLimit
	}

	async fn fetch_quote(&self, request: &QuoteRequest) -> AdapterResult<Quote> {
		let dutch = request
			.as_dutch_limit()
			.ok_or_else(|| AdapterError::UnsupportedRequest {
				adapter_id: self.id.clone(),
				routing_type: request.routing_type(),
			})?;

		let quote = self.fetch_dutch_limit(dutch).await?;
		debug!(
			adapter_id = %self.id,
			quote_id = %quote.quote_id,
			filler = %quote.filler,
			nonce = %quote.nonce(),
			"RFQ quote received"
		);
		Ok(Quote::DutchLimit(quote))
	}
}

/// Uniform random nonce in `1..=U256::MAX - 1`
fn random_nonce() -> U256 {
	let bytes: [u8; 32] = rand::random();
	U256::from_be_bytes(bytes).clamp(U256::from(1u64), U256::MAX - U256::from(1u64))
}

fn unix_now() -> u64 {
	u64::try_from(Utc::now().timestamp()).unwrap_or_default()
}

/// Apply slippage to the side of the order the swapper did not fix
fn with_slippage(amount: U256, slippage_bps: u32, trade_type: TradeType) -> U256 {
	let denominator = U256::from(BPS_DENOMINATOR);
	let slippage = U256::from(slippage_bps.min(BPS_DENOMINATOR));
	match trade_type {
		TradeType::ExactInput => amount.saturating_mul(denominator - slippage) / denominator,
		TradeType::ExactOutput => amount.saturating_mul(denominator + slippage) / denominator,
	}
}

fn build_quote(
	request: &DutchLimitRequest,
	response: RfqQuoteResponse,
	nonce: U256,
	now: u64,
) -> DutchLimitQuote {
	let info = &request.info;
	let config = &request.config;
	let decay_end_time = now + config.auction_period_secs;

	let (amount_in_end, amount_out_end) = match info.trade_type {
		TradeType::ExactInput => (
			response.amount_in,
			with_slippage(response.amount_out, info.slippage_bps, info.trade_type),
		),
		TradeType::ExactOutput => (
			with_slippage(response.amount_in, info.slippage_bps, info.trade_type),
			response.amount_out,
		),
	};

	DutchLimitQuote {
		request_key: request.key(),
		request_id: info.request_id.clone(),
		quote_id: response.quote_id,
		chain_id: response.chain_id,
		trade_type: info.trade_type,
		filler: response.filler,
		order: DutchOrderInfo {
			swapper: response.swapper,
			nonce,
			deadline: decay_end_time + config.deadline_buffer_secs,
			decay_start_time: now,
			decay_end_time,
			exclusive_filler: response.filler,
			exclusivity_override_bps: config.exclusivity_override_bps,
			input: DutchInput {
				token: response.token_in,
				start_amount: response.amount_in,
				end_amount: amount_in_end,
			},
			output: DutchOutput {
				token: response.token_out,
				start_amount: response.amount_out,
				end_amount: amount_out_end,
				recipient: response.swapper,
			},
		},
		native_amount_out: None,
	}
}
