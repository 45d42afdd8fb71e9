//! Caller request body and its conversion into typed requests

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{
	ClassicConfig, ClassicRequest, DutchLimitConfig, DutchLimitRequest, Protocol, QuoteRequest,
	QuoteRequestInfo, RequestError, RequestResult, RoutingType, TradeType,
};
use crate::constants::{
	BPS_DENOMINATOR, DEFAULT_SLIPPAGE_BPS, MAX_AUCTION_PERIOD_SECS, MAX_DEADLINE_BUFFER_SECS,
};
use crate::models::parse_amount;

/// Body a caller submits to get quotes for one swap
///
/// Shared swap fields sit at the top level; `configs` holds one entry per
/// routing type, each tagged with `routingType`. Configs stay untyped until
/// the tag is read so an unknown tag surfaces as
/// [`RequestError::UnsupportedRoutingType`] rather than a generic parse error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequestBody {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub request_id: Option<String>,
	pub token_in_chain_id: u64,
	pub token_out_chain_id: u64,
	pub token_in: Address,
	pub token_out: Address,
	pub amount: String,
	#[serde(rename = "type")]
	pub trade_type: TradeType,
	#[serde(alias = "offerer")]
	pub swapper: Address,
	/// Percent, e.g. `"0.5"` for 0.5%
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub slippage_tolerance: Option<String>,
	pub configs: Vec<serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClassicConfigBody {
	#[serde(default)]
	protocols: Option<Vec<String>>,
	#[serde(default)]
	gas_price_wei: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DutchLimitConfigBody {
	#[serde(default)]
	exclusivity_override_bps: Option<u32>,
	#[serde(default)]
	auction_period_secs: Option<u64>,
	#[serde(default)]
	deadline_buffer_secs: Option<u64>,
}

impl QuoteRequestBody {
	/// Validate the shared swap fields
	pub fn request_info(&self) -> RequestResult<QuoteRequestInfo> {
		for chain_id in [self.token_in_chain_id, self.token_out_chain_id] {
			if chain_id == 0 {
				return Err(RequestError::InvalidChainId { chain_id });
			}
		}

		let amount = parse_amount(&self.amount).map_err(|_| RequestError::InvalidAmount {
			value: self.amount.clone(),
		})?;
		if amount.is_zero() {
			return Err(RequestError::InvalidAmount {
				value: self.amount.clone(),
			});
		}

		let slippage_bps = match &self.slippage_tolerance {
			Some(value) => parse_slippage_bps(value)?,
			None => DEFAULT_SLIPPAGE_BPS,
		};

		let request_id = match &self.request_id {
			Some(id) if !id.trim().is_empty() => id.clone(),
			_ => uuid::Uuid::new_v4().to_string(),
		};

		Ok(QuoteRequestInfo {
			request_id,
			token_in_chain_id: self.token_in_chain_id,
			token_out_chain_id: self.token_out_chain_id,
			token_in: self.token_in,
			token_out: self.token_out,
			amount,
			trade_type: self.trade_type,
			swapper: self.swapper,
			slippage_bps,
		})
	}
}

/// Build one typed request per config entry, in body order
pub fn parse_quote_requests(body: &QuoteRequestBody) -> RequestResult<Vec<QuoteRequest>> {
	if body.configs.is_empty() {
		return Err(RequestError::EmptyConfigs);
	}

	let info = body.request_info()?;
	let mut seen = HashSet::new();
	let mut requests = Vec::with_capacity(body.configs.len());

	for config in &body.configs {
		let routing_type = routing_type_of(config)?;
		if !seen.insert(routing_type) {
			return Err(RequestError::DuplicateRoutingType(routing_type));
		}

		let request = match routing_type {
			RoutingType::Classic => {
				QuoteRequest::Classic(ClassicRequest::new(info.clone(), classic_config(config)?))
			},
			RoutingType::DutchLimit => QuoteRequest::DutchLimit(DutchLimitRequest::new(
				info.clone(),
				dutch_limit_config(config)?,
			)),
		};
		requests.push(request);
	}

	Ok(requests)
}

fn routing_type_of(config: &serde_json::Value) -> RequestResult<RoutingType> {
	config
		.get("routingType")
		.and_then(|tag| tag.as_str())
		.ok_or_else(|| RequestError::MissingField {
			field: "routingType".to_string(),
		})?
		.parse()
}

fn classic_config(value: &serde_json::Value) -> RequestResult<ClassicConfig> {
	let body: ClassicConfigBody =
		serde_json::from_value(value.clone()).map_err(|e| RequestError::InvalidConfig {
			routing_type: RoutingType::Classic,
			reason: e.to_string(),
		})?;

	let mut config = ClassicConfig::default();

	if let Some(protocols) = body.protocols {
		if protocols.is_empty() {
			return Err(RequestError::InvalidConfig {
				routing_type: RoutingType::Classic,
				reason: "protocols cannot be empty".to_string(),
			});
		}
		config.protocols = protocols
			.iter()
			.map(|p| p.parse::<Protocol>())
			.collect::<RequestResult<Vec<_>>>()?;
	}

	if let Some(gas_price) = body.gas_price_wei {
		let price: U256 = parse_amount(&gas_price).map_err(|e| RequestError::InvalidConfig {
			routing_type: RoutingType::Classic,
			reason: format!("gasPriceWei: {}", e),
		})?;
		config.gas_price_wei = Some(price);
	}

	Ok(config)
}

fn dutch_limit_config(value: &serde_json::Value) -> RequestResult<DutchLimitConfig> {
	let body: DutchLimitConfigBody =
		serde_json::from_value(value.clone()).map_err(|e| RequestError::InvalidConfig {
			routing_type: RoutingType::DutchLimit,
			reason: e.to_string(),
		})?;

	let invalid = |reason: String| RequestError::InvalidConfig {
		routing_type: RoutingType::DutchLimit,
		reason,
	};

	let mut config = DutchLimitConfig::default();

	if let Some(bps) = body.exclusivity_override_bps {
		if bps > BPS_DENOMINATOR {
			return Err(invalid(format!(
				"exclusivityOverrideBps {} exceeds {}",
				bps, BPS_DENOMINATOR
			)));
		}
		config.exclusivity_override_bps = bps;
	}

	if let Some(period) = body.auction_period_secs {
		if period == 0 || period > MAX_AUCTION_PERIOD_SECS {
			return Err(invalid(format!(
				"auctionPeriodSecs must be between 1 and {}",
				MAX_AUCTION_PERIOD_SECS
			)));
		}
		config.auction_period_secs = period;
	}

	if let Some(buffer) = body.deadline_buffer_secs {
		if buffer > MAX_DEADLINE_BUFFER_SECS {
			return Err(invalid(format!(
				"deadlineBufferSecs must be at most {}",
				MAX_DEADLINE_BUFFER_SECS
			)));
		}
		config.deadline_buffer_secs = buffer;
	}

	Ok(config)
}

/// Convert a percent string with at most two decimals into basis points
pub fn parse_slippage_bps(value: &str) -> RequestResult<u32> {
	let invalid = || RequestError::InvalidSlippage {
		value: value.to_string(),
	};

	let (whole, fraction) = match value.trim().split_once('.') {
		Some((whole, fraction)) => (whole, fraction),
		None => (value.trim(), ""),
	};

	let digits_only = |s: &str| s.chars().all(|c| c.is_ascii_digit());
	if whole.is_empty() || !digits_only(whole) || !digits_only(fraction) || fraction.len() > 2 {
		return Err(invalid());
	}

	let whole: u32 = whole.parse().map_err(|_| invalid())?;
	let fraction: u32 = if fraction.is_empty() {
		0
	} else {
		format!("{:0<2}", fraction).parse().map_err(|_| invalid())?
	};

	let bps = whole
		.checked_mul(100)
		.and_then(|bps| bps.checked_add(fraction))
		.ok_or_else(invalid)?;
	if bps > BPS_DENOMINATOR {
		return Err(invalid());
	}

	Ok(bps)
}
