//! Auction-based (Dutch limit) requests

use serde::{Deserialize, Serialize};

use super::{QuoteRequestInfo, RequestKey, RoutingType};
use crate::constants::{
	DEFAULT_AUCTION_PERIOD_SECS, DEFAULT_DEADLINE_BUFFER_SECS, DEFAULT_EXCLUSIVITY_OVERRIDE_BPS,
};

/// Auction timing and exclusivity parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DutchLimitConfig {
	pub exclusivity_override_bps: u32,
	pub auction_period_secs: u64,
	pub deadline_buffer_secs: u64,
}

impl Default for DutchLimitConfig {
	fn default() -> Self {
		Self {
			exclusivity_override_bps: DEFAULT_EXCLUSIVITY_OVERRIDE_BPS,
			auction_period_secs: DEFAULT_AUCTION_PERIOD_SECS,
			deadline_buffer_secs: DEFAULT_DEADLINE_BUFFER_SECS,
		}
	}
}

/// Request for an RFQ auction quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutchLimitRequest {
	pub info: QuoteRequestInfo,
	pub config: DutchLimitConfig,
}

impl DutchLimitRequest {
	pub fn new(info: QuoteRequestInfo, config: DutchLimitConfig) -> Self {
		Self { info, config }
	}

	/// Swapper, slippage and auction parameters all end up in the signed order
	pub fn key(&self) -> RequestKey {
		RequestKey::new(
			RoutingType::DutchLimit,
			&self.info,
			&format!(
				"{}:{}:{}:{}:{}",
				self.info.swapper,
				self.info.slippage_bps,
				self.config.exclusivity_override_bps,
				self.config.auction_period_secs,
				self.config.deadline_buffer_secs
			),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_utils::{classic_request, dutch_limit_request};
	use alloy_primitives::Address;

	#[test]
	fn test_key_is_distinct_from_classic_key() {
		let dutch = dutch_limit_request();
		let classic = classic_request();
		assert_eq!(dutch.info, classic.info);
		assert_ne!(dutch.key(), classic.key());
		assert!(dutch.key().as_str().starts_with("DUTCH_LIMIT:"));
	}

	#[test]
	fn test_key_depends_on_swapper() {
		let a = dutch_limit_request();
		let mut b = a.clone();
		b.info.swapper = Address::repeat_byte(0x42);
		assert_ne!(a.key(), b.key());
	}

	#[test]
	fn test_key_depends_on_order_parameters() {
		let base = dutch_limit_request();

		let mut other_slippage = base.clone();
		other_slippage.info.slippage_bps = 100;
		assert_ne!(base.key(), other_slippage.key());

		let mut other_period = base.clone();
		other_period.config.auction_period_secs = 120;
		assert_ne!(base.key(), other_period.key());

		let mut other_exclusivity = base.clone();
		other_exclusivity.config.exclusivity_override_bps = 0;
		assert_ne!(base.key(), other_exclusivity.key());

		let mut other_buffer = base.clone();
		other_buffer.config.deadline_buffer_secs = 30;
		assert_ne!(base.key(), other_buffer.key());
	}
}
