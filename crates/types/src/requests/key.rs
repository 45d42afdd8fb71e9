//! Request deduplication keys

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use super::{QuoteRequestInfo, RoutingType};

/// Deterministic key derived from every field that affects a quote
///
/// Two requests with the same key are interchangeable: only one of them is
/// dispatched and the resulting quote is shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestKey(String);

impl RequestKey {
	/// `<ROUTING_TYPE>:<chainIn>:<chainOut>:<tokenIn>:<tokenOut>:<amount>:<type>:<suffix>`
	pub(crate) fn new(routing_type: RoutingType, info: &QuoteRequestInfo, suffix: &str) -> Self {
		Self(format!(
			"{}:{}:{}:{}:{}:{}:{}:{}",
			routing_type,
			info.token_in_chain_id,
			info.token_out_chain_id,
			info.token_in,
			info.token_out,
			info.amount,
			info.trade_type,
			suffix
		))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for RequestKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Borrow<str> for RequestKey {
	fn borrow(&self) -> &str {
		&self.0
	}
}
