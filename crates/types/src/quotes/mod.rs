//! Quote entities
//!
//! A [`Quote`] is produced by a quoting adapter for exactly one request and is
//! never mutated afterwards. It refers back to its request through
//! [`RequestKey`] only; it does not own the request.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod classic;
pub mod comparison;
pub mod dutch_limit;
pub mod errors;

pub use classic::{ClassicQuote, PermitData};
pub use comparison::{compare_quotes, select_best_quote};
pub use dutch_limit::{DutchInput, DutchLimitQuote, DutchOrderInfo, DutchOutput};
pub use errors::QuoteError;

use crate::requests::{RequestKey, RoutingType, TradeType};

/// Result type for quote operations
pub type QuoteResult<T> = Result<T, QuoteError>;

/// Fetched quotes indexed by the key of the request that produced them
pub type QuoteByKey = HashMap<RequestKey, Quote>;

/// A priced result of one routing type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "routing", content = "quote")]
pub enum Quote {
	#[serde(rename = "CLASSIC")]
	Classic(ClassicQuote),
	#[serde(rename = "DUTCH_LIMIT")]
	DutchLimit(DutchLimitQuote),
}

impl Quote {
	pub fn routing_type(&self) -> RoutingType {
		match self {
			Quote::Classic(_) => RoutingType::Classic,
			Quote::DutchLimit(_) => RoutingType::DutchLimit,
		}
	}

	/// Key of the request this quote answers
	pub fn request_key(&self) -> &RequestKey {
		match self {
			Quote::Classic(quote) => &quote.request_key,
			Quote::DutchLimit(quote) => &quote.request_key,
		}
	}

	pub fn request_id(&self) -> &str {
		match self {
			Quote::Classic(quote) => &quote.request_id,
			Quote::DutchLimit(quote) => &quote.request_id,
		}
	}

	pub fn quote_id(&self) -> &str {
		match self {
			Quote::Classic(quote) => &quote.quote_id,
			Quote::DutchLimit(quote) => &quote.quote_id,
		}
	}

	pub fn chain_id(&self) -> u64 {
		match self {
			Quote::Classic(quote) => quote.chain_id,
			Quote::DutchLimit(quote) => quote.chain_id,
		}
	}

	pub fn trade_type(&self) -> TradeType {
		match self {
			Quote::Classic(quote) => quote.trade_type,
			Quote::DutchLimit(quote) => quote.trade_type,
		}
	}

	pub fn token_in(&self) -> Address {
		match self {
			Quote::Classic(quote) => quote.token_in,
			Quote::DutchLimit(quote) => quote.token_in(),
		}
	}

	pub fn token_out(&self) -> Address {
		match self {
			Quote::Classic(quote) => quote.token_out,
			Quote::DutchLimit(quote) => quote.token_out(),
		}
	}

	pub fn amount_in(&self) -> U256 {
		match self {
			Quote::Classic(quote) => quote.amount_in(),
			Quote::DutchLimit(quote) => quote.amount_in_start(),
		}
	}

	pub fn amount_out(&self) -> U256 {
		match self {
			Quote::Classic(quote) => quote.amount_out(),
			Quote::DutchLimit(quote) => quote.amount_out_start(),
		}
	}

	/// Amount used for ranking: gas adjusted for classic quotes, native
	/// normalized for auction quotes when a conversion was available
	pub fn effective_amount(&self) -> U256 {
		match self {
			Quote::Classic(quote) => quote.effective_amount(),
			Quote::DutchLimit(quote) => quote.effective_amount(),
		}
	}

	pub fn as_classic(&self) -> Option<&ClassicQuote> {
		match self {
			Quote::Classic(quote) => Some(quote),
			Quote::DutchLimit(_) => None,
		}
	}

	pub fn as_dutch_limit(&self) -> Option<&DutchLimitQuote> {
		match self {
			Quote::DutchLimit(quote) => Some(quote),
			Quote::Classic(_) => None,
		}
	}
}

impl From<ClassicQuote> for Quote {
	fn from(quote: ClassicQuote) -> Self {
		Quote::Classic(quote)
	}
}

impl From<DutchLimitQuote> for Quote {
	fn from(quote: DutchLimitQuote) -> Self {
		Quote::DutchLimit(quote)
	}
}
