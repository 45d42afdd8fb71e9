//! Routing Types
//!
//! Request and quote entities shared by the unified routing crates, along
//! with the quoting adapter contract.

pub mod adapters;
pub mod constants;
pub mod models;
pub mod quotes;
pub mod requests;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export the primitives used throughout the public API
pub use alloy_primitives::{Address, U256};
pub use serde_json;

pub use adapters::{AdapterError, AdapterResult, QuoteAdapter};

pub use models::{
	is_native, parse_amount, SecretString, WrappedNativeTable, NATIVE_ADDRESS,
	WRAPPED_NATIVE_UNIT,
};

pub use quotes::{
	compare_quotes, select_best_quote, ClassicQuote, DutchInput, DutchLimitQuote, DutchOrderInfo,
	DutchOutput, PermitData, Quote, QuoteByKey, QuoteError, QuoteResult,
};

pub use requests::{
	parse_quote_requests, ClassicConfig, ClassicRequest, DutchLimitConfig, DutchLimitRequest,
	Protocol, QuoteRequest, QuoteRequestBody, QuoteRequestInfo, RequestError, RequestKey,
	RequestResult, RequestSlots, RequestsByKind, RoutingType, TradeType,
};
