//! Back-to-native route insertion for auction requests

use routing_types::{
	constants::DEFAULT_PROTOCOLS, is_native, ClassicConfig, ClassicRequest, QuoteRequestInfo,
	RequestsByKind, TradeType, WrappedNativeTable, WRAPPED_NATIVE_UNIT,
};
use std::sync::Arc;
use tracing::{debug, warn, Span};

use super::RequestTransformer;
use crate::context::dutch_limit::needs_native_rate;

/// Adds a classic request pricing one wrapped-native unit against the
/// auction's output token
///
/// An auction asked to pay out the native asset settles in the wrapped form.
/// The injected quote gives the exchange rate needed to express the auction
/// output as a native amount. Nothing is injected when there is no
/// exact-input auction paying out native, when a caller classic request
/// already targets native, or when the slot is already filled.
#[derive(Debug, Clone)]
pub struct RouteBackToNativeInserter {
	span: Span,
	wrapped_native: Arc<WrappedNativeTable>,
}

impl RouteBackToNativeInserter {
	pub fn new(wrapped_native: Arc<WrappedNativeTable>, span: Span) -> Self {
		Self {
			span,
			wrapped_native,
		}
	}
}

impl RequestTransformer for RouteBackToNativeInserter {
	fn name(&self) -> &'static str {
		"route_back_to_native"
	}

	fn transform(&self, requests: &mut RequestsByKind) {
		let Some(auction) = requests.dutch_limit.original() else {
			return;
		};
		if !needs_native_rate(auction) {
			return;
		}

		if requests
			.classic
			.original()
			.is_some_and(|classic| is_native(&classic.info.token_out))
		{
			debug!(
				parent: &self.span,
				transformer = self.name(),
				"Classic request already targets native, skipping"
			);
			return;
		}

		if requests.classic.back_to_native().is_some() {
			return;
		}

		let chain_id = auction.info.token_out_chain_id;
		let Some(wrapped) = self.wrapped_native.get(chain_id) else {
			warn!(
				parent: &self.span,
				transformer = self.name(),
				chain_id,
				"No wrapped native token known for chain, cannot route back to native"
			);
			return;
		};

		let request = ClassicRequest::new(
			QuoteRequestInfo {
				request_id: auction.info.request_id.clone(),
				token_in_chain_id: chain_id,
				token_out_chain_id: chain_id,
				token_in: auction.info.token_out,
				token_out: wrapped,
				amount: WRAPPED_NATIVE_UNIT,
				trade_type: TradeType::ExactOutput,
				swapper: auction.info.swapper,
				slippage_bps: auction.info.slippage_bps,
			},
			ClassicConfig::with_protocols(DEFAULT_PROTOCOLS),
		);

		debug!(
			parent: &self.span,
			transformer = self.name(),
			request_key = %request.key(),
			"Inserting back-to-native request"
		);
		requests.classic.insert_back_to_native(request);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use routing_types::{
		test_utils::{classic_request, dutch_limit_request, CHAIN_ID, WETH},
		NATIVE_ADDRESS, QuoteRequest, Protocol,
	};

	fn inserter() -> RouteBackToNativeInserter {
		RouteBackToNativeInserter::new(Arc::new(WrappedNativeTable::with_defaults()), Span::none())
	}

	fn native_out_auction() -> QuoteRequest {
		let mut request = dutch_limit_request();
		request.info.token_out = NATIVE_ADDRESS;
		QuoteRequest::from(request)
	}

	#[test]
	fn test_inserts_back_to_native_for_native_auction() {
		let auction = native_out_auction();
		let mut requests = RequestsByKind::from_requests(&[auction.clone()]).unwrap();

		inserter().transform(&mut requests);

		let inserted = requests.classic.back_to_native().unwrap();
		assert_eq!(inserted.info.token_in, auction.info().token_out);
		assert_eq!(inserted.info.token_out, WETH);
		assert_eq!(inserted.info.token_in_chain_id, CHAIN_ID);
		assert_eq!(inserted.info.trade_type, TradeType::ExactOutput);
		assert_eq!(inserted.info.amount, WRAPPED_NATIVE_UNIT);
		assert_eq!(
			inserted.config.protocols,
			vec![Protocol::Mixed, Protocol::V2, Protocol::V3]
		);
		assert!(requests.classic.original().is_none());
		assert!(requests.classic.synthetic().is_none());
	}

	#[test]
	fn test_is_idempotent() {
		let mut requests = RequestsByKind::from_requests(&[native_out_auction()]).unwrap();

		inserter().transform(&mut requests);
		let once = requests.clone();
		inserter().transform(&mut requests);

		assert_eq!(requests, once);
		assert_eq!(requests.injected_requests().len(), 1);
	}

	#[test]
	fn test_skips_without_auction() {
		let classic = QuoteRequest::from(classic_request());
		let mut requests = RequestsByKind::from_requests(&[classic.clone()]).unwrap();

		inserter().transform(&mut requests);

		assert!(requests.classic.back_to_native().is_none());
		assert!(requests.classic.synthetic().is_none());
		assert_eq!(requests.classic.original(), classic.as_classic());
	}

	#[test]
	fn test_skips_when_auction_output_is_not_native() {
		let mut auction = dutch_limit_request();
		auction.info.token_out = WETH;
		let mut requests = RequestsByKind::from_requests(&[QuoteRequest::from(auction)]).unwrap();

		inserter().transform(&mut requests);

		assert!(requests.classic.back_to_native().is_none());
	}

	#[test]
	fn test_skips_exact_output_auction() {
		let mut auction = dutch_limit_request();
		auction.info.token_out = NATIVE_ADDRESS;
		auction.info.trade_type = TradeType::ExactOutput;
		let mut requests = RequestsByKind::from_requests(&[QuoteRequest::from(auction)]).unwrap();

		inserter().transform(&mut requests);

		assert!(requests.injected_requests().is_empty());
	}

	#[test]
	fn test_skips_when_classic_already_targets_native() {
		let mut classic = classic_request();
		classic.info.token_out = NATIVE_ADDRESS;
		let mut requests =
			RequestsByKind::from_requests(&[native_out_auction(), QuoteRequest::from(classic)])
				.unwrap();

		inserter().transform(&mut requests);

		assert!(requests.classic.back_to_native().is_none());
	}

	#[test]
	fn test_skips_chain_without_wrapped_native() {
		let inserter =
			RouteBackToNativeInserter::new(Arc::new(WrappedNativeTable::empty()), Span::none());
		let mut requests = RequestsByKind::from_requests(&[native_out_auction()]).unwrap();

		inserter.transform(&mut requests);

		assert!(requests.injected_requests().is_empty());
	}
}
