//! Context for auction-based requests

use alloy_primitives::U256;
use async_trait::async_trait;
use routing_types::{
	is_native, ClassicQuote, ClassicRequest, DutchLimitQuote, DutchLimitRequest, Quote,
	QuoteByKey, QuoteRequest, RoutingType, TradeType, WRAPPED_NATIVE_UNIT,
};
use tracing::{debug, warn, Span};

use super::QuoteContext;

/// Resolves to the auction quote for its own request, normalized to the
/// native asset when the swap pays out native
///
/// The auction settles native payouts in the wrapped token. When a
/// back-to-native request is attached, its quote (the input needed to obtain
/// one wrapped unit) converts the auction output into a native amount that
/// can be compared with classic quotes. The order itself is left untouched.
/// Exact-output auctions rank on their input, so they need no rate.
/// This context never substitutes a classic quote for a missing auction
/// quote.
#[derive(Debug, Clone)]
pub struct DutchLimitQuoteContext {
	span: Span,
	request: DutchLimitRequest,
	back_to_native: Option<ClassicRequest>,
}

impl DutchLimitQuoteContext {
	/// `back_to_native` is ignored unless the request pays out native for an
	/// exact input
	pub fn new(
		request: DutchLimitRequest,
		back_to_native: Option<ClassicRequest>,
		span: Span,
	) -> Self {
		let back_to_native = back_to_native.filter(|_| needs_native_rate(&request));
		Self {
			span,
			request,
			back_to_native,
		}
	}

	pub fn back_to_native(&self) -> Option<&ClassicRequest> {
		self.back_to_native.as_ref()
	}

	fn auction_quote<'a>(&self, quotes: &'a QuoteByKey) -> Option<&'a DutchLimitQuote> {
		quotes.get(&self.request.key()).and_then(Quote::as_dutch_limit)
	}
}

/// Whether ranking the request's quote depends on the wrapped-to-native rate
pub(crate) fn needs_native_rate(request: &DutchLimitRequest) -> bool {
	is_native(&request.info.token_out) && request.info.trade_type == TradeType::ExactInput
}

/// `amount_out` wrapped units expressed in the native asset at the rate
/// given by a one-unit exact-output quote, `None` on overflow
fn native_equivalent(amount_out: U256, rate: &ClassicQuote) -> Option<U256> {
	amount_out
		.checked_mul(rate.amount_in())
		.map(|scaled| scaled / WRAPPED_NATIVE_UNIT)
}

#[async_trait]
impl QuoteContext for DutchLimitQuoteContext {
	fn routing_type(&self) -> RoutingType {
		RoutingType::DutchLimit
	}

	fn request(&self) -> QuoteRequest {
		QuoteRequest::DutchLimit(self.request.clone())
	}

	fn dependencies(&self) -> Vec<QuoteRequest> {
		let mut dependencies = vec![self.request()];
		if let Some(back_to_native) = &self.back_to_native {
			dependencies.push(QuoteRequest::Classic(back_to_native.clone()));
		}
		dependencies
	}

	async fn resolve(&self, quotes: &QuoteByKey) -> Option<Quote> {
		let Some(quote) = self.auction_quote(quotes) else {
			debug!(
				parent: &self.span,
				request_key = %self.request.key(),
				"No auction quote to resolve"
			);
			return None;
		};

		let Some(back_to_native) = &self.back_to_native else {
			return Some(Quote::DutchLimit(quote.clone()));
		};

		let Some(rate) = quotes
			.get(&back_to_native.key())
			.and_then(Quote::as_classic)
		else {
			debug!(
				parent: &self.span,
				request_key = %back_to_native.key(),
				"Back-to-native quote missing, auction quote cannot be compared"
			);
			return None;
		};

		let Some(native_amount) = native_equivalent(quote.amount_out_start(), rate) else {
			warn!(
				parent: &self.span,
				quote_id = %quote.quote_id,
				amount_out = %quote.amount_out_start(),
				rate = %rate.amount_in(),
				"Native conversion overflowed, discarding auction quote"
			);
			return None;
		};
		debug!(
			parent: &self.span,
			quote_id = %quote.quote_id,
			amount_out = %quote.amount_out_start(),
			native_amount_out = %native_amount,
			"Normalized auction output to native"
		);
		Some(Quote::DutchLimit(quote.with_native_amount_out(native_amount)))
	}
}
