//! Quote contexts
//!
//! One context per caller request. A context declares the requests it needs
//! fetched and, once they are, decides its own final quote. The
//! [`QuoteContextManager`] drives a set of contexts through one cycle.

use async_trait::async_trait;
use routing_types::{Quote, QuoteByKey, QuoteRequest, RequestsByKind, RoutingType};
use std::fmt::Debug;
use tracing::Span;

pub mod classic;
pub mod dutch_limit;
pub mod manager;

pub use classic::ClassicQuoteContext;
pub use dutch_limit::DutchLimitQuoteContext;
pub use manager::QuoteContextManager;

/// Resolution logic for one caller request
#[async_trait]
pub trait QuoteContext: Send + Sync + Debug {
	fn routing_type(&self) -> RoutingType;

	/// The caller request this context answers
	fn request(&self) -> QuoteRequest;

	/// Requests whose quotes [`resolve`](Self::resolve) reads
	fn dependencies(&self) -> Vec<QuoteRequest>;

	/// Final quote for the request, `None` when no usable quote exists
	async fn resolve(&self, quotes: &QuoteByKey) -> Option<Quote>;
}

/// Build one context per caller request, in caller order
///
/// Auction contexts pick up the back-to-native request a transformer placed
/// in `requests_by_kind`, if any.
pub fn parse_quote_contexts(
	requests: &[QuoteRequest],
	requests_by_kind: &RequestsByKind,
	span: &Span,
) -> Vec<Box<dyn QuoteContext>> {
	requests
		.iter()
		.map(|request| -> Box<dyn QuoteContext> {
			match request {
				QuoteRequest::Classic(classic) => {
					Box::new(ClassicQuoteContext::new(classic.clone(), span.clone()))
				},
				QuoteRequest::DutchLimit(dutch) => Box::new(DutchLimitQuoteContext::new(
					dutch.clone(),
					requests_by_kind.classic.back_to_native().cloned(),
					span.clone(),
				)),
			}
		})
		.collect()
}
