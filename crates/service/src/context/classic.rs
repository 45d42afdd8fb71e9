//! Context for route-based requests

use async_trait::async_trait;
use routing_types::{ClassicRequest, Quote, QuoteByKey, QuoteRequest, RoutingType};
use tracing::{debug, Span};

use super::QuoteContext;

/// Resolves to the quote fetched for its own request
#[derive(Debug, Clone)]
pub struct ClassicQuoteContext {
	span: Span,
	request: ClassicRequest,
}

impl ClassicQuoteContext {
	pub fn new(request: ClassicRequest, span: Span) -> Self {
		Self { span, request }
	}
}

#[async_trait]
impl QuoteContext for ClassicQuoteContext {
	fn routing_type(&self) -> RoutingType {
		RoutingType::Classic
	}

	fn request(&self) -> QuoteRequest {
		QuoteRequest::Classic(self.request.clone())
	}

	fn dependencies(&self) -> Vec<QuoteRequest> {
		Vec::new()
	}

	async fn resolve(&self, quotes: &QuoteByKey) -> Option<Quote> {
		let key = self.request.key();
		let quote = quotes.get(&key).filter(|quote| quote.as_classic().is_some());
		if quote.is_none() {
			debug!(parent: &self.span, request_key = %key, "No classic quote to resolve");
		}
		quote.cloned()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use routing_types::test_utils::{classic_quote_for, classic_request};

	#[tokio::test]
	async fn test_resolves_own_quote() {
		let request = classic_request();
		let context = ClassicQuoteContext::new(request.clone(), Span::none());
		assert!(context.dependencies().is_empty());

		let quote = Quote::from(classic_quote_for(&request, 1_000, 990));
		let quotes = QuoteByKey::from([(request.key(), quote.clone())]);

		assert_eq!(context.resolve(&quotes).await, Some(quote));
	}

	#[tokio::test]
	async fn test_missing_quote_resolves_to_none() {
		let context = ClassicQuoteContext::new(classic_request(), Span::none());
		assert_eq!(context.resolve(&QuoteByKey::new()).await, None);
	}
}
