//! Driving a set of quote contexts through one resolution cycle

use futures::future::join_all;
use routing_types::{Quote, QuoteByKey, QuoteRequest, RequestKey};
use std::collections::HashSet;
use tracing::{debug, info, warn, Span};

use super::QuoteContext;

/// Collects the requests a set of contexts needs and resolves the contexts
/// once their quotes are fetched
#[derive(Debug)]
pub struct QuoteContextManager {
	span: Span,
	contexts: Vec<Box<dyn QuoteContext>>,
}

impl QuoteContextManager {
	pub fn new(contexts: Vec<Box<dyn QuoteContext>>, span: Span) -> Self {
		Self { span, contexts }
	}

	pub fn contexts(&self) -> &[Box<dyn QuoteContext>] {
		&self.contexts
	}

	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Every request to fetch, one per distinct key
	///
	/// Contexts' own requests are taken first, so a dependency never shadows
	/// a caller request with the same key. Order is first occurrence.
	pub fn get_requests(&self) -> Vec<QuoteRequest> {
		let mut seen: HashSet<RequestKey> = HashSet::new();
		let mut requests = Vec::new();

		let originals = self.contexts.iter().map(|context| context.request());
		let dependencies = self
			.contexts
			.iter()
			.flat_map(|context| context.dependencies());

		for request in originals.chain(dependencies) {
			if seen.insert(request.key()) {
				requests.push(request);
			}
		}

		info!(
			parent: &self.span,
			contexts = self.contexts.len(),
			requests = requests.len(),
			"Context requests"
		);
		for request in &requests {
			debug!(
				parent: &self.span,
				routing_type = %request.routing_type(),
				request_key = %request.key(),
				"Context request"
			);
		}

		requests
	}

	/// Resolve every context against `quotes`, one result per context in
	/// context order
	pub async fn resolve_quotes(&self, quotes: Vec<Quote>) -> Vec<Option<Quote>> {
		info!(parent: &self.span, quotes = quotes.len(), "Context quotes");

		let mut by_key = QuoteByKey::with_capacity(quotes.len());
		for quote in quotes {
			debug!(
				parent: &self.span,
				routing_type = %quote.routing_type(),
				request_key = %quote.request_key(),
				quote_id = %quote.quote_id(),
				"Context quote"
			);
			if let Some(replaced) = by_key.insert(quote.request_key().clone(), quote) {
				warn!(
					parent: &self.span,
					request_key = %replaced.request_key(),
					"Duplicate quote for request, keeping the last one"
				);
			}
		}

		let by_key = &by_key;
		join_all(self.contexts.iter().map(|context| context.resolve(by_key))).await
	}
}
