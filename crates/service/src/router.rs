//! The full quoting cycle: requests in, one quote (or none) per request out

use futures::future::join_all;
use routing_adapters::AdapterRegistry;
use routing_types::{
	parse_quote_requests, Quote, QuoteRequest, QuoteRequestBody, RequestError, RequestsByKind,
	RoutingType,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::{timeout, Duration};
use tracing::{debug, debug_span, info, warn, Instrument, Span};

use crate::context::{parse_quote_contexts, QuoteContextManager};
use crate::transformers::{apply_transformers, RequestTransformer};

/// Errors detected before anything is dispatched
///
/// Everything after dispatch degrades to a missing quote instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterServiceError {
	#[error("Invalid quote request: {0}")]
	Request(#[from] RequestError),

	#[error("No adapter registered for routing type {0}")]
	NoAdapter(RoutingType),
}

pub type RouterResult<T> = Result<T, RouterServiceError>;

/// Outcome for one caller config
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutedQuote {
	pub routing_type: RoutingType,
	pub request_id: String,
	pub quote: Option<Quote>,
}

/// Service running transformers, contexts and adapters for each invocation
#[derive(Debug)]
pub struct QuoteRouterService {
	span: Span,
	adapters: Arc<AdapterRegistry>,
	transformers: Vec<Box<dyn RequestTransformer>>,
	per_quoter_timeout_ms: u64,
}

impl QuoteRouterService {
	pub fn new(
		adapters: Arc<AdapterRegistry>,
		transformers: Vec<Box<dyn RequestTransformer>>,
		per_quoter_timeout_ms: u64,
		span: Span,
	) -> Self {
		Self {
			span,
			adapters,
			transformers,
			per_quoter_timeout_ms,
		}
	}

	pub fn adapters(&self) -> &AdapterRegistry {
		&self.adapters
	}

	/// Parse a caller body and quote every config in it
	pub async fn quote(&self, body: &QuoteRequestBody) -> RouterResult<Vec<RoutedQuote>> {
		let requests = parse_quote_requests(body)?;
		let quotes = self.quote_requests(&requests).await?;

		Ok(requests
			.iter()
			.zip(quotes)
			.map(|(request, quote)| RoutedQuote {
				routing_type: request.routing_type(),
				request_id: request.info().request_id.clone(),
				quote,
			})
			.collect())
	}

	/// Quote caller requests, one result per request in the same order
	pub async fn quote_requests(&self, requests: &[QuoteRequest]) -> RouterResult<Vec<Option<Quote>>> {
		if requests.is_empty() {
			return Err(RequestError::EmptyConfigs.into());
		}
		for request in requests {
			if !self.adapters.contains(request.routing_type()) {
				return Err(RouterServiceError::NoAdapter(request.routing_type()));
			}
		}

		let mut requests_by_kind = RequestsByKind::from_requests(requests)?;
		apply_transformers(&self.transformers, &mut requests_by_kind);

		let contexts = parse_quote_contexts(requests, &requests_by_kind, &self.span);
		let manager = QuoteContextManager::new(contexts, self.span.clone());

		let quotes = self.fetch_quotes(manager.get_requests()).await;
		let resolved = manager.resolve_quotes(quotes).await;

		info!(
			parent: &self.span,
			requested = resolved.len(),
			resolved = resolved.iter().filter(|quote| quote.is_some()).count(),
			"Quote routing completed"
		);

		Ok(resolved)
	}

	/// Fetch every request concurrently, dropping the ones that fail
	async fn fetch_quotes(&self, requests: Vec<QuoteRequest>) -> Vec<Quote> {
		let request_count = requests.len();
		let timeout_ms = self.per_quoter_timeout_ms;

		let tasks = requests.into_iter().map(|request| {
			let adapter = self.adapters.get(request.routing_type());
			let span = self.span.clone();

			tokio::spawn(async move {
				let request_key = request.key();
				let Some(adapter) = adapter else {
					warn!(
						parent: &span,
						routing_type = %request.routing_type(),
						%request_key,
						"No adapter for dependency request"
					);
					return None;
				};

				debug!(parent: &span, adapter_id = %adapter.id(), %request_key, "Dispatching request");
				// adapter events are recorded under the router span
				let quoter_span = debug_span!(
					parent: &span,
					"quoter",
					adapter_id = %adapter.id(),
					%request_key
				);
				let quote = match timeout(
					Duration::from_millis(timeout_ms),
					adapter.quote(&request).instrument(quoter_span),
				)
				.await
				{
					Ok(quote) => quote?,
					Err(_) => {
						warn!(
							parent: &span,
							adapter_id = %adapter.id(),
							%request_key,
							"Quoter timed out after {}ms",
							timeout_ms
						);
						return None;
					},
				};

				if quote.request_key() != &request_key {
					warn!(
						parent: &span,
						adapter_id = %adapter.id(),
						%request_key,
						quote_key = %quote.request_key(),
						"Discarding quote answering a different request"
					);
					return None;
				}
				Some(quote)
			})
		});

		let quotes: Vec<Quote> = join_all(tasks)
			.await
			.into_iter()
			.filter_map(|result| match result {
				Ok(quote) => quote,
				Err(e) => {
					warn!(parent: &self.span, "Quote task failed: {}", e);
					None
				},
			})
			.collect();

		info!(
			parent: &self.span,
			requests = request_count,
			quotes = quotes.len(),
			"Quote fetch completed"
		);

		quotes
	}
}
