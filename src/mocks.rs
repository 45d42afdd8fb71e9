//! Mock adapters for demos and testing
//!
//! [`MockQuoteAdapter`] answers from a table of canned quotes keyed by
//! request key, so wiring can be exercised without any remote quoter.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use routing_types::{
	AdapterError, AdapterResult, Quote, QuoteAdapter, QuoteRequest, RequestKey, RoutingType,
};

/// Canned-response adapter with call tracking, delays and failure simulation
#[derive(Debug, Clone)]
pub struct MockQuoteAdapter {
	id: String,
	routing_type: RoutingType,
	quotes: HashMap<RequestKey, Quote>,
	call_tracker: Arc<AtomicUsize>,
	requested: Arc<Mutex<Vec<RequestKey>>>,
	pub should_fail: bool,
	pub response_delay_ms: u64,
}

impl MockQuoteAdapter {
	pub fn new(routing_type: RoutingType) -> Self {
		Self {
			id: format!("mock-{}", routing_type.as_str().to_lowercase()),
			routing_type,
			quotes: HashMap::new(),
			call_tracker: Arc::new(AtomicUsize::new(0)),
			requested: Arc::new(Mutex::new(Vec::new())),
			should_fail: false,
			response_delay_ms: 0,
		}
	}

	pub fn classic() -> Self {
		Self::new(RoutingType::Classic)
	}

	pub fn dutch_limit() -> Self {
		Self::new(RoutingType::DutchLimit)
	}

	/// Answer requests with the quote's request key using `quote`
	pub fn with_quote(mut self, quote: impl Into<Quote>) -> Self {
		let quote = quote.into();
		self.quotes.insert(quote.request_key().clone(), quote);
		self
	}

	pub fn with_delay(mut self, delay_ms: u64) -> Self {
		self.response_delay_ms = delay_ms;
		self
	}

	/// Every call fails with an upstream error
	pub fn failing(mut self) -> Self {
		self.should_fail = true;
		self
	}

	pub fn call_count(&self) -> usize {
		self.call_tracker.load(Ordering::SeqCst)
	}

	/// Keys of every request received, in arrival order
	pub fn requested_keys(&self) -> Vec<RequestKey> {
		self.requested
			.lock()
			.map(|keys| keys.clone())
			.unwrap_or_default()
	}

	pub fn into_arc(self) -> Arc<dyn QuoteAdapter> {
		Arc::new(self)
	}
}

#[async_trait]
impl QuoteAdapter for MockQuoteAdapter {
	fn id(&self) -> &str {
		&self.id
	}

	fn routing_type(&self) -> RoutingType {
		self.routing_type
	}

	async fn fetch_quote(&self, request: &QuoteRequest) -> AdapterResult<Quote> {
		self.call_tracker.fetch_add(1, Ordering::SeqCst);
		let key = request.key();
		if let Ok(mut requested) = self.requested.lock() {
			requested.push(key.clone());
		}

		if self.response_delay_ms > 0 {
			tokio::time::sleep(Duration::from_millis(self.response_delay_ms)).await;
		}

		if request.routing_type() != self.routing_type {
			return Err(AdapterError::UnsupportedRequest {
				adapter_id: self.id.clone(),
				routing_type: request.routing_type(),
			});
		}
		if self.should_fail {
			return Err(AdapterError::from_http_failure(503));
		}

		self.quotes
			.get(&key)
			.cloned()
			.ok_or_else(|| AdapterError::NoQuote {
				reason: format!("no canned quote for {}", key),
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use routing_types::test_utils::{classic_quote_for, classic_request, dutch_limit_request};

	#[tokio::test]
	async fn test_mock_returns_canned_quote_and_tracks_calls() {
		let request = classic_request();
		let adapter = MockQuoteAdapter::classic().with_quote(classic_quote_for(&request, 10, 9));

		let quote = adapter.quote(&request.clone().into()).await;
		assert!(quote.is_some());
		assert_eq!(adapter.call_count(), 1);
		assert_eq!(adapter.requested_keys(), vec![request.key()]);
	}

	#[tokio::test]
	async fn test_mock_failures_become_none() {
		let adapter = MockQuoteAdapter::classic().failing();
		assert!(adapter.quote(&classic_request().into()).await.is_none());

		let adapter = MockQuoteAdapter::classic();
		assert!(adapter.quote(&dutch_limit_request().into()).await.is_none());
		assert_eq!(adapter.call_count(), 1);
	}
}
