//! Routing Adapters
//!
//! Quoting adapters for the unified routing engine, one per routing type.

pub mod client;
pub mod permit;
pub mod rfq_adapter;
pub mod routing_api_adapter;

#[cfg(test)]
mod test_server;

pub use client::{build_url, AuthConfig, ClientConfig};
pub use permit::{NoPermitFetcher, PermitFetcher};
pub use rfq_adapter::{RfqAdapter, RFQ_ADAPTER_ID};
pub use routing_api_adapter::{RoutingApiAdapter, ROUTING_API_ADAPTER_ID};
pub use routing_types::{AdapterError, AdapterResult, QuoteAdapter};

use routing_types::RoutingType;
use std::collections::HashMap;
use std::sync::Arc;

/// Adapters indexed by the routing type they quote
#[derive(Debug, Clone, Default)]
pub struct AdapterRegistry {
	adapters: HashMap<RoutingType, Arc<dyn QuoteAdapter>>,
}

impl AdapterRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register an adapter under its routing type, returning the one it replaces
	pub fn register(&mut self, adapter: Arc<dyn QuoteAdapter>) -> Option<Arc<dyn QuoteAdapter>> {
		self.adapters.insert(adapter.routing_type(), adapter)
	}

	/// Builder form of [`AdapterRegistry::register`]
	pub fn with_adapter(mut self, adapter: Arc<dyn QuoteAdapter>) -> Self {
		self.register(adapter);
		self
	}

	pub fn get(&self, routing_type: RoutingType) -> Option<Arc<dyn QuoteAdapter>> {
		self.adapters.get(&routing_type).cloned()
	}

	pub fn contains(&self, routing_type: RoutingType) -> bool {
		self.adapters.contains_key(&routing_type)
	}

	pub fn routing_types(&self) -> Vec<RoutingType> {
		self.adapters.keys().copied().collect()
	}

	pub fn len(&self) -> usize {
		self.adapters.len()
	}

	pub fn is_empty(&self) -> bool {
		self.adapters.is_empty()
	}
}
