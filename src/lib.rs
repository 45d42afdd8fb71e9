//! Unified Routing Library
//!
//! Quotes a swap across on-chain routing and off-chain RFQ auctions, resolving
//! cross-request dependencies so that auction quotes paying out in the native
//! token are comparable with classic routes.

use std::sync::Arc;
use thiserror::Error;
use tracing::{info, Span};

// Core domain types
pub use routing_types::{
	compare_quotes,
	parse_quote_requests,
	select_best_quote,
	// External dependencies for convenience
	serde_json,
	Address,
	// Error types
	AdapterError,
	ClassicQuote,
	ClassicRequest,
	DutchLimitQuote,
	DutchLimitRequest,
	// Primary domain entities
	Quote,
	QuoteError,
	QuoteRequest,
	QuoteRequestBody,
	RequestError,
	RequestKey,
	RequestsByKind,
	RoutingType,
	TradeType,
	WrappedNativeTable,
	U256,
};

// Service layer
pub use routing_service::{
	QuoteContext, QuoteContextManager, QuoteRouterService, RequestTransformer,
	RouteBackToNativeInserter, RoutedQuote, RouterServiceError,
};

// Adapters
pub use routing_adapters::{
	AdapterRegistry, AdapterResult, QuoteAdapter, RfqAdapter, RoutingApiAdapter,
};

// Config
pub use routing_config::{
	load_config, log_service_info, log_startup_complete, ConfigValidationError, LogFormat,
	LoggingSettings, Settings,
};

pub mod types {
	pub use routing_types::*;
}

pub mod service {
	pub use routing_service::*;
}

pub mod adapters {
	pub use routing_adapters::*;
}

pub mod config {
	pub use routing_config::*;
}

pub mod mocks;

// Re-export external dependencies for downstream adapters
pub use async_trait;

/// Failures while assembling a router
#[derive(Error, Debug)]
pub enum BuildError {
	#[error("Invalid configuration: {0}")]
	Config(#[from] ConfigValidationError),

	#[error("Failed to construct adapter: {0}")]
	Adapter(#[from] AdapterError),

	#[error("No quoting adapter configured")]
	NoAdapters,
}

/// Builder pattern for configuring the router
///
/// Adapters registered with [`RouterBuilder::with_adapter`] take precedence
/// over the ones built from settings.
pub struct RouterBuilder {
	settings: Option<Settings>,
	adapters: Vec<Arc<dyn QuoteAdapter>>,
	transformers: Vec<Box<dyn RequestTransformer>>,
	span: Span,
}

impl Default for RouterBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl RouterBuilder {
	/// Create a builder with no configured quoters
	pub fn new() -> Self {
		Self {
			settings: None,
			adapters: Vec::new(),
			transformers: Vec::new(),
			span: Span::none(),
		}
	}

	/// Create a builder that constructs the quoters enabled in `settings`
	pub fn from_config(settings: Settings) -> Self {
		Self::new().with_settings(settings)
	}

	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Add a custom adapter, replacing any configured one for its routing type
	pub fn with_adapter(mut self, adapter: Arc<dyn QuoteAdapter>) -> Self {
		self.adapters.push(adapter);
		self
	}

	/// Add a transformer running after the back-to-native inserter
	pub fn with_transformer(mut self, transformer: Box<dyn RequestTransformer>) -> Self {
		self.transformers.push(transformer);
		self
	}

	/// Span every router, context and transformer event is recorded under
	pub fn with_span(mut self, span: Span) -> Self {
		self.span = span;
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	pub fn build(self) -> Result<QuoteRouterService, BuildError> {
		let span = self.span;
		let configured = self.settings.is_some();
		let settings = self.settings.unwrap_or_default();
		let wrapped_native = Arc::new(settings.wrapped_native_table()?);
		let mut registry = AdapterRegistry::new();

		if configured {
			settings.validate()?;
			let quoters = &settings.quoters;
			if quoters.routing_api.enabled {
				registry.register(Arc::new(RoutingApiAdapter::new(
					quoters.routing_api.url.clone(),
					quoters.routing_api.timeout_ms,
				)?));
			}
			if quoters.rfq.enabled {
				registry.register(Arc::new(RfqAdapter::new(
					quoters.rfq.url.clone(),
					quoters.rfq.nonce_url.clone(),
					settings.rfq_api_key()?,
					quoters.rfq.timeout_ms,
				)?
				.with_wrapped_native(wrapped_native.clone())));
			}
		}

		for adapter in self.adapters {
			if let Some(replaced) = registry.register(adapter) {
				info!(parent: &span, adapter_id = replaced.id(), "Replaced configured adapter");
			}
		}

		if registry.is_empty() {
			return Err(BuildError::NoAdapters);
		}

		let mut transformers: Vec<Box<dyn RequestTransformer>> = vec![Box::new(
			RouteBackToNativeInserter::new(wrapped_native, span.clone()),
		)];
		transformers.extend(self.transformers);

		info!(
			parent: &span,
			adapters = registry.len(),
			transformers = transformers.len(),
			"Router built"
		);

		Ok(QuoteRouterService::new(
			Arc::new(registry),
			transformers,
			settings.timeouts.per_quoter_ms,
			span,
		))
	}
}

/// Initialize tracing with configuration-based settings
///
/// `RUST_LOG` overrides the configured level.
pub fn init_tracing(logging: &LoggingSettings) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

	// Logs go to stderr so stdout stays clean for results
	match logging.format {
		LogFormat::Json => {
			let subscriber = tracing_subscriber::fmt()
				.json()
				.with_writer(std::io::stderr)
				.with_env_filter(env_filter);

			if logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()
			} else {
				subscriber.try_init()
			}
		},
		LogFormat::Pretty => {
			let subscriber = tracing_subscriber::fmt()
				.pretty()
				.with_writer(std::io::stderr)
				.with_env_filter(env_filter);

			if logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()
			} else {
				subscriber.try_init()
			}
		},
		LogFormat::Compact => {
			let subscriber = tracing_subscriber::fmt()
				.compact()
				.with_writer(std::io::stderr)
				.with_env_filter(env_filter);

			if logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()
			} else {
				subscriber.try_init()
			}
		},
	}
}
