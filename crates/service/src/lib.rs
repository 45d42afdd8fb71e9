//! Routing Service
//!
//! Request transformation, quote context resolution, and the router that
//! ties them to the quoting adapters.

pub mod context;
pub mod router;
pub mod transformers;

pub use context::{
	parse_quote_contexts, ClassicQuoteContext, DutchLimitQuoteContext, QuoteContext,
	QuoteContextManager,
};
pub use router::{QuoteRouterService, RoutedQuote, RouterResult, RouterServiceError};
pub use transformers::{apply_transformers, RequestTransformer, RouteBackToNativeInserter};
