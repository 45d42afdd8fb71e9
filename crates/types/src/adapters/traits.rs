//! Core adapter trait

use async_trait::async_trait;
use std::fmt::Debug;
use tracing::warn;

use super::AdapterResult;
use crate::quotes::Quote;
use crate::requests::{QuoteRequest, RoutingType};

/// A quoting mechanism for one routing type
///
/// Implementations only provide [`fetch_quote`](Self::fetch_quote);
/// [`quote`](Self::quote) is the boundary the router calls and turns every
/// failure into `None` so sibling requests are unaffected.
#[async_trait]
pub trait QuoteAdapter: Send + Sync + Debug {
	/// Adapter identifier used in logs
	fn id(&self) -> &str;

	/// Routing type of the requests this adapter quotes
	fn routing_type(&self) -> RoutingType;

	/// Fetch a quote, reporting why none could be produced
	async fn fetch_quote(&self, request: &QuoteRequest) -> AdapterResult<Quote>;

	/// Fetch a quote, absorbing failures
	async fn quote(&self, request: &QuoteRequest) -> Option<Quote> {
		match self.fetch_quote(request).await {
			Ok(quote) => Some(quote),
			Err(e) => {
				warn!(
					adapter_id = %self.id(),
					request_key = %request.key(),
					status_code = ?e.status_code(),
					"No quote from adapter: {}",
					e
				);
				None
			},
		}
	}
}
