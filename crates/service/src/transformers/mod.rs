//! Request transformers
//!
//! Transformers run once per invocation, after caller requests are grouped
//! by routing type and before anything is dispatched. They may fill the
//! non-original slots of [`RequestsByKind`] with requests that other
//! contexts depend on.

use routing_types::RequestsByKind;
use std::fmt::Debug;

pub mod route_back_to_native;

pub use route_back_to_native::RouteBackToNativeInserter;

/// A rule that may inject synthetic requests
///
/// Implementations must be idempotent: applying one twice to the same set
/// leaves it as after the first application.
pub trait RequestTransformer: Send + Sync + Debug {
	/// Name used in logs
	fn name(&self) -> &'static str;

	fn transform(&self, requests: &mut RequestsByKind);
}

/// Apply `transformers` in order
pub fn apply_transformers(
	transformers: &[Box<dyn RequestTransformer>],
	requests: &mut RequestsByKind,
) {
	for transformer in transformers {
		transformer.transform(requests);
	}
}
