//! Requests grouped by routing type into named slots

use super::{
	ClassicRequest, DutchLimitRequest, QuoteRequest, RequestError, RequestResult, RoutingType,
};

/// Named request slots for one routing type
///
/// `original` is fixed at construction. The other slots start empty and can
/// be filled once each; a filled slot is never overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSlots<R> {
	original: Option<R>,
	synthetic: Option<R>,
	back_to_native: Option<R>,
}

impl<R> Default for RequestSlots<R> {
	fn default() -> Self {
		Self {
			original: None,
			synthetic: None,
			back_to_native: None,
		}
	}
}

impl<R> RequestSlots<R> {
	pub fn with_original(original: R) -> Self {
		Self {
			original: Some(original),
			..Self::default()
		}
	}

	pub fn original(&self) -> Option<&R> {
		self.original.as_ref()
	}

	pub fn synthetic(&self) -> Option<&R> {
		self.synthetic.as_ref()
	}

	pub fn back_to_native(&self) -> Option<&R> {
		self.back_to_native.as_ref()
	}

	/// Returns `false` and leaves the slot untouched when already filled
	pub fn insert_synthetic(&mut self, request: R) -> bool {
		fill(&mut self.synthetic, request)
	}

	/// Returns `false` and leaves the slot untouched when already filled
	pub fn insert_back_to_native(&mut self, request: R) -> bool {
		fill(&mut self.back_to_native, request)
	}

	/// Filled non-original slots
	pub fn injected(&self) -> impl Iterator<Item = &R> {
		self.synthetic.iter().chain(self.back_to_native.iter())
	}
}

fn fill<R>(slot: &mut Option<R>, request: R) -> bool {
	if slot.is_some() {
		return false;
	}
	*slot = Some(request);
	true
}

/// Every request of one invocation, by routing type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestsByKind {
	pub classic: RequestSlots<ClassicRequest>,
	pub dutch_limit: RequestSlots<DutchLimitRequest>,
}

impl RequestsByKind {
	/// Place caller requests into the `original` slots
	pub fn from_requests(requests: &[QuoteRequest]) -> RequestResult<Self> {
		let mut by_kind = Self::default();

		for request in requests {
			match request {
				QuoteRequest::Classic(classic) => {
					if by_kind.classic.original.is_some() {
						return Err(RequestError::DuplicateRoutingType(RoutingType::Classic));
					}
					by_kind.classic.original = Some(classic.clone());
				},
				QuoteRequest::DutchLimit(dutch) => {
					if by_kind.dutch_limit.original.is_some() {
						return Err(RequestError::DuplicateRoutingType(RoutingType::DutchLimit));
					}
					by_kind.dutch_limit.original = Some(dutch.clone());
				},
			}
		}

		Ok(by_kind)
	}

	/// Requests injected by transformers, classic first
	pub fn injected_requests(&self) -> Vec<QuoteRequest> {
		self.classic
			.injected()
			.cloned()
			.map(QuoteRequest::from)
			.chain(self.dutch_limit.injected().cloned().map(QuoteRequest::from))
			.collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_utils::{classic_request, dutch_limit_request};

	#[test]
	fn test_from_requests_fills_original_slots() {
		let requests = vec![
			QuoteRequest::from(dutch_limit_request()),
			QuoteRequest::from(classic_request()),
		];
		let by_kind = RequestsByKind::from_requests(&requests).unwrap();
		assert_eq!(by_kind.classic.original(), Some(&classic_request()));
		assert_eq!(by_kind.dutch_limit.original(), Some(&dutch_limit_request()));
		assert!(by_kind.injected_requests().is_empty());
	}

	#[test]
	fn test_duplicate_kind_is_rejected() {
		let requests = vec![
			QuoteRequest::from(classic_request()),
			QuoteRequest::from(classic_request()),
		];
		assert_eq!(
			RequestsByKind::from_requests(&requests).unwrap_err(),
			RequestError::DuplicateRoutingType(RoutingType::Classic)
		);
	}

	#[test]
	fn test_filled_slot_is_never_overwritten() {
		let mut slots = RequestSlots::with_original(classic_request());
		let mut first = classic_request();
		first.info.request_id = "first".to_string();
		let mut second = classic_request();
		second.info.request_id = "second".to_string();

		assert!(slots.insert_back_to_native(first.clone()));
		assert!(!slots.insert_back_to_native(second));
		assert_eq!(slots.back_to_native(), Some(&first));
		assert_eq!(slots.original(), Some(&classic_request()));
		assert_eq!(slots.injected().count(), 1);
	}
}
