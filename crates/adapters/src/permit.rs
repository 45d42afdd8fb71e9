//! Permit data collaborator for route-based quotes

use async_trait::async_trait;
use routing_types::{AdapterResult, ClassicRequest, PermitData};
use std::fmt::Debug;

/// Supplies the token approval a classic quote needs to be executable
///
/// Returning `Ok(None)` means no permit is required, e.g. the swapper
/// already approved the router.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PermitFetcher: Send + Sync + Debug {
	async fn fetch_permit(&self, request: &ClassicRequest) -> AdapterResult<Option<PermitData>>;
}

/// Fetcher for deployments that do not attach permits
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPermitFetcher;

#[async_trait]
impl PermitFetcher for NoPermitFetcher {
	async fn fetch_permit(&self, _request: &ClassicRequest) -> AdapterResult<Option<PermitData>> {
		Ok(None)
	}
}
