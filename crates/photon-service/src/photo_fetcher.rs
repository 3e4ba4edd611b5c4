//! Upstream photo fetcher trait definition.

use photon_core::{FetchError, Interface, Photo};
use async_trait::async_trait;

/// Fetches the current photo collection from the upstream provider.
///
/// Implementations are stateless across calls; a single instance is shared
/// by every request.
#[async_trait]
pub trait PhotoFetcher: Interface + Send + Sync {
    /// Fetches and decodes the whole collection, preserving upstream order.
    async fn fetch(&self) -> Result<Vec<Photo>, FetchError>;
}
