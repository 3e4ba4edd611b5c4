//! Photo service trait definition.

use photon_core::{Interface, Photo, PhotonResult};
use async_trait::async_trait;

/// Photo service trait.
#[async_trait]
pub trait PhotoService: Interface + Send + Sync {
    /// Lists the collection straight from the upstream, bypassing the cache.
    async fn list_photos(&self) -> PhotonResult<Vec<Photo>>;

    /// Lists the collection through the cache-aside path.
    ///
    /// Serves the cached copy when present; otherwise fetches from the
    /// upstream and writes the result back before returning it.
    async fn list_photos_cached(&self) -> PhotonResult<Vec<Photo>>;
}
