//! Cache-aside photo service implementation.

use crate::cache::{CacheExt, CacheInterface, DEFAULT_TTL};
use crate::photo_fetcher::PhotoFetcher;
use crate::photo_service::PhotoService;
use crate::telemetry::CacheMetrics;
use async_trait::async_trait;
use photon_core::{Photo, PhotonResult};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Key the whole collection is cached under unless configured otherwise.
pub const DEFAULT_CACHE_KEY: &str = "photos";

/// Photo service that serves the collection through a read-through cache.
///
/// Every call is a single attempt: one cache lookup, at most one upstream
/// fetch and one best-effort write-back. Concurrent misses may each fetch
/// and write the key; the last write wins.
#[derive(Component)]
#[shaku(interface = PhotoService)]
pub struct CacheAsidePhotoService {
    #[shaku(inject)]
    cache: Arc<dyn CacheInterface>,
    #[shaku(inject)]
    fetcher: Arc<dyn PhotoFetcher>,
    /// Key the collection is stored under.
    #[shaku(default = String::from(DEFAULT_CACHE_KEY))]
    cache_key: String,
    /// Entry lifetime; `None` stores without expiration.
    #[shaku(default = Some(DEFAULT_TTL))]
    ttl: Option<Duration>,
}

impl CacheAsidePhotoService {
    /// Creates a new photo service.
    pub fn new(
        cache: Arc<dyn CacheInterface>,
        fetcher: Arc<dyn PhotoFetcher>,
        cache_key: impl Into<String>,
        ttl: Option<Duration>,
    ) -> Self {
        Self {
            cache,
            fetcher,
            cache_key: cache_key.into(),
            ttl,
        }
    }

    /// Builds the DI parameters for this component.
    pub fn parameters(
        cache_key: impl Into<String>,
        ttl: Option<Duration>,
    ) -> CacheAsidePhotoServiceParameters {
        CacheAsidePhotoServiceParameters {
            cache_key: cache_key.into(),
            ttl,
        }
    }

    /// Writes the fetched collection back. Failures are logged, never returned.
    async fn write_back(&self, photos: &[Photo]) {
        match self.cache.set(&self.cache_key, &photos, self.ttl).await {
            Ok(()) => debug!(key = %self.cache_key, ttl = ?self.ttl, "Cached photo collection"),
            Err(e) => {
                CacheMetrics::write_failed();
                warn!(key = %self.cache_key, error = %e, "Failed to cache photo collection");
            }
        }
    }
}

#[async_trait]
impl PhotoService for CacheAsidePhotoService {
    async fn list_photos(&self) -> PhotonResult<Vec<Photo>> {
        debug!("Listing photos from upstream");

        let photos = self.fetcher.fetch().await?;
        Ok(photos)
    }

    async fn list_photos_cached(&self) -> PhotonResult<Vec<Photo>> {
        debug!(key = %self.cache_key, "Listing photos through cache");

        if let Some(cached) = self.cache.get::<Vec<Photo>>(&self.cache_key).await? {
            CacheMetrics::hit();
            debug!(count = cached.len(), "Cache hit for photo collection");
            return Ok(cached);
        }

        CacheMetrics::miss();
        debug!(key = %self.cache_key, "Cache miss for photo collection");

        let photos = self.fetcher.fetch().await?;

        self.write_back(&photos).await;

        info!(count = photos.len(), "Photo collection fetched from upstream");
        Ok(photos)
    }
}

impl std::fmt::Debug for CacheAsidePhotoService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheAsidePhotoService")
            .field("cache_key", &self.cache_key)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}
