//! Dependency injection module using Shaku.
//!
//! `PhotonModule` wires the Redis cache, the upstream fetcher and the
//! cache-aside photo service. Component parameters come from [`AppConfig`].

use deadpool_redis::{Config as RedisPoolConfig, Pool, PoolConfig, Runtime};
use photon_config::{AppConfig, RedisConfig};
use photon_core::{PhotonError, PhotonResult};
use photon_service::{
    CacheAsidePhotoService, CacheInterface, HttpPhotoFetcher, PhotoService, RedisCacheService,
};
use shaku::{module, HasComponent};
use std::sync::Arc;
use tracing::{info, warn};

// ============================================================================
// Shaku Module Definition
// ============================================================================

module! {
    pub PhotonModule {
        components = [
            RedisCacheService,
            HttpPhotoFetcher,
            CacheAsidePhotoService,
        ],
        providers = [],
    }
}

// ============================================================================
// Module Builder
// ============================================================================

/// Builds the application module from configuration.
///
/// The Redis pool connects lazily, so this succeeds even when Redis is down.
pub fn build_module(config: &AppConfig) -> PhotonResult<Arc<PhotonModule>> {
    let cache_pool = create_redis_pool(&config.redis)?;
    let fetcher = HttpPhotoFetcher::parameters(&config.upstream.url, config.upstream.timeout())?;

    let module = PhotonModule::builder()
        .with_component_parameters::<RedisCacheService>(RedisCacheService::parameters(cache_pool))
        .with_component_parameters::<HttpPhotoFetcher>(fetcher)
        .with_component_parameters::<CacheAsidePhotoService>(CacheAsidePhotoService::parameters(
            &config.cache.key,
            config.cache.ttl(),
        ))
        .build();

    info!(
        upstream = %config.upstream.url,
        cache_key = %config.cache.key,
        ttl = ?config.cache.ttl(),
        "Dependency module built"
    );

    Ok(Arc::new(module))
}

/// Creates the Redis pool, or `None` when Redis is disabled.
fn create_redis_pool(redis_config: &RedisConfig) -> PhotonResult<Option<Arc<Pool>>> {
    if !redis_config.enabled {
        warn!("Redis disabled; cache reads always miss and writes are dropped");
        return Ok(None);
    }

    let mut pool_config = RedisPoolConfig::from_url(&redis_config.url);
    pool_config.pool = Some(PoolConfig::new(redis_config.pool_size));

    let pool = pool_config
        .create_pool(Some(Runtime::Tokio1))
        .map_err(|e| PhotonError::cache_unavailable(format!("Failed to create Redis pool: {}", e)))?;

    Ok(Some(Arc::new(pool)))
}

// ============================================================================
// Resolver Traits
// ============================================================================

/// Trait for resolving service components.
pub trait ServiceResolver {
    /// Resolves the photo service from the module.
    fn photo_service(&self) -> Arc<dyn PhotoService>;
}

impl ServiceResolver for PhotonModule {
    fn photo_service(&self) -> Arc<dyn PhotoService> {
        self.resolve()
    }
}

/// Trait for resolving cache components.
pub trait CacheResolver {
    /// Resolves the cache interface from the module.
    fn cache(&self) -> Arc<dyn CacheInterface>;
}

impl CacheResolver for PhotonModule {
    fn cache(&self) -> Arc<dyn CacheInterface> {
        self.resolve()
    }
}
