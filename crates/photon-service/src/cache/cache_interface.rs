//! Cache interface trait for abstracted caching operations.

use photon_core::{Interface, PhotonError, PhotonResult};
use async_trait::async_trait;
use std::time::Duration;

/// Cache interface for storing and retrieving cached data.
///
/// Uses JSON strings for type-erased storage to maintain dyn-compatibility.
/// A missing key is `Ok(None)`; every other store failure is an error.
#[async_trait]
pub trait CacheInterface: Interface + Send + Sync {
    /// Get a raw JSON value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> PhotonResult<Option<String>>;

    /// Set a raw JSON value in the cache.
    ///
    /// With `ttl = None` the entry is stored without expiration.
    async fn set_raw(&self, key: &str, value: &str, ttl: Option<Duration>) -> PhotonResult<()>;

    /// Check that the store answers.
    async fn ping(&self) -> PhotonResult<()>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
#[async_trait]
pub trait CacheExt: CacheInterface {
    /// Get a typed value from the cache.
    ///
    /// An empty payload counts as absent. A payload that does not decode
    /// into `T` is reported as [`PhotonError::CorruptCache`].
    async fn get<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> PhotonResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) if !json.is_empty() => serde_json::from_str(&json)
                .map(Some)
                .map_err(|e| PhotonError::CorruptCache(format!("key '{}': {}", key, e))),
            _ => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync>(
        &self,
        key: &str,
        value: &T,
        ttl: Option<Duration>,
    ) -> PhotonResult<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| PhotonError::internal(format!("JSON serialization error: {}", e)))?;
        self.set_raw(key, &json, ttl).await
    }
}

// Blanket implementation for all CacheInterface implementations
impl<T: CacheInterface + ?Sized> CacheExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use photon_core::Photo;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapCache {
        entries: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl CacheInterface for MapCache {
        async fn get_raw(&self, key: &str) -> PhotonResult<Option<String>> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        async fn set_raw(&self, key: &str, value: &str, _ttl: Option<Duration>) -> PhotonResult<()> {
            self.entries
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }

        async fn ping(&self) -> PhotonResult<()> {
            Ok(())
        }

        fn is_enabled(&self) -> bool {
            true
        }
    }

    #[tokio::test]
    async fn test_typed_roundtrip() {
        let cache = MapCache::default();
        let photos = vec![Photo::new(1, 1, "t", "u", "tu")];

        cache.set("photos", &photos, None).await.unwrap();
        let cached: Option<Vec<Photo>> = cache.get("photos").await.unwrap();

        assert_eq!(cached, Some(photos));
    }

    #[tokio::test]
    async fn test_missing_and_empty_are_absent() {
        let cache = MapCache::default();
        cache.set_raw("empty", "", None).await.unwrap();

        assert!(cache.get::<Vec<Photo>>("missing").await.unwrap().is_none());
        assert!(cache.get::<Vec<Photo>>("empty").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_undecodable_payload_is_corrupt() {
        let cache = MapCache::default();
        cache.set_raw("photos", "{not json", None).await.unwrap();

        let result = cache.get::<Vec<Photo>>("photos").await;

        assert!(matches!(result, Err(PhotonError::CorruptCache(_))));
    }
}
