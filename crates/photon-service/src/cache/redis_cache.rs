//! Redis-based cache implementation.

use super::CacheInterface;
use photon_core::{PhotonError, PhotonResult};
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use shaku::Component;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Default TTL for cached items (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Redis-based cache service.
#[derive(Component)]
#[shaku(interface = CacheInterface)]
pub struct RedisCacheService {
    /// Redis connection pool.
    pool: Option<Arc<Pool>>,
}

impl RedisCacheService {
    /// Create a new Redis cache service.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a no-op cache service (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Builds the DI parameters for this component.
    #[must_use]
    pub fn parameters(pool: Option<Arc<Pool>>) -> RedisCacheServiceParameters {
        RedisCacheServiceParameters { pool }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> PhotonResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                PhotonError::cache_unavailable(format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(PhotonError::cache_unavailable("Cache is disabled")),
        }
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> PhotonResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn().await?;
        let bytes: Option<Vec<u8>> = conn.get(key).await.map_err(|e| {
            PhotonError::cache_unavailable(format!("Failed to get key '{}': {}", key, e))
        })?;

        match &bytes {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        decode_payload(key, bytes)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Option<Duration>) -> PhotonResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;

        match ttl {
            Some(ttl) => {
                let ttl_secs = ttl.as_secs().max(1);
                conn.set_ex::<_, _, ()>(key, value, ttl_secs).await.map_err(|e| {
                    PhotonError::cache_unavailable(format!("Failed to set key '{}': {}", key, e))
                })?;
                debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
            }
            None => {
                conn.set::<_, _, ()>(key, value).await.map_err(|e| {
                    PhotonError::cache_unavailable(format!("Failed to set key '{}': {}", key, e))
                })?;
                debug!("Cached key '{}' without expiration", key);
            }
        }

        Ok(())
    }

    async fn ping(&self) -> PhotonResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn().await?;
        let _: String = deadpool_redis::redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| PhotonError::cache_unavailable(format!("Ping failed: {}", e)))?;

        Ok(())
    }
}

/// Turns a stored payload into text. Bytes that are not UTF-8 are a corrupt entry.
fn decode_payload(key: &str, bytes: Option<Vec<u8>>) -> PhotonResult<Option<String>> {
    bytes
        .map(|bytes| {
            String::from_utf8(bytes).map_err(|e| {
                PhotonError::CorruptCache(format!("key '{}': payload is not UTF-8: {}", key, e))
            })
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_cache() {
        let cache = RedisCacheService::disabled();
        assert!(!cache.is_enabled());
    }

    #[tokio::test]
    async fn test_disabled_cache_reports_every_key_missing() {
        let cache = RedisCacheService::disabled();

        cache.set_raw("photos", "[]", Some(DEFAULT_TTL)).await.unwrap();

        assert!(cache.get_raw("photos").await.unwrap().is_none());
        assert!(cache.ping().await.is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_redis_is_unavailable() {
        let pool = deadpool_redis::Config::from_url("redis://127.0.0.1:1")
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .unwrap();
        let cache = RedisCacheService::new(Arc::new(pool));

        let result = cache.get_raw("photos").await;

        assert!(matches!(result, Err(PhotonError::CacheUnavailable(_))));
    }

    #[test]
    fn test_decode_payload() {
        assert_eq!(decode_payload("photos", None).unwrap(), None);
        assert_eq!(
            decode_payload("photos", Some(b"[]".to_vec())).unwrap(),
            Some("[]".to_string())
        );
        assert!(matches!(
            decode_payload("photos", Some(vec![0xff, 0xfe])),
            Err(PhotonError::CorruptCache(_))
        ));
    }

    /// Minimal RESP server: answers `GET` with `payload` and everything else with `+OK`.
    async fn spawn_resp_server(payload: &'static [u8]) -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};
        use tokio::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                tokio::spawn(async move {
                    let mut buffer = Vec::new();
                    let mut chunk = [0u8; 1024];
                    loop {
                        let n = match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => n,
                        };
                        buffer.extend_from_slice(&chunk[..n]);

                        while let Some((command, consumed)) = parse_command(&buffer) {
                            buffer.drain(..consumed);
                            let reply = if command.eq_ignore_ascii_case(b"GET") {
                                let mut reply = format!("${}\r\n", payload.len()).into_bytes();
                                reply.extend_from_slice(payload);
                                reply.extend_from_slice(b"\r\n");
                                reply
                            } else {
                                b"+OK\r\n".to_vec()
                            };
                            if socket.write_all(&reply).await.is_err() {
                                return;
                            }
                        }
                    }
                });
            }
        });

        format!("redis://{}", addr)
    }

    /// Parses one RESP array of bulk strings, returning its first element and
    /// the number of bytes it spans.
    fn parse_command(buffer: &[u8]) -> Option<(Vec<u8>, usize)> {
        fn line(buffer: &[u8], start: usize) -> Option<(&[u8], usize)> {
            let end = buffer[start..].windows(2).position(|w| w == b"\r\n")? + start;
            Some((&buffer[start..end], end + 2))
        }

        let (header, mut pos) = line(buffer, 0)?;
        let count: usize = std::str::from_utf8(header.strip_prefix(b"*")?).ok()?.parse().ok()?;
        let mut first = None;
        for _ in 0..count {
            let (len_line, next) = line(buffer, pos)?;
            let len: usize = std::str::from_utf8(len_line.strip_prefix(b"$")?).ok()?.parse().ok()?;
            if buffer.len() < next + len + 2 {
                return None;
            }
            if first.is_none() {
                first = Some(buffer[next..next + len].to_vec());
            }
            pos = next + len + 2;
        }
        Some((first?, pos))
    }

    #[tokio::test]
    async fn test_non_utf8_payload_is_corrupt_cache() {
        let url = spawn_resp_server(b"\xff\xfe").await;
        let pool = deadpool_redis::Config::from_url(url)
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .unwrap();
        let cache = RedisCacheService::new(Arc::new(pool));

        let result = cache.get_raw("photos").await;

        assert!(matches!(result, Err(PhotonError::CorruptCache(_))));
    }

    #[tokio::test]
    async fn test_utf8_payload_is_returned() {
        let url = spawn_resp_server(b"[]").await;
        let pool = deadpool_redis::Config::from_url(url)
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .unwrap();
        let cache = RedisCacheService::new(Arc::new(pool));

        assert_eq!(cache.get_raw("photos").await.unwrap(), Some("[]".to_string()));
    }
}
