//! Application builder.

use crate::di::{build_module, CacheResolver, ServiceResolver};
use axum::{routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use photon_config::AppConfig;
use photon_core::{PhotonError, PhotonResult};
use photon_rest::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::info;

/// Application builder for constructing the server.
pub struct AppBuilder {
    config: Option<AppConfig>,
    metrics: Option<PrometheusHandle>,
}

impl AppBuilder {
    /// Creates a new application builder.
    pub fn new() -> Self {
        Self {
            config: None,
            metrics: None,
        }
    }

    /// Sets the configuration.
    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Exposes the given Prometheus recorder at the configured metrics path.
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }

    /// Wires the dependency module and builds the HTTP router.
    pub fn build(self) -> PhotonResult<Router> {
        let config = self.config.unwrap_or_default();
        let module = build_module(&config)?;

        let state = AppState::new(module.photo_service(), module.cache());
        let mut router = create_router(state, &config.server);

        if let Some(handle) = self.metrics {
            let path = config.observability.metrics_path.clone();
            info!(path = %path, "Prometheus metrics endpoint enabled");
            router = router.route(
                &path,
                get(move || {
                    let handle = handle.clone();
                    async move { handle.render() }
                }),
            );
        }

        Ok(router)
    }

    /// Builds the application and serves it until `shutdown` resolves.
    pub async fn run<F>(self, shutdown: F) -> PhotonResult<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.clone().unwrap_or_default().server.addr();
        let router = self.build()?;

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| PhotonError::internal(format!("Failed to bind {}: {}", addr, e)))?;

        info!("Starting REST server on http://{}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| PhotonError::internal(format!("REST server error: {}", e)))?;

        info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use tower::ServiceExt;

    fn config_without_redis() -> AppConfig {
        let mut config = AppConfig::default();
        config.redis.enabled = false;
        config
    }

    #[test]
    fn test_app_builder_new() {
        let builder = AppBuilder::new();
        assert!(builder.config.is_none());
        assert!(builder.metrics.is_none());
    }

    #[test]
    fn test_app_builder_with_config() {
        let builder = AppBuilder::default().with_config(config_without_redis());
        assert!(builder.config.is_some());
    }

    #[tokio::test]
    async fn test_built_router_serves_liveness() {
        let router = AppBuilder::new()
            .with_config(config_without_redis())
            .build()
            .unwrap();

        let response = router
            .oneshot(Request::builder().uri("/live").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_metrics_route_renders_recorder() {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        let router = AppBuilder::new()
            .with_config(config_without_redis())
            .with_metrics(handle)
            .build()
            .unwrap();

        let response = router
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert!(std::str::from_utf8(&body).is_ok());
    }

    #[tokio::test]
    async fn test_metrics_route_absent_without_handle() {
        let router = AppBuilder::new()
            .with_config(config_without_redis())
            .build()
            .unwrap();

        let response = router
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
