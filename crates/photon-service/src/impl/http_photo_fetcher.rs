//! HTTP client for the upstream photo provider.

use crate::photo_fetcher::PhotoFetcher;
use crate::telemetry::UpstreamMetrics;
use async_trait::async_trait;
use photon_core::{FetchError, Photo, PhotonError, PhotonResult};
use reqwest::Client;
use shaku::Component;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Fetches the photo collection with a single GET against a fixed URL.
#[derive(Component)]
#[shaku(interface = PhotoFetcher)]
pub struct HttpPhotoFetcher {
    /// Shared HTTP client.
    client: Client,
    /// Collection resource URL.
    url: String,
}

impl HttpPhotoFetcher {
    /// Creates a fetcher with its own client and request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> PhotonResult<Self> {
        Ok(Self::with_client(build_client(timeout)?, url))
    }

    /// Creates a fetcher around an existing client.
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    /// Builds the DI parameters for this component.
    pub fn parameters(
        url: impl Into<String>,
        timeout: Duration,
    ) -> PhotonResult<HttpPhotoFetcherParameters> {
        Ok(HttpPhotoFetcherParameters {
            client: build_client(timeout)?,
            url: url.into(),
        })
    }

    /// Returns the collection URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request(&self) -> Result<Vec<Photo>, FetchError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Transport(format!(
                "upstream returned status {}",
                status
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl PhotoFetcher for HttpPhotoFetcher {
    async fn fetch(&self) -> Result<Vec<Photo>, FetchError> {
        debug!(url = %self.url, "Fetching photos from upstream");
        let start = Instant::now();

        let result = self.request().await;

        let outcome = match &result {
            Ok(photos) => {
                debug!(count = photos.len(), "Upstream returned photos");
                "success"
            }
            Err(e) => {
                warn!(url = %self.url, error = %e, "Upstream fetch failed");
                e.kind()
            }
        };
        UpstreamMetrics::request(outcome, start.elapsed());

        result
    }
}

impl std::fmt::Debug for HttpPhotoFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPhotoFetcher")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

fn build_client(timeout: Duration) -> PhotonResult<Client> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| PhotonError::internal(format!("Failed to create HTTP client: {}", e)))
}
