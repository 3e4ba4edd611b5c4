//! Error types for the fetch and cache-aside retrieval paths.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure while fetching the collection from the upstream provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The upstream could not be reached or did not deliver a body
    /// (connection refused, DNS failure, timeout, non-success status).
    #[error("Upstream transport error: {0}")]
    Transport(String),

    /// The upstream answered but the body is not a photo collection.
    #[error("Upstream decode error: {0}")]
    Decode(String),
}

impl FetchError {
    /// Short label used for logs and metrics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Decode(_) => "decode",
        }
    }
}

/// Unified error type for Photon.
#[derive(Error, Debug)]
pub enum PhotonError {
    // ============ Retrieval Errors ============
    /// The cache store answered with something other than "not found".
    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),

    /// The cached payload does not deserialize into a photo collection.
    #[error("Corrupt cache entry: {0}")]
    CorruptCache(String),

    /// The upstream fetch failed.
    #[error("Upstream failed: {0}")]
    UpstreamFailed(#[from] FetchError),

    // ============ Infrastructure Errors ============
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PhotonError {
    /// Returns the HTTP status code for this error.
    ///
    /// Every retrieval failure surfaces as a server error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::CacheUnavailable(_)
            | Self::CorruptCache(_)
            | Self::UpstreamFailed(_)
            | Self::Configuration(_)
            | Self::Internal(_) => 500,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CacheUnavailable(_) => "CACHE_UNAVAILABLE",
            Self::CorruptCache(_) => "CORRUPT_CACHE",
            Self::UpstreamFailed(_) => "UPSTREAM_FAILED",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a cache unavailable error.
    #[must_use]
    pub fn cache_unavailable<T: Into<String>>(message: T) -> Self {
        Self::CacheUnavailable(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }
}

/// Serializable error body for API responses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ErrorResponse {
    /// Machine-readable error code
    #[serde(rename = "type")]
    pub kind: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new error response from a `PhotonError`.
    #[must_use]
    pub fn from_error(error: &PhotonError) -> Self {
        Self {
            kind: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&PhotonError> for ErrorResponse {
    fn from(error: &PhotonError) -> Self {
        Self::from_error(error)
    }
}
