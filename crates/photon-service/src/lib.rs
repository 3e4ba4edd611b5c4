//! # Photon Service
//!
//! Service layer for Photon.
//! Contains the upstream photo fetcher, the cache store abstraction and the
//! cache-aside retrieval of the photo collection.

pub mod cache;
pub mod r#impl;
pub mod telemetry;
pub mod photo_fetcher;
pub mod photo_service;

pub use cache::*;
pub use photo_fetcher::*;
pub use photo_service::*;
pub use r#impl::{
    CacheAsidePhotoService, CacheAsidePhotoServiceParameters, HttpPhotoFetcher,
    HttpPhotoFetcherParameters, DEFAULT_CACHE_KEY,
};
pub use telemetry::register_metrics;
