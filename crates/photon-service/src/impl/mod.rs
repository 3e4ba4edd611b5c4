//! Service implementations.
//!
//! This module contains the concrete implementations of service traits.
//! Trait definitions live in the parent module (e.g. `photo_service.rs`).

pub mod http_photo_fetcher;
pub mod photo_service_impl;

pub use http_photo_fetcher::{HttpPhotoFetcher, HttpPhotoFetcherParameters};
pub use photo_service_impl::{
    CacheAsidePhotoService, CacheAsidePhotoServiceParameters, DEFAULT_CACHE_KEY,
};
