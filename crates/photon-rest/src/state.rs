//! Application state for Axum handlers.

use photon_service::{CacheInterface, PhotoService};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub photo_service: Arc<dyn PhotoService>,
    pub cache: Arc<dyn CacheInterface>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(photo_service: Arc<dyn PhotoService>, cache: Arc<dyn CacheInterface>) -> Self {
        Self {
            photo_service,
            cache,
        }
    }
}
