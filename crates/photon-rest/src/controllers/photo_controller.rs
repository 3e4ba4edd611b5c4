//! Photo collection controller.

use crate::{
    responses::{ok, ApiResult},
    state::AppState,
};
use axum::{extract::State, routing::get, Router};
use photon_core::Photo;
use tracing::debug;

/// Creates the photo router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/photos", get(list_photos))
        .route("/photos/cache", get(list_photos_cached))
}

/// List the photo collection straight from the upstream.
#[utoipa::path(
    get,
    path = "/photos",
    tag = "photos",
    responses(
        (status = 200, description = "Collection fetched from the upstream, wrapped as {code, data}", body = [Photo]),
        (status = 500, description = "Upstream failure, wrapped as {code, error}", body = photon_core::ErrorResponse)
    )
)]
pub async fn list_photos(State(state): State<AppState>) -> ApiResult<Vec<Photo>> {
    debug!("List photos request");

    let photos = state.photo_service.list_photos().await?;
    ok(photos)
}

/// List the photo collection through the cache.
#[utoipa::path(
    get,
    path = "/photos/cache",
    tag = "photos",
    responses(
        (status = 200, description = "Collection from the cache or, on a miss, the upstream", body = [Photo]),
        (status = 500, description = "Cache unavailable, corrupt cache entry or upstream failure", body = photon_core::ErrorResponse)
    )
)]
pub async fn list_photos_cached(State(state): State<AppState>) -> ApiResult<Vec<Photo>> {
    debug!("List cached photos request");

    let photos = state.photo_service.list_photos_cached().await?;
    ok(photos)
}
