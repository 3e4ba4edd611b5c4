//! OpenAPI documentation configuration.

use crate::controllers::HealthResponse;
use photon_core::{ErrorResponse, Photo};
use utoipa::OpenApi;

/// OpenAPI documentation for the Photon API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Photon API",
        version = "0.1.0",
        description = "Photo collection service with a cache-aside read path",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    paths(
        crate::controllers::photo_controller::list_photos,
        crate::controllers::photo_controller::list_photos_cached,
        crate::controllers::health_controller::health_check,
        crate::controllers::health_controller::readiness_check,
        crate::controllers::health_controller::liveness_check,
    ),
    components(schemas(Photo, ErrorResponse, HealthResponse)),
    tags(
        (name = "photos", description = "Photo collection endpoints"),
        (name = "health", description = "Health check endpoints")
    )
)]
pub struct ApiDoc;
